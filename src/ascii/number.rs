use crate::byte::is_byte;
use crate::or::Or;
use crate::parser::{ParseResult, Parser};
use log::trace;
use std::cell::Cell;

/// Parser that matches a single ASCII digit, as ten alternative bytes
pub fn digit() -> Or<'static> {
    (b'0'..=b'9').fold(Or::new(Vec::new()), |digits, d| digits.push(is_byte(d)))
}

/// Capturing parser that reads a run of ASCII digits as a `u64`
///
/// Succeeds when at least one digit is consumed, and writes the value into
/// the caller's slot. On failure the slot is not written. A run whose value
/// does not fit in a `u64` fails.
///
/// ```
/// use std::cell::Cell;
/// use tinyparsec::{Number, Parser};
///
/// let count = Cell::new(0);
/// assert_eq!(Number::new(&count).parse(b"41 allocs/op"), (true, &b" allocs/op"[..]));
/// assert_eq!(count.get(), 41);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Number<'slot> {
    slot: &'slot Cell<u64>,
    width: Option<usize>,
}

impl<'slot> Number<'slot> {
    /// Match as many digits as are present
    pub fn new(slot: &'slot Cell<u64>) -> Self {
        Number { slot, width: None }
    }

    /// Match exactly `width` digits; further digits are left in the remainder
    pub fn fixed(slot: &'slot Cell<u64>, width: usize) -> Self {
        Number {
            slot,
            width: Some(width),
        }
    }

    fn scan<'code>(&self, input: &'code [u8]) -> Option<(u64, &'code [u8])> {
        let limit = self.width.unwrap_or(input.len());
        let run = input
            .iter()
            .take(limit)
            .take_while(|byte| byte.is_ascii_digit())
            .count();
        if run == 0 || self.width.is_some_and(|width| run < width) {
            return None;
        }

        let (digits, rest) = input.split_at(run);
        let value = digits.iter().try_fold(0u64, |acc, &digit| {
            acc.checked_mul(10)?.checked_add(u64::from(digit - b'0'))
        })?;
        Some((value, rest))
    }
}

impl Parser for Number<'_> {
    fn parse<'code>(&self, input: &'code [u8]) -> ParseResult<'code> {
        match self.scan(input) {
            Some((value, rest)) => {
                trace!("number: captured {}", value);
                self.slot.set(value);
                (true, rest)
            }
            None => (false, input),
        }
    }

    fn recognize<'code>(&self, input: &'code [u8]) -> ParseResult<'code> {
        match self.scan(input) {
            Some((_, rest)) => (true, rest),
            None => (false, input),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits() {
        let parser = digit();

        for byte in b'0'..=b'9' {
            let data = [byte];
            assert_eq!(parser.parse(&data), (true, &b""[..]), "failed for {}", byte as char);
        }
        assert_eq!(parser.parse(b"a"), (false, &b"a"[..]));
        assert_eq!(parser.parse(b"/"), (false, &b"/"[..]));
    }

    #[test]
    fn test_number_single_digit() {
        let slot = Cell::new(0);

        assert_eq!(Number::new(&slot).parse(b"5abc"), (true, &b"abc"[..]));
        assert_eq!(slot.get(), 5);
    }

    #[test]
    fn test_number_multiple_digits() {
        let slot = Cell::new(0);

        assert_eq!(Number::new(&slot).parse(b"823032 bytes/op"), (true, &b" bytes/op"[..]));
        assert_eq!(slot.get(), 823032);
    }

    #[test]
    fn test_number_zero_is_captured() {
        let slot = Cell::new(99);

        assert_eq!(Number::new(&slot).parse(b"0"), (true, &b""[..]));
        assert_eq!(slot.get(), 0);
    }

    #[test]
    fn test_number_leading_zeros() {
        let slot = Cell::new(0);

        assert_eq!(Number::new(&slot).parse(b"007x"), (true, &b"x"[..]));
        assert_eq!(slot.get(), 7);
    }

    #[test]
    fn test_number_no_digits_leaves_slot() {
        let slot = Cell::new(13);
        let data = b"abc";

        assert_eq!(Number::new(&slot).parse(data), (false, &data[..]));
        assert_eq!(slot.get(), 13);
    }

    #[test]
    fn test_number_max_value() {
        let slot = Cell::new(0);

        assert_eq!(Number::new(&slot).parse(b"18446744073709551615"), (true, &b""[..]));
        assert_eq!(slot.get(), u64::MAX);
    }

    #[test]
    fn test_number_overflow_fails() {
        let slot = Cell::new(1);
        let data = b"18446744073709551616";

        assert_eq!(Number::new(&slot).parse(data), (false, &data[..]));
        assert_eq!(slot.get(), 1);
    }

    #[test]
    fn test_number_fixed_width() {
        let slot = Cell::new(0);
        let year = Number::fixed(&slot, 4);

        assert_eq!(year.parse(b"20211023"), (true, &b"1023"[..]));
        assert_eq!(slot.get(), 2021);
    }

    #[test]
    fn test_number_fixed_width_too_short() {
        let slot = Cell::new(0);
        let data = b"202-";

        assert_eq!(Number::fixed(&slot, 4).parse(data), (false, &data[..]));
        assert_eq!(slot.get(), 0);
    }

    #[test]
    fn test_number_recognize_does_not_write() {
        let slot = Cell::new(3);

        assert_eq!(Number::new(&slot).recognize(b"42"), (true, &b""[..]));
        assert_eq!(slot.get(), 3);
    }

    #[test]
    fn test_number_rewrites_on_reuse() {
        let slot = Cell::new(0);
        let parser = Number::new(&slot);

        parser.parse(b"1");
        parser.parse(b"2");
        assert_eq!(slot.get(), 2);
    }
}
