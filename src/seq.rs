use super::parser::{ParseResult, Parser, boxed};
use log::trace;

/// Parser combinator that applies parsers one after another
///
/// Each parser consumes from what its predecessor left. The sequence commits
/// only if every parser succeeds; otherwise it fails and hands back the input
/// it was given, not the partial remainder. Captures written by parsers that
/// succeeded before the failing one are not undone.
///
/// An empty sequence always succeeds without consuming anything.
///
/// Example:
/// ```
/// use tinyparsec::{Parser, literal, seq, WhiteSpace};
///
/// let greeting = seq![literal("hello"), WhiteSpace, literal("world")];
/// assert_eq!(greeting.parse(b"hello   world!"), (true, &b"!"[..]));
/// assert_eq!(greeting.parse(b"hello there"), (false, &b"hello there"[..]));
/// ```
pub struct Seq<'p> {
    parsers: Vec<Box<dyn Parser + 'p>>,
}

impl<'p> Seq<'p> {
    pub fn new(parsers: Vec<Box<dyn Parser + 'p>>) -> Self {
        Seq { parsers }
    }

    /// Append one more parser to the end of the sequence
    pub fn push(mut self, parser: impl Parser + 'p) -> Self {
        self.parsers.push(boxed(parser));
        self
    }

    fn attempt<'code>(
        &self,
        input: &'code [u8],
        apply: impl Fn(&dyn Parser, &'code [u8]) -> ParseResult<'code>,
    ) -> ParseResult<'code> {
        let mut remainder = input;
        for (index, parser) in self.parsers.iter().enumerate() {
            let (matched, rest) = apply(parser.as_ref(), remainder);
            if !matched {
                trace!(
                    "seq: step {} of {} failed after {} bytes, backtracking",
                    index + 1,
                    self.parsers.len(),
                    input.len() - remainder.len()
                );
                return (false, input);
            }
            remainder = rest;
        }
        (true, remainder)
    }
}

impl Parser for Seq<'_> {
    fn parse<'code>(&self, input: &'code [u8]) -> ParseResult<'code> {
        self.attempt(input, |parser, input| parser.parse(input))
    }

    fn recognize<'code>(&self, input: &'code [u8]) -> ParseResult<'code> {
        self.attempt(input, |parser, input| parser.recognize(input))
    }
}

/// Convenience function to create a Seq parser from two parsers
pub fn seq<'p>(parser1: impl Parser + 'p, parser2: impl Parser + 'p) -> Seq<'p> {
    Seq::new(vec![boxed(parser1), boxed(parser2)])
}

/// Extension trait to add .then() method support for parsers
pub trait SeqExt<'p>: Parser + Sized + 'p {
    fn then(self, next: impl Parser + 'p) -> Seq<'p> {
        seq(self, next)
    }
}

/// Implement SeqExt for all parsers
impl<'p, P> SeqExt<'p> for P where P: Parser + 'p {}

/// Build a [`Seq`] from any number of parsers
#[macro_export]
macro_rules! seq {
    ($($parser:expr),* $(,)?) => {
        $crate::seq::Seq::new(::std::vec![$($crate::parser::boxed($parser)),*])
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ascii::number::Number;
    use crate::byte::{is_byte, range};
    use crate::literal::literal;
    use std::cell::Cell;

    #[test]
    fn test_seq_both_succeed() {
        let parser = seq(is_byte(b'A'), is_byte(b'5'));
        assert_eq!(parser.parse(b"A5xyz"), (true, &b"xyz"[..]));
    }

    #[test]
    fn test_seq_first_fails() {
        let data = b"Bxyz";
        let parser = seq(is_byte(b'A'), is_byte(b'x'));
        assert_eq!(parser.parse(data), (false, &data[..]));
    }

    #[test]
    fn test_seq_second_fails_restores_input() {
        let data = b"abd";
        let parser = seq(literal("ab"), literal("c"));
        assert_eq!(parser.parse(data), (false, &data[..]));
    }

    #[test]
    fn test_seq_empty_always_succeeds() {
        let parser = crate::seq![];
        assert_eq!(parser.parse(b"abc"), (true, &b"abc"[..]));
        assert_eq!(parser.parse(b""), (true, &b""[..]));
    }

    #[test]
    fn test_seq_method_chain() {
        let parser = is_byte(b'A').then(is_byte(b'5')).then(is_byte(b'B'));
        assert_eq!(parser.parse(b"A5B"), (true, &b""[..]));
    }

    #[test]
    fn test_seq_macro_and_push() {
        let digit = range(b'0', b'9');
        let parser = crate::seq![&digit, &digit].push(is_byte(b'!'));

        assert_eq!(parser.parse(b"42!?"), (true, &b"?"[..]));
        assert_eq!(parser.parse(b"42?"), (false, &b"42?"[..]));
    }

    #[test]
    fn test_seq_nested_failure_restores_outer_input() {
        let inner = seq(is_byte(b'b'), is_byte(b'c'));
        let parser = seq(is_byte(b'a'), inner);
        let data = b"abX";

        assert_eq!(parser.parse(data), (false, &data[..]));
    }

    #[test]
    fn test_seq_does_not_roll_back_captures() {
        let slot = Cell::new(0);
        let parser = seq(Number::new(&slot), literal("ms"));

        assert_eq!(parser.parse(b"15s"), (false, &b"15s"[..]));
        assert_eq!(slot.get(), 15);

        assert_eq!(parser.parse(b"20ms"), (true, &b""[..]));
        assert_eq!(slot.get(), 20);
    }

    #[test]
    fn test_seq_recognize_skips_captures() {
        let slot = Cell::new(0);
        let parser = seq(Number::new(&slot), literal("ms"));

        assert_eq!(parser.recognize(b"20ms"), (true, &b""[..]));
        assert_eq!(slot.get(), 0);
    }
}
