use crate::byte::{Range, range};
use crate::or::Or;
use crate::parser::{ParseResult, Parser};

const LOWER: Range = Range::new(b'a', b'z');
const UPPER: Range = Range::new(b'A', b'Z');

/// Parser that matches a single ASCII letter, lower or upper case
pub fn letter() -> Or<'static> {
    crate::or![range(b'a', b'z'), range(b'A', b'Z')]
}

fn one_letter(input: &[u8]) -> ParseResult<'_> {
    match LOWER.parse(input) {
        (true, rest) => (true, rest),
        (false, _) => UPPER.parse(input),
    }
}

/// Parser that matches one or more ASCII letters, as many as are present
///
/// Defined in terms of itself: one letter followed by a non-letter ends the
/// identifier, otherwise one letter followed by another identifier. Each
/// letter costs one stack frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Identifier;

impl Parser for Identifier {
    fn parse<'code>(&self, input: &'code [u8]) -> ParseResult<'code> {
        let (matched, rest) = one_letter(input);
        if !matched {
            return (false, input);
        }
        if !one_letter(rest).0 {
            return (true, rest);
        }

        match Identifier.parse(rest) {
            (true, rest) => (true, rest),
            (false, _) => (false, input),
        }
    }

    fn recognize<'code>(&self, input: &'code [u8]) -> ParseResult<'code> {
        self.parse(input)
    }
}
