use super::parser::{ParseResult, Parser, boxed};
use log::trace;

/// Parser combinator that tries each alternative in order on the same input
///
/// The first alternative that succeeds wins and later ones are never tried.
/// With no alternatives it always fails.
pub struct Or<'p> {
    parsers: Vec<Box<dyn Parser + 'p>>,
}

impl<'p> Or<'p> {
    pub fn new(parsers: Vec<Box<dyn Parser + 'p>>) -> Self {
        Or { parsers }
    }

    /// Append one more alternative, tried after the existing ones
    pub fn push(mut self, parser: impl Parser + 'p) -> Self {
        self.parsers.push(boxed(parser));
        self
    }

    fn attempt<'code>(
        &self,
        input: &'code [u8],
        apply: impl Fn(&dyn Parser, &'code [u8]) -> ParseResult<'code>,
    ) -> ParseResult<'code> {
        for parser in &self.parsers {
            let (matched, rest) = apply(parser.as_ref(), input);
            if matched {
                return (true, rest);
            }
        }
        trace!("or: all {} alternatives failed", self.parsers.len());
        (false, input)
    }
}

impl Parser for Or<'_> {
    fn parse<'code>(&self, input: &'code [u8]) -> ParseResult<'code> {
        self.attempt(input, |parser, input| parser.parse(input))
    }

    fn recognize<'code>(&self, input: &'code [u8]) -> ParseResult<'code> {
        self.attempt(input, |parser, input| parser.recognize(input))
    }
}

/// Convenience function to create an Or parser from two alternatives
pub fn or<'p>(parser1: impl Parser + 'p, parser2: impl Parser + 'p) -> Or<'p> {
    Or::new(vec![boxed(parser1), boxed(parser2)])
}

/// Extension trait to add .or() method support for parsers
pub trait OrExt<'p>: Parser + Sized + 'p {
    fn or(self, other: impl Parser + 'p) -> Or<'p> {
        or(self, other)
    }
}

/// Implement OrExt for all parsers
impl<'p, P> OrExt<'p> for P where P: Parser + 'p {}

/// Build an [`Or`] from any number of alternatives
///
/// ```
/// use tinyparsec::{Parser, is_byte, or};
///
/// let sign = or![is_byte(b'+'), is_byte(b'-')];
/// assert_eq!(sign.parse(b"-1"), (true, &b"1"[..]));
/// ```
#[macro_export]
macro_rules! or {
    ($($parser:expr),* $(,)?) => {
        $crate::or::Or::new(::std::vec![$($crate::parser::boxed($parser)),*])
    };
}
