use crate::parser::{ParseResult, Parser};
use std::borrow::Cow;

/// Parser that matches an exact string byte for byte
///
/// The empty literal always succeeds without consuming anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Literal {
    expected: Cow<'static, str>,
}

impl Literal {
    pub fn new(expected: impl Into<Cow<'static, str>>) -> Self {
        Self {
            expected: expected.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.expected
    }
}

impl Parser for Literal {
    fn parse<'code>(&self, input: &'code [u8]) -> ParseResult<'code> {
        match input.strip_prefix(self.expected.as_bytes()) {
            Some(rest) => (true, rest),
            None => (false, input),
        }
    }

    fn recognize<'code>(&self, input: &'code [u8]) -> ParseResult<'code> {
        self.parse(input)
    }
}

/// Convenience function to create a Literal parser
pub fn literal(expected: impl Into<Cow<'static, str>>) -> Literal {
    Literal::new(expected)
}
