use super::parser::{ParseResult, Parser};

/// Parser that matches a specific byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Byte {
    expected: u8,
}

impl Byte {
    pub const fn new(expected: u8) -> Self {
        Byte { expected }
    }
}

impl Parser for Byte {
    fn parse<'code>(&self, input: &'code [u8]) -> ParseResult<'code> {
        match input.split_first() {
            Some((&byte, rest)) if byte == self.expected => (true, rest),
            _ => (false, input),
        }
    }

    fn recognize<'code>(&self, input: &'code [u8]) -> ParseResult<'code> {
        self.parse(input)
    }
}

/// Parser that matches a byte within a range (inclusive)
///
/// A range whose start lies above its end is empty and never matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    start: u8,
    end: u8,
}

impl Range {
    pub const fn new(start: u8, end: u8) -> Self {
        Range { start, end }
    }
}

impl Parser for Range {
    fn parse<'code>(&self, input: &'code [u8]) -> ParseResult<'code> {
        match input.split_first() {
            Some((&byte, rest)) if (self.start..=self.end).contains(&byte) => (true, rest),
            _ => (false, input),
        }
    }

    fn recognize<'code>(&self, input: &'code [u8]) -> ParseResult<'code> {
        self.parse(input)
    }
}

/// Convenience function to create a Byte parser
pub fn is_byte(expected: u8) -> Byte {
    Byte::new(expected)
}

/// Convenience function to create a Range parser
pub fn range(start: u8, end: u8) -> Range {
    Range::new(start, end)
}
