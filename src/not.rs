use super::parser::{ParseResult, Parser};

/// Parser combinator that performs negative lookahead
///
/// Succeeds if the given parser fails at the current position.
/// Fails if the given parser succeeds.
/// Never consumes any input regardless of outcome, and never lets the wrapped
/// parser write a capture.
pub struct Not<P> {
    parser: P,
}

impl<P> Not<P> {
    pub fn new(parser: P) -> Self {
        Not { parser }
    }
}

impl<P: Parser> Parser for Not<P> {
    fn parse<'code>(&self, input: &'code [u8]) -> ParseResult<'code> {
        let (matched, _) = self.parser.recognize(input);
        (!matched, input)
    }

    fn recognize<'code>(&self, input: &'code [u8]) -> ParseResult<'code> {
        self.parse(input)
    }
}

/// Convenience function to create a Not parser for negative lookahead
pub fn not<P: Parser>(parser: P) -> Not<P> {
    Not::new(parser)
}

/// Extension trait to add .not() method support for parsers
pub trait NotExt: Parser + Sized {
    fn not(self) -> Not<Self> {
        Not::new(self)
    }
}

/// Implement NotExt for all parsers
impl<P> NotExt for P where P: Parser {}
