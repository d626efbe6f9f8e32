use std::rc::Rc;

/// Outcome of applying a parser: whether it matched, and the input left over.
///
/// On failure the remainder is always the exact slice the parser was given.
/// On success it is a suffix of that slice.
pub type ParseResult<'code> = (bool, &'code [u8]);

/// Core parser trait for parser combinators
pub trait Parser {
    /// Attempt to consume a prefix of `input`
    ///
    /// Returns `(true, remainder)` on success, or `(false, input)` on failure.
    /// Failures never consume input.
    fn parse<'code>(&self, input: &'code [u8]) -> ParseResult<'code>;

    /// Same match as [`Parser::parse`], but without writing any captures
    ///
    /// Lookahead uses this so that a wrapped capturing parser leaves its
    /// destination untouched. Parsers without captures return `self.parse(input)`;
    /// capturing parsers must match without touching their destination, and
    /// combinators forward it to their children.
    fn recognize<'code>(&self, input: &'code [u8]) -> ParseResult<'code>;

    /// Apply the parser to text
    ///
    /// A match that would end inside a multi-byte character is reported as a
    /// failure, since the remainder could not be expressed as a `&str`.
    fn parse_str<'code>(&self, input: &'code str) -> (bool, &'code str) {
        let (matched, remainder) = self.parse(input.as_bytes());
        let consumed = input.len() - remainder.len();
        if matched && input.is_char_boundary(consumed) {
            (true, &input[consumed..])
        } else {
            (false, input)
        }
    }
}

impl<P: Parser + ?Sized> Parser for &P {
    fn parse<'code>(&self, input: &'code [u8]) -> ParseResult<'code> {
        (**self).parse(input)
    }

    fn recognize<'code>(&self, input: &'code [u8]) -> ParseResult<'code> {
        (**self).recognize(input)
    }
}

impl<P: Parser + ?Sized> Parser for Box<P> {
    fn parse<'code>(&self, input: &'code [u8]) -> ParseResult<'code> {
        (**self).parse(input)
    }

    fn recognize<'code>(&self, input: &'code [u8]) -> ParseResult<'code> {
        (**self).recognize(input)
    }
}

impl<P: Parser + ?Sized> Parser for Rc<P> {
    fn parse<'code>(&self, input: &'code [u8]) -> ParseResult<'code> {
        (**self).parse(input)
    }

    fn recognize<'code>(&self, input: &'code [u8]) -> ParseResult<'code> {
        (**self).recognize(input)
    }
}

/// Box a parser as a trait object, for building `Or` and `Seq` children lists
pub fn boxed<'p>(parser: impl Parser + 'p) -> Box<dyn Parser + 'p> {
    Box::new(parser)
}
