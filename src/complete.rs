use crate::error::ParseError;
use crate::parser::Parser;
use log::debug;

/// Run `parser` over `input` and require that it consumes all of it
pub fn parse_complete<P: Parser + ?Sized>(parser: &P, input: &[u8]) -> Result<(), ParseError> {
    let (matched, remainder) = parser.parse(input);
    if !matched {
        debug!("parse_complete: no match on {} bytes", input.len());
        return Err(ParseError::NoMatch);
    }
    if !remainder.is_empty() {
        let consumed = input.len() - remainder.len();
        debug!(
            "parse_complete: {} bytes consumed, {} left over",
            consumed,
            remainder.len()
        );
        return Err(ParseError::TrailingInput {
            consumed,
            remaining: remainder.len(),
        });
    }
    Ok(())
}
