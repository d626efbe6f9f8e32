use crate::parser::{ParseResult, Parser};

/// Parser that consumes a run of space characters (b' ')
///
/// The run is greedy, but the parser only reports success when at least one
/// space was consumed. With no leading space it fails and returns the input
/// unchanged. Tabs and newlines are not whitespace here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WhiteSpace;

impl Parser for WhiteSpace {
    fn parse<'code>(&self, input: &'code [u8]) -> ParseResult<'code> {
        let run = input.iter().take_while(|&&byte| byte == b' ').count();
        if run == 0 {
            return (false, input);
        }
        (true, &input[run..])
    }

    fn recognize<'code>(&self, input: &'code [u8]) -> ParseResult<'code> {
        self.parse(input)
    }
}
