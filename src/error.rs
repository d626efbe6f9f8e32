use thiserror::Error;

/// Why a parser did not account for an entire input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("input did not match")]
    NoMatch,
    #[error("matched {consumed} bytes but {remaining} bytes of input were left over")]
    TrailingInput { consumed: usize, remaining: usize },
}
