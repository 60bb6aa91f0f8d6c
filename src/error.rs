use thiserror::Error;

/// The ways in which a `unicode-range` descriptor can be malformed.
/// A single malformed token rejects the whole descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A token was empty, e.g. in `""`, `"u+41,"` or `"u+41,,u+42"`.
    #[error("empty unicode-range token")]
    Empty,

    /// A token did not match `u+<hex>`, `u+<hex>-<hex>` or `u+<hex with ?>`.
    #[error("invalid unicode-range token `{0}`")]
    InvalidToken(String),

    /// A bound lies outside the Unicode codespace.
    #[error("code point {value:#x} in `{token}` is greater than U+10FFFF")]
    OutOfRange { token: String, value: u32 },

    /// The start of a range is greater than its end.
    #[error("range start {start:#x} is greater than range end {end:#x} in `{token}`")]
    ReversedRange { token: String, start: u32, end: u32 },
}

impl ParseError {
    /// Returns the offending token, if the error refers to a non-empty one.
    pub fn token(&self) -> Option<&str> {
        match self {
            ParseError::Empty => None,
            ParseError::InvalidToken(token)
            | ParseError::OutOfRange { token, .. }
            | ParseError::ReversedRange { token, .. } => Some(token),
        }
    }
}
