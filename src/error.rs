use thiserror::Error;

/// Fatal parse failure. The first syntax error aborts the parse and the
/// partially built model is discarded.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("syntax error at byte {offset}: {message}")]
pub struct SyntaxError {
    /// Byte offset into the source text where the error was detected.
    pub offset: usize,
    pub message: String,
}

impl SyntaxError {
    pub fn new(offset: usize, message: impl Into<String>) -> Self {
        Self {
            offset,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SyntaxError>;
