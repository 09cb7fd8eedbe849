//! Console error type

use std::io;

/// Errors that end the console loop abnormally
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    /// Reading input or writing output failed
    #[error("Console I/O error: {0}")]
    Io(#[from] io::Error),

    /// Input ended before the user chose to exit
    #[error("Input closed before exit was chosen")]
    InputClosed,
}

/// Console result type alias
pub type ConsoleResult<T> = Result<T, ConsoleError>;
