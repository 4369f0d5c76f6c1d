use thiserror::Error;

use tagstyle::{ParseError, SheetError};

#[derive(Error, Debug)]
pub enum TagstyleError {
    #[error("Markup error: {0}")]
    Markup(#[from] ParseError),

    #[error("Stylesheet error: {0}")]
    Stylesheet(#[from] SheetError),

    #[error("I/O error: {0}")]
    IO(#[from] std::io::Error),

    #[error("Logger error: {0}")]
    Logger(#[from] log::SetLoggerError),
}

// Create a type alias for convenience
pub type Result<T> = std::result::Result<T, TagstyleError>;
