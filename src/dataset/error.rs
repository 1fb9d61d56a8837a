use crate::domain::price::ParseError;
use thiserror::Error;

/// Failures that stop the listings file from being loaded at all.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read listings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("Bad price on line {line}: {source}")]
    Price {
        line: u64,
        #[source]
        source: ParseError,
    },
}
