use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlotError {
    #[error("Invalid {field} '{input}': expected an ISO 8601 date (YYYY-MM-DD)")]
    Parse {
        field: &'static str,
        input: String,
        #[source]
        source: Option<chrono::ParseError>,
    },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Calendar lookup failed: {0}")]
    Calendar(#[from] eyre::Report),

    #[error("Internal server error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

pub type SlotResult<T> = Result<T, SlotError>;
