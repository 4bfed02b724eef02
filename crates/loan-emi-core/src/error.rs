use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoanEmiError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Division by zero in {context}")]
    DivisionByZero { context: String },

    #[error("Numeric range exceeded in {context}")]
    NumericRange { context: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for LoanEmiError {
    fn from(e: serde_json::Error) -> Self {
        LoanEmiError::SerializationError(e.to_string())
    }
}
