pub mod emi;
pub mod error;
pub mod types;

pub use error::LoanEmiError;
pub use types::*;

/// Standard result type for all loan-emi operations
pub type LoanEmiResult<T> = Result<T, LoanEmiError>;
