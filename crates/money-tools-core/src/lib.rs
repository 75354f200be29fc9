pub mod error;
pub mod math;
pub mod time_value;
pub mod types;

#[cfg(feature = "loans")]
pub mod loans;

#[cfg(feature = "growth")]
pub mod growth;

#[cfg(feature = "debt")]
pub mod debt;

#[cfg(feature = "ratios")]
pub mod ratios;

#[cfg(feature = "tax")]
pub mod tax;

#[cfg(feature = "fx")]
pub mod fx;

#[cfg(feature = "budget")]
pub mod budget;

#[cfg(feature = "library")]
pub mod library;

pub use error::MoneyToolsError;
pub use types::*;

#[cfg(feature = "library")]
pub use library::{CalculatorRequest, CalculatorResult, FinanceFormulaLibrary};

/// Standard result type for all money-tools operations
pub type MoneyToolsResult<T> = Result<T, MoneyToolsError>;
