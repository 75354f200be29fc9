use thiserror::Error;

#[derive(Debug, Error)]
pub enum MoneyToolsError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Arithmetic overflow in {context}")]
    Overflow { context: String },

    #[error("Invalid table: {0}")]
    InvalidTable(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl MoneyToolsError {
    pub(crate) fn invalid(field: &str, reason: &str) -> Self {
        MoneyToolsError::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn overflow(context: &str) -> Self {
        MoneyToolsError::Overflow {
            context: context.into(),
        }
    }
}

impl From<serde_json::Error> for MoneyToolsError {
    fn from(e: serde_json::Error) -> Self {
        MoneyToolsError::SerializationError(e.to_string())
    }
}
