use thiserror::Error;

use crate::model::Kind;

/// Errors raised by the record model, the store and the console loop.
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    #[error("invalid number: {0:?}")]
    InputFormat(String),

    #[error("{kind} not found: {name}")]
    NotFound { kind: Kind, name: String },

    #[error("invalid menu choice: {0:?}")]
    InvalidMenuChoice(String),

    #[error("expected a {expected} record, got a {found} record")]
    KindMismatch { expected: Kind, found: Kind },

    #[error("input closed")]
    InputClosed,

    #[error("console I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl RegistryError {
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RegistryError>;
