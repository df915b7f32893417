//! Error types for label encoding and rendering.

use thiserror::Error;

/// Label generation error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LabelError {
    /// Character outside the Code 39 alphabet (digits, `A`-`Z`, space,
    /// `-`, `.`).
    #[error("unsupported character {0:?} for Code 39")]
    UnsupportedChar(char),

    /// Label value is not exactly 6 characters long.
    #[error("label value must be exactly 6 characters, got {0}")]
    BadValueLength(usize),

    /// Label type suffix is not exactly 2 characters long.
    #[error("label type must be exactly 2 characters, got {0}")]
    BadTypeLength(usize),

    /// `*` is the start/stop delimiter and may not appear in the payload.
    #[error("'*' is reserved as the start/stop delimiter")]
    ReservedDelimiter,

    /// Label dimensions leave no room for content once padding is taken.
    #[error("label too small to hold a barcode")]
    LabelTooSmall,
}

/// Result type for label operations.
pub type Result<T> = core::result::Result<T, LabelError>;
