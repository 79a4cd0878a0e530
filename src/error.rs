//! Errors raised by the view engine's caller-facing entry points.
//!
//! Only rejected input is an error. Filter operators that do not apply to a
//! column type and rows with missing cells are defined behaviour and never
//! surface here.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// A numeric argument outside its valid domain (page size 0, page 0, page past the end).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("unknown column: {0}")]
    UnknownColumn(String),

    #[error("duplicate column key in headers: {0}")]
    DuplicateColumn(String),

    #[error("column is not sortable: {0}")]
    ColumnNotSortable(String),

    #[error("column is not filterable: {0}")]
    ColumnNotFilterable(String),
}

impl GridError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        GridError::InvalidArgument(msg.into())
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, GridError::InvalidArgument(_))
    }
}

pub type GridResult<T> = Result<T, GridError>;
