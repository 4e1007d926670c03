//! Error handling

use thiserror::Error;

/// Errors raised by the few column operations
/// that do not degrade to [`Nullable::Null`](crate::Nullable::Null).
///
/// Reads past the end of a column and operators applied
/// to absent values are *not* errors.
/// See [`Column::at`](crate::Column::at).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ColumnError {
    /// Returned by [`Column::front`](crate::Column::front)
    /// and [`Column::back`](crate::Column::back)
    /// when the column has no slots.
    #[error("column is empty")]
    EmptyColumn,
    /// Used by checked accessors when an index is out of range.
    #[error("index {index} out of range for column of length {len}")]
    IndexError { index: String, len: usize },
    /// Used when a value is required but the slot is null.
    #[error("we received {} but expected {}", *got, *expected)]
    ValueError { got: String, expected: String },
}

/// Result type for fallible column operations.
pub type ColumnResult<T> = Result<T, ColumnError>;

/// Given a [``ColumnResult``],
/// obtain the error message if there is indeed an error.
///
/// # Examples
///
/// ```
/// use nullcolumn::Column;
///
/// let empty = Column::<i32>::new();
/// let message = nullcolumn::error::extract_error_message(empty.front());
/// assert_eq!(message, Some("column is empty".to_string()));
///
/// let column = Column::from(vec![1]);
/// assert!(nullcolumn::error::extract_error_message(column.front()).is_none());
/// ```
pub fn extract_error_message<T>(x: ColumnResult<T>) -> Option<String> {
    x.map_or_else(|e: ColumnError| Some(format!("{}", e)), |_| None)
}
