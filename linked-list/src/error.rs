use thiserror::Error;

/// Recoverable failures raised by list operations.
///
/// Every fallible operation checks its precondition before touching the
/// chain, so an `Err` always leaves the list exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ListError {
    /// The list holds no elements.
    #[error("list is empty")]
    Empty,
    /// `index` is outside the valid range for a list of `len` elements.
    #[error("index {index} out of range for list of length {len}")]
    OutOfRange { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, ListError>;
