/// Reasons a cursor operation is refused.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorError {
    /// The cursor is one past the last element, there is nothing to splice after.
    #[error("cursor is at the end of the list")]
    AtEnd,
    /// The cursor is on the last element (or on before-begin of an empty list).
    #[error("no element follows the cursor")]
    NoSuccessor,
}
