use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ForestError {
    /// Removal from an empty structure, or of an element it does not hold.
    #[error("structure is empty or does not hold the element")]
    EmptyStructure,
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    #[error("{0} trees reject external rotations")]
    UnsupportedOperation(&'static str),
}
