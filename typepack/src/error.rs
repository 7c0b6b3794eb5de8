use thiserror::Error;

/// A contract violation detected while evaluating a type pack operation.
///
/// These correspond to resolution failures of the type-level layer: the
/// descriptor layer cannot reject them while type checking, so it returns
/// them instead. Misuse that can be expressed in the type system (a bare
/// token as a concatenation operand, a closure that isn't a predicate)
/// does not compile and has no variant here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Indexed access past the end.
    ///
    /// `at` was called with an index greater than or equal to the length.
    #[error("index {index} is out of range for a type pack of size {size}")]
    OutOfRange { index: usize, size: usize },
    /// Invalid slice bounds.
    ///
    /// A slice `[begin, end)` requires `begin <= end <= size`.
    #[error("slice [{begin}, {end}) is invalid for a type pack of size {size}")]
    InvalidSlice {
        begin: usize,
        end: usize,
        size: usize,
    },
    /// Operation needs a non-empty type pack.
    #[error("{operation} requires a non-empty type pack")]
    EmptyPack { operation: &'static str },
    /// A singleton was compared with a type pack of more than one type.
    #[error("cannot compare a singleton with a type pack of size {size}")]
    SingletonMismatch { size: usize },
    /// Generated type pack would be too large.
    #[error("cannot generate {requested} types, the limit is {limit}")]
    GenerateLimit { requested: usize, limit: usize },
}

impl Error {
    /// A short stable code for the error.
    pub fn code(&self) -> &'static str {
        match self {
            Error::OutOfRange { .. } => "TP0001",
            Error::InvalidSlice { .. } => "TP0002",
            Error::EmptyPack { .. } => "TP0003",
            Error::SingletonMismatch { .. } => "TP0004",
            Error::GenerateLimit { .. } => "TP0005",
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
