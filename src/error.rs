use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised at the call site of a construction or indexed access.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Face count, dice count or starting value rejected
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Index `{index}` out of range for {len} dice")]
    IndexOutOfRange { index: usize, len: usize },
}

impl Error {
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument(_))
    }

    pub fn is_index_out_of_range(&self) -> bool {
        matches!(self, Error::IndexOutOfRange { .. })
    }
}
