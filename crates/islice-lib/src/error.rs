//! Errors reported by slice construction and execution.

/// Failure while advancing an [`IsliceExtended`](crate::IsliceExtended).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SliceError {
    /// A step of exactly zero. Reported on the first advance, never at construction.
    #[error("step argument must not be 0")]
    ZeroStep,
}

/// Failure while building [`SliceArgs`](crate::SliceArgs) from loose parts or text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseSliceError {
    #[error("expected 1 to 3 slice arguments, got {found}")]
    Arity { found: usize },

    #[error("slice notation has {found} parts, at most 3 are allowed")]
    TooManyParts { found: usize },

    #[error("invalid slice bound `{text}`: expected an integer or `None`")]
    InvalidBound { text: String },
}
