use derive_more::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which of the two compared sequences a value refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Side {
    #[display(fmt = "original")]
    Original,

    #[display(fmt = "modified")]
    Modified,
}

/// Errors raised at the comparison boundary
///
/// Alignment and rendering are total, so everything here is a problem with
/// the caller's input rather than with the diff itself.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum CompareError {
    /// A line still carries a line break, so the loader did not split it
    #[display(fmt = "line {} of the {} text contains an embedded line break", number, side)]
    InvalidLine { side: Side, number: usize },

    /// A display mode string that is neither `all` nor `changed-only`
    #[display(fmt = "unknown display mode {:?}, expected \"all\" or \"changed-only\"", _0)]
    UnknownMode(String),
}

impl std::error::Error for CompareError {}
