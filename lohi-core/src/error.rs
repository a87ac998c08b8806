//! # Error Types for lohi

use std::fmt;
use thiserror::Error;

/// Which 32-bit half of an [`Int64`](crate::Int64) a strict constructor rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Half {
    Low,
    High,
}

impl fmt::Display for Half {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Half::Low => write!(f, "low"),
            Half::High => write!(f, "high"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Int64Error {
    /// A half passed to [`Int64::new`](crate::Int64::new) was not an integer in
    /// `[-0x80000000, 0xFFFFFFFF]`.
    #[error("Invalid argument: {half} not a 32-bit integer")]
    InvalidArgument { half: Half },
}

impl Int64Error {
    /// The half that failed validation
    pub fn half(&self) -> Half {
        match self {
            Int64Error::InvalidArgument { half } => *half,
        }
    }
}

pub type Result<T> = std::result::Result<T, Int64Error>;
