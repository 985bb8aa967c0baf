//! Error types for locker, robot, and manager operations.

use thiserror::Error;

use crate::types::Ticket;

/// Result type alias for storage operations.
pub type LockerResult<T> = Result<T, LockerError>;

/// Errors that can occur while storing or retrieving bags.
///
/// A failed operation never leaves partial state behind: selection is
/// read-only and only the final locker store mutates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LockerError {
    /// Bad construction input (zero capacity, empty collections).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A single locker has no free slot.
    #[error("Locker is full")]
    CapacityExceeded,

    /// No locker reachable from a robot or manager can take the bag.
    #[error("no capacity: {0}")]
    NoCapacity(String),

    /// The ticket is unknown in the searched scope, or was already used.
    #[error("Invalid ticket: {0}")]
    InvalidTicket(Ticket),
}

impl LockerError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// True for the "nothing can accept this bag" family of failures.
    pub fn is_capacity(&self) -> bool {
        matches!(self, Self::CapacityExceeded | Self::NoCapacity(_))
    }
}
