//! Locker robots — a fixed set of lockers plus one selection policy.
//!
//! The three robot kinds differ only in the [`PlacementStrategy`] they are
//! built with. Validation, retrieval, and capacity queries are shared.

use lockerbay_core::{CapacitySummary, LockerError, LockerResult, PlacementStrategy, Ticket};
use tracing::{debug, warn};

use crate::locker::Locker;
use crate::strategy::SelectLocker;

/// A placement agent that owns an ordered, non-empty set of lockers.
///
/// Neither the strategy nor the set of lockers can change after
/// construction; only the lockers' contents do.
#[derive(Debug, Clone)]
pub struct LockerRobot {
    strategy: PlacementStrategy,
    lockers: Vec<Locker>,
}

impl LockerRobot {
    pub fn new(strategy: PlacementStrategy, lockers: Vec<Locker>) -> LockerResult<Self> {
        if lockers.is_empty() {
            return Err(LockerError::invalid_argument("At least one locker is required"));
        }
        Ok(Self { strategy, lockers })
    }

    /// Robot that fills lockers in order.
    pub fn primary(lockers: Vec<Locker>) -> LockerResult<Self> {
        Self::new(PlacementStrategy::FirstFit, lockers)
    }

    /// Robot that picks the locker with the most free slots.
    pub fn smart(lockers: Vec<Locker>) -> LockerResult<Self> {
        Self::new(PlacementStrategy::MaxAvailable, lockers)
    }

    /// Robot that picks the locker with the highest vacancy rate.
    pub fn super_robot(lockers: Vec<Locker>) -> LockerResult<Self> {
        Self::new(PlacementStrategy::MaxVacancyRate, lockers)
    }

    pub fn strategy(&self) -> PlacementStrategy {
        self.strategy
    }

    pub fn lockers(&self) -> &[Locker] {
        &self.lockers
    }

    pub fn has_available_capacity(&self) -> bool {
        self.lockers.iter().any(|l| !l.is_full())
    }

    /// Free and total slots summed over every locker.
    pub fn capacity_summary(&self) -> CapacitySummary {
        self.lockers.iter().map(Locker::capacity_summary).sum()
    }

    pub fn store(&mut self, bag: impl Into<String>) -> LockerResult<Ticket> {
        let Some(idx) = self.strategy.select(&self.lockers) else {
            warn!(strategy = %self.strategy, "robot has no free locker");
            return Err(LockerError::NoCapacity("All lockers are full".to_string()));
        };

        let ticket = self.lockers[idx].store(bag)?;
        debug!(strategy = %self.strategy, locker = idx, %ticket, "robot placed bag");
        Ok(ticket)
    }

    /// Search every locker in order for the ticket.
    pub fn retrieve(&mut self, ticket: &Ticket) -> LockerResult<String> {
        for (idx, locker) in self.lockers.iter_mut().enumerate() {
            match locker.retrieve(ticket) {
                Ok(bag) => {
                    debug!(strategy = %self.strategy, locker = idx, %ticket, "robot released bag");
                    return Ok(bag);
                }
                Err(LockerError::InvalidTicket(_)) => continue,
                Err(e) => return Err(e),
            }
        }
        Err(LockerError::InvalidTicket(*ticket))
    }
}
