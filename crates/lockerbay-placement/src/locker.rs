//! A single fixed-capacity locker.

use std::collections::HashMap;

use lockerbay_core::{CapacitySummary, LockerError, LockerResult, Ticket};
use tracing::debug;

/// Fixed-capacity storage unit mapping tickets to stored bags.
///
/// Invariant: `occupied() <= capacity()` at all times.
#[derive(Debug, Clone)]
pub struct Locker {
    capacity: u32,
    storage: HashMap<Ticket, String>,
}

impl Locker {
    /// Create an empty locker. A capacity of zero is rejected.
    pub fn new(capacity: u32) -> LockerResult<Self> {
        if capacity == 0 {
            return Err(LockerError::invalid_argument(
                "Locker capacity must be greater than 0",
            ));
        }
        Ok(Self {
            capacity,
            storage: HashMap::new(),
        })
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn occupied(&self) -> u32 {
        // Bounded by `capacity`, which is a u32.
        self.storage.len() as u32
    }

    pub fn available_capacity(&self) -> u32 {
        self.capacity - self.occupied()
    }

    pub fn is_full(&self) -> bool {
        self.occupied() >= self.capacity
    }

    /// Whether this locker currently holds a bag for `ticket`.
    pub fn contains(&self, ticket: &Ticket) -> bool {
        self.storage.contains_key(ticket)
    }

    pub fn capacity_summary(&self) -> CapacitySummary {
        CapacitySummary::new(
            u64::from(self.available_capacity()),
            u64::from(self.capacity),
        )
    }

    /// Store a bag and hand back a fresh ticket for it.
    pub fn store(&mut self, bag: impl Into<String>) -> LockerResult<Ticket> {
        if self.is_full() {
            return Err(LockerError::CapacityExceeded);
        }

        let ticket = self.mint_ticket();
        self.storage.insert(ticket, bag.into());
        debug!(
            %ticket,
            available = self.available_capacity(),
            capacity = self.capacity,
            "bag stored"
        );
        Ok(ticket)
    }

    /// Release the bag held under `ticket`. The ticket is spent afterwards.
    pub fn retrieve(&mut self, ticket: &Ticket) -> LockerResult<String> {
        let bag = self
            .storage
            .remove(ticket)
            .ok_or(LockerError::InvalidTicket(*ticket))?;
        debug!(
            %ticket,
            available = self.available_capacity(),
            capacity = self.capacity,
            "bag retrieved"
        );
        Ok(bag)
    }

    fn mint_ticket(&self) -> Ticket {
        loop {
            let ticket = Ticket::generate();
            if !self.storage.contains_key(&ticket) {
                return ticket;
            }
        }
    }
}
