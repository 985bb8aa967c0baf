//! Locker robot manager — two-tier routing over robots and its own lockers.
//!
//! Store: the first robot reporting free capacity gets the bag; when every
//! robot is full the manager falls back to its own lockers in order.
//! Retrieve: probe robots, then own lockers, until one recognises the
//! ticket. Only one locker in the whole hierarchy can hold a given ticket,
//! so the probe order does not affect which bag comes back.

use lockerbay_core::{CapacitySummary, LockerError, LockerResult, Ticket};
use tracing::{debug, warn};

use crate::locker::Locker;
use crate::robot::LockerRobot;

#[derive(Debug, Clone)]
pub struct LockerRobotManager {
    lockers: Vec<Locker>,
    robots: Vec<LockerRobot>,
}

impl LockerRobotManager {
    /// Either collection may be empty, but not both.
    pub fn new(lockers: Vec<Locker>, robots: Vec<LockerRobot>) -> LockerResult<Self> {
        if lockers.is_empty() && robots.is_empty() {
            return Err(LockerError::invalid_argument(
                "Both lockers and robots cannot be empty",
            ));
        }
        Ok(Self { lockers, robots })
    }

    /// Lockers filled directly by the manager, in routing order.
    pub fn lockers(&self) -> &[Locker] {
        &self.lockers
    }

    /// Robots in routing order.
    pub fn robots(&self) -> &[LockerRobot] {
        &self.robots
    }

    pub fn has_available_capacity(&self) -> bool {
        self.robots.iter().any(LockerRobot::has_available_capacity)
            || self.lockers.iter().any(|l| !l.is_full())
    }

    /// Own lockers plus every robot's lockers.
    pub fn capacity_summary(&self) -> CapacitySummary {
        let own: CapacitySummary = self.lockers.iter().map(Locker::capacity_summary).sum();
        let delegated: CapacitySummary =
            self.robots.iter().map(LockerRobot::capacity_summary).sum();
        own + delegated
    }

    pub fn store(&mut self, bag: impl Into<String>) -> LockerResult<Ticket> {
        let bag = bag.into();

        if let Some((idx, robot)) = self
            .robots
            .iter_mut()
            .enumerate()
            .find(|(_, r)| r.has_available_capacity())
        {
            let ticket = robot.store(bag)?;
            debug!(robot = idx, %ticket, "manager delegated bag to robot");
            return Ok(ticket);
        }

        if let Some((idx, locker)) = self
            .lockers
            .iter_mut()
            .enumerate()
            .find(|(_, l)| !l.is_full())
        {
            let ticket = locker.store(bag)?;
            debug!(locker = idx, %ticket, "manager stored bag in own locker");
            return Ok(ticket);
        }

        warn!(
            robots = self.robots.len(),
            lockers = self.lockers.len(),
            "manager has no free capacity"
        );
        Err(LockerError::NoCapacity(
            "No available capacity in any robot or locker".to_string(),
        ))
    }

    pub fn retrieve(&mut self, ticket: &Ticket) -> LockerResult<String> {
        for (idx, robot) in self.robots.iter_mut().enumerate() {
            match robot.retrieve(ticket) {
                Ok(bag) => {
                    debug!(robot = idx, %ticket, "manager retrieved bag via robot");
                    return Ok(bag);
                }
                Err(LockerError::InvalidTicket(_)) => continue,
                Err(e) => return Err(e),
            }
        }

        for (idx, locker) in self.lockers.iter_mut().enumerate() {
            match locker.retrieve(ticket) {
                Ok(bag) => {
                    debug!(locker = idx, %ticket, "manager retrieved bag from own locker");
                    return Ok(bag);
                }
                Err(LockerError::InvalidTicket(_)) => continue,
                Err(e) => return Err(e),
            }
        }

        Err(LockerError::InvalidTicket(*ticket))
    }
}
