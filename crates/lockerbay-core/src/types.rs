//! Value types shared by every storage level.

use std::fmt;
use std::iter::Sum;
use std::ops::Add;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::LockerError;

/// Opaque, single-use claim on a stored bag.
///
/// Tickets are random v4 UUIDs, so two lockers generating independently
/// will not collide in practice. Retrieval only relies on each locker's
/// own mapping being consistent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ticket(Uuid);

impl Ticket {
    /// Mint a fresh ticket.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for Ticket {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// Locker-selection policy a robot is bound to at construction.
///
/// Selection itself lives in `lockerbay-placement`; this is the closed set
/// of policies as it appears in configs and on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlacementStrategy {
    /// First non-full locker in order.
    FirstFit,
    /// Locker with the most free slots.
    MaxAvailable,
    /// Locker with the highest free/total ratio.
    MaxVacancyRate,
}

impl PlacementStrategy {
    pub const ALL: [PlacementStrategy; 3] = [
        PlacementStrategy::FirstFit,
        PlacementStrategy::MaxAvailable,
        PlacementStrategy::MaxVacancyRate,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FirstFit => "first-fit",
            Self::MaxAvailable => "max-available",
            Self::MaxVacancyRate => "max-vacancy-rate",
        }
    }
}

impl fmt::Display for PlacementStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlacementStrategy {
    type Err = LockerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.as_str() == s)
            .ok_or_else(|| LockerError::invalid_argument(format!("unknown placement strategy: {s}")))
    }
}

/// Available and total slots for a locker, robot, or manager.
///
/// Counts are `u64` so sums over many `u32`-capacity lockers cannot overflow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapacitySummary {
    pub available: u64,
    pub total: u64,
}

impl CapacitySummary {
    pub fn new(available: u64, total: u64) -> Self {
        Self { available, total }
    }

    /// Slots currently holding a bag.
    pub fn occupied(&self) -> u64 {
        self.total.saturating_sub(self.available)
    }
}

impl Add for CapacitySummary {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            available: self.available + rhs.available,
            total: self.total + rhs.total,
        }
    }
}

impl Sum for CapacitySummary {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}
