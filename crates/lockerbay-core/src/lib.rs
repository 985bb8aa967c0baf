//! lockerbay-core — shared types for the lockerbay bag-storage facility.
//!
//! Everything here is plain data: the [`Ticket`] handed out on store, the
//! [`CapacitySummary`] every storage level reports, the [`LockerError`]
//! taxonomy, and the TOML facility description in [`config`].

pub mod config;
pub mod error;
pub mod types;

pub use config::{FacilityConfig, ManagerConfig, RobotConfig};
pub use error::{LockerError, LockerResult};
pub use types::*;
