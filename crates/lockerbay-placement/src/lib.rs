//! lockerbay placement — decides which locker receives a bag.
//!
//! # Components
//!
//! - **`locker`** — fixed-capacity storage unit issuing single-use tickets
//! - **`strategy`** — locker selection (first-fit, max-available, max-vacancy-rate)
//! - **`robot`** — a set of lockers governed by one strategy
//! - **`manager`** — routes to robots first, then to its own lockers
//! - **`convert`** — builds managers from a [`FacilityConfig`](lockerbay_core::FacilityConfig)
//!
//! # Routing
//!
//! ```text
//! LockerRobotManager
//!   ├── LockerRobot (strategy) ── Locker, Locker, ...
//!   ├── LockerRobot (strategy) ── Locker, ...
//!   └── own lockers (first non-full wins)
//! ```
//!
//! Everything is synchronous and takes `&mut self` to mutate, so exclusive
//! access is enforced by the borrow checker. Share a manager across threads
//! by wrapping it in a `Mutex`.

pub mod convert;
pub mod locker;
pub mod manager;
pub mod robot;
pub mod strategy;

pub use convert::{build_facility, build_manager, build_robot};
pub use locker::Locker;
pub use manager::LockerRobotManager;
pub use robot::LockerRobot;
pub use strategy::{SelectLocker, vacancy_rate};

pub use lockerbay_core::{CapacitySummary, LockerError, LockerResult, PlacementStrategy, Ticket};
