//! lockerbay-director — read-only capacity reporting.
//!
//! The director owns a set of managers and renders their capacity through
//! the public accessors (`lockers()`, `robots()`, `capacity_summary()`).
//! It never stores or retrieves bags itself.
//!
//! Report format, one block per manager:
//!
//! ```text
//! M <available> <total>
//!     L <available> <total>    one line per manager-owned locker
//!     R <available> <total>    one line per robot, after all L lines
//! ```

pub mod director;
pub mod report;

pub use director::LockerRobotDirector;
pub use report::{FacilityReport, ManagerReport, format_report};
