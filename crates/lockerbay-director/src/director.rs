//! Locker robot director — supervises managers and reports on them.

use lockerbay_core::{CapacitySummary, LockerError, LockerResult};
use lockerbay_placement::LockerRobotManager;
use tracing::debug;

use crate::report::{FacilityReport, format_report};

/// Read-only supervisor over an ordered, non-empty set of managers.
#[derive(Debug, Clone)]
pub struct LockerRobotDirector {
    managers: Vec<LockerRobotManager>,
}

impl LockerRobotDirector {
    pub fn new(managers: Vec<LockerRobotManager>) -> LockerResult<Self> {
        if managers.is_empty() {
            return Err(LockerError::invalid_argument("At least one manager is required"));
        }
        Ok(Self { managers })
    }

    pub fn managers(&self) -> &[LockerRobotManager] {
        &self.managers
    }

    /// Capture current capacity for every manager.
    pub fn snapshot(&self) -> FacilityReport {
        FacilityReport::from_managers(&self.managers)
    }

    /// Totals across the whole facility.
    pub fn capacity_summary(&self) -> CapacitySummary {
        self.managers
            .iter()
            .map(LockerRobotManager::capacity_summary)
            .sum()
    }

    /// Render the `M`/`L`/`R` status report.
    pub fn generate_report(&self) -> String {
        let snapshot = self.snapshot();
        debug!(managers = snapshot.managers.len(), "generating capacity report");
        format_report(&snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lockerbay_placement::Locker;

    #[test]
    fn rejects_empty_manager_list() {
        let err = LockerRobotDirector::new(Vec::new()).unwrap_err();
        assert_eq!(
            err,
            LockerError::InvalidArgument("At least one manager is required".into())
        );
    }

    #[test]
    fn single_manager_single_locker() {
        let mut locker = Locker::new(5).unwrap();
        locker.store("bag").unwrap();
        let manager = LockerRobotManager::new(vec![locker], Vec::new()).unwrap();

        let director = LockerRobotDirector::new(vec![manager]).unwrap();
        assert_eq!(director.generate_report(), "M 4 5\n    L 4 5\n");
        assert_eq!(director.capacity_summary(), CapacitySummary::new(4, 5));
    }
}
