//! Conversions from the facility config into live placement types.
//!
//! All validation goes through the regular constructors, so a bad config
//! fails with the same `InvalidArgument` a hand-built facility would.

use lockerbay_core::{FacilityConfig, LockerResult, ManagerConfig, RobotConfig};
use tracing::{debug, info, warn};

use crate::locker::Locker;
use crate::manager::LockerRobotManager;
use crate::robot::LockerRobot;

fn build_lockers(capacities: &[u32]) -> LockerResult<Vec<Locker>> {
    capacities.iter().map(|&c| Locker::new(c)).collect()
}

/// Build a [`LockerRobot`] from its config entry.
pub fn build_robot(config: &RobotConfig) -> LockerResult<LockerRobot> {
    LockerRobot::new(config.strategy, build_lockers(&config.lockers)?)
}

/// Build a [`LockerRobotManager`] and all of its robots.
pub fn build_manager(config: &ManagerConfig) -> LockerResult<LockerRobotManager> {
    let lockers = build_lockers(&config.lockers)?;
    let robots = config
        .robots
        .iter()
        .map(build_robot)
        .collect::<LockerResult<Vec<_>>>()?;
    LockerRobotManager::new(lockers, robots)
}

/// Build every manager in the facility, in config order.
///
/// Logs are tagged with each manager's configured name.
pub fn build_facility(config: &FacilityConfig) -> LockerResult<Vec<LockerRobotManager>> {
    let managers = config
        .managers
        .iter()
        .enumerate()
        .map(|(idx, manager_config)| -> LockerResult<LockerRobotManager> {
            let name = manager_config.display_name(idx);
            let manager = build_manager(manager_config).inspect_err(|e| {
                warn!(manager = %name, error = %e, "manager config rejected");
            })?;
            debug!(
                manager = %name,
                robots = manager.robots().len(),
                lockers = manager.lockers().len(),
                capacity = manager.capacity_summary().total,
                "manager built"
            );
            Ok(manager)
        })
        .collect::<LockerResult<Vec<_>>>()?;
    info!(
        managers = managers.len(),
        capacity = config.total_capacity(),
        "facility built"
    );
    Ok(managers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lockerbay_core::{CapacitySummary, LockerError, PlacementStrategy};

    fn sample_manager() -> ManagerConfig {
        ManagerConfig {
            name: Some("terminal-a".to_string()),
            lockers: vec![5, 3],
            robots: vec![
                RobotConfig {
                    strategy: PlacementStrategy::FirstFit,
                    lockers: vec![10],
                },
                RobotConfig {
                    strategy: PlacementStrategy::MaxVacancyRate,
                    lockers: vec![8, 2],
                },
            ],
        }
    }

    #[test]
    fn builds_manager_in_config_order() {
        let manager = build_manager(&sample_manager()).unwrap();

        let own: Vec<u32> = manager.lockers().iter().map(Locker::capacity).collect();
        assert_eq!(own, vec![5, 3]);
        assert_eq!(manager.robots().len(), 2);
        assert_eq!(manager.robots()[0].strategy(), PlacementStrategy::FirstFit);
        assert_eq!(manager.robots()[1].strategy(), PlacementStrategy::MaxVacancyRate);
        assert_eq!(manager.robots()[1].lockers().len(), 2);
        assert_eq!(manager.capacity_summary(), CapacitySummary::new(28, 28));
    }

    #[test]
    fn zero_capacity_locker_is_rejected() {
        let mut config = sample_manager();
        config.lockers.push(0);

        assert!(matches!(
            build_manager(&config),
            Err(LockerError::InvalidArgument(_))
        ));
    }

    #[test]
    fn robot_without_lockers_is_rejected() {
        let config = RobotConfig {
            strategy: PlacementStrategy::MaxAvailable,
            lockers: Vec::new(),
        };
        assert!(matches!(build_robot(&config), Err(LockerError::InvalidArgument(_))));
    }

    #[test]
    fn empty_manager_is_rejected() {
        let config = ManagerConfig::default();
        assert!(matches!(build_manager(&config), Err(LockerError::InvalidArgument(_))));
    }

    #[test]
    fn one_bad_manager_rejects_the_facility() {
        let config = FacilityConfig {
            managers: vec![
                sample_manager(),
                ManagerConfig {
                    name: Some("broken".to_string()),
                    lockers: vec![0],
                    robots: Vec::new(),
                },
            ],
        };

        assert_eq!(
            build_facility(&config).unwrap_err(),
            LockerError::InvalidArgument("Locker capacity must be greater than 0".into())
        );
    }

    #[test]
    fn builds_whole_facility() {
        let config = FacilityConfig {
            managers: vec![
                sample_manager(),
                ManagerConfig {
                    name: None,
                    lockers: vec![7],
                    robots: Vec::new(),
                },
            ],
        };

        let managers = build_facility(&config).unwrap();
        assert_eq!(managers.len(), 2);
        assert_eq!(managers[1].capacity_summary(), CapacitySummary::new(7, 7));
    }
}
