//! Capacity snapshots and their text rendering.

use std::fmt::Write;

use lockerbay_core::CapacitySummary;
use lockerbay_placement::{Locker, LockerRobot, LockerRobotManager};
use serde::{Deserialize, Serialize};

/// Point-in-time capacity of every manager, in director order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacilityReport {
    pub managers: Vec<ManagerReport>,
}

/// Capacity of one manager and its parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagerReport {
    /// Own lockers plus all robots.
    #[serde(flatten)]
    pub summary: CapacitySummary,
    pub lockers: Vec<CapacitySummary>,
    pub robots: Vec<CapacitySummary>,
}

impl ManagerReport {
    pub fn from_manager(manager: &LockerRobotManager) -> Self {
        let lockers: Vec<CapacitySummary> =
            manager.lockers().iter().map(Locker::capacity_summary).collect();
        let robots: Vec<CapacitySummary> =
            manager.robots().iter().map(LockerRobot::capacity_summary).collect();
        let summary: CapacitySummary = lockers.iter().chain(robots.iter()).copied().sum();
        Self {
            summary,
            lockers,
            robots,
        }
    }
}

impl FacilityReport {
    pub fn from_managers(managers: &[LockerRobotManager]) -> Self {
        Self {
            managers: managers.iter().map(ManagerReport::from_manager).collect(),
        }
    }
}

/// Render a report in the `M`/`L`/`R` line format.
pub fn format_report(report: &FacilityReport) -> String {
    let mut out = String::new();

    for manager in &report.managers {
        push_line(&mut out, "", 'M', manager.summary);
        for locker in &manager.lockers {
            push_line(&mut out, "    ", 'L', *locker);
        }
        for robot in &manager.robots {
            push_line(&mut out, "    ", 'R', *robot);
        }
    }

    out
}

fn push_line(out: &mut String, indent: &str, tag: char, summary: CapacitySummary) {
    // Writing into a String cannot fail.
    let _ = writeln!(out, "{indent}{tag} {} {}", summary.available, summary.total);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_lockers_before_robots() {
        let report = FacilityReport {
            managers: vec![ManagerReport {
                summary: CapacitySummary::new(21, 26),
                lockers: vec![CapacitySummary::new(4, 5), CapacitySummary::new(2, 3)],
                robots: vec![CapacitySummary::new(8, 10), CapacitySummary::new(7, 8)],
            }],
        };

        assert_eq!(
            format_report(&report),
            "M 21 26\n    L 4 5\n    L 2 3\n    R 8 10\n    R 7 8\n"
        );
    }

    #[test]
    fn empty_report_renders_nothing() {
        assert_eq!(format_report(&FacilityReport::default()), "");
    }

    #[test]
    fn serializes_with_flattened_summary() {
        let report = ManagerReport {
            summary: CapacitySummary::new(4, 5),
            lockers: vec![CapacitySummary::new(4, 5)],
            robots: Vec::new(),
        };

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["available"], 4);
        assert_eq!(json["total"], 5);
        assert_eq!(json["lockers"][0]["available"], 4);
        assert!(json["robots"].as_array().unwrap().is_empty());
    }
}
