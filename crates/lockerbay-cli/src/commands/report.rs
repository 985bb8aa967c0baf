use std::path::Path;

use lockerbay_director::LockerRobotDirector;
use tracing::info;

use super::{load_managers, render};
use crate::OutputFormat;

pub fn validate(path: &Path) -> anyhow::Result<()> {
    let director = LockerRobotDirector::new(load_managers(path)?)?;
    println!("✓ {}: {}", path.display(), describe(&director));
    Ok(())
}

/// One-line shape and occupancy of a facility.
pub fn describe(director: &LockerRobotDirector) -> String {
    let summary = director.capacity_summary();
    let robots: usize = director.managers().iter().map(|m| m.robots().len()).sum();
    format!(
        "{} managers, {} robots, {} slots ({} occupied)",
        director.managers().len(),
        robots,
        summary.total,
        summary.occupied()
    )
}

pub fn report(path: &Path, format: OutputFormat) -> anyhow::Result<()> {
    let director = LockerRobotDirector::new(load_managers(path)?)?;
    info!(path = %path.display(), "facility loaded");
    print!("{}", render(&director, format)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const FACILITY: &str = r#"
[[manager]]
lockers = [5]

[[manager.robot]]
strategy = "first-fit"
lockers = [10]
"#;

    #[test]
    fn fresh_facility_reports_full_availability() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("facility.toml");
        std::fs::write(&path, FACILITY).unwrap();

        let director = LockerRobotDirector::new(load_managers(&path).unwrap()).unwrap();
        assert_eq!(
            render(&director, OutputFormat::Text).unwrap(),
            "M 15 15\n    L 5 5\n    R 10 10\n"
        );
    }

    #[test]
    fn describe_counts_slots_and_occupancy() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("facility.toml");
        std::fs::write(&path, FACILITY).unwrap();

        let mut managers = load_managers(&path).unwrap();
        managers[0].store("bag").unwrap();
        let director = LockerRobotDirector::new(managers).unwrap();

        assert_eq!(
            describe(&director),
            "1 managers, 1 robots, 15 slots (1 occupied)"
        );
    }

    #[test]
    fn json_output_is_parseable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("facility.toml");
        std::fs::write(&path, FACILITY).unwrap();

        let director = LockerRobotDirector::new(load_managers(&path).unwrap()).unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&render(&director, OutputFormat::Json).unwrap()).unwrap();
        assert_eq!(json["managers"][0]["total"], 15);
    }

    #[test]
    fn empty_config_has_no_managers() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("facility.toml");
        std::fs::write(&path, "").unwrap();

        assert!(validate(&path).is_err());
    }

    #[test]
    fn zero_capacity_is_reported_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("facility.toml");
        std::fs::write(&path, "[[manager]]\nlockers = [0]\n").unwrap();

        let err = load_managers(&path).unwrap_err();
        assert!(format!("{err:#}").contains("greater than 0"));
        assert!(err.to_string().contains("facility.toml"));
    }
}
