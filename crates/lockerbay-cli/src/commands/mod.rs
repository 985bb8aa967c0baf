pub mod report;
pub mod simulate;

use std::path::Path;

use anyhow::Context;
use lockerbay_core::FacilityConfig;
use lockerbay_director::LockerRobotDirector;
use lockerbay_placement::{LockerRobotManager, build_facility};

use crate::OutputFormat;

/// Load a facility config and build its managers.
pub fn load_managers(path: &Path) -> anyhow::Result<Vec<LockerRobotManager>> {
    let config = FacilityConfig::from_file(path)
        .with_context(|| format!("failed to read facility config {}", path.display()))?;
    let managers = build_facility(&config)
        .with_context(|| format!("invalid facility config {}", path.display()))?;
    Ok(managers)
}

/// Render the director's view in the requested format.
pub fn render(director: &LockerRobotDirector, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(director.generate_report()),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&director.snapshot())?;
            json.push('\n');
            Ok(json)
        }
    }
}
