//! Facility description parser (`facility.toml`).
//!
//! ```toml
//! [[manager]]
//! name = "terminal-a"
//! lockers = [5, 3]
//!
//! [[manager.robot]]
//! strategy = "max-vacancy-rate"
//! lockers = [10, 8]
//! ```
//!
//! Parsing only checks shape. Capacities and non-empty collections are
//! validated when the config is turned into lockers, robots, and managers.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::types::PlacementStrategy;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FacilityConfig {
    #[serde(default, rename = "manager")]
    pub managers: Vec<ManagerConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ManagerConfig {
    pub name: Option<String>,
    /// Capacities of the lockers the manager fills itself, in routing order.
    #[serde(default)]
    pub lockers: Vec<u32>,
    #[serde(default, rename = "robot")]
    pub robots: Vec<RobotConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RobotConfig {
    pub strategy: PlacementStrategy,
    pub lockers: Vec<u32>,
}

impl FacilityConfig {
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> anyhow::Result<Self> {
        let config: FacilityConfig = toml::from_str(content)?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Total configured slots across every manager, robot, and locker.
    pub fn total_capacity(&self) -> u64 {
        self.managers
            .iter()
            .map(|m| {
                let own: u64 = m.lockers.iter().map(|&c| u64::from(c)).sum();
                let robots: u64 = m
                    .robots
                    .iter()
                    .flat_map(|r| r.lockers.iter())
                    .map(|&c| u64::from(c))
                    .sum();
                own + robots
            })
            .sum()
    }
}

impl ManagerConfig {
    /// Label for logs: the configured name, or `manager-<index>`.
    pub fn display_name(&self, index: usize) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| format!("manager-{index}"))
    }
}
