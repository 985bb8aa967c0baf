use std::path::Path;

use anyhow::bail;
use lockerbay_core::Ticket;
use lockerbay_director::LockerRobotDirector;
use lockerbay_placement::LockerRobotManager;
use tracing::{info, warn};

use super::{load_managers, render};
use crate::OutputFormat;

pub struct SimulateOptions {
    pub bags: u32,
    pub manager: usize,
    pub retrieve: u32,
    pub format: OutputFormat,
}

/// Outcome of a simulated run against one manager.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SimulationOutcome {
    pub stored: u32,
    pub rejected: u32,
    pub retrieved: u32,
}

pub fn run(path: &Path, opts: &SimulateOptions) -> anyhow::Result<()> {
    let mut managers = load_managers(path)?;
    let outcome = simulate(&mut managers, opts)?;
    info!(
        stored = outcome.stored,
        rejected = outcome.rejected,
        retrieved = outcome.retrieved,
        "simulation finished"
    );

    let director = LockerRobotDirector::new(managers)?;
    print!("{}", render(&director, opts.format)?);
    Ok(())
}

/// Store `opts.bags` bags through the chosen manager, then hand back the
/// oldest `opts.retrieve` of them.
pub fn simulate(
    managers: &mut [LockerRobotManager],
    opts: &SimulateOptions,
) -> anyhow::Result<SimulationOutcome> {
    let count = managers.len();
    let Some(manager) = managers.get_mut(opts.manager) else {
        bail!("manager index {} out of range ({count} configured)", opts.manager);
    };

    let mut outcome = SimulationOutcome::default();
    let mut tickets: Vec<Ticket> = Vec::new();

    for i in 0..opts.bags {
        match manager.store(format!("bag-{i}")) {
            Ok(ticket) => {
                tickets.push(ticket);
                outcome.stored += 1;
            }
            Err(e) if e.is_capacity() => {
                outcome.rejected = opts.bags - i;
                warn!(bag = i, error = %e, "facility full, stopping");
                break;
            }
            Err(e) => return Err(e.into()),
        }
    }

    if opts.retrieve > outcome.stored {
        warn!(
            requested = opts.retrieve,
            stored = outcome.stored,
            "fewer bags stored than requested for retrieval"
        );
    }

    for ticket in tickets.iter().take(opts.retrieve as usize) {
        manager.retrieve(ticket)?;
        outcome.retrieved += 1;
    }

    Ok(outcome)
}
