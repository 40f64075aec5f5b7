/*!
 * CPU Scheduling Simulator - Main Entry Point
 *
 * Usage: sched-sim [scenario.json]
 *
 * Runs the given scenario (or a built-in demo workload) and prints the
 * report as JSON. SCHED_POLICY, SCHED_QUANTUM and SCHED_MAX_TICKS override
 * the scenario's configuration.
 */

use cpu_sched_sim::{init_tracing, Scenario, Simulation, TracingPlatform, Workload};
use miette::{IntoDiagnostic, Result};
use std::sync::Arc;
use tracing::info;

fn main() -> Result<()> {
    init_tracing();

    let mut scenario = match std::env::args().nth(1) {
        Some(path) => {
            info!(path = %path, "Loading scenario");
            Scenario::load(&path)?
        }
        None => {
            info!("No scenario given, running the demo workload");
            Scenario {
                workload: Workload::demo(),
                ..Scenario::default()
            }
        }
    };
    scenario.config = scenario.config.with_env_overrides()?;

    info!(
        policy = %scenario.config.scheduler.policy,
        processes = scenario.workload.len(),
        "Starting simulation"
    );

    let report = Simulation::from_scenario(&scenario, Arc::new(TracingPlatform))?.run()?;

    info!(
        average_turnaround = report.average_turnaround(),
        average_waiting = report.average_waiting(),
        cpu_utilization = report.cpu_utilization(),
        preemption_ratio = report.stats.preemption_ratio(),
        "Simulation finished"
    );

    println!("{}", serde_json::to_string_pretty(&report).into_diagnostic()?);
    Ok(())
}
