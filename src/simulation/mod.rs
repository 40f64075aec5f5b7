/*!
 * Simulation Module
 * Workloads, configuration, the tick-driven driver and its reports
 */

pub mod config;
pub mod driver;
pub mod report;
pub mod workload;

pub use config::SimulationConfig;
pub use driver::Simulation;
pub use report::{ProcessReport, RunSegment, SimulationReport};
pub use workload::{ProcessSpec, Scenario, Workload};
