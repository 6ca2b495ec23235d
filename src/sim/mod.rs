//! Day-level replenishment simulation: plays a demand series against a
//! computed policy and accrues holding, stockout and ordering costs.

pub mod config;
pub mod engine;
pub mod pipeline;

pub use config::SimulationConfig;
pub use engine::{DailyRecord, ReplenishmentSimulation, SimulationSummary};
pub use pipeline::LeadTimePipeline;
