//! Retail replenishment policy engine.
//!
//! Turns per-SKU demand forecasts (point estimate + uncertainty) and
//! supply parameters into replenishment policies: safety stock, reorder
//! point, order quantity and stockout risk. A day-level simulation
//! plays a computed policy against a demand series to measure fill
//! rates and costs.
//!
//! The policy computation is a pure function of its inputs; batch runs
//! over a catalog isolate per-item failures so one bad SKU never blocks
//! the rest.

pub mod engine;
pub mod error;
pub mod io;
pub mod model;
pub mod sim;

pub use engine::{
    compute_policy, compute_policy_batch, BatchFailure, BatchOutcome, BatchRunner, EngineConfig,
    ForecastProvider, PartialBatchFailure,
};
pub use error::{PolicyError, PolicyResult};
pub use model::{DemandForecast, InventoryPolicy, OrderQuantityMethod, SupplyParameters};
