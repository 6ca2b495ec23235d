//! The policy engine: service-level sizing math, the per-SKU policy
//! computation, and batch orchestration over a catalog.

pub mod batch;
pub mod compute;
pub mod config;
pub mod stats;
pub mod traits;

pub use batch::{
    compute_policy_batch, BatchFailure, BatchOutcome, BatchRunner, PartialBatchFailure,
};
pub use compute::compute_policy;
pub use config::EngineConfig;
pub use traits::ForecastProvider;
