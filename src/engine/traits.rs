// src/engine/traits.rs

use std::fmt::Debug;

use crate::model::DemandForecast;

/// Source of demand forecasts for a batch run.
///
/// The batch orchestrator takes the provider as an explicit capability
/// so forecast sources stay swappable (database reader, API client,
/// synthetic generator) instead of living in global state. Snapshot
/// consistency across one run is the provider's responsibility.
///
/// We require `Send` + `Sync` so callers may fan the batch out across
/// worker threads.
pub trait ForecastProvider: Debug + Send + Sync {
    /// Produces one forecast per (sku, location) pair for the current
    /// run.
    fn forecasts(&mut self) -> Vec<DemandForecast>;
}
