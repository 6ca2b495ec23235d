use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{require_finite_non_negative, require_finite_positive, PolicyResult};

/// Demand forecast for one SKU at one location over one period.
///
/// Produced by an upstream forecasting collaborator as a point estimate
/// plus uncertainty; immutable once created. Identified by
/// (sku_id, location_id, period).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemandForecast {
    pub sku_id: String,
    pub location_id: String,
    /// First day of the forecast period.
    pub period: NaiveDate,
    /// Expected demand, units per day.
    pub mean_demand: f64,
    /// Standard deviation of daily demand.
    pub demand_std_dev: f64,
    /// Replenishment lead time, days.
    pub lead_time_days: f64,
}

impl DemandForecast {
    /// Checks every numeric field against its documented domain.
    pub fn validate(&self) -> PolicyResult<()> {
        require_finite_non_negative("mean_demand", self.mean_demand)?;
        require_finite_non_negative("demand_std_dev", self.demand_std_dev)?;
        require_finite_positive("lead_time_days", self.lead_time_days)?;
        Ok(())
    }
}
