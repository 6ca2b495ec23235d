use serde::{Deserialize, Serialize};

use crate::error::{require_finite_non_negative, require_open_probability, PolicyResult};

/// Supply-side parameters for one SKU at one location.
///
/// Configuration data, set once per SKU/location and updatable between
/// runs. Holding cost is per unit-year (the EOQ annualization
/// convention); order cost is per order placed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplyParameters {
    pub sku_id: String,
    pub location_id: String,
    /// Cost of holding one unit in stock for one year.
    pub unit_holding_cost: f64,
    /// Fixed cost of placing one replenishment order.
    pub order_cost: f64,
    /// Target probability of not stocking out during a replenishment
    /// cycle. Strictly between 0 and 1.
    pub target_service_level: f64,
    /// Days between order reviews; 0 models continuous review.
    pub review_period_days: f64,
}

impl SupplyParameters {
    /// Demo-grade parameters for a SKU/location pair: $2/unit-year
    /// holding, $50/order, 95% service, continuous review.
    pub fn for_sku(sku_id: impl Into<String>, location_id: impl Into<String>) -> Self {
        Self {
            sku_id: sku_id.into(),
            location_id: location_id.into(),
            unit_holding_cost: 2.0,
            order_cost: 50.0,
            target_service_level: 0.95,
            review_period_days: 0.0,
        }
    }

    /// Checks every numeric field against its documented domain.
    pub fn validate(&self) -> PolicyResult<()> {
        require_finite_non_negative("unit_holding_cost", self.unit_holding_cost)?;
        require_finite_non_negative("order_cost", self.order_cost)?;
        require_open_probability("target_service_level", self.target_service_level)?;
        require_finite_non_negative("review_period_days", self.review_period_days)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PolicyError;

    #[test]
    fn demo_parameters_are_valid() {
        assert!(SupplyParameters::for_sku("SKU-1", "STORE-A").validate().is_ok());
    }

    #[test]
    fn boundary_service_levels_are_rejected() {
        for bad in [0.0, 1.0, -0.2, 1.5] {
            let mut p = SupplyParameters::for_sku("SKU-1", "STORE-A");
            p.target_service_level = bad;
            match p.validate().unwrap_err() {
                PolicyError::InvalidParameter { field, value, .. } => {
                    assert_eq!(field, "target_service_level");
                    assert_eq!(value, bad);
                }
                other => panic!("unexpected error: {other:?}"),
            }
        }
    }

    #[test]
    fn negative_costs_are_rejected() {
        let mut p = SupplyParameters::for_sku("SKU-1", "STORE-A");
        p.unit_holding_cost = -0.01;
        assert!(p.validate().is_err());

        let mut p = SupplyParameters::for_sku("SKU-1", "STORE-A");
        p.order_cost = -5.0;
        assert!(p.validate().is_err());
    }
}
