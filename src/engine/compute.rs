// src/engine/compute.rs

use chrono::Utc;
use tracing::debug;

use crate::engine::config::EngineConfig;
use crate::engine::stats::{inverse_normal_cdf, normal_cdf};
use crate::error::{require_finite_non_negative, require_finite_positive, PolicyResult};
use crate::model::{DemandForecast, InventoryPolicy, OrderQuantityMethod, SupplyParameters};

/// Computes the replenishment policy for one SKU/location pair.
///
/// Sizing uses the normal approximation for demand over the protection
/// interval `T = lead_time_days + review_period_days` (assuming i.i.d.
/// daily demand, so variance scales linearly with time):
///
/// ```text
/// z              = quantile(target_service_level)
/// safety_stock   = max(0, z * demand_std_dev * sqrt(T))
/// reorder_point  = mean_demand * T + safety_stock
/// order_quantity = sqrt(2 * annual_demand * order_cost / unit_holding_cost)
/// ```
///
/// The EOQ line only applies when both cost inputs are positive; the
/// fallback branch taken otherwise is recorded in
/// [`InventoryPolicy::order_quantity_method`].
///
/// Pure: reads its inputs and returns a fresh policy. Out-of-range
/// inputs fail with the offending field and value, never a clamped
/// result.
pub fn compute_policy(
    forecast: &DemandForecast,
    params: &SupplyParameters,
    config: &EngineConfig,
) -> PolicyResult<InventoryPolicy> {
    forecast.validate()?;
    params.validate()?;
    validate_config(config)?;

    let z = inverse_normal_cdf(params.target_service_level);

    // The order placed when stock hits the reorder point must cover
    // demand until the next order can arrive: lead time plus however
    // long until the position is reviewed again.
    let protection_days = forecast.lead_time_days + params.review_period_days;
    let demand_std_over_protection = forecast.demand_std_dev * protection_days.sqrt();

    let safety_stock = (z * demand_std_over_protection).max(0.0);
    let reorder_point = forecast.mean_demand * protection_days + safety_stock;

    let (order_quantity, method) = size_order(forecast, params, config);
    debug!(
        sku_id = %forecast.sku_id,
        location_id = %forecast.location_id,
        method = ?method,
        order_quantity,
        "sized replenishment order"
    );

    let stockout_probability = 1.0 - normal_cdf(z);

    Ok(InventoryPolicy {
        sku_id: forecast.sku_id.clone(),
        location_id: forecast.location_id.clone(),
        safety_stock,
        reorder_point,
        order_quantity,
        stockout_probability,
        order_quantity_method: method,
        computed_at: Utc::now(),
    })
}

/// EOQ when both costs are positive, otherwise the configured fixed
/// batch, otherwise zero.
fn size_order(
    forecast: &DemandForecast,
    params: &SupplyParameters,
    config: &EngineConfig,
) -> (f64, OrderQuantityMethod) {
    if params.order_cost > 0.0 && params.unit_holding_cost > 0.0 {
        let annual_demand = forecast.mean_demand * config.days_per_year;
        let eoq = (2.0 * annual_demand * params.order_cost / params.unit_holding_cost).sqrt();
        return (eoq, OrderQuantityMethod::EconomicOrderQuantity);
    }

    match config.fixed_batch_size {
        Some(batch) => (batch, OrderQuantityMethod::FixedBatch),
        None => (0.0, OrderQuantityMethod::Zero),
    }
}

fn validate_config(config: &EngineConfig) -> PolicyResult<()> {
    require_finite_positive("days_per_year", config.days_per_year)?;
    if let Some(batch) = config.fixed_batch_size {
        require_finite_non_negative("fixed_batch_size", batch)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PolicyError;
    use chrono::NaiveDate;

    fn forecast(mean: f64, std_dev: f64, lead_time: f64) -> DemandForecast {
        DemandForecast {
            sku_id: "SKU-1001".into(),
            location_id: "STORE-NORTH".into(),
            period: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            mean_demand: mean,
            demand_std_dev: std_dev,
            lead_time_days: lead_time,
        }
    }

    fn params(service_level: f64) -> SupplyParameters {
        SupplyParameters {
            sku_id: "SKU-1001".into(),
            location_id: "STORE-NORTH".into(),
            unit_holding_cost: 2.0,
            order_cost: 50.0,
            target_service_level: service_level,
            review_period_days: 0.0,
        }
    }

    #[test]
    fn sizes_the_textbook_scenario() {
        // 100 units/day, sigma 10, lead time 7 days, 95% service:
        // z ~ 1.645, sigma over lead time = 10 * sqrt(7) ~ 26.46,
        // safety stock ~ 43.5, reorder point ~ 743.5.
        let policy = compute_policy(
            &forecast(100.0, 10.0, 7.0),
            &params(0.95),
            &EngineConfig::default(),
        )
        .unwrap();

        assert!((policy.safety_stock - 43.5).abs() < 0.5, "{}", policy.safety_stock);
        assert!((policy.reorder_point - 743.5).abs() < 0.5, "{}", policy.reorder_point);
    }

    #[test]
    fn sizes_the_textbook_eoq() {
        // 36500 units/year, $50/order, $2/unit-year:
        // sqrt(2 * 36500 * 50 / 2) ~ 1350.9.
        let policy = compute_policy(
            &forecast(100.0, 10.0, 7.0),
            &params(0.95),
            &EngineConfig::default(),
        )
        .unwrap();

        assert_eq!(
            policy.order_quantity_method,
            OrderQuantityMethod::EconomicOrderQuantity
        );
        assert!((policy.order_quantity - 1350.9).abs() < 1.0, "{}", policy.order_quantity);
    }

    #[test]
    fn stockout_probability_complements_service_level() {
        let policy = compute_policy(
            &forecast(100.0, 10.0, 7.0),
            &params(0.95),
            &EngineConfig::default(),
        )
        .unwrap();

        // Tolerance covers the quantile/CDF approximation error.
        assert!((policy.stockout_probability - 0.05).abs() < 1e-3);
    }

    #[test]
    fn zero_variance_collapses_to_expected_demand() {
        let policy = compute_policy(
            &forecast(100.0, 0.0, 7.0),
            &params(0.95),
            &EngineConfig::default(),
        )
        .unwrap();

        assert_eq!(policy.safety_stock, 0.0);
        assert_eq!(policy.reorder_point, 100.0 * 7.0);
    }

    #[test]
    fn review_period_extends_the_protection_interval() {
        let continuous = compute_policy(
            &forecast(100.0, 10.0, 7.0),
            &params(0.95),
            &EngineConfig::default(),
        )
        .unwrap();

        let mut periodic_params = params(0.95);
        periodic_params.review_period_days = 7.0;
        let periodic = compute_policy(
            &forecast(100.0, 10.0, 7.0),
            &periodic_params,
            &EngineConfig::default(),
        )
        .unwrap();

        assert!(periodic.reorder_point > continuous.reorder_point);
        assert!(periodic.safety_stock > continuous.safety_stock);
    }

    #[test]
    fn low_service_levels_clamp_safety_stock_at_zero() {
        // Below 50% the safety factor goes negative; buffer stock is
        // floored at zero rather than going negative.
        let policy = compute_policy(
            &forecast(100.0, 10.0, 7.0),
            &params(0.2),
            &EngineConfig::default(),
        )
        .unwrap();

        assert_eq!(policy.safety_stock, 0.0);
        assert_eq!(policy.reorder_point, 700.0);
        assert!(policy.stockout_probability > 0.5);
    }

    #[test]
    fn zero_order_cost_takes_the_fixed_batch_branch() {
        let mut p = params(0.95);
        p.order_cost = 0.0;

        let config = EngineConfig {
            fixed_batch_size: Some(250.0),
            ..EngineConfig::default()
        };
        let policy = compute_policy(&forecast(100.0, 10.0, 7.0), &p, &config).unwrap();
        assert_eq!(policy.order_quantity, 250.0);
        assert_eq!(policy.order_quantity_method, OrderQuantityMethod::FixedBatch);
    }

    #[test]
    fn zero_holding_cost_without_fallback_sizes_zero_explicitly() {
        let mut p = params(0.95);
        p.unit_holding_cost = 0.0;

        let policy =
            compute_policy(&forecast(100.0, 10.0, 7.0), &p, &EngineConfig::default()).unwrap();
        assert_eq!(policy.order_quantity, 0.0);
        assert_eq!(policy.order_quantity_method, OrderQuantityMethod::Zero);
    }

    #[test]
    fn boundary_service_levels_never_compute() {
        for bad in [0.0, 1.0] {
            let err = compute_policy(
                &forecast(100.0, 10.0, 7.0),
                &params(bad),
                &EngineConfig::default(),
            )
            .unwrap_err();
            assert!(matches!(err, PolicyError::InvalidParameter { field, .. }
                if field == "target_service_level"));
        }
    }

    #[test]
    fn negative_cost_never_computes() {
        let mut p = params(0.95);
        p.order_cost = -1.0;
        let err = compute_policy(
            &forecast(100.0, 10.0, 7.0),
            &p,
            &EngineConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, PolicyError::InvalidParameter { field, .. }
            if field == "order_cost"));
    }

    #[test]
    fn bad_engine_config_is_rejected() {
        let config = EngineConfig {
            days_per_year: 0.0,
            ..EngineConfig::default()
        };
        let err = compute_policy(&forecast(100.0, 10.0, 7.0), &params(0.95), &config).unwrap_err();
        assert!(matches!(err, PolicyError::InvalidParameter { field, .. }
            if field == "days_per_year"));
    }

    #[test]
    fn reorder_point_always_dominates_safety_stock() {
        for lead_time in [1.0, 3.5, 14.0] {
            for service in [0.55, 0.9, 0.99] {
                let policy = compute_policy(
                    &forecast(42.0, 8.0, lead_time),
                    &params(service),
                    &EngineConfig::default(),
                )
                .unwrap();
                assert!(policy.reorder_point >= policy.safety_stock);
                assert!(policy.safety_stock >= 0.0);
            }
        }
    }
}
