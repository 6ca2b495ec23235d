// src/io/demand.rs

use chrono::NaiveDate;
use rand::{thread_rng, Rng};
use rand_distr::{Distribution, Normal};

use crate::engine::traits::ForecastProvider;
use crate::model::DemandForecast;

/// Generates a demand series where every day has the exact same volume.
/// Useful for testing stability (e.g., step-response tests).
pub fn generate_constant_series(days: usize, value: f64) -> Vec<f64> {
    vec![value; days]
}

/// Generates a demand series from a Normal (Bell Curve) distribution.
///
/// # Arguments
/// * `days` - Length of the series.
/// * `mean` - The average daily demand (e.g., 100.0).
/// * `std_dev` - The standard deviation (volatility) (e.g., 10.0).
pub fn generate_normal_series(days: usize, mean: f64, std_dev: f64) -> Vec<f64> {
    let mut rng = thread_rng();
    let normal = Normal::new(mean, std_dev).unwrap();

    let mut series = Vec::with_capacity(days);

    for _ in 0..days {
        let val: f64 = normal.sample(&mut rng);

        // Demand cannot be negative; clamp low draws to 0.
        series.push(val.max(0.0));
    }

    series
}

/// Generates a "Step" pattern: `base` daily demand until `step_day`,
/// then a sustained jump to `surge`. The classic shape for stressing a
/// replenishment policy against a level shift.
pub fn generate_step_series(days: usize, base: f64, surge: f64, step_day: usize) -> Vec<f64> {
    let mut series = Vec::with_capacity(days);
    for day in 0..days {
        if day < step_day {
            series.push(base);
        } else {
            series.push(surge);
        }
    }
    series
}

/// Forecast provider that draws a synthetic catalog once at
/// construction and serves the same snapshot on every call, so a batch
/// run and any later inspection see consistent data.
#[derive(Debug, Clone)]
pub struct SyntheticForecastProvider {
    forecasts: Vec<DemandForecast>,
}

impl SyntheticForecastProvider {
    /// Draws one forecast per catalog pair. Mean daily demand is
    /// uniform in `mean_range`; the standard deviation is
    /// `volatility` times the mean; lead time is uniform in
    /// `lead_time_range` (whole days).
    pub fn generate(
        catalog: &[(String, String)],
        period: NaiveDate,
        mean_range: (f64, f64),
        volatility: f64,
        lead_time_range: (f64, f64),
    ) -> Self {
        let mut rng = thread_rng();
        let forecasts = catalog
            .iter()
            .map(|(sku_id, location_id)| {
                let mean_demand = rng.gen_range(mean_range.0..=mean_range.1);
                let lead_time_days = rng.gen_range(lead_time_range.0..=lead_time_range.1).round();
                DemandForecast {
                    sku_id: sku_id.clone(),
                    location_id: location_id.clone(),
                    period,
                    mean_demand,
                    demand_std_dev: mean_demand * volatility,
                    lead_time_days,
                }
            })
            .collect();

        Self { forecasts }
    }

    /// The snapshot this provider serves.
    pub fn snapshot(&self) -> &[DemandForecast] {
        &self.forecasts
    }
}

impl ForecastProvider for SyntheticForecastProvider {
    fn forecasts(&mut self) -> Vec<DemandForecast> {
        self.forecasts.clone()
    }
}
