// src/engine/batch.rs

use std::collections::HashMap;

use thiserror::Error;
use tracing::debug;

use crate::engine::compute::compute_policy;
use crate::engine::config::EngineConfig;
use crate::engine::traits::ForecastProvider;
use crate::error::PolicyError;
use crate::model::{DemandForecast, InventoryPolicy, SupplyParameters};

/// Parameter lookup key: (sku_id, location_id).
pub type SkuLocation = (String, String);

/// One failed batch item.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchFailure {
    pub sku_id: String,
    pub location_id: String,
    pub error: PolicyError,
}

/// Outcome of a batch run: successful policies plus per-item failures.
///
/// One bad SKU configuration never blocks the rest of the catalog;
/// callers inspect `failures` and decide whether partial results are
/// acceptable.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub policies: Vec<InventoryPolicy>,
    pub failures: Vec<BatchFailure>,
}

impl BatchOutcome {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// For callers that treat any per-item failure as fatal.
    pub fn into_result(self) -> Result<Vec<InventoryPolicy>, PartialBatchFailure> {
        if self.failures.is_empty() {
            Ok(self.policies)
        } else {
            Err(PartialBatchFailure {
                policies: self.policies,
                failures: self.failures,
            })
        }
    }
}

/// Aggregate error raised when a batch completed with failures.
///
/// Carries both the successes and the failure list so nothing computed
/// is lost.
#[derive(Debug, Error, Clone)]
#[error("{} policy computations failed ({} succeeded)", .failures.len(), .policies.len())]
pub struct PartialBatchFailure {
    pub policies: Vec<InventoryPolicy>,
    pub failures: Vec<BatchFailure>,
}

/// Computes a policy per forecast, independently.
///
/// Each item only reads its own inputs, so this map is safe to fan out
/// across threads; the sequential loop here is the simplest correct
/// form.
pub fn compute_policy_batch(
    forecasts: &[DemandForecast],
    params_by_key: &HashMap<SkuLocation, SupplyParameters>,
    config: &EngineConfig,
) -> BatchOutcome {
    let mut outcome = BatchOutcome::default();

    for forecast in forecasts {
        let key = (forecast.sku_id.clone(), forecast.location_id.clone());
        let result = match params_by_key.get(&key) {
            Some(params) => compute_policy(forecast, params, config),
            None => Err(PolicyError::MissingParameters {
                sku_id: forecast.sku_id.clone(),
                location_id: forecast.location_id.clone(),
            }),
        };

        match result {
            Ok(policy) => outcome.policies.push(policy),
            Err(error) => {
                debug!(
                    sku_id = %forecast.sku_id,
                    location_id = %forecast.location_id,
                    %error,
                    "policy computation failed"
                );
                outcome.failures.push(BatchFailure {
                    sku_id: forecast.sku_id.clone(),
                    location_id: forecast.location_id.clone(),
                    error,
                });
            }
        }
    }

    outcome
}

/// Batch orchestrator: owns the parameter catalog and engine settings,
/// pulls forecasts from an injected [`ForecastProvider`].
#[derive(Debug)]
pub struct BatchRunner {
    config: EngineConfig,
    params: HashMap<SkuLocation, SupplyParameters>,
}

impl BatchRunner {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            params: HashMap::new(),
        }
    }

    /// Registers supply parameters for the pair they name, replacing
    /// any previous entry.
    pub fn upsert_parameters(&mut self, params: SupplyParameters) {
        self.params
            .insert((params.sku_id.clone(), params.location_id.clone()), params);
    }

    pub fn run(&self, provider: &mut dyn ForecastProvider) -> BatchOutcome {
        let forecasts = provider.forecasts();
        compute_policy_batch(&forecasts, &self.params, &self.config)
    }
}
