// src/engine/config.rs

/// Engine-wide sizing settings, shared across a batch run.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Days used to annualize daily demand for the EOQ formula.
    pub days_per_year: f64,
    /// Lot size used when a zero cost input makes the EOQ formula
    /// inapplicable. `None` sizes such orders at zero.
    pub fixed_batch_size: Option<f64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            days_per_year: 365.0,
            fixed_batch_size: None,
        }
    }
}
