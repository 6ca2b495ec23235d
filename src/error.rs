//! Error model for the policy engine.
//!
//! Everything here is a deterministic data-validation failure: bad
//! configuration or out-of-range inputs. There are no transient or
//! infrastructure failures to retry.

use thiserror::Error;

/// Result type used across the engine.
pub type PolicyResult<T> = Result<T, PolicyError>;

/// A failed policy computation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PolicyError {
    /// An input was outside its documented domain. Named field and the
    /// received value are always surfaced; values are never clamped.
    #[error("invalid parameter `{field}`: got {value}, expected {expected}")]
    InvalidParameter {
        field: &'static str,
        value: f64,
        expected: &'static str,
    },

    /// A forecast arrived for a (sku, location) pair with no supply
    /// parameters configured.
    #[error("no supply parameters for sku `{sku_id}` at `{location_id}`")]
    MissingParameters { sku_id: String, location_id: String },
}

pub(crate) fn require_finite_non_negative(field: &'static str, value: f64) -> PolicyResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(PolicyError::InvalidParameter {
            field,
            value,
            expected: "a finite value >= 0",
        });
    }
    Ok(())
}

pub(crate) fn require_finite_positive(field: &'static str, value: f64) -> PolicyResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(PolicyError::InvalidParameter {
            field,
            value,
            expected: "a finite value > 0",
        });
    }
    Ok(())
}

/// Strictly inside (0, 1). The boundary values are rejected: a service
/// level of exactly 1 would demand an infinite safety factor.
pub(crate) fn require_open_probability(field: &'static str, value: f64) -> PolicyResult<()> {
    if !value.is_finite() || value <= 0.0 || value >= 1.0 {
        return Err(PolicyError::InvalidParameter {
            field,
            value,
            expected: "a probability strictly between 0 and 1",
        });
    }
    Ok(())
}
