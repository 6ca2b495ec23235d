// src/engine/stats.rs

//! Standard normal helpers for service-level sizing.

use std::f64::consts::PI;

/// Approximate Inverse Cumulative Distribution Function (Quantile function) for Standard Normal Distribution.
///
/// Based on Abramowitz and Stegun formula 26.2.23.
/// The absolute error is less than 4.5e-4.
pub fn inverse_normal_cdf(p: f64) -> f64 {
    // Handle edge cases
    if p >= 1.0 {
        return 5.0;
    } // Cap at reasonable sigma
    if p <= 0.0 {
        return -5.0;
    }
    if p == 0.5 {
        return 0.0;
    }

    // Formula is valid for 0 < p <= 0.5
    // If p > 0.5, we use 1-p and negate the result
    let q = if p < 0.5 { p } else { 1.0 - p };

    let t = (-2.0 * q.ln()).sqrt();

    let c0 = 2.515517;
    let c1 = 0.802853;
    let c2 = 0.010328;

    let d1 = 1.432788;
    let d2 = 0.189269;
    let d3 = 0.001308;

    let numerator = c0 + c1 * t + c2 * t * t;
    let denominator = 1.0 + d1 * t + d2 * t * t + d3 * t * t * t;

    let x = t - (numerator / denominator);

    if p < 0.5 {
        -x
    } else {
        x
    }
}

/// Approximate Cumulative Distribution Function for the Standard Normal Distribution.
///
/// Based on Abramowitz and Stegun formula 26.2.17.
/// The absolute error is less than 7.5e-8.
pub fn normal_cdf(z: f64) -> f64 {
    let x = z.abs();

    let p = 0.2316419;
    let b1 = 0.319381530;
    let b2 = -0.356563782;
    let b3 = 1.781477937;
    let b4 = -1.821255978;
    let b5 = 1.330274429;

    let t = 1.0 / (1.0 + p * x);
    let pdf = (-x * x / 2.0).exp() / (2.0 * PI).sqrt();
    let poly = t * (b1 + t * (b2 + t * (b3 + t * (b4 + t * b5))));

    let upper_tail = pdf * poly;

    if z >= 0.0 {
        1.0 - upper_tail
    } else {
        upper_tail
    }
}
