// src/stats.rs

use statrs::distribution::{ContinuousCDF, Normal};

use crate::error::PolicyError;

/// Fraction of the average daily demand assumed as its standard deviation
/// when no per-day history is available.
const HEURISTIC_VARIABILITY_RATIO: f64 = 0.2;

/// Z-score (service-level factor) for an acceptable stockout probability.
///
/// A stockout probability of 10% means a 90% service level, and the returned
/// value is the standard normal quantile at 0.90. The quantile is infinite at
/// the boundaries, so probabilities outside `(0, 100)` are rejected instead
/// of letting infinity leak into downstream formulas.
pub fn z_score(stockout_probability_pct: f64) -> Result<f64, PolicyError> {
    if !(stockout_probability_pct > 0.0 && stockout_probability_pct < 100.0) {
        return Err(PolicyError::InvalidStockoutProbability(
            stockout_probability_pct,
        ));
    }

    let service_level = (100.0 - stockout_probability_pct) / 100.0;
    // Parameters are constants, construction cannot fail.
    let standard_normal = Normal::new(0.0, 1.0).unwrap();
    Ok(standard_normal.inverse_cdf(service_level))
}

/// Sample standard deviation with Bessel's correction (divide by n - 1).
///
/// Returns 0.0 for fewer than 2 samples rather than dividing by zero; callers
/// should treat that as a degenerate input (see [`crate::error::Warning`]).
pub fn empirical_std_dev(samples: &[f64]) -> f64 {
    let n = samples.len();
    if n < 2 {
        return 0.0;
    }

    let mean = samples.iter().sum::<f64>() / n as f64;
    let variance = samples
        .iter()
        .map(|value| (value - mean).powi(2))
        .sum::<f64>()
        / (n - 1) as f64;

    variance.sqrt()
}

/// Heuristic fallback estimator: assumes daily variability is 20% of the
/// average daily demand derived from a 7-day consumption total.
///
/// Only for callers without per-day history; the primary path is always
/// [`empirical_std_dev`] over the actual observations.
pub fn heuristic_std_dev(total_7_day_consumption: f64) -> f64 {
    let avg_daily = total_7_day_consumption / 7.0;
    avg_daily * HEURISTIC_VARIABILITY_RATIO
}
