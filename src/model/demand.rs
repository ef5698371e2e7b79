// src/model/demand.rs

use serde::{Deserialize, Serialize};

use crate::error::PolicyError;
use crate::stats;

/// Number of daily observations in a demand window.
pub const SAMPLE_DAYS: usize = 7;

/// One week of historical daily consumption, oldest day first.
///
/// The window is always exactly 7 observations and is only ever replaced
/// wholesale; there is no partial update. Entries are volumes, so negatives
/// are rejected at construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DemandSample([f64; SAMPLE_DAYS]);

impl DemandSample {
    pub fn new(values: [f64; SAMPLE_DAYS]) -> Result<Self, PolicyError> {
        for (index, &value) in values.iter().enumerate() {
            if value < 0.0 {
                return Err(PolicyError::NegativeDemand { index, value });
            }
        }
        Ok(Self(values))
    }

    /// Total consumption over the window.
    pub fn total(&self) -> f64 {
        self.0.iter().sum()
    }

    /// Average daily demand over the window.
    pub fn average_daily(&self) -> f64 {
        self.total() / SAMPLE_DAYS as f64
    }

    /// Sample standard deviation of the daily observations.
    pub fn std_dev(&self) -> f64 {
        stats::empirical_std_dev(&self.0)
    }

    pub fn values(&self) -> &[f64; SAMPLE_DAYS] {
        &self.0
    }
}

/// Acceptable stockout probability, expressed in percent.
///
/// A spec of 10 means the caller tolerates running out of stock in 10% of
/// replenishment cycles, i.e. a 90% service level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ServiceLevel {
    pub stockout_probability_pct: f64,
}

impl ServiceLevel {
    pub fn new(stockout_probability_pct: f64) -> Self {
        Self {
            stockout_probability_pct,
        }
    }

    /// The complementary service level in percent (100 - p).
    pub fn service_level_pct(&self) -> f64 {
        100.0 - self.stockout_probability_pct
    }

    /// Standard normal quantile at the service level.
    pub fn z_score(&self) -> Result<f64, PolicyError> {
        stats::z_score(self.stockout_probability_pct)
    }
}
