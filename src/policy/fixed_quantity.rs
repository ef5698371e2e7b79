// src/policy/fixed_quantity.rs

use serde::Serialize;

use crate::error::{PolicyError, Warning};
use crate::model::demand::{DemandSample, ServiceLevel};
use crate::model::validate;

/// Inputs for the fixed-quantity (reorder-point) policy.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedQuantityParams {
    pub lead_time_days: u32,
    pub demand: DemandSample,
    pub service_level: ServiceLevel,
}

/// Derived reorder parameters for the fixed-quantity policy.
///
/// Values are not rounded; display formatting is the caller's concern.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FixedQuantityResult {
    pub safety_stock: f64,
    pub reorder_point: f64,
    pub average_daily_demand: f64,
    pub demand_std_dev: f64,
    pub z_score: f64,
    pub service_level_pct: f64,
    pub warnings: Vec<Warning>,
}

impl FixedQuantityResult {
    /// Demand variability relative to its mean, in percent.
    pub fn coefficient_of_variation_pct(&self) -> f64 {
        (self.demand_std_dev / self.average_daily_demand) * 100.0
    }
}

/// Computes safety stock and reorder point for a fixed-quantity policy.
///
/// Safety stock covers demand variability over the lead time:
/// `z * sigma * sqrt(lead_time)`. The reorder point adds the expected
/// lead-time demand on top. Validation failures are collected exhaustively
/// and returned as [`PolicyError::Validation`] before anything is computed.
pub fn plan_fixed_quantity(
    params: &FixedQuantityParams,
) -> Result<FixedQuantityResult, PolicyError> {
    let violations = validate::collect_invalid(&[
        (
            "stockout_probability_pct",
            Some(params.service_level.stockout_probability_pct),
        ),
        ("lead_time_days", Some(f64::from(params.lead_time_days))),
        ("total_7_day_consumption", Some(params.demand.total())),
    ]);
    if !violations.is_empty() {
        return Err(PolicyError::Validation(violations));
    }

    let average_daily_demand = params.demand.average_daily();
    let demand_std_dev = params.demand.std_dev();
    let z_score = params.service_level.z_score()?;

    let lead_time = f64::from(params.lead_time_days);
    let safety_stock = z_score * demand_std_dev * lead_time.sqrt();
    let reorder_point = average_daily_demand * lead_time + safety_stock;

    let mut warnings = Vec::new();
    if demand_std_dev == 0.0 {
        warnings.push(Warning::ZeroDemandVariability);
    }

    Ok(FixedQuantityResult {
        safety_stock,
        reorder_point,
        average_daily_demand,
        demand_std_dev,
        z_score,
        service_level_pct: params.service_level.service_level_pct(),
        warnings,
    })
}
