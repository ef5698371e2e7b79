// src/policy/fixed_period.rs

use serde::Serialize;

use crate::error::{PolicyError, Warning};
use crate::model::demand::{DemandSample, ServiceLevel};
use crate::model::validate;

/// Inputs for the fixed-period (periodic review) policy.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedPeriodParams {
    pub lead_time_days: u32,
    pub review_cycle_days: u32,
    pub current_inventory: f64,
    pub demand: DemandSample,
    pub service_level: ServiceLevel,
}

/// Derived order parameters for the fixed-period policy.
///
/// `order_quantity` is returned unclamped: a negative value means current
/// inventory already exceeds the target level. Use
/// [`FixedPeriodResult::recommended_order_quantity`] for the display figure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FixedPeriodResult {
    pub safety_stock: f64,
    pub target_level: f64,
    pub order_quantity: f64,
    pub risk_period_days: u32,
    pub expected_demand_over_risk_period: f64,
    pub average_daily_demand: f64,
    pub demand_std_dev: f64,
    pub z_score: f64,
    pub service_level_pct: f64,
    pub warnings: Vec<Warning>,
}

impl FixedPeriodResult {
    /// Order quantity clamped at zero, the figure shown as "recommended
    /// order". Distinguishable from the raw `order_quantity`, which stays
    /// negative when no order is needed.
    pub fn recommended_order_quantity(&self) -> f64 {
        self.order_quantity.max(0.0)
    }

    /// Demand variability relative to its mean, in percent.
    pub fn coefficient_of_variation_pct(&self) -> f64 {
        (self.demand_std_dev / self.average_daily_demand) * 100.0
    }
}

/// Computes safety stock, target level and order quantity for a fixed-period
/// policy.
///
/// Uncertainty must be covered over the full risk period (review cycle plus
/// lead time), so safety stock is `z * sigma * sqrt(cycle + lead_time)`. The
/// target level adds the expected demand over that window, and the order
/// quantity is whatever is missing from current inventory to reach it.
pub fn plan_fixed_period(params: &FixedPeriodParams) -> Result<FixedPeriodResult, PolicyError> {
    let violations = validate::collect_invalid(&[
        (
            "stockout_probability_pct",
            Some(params.service_level.stockout_probability_pct),
        ),
        ("lead_time_days", Some(f64::from(params.lead_time_days))),
        (
            "review_cycle_days",
            Some(f64::from(params.review_cycle_days)),
        ),
        ("current_inventory", Some(params.current_inventory)),
        ("total_7_day_consumption", Some(params.demand.total())),
    ]);
    if !violations.is_empty() {
        return Err(PolicyError::Validation(violations));
    }

    let average_daily_demand = params.demand.average_daily();
    let demand_std_dev = params.demand.std_dev();
    let z_score = params.service_level.z_score()?;

    let risk_period_days = params.review_cycle_days + params.lead_time_days;
    let risk_period = f64::from(risk_period_days);

    let safety_stock = z_score * demand_std_dev * risk_period.sqrt();
    let expected_demand_over_risk_period = average_daily_demand * risk_period;
    let target_level = expected_demand_over_risk_period + safety_stock;
    let order_quantity = target_level - params.current_inventory;

    let mut warnings = Vec::new();
    if demand_std_dev == 0.0 {
        warnings.push(Warning::ZeroDemandVariability);
    }

    Ok(FixedPeriodResult {
        safety_stock,
        target_level,
        order_quantity,
        risk_period_days,
        expected_demand_over_risk_period,
        average_daily_demand,
        demand_std_dev,
        z_score,
        service_level_pct: params.service_level.service_level_pct(),
        warnings,
    })
}
