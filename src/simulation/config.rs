// src/simulation/config.rs

/// Knobs for the inventory trajectory visualizations.
///
/// The defaults reproduce the reference behavior: a 30-day stochastic horizon
/// for the fixed-quantity chart, starting stock at triple the reorder point,
/// fixed orders at double the reorder point, and a 5-day tail after the
/// second scheduled arrival in the fixed-period projection.
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    /// Trace length for the fixed-quantity simulation, in days.
    pub horizon_days: usize,
    /// Starting inventory as a multiple of the reorder point.
    pub initial_stock_factor: f64,
    /// Fixed order size as a multiple of the reorder point.
    pub order_size_factor: f64,
    /// Days projected beyond `review_cycle + lead_time` in the fixed-period
    /// projection.
    pub projection_tail_days: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            horizon_days: 30,
            initial_stock_factor: 3.0,
            order_size_factor: 2.0,
            projection_tail_days: 5,
        }
    }
}

impl SimulationConfig {
    /// Trace length for the fixed-period projection, in days.
    pub fn projection_horizon_days(&self, review_cycle_days: u32, lead_time_days: u32) -> usize {
        (review_cycle_days + lead_time_days + self.projection_tail_days) as usize
    }
}
