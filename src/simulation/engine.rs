// src/simulation/engine.rs

use rand::Rng;
use rand_distr::{Distribution, Normal};
use serde::Serialize;

use crate::error::PolicyError;
use crate::policy::fixed_period::{FixedPeriodParams, FixedPeriodResult};
use crate::policy::fixed_quantity::FixedQuantityResult;
use crate::simulation::config::SimulationConfig;

/// One point of a projected inventory trajectory.
///
/// Serialize lets traces go straight to CSV for charting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TracePoint {
    pub day: usize,
    pub inventory: f64,
}

/// Day-stepped stochastic simulation of a fixed-quantity policy.
///
/// Each day, in order: a pending shipment arrives if due, one random daily
/// consumption (normal, using the policy's mean and standard deviation) is
/// drawn and subtracted, and a fixed-size order is placed when inventory is
/// at or below the reorder point. At most one order is outstanding at a time
/// (single supplier, no expediting); a trigger while a shipment is in flight
/// is ignored. Recorded inventory is floored at zero, the internal level is
/// not.
///
/// The RNG is injected so tests can fix the sequence with a seeded generator.
pub struct ReplenishmentSimulation {
    config: SimulationConfig,
    daily_consumption: Normal<f64>,
    reorder_point: f64,
    order_quantity: f64,
    lead_time_days: usize,

    // Stepping state, public so callers can inspect mid-run.
    pub current_inventory: f64,
    pub in_transit_quantity: f64,
    pub arrival_day: Option<usize>,
    pub current_day: usize,
    pub trace: Vec<TracePoint>,
}

impl ReplenishmentSimulation {
    pub fn new(
        policy: &FixedQuantityResult,
        lead_time_days: u32,
        config: SimulationConfig,
    ) -> Result<Self, PolicyError> {
        let daily_consumption =
            Normal::new(policy.average_daily_demand, policy.demand_std_dev)
                .map_err(|e| PolicyError::Distribution(e.to_string()))?;

        Ok(Self {
            daily_consumption,
            reorder_point: policy.reorder_point,
            order_quantity: policy.reorder_point * config.order_size_factor,
            lead_time_days: lead_time_days as usize,
            current_inventory: policy.reorder_point * config.initial_stock_factor,
            in_transit_quantity: 0.0,
            arrival_day: None,
            current_day: 0,
            trace: Vec::with_capacity(config.horizon_days),
            config,
        })
    }

    /// Runs the simulation to the configured horizon and returns the trace.
    pub fn run<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &[TracePoint] {
        while self.current_day < self.config.horizon_days {
            self.step(rng);
        }
        &self.trace
    }

    /// Advances the simulation by one day.
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let day = self.current_day;

        // 1. Pending shipment arrives.
        if self.arrival_day == Some(day) && self.in_transit_quantity > 0.0 {
            self.current_inventory += self.in_transit_quantity;
            self.in_transit_quantity = 0.0;
            self.arrival_day = None;
        }

        // 2. Stochastic daily consumption.
        let consumption = self.daily_consumption.sample(rng);
        self.current_inventory -= consumption;

        // 3. Reorder, unless a shipment is already in flight.
        if self.current_inventory <= self.reorder_point && self.arrival_day.is_none() {
            self.in_transit_quantity = self.order_quantity;
            self.arrival_day = Some(day + self.lead_time_days);
        }

        // 4. Inventory is never reported negative.
        self.trace.push(TracePoint {
            day,
            inventory: self.current_inventory.max(0.0),
        });
        self.current_day += 1;
    }
}

/// Deterministic day-stepped projection of a fixed-period policy.
///
/// Day 0 records the starting inventory unchanged. Every later day subtracts
/// the average daily demand (no randomness, this chart is illustrative), and
/// the order quantity arrives twice when positive: at `lead_time + 1` and
/// again at `review_cycle + lead_time + 1`, modeling two successive
/// review-cycle orders landing on schedule.
pub fn project_fixed_period(
    params: &FixedPeriodParams,
    result: &FixedPeriodResult,
    config: &SimulationConfig,
) -> Vec<TracePoint> {
    let horizon = config.projection_horizon_days(params.review_cycle_days, params.lead_time_days);
    let first_arrival = (params.lead_time_days + 1) as usize;
    let second_arrival = (params.review_cycle_days + params.lead_time_days + 1) as usize;

    let mut inventory = params.current_inventory;
    let mut trace = Vec::with_capacity(horizon);

    for day in 0..horizon {
        if day == 0 {
            trace.push(TracePoint { day, inventory });
            continue;
        }

        inventory -= result.average_daily_demand;

        if day == first_arrival && result.order_quantity > 0.0 {
            inventory += result.order_quantity;
        } else if day == second_arrival && result.order_quantity > 0.0 {
            inventory += result.order_quantity;
        }

        trace.push(TracePoint {
            day,
            inventory: inventory.max(0.0),
        });
    }

    trace
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::demand::{DemandSample, ServiceLevel};
    use crate::policy::fixed_period::plan_fixed_period;
    use crate::policy::fixed_quantity::{plan_fixed_quantity, FixedQuantityParams};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn quantity_policy() -> FixedQuantityResult {
        let params = FixedQuantityParams {
            lead_time_days: 3,
            demand: DemandSample::new([21.0, 17.0, 20.0, 28.0, 16.0, 22.0, 16.0]).unwrap(),
            service_level: ServiceLevel::new(10.0),
        };
        plan_fixed_quantity(&params).unwrap()
    }

    /// A synthetic policy with zero variability, so consumption is exactly
    /// the mean every day and the trajectory is predictable.
    fn deterministic_policy(reorder_point: f64, daily_demand: f64) -> FixedQuantityResult {
        FixedQuantityResult {
            safety_stock: 0.0,
            reorder_point,
            average_daily_demand: daily_demand,
            demand_std_dev: 0.0,
            z_score: 0.0,
            service_level_pct: 50.0,
            warnings: vec![],
        }
    }

    #[test]
    fn recorded_inventory_is_never_negative() {
        let policy = quantity_policy();
        let mut sim =
            ReplenishmentSimulation::new(&policy, 3, SimulationConfig::default()).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let trace = sim.run(&mut rng);

        assert_eq!(trace.len(), 30);
        assert!(trace.iter().all(|point| point.inventory >= 0.0));
        assert_eq!(trace[0].day, 0);
        assert_eq!(trace[29].day, 29);
    }

    #[test]
    fn at_most_one_order_in_transit() {
        // Demand far above the reorder point triggers the policy every day.
        let policy = deterministic_policy(10.0, 50.0);
        let mut sim =
            ReplenishmentSimulation::new(&policy, 5, SimulationConfig::default()).unwrap();
        let mut rng = StdRng::seed_from_u64(1);

        sim.step(&mut rng);
        assert_eq!(sim.arrival_day, Some(5));
        assert_eq!(sim.in_transit_quantity, 20.0);

        // Inventory is below the reorder point again, but the in-flight
        // shipment suppresses a second order.
        sim.step(&mut rng);
        assert_eq!(sim.arrival_day, Some(5));
        assert_eq!(sim.in_transit_quantity, 20.0);
    }

    #[test]
    fn shipment_arrives_after_lead_time() {
        // Reorder point 100, start 300, order 200, demand 60/day, lead 2:
        // the trigger fires on day 3 and the shipment lands on day 5.
        let policy = deterministic_policy(100.0, 60.0);
        let mut sim =
            ReplenishmentSimulation::new(&policy, 2, SimulationConfig::default()).unwrap();
        let mut rng = StdRng::seed_from_u64(1);

        for _ in 0..6 {
            sim.step(&mut rng);
        }
        assert_eq!(sim.trace[3].inventory, 60.0);
        assert_eq!(sim.trace[4].inventory, 0.0);
        // Day 5: 0 + 200 arrival - 60 consumption.
        assert_eq!(sim.trace[5].inventory, 140.0);
        assert_eq!(sim.arrival_day, None);
        assert_eq!(sim.in_transit_quantity, 0.0);
    }

    fn period_scenario() -> (FixedPeriodParams, FixedPeriodResult) {
        let params = FixedPeriodParams {
            lead_time_days: 3,
            review_cycle_days: 7,
            current_inventory: 80.0,
            demand: DemandSample::new([35.0, 22.0, 15.0, 19.0, 13.0, 14.0, 22.0]).unwrap(),
            service_level: ServiceLevel::new(20.0),
        };
        let result = plan_fixed_period(&params).unwrap();
        (params, result)
    }

    #[test]
    fn projection_replenishes_exactly_twice_on_schedule() {
        let (params, result) = period_scenario();
        let config = SimulationConfig::default();
        let trace = project_fixed_period(&params, &result, &config);

        assert_eq!(trace.len(), 15);
        assert_eq!(trace[0].inventory, 80.0);
        // Pure depletion until the first arrival at lead_time + 1 = day 4.
        assert_eq!(trace[3].inventory, 20.0);
        let after_first = 20.0 - 20.0 + result.order_quantity;
        assert!((trace[4].inventory - after_first).abs() < 1e-9);
        // Second arrival at review + lead + 1 = day 11.
        let before_second = after_first - 6.0 * 20.0;
        assert!((trace[10].inventory - before_second).abs() < 1e-9);
        let after_second = before_second - 20.0 + result.order_quantity;
        assert!((trace[11].inventory - after_second).abs() < 1e-9);
    }

    #[test]
    fn projection_without_an_order_depletes_and_clamps_at_zero() {
        let (mut params, _) = period_scenario();
        // Enough on hand that the target level is already exceeded.
        params.current_inventory = 230.0;
        let result = plan_fixed_period(&params).unwrap();
        assert!(result.order_quantity < 0.0);

        let config = SimulationConfig::default();
        let trace = project_fixed_period(&params, &result, &config);

        // No arrivals, straight depletion: 230 - 20/day runs out on day 12.
        assert_eq!(trace[11].inventory, 10.0);
        assert_eq!(trace[12].inventory, 0.0);
        assert!(trace.iter().all(|point| point.inventory >= 0.0));
    }
}
