//! Reorder-parameter planning for two classical inventory-control policies.
//!
//! Given a 7-day window of historical daily consumption and a tolerated
//! stockout probability, the crate derives the parameters of a fixed-quantity
//! (reorder-point) policy and a fixed-period (periodic review) policy, and
//! projects the resulting inventory trajectories for charting. All
//! calculations are pure and synchronous; the presentation layer supplies raw
//! numbers and renders whatever comes back.

pub mod error;
pub mod io;
pub mod model;
pub mod policy;
pub mod simulation;
pub mod stats;

pub use error::{PolicyError, Warning};
pub use model::demand::{DemandSample, ServiceLevel};
pub use policy::fixed_period::{plan_fixed_period, FixedPeriodParams, FixedPeriodResult};
pub use policy::fixed_quantity::{plan_fixed_quantity, FixedQuantityParams, FixedQuantityResult};
pub use simulation::config::SimulationConfig;
pub use simulation::engine::{project_fixed_period, ReplenishmentSimulation, TracePoint};
