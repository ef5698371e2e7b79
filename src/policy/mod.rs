pub mod fixed_period;
pub mod fixed_quantity;
