pub mod demand;
pub mod validate;
