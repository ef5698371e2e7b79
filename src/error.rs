// src/error.rs

use serde::Serialize;
use thiserror::Error;

/// Everything that can stop a policy calculation.
///
/// Validation failures are collected exhaustively (one message per offending
/// field) rather than fail-fast, so the caller can surface all of them at
/// once. No variant is ever raised as a panic across the crate boundary.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PolicyError {
    /// One or more named inputs were missing or non-positive.
    #[error("invalid input: {}", .0.join("; "))]
    Validation(Vec<String>),

    /// The normal quantile is infinite at 0% and 100%, so both are rejected.
    #[error("stockout probability must be strictly between 0 and 100, got {0}")]
    InvalidStockoutProbability(f64),

    /// A demand observation below zero (consumption cannot be negative).
    #[error("demand sample entry {index} is negative ({value})")]
    NegativeDemand { index: usize, value: f64 },

    /// The simulated consumption distribution could not be constructed.
    #[error("invalid demand distribution: {0}")]
    Distribution(String),
}

impl PolicyError {
    /// The individual validation messages, if this is a validation failure.
    pub fn validation_messages(&self) -> Option<&[String]> {
        match self {
            PolicyError::Validation(messages) => Some(messages),
            _ => None,
        }
    }
}

/// Non-fatal conditions worth surfacing alongside a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Error)]
pub enum Warning {
    /// The sample standard deviation is 0, which silently suppresses the
    /// safety-stock term. Mathematically valid, but usually means the demand
    /// history is constant or too short.
    #[error("demand sample has zero variability; safety stock collapses to 0")]
    ZeroDemandVariability,
}
