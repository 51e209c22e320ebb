//! Trade Engine
//!
//! Judges whether an exchange of dynasty assets between two teams is fair.
//! Asset values come from the value registry and pick table; this crate sums
//! each side, derives a fairness percentage and a verdict, and manages the
//! editable trade session around that calculation.

pub mod calculator;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod share;

#[cfg(test)]
mod integration_tests;

pub use calculator::{evaluate, FairnessCalculator};
pub use config::TradeConfig;
pub use engine::TradeSession;
pub use error::{Result, TradeError};
pub use models::*;
pub use share::SharedTrade;

pub use value_registry::{LeagueSettings, PickSlot};
