//! # Fuzzy Climate Controller
//!
//! Computes continuous air-conditioning and heating power levels from three
//! crisp sensor readings (inside temperature, outside temperature,
//! humidity) with a rule-based Mamdani fuzzy controller.
//!
//! ## Modules
//!
//! - **fuzzy**: the general-purpose inference engine (membership functions,
//!   linguistic variables, rules, aggregation, centroid defuzzification)
//! - **thermostat**: the fixed 3-input / 2-output / 12-rule instantiation,
//!   plus the grid scanner and CSV export
//! - **cli**: the interactive menu
//! - **config** / **telemetry**: layered configuration and tracing setup

pub mod cli;
pub mod config;
pub mod fuzzy;
pub mod telemetry;
pub mod thermostat;
