//! # Thermostat Rule Base
//!
//! The domain instantiation of the fuzzy engine: three climate inputs, two
//! power outputs and a fixed table of twelve rules. The rule base is static
//! configuration; nothing here is learned or tuned at runtime.

pub mod grid;

use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use crate::fuzzy::{
    Antecedent, EngineBuilder, FuzzyError, InferenceEngine, LinguisticVariable,
    MembershipFunction, Rule,
};

pub const TEMP_INSIDE: &str = "tempInside";
pub const TEMP_OUTSIDE: &str = "tempOutside";
pub const HUMIDITY: &str = "humidity";
pub const AC_POWER: &str = "acPower";
pub const HEATER_POWER: &str = "heaterPower";

/// Valid sensor ranges, enforced by the CLI layer; the engine itself clamps.
pub const TEMP_INSIDE_RANGE: (f64, f64) = (0.0, 40.0);
pub const TEMP_OUTSIDE_RANGE: (f64, f64) = (-10.0, 40.0);
pub const HUMIDITY_RANGE: (f64, f64) = (0.0, 100.0);

/// One set of crisp sensor readings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClimateReading {
    pub temp_inside: f64,
    pub temp_outside: f64,
    pub humidity: f64,
}

/// Crisp controller outputs in percent, rounded to 2 decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PowerLevels {
    pub ac_power: f64,
    pub heater_power: f64,
}

/// The thermostat facade: an immutable rule base plus a pure evaluator.
///
/// Shareable across threads; every call allocates a fresh result.
#[derive(Debug)]
pub struct Thermostat {
    engine: InferenceEngine,
}

impl Thermostat {
    /// Builds the rule base with the default universe step of 1.0.
    pub fn new() -> Result<Self, FuzzyError> {
        Self::with_step(1.0)
    }

    /// Builds the rule base with a custom universe step.
    ///
    /// A finer step refines centroid integration at a proportional cost in
    /// evaluation time.
    pub fn with_step(step: f64) -> Result<Self, FuzzyError> {
        let temp_inside = LinguisticVariable::with_step(TEMP_INSIDE, 0.0..=40.0, step)?
            .term("cold", MembershipFunction::trapezoid(0.0, 0.0, 10.0, 18.0)?)?
            .term("comfortable", MembershipFunction::triangle(17.0, 22.0, 27.0)?)?
            .term("hot", MembershipFunction::trapezoid(25.0, 30.0, 40.0, 40.0)?)?;

        let temp_outside = LinguisticVariable::with_step(TEMP_OUTSIDE, -10.0..=40.0, step)?
            .term("cold", MembershipFunction::trapezoid(-10.0, -10.0, 0.0, 10.0)?)?
            .term("mild", MembershipFunction::triangle(5.0, 15.0, 25.0)?)?
            .term("hot", MembershipFunction::trapezoid(20.0, 30.0, 40.0, 40.0)?)?;

        let humidity = LinguisticVariable::with_step(HUMIDITY, 0.0..=100.0, step)?
            .term("low", MembershipFunction::trapezoid(0.0, 0.0, 20.0, 40.0)?)?
            .term("medium", MembershipFunction::triangle(30.0, 50.0, 70.0)?)?
            .term("high", MembershipFunction::trapezoid(50.0, 80.0, 100.0, 100.0)?)?;

        // acPower "low"/"high" and heaterPower "high" are never targeted by
        // the rule table below; they stay declared to keep the label scale
        // uniform across both outputs.
        let ac_power = power_variable(AC_POWER, step)?;
        let heater_power = power_variable(HEATER_POWER, step)?;

        let engine = EngineBuilder::new()
            .input(temp_inside)
            .input(temp_outside)
            .input(humidity)
            .output(ac_power)
            .output(heater_power)
            .rule(Rule::when(inside("cold")).then(AC_POWER, "none"))
            .rule(Rule::when(inside("comfortable").and(outside("hot"))).then(AC_POWER, "medium"))
            .rule(Rule::when(inside("hot").and(humid("low"))).then(AC_POWER, "medium"))
            .rule(Rule::when(inside("hot").and(humid("medium"))).then(AC_POWER, "medium"))
            .rule(Rule::when(inside("hot").and(humid("high"))).then(AC_POWER, "full"))
            .rule(Rule::when(inside("cold")).then(HEATER_POWER, "full"))
            .rule(Rule::when(inside("cold").and(outside("cold"))).then(HEATER_POWER, "full"))
            .rule(Rule::when(inside("cold").and(outside("mild"))).then(HEATER_POWER, "medium"))
            .rule(Rule::when(inside("cold").and(outside("hot"))).then(HEATER_POWER, "medium"))
            .rule(
                Rule::when(inside("comfortable").and(outside("cold"))).then(HEATER_POWER, "medium"),
            )
            .rule(Rule::when(inside("comfortable")).then(HEATER_POWER, "low"))
            .rule(Rule::when(inside("hot")).then(HEATER_POWER, "none"))
            .build()?;

        Ok(Self { engine })
    }

    pub fn engine(&self) -> &InferenceEngine {
        &self.engine
    }

    /// Runs a single simulation and rounds both outputs to 2 decimals.
    pub fn run_once(&self, reading: ClimateReading) -> PowerLevels {
        let inputs = HashMap::from([
            (TEMP_INSIDE.to_string(), reading.temp_inside),
            (TEMP_OUTSIDE.to_string(), reading.temp_outside),
            (HUMIDITY.to_string(), reading.humidity),
        ]);
        let outputs = self.engine.evaluate(&inputs);
        let levels = PowerLevels {
            ac_power: round2(outputs.get(AC_POWER).copied().unwrap_or(0.0)),
            heater_power: round2(outputs.get(HEATER_POWER).copied().unwrap_or(0.0)),
        };
        debug!(
            temp_inside = reading.temp_inside,
            temp_outside = reading.temp_outside,
            humidity = reading.humidity,
            ac_power = levels.ac_power,
            heater_power = levels.heater_power,
            "simulation step"
        );
        levels
    }
}

fn power_variable(name: &str, step: f64) -> Result<LinguisticVariable, FuzzyError> {
    LinguisticVariable::with_step(name, 0.0..=100.0, step)?
        .term("none", MembershipFunction::triangle(0.0, 0.0, 0.0)?)?
        .term("low", MembershipFunction::triangle(0.0, 0.0, 30.0)?)?
        .term("medium", MembershipFunction::triangle(20.0, 50.0, 80.0)?)?
        .term("high", MembershipFunction::triangle(60.0, 100.0, 100.0)?)?
        .term("full", MembershipFunction::triangle(100.0, 100.0, 100.0)?)
}

fn inside(label: &str) -> Antecedent {
    Antecedent::term(TEMP_INSIDE, label)
}

fn outside(label: &str) -> Antecedent {
    Antecedent::term(TEMP_OUTSIDE, label)
}

fn humid(label: &str) -> Antecedent {
    Antecedent::term(HUMIDITY, label)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
