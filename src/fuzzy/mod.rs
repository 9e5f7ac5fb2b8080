//! # Mamdani Fuzzy Inference
//!
//! A general-purpose rule-based fuzzy inference engine.
//!
//! ## Components
//!
//! - **MembershipFunction**: piecewise-linear degree-of-membership shapes
//! - **LinguisticVariable**: a named domain with labeled, overlapping terms
//! - **Rule**: an antecedent expression tree plus weighted consequents
//! - **InferenceEngine**: fuzzification, rule firing, max aggregation and
//!   centroid defuzzification over a discretized universe
//!
//! ## Usage
//!
//! ```rust
//! use std::collections::HashMap;
//! use fuzzy_climate_controller::fuzzy::{
//!     Antecedent, EngineBuilder, LinguisticVariable, MembershipFunction, Rule,
//! };
//!
//! # fn main() -> Result<(), fuzzy_climate_controller::fuzzy::FuzzyError> {
//! let engine = EngineBuilder::new()
//!     .input(
//!         LinguisticVariable::new("temperature", 0.0..=40.0)?
//!             .term("cold", MembershipFunction::trapezoid(0.0, 0.0, 10.0, 18.0)?)?,
//!     )
//!     .output(
//!         LinguisticVariable::new("power", 0.0..=100.0)?
//!             .term("high", MembershipFunction::triangle(60.0, 100.0, 100.0)?)?,
//!     )
//!     .rule(Rule::when(Antecedent::term("temperature", "cold")).then("power", "high"))
//!     .build()?;
//!
//! let outputs = engine.evaluate(&HashMap::from([("temperature".to_string(), 5.0)]));
//! assert!(outputs["power"] > 80.0);
//! # Ok(())
//! # }
//! ```

pub mod engine;
pub mod error;
pub mod membership;
pub mod rule;
pub mod variable;

pub use engine::{EngineBuilder, InferenceEngine};
pub use error::{FuzzyError, VariableKind};
pub use membership::MembershipFunction;
pub use rule::{Antecedent, Consequent, Rule};
pub use variable::LinguisticVariable;
