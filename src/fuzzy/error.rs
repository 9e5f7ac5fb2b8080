use thiserror::Error;

/// Errors raised while building fuzzy entities.
///
/// All of these are construction-time failures: a successfully built
/// [`InferenceEngine`](crate::fuzzy::InferenceEngine) can never observe them
/// at evaluation time.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FuzzyError {
    #[error("membership breakpoints must be non-decreasing (got {0:?})")]
    NonMonotonicBreakpoints(Vec<f64>),

    #[error("membership degree {degree} at breakpoint {x} is outside [0, 1]")]
    DegreeOutOfRange { x: f64, degree: f64 },

    #[error("a membership function needs at least two breakpoints")]
    TooFewBreakpoints,

    #[error("variable '{variable}' has an inverted domain ({min} > {max})")]
    InvertedDomain {
        variable: String,
        min: f64,
        max: f64,
    },

    #[error("variable '{variable}' has a non-positive universe step ({step})")]
    InvalidStep { variable: String, step: f64 },

    #[error("duplicate label '{label}' on variable '{variable}'")]
    DuplicateLabel { variable: String, label: String },

    #[error("duplicate variable '{0}' in engine")]
    DuplicateVariable(String),

    #[error("rule references unknown {kind} variable '{variable}'")]
    UnknownVariable { kind: VariableKind, variable: String },

    #[error("rule references unknown label '{label}' on variable '{variable}'")]
    UnknownLabel { variable: String, label: String },

    #[error("consequent weight {weight} on '{variable}' is outside [0, 1]")]
    InvalidWeight { variable: String, weight: f64 },
}

/// Which side of the engine a rule reference was resolved against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariableKind {
    Input,
    Output,
}

impl std::fmt::Display for VariableKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VariableKind::Input => write!(f, "input"),
            VariableKind::Output => write!(f, "output"),
        }
    }
}
