use std::collections::{HashMap, HashSet};

use crate::fuzzy::error::{FuzzyError, VariableKind};
use crate::fuzzy::rule::Rule;
use crate::fuzzy::variable::LinguisticVariable;

/// Collects variables and rules, then validates them into an engine.
///
/// Validation is all-or-nothing: a builder either produces a fully
/// consistent [`InferenceEngine`] or an error, never a half-built one.
#[derive(Debug, Default)]
pub struct EngineBuilder {
    inputs: Vec<LinguisticVariable>,
    outputs: Vec<LinguisticVariable>,
    rules: Vec<Rule>,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(mut self, variable: LinguisticVariable) -> Self {
        self.inputs.push(variable);
        self
    }

    pub fn output(mut self, variable: LinguisticVariable) -> Self {
        self.outputs.push(variable);
        self
    }

    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Validates cross references and freezes the rule base.
    ///
    /// Every antecedent term must name a declared input variable and label;
    /// every consequent must name a declared output variable and label with
    /// a weight in `[0, 1]`; variable names must be unique across the
    /// engine.
    pub fn build(self) -> Result<InferenceEngine, FuzzyError> {
        {
            let mut names = HashSet::new();
            for variable in self.inputs.iter().chain(&self.outputs) {
                if !names.insert(variable.name()) {
                    return Err(FuzzyError::DuplicateVariable(variable.name().to_string()));
                }
            }
        }

        for rule in &self.rules {
            let mut term_error = None;
            rule.antecedent().for_each_term(&mut |variable, label| {
                if term_error.is_some() {
                    return;
                }
                term_error = check_reference(&self.inputs, VariableKind::Input, variable, label);
            });
            if let Some(error) = term_error {
                return Err(error);
            }

            for consequent in rule.consequents() {
                if let Some(error) = check_reference(
                    &self.outputs,
                    VariableKind::Output,
                    &consequent.variable,
                    &consequent.label,
                ) {
                    return Err(error);
                }
                if !(0.0..=1.0).contains(&consequent.weight) {
                    return Err(FuzzyError::InvalidWeight {
                        variable: consequent.variable.clone(),
                        weight: consequent.weight,
                    });
                }
            }
        }

        Ok(InferenceEngine {
            inputs: self.inputs,
            outputs: self.outputs,
            rules: self.rules,
        })
    }
}

fn check_reference(
    variables: &[LinguisticVariable],
    kind: VariableKind,
    variable: &str,
    label: &str,
) -> Option<FuzzyError> {
    match variables.iter().find(|v| v.name() == variable) {
        None => Some(FuzzyError::UnknownVariable {
            kind,
            variable: variable.to_string(),
        }),
        Some(declared) if declared.membership(label).is_none() => Some(FuzzyError::UnknownLabel {
            variable: variable.to_string(),
            label: label.to_string(),
        }),
        Some(_) => None,
    }
}

/// A validated, immutable Mamdani rule base.
///
/// `evaluate` is a pure function of the rule base and the inputs, so a
/// single engine may be shared by any number of concurrent callers.
#[derive(Debug)]
pub struct InferenceEngine {
    inputs: Vec<LinguisticVariable>,
    outputs: Vec<LinguisticVariable>,
    rules: Vec<Rule>,
}

impl InferenceEngine {
    pub fn inputs(&self) -> &[LinguisticVariable] {
        &self.inputs
    }

    pub fn outputs(&self) -> &[LinguisticVariable] {
        &self.outputs
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Evaluates crisp inputs to crisp outputs.
    ///
    /// Inputs are fuzzified per variable (clamped into each domain), every
    /// rule's firing strength is computed, the targeted output shapes are
    /// clipped at `strength * weight` and merged by pointwise max over the
    /// output universe, and the aggregate is defuzzified by centroid.
    ///
    /// An output no rule fired for defuzzifies to 0.0. An input variable
    /// absent from `inputs` contributes zero membership to every rule that
    /// references it; neither case is an error.
    pub fn evaluate(&self, inputs: &HashMap<String, f64>) -> HashMap<String, f64> {
        let mut fuzzified = HashMap::with_capacity(self.inputs.len());
        for variable in &self.inputs {
            if let Some(&x) = inputs.get(variable.name()) {
                fuzzified.insert(variable.name(), variable.fuzzify(x));
            }
        }

        let strengths: Vec<f64> = self
            .rules
            .iter()
            .map(|rule| rule.antecedent().firing_strength(&fuzzified))
            .collect();

        let mut outputs = HashMap::with_capacity(self.outputs.len());
        for variable in &self.outputs {
            let universe = variable.universe();
            let mut aggregate = vec![0.0f64; universe.len()];

            for (rule, &strength) in self.rules.iter().zip(&strengths) {
                for consequent in rule.consequents() {
                    if consequent.variable != variable.name() {
                        continue;
                    }
                    let clip = strength * consequent.weight;
                    if clip <= 0.0 {
                        continue;
                    }
                    // Validated at build time, so the lookup always hits.
                    if let Some(membership) = variable.membership(&consequent.label) {
                        for (slot, &x) in aggregate.iter_mut().zip(universe) {
                            let clipped = membership.degree(x).min(clip);
                            if clipped > *slot {
                                *slot = clipped;
                            }
                        }
                    }
                }
            }

            outputs.insert(variable.name().to_string(), centroid(universe, &aggregate));
        }
        outputs
    }
}

/// Discrete centroid of an aggregated fuzzy set.
///
/// An identically zero set yields 0.0 rather than an error; "no rule fired"
/// is read as "no demand".
fn centroid(universe: &[f64], degrees: &[f64]) -> f64 {
    let mut weighted = 0.0;
    let mut total = 0.0;
    for (&x, &degree) in universe.iter().zip(degrees) {
        weighted += x * degree;
        total += degree;
    }
    if total == 0.0 {
        0.0
    } else {
        weighted / total
    }
}
