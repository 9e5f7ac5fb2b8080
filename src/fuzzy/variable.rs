use std::collections::HashMap;
use std::ops::RangeInclusive;

use crate::fuzzy::error::FuzzyError;
use crate::fuzzy::membership::MembershipFunction;

/// A named numeric domain with a set of labeled fuzzy terms.
///
/// The domain `[min, max]` is sampled at a fixed step into the variable's
/// universe, the discretization grid used for aggregation and centroid
/// integration. All terms of a variable share that universe.
#[derive(Debug, Clone)]
pub struct LinguisticVariable {
    name: String,
    min: f64,
    max: f64,
    universe: Vec<f64>,
    terms: Vec<(String, MembershipFunction)>,
}

impl LinguisticVariable {
    /// Creates a variable over `range` with the default universe step of 1.0.
    pub fn new(name: impl Into<String>, range: RangeInclusive<f64>) -> Result<Self, FuzzyError> {
        Self::with_step(name, range, 1.0)
    }

    /// Creates a variable over `range`, sampled every `step` units.
    pub fn with_step(
        name: impl Into<String>,
        range: RangeInclusive<f64>,
        step: f64,
    ) -> Result<Self, FuzzyError> {
        let name = name.into();
        let (min, max) = (*range.start(), *range.end());
        if !(min <= max) {
            return Err(FuzzyError::InvertedDomain {
                variable: name,
                min,
                max,
            });
        }
        if !(step > 0.0) {
            return Err(FuzzyError::InvalidStep {
                variable: name,
                step,
            });
        }
        let count = ((max - min) / step).floor() as usize + 1;
        let universe = (0..count).map(|i| min + i as f64 * step).collect();
        Ok(Self {
            name,
            min,
            max,
            universe,
            terms: Vec::new(),
        })
    }

    /// Registers a labeled term, consuming and returning the variable so
    /// definitions chain. Duplicate labels are a configuration error.
    pub fn term(
        mut self,
        label: impl Into<String>,
        membership: MembershipFunction,
    ) -> Result<Self, FuzzyError> {
        let label = label.into();
        if self.terms.iter().any(|(name, _)| *name == label) {
            return Err(FuzzyError::DuplicateLabel {
                variable: self.name,
                label,
            });
        }
        self.terms.push((label, membership));
        Ok(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The inclusive domain bounds.
    pub fn domain(&self) -> (f64, f64) {
        (self.min, self.max)
    }

    /// The discretization grid shared by every term of this variable.
    pub fn universe(&self) -> &[f64] {
        &self.universe
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(|(label, _)| label.as_str())
    }

    pub fn membership(&self, label: &str) -> Option<&MembershipFunction> {
        self.terms
            .iter()
            .find(|(name, _)| name == label)
            .map(|(_, mf)| mf)
    }

    /// Computes the degree of every registered label for a crisp value.
    ///
    /// The value is clamped into the variable's domain first; out-of-domain
    /// readings saturate at the boundary instead of being rejected.
    pub fn fuzzify(&self, x: f64) -> HashMap<&str, f64> {
        let x = x.clamp(self.min, self.max);
        self.terms
            .iter()
            .map(|(label, mf)| (label.as_str(), mf.degree(x)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inside_temp() -> LinguisticVariable {
        LinguisticVariable::new("tempInside", 0.0..=40.0)
            .unwrap()
            .term("cold", MembershipFunction::trapezoid(0.0, 0.0, 10.0, 18.0).unwrap())
            .unwrap()
            .term("comfortable", MembershipFunction::triangle(17.0, 22.0, 27.0).unwrap())
            .unwrap()
            .term("hot", MembershipFunction::trapezoid(25.0, 30.0, 40.0, 40.0).unwrap())
            .unwrap()
    }

    #[test]
    fn universe_is_inclusive_of_both_bounds() {
        let var = inside_temp();
        assert_eq!(var.universe().len(), 41);
        assert_eq!(var.universe()[0], 0.0);
        assert_eq!(var.universe()[40], 40.0);
    }

    #[test]
    fn fuzzify_returns_every_label() {
        let var = inside_temp();
        let degrees = var.fuzzify(15.0);
        assert_eq!(degrees.len(), 3);
        assert_eq!(degrees["cold"], 0.375);
        assert_eq!(degrees["comfortable"], 0.0);
        assert_eq!(degrees["hot"], 0.0);
    }

    #[test]
    fn fuzzify_clamps_out_of_domain_values() {
        let var = inside_temp();
        assert_eq!(var.fuzzify(-5.0), var.fuzzify(0.0));
        assert_eq!(var.fuzzify(55.0), var.fuzzify(40.0));
    }

    #[test]
    fn duplicate_label_is_rejected() {
        let err = inside_temp()
            .term("cold", MembershipFunction::triangle(0.0, 1.0, 2.0).unwrap())
            .unwrap_err();
        assert_eq!(
            err,
            FuzzyError::DuplicateLabel {
                variable: "tempInside".into(),
                label: "cold".into(),
            }
        );
    }

    #[test]
    fn inverted_domain_is_rejected() {
        let err = LinguisticVariable::new("broken", 10.0..=0.0).unwrap_err();
        assert!(matches!(err, FuzzyError::InvertedDomain { .. }));
    }

    #[test]
    fn non_positive_step_is_rejected() {
        let err = LinguisticVariable::with_step("broken", 0.0..=10.0, 0.0).unwrap_err();
        assert!(matches!(err, FuzzyError::InvalidStep { .. }));
    }

    #[test]
    fn fractional_step_refines_the_universe() {
        let var = LinguisticVariable::with_step("fine", 0.0..=10.0, 0.5).unwrap();
        assert_eq!(var.universe().len(), 21);
        assert_eq!(var.universe()[1], 0.5);
    }
}
