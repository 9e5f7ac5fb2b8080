use std::collections::HashMap;

/// An antecedent expression over `(variable, label)` terms.
///
/// The combinator set is closed, so the tree is a plain tagged enum with one
/// recursive evaluator: AND is min, OR is max, NOT is the complement.
#[derive(Debug, Clone, PartialEq)]
pub enum Antecedent {
    Term { variable: String, label: String },
    And(Box<Antecedent>, Box<Antecedent>),
    Or(Box<Antecedent>, Box<Antecedent>),
    Not(Box<Antecedent>),
}

impl Antecedent {
    /// A single `variable IS label` proposition.
    pub fn term(variable: impl Into<String>, label: impl Into<String>) -> Self {
        Antecedent::Term {
            variable: variable.into(),
            label: label.into(),
        }
    }

    pub fn and(self, other: Antecedent) -> Self {
        Antecedent::And(Box::new(self), Box::new(other))
    }

    pub fn or(self, other: Antecedent) -> Self {
        Antecedent::Or(Box::new(self), Box::new(other))
    }

    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Self {
        Antecedent::Not(Box::new(self))
    }

    /// Evaluates the expression against fuzzified inputs, yielding the
    /// rule's firing strength in `[0, 1]`.
    ///
    /// A term whose variable is absent from `fuzzified` reads as degree 0.
    pub fn firing_strength(&self, fuzzified: &HashMap<&str, HashMap<&str, f64>>) -> f64 {
        match self {
            Antecedent::Term { variable, label } => fuzzified
                .get(variable.as_str())
                .and_then(|degrees| degrees.get(label.as_str()))
                .copied()
                .unwrap_or(0.0),
            Antecedent::And(lhs, rhs) => lhs
                .firing_strength(fuzzified)
                .min(rhs.firing_strength(fuzzified)),
            Antecedent::Or(lhs, rhs) => lhs
                .firing_strength(fuzzified)
                .max(rhs.firing_strength(fuzzified)),
            Antecedent::Not(inner) => 1.0 - inner.firing_strength(fuzzified),
        }
    }

    /// Visits every `(variable, label)` term in the tree.
    pub(crate) fn for_each_term(&self, visit: &mut impl FnMut(&str, &str)) {
        match self {
            Antecedent::Term { variable, label } => visit(variable, label),
            Antecedent::And(lhs, rhs) | Antecedent::Or(lhs, rhs) => {
                lhs.for_each_term(visit);
                rhs.for_each_term(visit);
            }
            Antecedent::Not(inner) => inner.for_each_term(visit),
        }
    }
}

/// One `(output variable, label, weight)` target of a rule.
#[derive(Debug, Clone, PartialEq)]
pub struct Consequent {
    pub variable: String,
    pub label: String,
    pub weight: f64,
}

/// A fuzzy rule: an antecedent expression plus one or more consequents.
///
/// The consequent membership shapes are not resolved here; the engine clips
/// them lazily during aggregation, once the firing strength is known.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    antecedent: Antecedent,
    consequents: Vec<Consequent>,
}

impl Rule {
    pub fn when(antecedent: Antecedent) -> Self {
        Self {
            antecedent,
            consequents: Vec::new(),
        }
    }

    /// Adds a consequent with the default weight of 1.0.
    pub fn then(self, variable: impl Into<String>, label: impl Into<String>) -> Self {
        self.then_weighted(variable, label, 1.0)
    }

    pub fn then_weighted(
        mut self,
        variable: impl Into<String>,
        label: impl Into<String>,
        weight: f64,
    ) -> Self {
        self.consequents.push(Consequent {
            variable: variable.into(),
            label: label.into(),
            weight,
        });
        self
    }

    pub fn antecedent(&self) -> &Antecedent {
        &self.antecedent
    }

    pub fn consequents(&self) -> &[Consequent] {
        &self.consequents
    }
}
