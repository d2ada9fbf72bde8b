use crate::core::models::parameters::ParameterName;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A symmetry constraint attached to a single source parameter.
///
/// In catalog files a constraint is written as an inline table with exactly one
/// key, e.g. `alpha = { fixed = 90.0 }` or `a = { equals = ["b", "c"] }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterConstraint {
    /// The parameter's default is pinned to this value (degrees for angles).
    ///
    /// Only applied when defaults are loaded; edits may still move the value.
    Fixed(f64),
    /// Every edit of the source parameter is copied into each listed target.
    ///
    /// Propagation is one-directional: editing a target never writes back.
    Equals(Vec<ParameterName>),
}

impl ParameterConstraint {
    /// The pinned value of a [`ParameterConstraint::Fixed`] constraint.
    pub fn fixed_value(&self) -> Option<f64> {
        match self {
            ParameterConstraint::Fixed(value) => Some(*value),
            ParameterConstraint::Equals(_) => None,
        }
    }

    /// Parameters that receive every edit of the source; empty for fixed constraints.
    pub fn mirror_targets(&self) -> &[ParameterName] {
        match self {
            ParameterConstraint::Fixed(_) => &[],
            ParameterConstraint::Equals(targets) => targets,
        }
    }
}

impl fmt::Display for ParameterConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterConstraint::Fixed(value) => write!(f, "fixed at {}", value),
            ParameterConstraint::Equals(targets) => {
                let names: Vec<&str> = targets.iter().map(ParameterName::as_str).collect();
                write!(f, "mirrored into {}", names.join(", "))
            }
        }
    }
}

/// Directed adjacency list from a source parameter to its constraint.
///
/// A `BTreeMap` keeps iteration in canonical parameter order so that catalog
/// listings and validation messages are stable.
pub type ConstraintSet = BTreeMap<ParameterName, ParameterConstraint>;
