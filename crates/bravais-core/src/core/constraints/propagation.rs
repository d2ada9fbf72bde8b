use super::constraint::{ConstraintSet, ParameterConstraint};
use crate::core::catalog::descriptor::LatticeTypeDescriptor;
use crate::core::models::parameters::{LatticeParameters, ParameterName, UnknownParameterError};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

const VIOLATION_TOLERANCE: f64 = 1e-9;

/// Returns a fresh copy of the descriptor's default parameters.
pub fn load_defaults(descriptor: &LatticeTypeDescriptor) -> LatticeParameters {
    descriptor.default_parameters
}

/// Sets `name` to `value` and copies `value` into every mirror target of `name`.
///
/// Mirrors are applied exactly once: targets are not re-validated and their own
/// constraints are not followed.
pub fn propagate(
    parameters: &LatticeParameters,
    constraints: &ConstraintSet,
    name: ParameterName,
    value: f64,
) -> LatticeParameters {
    let mut updated = *parameters;
    updated.set(name, value);
    if let Some(constraint) = constraints.get(&name) {
        for &target in constraint.mirror_targets() {
            updated.set(target, value);
        }
    }
    updated
}

/// Applies one parameter edit by its textual name.
///
/// # Errors
///
/// Returns [`UnknownParameterError`] when `name` is not one of
/// `a`, `b`, `c`, `alpha`, `beta`, `gamma`.
pub fn set_parameter(
    parameters: &LatticeParameters,
    descriptor: &LatticeTypeDescriptor,
    name: &str,
    value: f64,
) -> Result<LatticeParameters, UnknownParameterError> {
    let name = ParameterName::from_str(name)?;
    Ok(propagate(parameters, &descriptor.constraints, name, value))
}

/// A constraint of the active lattice type that the current parameters no longer satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ConstraintViolation {
    /// A fixed angle has been edited away from its pinned value.
    FixedMoved {
        name: ParameterName,
        expected: f64,
        actual: f64,
    },
    /// A mirror target was edited directly and no longer matches its source.
    MirrorOutOfSync {
        origin: ParameterName,
        target: ParameterName,
        expected: f64,
        actual: f64,
    },
}

impl fmt::Display for ConstraintViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstraintViolation::FixedMoved {
                name,
                expected,
                actual,
            } => write!(f, "{} is {} but the lattice type fixes it at {}", name, actual, expected),
            ConstraintViolation::MirrorOutOfSync {
                origin,
                target,
                expected,
                actual,
            } => write!(
                f,
                "{} is {} but should equal {} ({})",
                target, actual, origin, expected
            ),
        }
    }
}

/// Lists every constraint of `descriptor` that `parameters` currently breaks.
///
/// Fixed constraints are only applied when defaults are loaded, so an edited
/// parameter set may legitimately report violations; they are informational.
pub fn violations(
    parameters: &LatticeParameters,
    descriptor: &LatticeTypeDescriptor,
) -> Vec<ConstraintViolation> {
    let mut found = Vec::new();
    for (&origin, constraint) in &descriptor.constraints {
        let actual_origin = parameters.get(origin);
        match constraint {
            ParameterConstraint::Fixed(expected) => {
                if (actual_origin - expected).abs() > VIOLATION_TOLERANCE {
                    found.push(ConstraintViolation::FixedMoved {
                        name: origin,
                        expected: *expected,
                        actual: actual_origin,
                    });
                }
            }
            ParameterConstraint::Equals(targets) => {
                for &target in targets {
                    let actual = parameters.get(target);
                    if (actual - actual_origin).abs() > VIOLATION_TOLERANCE {
                        found.push(ConstraintViolation::MirrorOutOfSync {
                            origin,
                            target,
                            expected: actual_origin,
                            actual,
                        });
                    }
                }
            }
        }
    }
    found
}
