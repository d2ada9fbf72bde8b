use super::kind::{Centering, CrystalSystem, LatticeKind};
use crate::core::constraints::constraint::{ConstraintSet, ParameterConstraint};
use crate::core::models::atom::FractionalPosition;
use crate::core::models::parameters::{LatticeParameters, ParameterName};
use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

const DEFAULT_TOLERANCE: f64 = 1e-9;

/// Immutable metadata describing one Bravais lattice type.
///
/// A descriptor bundles the default cell parameters, the symmetry constraints that
/// tie parameters together, the fractional positions of the atoms in one unit cell,
/// and display metadata (name, description, example materials).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LatticeTypeDescriptor {
    /// The lattice type this entry describes.
    pub kind: LatticeKind,
    /// Human-readable name (e.g. "Face-Centered Cubic").
    pub name: String,
    /// One-paragraph description of the parameter relations.
    pub description: String,
    /// Parameters loaded when the type is selected.
    pub default_parameters: LatticeParameters,
    /// Directed constraints keyed by their source parameter.
    pub constraints: ConstraintSet,
    /// Fractional atom coordinates inside one unit cell, in generation order.
    pub atom_positions: Vec<FractionalPosition>,
    /// Example materials crystallizing in this lattice.
    pub examples: Vec<String>,
}

/// Reasons a descriptor fails the catalog consistency check.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DescriptorError {
    #[error("Default length '{name}' must be finite and positive, got {value}")]
    NonPositiveLength { name: ParameterName, value: f64 },

    #[error("Default angle '{name}' must lie strictly between 0 and 180 degrees, got {value}")]
    AngleOutOfRange { name: ParameterName, value: f64 },

    #[error("Parameter '{name}' cannot be fixed: only angles may carry a fixed constraint")]
    FixedLength { name: ParameterName },

    #[error("Parameter '{name}' lists itself as a mirror target")]
    SelfMirror { name: ParameterName },

    #[error("Default of '{name}' is {actual} but the constraint fixes it at {expected}")]
    DefaultViolatesFixed {
        name: ParameterName,
        expected: f64,
        actual: f64,
    },

    #[error("Default of '{target}' ({target_value}) differs from its mirror origin '{origin}' ({origin_value})")]
    DefaultViolatesMirror {
        origin: ParameterName,
        target: ParameterName,
        origin_value: f64,
        target_value: f64,
    },

    #[error("Parameter '{target}' is both fixed at {fixed} and mirrored from '{origin}' (default {origin_value})")]
    FixedMirrorConflict {
        origin: ParameterName,
        target: ParameterName,
        fixed: f64,
        origin_value: f64,
    },

    #[error("Parameter '{target}' is mirrored from both '{first}' and '{second}' with different defaults")]
    ConflictingMirrorSources {
        target: ParameterName,
        first: ParameterName,
        second: ParameterName,
    },

    #[error("A lattice type needs at least one atom position")]
    NoAtomPositions,

    #[error("Atom position #{index} {position:?} is outside the unit cell [0, 1)")]
    PositionOutsideCell {
        index: usize,
        position: FractionalPosition,
    },
}

impl LatticeTypeDescriptor {
    /// Canonical id of the described lattice type.
    pub fn id(&self) -> &'static str {
        self.kind.id()
    }

    pub fn crystal_system(&self) -> CrystalSystem {
        self.kind.crystal_system()
    }

    pub fn centering(&self) -> Centering {
        self.kind.centering()
    }

    /// The constraint whose source is `name`, if any.
    pub fn constraint(&self, name: ParameterName) -> Option<&ParameterConstraint> {
        self.constraints.get(&name)
    }

    /// Checks that the defaults, constraints and atom positions form a consistent entry.
    ///
    /// # Errors
    ///
    /// Returns the first [`DescriptorError`] found, checking parameter ranges, then
    /// constraint shape, then constraint/default agreement, then atom positions.
    pub fn validate(&self) -> Result<(), DescriptorError> {
        self.validate_default_ranges()?;
        self.validate_constraint_shape()?;
        self.validate_constraint_defaults()?;
        self.validate_atom_positions()
    }

    fn validate_default_ranges(&self) -> Result<(), DescriptorError> {
        for (name, value) in self.default_parameters.iter() {
            if name.is_angle() {
                if !(value.is_finite() && value > 0.0 && value < 180.0) {
                    return Err(DescriptorError::AngleOutOfRange { name, value });
                }
            } else if !(value.is_finite() && value > 0.0) {
                return Err(DescriptorError::NonPositiveLength { name, value });
            }
        }
        Ok(())
    }

    fn validate_constraint_shape(&self) -> Result<(), DescriptorError> {
        for (&name, constraint) in &self.constraints {
            match constraint {
                ParameterConstraint::Fixed(_) if !name.is_angle() => {
                    return Err(DescriptorError::FixedLength { name });
                }
                ParameterConstraint::Equals(targets) if targets.contains(&name) => {
                    return Err(DescriptorError::SelfMirror { name });
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn validate_constraint_defaults(&self) -> Result<(), DescriptorError> {
        let defaults = &self.default_parameters;
        let mut mirror_sources: BTreeMap<ParameterName, ParameterName> = BTreeMap::new();

        for (&origin, constraint) in &self.constraints {
            let origin_value = defaults.get(origin);
            match constraint {
                ParameterConstraint::Fixed(expected) => {
                    if !approx_eq(origin_value, *expected) {
                        return Err(DescriptorError::DefaultViolatesFixed {
                            name: origin,
                            expected: *expected,
                            actual: origin_value,
                        });
                    }
                }
                ParameterConstraint::Equals(targets) => {
                    for &target in targets {
                        if let Some(fixed) = self
                            .constraint(target)
                            .and_then(ParameterConstraint::fixed_value)
                            && !approx_eq(fixed, origin_value)
                        {
                            return Err(DescriptorError::FixedMirrorConflict {
                                origin,
                                target,
                                fixed,
                                origin_value,
                            });
                        }

                        if let Some(&first) = mirror_sources.get(&target)
                            && !approx_eq(defaults.get(first), origin_value)
                        {
                            return Err(DescriptorError::ConflictingMirrorSources {
                                target,
                                first,
                                second: origin,
                            });
                        }
                        mirror_sources.insert(target, origin);

                        let target_value = defaults.get(target);
                        if !approx_eq(target_value, origin_value) {
                            return Err(DescriptorError::DefaultViolatesMirror {
                                origin,
                                target,
                                origin_value,
                                target_value,
                            });
                        }
                    }
                }
            }
        }
        Ok(())
    }

    fn validate_atom_positions(&self) -> Result<(), DescriptorError> {
        if self.atom_positions.is_empty() {
            return Err(DescriptorError::NoAtomPositions);
        }
        for (index, position) in self.atom_positions.iter().enumerate() {
            if !position.iter().all(|x| (0.0..1.0).contains(x)) {
                return Err(DescriptorError::PositionOutsideCell {
                    index,
                    position: *position,
                });
            }
        }
        Ok(())
    }
}

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= DEFAULT_TOLERANCE
}
