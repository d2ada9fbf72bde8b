use super::descriptor::LatticeTypeDescriptor;
use super::kind::LatticeKind;
use crate::core::constraints::constraint::{ConstraintSet, ParameterConstraint};
use crate::core::models::atom::FractionalPosition;
use crate::core::models::parameters::{LatticeParameters, ParameterName};

const CORNER: FractionalPosition = [0.0, 0.0, 0.0];
const BODY_CENTER: FractionalPosition = [0.5, 0.5, 0.5];
const FACE_CENTERS: [FractionalPosition; 3] = [[0.5, 0.5, 0.0], [0.5, 0.0, 0.5], [0.0, 0.5, 0.5]];
const BASE_CENTER: FractionalPosition = [0.5, 0.5, 0.0];

const CUBIC_PARAMETERS: LatticeParameters = LatticeParameters::new(1.0, 1.0, 1.0, 90.0, 90.0, 90.0);
const TETRAGONAL_PARAMETERS: LatticeParameters =
    LatticeParameters::new(1.0, 1.0, 1.5, 90.0, 90.0, 90.0);
const ORTHORHOMBIC_PARAMETERS: LatticeParameters =
    LatticeParameters::new(1.0, 1.2, 1.5, 90.0, 90.0, 90.0);
const MONOCLINIC_PARAMETERS: LatticeParameters =
    LatticeParameters::new(1.0, 1.2, 1.5, 90.0, 100.0, 90.0);
const TRICLINIC_PARAMETERS: LatticeParameters =
    LatticeParameters::new(1.0, 1.2, 1.5, 80.0, 85.0, 100.0);
const RHOMBOHEDRAL_PARAMETERS: LatticeParameters =
    LatticeParameters::new(1.0, 1.0, 1.0, 70.0, 70.0, 70.0);
const HEXAGONAL_PARAMETERS: LatticeParameters =
    LatticeParameters::new(1.0, 1.0, 1.5, 90.0, 90.0, 120.0);

fn fixed_angles(constraints: &mut ConstraintSet, angles: &[(ParameterName, f64)]) {
    for &(name, value) in angles {
        constraints.insert(name, ParameterConstraint::Fixed(value));
    }
}

fn right_angles() -> ConstraintSet {
    let mut constraints = ConstraintSet::new();
    fixed_angles(
        &mut constraints,
        &[
            (ParameterName::Alpha, 90.0),
            (ParameterName::Beta, 90.0),
            (ParameterName::Gamma, 90.0),
        ],
    );
    constraints
}

fn cubic_constraints() -> ConstraintSet {
    let mut constraints = right_angles();
    constraints.insert(
        ParameterName::A,
        ParameterConstraint::Equals(vec![ParameterName::B, ParameterName::C]),
    );
    constraints
}

fn tetragonal_constraints() -> ConstraintSet {
    let mut constraints = right_angles();
    constraints.insert(
        ParameterName::A,
        ParameterConstraint::Equals(vec![ParameterName::B]),
    );
    constraints
}

fn monoclinic_constraints() -> ConstraintSet {
    let mut constraints = ConstraintSet::new();
    fixed_angles(
        &mut constraints,
        &[(ParameterName::Alpha, 90.0), (ParameterName::Gamma, 90.0)],
    );
    constraints
}

fn rhombohedral_constraints() -> ConstraintSet {
    let mut constraints = ConstraintSet::new();
    constraints.insert(
        ParameterName::A,
        ParameterConstraint::Equals(vec![ParameterName::B, ParameterName::C]),
    );
    constraints.insert(
        ParameterName::Alpha,
        ParameterConstraint::Equals(vec![ParameterName::Beta, ParameterName::Gamma]),
    );
    constraints
}

fn hexagonal_constraints() -> ConstraintSet {
    let mut constraints = ConstraintSet::new();
    constraints.insert(
        ParameterName::A,
        ParameterConstraint::Equals(vec![ParameterName::B]),
    );
    fixed_angles(
        &mut constraints,
        &[
            (ParameterName::Alpha, 90.0),
            (ParameterName::Beta, 90.0),
            (ParameterName::Gamma, 120.0),
        ],
    );
    constraints
}

fn with_body_center() -> Vec<FractionalPosition> {
    vec![CORNER, BODY_CENTER]
}

fn with_face_centers() -> Vec<FractionalPosition> {
    let mut positions = vec![CORNER];
    positions.extend_from_slice(&FACE_CENTERS);
    positions
}

fn with_base_center() -> Vec<FractionalPosition> {
    vec![CORNER, BASE_CENTER]
}

fn entry(
    kind: LatticeKind,
    name: &str,
    description: &str,
    default_parameters: LatticeParameters,
    constraints: ConstraintSet,
    atom_positions: Vec<FractionalPosition>,
    examples: &[&str],
) -> LatticeTypeDescriptor {
    LatticeTypeDescriptor {
        kind,
        name: name.to_string(),
        description: description.to_string(),
        default_parameters,
        constraints,
        atom_positions,
        examples: examples.iter().map(|s| s.to_string()).collect(),
    }
}

/// Builds the 14 builtin catalog entries in catalog order.
pub(super) fn builtin_descriptors() -> Vec<LatticeTypeDescriptor> {
    vec![
        entry(
            LatticeKind::SimpleCubic,
            "Simple Cubic",
            "A simple cubic lattice has equal lattice parameters (a = b = c) and all angles are 90°.",
            CUBIC_PARAMETERS,
            cubic_constraints(),
            vec![CORNER],
            &["NaCl", "CsCl", "Po (α form)"],
        ),
        entry(
            LatticeKind::BodyCenteredCubic,
            "Body-Centered Cubic",
            "A body-centered cubic lattice has equal lattice parameters and an additional atom at the center of the unit cell.",
            CUBIC_PARAMETERS,
            cubic_constraints(),
            with_body_center(),
            &["Fe (α form)", "Cr", "W", "Nb"],
        ),
        entry(
            LatticeKind::FaceCenteredCubic,
            "Face-Centered Cubic",
            "A face-centered cubic lattice has equal lattice parameters and additional atoms at the center of each face.",
            CUBIC_PARAMETERS,
            cubic_constraints(),
            with_face_centers(),
            &["Cu", "Al", "Au", "Pt", "Ag"],
        ),
        entry(
            LatticeKind::SimpleTetragonal,
            "Simple Tetragonal",
            "A simple tetragonal lattice has a ≠ c, a = b, and all angles are 90°.",
            TETRAGONAL_PARAMETERS,
            tetragonal_constraints(),
            vec![CORNER],
            &["TiO₂ (rutile)", "SnO₂"],
        ),
        entry(
            LatticeKind::BodyCenteredTetragonal,
            "Body-Centered Tetragonal",
            "A body-centered tetragonal lattice has a ≠ c, a = b, all angles are 90°, and an additional atom at the center.",
            TETRAGONAL_PARAMETERS,
            tetragonal_constraints(),
            with_body_center(),
            &["Fe (white tin)", "MgZn₂"],
        ),
        entry(
            LatticeKind::SimpleOrthorhombic,
            "Simple Orthorhombic",
            "A simple orthorhombic lattice has a ≠ b ≠ c and all angles are 90°.",
            ORTHORHOMBIC_PARAMETERS,
            right_angles(),
            vec![CORNER],
            &["Aragonite (CaCO₃)", "Sulfur"],
        ),
        entry(
            LatticeKind::BodyCenteredOrthorhombic,
            "Body-Centered Orthorhombic",
            "A body-centered orthorhombic lattice has a ≠ b ≠ c, all angles are 90°, and an additional atom at the center.",
            ORTHORHOMBIC_PARAMETERS,
            right_angles(),
            with_body_center(),
            &["Uranium (α form)", "Barium titanate"],
        ),
        entry(
            LatticeKind::FaceCenteredOrthorhombic,
            "Face-Centered Orthorhombic",
            "A face-centered orthorhombic lattice has a ≠ b ≠ c, all angles are 90°, and additional atoms at the center of each face.",
            ORTHORHOMBIC_PARAMETERS,
            right_angles(),
            with_face_centers(),
            &["Strontium carbonate", "Iodine"],
        ),
        entry(
            LatticeKind::BaseCenteredOrthorhombic,
            "Base-Centered Orthorhombic",
            "A base-centered orthorhombic lattice has a ≠ b ≠ c, all angles are 90°, and additional atoms at the center of the base faces.",
            ORTHORHOMBIC_PARAMETERS,
            right_angles(),
            with_base_center(),
            &["Gypsum (CaSO₄·2H₂O)", "Molybdenum dioxide"],
        ),
        entry(
            LatticeKind::SimpleMonoclinic,
            "Simple Monoclinic",
            "A simple monoclinic lattice has a ≠ b ≠ c, α = γ = 90°, and β ≠ 90°.",
            MONOCLINIC_PARAMETERS,
            monoclinic_constraints(),
            vec![CORNER],
            &["Monoclinic sulfur", "Sodium sulfate"],
        ),
        entry(
            LatticeKind::BaseCenteredMonoclinic,
            "Base-Centered Monoclinic",
            "A base-centered monoclinic lattice has a ≠ b ≠ c, α = γ = 90°, β ≠ 90°, and an additional atom at the center of the base face.",
            MONOCLINIC_PARAMETERS,
            monoclinic_constraints(),
            with_base_center(),
            &["Clinopyroxenes", "Mica"],
        ),
        entry(
            LatticeKind::Triclinic,
            "Triclinic",
            "A triclinic lattice has a ≠ b ≠ c and α ≠ β ≠ γ ≠ 90°. This is the least symmetric lattice type.",
            TRICLINIC_PARAMETERS,
            ConstraintSet::new(),
            vec![CORNER],
            &["Microcline (KAlSi₃O₈)", "Copper sulfate pentahydrate"],
        ),
        entry(
            LatticeKind::Rhombohedral,
            "Rhombohedral",
            "A rhombohedral lattice has a = b = c and α = β = γ ≠ 90°.",
            RHOMBOHEDRAL_PARAMETERS,
            rhombohedral_constraints(),
            vec![CORNER],
            &["Calcite (CaCO₃)", "Corundum (Al₂O₃)", "Bismuth"],
        ),
        entry(
            LatticeKind::Hexagonal,
            "Hexagonal",
            "A hexagonal lattice has a = b ≠ c, α = β = 90°, and γ = 120°.",
            HEXAGONAL_PARAMETERS,
            hexagonal_constraints(),
            vec![CORNER, [1.0 / 3.0, 2.0 / 3.0, 0.0], [2.0 / 3.0, 1.0 / 3.0, 0.0]],
            &["Graphite", "Zinc", "Ice (ordinary form)", "Quartz"],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table_covers_every_kind_in_order() {
        let kinds: Vec<LatticeKind> = builtin_descriptors().iter().map(|d| d.kind).collect();
        assert_eq!(kinds, LatticeKind::ALL.to_vec());
    }

    #[test]
    fn every_builtin_entry_is_consistent() {
        for descriptor in builtin_descriptors() {
            assert_eq!(descriptor.validate(), Ok(()), "{}", descriptor.id());
        }
    }

    #[test]
    fn atom_counts_follow_the_centering() {
        let counts: Vec<(LatticeKind, usize)> = builtin_descriptors()
            .iter()
            .map(|d| (d.kind, d.atom_positions.len()))
            .collect();
        assert!(counts.contains(&(LatticeKind::SimpleCubic, 1)));
        assert!(counts.contains(&(LatticeKind::BodyCenteredTetragonal, 2)));
        assert!(counts.contains(&(LatticeKind::FaceCenteredOrthorhombic, 4)));
        assert!(counts.contains(&(LatticeKind::BaseCenteredMonoclinic, 2)));
        assert!(counts.contains(&(LatticeKind::Hexagonal, 3)));
    }

    #[test]
    fn triclinic_has_no_constraints() {
        let triclinic = builtin_descriptors()
            .into_iter()
            .find(|d| d.kind == LatticeKind::Triclinic)
            .unwrap();
        assert!(triclinic.constraints.is_empty());
        assert_eq!(triclinic.default_parameters, TRICLINIC_PARAMETERS);
    }

    #[test]
    fn hexagonal_pins_gamma_at_120_degrees() {
        let hexagonal = builtin_descriptors()
            .into_iter()
            .find(|d| d.kind == LatticeKind::Hexagonal)
            .unwrap();
        assert_eq!(
            hexagonal.constraint(ParameterName::Gamma),
            Some(&ParameterConstraint::Fixed(120.0))
        );
        assert_eq!(
            hexagonal.constraint(ParameterName::A),
            Some(&ParameterConstraint::Equals(vec![ParameterName::B]))
        );
    }
}
