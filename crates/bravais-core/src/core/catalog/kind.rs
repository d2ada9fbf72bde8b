use super::descriptor::LatticeTypeDescriptor;
use super::registry::builtin_descriptor;
use phf::{Map, phf_map};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The seven lattice systems used to group the catalog.
///
/// Declaration order is the catalog's display order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum CrystalSystem {
    Cubic,
    Tetragonal,
    Orthorhombic,
    Monoclinic,
    Triclinic,
    Rhombohedral,
    Hexagonal,
}

impl CrystalSystem {
    pub fn display_name(&self) -> &'static str {
        match self {
            CrystalSystem::Cubic => "Cubic",
            CrystalSystem::Tetragonal => "Tetragonal",
            CrystalSystem::Orthorhombic => "Orthorhombic",
            CrystalSystem::Monoclinic => "Monoclinic",
            CrystalSystem::Triclinic => "Triclinic",
            CrystalSystem::Rhombohedral => "Rhombohedral",
            CrystalSystem::Hexagonal => "Hexagonal",
        }
    }
}

/// Where the additional lattice points of a conventional cell sit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Centering {
    Primitive,
    BodyCentered,
    FaceCentered,
    BaseCentered,
}

impl Centering {
    pub fn display_name(&self) -> &'static str {
        match self {
            Centering::Primitive => "Primitive",
            Centering::BodyCentered => "Body-centered",
            Centering::FaceCentered => "Face-centered",
            Centering::BaseCentered => "Base-centered",
        }
    }
}

/// The 14 Bravais lattice types.
///
/// The serialized form of each variant is its catalog id (e.g. `face-centered-cubic`).
/// Declaration order is the catalog order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum LatticeKind {
    // --- Cubic ---
    #[default]
    SimpleCubic,
    BodyCenteredCubic,
    FaceCenteredCubic,

    // --- Tetragonal ---
    SimpleTetragonal,
    BodyCenteredTetragonal,

    // --- Orthorhombic ---
    SimpleOrthorhombic,
    BodyCenteredOrthorhombic,
    FaceCenteredOrthorhombic,
    BaseCenteredOrthorhombic,

    // --- Monoclinic ---
    SimpleMonoclinic,
    BaseCenteredMonoclinic,

    // --- Triclinic, Rhombohedral, Hexagonal ---
    Triclinic,
    Rhombohedral,
    Hexagonal,
}

// Canonical ids plus the `system_centering` spellings used by older front ends.
static LATTICE_IDS: Map<&'static str, LatticeKind> = phf_map! {
    "simple-cubic" => LatticeKind::SimpleCubic,
    "body-centered-cubic" => LatticeKind::BodyCenteredCubic,
    "face-centered-cubic" => LatticeKind::FaceCenteredCubic,
    "simple-tetragonal" => LatticeKind::SimpleTetragonal,
    "body-centered-tetragonal" => LatticeKind::BodyCenteredTetragonal,
    "simple-orthorhombic" => LatticeKind::SimpleOrthorhombic,
    "body-centered-orthorhombic" => LatticeKind::BodyCenteredOrthorhombic,
    "face-centered-orthorhombic" => LatticeKind::FaceCenteredOrthorhombic,
    "base-centered-orthorhombic" => LatticeKind::BaseCenteredOrthorhombic,
    "simple-monoclinic" => LatticeKind::SimpleMonoclinic,
    "base-centered-monoclinic" => LatticeKind::BaseCenteredMonoclinic,
    "triclinic" => LatticeKind::Triclinic,
    "rhombohedral" => LatticeKind::Rhombohedral,
    "hexagonal" => LatticeKind::Hexagonal,
    "cubic_primitive" => LatticeKind::SimpleCubic,
    "cubic_body_centered" => LatticeKind::BodyCenteredCubic,
    "cubic_face_centered" => LatticeKind::FaceCenteredCubic,
    "tetragonal_primitive" => LatticeKind::SimpleTetragonal,
    "tetragonal_body_centered" => LatticeKind::BodyCenteredTetragonal,
    "orthorhombic_primitive" => LatticeKind::SimpleOrthorhombic,
    "orthorhombic_body_centered" => LatticeKind::BodyCenteredOrthorhombic,
    "orthorhombic_face_centered" => LatticeKind::FaceCenteredOrthorhombic,
    "orthorhombic_base_centered" => LatticeKind::BaseCenteredOrthorhombic,
    "monoclinic_primitive" => LatticeKind::SimpleMonoclinic,
    "monoclinic_base_centered" => LatticeKind::BaseCenteredMonoclinic,
};

impl LatticeKind {
    pub const ALL: [LatticeKind; 14] = [
        LatticeKind::SimpleCubic,
        LatticeKind::BodyCenteredCubic,
        LatticeKind::FaceCenteredCubic,
        LatticeKind::SimpleTetragonal,
        LatticeKind::BodyCenteredTetragonal,
        LatticeKind::SimpleOrthorhombic,
        LatticeKind::BodyCenteredOrthorhombic,
        LatticeKind::FaceCenteredOrthorhombic,
        LatticeKind::BaseCenteredOrthorhombic,
        LatticeKind::SimpleMonoclinic,
        LatticeKind::BaseCenteredMonoclinic,
        LatticeKind::Triclinic,
        LatticeKind::Rhombohedral,
        LatticeKind::Hexagonal,
    ];

    /// The canonical catalog id of this lattice type.
    pub fn id(&self) -> &'static str {
        match self {
            LatticeKind::SimpleCubic => "simple-cubic",
            LatticeKind::BodyCenteredCubic => "body-centered-cubic",
            LatticeKind::FaceCenteredCubic => "face-centered-cubic",
            LatticeKind::SimpleTetragonal => "simple-tetragonal",
            LatticeKind::BodyCenteredTetragonal => "body-centered-tetragonal",
            LatticeKind::SimpleOrthorhombic => "simple-orthorhombic",
            LatticeKind::BodyCenteredOrthorhombic => "body-centered-orthorhombic",
            LatticeKind::FaceCenteredOrthorhombic => "face-centered-orthorhombic",
            LatticeKind::BaseCenteredOrthorhombic => "base-centered-orthorhombic",
            LatticeKind::SimpleMonoclinic => "simple-monoclinic",
            LatticeKind::BaseCenteredMonoclinic => "base-centered-monoclinic",
            LatticeKind::Triclinic => "triclinic",
            LatticeKind::Rhombohedral => "rhombohedral",
            LatticeKind::Hexagonal => "hexagonal",
        }
    }

    pub fn crystal_system(&self) -> CrystalSystem {
        match self {
            LatticeKind::SimpleCubic
            | LatticeKind::BodyCenteredCubic
            | LatticeKind::FaceCenteredCubic => CrystalSystem::Cubic,
            LatticeKind::SimpleTetragonal | LatticeKind::BodyCenteredTetragonal => {
                CrystalSystem::Tetragonal
            }
            LatticeKind::SimpleOrthorhombic
            | LatticeKind::BodyCenteredOrthorhombic
            | LatticeKind::FaceCenteredOrthorhombic
            | LatticeKind::BaseCenteredOrthorhombic => CrystalSystem::Orthorhombic,
            LatticeKind::SimpleMonoclinic | LatticeKind::BaseCenteredMonoclinic => {
                CrystalSystem::Monoclinic
            }
            LatticeKind::Triclinic => CrystalSystem::Triclinic,
            LatticeKind::Rhombohedral => CrystalSystem::Rhombohedral,
            LatticeKind::Hexagonal => CrystalSystem::Hexagonal,
        }
    }

    pub fn centering(&self) -> Centering {
        match self {
            LatticeKind::BodyCenteredCubic
            | LatticeKind::BodyCenteredTetragonal
            | LatticeKind::BodyCenteredOrthorhombic => Centering::BodyCentered,
            LatticeKind::FaceCenteredCubic | LatticeKind::FaceCenteredOrthorhombic => {
                Centering::FaceCentered
            }
            LatticeKind::BaseCenteredOrthorhombic | LatticeKind::BaseCenteredMonoclinic => {
                Centering::BaseCentered
            }
            LatticeKind::SimpleCubic
            | LatticeKind::SimpleTetragonal
            | LatticeKind::SimpleOrthorhombic
            | LatticeKind::SimpleMonoclinic
            | LatticeKind::Triclinic
            | LatticeKind::Rhombohedral
            | LatticeKind::Hexagonal => Centering::Primitive,
        }
    }

    /// The builtin catalog entry for this lattice type.
    pub fn descriptor(&self) -> &'static LatticeTypeDescriptor {
        builtin_descriptor(*self)
    }
}

impl fmt::Display for LatticeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.id())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown lattice type: '{0}'")]
pub struct UnknownLatticeTypeError(pub String);

impl FromStr for LatticeKind {
    type Err = UnknownLatticeTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LATTICE_IDS
            .get(s.trim())
            .copied()
            .ok_or_else(|| UnknownLatticeTypeError(s.to_string()))
    }
}
