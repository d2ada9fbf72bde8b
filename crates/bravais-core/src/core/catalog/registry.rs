use super::builtin::builtin_descriptors;
use super::descriptor::{DescriptorError, LatticeTypeDescriptor};
use super::kind::{Centering, CrystalSystem, LatticeKind};
use crate::core::constraints::constraint::ConstraintSet;
use crate::core::models::atom::FractionalPosition;
use crate::core::models::parameters::LatticeParameters;
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

static BUILTIN_DESCRIPTORS: Lazy<Vec<LatticeTypeDescriptor>> = Lazy::new(builtin_descriptors);

static BUILTIN_CATALOG: Lazy<LatticeCatalog> = Lazy::new(|| LatticeCatalog {
    entries: BUILTIN_DESCRIPTORS
        .iter()
        .map(|descriptor| (descriptor.kind, descriptor.clone()))
        .collect(),
});

/// Builtin entry for `kind`; the builtin table is stored in [`LatticeKind::ALL`] order.
pub(super) fn builtin_descriptor(kind: LatticeKind) -> &'static LatticeTypeDescriptor {
    &BUILTIN_DESCRIPTORS[kind as usize]
}

/// On-disk shape of one catalog table, converted into a [`LatticeTypeDescriptor`] after parsing.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct RawLatticeEntry {
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    examples: Vec<String>,
    crystal_system: Option<CrystalSystem>,
    centering: Option<Centering>,
    parameters: LatticeParameters,
    #[serde(default)]
    constraints: ConstraintSet,
    atom_positions: Vec<FractionalPosition>,
}

type RawCatalogFile = BTreeMap<String, RawLatticeEntry>;

/// Read-only registry of lattice type descriptors, keyed by [`LatticeKind`].
///
/// The process-wide [`LatticeCatalog::builtin`] registry holds all 14 Bravais
/// types and is built once on first access. Custom catalogs loaded from TOML may
/// contain any subset of the types; every entry is validated on load.
#[derive(Debug, Clone, PartialEq)]
pub struct LatticeCatalog {
    entries: BTreeMap<LatticeKind, LatticeTypeDescriptor>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Lattice type '{0}' not found in catalog")]
pub struct LatticeNotFoundError(pub String);

#[derive(Debug, Error)]
pub enum CatalogLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("Unknown lattice type '{id}' in catalog '{path}'")]
    UnknownLatticeType { path: String, id: String },
    #[error("Lattice type '{id}' is defined more than once in catalog '{path}'")]
    DuplicateEntry { path: String, id: String },
    #[error("Entry '{id}' declares {field} '{found}' but the lattice type implies '{expected}'")]
    MetadataMismatch {
        id: String,
        field: &'static str,
        expected: String,
        found: String,
    },
    #[error("Inconsistent catalog entry '{id}': {source}")]
    Inconsistent {
        id: String,
        source: DescriptorError,
    },
}

impl LatticeCatalog {
    /// The process-wide catalog of the 14 Bravais lattice types.
    pub fn builtin() -> &'static LatticeCatalog {
        &BUILTIN_CATALOG
    }

    /// Builds a catalog from descriptors, validating each one.
    ///
    /// A later descriptor for the same [`LatticeKind`] replaces an earlier one.
    pub fn from_descriptors(
        descriptors: impl IntoIterator<Item = LatticeTypeDescriptor>,
    ) -> Result<Self, CatalogLoadError> {
        let mut entries = BTreeMap::new();
        for descriptor in descriptors {
            descriptor
                .validate()
                .map_err(|e| CatalogLoadError::Inconsistent {
                    id: descriptor.id().to_string(),
                    source: e,
                })?;
            entries.insert(descriptor.kind, descriptor);
        }
        Ok(Self { entries })
    }

    /// Reads and validates a TOML catalog file.
    ///
    /// Each top-level table is one lattice type keyed by its id; legacy ids are accepted.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogLoadError`] naming `path` when the file cannot be read or parsed,
    /// or when any entry is unknown, duplicated or inconsistent.
    pub fn load(path: &Path) -> Result<Self, CatalogLoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| CatalogLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        Self::parse(&content, &path.to_string_lossy())
    }

    /// Same as [`Self::load`], for catalog text already in memory.
    pub fn from_toml_str(content: &str) -> Result<Self, CatalogLoadError> {
        Self::parse(content, "<string>")
    }

    fn parse(content: &str, origin: &str) -> Result<Self, CatalogLoadError> {
        let raw: RawCatalogFile =
            toml::from_str(content).map_err(|e| CatalogLoadError::Toml {
                path: origin.to_string(),
                source: e,
            })?;

        let mut seen = BTreeMap::new();
        let mut descriptors = Vec::with_capacity(raw.len());
        for (id, entry) in raw {
            let kind =
                LatticeKind::from_str(&id).map_err(|_| CatalogLoadError::UnknownLatticeType {
                    path: origin.to_string(),
                    id: id.clone(),
                })?;
            if seen.insert(kind, id.clone()).is_some() {
                return Err(CatalogLoadError::DuplicateEntry {
                    path: origin.to_string(),
                    id: kind.id().to_string(),
                });
            }
            descriptors.push(convert_entry(kind, entry)?);
        }

        Self::from_descriptors(descriptors)
    }

    /// The entry for `kind`, if this catalog defines it.
    pub fn get(&self, kind: LatticeKind) -> Option<&LatticeTypeDescriptor> {
        self.entries.get(&kind)
    }

    /// Resolves a lattice id (canonical or legacy spelling) to its descriptor.
    pub fn lookup(&self, id: &str) -> Result<&LatticeTypeDescriptor, LatticeNotFoundError> {
        LatticeKind::from_str(id)
            .ok()
            .and_then(|kind| self.get(kind))
            .ok_or_else(|| LatticeNotFoundError(id.to_string()))
    }

    /// Whether this catalog defines `kind`.
    pub fn contains(&self, kind: LatticeKind) -> bool {
        self.entries.contains_key(&kind)
    }

    /// Entries in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &LatticeTypeDescriptor> {
        self.entries.values()
    }

    /// Lattice kinds present, in catalog order.
    pub fn kinds(&self) -> impl Iterator<Item = LatticeKind> + '_ {
        self.entries.keys().copied()
    }

    /// Number of lattice types in the catalog.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for LatticeCatalog {
    fn default() -> Self {
        Self::builtin().clone()
    }
}

fn convert_entry(
    kind: LatticeKind,
    entry: RawLatticeEntry,
) -> Result<LatticeTypeDescriptor, CatalogLoadError> {
    if let Some(system) = entry.crystal_system
        && system != kind.crystal_system()
    {
        return Err(CatalogLoadError::MetadataMismatch {
            id: kind.id().to_string(),
            field: "crystal-system",
            expected: kind.crystal_system().display_name().to_string(),
            found: system.display_name().to_string(),
        });
    }
    if let Some(centering) = entry.centering
        && centering != kind.centering()
    {
        return Err(CatalogLoadError::MetadataMismatch {
            id: kind.id().to_string(),
            field: "centering",
            expected: kind.centering().display_name().to_string(),
            found: centering.display_name().to_string(),
        });
    }

    Ok(LatticeTypeDescriptor {
        kind,
        name: entry.name,
        description: entry.description,
        default_parameters: entry.parameters,
        constraints: entry.constraints,
        atom_positions: entry.atom_positions,
        examples: entry.examples,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constraints::constraint::ParameterConstraint;
    use crate::core::models::parameters::ParameterName;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEXAGONAL_TOML: &str = r#"
        [hexagonal]
        name = "Hexagonal"
        description = "a = b, gamma = 120"
        crystal-system = "hexagonal"
        centering = "primitive"
        examples = ["Graphite"]
        parameters = { a = 2.0, b = 2.0, c = 3.0, alpha = 90.0, beta = 90.0, gamma = 120.0 }
        atom-positions = [[0.0, 0.0, 0.0]]

        [hexagonal.constraints]
        a = { equals = ["b"] }
        gamma = { fixed = 120.0 }
    "#;

    #[test]
    fn builtin_catalog_holds_all_fourteen_types_in_order() {
        let catalog = LatticeCatalog::builtin();
        assert_eq!(catalog.len(), 14);
        let kinds: Vec<_> = catalog.kinds().collect();
        assert_eq!(kinds, LatticeKind::ALL.to_vec());
    }

    #[test]
    fn builtin_catalog_is_initialized_once() {
        assert!(std::ptr::eq(
            LatticeCatalog::builtin(),
            LatticeCatalog::builtin()
        ));
    }

    #[test]
    fn builtin_descriptor_matches_catalog_entry_for_every_kind() {
        for kind in LatticeKind::ALL {
            assert_eq!(builtin_descriptor(kind).kind, kind);
            assert_eq!(LatticeCatalog::builtin().get(kind), Some(kind.descriptor()));
        }
    }

    #[test]
    fn lookup_resolves_canonical_and_legacy_ids() {
        let catalog = LatticeCatalog::builtin();
        let fcc = catalog.lookup("face-centered-cubic").unwrap();
        assert_eq!(fcc.name, "Face-Centered Cubic");
        assert_eq!(fcc.atom_positions.len(), 4);
        assert_eq!(
            catalog.lookup("cubic_face_centered").unwrap().kind,
            LatticeKind::FaceCenteredCubic
        );
    }

    #[test]
    fn lookup_of_unknown_id_fails_with_not_found() {
        assert_eq!(
            LatticeCatalog::builtin().lookup("diamond"),
            Err(LatticeNotFoundError("diamond".to_string()))
        );
    }

    #[test]
    fn from_toml_str_loads_a_partial_catalog() {
        let catalog = LatticeCatalog::from_toml_str(HEXAGONAL_TOML).unwrap();
        assert_eq!(catalog.len(), 1);
        let hexagonal = catalog.get(LatticeKind::Hexagonal).unwrap();
        assert_eq!(hexagonal.default_parameters.a, 2.0);
        assert_eq!(hexagonal.examples, vec!["Graphite".to_string()]);
        assert_eq!(
            hexagonal.constraint(ParameterName::Gamma),
            Some(&ParameterConstraint::Fixed(120.0))
        );
        assert!(catalog.get(LatticeKind::SimpleCubic).is_none());
        assert!(catalog.lookup("simple-cubic").is_err());
    }

    #[test]
    fn load_reads_catalog_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(HEXAGONAL_TOML.as_bytes()).unwrap();

        let catalog = LatticeCatalog::load(file.path()).unwrap();
        assert!(catalog.contains(LatticeKind::Hexagonal));
    }

    #[test]
    fn load_reports_missing_file_as_io_error() {
        let result = LatticeCatalog::load(Path::new("/nonexistent/catalog.toml"));
        assert!(matches!(result, Err(CatalogLoadError::Io { .. })));
    }

    #[test]
    fn malformed_toml_is_rejected() {
        let result = LatticeCatalog::from_toml_str("[hexagonal\nname = ");
        assert!(matches!(result, Err(CatalogLoadError::Toml { .. })));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let content = HEXAGONAL_TOML.replace("examples =", "bonds = 3\nexamples =");
        let result = LatticeCatalog::from_toml_str(&content);
        assert!(matches!(result, Err(CatalogLoadError::Toml { .. })));
    }

    #[test]
    fn unknown_lattice_id_is_rejected() {
        let content = HEXAGONAL_TOML.replace("hexagonal]", "diamond]").replace("hexagonal.", "diamond.");
        let result = LatticeCatalog::from_toml_str(&content);
        assert!(matches!(
            result,
            Err(CatalogLoadError::UnknownLatticeType { id, .. }) if id == "diamond"
        ));
    }

    #[test]
    fn alias_and_canonical_id_for_the_same_type_are_rejected() {
        let content = r#"
            [simple-cubic]
            name = "Simple Cubic"
            parameters = { a = 1.0, b = 1.0, c = 1.0, alpha = 90.0, beta = 90.0, gamma = 90.0 }
            atom-positions = [[0.0, 0.0, 0.0]]

            [cubic_primitive]
            name = "Cubic P"
            parameters = { a = 1.0, b = 1.0, c = 1.0, alpha = 90.0, beta = 90.0, gamma = 90.0 }
            atom-positions = [[0.0, 0.0, 0.0]]
        "#;
        let result = LatticeCatalog::from_toml_str(content);
        assert!(matches!(
            result,
            Err(CatalogLoadError::DuplicateEntry { id, .. }) if id == "simple-cubic"
        ));
    }

    #[test]
    fn mismatched_crystal_system_is_rejected() {
        let content = HEXAGONAL_TOML.replace(
            "crystal-system = \"hexagonal\"",
            "crystal-system = \"cubic\"",
        );
        let result = LatticeCatalog::from_toml_str(&content);
        assert!(matches!(
            result,
            Err(CatalogLoadError::MetadataMismatch {
                field: "crystal-system",
                ..
            })
        ));
    }

    #[test]
    fn conflicting_constraint_is_rejected() {
        let content = HEXAGONAL_TOML.replace("gamma = { fixed = 120.0 }", "gamma = { fixed = 90.0 }");
        let result = LatticeCatalog::from_toml_str(&content);
        assert!(matches!(
            result,
            Err(CatalogLoadError::Inconsistent {
                source: DescriptorError::DefaultViolatesFixed { .. },
                ..
            })
        ));
    }

    #[test]
    fn mirror_default_mismatch_is_rejected() {
        let content = HEXAGONAL_TOML.replace("b = 2.0", "b = 2.5");
        let result = LatticeCatalog::from_toml_str(&content);
        assert!(matches!(
            result,
            Err(CatalogLoadError::Inconsistent {
                source: DescriptorError::DefaultViolatesMirror { .. },
                ..
            })
        ));
    }

    #[test]
    fn from_descriptors_validates_each_entry() {
        let mut broken = LatticeKind::Triclinic.descriptor().clone();
        broken.atom_positions.clear();
        let result = LatticeCatalog::from_descriptors(vec![broken]);
        assert!(matches!(
            result,
            Err(CatalogLoadError::Inconsistent {
                source: DescriptorError::NoAtomPositions,
                ..
            })
        ));
    }

    #[test]
    fn default_catalog_equals_builtin() {
        assert_eq!(&LatticeCatalog::default(), LatticeCatalog::builtin());
    }
}
