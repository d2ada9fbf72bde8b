//! # Catalog Module
//!
//! Metadata for the 14 Bravais lattice types.
//!
//! ## Key Components
//!
//! - [`kind`] - The closed [`kind::LatticeKind`] enum with its crystal system and centering
//! - [`descriptor`] - Per-type defaults, constraints, atom positions and display metadata
//! - [`registry`] - The read-only [`registry::LatticeCatalog`], builtin or loaded from TOML
//!
//! ## Usage
//!
//! ```
//! use bravais::core::catalog::kind::LatticeKind;
//! use bravais::core::catalog::registry::LatticeCatalog;
//!
//! let catalog = LatticeCatalog::builtin();
//! let fcc = catalog.lookup("face-centered-cubic").unwrap();
//! assert_eq!(fcc.kind, LatticeKind::FaceCenteredCubic);
//! assert_eq!(fcc.atom_positions.len(), 4);
//! ```

mod builtin;
pub mod descriptor;
pub mod kind;
pub mod registry;
