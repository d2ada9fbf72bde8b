//! # Core Module
//!
//! The stateless foundation of the lattice engine: data models, the lattice type
//! catalog, constraint propagation and the Cartesian geometry.
//!
//! ## Architecture
//!
//! - **Data Models** ([`models`]) - Lattice parameters, cell indices and generated atoms
//! - **Lattice Catalog** ([`catalog`]) - The 14 Bravais types and their metadata
//! - **Symmetry Constraints** ([`constraints`]) - `fixed` and `equals` rules between parameters
//! - **Geometry** ([`geometry`]) - Basis vectors, atom positions and unit-cell outlines
//!
//! Nothing in this layer holds mutable state or performs I/O, except for loading a
//! custom catalog file through [`catalog::registry::LatticeCatalog::load`].

pub mod catalog;
pub mod constraints;
pub mod geometry;
pub mod models;
