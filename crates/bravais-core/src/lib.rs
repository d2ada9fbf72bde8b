//! # Bravais Lattice Engine
//!
//! A geometry engine for the 14 Bravais lattices: a catalog of lattice types,
//! symmetry-constraint propagation between lattice parameters, the triclinic
//! transform into Cartesian basis vectors, and atom replication across a grid of
//! unit cells.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer architecture.
//!
//! - **[`core`]: The Foundation.** Stateless data models (`LatticeParameters`,
//!   `LatticeAtom`), the immutable lattice catalog, constraint propagation and the
//!   pure geometry functions.
//!
//! - **[`engine`]: The Logic Core.** `LatticeState` holds the active lattice type and
//!   parameter set and guarantees that failed edits never leave it half-updated.
//!
//! - **[`workflows`]: The Public API.** One call from a `GenerationConfig` to a
//!   `RenderBundle` ready for a renderer or exporter.
//!
//! ## Example
//!
//! ```
//! use bravais::engine::state::LatticeState;
//!
//! let mut state = LatticeState::default();
//! state.set_lattice_type("hexagonal").unwrap();
//! state.set_parameter("a", 2.0).unwrap();
//! assert_eq!(state.parameters().b, 2.0);
//!
//! let bundle = state.generate_lattice(2).unwrap();
//! assert_eq!(bundle.atoms.len(), 3 * 8);
//! ```

pub mod core;
pub mod engine;
pub mod workflows;
