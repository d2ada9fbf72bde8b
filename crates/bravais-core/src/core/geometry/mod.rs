//! # Geometry Module
//!
//! Pure functions turning lattice parameters into Cartesian geometry.
//!
//! - [`basis`] - The triclinic transform from `(a, b, c, α, β, γ)` to basis vectors
//! - [`generator`] - Atom replication over a grid of cells, cell vertices and edges
//!
//! Every operation either returns finite coordinates or a [`basis::GeometryError`];
//! no function here produces NaN.

pub mod basis;
pub mod generator;
