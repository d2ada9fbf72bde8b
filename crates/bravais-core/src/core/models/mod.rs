//! # Core Models Module
//!
//! Plain data types shared by every layer of the lattice engine.
//!
//! - [`parameters`] - The six unit-cell parameters and their names
//! - [`atom`] - Fractional positions, unit-cell indices and generated atoms
//!
//! These types hold no behavior beyond field access; constraint handling lives in
//! [`crate::core::constraints`] and all Cartesian math in [`crate::core::geometry`].

pub mod atom;
pub mod parameters;
