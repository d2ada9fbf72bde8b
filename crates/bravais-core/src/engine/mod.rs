//! # Engine Module
//!
//! The stateful layer of the lattice engine.
//!
//! ## Overview
//!
//! [`state::LatticeState`] owns the active lattice type and its parameter set and
//! exposes the operations a front end drives: selecting a type, editing parameters,
//! resetting to defaults and generating geometry. All operations are synchronous,
//! and a failed operation never leaves the state half-updated.
//!
//! ## Architecture
//!
//! - **State** ([`state`]) - The single mutable owner of type and parameters
//! - **Render Output** ([`bundle`]) - Basis vectors, atoms and the cell outline in one value
//! - **Configuration** ([`config`]) - Generation settings and their builder
//! - **Error Handling** ([`error`]) - Recoverable, typed engine errors

pub mod bundle;
pub mod config;
pub mod error;
pub mod state;
