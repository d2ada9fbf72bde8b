//! # Constraints Module
//!
//! Symmetry constraints between lattice parameters and the propagation rules that
//! keep a parameter set consistent with its lattice type.
//!
//! - [`constraint`] - `fixed` and `equals` constraints and the per-type constraint set
//! - [`propagation`] - Default loading, one-step mirror propagation and violation reports
//!
//! A `fixed` constraint only seeds the default; a later edit may move the value.
//! An `equals` constraint copies every edit of its source into its targets, in one
//! direction and without following chains.

pub mod constraint;
pub mod propagation;
