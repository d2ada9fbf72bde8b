use super::bundle::RenderBundle;
use super::error::EngineError;
use crate::core::catalog::descriptor::LatticeTypeDescriptor;
use crate::core::catalog::kind::LatticeKind;
use crate::core::catalog::registry::{LatticeCatalog, LatticeNotFoundError};
use crate::core::constraints::propagation::{self, ConstraintViolation};
use crate::core::geometry::basis::{UnitCellVectors, compute_basis_vectors};
use crate::core::geometry::generator::{AtomIter, unit_cell_vertices};
use crate::core::models::atom::CellIndex;
use crate::core::models::parameters::{LatticeParameters, ParameterName};
use nalgebra::Point3;
use std::str::FromStr;

/// The active lattice type and its current parameters.
///
/// This is the only mutable piece of the engine. Every operation either succeeds
/// completely or returns an error and leaves the state exactly as it was.
#[derive(Debug, Clone, PartialEq)]
pub struct LatticeState<'c> {
    catalog: &'c LatticeCatalog,
    descriptor: &'c LatticeTypeDescriptor,
    parameters: LatticeParameters,
}

impl LatticeState<'static> {
    /// A simple cubic lattice backed by the builtin catalog.
    pub fn builtin() -> Self {
        let descriptor = LatticeKind::default().descriptor();
        Self {
            catalog: LatticeCatalog::builtin(),
            descriptor,
            parameters: propagation::load_defaults(descriptor),
        }
    }
}

impl Default for LatticeState<'static> {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'c> LatticeState<'c> {
    /// Starts at `kind` with its default parameters.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NotFound`] when `catalog` has no entry for `kind`.
    pub fn new(catalog: &'c LatticeCatalog, kind: LatticeKind) -> Result<Self, EngineError> {
        let descriptor = catalog
            .get(kind)
            .ok_or_else(|| LatticeNotFoundError(kind.id().to_string()))?;
        Ok(Self {
            catalog,
            descriptor,
            parameters: propagation::load_defaults(descriptor),
        })
    }

    pub fn catalog(&self) -> &'c LatticeCatalog {
        self.catalog
    }

    pub fn kind(&self) -> LatticeKind {
        self.descriptor.kind
    }

    pub fn descriptor(&self) -> &'c LatticeTypeDescriptor {
        self.descriptor
    }

    /// The current, possibly edited, parameter set.
    pub fn parameters(&self) -> &LatticeParameters {
        &self.parameters
    }

    /// Switches to the lattice type `id` and loads its default parameters.
    pub fn set_lattice_type(&mut self, id: &str) -> Result<(), EngineError> {
        let descriptor = self.catalog.lookup(id)?;
        self.descriptor = descriptor;
        self.parameters = propagation::load_defaults(descriptor);
        Ok(())
    }

    /// Typed variant of [`Self::set_lattice_type`].
    pub fn select(&mut self, kind: LatticeKind) -> Result<(), EngineError> {
        self.set_lattice_type(kind.id())
    }

    /// Assigns `value` to the parameter `name` and to every parameter it mirrors into.
    ///
    /// The value is not range-checked; use [`Self::set_parameter_checked`] to keep
    /// the cell valid.
    pub fn set_parameter(&mut self, name: &str, value: f64) -> Result<(), EngineError> {
        let name = ParameterName::from_str(name)?;
        self.apply(name, value);
        Ok(())
    }

    /// Like [`Self::set_parameter`], but rejects an edit that would make the cell degenerate.
    pub fn set_parameter_checked(&mut self, name: &str, value: f64) -> Result<(), EngineError> {
        let name = ParameterName::from_str(name)?;
        let candidate = propagation::propagate(
            &self.parameters,
            &self.descriptor.constraints,
            name,
            value,
        );
        compute_basis_vectors(&candidate)?;
        self.parameters = candidate;
        Ok(())
    }

    /// Applies an already-parsed parameter edit.
    pub fn apply(&mut self, name: ParameterName, value: f64) {
        self.parameters = propagation::propagate(
            &self.parameters,
            &self.descriptor.constraints,
            name,
            value,
        );
    }

    /// Restores the default parameters of the current lattice type.
    pub fn reset_parameters(&mut self) {
        self.parameters = propagation::load_defaults(self.descriptor);
    }

    /// Constraints the current parameters no longer satisfy, in parameter order.
    ///
    /// An empty list means the parameters still match the lattice type's symmetry.
    pub fn violations(&self) -> Vec<ConstraintViolation> {
        propagation::violations(&self.parameters, self.descriptor)
    }

    /// Cartesian basis vectors for the current parameters.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::DegenerateCell`] when the parameters describe no valid cell.
    pub fn unit_cell_vectors(&self) -> Result<UnitCellVectors, EngineError> {
        Ok(compute_basis_vectors(&self.parameters)?)
    }

    /// Corners of the cell at `cell`, in [`unit_cell_vertices`] order.
    pub fn unit_cell_vertices(&self, cell: CellIndex) -> Result<[Point3<f64>; 8], EngineError> {
        Ok(unit_cell_vertices(&self.unit_cell_vectors()?, cell))
    }

    /// Lazily yields the atoms of a `repeats³` block of cells.
    ///
    /// Fails like [`Self::generate_lattice`], before any atom is produced.
    pub fn atoms(&self, repeats: i64) -> Result<AtomIter<'c>, EngineError> {
        let vectors = self.unit_cell_vectors()?;
        Ok(AtomIter::new(
            &vectors,
            &self.descriptor.atom_positions,
            repeats,
        )?)
    }

    /// Builds the full render output for a `repeats³` block of cells.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::DegenerateCell`] for an invalid cell,
    /// [`EngineError::InvalidRepeatCount`] for a negative count and
    /// [`EngineError::TooManyAtoms`] when the block would be too large to hold.
    pub fn generate_lattice(&self, repeats: i64) -> Result<RenderBundle, EngineError> {
        RenderBundle::build(self.descriptor, &self.parameters, repeats)
    }
}
