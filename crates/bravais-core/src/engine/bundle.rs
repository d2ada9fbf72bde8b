use super::error::EngineError;
use crate::core::catalog::descriptor::LatticeTypeDescriptor;
use crate::core::catalog::kind::LatticeKind;
use crate::core::geometry::basis::{UnitCellVectors, compute_basis_vectors};
use crate::core::geometry::generator::{CELL_EDGES, generate_atoms, unit_cell_vertices};
use crate::core::models::atom::{CellIndex, LatticeAtom};
use crate::core::models::parameters::LatticeParameters;
use nalgebra::Point3;
use serde::Serialize;

/// Everything a renderer needs to draw one lattice: basis, atoms and the outline
/// of the cell at the origin.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderBundle {
    pub lattice: LatticeKind,
    pub parameters: LatticeParameters,
    pub unit_cell_vectors: UnitCellVectors,
    pub atoms: Vec<LatticeAtom>,
    pub cell_vertices: [Point3<f64>; 8],
    pub cell_edges: [[usize; 2]; 12],
}

impl RenderBundle {
    /// Computes the bundle for `parameters` under `descriptor`, replicating `repeats³` cells.
    pub fn build(
        descriptor: &LatticeTypeDescriptor,
        parameters: &LatticeParameters,
        repeats: i64,
    ) -> Result<Self, EngineError> {
        let unit_cell_vectors = compute_basis_vectors(parameters)?;
        let atoms = generate_atoms(&unit_cell_vectors, &descriptor.atom_positions, repeats)?;
        Ok(Self {
            lattice: descriptor.kind,
            parameters: *parameters,
            unit_cell_vectors,
            atoms,
            cell_vertices: unit_cell_vertices(&unit_cell_vectors, CellIndex::ORIGIN),
            cell_edges: CELL_EDGES,
        })
    }
}
