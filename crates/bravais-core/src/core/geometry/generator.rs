use super::basis::{GeometryError, UnitCellVectors};
use crate::core::models::atom::{CellIndex, FractionalPosition, LatticeAtom};
use nalgebra::Point3;

/// Vertex-index pairs of the 12 edges of a cell, indexing into [`unit_cell_vertices`].
pub const CELL_EDGES: [[usize; 2]; 12] = [
    [0, 1],
    [0, 2],
    [0, 4],
    [1, 3],
    [1, 5],
    [2, 3],
    [2, 6],
    [3, 7],
    [4, 5],
    [4, 6],
    [5, 7],
    [6, 7],
];

/// The 8 corners of the cell at `cell`, ordered
/// origin, a, b, a+b, c, a+c, b+c, a+b+c (relative to the cell origin).
pub fn unit_cell_vertices(vectors: &UnitCellVectors, cell: CellIndex) -> [Point3<f64>; 8] {
    let origin = vectors.cell_origin(cell);
    let UnitCellVectors { a, b, c } = *vectors;
    [
        origin,
        origin + a,
        origin + b,
        origin + a + b,
        origin + c,
        origin + a + c,
        origin + b + c,
        origin + a + b + c,
    ]
}

/// Upper bound on the number of atoms a single generation may produce.
pub const MAX_ATOMS: usize = 100_000_000;

/// Total atom count for `repeats³` cells, or `None` when it overflows or exceeds
/// [`MAX_ATOMS`].
fn checked_atom_count(repeats: usize, atoms_per_cell: usize) -> Option<usize> {
    repeats
        .checked_mul(repeats)?
        .checked_mul(repeats)?
        .checked_mul(atoms_per_cell)
        .filter(|&total| total <= MAX_ATOMS)
}

/// Lazily walks cells `(i, j, k)` in `[0, repeats)³`, `i` outermost and `k`
/// innermost, yielding the atoms of each cell in descriptor order.
///
/// The iterator is `Clone`; cloning it before consumption restarts the sequence.
#[derive(Debug, Clone)]
pub struct AtomIter<'a> {
    vectors: UnitCellVectors,
    positions: &'a [FractionalPosition],
    repeats: i64,
    cell: CellIndex,
    atom_index: usize,
    finished: bool,
}

impl<'a> AtomIter<'a> {
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidRepeatCount`] when `repeats` is negative, and
    /// [`GeometryError::TooManyAtoms`] when the grid would hold more than [`MAX_ATOMS`] atoms.
    pub fn new(
        vectors: &UnitCellVectors,
        positions: &'a [FractionalPosition],
        repeats: i64,
    ) -> Result<Self, GeometryError> {
        let Ok(n) = usize::try_from(repeats) else {
            return Err(GeometryError::InvalidRepeatCount { repeats });
        };
        if checked_atom_count(n, positions.len()).is_none() {
            return Err(GeometryError::TooManyAtoms {
                repeats,
                atoms_per_cell: positions.len(),
                limit: MAX_ATOMS,
            });
        }
        Ok(Self {
            vectors: *vectors,
            positions,
            repeats,
            cell: CellIndex::ORIGIN,
            atom_index: 0,
            finished: repeats == 0 || positions.is_empty(),
        })
    }

    fn advance_cell(&mut self) {
        self.atom_index = 0;
        self.cell.k += 1;
        if self.cell.k < self.repeats {
            return;
        }
        self.cell.k = 0;
        self.cell.j += 1;
        if self.cell.j < self.repeats {
            return;
        }
        self.cell.j = 0;
        self.cell.i += 1;
        if self.cell.i >= self.repeats {
            self.finished = true;
        }
    }

    fn remaining(&self) -> Option<usize> {
        if self.finished {
            return Some(0);
        }
        let n = usize::try_from(self.repeats).ok()?;
        let cells_done = usize::try_from(self.cell.i).ok()?.checked_mul(n)?.checked_mul(n)?
            + usize::try_from(self.cell.j).ok()?.checked_mul(n)?
            + usize::try_from(self.cell.k).ok()?;
        let total_cells = n.checked_mul(n)?.checked_mul(n)?;
        (total_cells - cells_done)
            .checked_mul(self.positions.len())?
            .checked_sub(self.atom_index)
    }
}

impl Iterator for AtomIter<'_> {
    type Item = LatticeAtom;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let fractional = &self.positions[self.atom_index];
        let position = self.vectors.cell_origin(self.cell) + self.vectors.to_cartesian(fractional);
        let atom = LatticeAtom::new(position, self.cell);

        self.atom_index += 1;
        if self.atom_index == self.positions.len() {
            self.advance_cell();
        }
        Some(atom)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining() {
            Some(n) => (n, Some(n)),
            None => (usize::MAX, None),
        }
    }
}

/// Expands fractional atom positions over a `repeats³` grid of cells into Cartesian atoms.
///
/// `repeats = 0` yields an empty vector. Calling this twice with the same inputs
/// returns identical results.
///
/// # Errors
///
/// Returns [`GeometryError::InvalidRepeatCount`] when `repeats` is negative and
/// [`GeometryError::TooManyAtoms`] when the result would exceed [`MAX_ATOMS`].
pub fn generate_atoms(
    vectors: &UnitCellVectors,
    positions: &[FractionalPosition],
    repeats: i64,
) -> Result<Vec<LatticeAtom>, GeometryError> {
    Ok(AtomIter::new(vectors, positions, repeats)?.collect())
}
