use nalgebra::Point3;
use serde::Serialize;
use std::fmt;

/// A fractional coordinate `(x, y, z)` expressed in units of the three basis vectors.
pub type FractionalPosition = [f64; 3];

/// Integer index `(i, j, k)` of a unit cell within a replicated lattice.
///
/// The derived ordering is lexicographic (`i`, then `j`, then `k`), which matches
/// the order in which the atom generator visits cells. Serializes as `[i, j, k]`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize,
)]
#[serde(into = "[i64; 3]")]
pub struct CellIndex {
    pub i: i64,
    pub j: i64,
    pub k: i64,
}

impl CellIndex {
    pub const ORIGIN: CellIndex = CellIndex { i: 0, j: 0, k: 0 };

    pub const fn new(i: i64, j: i64, k: i64) -> Self {
        Self { i, j, k }
    }
}

impl From<[i64; 3]> for CellIndex {
    fn from([i, j, k]: [i64; 3]) -> Self {
        Self { i, j, k }
    }
}

impl From<CellIndex> for [i64; 3] {
    fn from(cell: CellIndex) -> Self {
        [cell.i, cell.j, cell.k]
    }
}

impl fmt::Display for CellIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.i, self.j, self.k)
    }
}

/// An atom placed in Cartesian space, tagged with the unit cell it was generated for.
///
/// Atoms carry no identity beyond the generation call that produced them; they are
/// regenerated whenever the lattice geometry changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatticeAtom {
    /// Cartesian position, in the same unit as the lattice edge lengths.
    pub position: Point3<f64>,
    /// Index of the unit cell this atom belongs to.
    pub unit_cell: CellIndex,
}

impl LatticeAtom {
    pub fn new(position: Point3<f64>, unit_cell: CellIndex) -> Self {
        Self {
            position,
            unit_cell,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_index_orders_lexicographically() {
        let mut cells = vec![
            CellIndex::new(1, 0, 0),
            CellIndex::new(0, 1, 1),
            CellIndex::new(0, 0, 1),
            CellIndex::new(0, 1, 0),
        ];
        cells.sort();
        assert_eq!(
            cells,
            vec![
                CellIndex::new(0, 0, 1),
                CellIndex::new(0, 1, 0),
                CellIndex::new(0, 1, 1),
                CellIndex::new(1, 0, 0),
            ]
        );
    }

    #[test]
    fn cell_index_default_is_origin() {
        assert_eq!(CellIndex::default(), CellIndex::ORIGIN);
        assert_eq!(CellIndex::from([2, -1, 3]), CellIndex::new(2, -1, 3));
        assert_eq!(<[i64; 3]>::from(CellIndex::new(2, -1, 3)), [2, -1, 3]);
    }

    #[test]
    fn cell_index_displays_as_tuple() {
        assert_eq!(CellIndex::new(1, -2, 3).to_string(), "(1, -2, 3)");
    }

    #[test]
    fn new_atom_keeps_position_and_cell() {
        let atom = LatticeAtom::new(Point3::new(0.5, 0.5, 0.5), CellIndex::new(0, 1, 0));
        assert_eq!(atom.position, Point3::new(0.5, 0.5, 0.5));
        assert_eq!(atom.unit_cell, CellIndex::new(0, 1, 0));
    }
}
