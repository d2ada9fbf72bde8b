use crate::core::models::atom::{CellIndex, FractionalPosition};
use crate::core::models::parameters::LatticeParameters;
use nalgebra::{Point3, Vector3};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeometryError {
    #[error("Degenerate unit cell: {reason}")]
    DegenerateCell { reason: String },
    #[error("Invalid repeat count {repeats}: must be zero or positive")]
    InvalidRepeatCount { repeats: i64 },
    #[error("Repeat count {repeats} with {atoms_per_cell} atom(s) per cell exceeds the limit of {limit} atoms")]
    TooManyAtoms {
        repeats: i64,
        atoms_per_cell: usize,
        limit: usize,
    },
}

impl GeometryError {
    fn degenerate(reason: impl Into<String>) -> Self {
        GeometryError::DegenerateCell {
            reason: reason.into(),
        }
    }
}

/// The three Cartesian basis vectors of a unit cell.
///
/// `a` lies along +x and `b` lies in the xy-plane; `c` completes a right-handed
/// cell with a non-negative z component.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UnitCellVectors {
    pub a: Vector3<f64>,
    pub b: Vector3<f64>,
    pub c: Vector3<f64>,
}

impl UnitCellVectors {
    pub fn new(a: Vector3<f64>, b: Vector3<f64>, c: Vector3<f64>) -> Self {
        Self { a, b, c }
    }

    /// Cell volume `a · (b × c)`.
    pub fn volume(&self) -> f64 {
        self.a.dot(&self.b.cross(&self.c))
    }

    /// Geometric centre `(a + b + c) / 2` of the cell at the origin.
    pub fn center(&self) -> Point3<f64> {
        Point3::from((self.a + self.b + self.c) / 2.0)
    }

    /// Cartesian offset of a fractional coordinate within one cell.
    pub fn to_cartesian(&self, fractional: &FractionalPosition) -> Vector3<f64> {
        self.a * fractional[0] + self.b * fractional[1] + self.c * fractional[2]
    }

    /// Cartesian origin of the cell with index `(i, j, k)`.
    pub fn cell_origin(&self, cell: CellIndex) -> Point3<f64> {
        Point3::from(self.a * cell.i as f64 + self.b * cell.j as f64 + self.c * cell.k as f64)
    }
}

/// Converts lattice parameters into Cartesian basis vectors with the general triclinic formula.
///
/// ```text
/// a = (a, 0, 0)
/// b = (b cos γ, b sin γ, 0)
/// c = (c cos β, c (cos α − cos β cos γ) / sin γ, sqrt(c² − cx² − cy²))
/// ```
///
/// # Errors
///
/// Returns [`GeometryError::DegenerateCell`] instead of producing NaN when a value
/// is non-finite, a length is not strictly positive, an angle lies outside the
/// open interval (0°, 180°), or the three angles cannot close a cell.
pub fn compute_basis_vectors(
    parameters: &LatticeParameters,
) -> Result<UnitCellVectors, GeometryError> {
    check_parameter_ranges(parameters)?;

    let LatticeParameters {
        a,
        b,
        c,
        alpha,
        beta,
        gamma,
    } = *parameters;

    let (alpha_rad, beta_rad, gamma_rad) = (alpha.to_radians(), beta.to_radians(), gamma.to_radians());
    let (cos_alpha, cos_beta, cos_gamma) = (alpha_rad.cos(), beta_rad.cos(), gamma_rad.cos());
    let sin_gamma = gamma_rad.sin();

    let cx = c * cos_beta;
    let cy = c * (cos_alpha - cos_beta * cos_gamma) / sin_gamma;
    let radicand = c * c - cx * cx - cy * cy;
    if radicand < 0.0 || !radicand.is_finite() {
        return Err(GeometryError::degenerate(format!(
            "angles alpha={}, beta={}, gamma={} cannot form a cell (c_z² = {:.3e})",
            alpha, beta, gamma, radicand
        )));
    }

    Ok(UnitCellVectors {
        a: Vector3::new(a, 0.0, 0.0),
        b: Vector3::new(b * cos_gamma, b * sin_gamma, 0.0),
        c: Vector3::new(cx, cy, radicand.sqrt()),
    })
}

fn check_parameter_ranges(parameters: &LatticeParameters) -> Result<(), GeometryError> {
    for (name, value) in parameters.iter() {
        if !value.is_finite() {
            return Err(GeometryError::degenerate(format!(
                "{} is not a finite number ({})",
                name, value
            )));
        }
        if name.is_angle() {
            if value <= 0.0 || value >= 180.0 {
                return Err(GeometryError::degenerate(format!(
                    "{} = {} must lie strictly between 0 and 180 degrees",
                    name, value
                )));
            }
        } else if value <= 0.0 {
            return Err(GeometryError::degenerate(format!(
                "{} = {} must be positive",
                name, value
            )));
        }
    }
    Ok(())
}
