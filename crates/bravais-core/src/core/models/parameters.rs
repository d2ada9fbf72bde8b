use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Names one of the six lattice parameters of a unit cell.
///
/// The three edge lengths share a single caller-defined unit, the three
/// interaxial angles are always expressed in degrees.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub enum ParameterName {
    /// Edge length along the first basis vector.
    A,
    /// Edge length along the second basis vector.
    B,
    /// Edge length along the third basis vector.
    C,
    /// Angle between the b and c edges, in degrees.
    Alpha,
    /// Angle between the a and c edges, in degrees.
    Beta,
    /// Angle between the a and b edges, in degrees.
    Gamma,
}

impl ParameterName {
    pub const ALL: [ParameterName; 6] = [
        ParameterName::A,
        ParameterName::B,
        ParameterName::C,
        ParameterName::Alpha,
        ParameterName::Beta,
        ParameterName::Gamma,
    ];

    /// Lower-case name as used in catalogs and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            ParameterName::A => "a",
            ParameterName::B => "b",
            ParameterName::C => "c",
            ParameterName::Alpha => "alpha",
            ParameterName::Beta => "beta",
            ParameterName::Gamma => "gamma",
        }
    }

    /// `true` for `alpha`, `beta` and `gamma`, which are in degrees.
    pub fn is_angle(&self) -> bool {
        matches!(
            self,
            ParameterName::Alpha | ParameterName::Beta | ParameterName::Gamma
        )
    }
}

impl fmt::Display for ParameterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown lattice parameter '{0}'. Expected one of: a, b, c, alpha, beta, gamma.")]
pub struct UnknownParameterError(pub String);

impl FromStr for ParameterName {
    type Err = UnknownParameterError;

    /// Parses a parameter name exactly as it appears in the catalog
    /// (`a`, `b`, `c`, `alpha`, `beta`, `gamma`), ignoring surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "a" => Ok(ParameterName::A),
            "b" => Ok(ParameterName::B),
            "c" => Ok(ParameterName::C),
            "alpha" => Ok(ParameterName::Alpha),
            "beta" => Ok(ParameterName::Beta),
            "gamma" => Ok(ParameterName::Gamma),
            _ => Err(UnknownParameterError(s.to_string())),
        }
    }
}

impl TryFrom<String> for ParameterName {
    type Error = UnknownParameterError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ParameterName> for String {
    fn from(name: ParameterName) -> Self {
        name.as_str().to_string()
    }
}

/// The full parameter set of a unit cell: edge lengths `a`, `b`, `c` and
/// interaxial angles `alpha`, `beta`, `gamma` (degrees).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LatticeParameters {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub alpha: f64,
    pub beta: f64,
    pub gamma: f64,
}

impl LatticeParameters {
    pub const fn new(a: f64, b: f64, c: f64, alpha: f64, beta: f64, gamma: f64) -> Self {
        Self {
            a,
            b,
            c,
            alpha,
            beta,
            gamma,
        }
    }

    /// Current value of `name`.
    pub fn get(&self, name: ParameterName) -> f64 {
        match name {
            ParameterName::A => self.a,
            ParameterName::B => self.b,
            ParameterName::C => self.c,
            ParameterName::Alpha => self.alpha,
            ParameterName::Beta => self.beta,
            ParameterName::Gamma => self.gamma,
        }
    }

    /// Overwrites `name` without applying any constraint.
    pub fn set(&mut self, name: ParameterName, value: f64) {
        let slot = match name {
            ParameterName::A => &mut self.a,
            ParameterName::B => &mut self.b,
            ParameterName::C => &mut self.c,
            ParameterName::Alpha => &mut self.alpha,
            ParameterName::Beta => &mut self.beta,
            ParameterName::Gamma => &mut self.gamma,
        };
        *slot = value;
    }

    /// Edge lengths `[a, b, c]`.
    pub fn lengths(&self) -> [f64; 3] {
        [self.a, self.b, self.c]
    }

    /// Inter-axial angles `[alpha, beta, gamma]` in degrees.
    pub fn angles(&self) -> [f64; 3] {
        [self.alpha, self.beta, self.gamma]
    }

    /// Iterates `(name, value)` pairs in the canonical `a, b, c, alpha, beta, gamma` order.
    pub fn iter(&self) -> impl Iterator<Item = (ParameterName, f64)> + '_ {
        ParameterName::ALL.into_iter().map(|name| (name, self.get(name)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_str_parses_all_six_names() {
        for name in ParameterName::ALL {
            assert_eq!(ParameterName::from_str(name.as_str()), Ok(name));
        }
    }

    #[test]
    fn from_str_trims_whitespace() {
        assert_eq!(ParameterName::from_str(" gamma "), Ok(ParameterName::Gamma));
    }

    #[test]
    fn from_str_is_case_sensitive_and_rejects_unknown_names() {
        assert_eq!(
            ParameterName::from_str("Alpha"),
            Err(UnknownParameterError("Alpha".to_string()))
        );
        assert!(ParameterName::from_str("d").is_err());
        assert!(ParameterName::from_str("").is_err());
    }

    #[test]
    fn is_angle_distinguishes_lengths_from_angles() {
        assert!(!ParameterName::A.is_angle());
        assert!(!ParameterName::C.is_angle());
        assert!(ParameterName::Alpha.is_angle());
        assert!(ParameterName::Gamma.is_angle());
    }

    #[test]
    fn get_and_set_address_the_matching_field() {
        let mut params = LatticeParameters::new(1.0, 2.0, 3.0, 80.0, 85.0, 100.0);
        assert_eq!(params.get(ParameterName::B), 2.0);
        assert_eq!(params.get(ParameterName::Beta), 85.0);

        params.set(ParameterName::Gamma, 120.0);
        params.set(ParameterName::C, 4.5);
        assert_eq!(params.gamma, 120.0);
        assert_eq!(params.c, 4.5);
        assert_eq!(params.a, 1.0);
    }

    #[test]
    fn iter_yields_parameters_in_canonical_order() {
        let params = LatticeParameters::new(1.0, 2.0, 3.0, 80.0, 85.0, 100.0);
        let collected: Vec<_> = params.iter().collect();
        assert_eq!(
            collected,
            vec![
                (ParameterName::A, 1.0),
                (ParameterName::B, 2.0),
                (ParameterName::C, 3.0),
                (ParameterName::Alpha, 80.0),
                (ParameterName::Beta, 85.0),
                (ParameterName::Gamma, 100.0),
            ]
        );
    }

    #[test]
    fn parameters_deserialize_from_toml_table() {
        let params: LatticeParameters =
            toml::from_str("a = 1.0\nb = 1.0\nc = 1.5\nalpha = 90.0\nbeta = 90.0\ngamma = 120.0")
                .unwrap();
        assert_eq!(params, LatticeParameters::new(1.0, 1.0, 1.5, 90.0, 90.0, 120.0));
    }

    #[test]
    fn parameters_reject_unknown_fields() {
        let result: Result<LatticeParameters, _> = toml::from_str(
            "a = 1.0\nb = 1.0\nc = 1.5\nalpha = 90.0\nbeta = 90.0\ngamma = 120.0\ndelta = 1.0",
        );
        assert!(result.is_err());
    }
}
