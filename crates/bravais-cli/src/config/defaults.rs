use bravais::core::catalog::kind::LatticeKind;

pub struct DefaultsConfig {
    pub lattice: LatticeKind,
    pub repeats: i64,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            lattice: LatticeKind::default(),
            repeats: 1,
        }
    }
}
