use crate::core::catalog::kind::LatticeKind;
use crate::core::models::parameters::ParameterName;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
}

/// One parameter assignment, applied through constraint propagation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterEdit {
    pub name: ParameterName,
    pub value: f64,
}

impl ParameterEdit {
    pub fn new(name: ParameterName, value: f64) -> Self {
        Self { name, value }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GenerationConfig {
    pub lattice: LatticeKind,
    /// Applied in order after the lattice defaults are loaded.
    pub parameter_edits: Vec<ParameterEdit>,
    pub repeats: i64,
}

#[derive(Default)]
pub struct GenerationConfigBuilder {
    lattice: Option<LatticeKind>,
    parameter_edits: Vec<ParameterEdit>,
    repeats: Option<i64>,
}

impl GenerationConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lattice(mut self, kind: LatticeKind) -> Self {
        self.lattice = Some(kind);
        self
    }
    pub fn parameter(mut self, name: ParameterName, value: f64) -> Self {
        self.parameter_edits.push(ParameterEdit::new(name, value));
        self
    }
    pub fn parameter_edits(mut self, edits: impl IntoIterator<Item = ParameterEdit>) -> Self {
        self.parameter_edits.extend(edits);
        self
    }
    pub fn repeats(mut self, repeats: i64) -> Self {
        self.repeats = Some(repeats);
        self
    }

    pub fn build(self) -> Result<GenerationConfig, ConfigError> {
        Ok(GenerationConfig {
            lattice: self
                .lattice
                .ok_or(ConfigError::MissingParameter("lattice"))?,
            parameter_edits: self.parameter_edits,
            repeats: self
                .repeats
                .ok_or(ConfigError::MissingParameter("repeats"))?,
        })
    }
}
