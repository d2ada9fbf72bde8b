mod defaults;

use crate::cli::GenerateArgs;
use crate::error::{CliError, Result};
use crate::utils::parser;
use bravais::core::catalog::kind::LatticeKind;
use bravais::core::models::parameters::ParameterName;
use bravais::engine::config::{self as core_config, ParameterEdit};
use defaults::DefaultsConfig;
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialLatticeConfig {
    #[serde(rename = "type")]
    lattice_type: Option<String>,
}

#[derive(Deserialize, Debug, Default, Clone, Copy, PartialEq)]
#[serde(deny_unknown_fields)]
struct PartialParameters {
    a: Option<f64>,
    b: Option<f64>,
    c: Option<f64>,
    alpha: Option<f64>,
    beta: Option<f64>,
    gamma: Option<f64>,
}

impl PartialParameters {
    fn get(&self, name: ParameterName) -> Option<f64> {
        match name {
            ParameterName::A => self.a,
            ParameterName::B => self.b,
            ParameterName::C => self.c,
            ParameterName::Alpha => self.alpha,
            ParameterName::Beta => self.beta,
            ParameterName::Gamma => self.gamma,
        }
    }

    fn slot(&mut self, name: ParameterName) -> &mut Option<f64> {
        match name {
            ParameterName::A => &mut self.a,
            ParameterName::B => &mut self.b,
            ParameterName::C => &mut self.c,
            ParameterName::Alpha => &mut self.alpha,
            ParameterName::Beta => &mut self.beta,
            ParameterName::Gamma => &mut self.gamma,
        }
    }

    /// Edits in canonical parameter order, so mirror sources are applied before their targets.
    fn edits(&self) -> Vec<ParameterEdit> {
        ParameterName::ALL
            .into_iter()
            .filter_map(|name| self.get(name).map(|value| ParameterEdit::new(name, value)))
            .collect()
    }
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialGenerationSection {
    repeats: Option<i64>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialGenerationConfig {
    lattice: Option<PartialLatticeConfig>,
    parameters: Option<PartialParameters>,
    generation: Option<PartialGenerationSection>,
}

impl PartialGenerationConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Resolves the final generation settings.
    ///
    /// Precedence, highest first: command-line flags, `--set` overrides, the
    /// config file, built-in defaults. File and `--set` parameter values are applied
    /// before any `--param` edit.
    pub fn merge_with_cli(mut self, args: &GenerateArgs) -> Result<core_config::GenerationConfig> {
        self.apply_set_values(&args.set_values)?;
        let defaults = DefaultsConfig::default();

        let lattice_id = args.lattice.as_deref().or(self
            .lattice
            .as_ref()
            .and_then(|l| l.lattice_type.as_deref()));
        let lattice = match lattice_id {
            Some(id) => LatticeKind::from_str(id).map_err(|e| CliError::Argument(e.to_string()))?,
            None => defaults.lattice,
        };

        let repeats = args
            .repeats
            .or(self.generation.as_ref().and_then(|g| g.repeats))
            .unwrap_or(defaults.repeats);

        let mut edits = self.parameters.unwrap_or_default().edits();
        for raw in &args.params {
            edits.push(
                parser::parse_parameter_edit(raw).map_err(|e| CliError::Argument(e.to_string()))?,
            );
        }

        core_config::GenerationConfigBuilder::new()
            .lattice(lattice)
            .parameter_edits(edits)
            .repeats(repeats)
            .build()
            .map_err(|e| CliError::Config(e.to_string()))
    }

    fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        for kv_pair in set_values {
            let (key, value_str) = parser::split_key_value(kv_pair)
                .map_err(|e| CliError::Config(format!("Invalid --set value: {}", e)))?;

            match key {
                "lattice.type" => {
                    self.lattice
                        .get_or_insert_with(Default::default)
                        .lattice_type = Some(value_str.to_string());
                }
                "generation.repeats" => {
                    self.generation
                        .get_or_insert_with(Default::default)
                        .repeats = Some(
                        parser::parse_number(key, value_str)
                            .map_err(|e| CliError::Config(e.to_string()))?,
                    );
                }
                _ => {
                    let name = key
                        .strip_prefix("parameters.")
                        .and_then(|name| ParameterName::from_str(name).ok())
                        .ok_or_else(|| {
                            CliError::Config(format!(
                                "Unsupported configuration key for --set: '{}'",
                                key
                            ))
                        })?;
                    *self
                        .parameters
                        .get_or_insert_with(Default::default)
                        .slot(name) = Some(
                        parser::parse_number(key, value_str)
                            .map_err(|e| CliError::Config(e.to_string()))?,
                    );
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;
    use once_cell::sync::Lazy;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::{TempDir, tempdir};

    static TEST_DIR: Lazy<TempDir> = Lazy::new(|| tempdir().expect("Failed to create temp dir"));

    fn write_config_file(name: &str, content: &str) -> PathBuf {
        let file_path = TEST_DIR.path().join(name);
        fs::write(&file_path, content).unwrap();
        file_path
    }

    fn generate_args(extra: &[&str]) -> GenerateArgs {
        let mut args = vec!["bravais", "generate"];
        args.extend_from_slice(extra);
        match Cli::parse_from(args).command {
            Commands::Generate(args) => args,
            other => panic!("Expected 'generate' subcommand, got {:?}", other),
        }
    }

    #[test]
    fn empty_config_falls_back_to_defaults() {
        let config = PartialGenerationConfig::default()
            .merge_with_cli(&generate_args(&[]))
            .unwrap();
        assert_eq!(config.lattice, LatticeKind::SimpleCubic);
        assert_eq!(config.repeats, 1);
        assert!(config.parameter_edits.is_empty());
    }

    #[test]
    fn load_from_file_and_merge() {
        let path = write_config_file(
            "config_file.toml",
            r#"
            [lattice]
            type = "hexagonal"

            [parameters]
            gamma = 110.0
            a = 2.0

            [generation]
            repeats = 2
            "#,
        );
        let config = PartialGenerationConfig::from_file(&path)
            .unwrap()
            .merge_with_cli(&generate_args(&[]))
            .unwrap();

        assert_eq!(config.lattice, LatticeKind::Hexagonal);
        assert_eq!(config.repeats, 2);
        assert_eq!(
            config.parameter_edits,
            vec![
                ParameterEdit::new(ParameterName::A, 2.0),
                ParameterEdit::new(ParameterName::Gamma, 110.0),
            ]
        );
    }

    #[test]
    fn cli_args_override_set_values_and_file() {
        let path = write_config_file(
            "config_override.toml",
            r#"
            [lattice]
            type = "hexagonal" # Will be overridden by -l

            [generation]
            repeats = 2 # Will be overridden by -S, then by -n
            "#,
        );
        let args = generate_args(&[
            "-l",
            "triclinic",
            "-S",
            "generation.repeats=4",
            "-n",
            "3",
            "-S",
            "parameters.c=5",
            "-p",
            "c=6",
        ]);
        let config = PartialGenerationConfig::from_file(&path)
            .unwrap()
            .merge_with_cli(&args)
            .unwrap();

        assert_eq!(config.lattice, LatticeKind::Triclinic);
        assert_eq!(config.repeats, 3);
        assert_eq!(
            config.parameter_edits,
            vec![
                ParameterEdit::new(ParameterName::C, 5.0),
                ParameterEdit::new(ParameterName::C, 6.0),
            ]
        );
    }

    #[test]
    fn set_values_override_file_values() {
        let path = write_config_file(
            "config_set.toml",
            r#"
            [lattice]
            type = "simple-cubic"

            [parameters]
            a = 1.5

            [generation]
            repeats = 2
            "#,
        );
        let args = generate_args(&[
            "-S",
            "lattice.type=rhombohedral",
            "-S",
            "parameters.a=3",
            "-S",
            "generation.repeats=5",
        ]);
        let config = PartialGenerationConfig::from_file(&path)
            .unwrap()
            .merge_with_cli(&args)
            .unwrap();

        assert_eq!(config.lattice, LatticeKind::Rhombohedral);
        assert_eq!(config.repeats, 5);
        assert_eq!(
            config.parameter_edits,
            vec![ParameterEdit::new(ParameterName::A, 3.0)]
        );
    }

    #[test]
    fn unsupported_set_key_is_rejected() {
        let args = generate_args(&["-S", "generation.atoms=3"]);
        let result = PartialGenerationConfig::default().merge_with_cli(&args);
        assert!(matches!(result, Err(CliError::Config(msg)) if msg.contains("generation.atoms")));

        let args = generate_args(&["-S", "parameters.delta=3"]);
        let result = PartialGenerationConfig::default().merge_with_cli(&args);
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn malformed_set_value_is_rejected() {
        let args = generate_args(&["-S", "generation.repeats"]);
        let result = PartialGenerationConfig::default().merge_with_cli(&args);
        assert!(matches!(result, Err(CliError::Config(_))));

        let args = generate_args(&["-S", "generation.repeats=many"]);
        let result = PartialGenerationConfig::default().merge_with_cli(&args);
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn unknown_lattice_id_is_an_argument_error() {
        let args = generate_args(&["-l", "diamond"]);
        let result = PartialGenerationConfig::default().merge_with_cli(&args);
        assert!(matches!(result, Err(CliError::Argument(msg)) if msg.contains("diamond")));
    }

    #[test]
    fn invalid_param_edit_is_an_argument_error() {
        let args = generate_args(&["-p", "a"]);
        let result = PartialGenerationConfig::default().merge_with_cli(&args);
        assert!(matches!(result, Err(CliError::Argument(_))));
    }

    #[test]
    fn unknown_fields_in_file_are_rejected() {
        let path = write_config_file(
            "config_unknown.toml",
            r#"
            [generation]
            repeats = 2
            bonds = true
            "#,
        );
        let result = PartialGenerationConfig::from_file(&path);
        assert!(matches!(result, Err(CliError::FileParsing { .. })));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = PartialGenerationConfig::from_file(Path::new("/nonexistent/bravais.toml"));
        assert!(matches!(result, Err(CliError::Io(_))));
    }
}
