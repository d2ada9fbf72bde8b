use bravais::core::models::parameters::ParameterName;
use bravais::engine::config::ParameterEdit;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid format for '{0}'. Expected KEY=VALUE (e.g., 'a=2.5').")]
    MissingSeparator(String),

    #[error("Key cannot be empty in '{0}'.")]
    EmptyKey(String),

    #[error("Invalid number '{value}' for '{key}'.")]
    InvalidNumber { key: String, value: String },

    #[error("Unknown lattice parameter '{0}'. Expected one of: a, b, c, alpha, beta, gamma.")]
    UnknownParameter(String),
}

/// Splits `KEY=VALUE` at the first `=`, trimming whitespace around both halves.
pub fn split_key_value(input: &str) -> Result<(&str, &str), ParseError> {
    let (key, value) = input
        .split_once('=')
        .ok_or_else(|| ParseError::MissingSeparator(input.to_string()))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(ParseError::EmptyKey(input.to_string()));
    }
    Ok((key, value.trim()))
}

pub fn parse_number<T: FromStr>(key: &str, value: &str) -> Result<T, ParseError> {
    value.parse().map_err(|_| ParseError::InvalidNumber {
        key: key.to_string(),
        value: value.to_string(),
    })
}

/// Parses a `NAME=VALUE` lattice parameter edit such as `gamma=120`.
pub fn parse_parameter_edit(input: &str) -> Result<ParameterEdit, ParseError> {
    let (key, value) = split_key_value(input)?;
    let name = ParameterName::from_str(key)
        .map_err(|_| ParseError::UnknownParameter(key.to_string()))?;
    let value = parse_number::<f64>(key, value)?;
    Ok(ParameterEdit::new(name, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_key_value_splits_at_first_separator() {
        assert_eq!(split_key_value("lattice.type=hexagonal"), Ok(("lattice.type", "hexagonal")));
        assert_eq!(split_key_value(" a = 2 "), Ok(("a", "2")));
        assert_eq!(split_key_value("k=v=w"), Ok(("k", "v=w")));
    }

    #[test]
    fn split_key_value_rejects_missing_separator_and_empty_key() {
        assert_eq!(
            split_key_value("repeats"),
            Err(ParseError::MissingSeparator("repeats".to_string()))
        );
        assert_eq!(split_key_value("=3"), Err(ParseError::EmptyKey("=3".to_string())));
    }

    #[test]
    fn parse_parameter_edit_accepts_valid_edits() {
        assert_eq!(
            parse_parameter_edit("gamma=120"),
            Ok(ParameterEdit::new(ParameterName::Gamma, 120.0))
        );
        assert_eq!(
            parse_parameter_edit("c=1.5e0"),
            Ok(ParameterEdit::new(ParameterName::C, 1.5))
        );
    }

    #[test]
    fn parse_parameter_edit_rejects_unknown_names_and_bad_numbers() {
        assert_eq!(
            parse_parameter_edit("delta=1"),
            Err(ParseError::UnknownParameter("delta".to_string()))
        );
        assert_eq!(
            parse_parameter_edit("a=wide"),
            Err(ParseError::InvalidNumber {
                key: "a".to_string(),
                value: "wide".to_string()
            })
        );
    }

    #[test]
    fn parse_number_handles_integers() {
        assert_eq!(parse_number::<i64>("generation.repeats", "3"), Ok(3));
        assert!(parse_number::<i64>("generation.repeats", "3.5").is_err());
    }
}
