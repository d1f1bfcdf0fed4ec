//! Brain configuration (`calc.toml`) parsing.
//!
//! ```toml
//! angle_mode = "radians"
//!
//! [constants]
//! e = 2.718281828459045
//! ```

use std::collections::BTreeMap;
use std::f64::consts::PI;
use std::path::Path;

use log::info;
use serde::Deserialize;

use crate::error::{ConfigError, ConstantError};
use crate::op::Op;
use crate::registry::OpRegistry;

/// How trigonometric operations read their input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleMode {
    #[default]
    Degrees,
    Radians,
}

impl AngleMode {
    /// Convert an angle in this mode to radians.
    pub fn to_radians(self, angle: f64) -> f64 {
        match self {
            AngleMode::Degrees => angle * PI / 180.0,
            AngleMode::Radians => angle,
        }
    }
}

/// A parsed brain configuration.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BrainConfig {
    /// Angle unit for `sin` and `cos` (default: degrees).
    #[serde(default)]
    pub angle_mode: AngleMode,

    /// Extra named constants, registered after the standard set.
    #[serde(default)]
    pub constants: BTreeMap<String, f64>,
}

impl BrainConfig {
    /// Load a configuration from a file path.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_owned(),
            source: e,
        })?;

        let config = Self::from_str(&content, path)?;
        info!(
            "loaded config from {} ({} constants)",
            path.display(),
            config.constants.len()
        );
        Ok(config)
    }

    /// Parse a configuration from a string. `path` is only used in errors.
    pub fn from_str(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: BrainConfig = toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: path.to_owned(),
            source: e,
        })?;

        config.validate().map_err(|source| ConfigError::Invalid {
            path: path.to_owned(),
            source,
        })?;
        Ok(config)
    }

    /// Constant entries to register on top of the standard set.
    pub fn constant_ops(&self) -> impl Iterator<Item = Op> + '_ {
        self.constants
            .iter()
            .map(|(symbol, value)| Op::constant(symbol.as_str(), *value))
    }

    /// Check that every constant symbol is a usable key and does not hide
    /// a built-in operation.
    pub fn validate(&self) -> Result<(), ConstantError> {
        let builtins = OpRegistry::standard(self.angle_mode);
        for symbol in self.constants.keys() {
            if symbol.is_empty() || symbol.chars().any(char::is_whitespace) {
                return Err(ConstantError::InvalidSymbol {
                    symbol: symbol.clone(),
                });
            }
            if builtins.lookup(symbol).is_some_and(|op| op.arity() > 0) {
                return Err(ConstantError::ReservedSymbol {
                    symbol: symbol.clone(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn test_path() -> PathBuf {
        PathBuf::from("test/calc.toml")
    }

    #[test]
    fn parse_empty_config() {
        let config = BrainConfig::from_str("", &test_path()).unwrap();
        assert_eq!(config, BrainConfig::default());
        assert_eq!(config.angle_mode, AngleMode::Degrees);
    }

    #[test]
    fn parse_full_config() {
        let content = r#"
            angle_mode = "radians"

            [constants]
            e = 2.718281828459045
            c = 299792458
        "#;

        let config = BrainConfig::from_str(content, &test_path()).unwrap();
        assert_eq!(config.angle_mode, AngleMode::Radians);
        assert_eq!(config.constants.get("c"), Some(&299_792_458.0));

        let symbols: Vec<String> = config.constant_ops().map(|op| op.to_string()).collect();
        assert_eq!(symbols, vec!["c", "e"]);
    }

    #[test]
    fn constant_may_shadow_constant() {
        let content = "[constants]\n\"π\" = 3.0\n";
        let config = BrainConfig::from_str(content, &test_path()).unwrap();
        assert_eq!(config.constants.get("π"), Some(&3.0));
    }

    #[test]
    fn reject_shadowed_operation() {
        let content = "[constants]\nsin = 1.0\n";
        let err = BrainConfig::from_str(content, &test_path()).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                source: ConstantError::ReservedSymbol { ref symbol },
                ..
            } if symbol == "sin"
        ));
        assert!(err.to_string().contains("test/calc.toml"));
    }

    #[test]
    fn reject_bad_symbol() {
        let content = "[constants]\n\"two words\" = 1.0\n";
        let err = BrainConfig::from_str(content, &test_path()).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                source: ConstantError::InvalidSymbol { .. },
                ..
            }
        ));
    }

    #[test]
    fn reject_unknown_angle_mode() {
        let err = BrainConfig::from_str("angle_mode = \"gradians\"", &test_path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("test/calc.toml"));
    }

    #[test]
    fn reject_unknown_field() {
        let err = BrainConfig::from_str("precision = 4", &test_path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn validate_code_built_config() {
        let mut config = BrainConfig::default();
        config.constants.insert("h".into(), 6.626e-34);
        assert_eq!(config.validate(), Ok(()));

        config.constants.insert("−".into(), 1.0);
        assert_eq!(
            config.validate(),
            Err(ConstantError::ReservedSymbol { symbol: "−".into() })
        );
    }

    #[test]
    fn angle_conversion() {
        assert_eq!(AngleMode::Radians.to_radians(1.25), 1.25);
        assert!((AngleMode::Degrees.to_radians(180.0) - PI).abs() < 1e-15);
    }
}
