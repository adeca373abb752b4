//! Demo settings, loaded from an optional JSON file.
//!
//! ```json
//! { "precision": 3, "scalar": 0.5, "read_stdin": true }
//! ```
//!
//! Every field is optional; missing ones take the defaults below.

use std::fs;
use std::path::Path;

use complex_core::{ComplexError, ComplexResult};
use serde::{Deserialize, Serialize};

/// Environment variable consulted when no path is given on the command line
pub const CONFIG_ENV: &str = "COMPLEX_DEMO_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Fixed number of decimals when printing; shortest form when `None`
    pub precision: Option<usize>,
    /// Real scalar used in the mixed complex/scalar examples
    pub scalar: f64,
    /// Also read `<re> <im> <suffix>` triples from stdin and print them
    pub read_stdin: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig {
            precision: None,
            scalar: 2.0,
            read_stdin: false,
        }
    }
}

impl DemoConfig {
    /// Parse a config from JSON text.
    pub fn from_json(text: &str) -> ComplexResult<Self> {
        serde_json::from_str(text).map_err(|e| ComplexError::config(format!("invalid JSON: {}", e)))
    }

    /// Load a config file.
    pub fn load(path: &Path) -> ComplexResult<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| ComplexError::io(format!("open {}", path.display()), e.to_string()))?;
        Self::from_json(&contents)
    }

    /// Resolve the config from an explicit path, then `COMPLEX_DEMO_CONFIG`,
    /// falling back to defaults.
    pub fn resolve(arg: Option<&str>) -> ComplexResult<Self> {
        let from_env = std::env::var(CONFIG_ENV).ok();
        match arg.or(from_env.as_deref()) {
            Some(path) => {
                log::info!("loading config from {}", path);
                Self::load(Path::new(path))
            }
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = DemoConfig::from_json(r#"{ "precision": 2 }"#).unwrap();
        assert_eq!(config.precision, Some(2));
        assert_eq!(config.scalar, 2.0);
        assert!(!config.read_stdin);
    }

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(DemoConfig::from_json("{}").unwrap(), DemoConfig::default());
    }

    #[test]
    fn test_invalid_json() {
        let err = DemoConfig::from_json("{ precision: }").unwrap_err();
        assert_eq!(err.error_code(), "CONFIG_ERROR");
    }

    #[test]
    fn test_missing_file() {
        let err = DemoConfig::load(Path::new("/nonexistent/complex-demo.json")).unwrap_err();
        assert_eq!(err.error_code(), "IO_ERROR");
    }
}
