//! Registry configuration

use serde::Deserialize;
use session_todos::NameLimits;

/// Settings applied to every session the registry creates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Name length bounds for lists and todos
    pub name_limits: NameLimits,
}

impl RegistryConfig {
    pub fn with_name_limits(name_limits: NameLimits) -> Self {
        Self { name_limits }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_stock_limits() {
        let config: RegistryConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, RegistryConfig::default());
        assert_eq!(config.name_limits, NameLimits::new(1, 100).unwrap());
    }

    #[test]
    fn test_partial_override() {
        let config: RegistryConfig =
            serde_json::from_str(r#"{"name_limits": {"max_len": 20}}"#).unwrap();
        assert_eq!(config.name_limits, NameLimits::new(1, 20).unwrap());
    }
}
