//! Shop configuration loading for the `trimtime` binary.
//!
//! The configuration file is only read when `--config` names one; otherwise
//! the stock barbershop defaults apply. Command-line overrides are layered on
//! top, then the result is validated.

use std::path::Path;

use anyhow::Context;

use trimtime_types::config::ShopConfig;

/// Settings given directly on the command line. `None` leaves the file or
/// default value alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub strict_dates: Option<bool>,
    pub allow_returning_customers: Option<bool>,
    pub currency_symbol: Option<String>,
}

impl ConfigOverrides {
    fn apply(&self, config: &mut ShopConfig) {
        if let Some(strict) = self.strict_dates {
            config.strict_dates = strict;
        }
        if let Some(allow) = self.allow_returning_customers {
            config.allow_returning_customers = allow;
        }
        if let Some(symbol) = &self.currency_symbol {
            config.currency_symbol = symbol.clone();
        }
    }
}

/// Read and parse a TOML shop configuration.
///
/// Unlike optional data files, an explicitly named config that is missing or
/// malformed is an error.
pub fn load_shop_config(path: &Path) -> anyhow::Result<ShopConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    let config = toml::from_str::<ShopConfig>(&content)
        .with_context(|| format!("failed to parse config file {}", path.display()))?;
    tracing::debug!("loaded shop configuration from {}", path.display());
    Ok(config)
}

/// Build the effective configuration: file (or defaults), then overrides,
/// then validation.
pub fn resolve_shop_config(
    path: Option<&Path>,
    overrides: &ConfigOverrides,
) -> anyhow::Result<ShopConfig> {
    let mut config = match path {
        Some(path) => load_shop_config(path)?,
        None => ShopConfig::default(),
    };
    overrides.apply(&mut config);
    config.validate().context("invalid shop configuration")?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn resolve_without_file_uses_defaults() {
        let config = resolve_shop_config(None, &ConfigOverrides::default()).unwrap();
        assert_eq!(config, ShopConfig::default());
    }

    #[test]
    fn resolve_reads_file_then_applies_overrides() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("shop.toml");
        std::fs::write(
            &path,
            r#"
currency_symbol = "$"
strict_dates = true
staff = ["Ana"]
"#,
        )
        .unwrap();

        let overrides = ConfigOverrides {
            strict_dates: Some(false),
            allow_returning_customers: Some(true),
            currency_symbol: None,
        };
        let config = resolve_shop_config(Some(&path), &overrides).unwrap();
        assert_eq!(config.currency_symbol, "$");
        assert!(!config.strict_dates);
        assert!(config.allow_returning_customers);
        assert_eq!(config.staff, vec!["Ana"]);
        assert_eq!(config.services.len(), 10);
    }

    #[test]
    fn resolve_missing_file_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let err = resolve_shop_config(
            Some(&tmp.path().join("nope.toml")),
            &ConfigOverrides::default(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("failed to read config file"));
    }

    #[test]
    fn resolve_malformed_file_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("shop.toml");
        std::fs::write(&path, "this is not { valid toml !!!").unwrap();
        let err = resolve_shop_config(Some(&path), &ConfigOverrides::default()).unwrap_err();
        assert!(err.to_string().contains("failed to parse config file"));
    }

    #[test]
    fn resolve_rejects_invalid_reference_data() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("shop.toml");
        std::fs::write(&path, "slots = []\n").unwrap();
        let err = resolve_shop_config(Some(&path), &ConfigOverrides::default()).unwrap_err();
        assert!(err.to_string().contains("invalid shop configuration"));
    }

    #[test]
    fn currency_override_replaces_symbol() {
        let overrides = ConfigOverrides {
            currency_symbol: Some("PHP ".to_string()),
            ..Default::default()
        };
        let config = resolve_shop_config(None, &overrides).unwrap();
        assert_eq!(config.currency_symbol, "PHP ");
    }
}
