use atbara_core::locale::Locale;
use atbara_shared::DEFAULT_CURRENCY;
use serde::Deserialize;
use std::env;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub app: AppConfig,
    #[serde(default)]
    pub business_rules: BusinessRules,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub default_locale: Locale,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BusinessRules {
    #[serde(default = "default_service_fee")]
    pub service_fee: i32,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default = "default_reference_prefix")]
    pub reference_prefix: String,
    #[serde(default = "default_search_delay_ms")]
    pub search_delay_ms: u64,
    #[serde(default = "default_price_max")]
    pub default_price_max: i32,
}

/// Upper bound accepted for `business_rules.service_fee`
pub const MAX_SERVICE_FEE: i32 = 10_000;

fn default_service_fee() -> i32 { 25 }
fn default_currency() -> String { DEFAULT_CURRENCY.to_string() }
fn default_reference_prefix() -> String { "SD-2024-".to_string() }
fn default_search_delay_ms() -> u64 { 1000 }
fn default_price_max() -> i32 { 500 }

impl Default for BusinessRules {
    fn default() -> Self {
        Self {
            service_fee: default_service_fee(),
            currency: default_currency(),
            reference_prefix: default_reference_prefix(),
            search_delay_ms: default_search_delay_ms(),
            default_price_max: default_price_max(),
        }
    }
}

impl BusinessRules {
    pub fn search_delay(&self) -> Duration {
        Duration::from_millis(self.search_delay_ms)
    }

    pub fn validate(&self) -> Result<(), config::ConfigError> {
        if !(0..=MAX_SERVICE_FEE).contains(&self.service_fee) {
            return Err(config::ConfigError::Message(format!(
                "business_rules.service_fee must be between 0 and {}, got {}",
                MAX_SERVICE_FEE, self.service_fee
            )));
        }
        if self.default_price_max < 0 {
            return Err(config::ConfigError::Message(format!(
                "business_rules.default_price_max must not be negative, got {}",
                self.default_price_max
            )));
        }
        Ok(())
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Every file is optional, the serde defaults cover a bare checkout
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // e.g. `ATBARA__BUSINESS_RULES__SERVICE_FEE=30`
            .add_source(config::Environment::with_prefix("ATBARA").separator("__"))
            .build()?;

        let cfg: Self = s.try_deserialize()?;
        cfg.business_rules.validate()?;
        tracing::debug!(run_mode = %run_mode, locale = cfg.app.default_locale.code(), "Configuration loaded");
        Ok(cfg)
    }

    /// Parse a TOML document on top of the defaults
    pub fn from_toml(source: &str) -> Result<Self, config::ConfigError> {
        let cfg: Self = config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?
            .try_deserialize()?;
        cfg.business_rules.validate()?;
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let cfg = Config::from_toml("").unwrap();
        assert_eq!(cfg.app.default_locale, Locale::Arabic);
        assert_eq!(cfg.business_rules.service_fee, 25);
        assert_eq!(cfg.business_rules.currency, "SDG");
        assert_eq!(cfg.business_rules.reference_prefix, "SD-2024-");
        assert_eq!(cfg.business_rules.search_delay(), Duration::from_millis(1000));
        assert_eq!(cfg.business_rules.default_price_max, 500);
    }

    #[test]
    fn test_partial_override() {
        let cfg = Config::from_toml(
            r#"
            [app]
            default_locale = "en"

            [business_rules]
            service_fee = 30
            search_delay_ms = 0
            "#,
        )
        .unwrap();
        assert_eq!(cfg.app.default_locale, Locale::English);
        assert_eq!(cfg.business_rules.service_fee, 30);
        assert_eq!(cfg.business_rules.search_delay(), Duration::ZERO);
        assert_eq!(cfg.business_rules.currency, "SDG");
    }

    #[test]
    fn test_bad_locale_rejected() {
        assert!(Config::from_toml("[app]\ndefault_locale = \"fr\"").is_err());
    }

    #[test]
    fn test_service_fee_out_of_range_rejected() {
        let err = Config::from_toml("[business_rules]\nservice_fee = -200").unwrap_err();
        assert!(err.to_string().contains("service_fee"));
        assert!(Config::from_toml("[business_rules]\nservice_fee = 2147483647").is_err());
        assert!(Config::from_toml("[business_rules]\nservice_fee = 0").is_ok());
    }

    #[test]
    fn test_negative_price_ceiling_rejected() {
        assert!(Config::from_toml("[business_rules]\ndefault_price_max = -1").is_err());
    }

    #[test]
    fn test_shipped_default_file_parses() {
        let cfg = Config::from_toml(include_str!("../../config/default.toml")).unwrap();
        assert_eq!(cfg.business_rules.service_fee, 25);
    }
}
