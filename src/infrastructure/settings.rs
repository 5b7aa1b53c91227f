//! # Storefront Settings
//!
//! Read-only configuration shared by every quote request.
//!
//! Loaded from an optional TOML file plus `SHIP_QUOTE_*` environment
//! variables; every field has a default so a bare process still serves
//! quotes. The default country question is settled here: a storefront may
//! configure one, and when it doesn't the process-wide default
//! ([`CountryCode::DEFAULT`]) applies rather than failing the request.

use crate::domain::value_objects::{CountryCode, Currency, PostalCode};
use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

/// Storefront configuration for the quote engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontSettings {
    /// Destination country when the caller's address has none; `None` falls
    /// back to the process-wide default.
    pub default_country: Option<String>,
    /// Currency code quotes are expressed in.
    pub currency_code: String,
    /// Currency display symbol.
    pub currency_symbol: String,
    /// Minimum accepted postal code length.
    pub min_postal_length: usize,
    /// Per-carrier rate computation timeout in milliseconds.
    pub per_carrier_timeout_ms: u64,
}

impl Default for StorefrontSettings {
    fn default() -> Self {
        Self {
            default_country: None,
            currency_code: "ARS".to_string(),
            currency_symbol: "$".to_string(),
            min_postal_length: PostalCode::MIN_LENGTH,
            per_carrier_timeout_ms: 5000,
        }
    }
}

impl StorefrontSettings {
    /// Loads settings from `ship-quote.toml` (if present) and
    /// `SHIP_QUOTE_*` environment variables, over the defaults.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when a source exists but cannot be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("ship-quote")
    }

    /// Loads settings from a named config file base plus the environment.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when a source exists but cannot be parsed.
    pub fn load_from(file_base: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name(file_base).required(false))
            .add_source(Environment::with_prefix("SHIP_QUOTE"))
            .build()?
            .try_deserialize()
    }

    /// The country written into sandbox addresses.
    ///
    /// A configured but malformed country code falls back to the default as
    /// well; the mistake is logged once at load time by the caller, not per
    /// request.
    #[must_use]
    pub fn country(&self) -> CountryCode {
        self.default_country
            .as_deref()
            .and_then(|raw| CountryCode::new(raw).ok())
            .unwrap_or_else(CountryCode::default_country)
    }

    /// The storefront's quote currency.
    #[must_use]
    pub fn currency(&self) -> Currency {
        Currency::new(&self.currency_code, &self.currency_symbol)
    }
}
