//! Output data model for the migrated configuration
//!
//! Defines the value objects serialized into config.json:
//! - `I18nSettings`: locale configuration shared by both interfaces
//! - `InterfaceConfig`: per-interface secrets plus shared values
//! - `MigratedConfig`: the root mapping with its two fixed keys

use serde::Serialize;

use crate::error::{MigrateError, MigrateResult};
use crate::legacy::LegacySettings;

/// Locale used when the legacy source does not name one
pub const FALLBACK_LOCALE: &str = "en_US";

/// Locale configuration, identical in both output sections
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct I18nSettings {
    pub default_locale: String,
    pub supported_locales: Vec<String>,
}

/// Configuration for one web interface
///
/// Both instances share the peppers and i18n values, differing only in
/// `secret_key`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterfaceConfig {
    pub secret_key: String,
    pub scrypt_id_pepper: String,
    pub scrypt_gpg_pepper: String,
    pub i18n: I18nSettings,
}

/// Root of the migrated configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MigratedConfig {
    pub source_interface: InterfaceConfig,
    pub journalist_interface: InterfaceConfig,
}

impl MigratedConfig {
    /// Extraction step: build the output model from a loaded legacy
    /// source
    ///
    /// The peppers and both secret keys are hard requirements. The two
    /// locale fields default independently of each other; this is the
    /// only place defaulting policy is applied.
    pub fn from_legacy(legacy: &LegacySettings) -> MigrateResult<Self> {
        let scrypt_id_pepper = require(&legacy.scrypt_id_pepper, "SCRYPT_ID_PEPPER")?;
        let scrypt_gpg_pepper = require(&legacy.scrypt_gpg_pepper, "SCRYPT_GPG_PEPPER")?;
        let source_key = require(
            &legacy.source_interface_secret_key,
            "SourceInterfaceFlaskConfig.SECRET_KEY",
        )?;
        let journalist_key = require(
            &legacy.journalist_interface_secret_key,
            "JournalistInterfaceFlaskConfig.SECRET_KEY",
        )?;

        let i18n = I18nSettings {
            default_locale: legacy
                .default_locale
                .clone()
                .unwrap_or_else(|| FALLBACK_LOCALE.to_string()),
            supported_locales: legacy
                .supported_locales
                .clone()
                .unwrap_or_else(|| vec![FALLBACK_LOCALE.to_string()]),
        };

        Ok(Self {
            source_interface: InterfaceConfig {
                secret_key: source_key,
                scrypt_id_pepper: scrypt_id_pepper.clone(),
                scrypt_gpg_pepper: scrypt_gpg_pepper.clone(),
                i18n: i18n.clone(),
            },
            journalist_interface: InterfaceConfig {
                secret_key: journalist_key,
                scrypt_id_pepper,
                scrypt_gpg_pepper,
                i18n,
            },
        })
    }
}

fn require(value: &Option<String>, field: &'static str) -> MigrateResult<String> {
    value
        .clone()
        .ok_or(MigrateError::MissingField { field })
}
