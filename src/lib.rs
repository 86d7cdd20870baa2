//! migrate-config - one-shot migration of legacy settings to JSON
//!
//! Reads the legacy Python settings file and publishes its values as
//! `/etc/securedrop/config.json`, using write-to-temp-then-rename so an
//! existing config is never corrupted by a failed run.

pub mod error;
pub mod legacy;
pub mod migrate;
pub mod models;
pub mod parser;
pub mod writer;

// Re-exports for convenience
pub use error::{MigrateError, MigrateResult};
pub use legacy::{LegacySettings, LegacySource, PyConfigSource};
pub use migrate::{Migrator, Outcome, CONFIG_FILE, LEGACY_CONFIG_FILE};
pub use models::{I18nSettings, InterfaceConfig, MigratedConfig};
pub use parser::{parse_settings, ParsedSettings};
pub use writer::atomic_publish;
