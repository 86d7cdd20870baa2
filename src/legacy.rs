//! Legacy settings source
//!
//! The migrator never loads settings directly: it goes through
//! [`LegacySource`], whose single capability is "attempt to load the
//! legacy settings, or report that none are available". The production
//! implementation reads the legacy Python settings file.

use std::fs;
use std::path::PathBuf;

use crate::parser::parse_settings;

/// Raw legacy settings record
///
/// Every field is optional: a loadable source may still be missing
/// individual values, and the two conditions are handled differently
/// (unloadable source vs missing required field).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LegacySettings {
    pub scrypt_id_pepper: Option<String>,
    pub scrypt_gpg_pepper: Option<String>,
    pub default_locale: Option<String>,
    pub supported_locales: Option<Vec<String>>,
    pub source_interface_secret_key: Option<String>,
    pub journalist_interface_secret_key: Option<String>,
}

/// Capability to load legacy settings
pub trait LegacySource {
    /// Attempt to load the legacy settings
    ///
    /// `None` means the source is not loadable at all (file missing or
    /// unreadable), as opposed to a loadable source with missing fields.
    fn load(&self) -> Option<LegacySettings>;
}

/// In-memory source, for embedding and tests
impl LegacySource for LegacySettings {
    fn load(&self) -> Option<LegacySettings> {
        Some(self.clone())
    }
}

/// Legacy source backed by the Python settings file
#[derive(Debug, Clone)]
pub struct PyConfigSource {
    path: PathBuf,
}

impl PyConfigSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl LegacySource for PyConfigSource {
    fn load(&self) -> Option<LegacySettings> {
        let content = fs::read_to_string(&self.path).ok()?;
        let parsed = parse_settings(&content);
        Some(LegacySettings {
            scrypt_id_pepper: parsed.string("SCRYPT_ID_PEPPER").map(str::to_string),
            scrypt_gpg_pepper: parsed.string("SCRYPT_GPG_PEPPER").map(str::to_string),
            default_locale: parsed.string("DEFAULT_LOCALE").map(str::to_string),
            supported_locales: parsed.list("SUPPORTED_LOCALES").map(<[String]>::to_vec),
            source_interface_secret_key: parsed
                .section_string("SourceInterfaceFlaskConfig", "SECRET_KEY")
                .map(str::to_string),
            journalist_interface_secret_key: parsed
                .section_string("JournalistInterfaceFlaskConfig", "SECRET_KEY")
                .map(str::to_string),
        })
    }
}
