//! The Migrator: a linear, one-shot migration sequence
//!
//! Load the legacy source, branch on the existing destination and the
//! force flag, extract and default fields, assemble the output model,
//! and atomically publish it. No retries, no concurrency, no state
//! beyond this sequence.

use std::ffi::OsString;
use std::path::PathBuf;

use crate::error::{MigrateError, MigrateResult};
use crate::legacy::LegacySource;
use crate::models::MigratedConfig;
use crate::writer::atomic_publish;

/// Fixed destination for the migrated JSON config
pub const CONFIG_FILE: &str = "/etc/securedrop/config.json";

/// Fixed location of the legacy Python settings file
pub const LEGACY_CONFIG_FILE: &str = "/var/www/securedrop/config.py";

/// What a successful run did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The destination file was written
    Migrated,
    /// The destination already existed and no overwrite was requested;
    /// nothing was written
    AlreadyMigrated,
}

/// One-shot migrator from a legacy source to the JSON destination
pub struct Migrator<S> {
    source: S,
    dest: PathBuf,
}

impl<S: LegacySource> Migrator<S> {
    pub fn new(source: S, dest: impl Into<PathBuf>) -> Self {
        Self {
            source,
            dest: dest.into(),
        }
    }

    /// Temp file co-located with the destination: `<dest>.tmp`
    fn tmp_path(&self) -> PathBuf {
        let mut path = OsString::from(self.dest.as_os_str());
        path.push(".tmp");
        PathBuf::from(path)
    }

    /// Run the migration
    ///
    /// Progress goes to stdout. The caller maps the returned result
    /// onto a process exit code; nothing here terminates the process.
    pub fn run(&self, force: bool) -> MigrateResult<Outcome> {
        let legacy = self.source.load();
        match &legacy {
            Some(_) => println!("Python config imported"),
            None => println!("Python config unable to be imported"),
        }

        if self.dest.exists() {
            if force {
                println!(
                    "JSON config already exists, but --force was specified. \
                     Overwriting config."
                );
            } else {
                println!("JSON config already exists. Exiting");
                return Ok(Outcome::AlreadyMigrated);
            }
        } else if legacy.is_none() {
            return Err(MigrateError::SourceUnavailable);
        }

        // Past the branch above the source must be loadable; a forced
        // overwrite with an unloadable source has nothing to write.
        let legacy = legacy.ok_or(MigrateError::SourceUnavailable)?;
        let config = MigratedConfig::from_legacy(&legacy)?;
        let content = serde_json::to_vec(&config)?;
        atomic_publish(&self.dest, &self.tmp_path(), &content)?;

        Ok(Outcome::Migrated)
    }
}
