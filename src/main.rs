//! migrate-config CLI - helper for migrating config from Python to JSON
//!
//! Usage: migrate-config [--force]
//!
//! Reads the legacy Python settings file and writes config.json. A run
//! against an already-migrated host is a successful no-op unless
//! --force is given.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use migrate_config::migrate::{Migrator, CONFIG_FILE, LEGACY_CONFIG_FILE};
use migrate_config::PyConfigSource;

/// Helper for migrating config from Python to JSON
#[derive(Parser, Debug)]
#[command(name = "migrate-config")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Overwrite the existing config.json
    #[arg(long)]
    force: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let legacy_path = path_from_env("MIGRATE_CONFIG_LEGACY", LEGACY_CONFIG_FILE);
    let dest_path = path_from_env("MIGRATE_CONFIG_DEST", CONFIG_FILE);

    let migrator = Migrator::new(PyConfigSource::new(legacy_path), dest_path);
    match migrator.run(cli.force) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

/// Fixed paths can be redirected through the environment, which keeps
/// integration tests off the real /etc and /var/www locations
fn path_from_env(var: &str, default: &str) -> PathBuf {
    std::env::var_os(var)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(default))
}
