//! Common test utilities for migrate-config integration tests.
//!
//! This module provides:
//! - `TestEnv`: isolated temp-directory environment that runs the real
//!   binary with redirected legacy/destination paths
//! - Fixtures: reusable legacy settings file contents

#![allow(dead_code)]

pub mod fixtures;

pub use env::*;
pub use fixtures::*;
