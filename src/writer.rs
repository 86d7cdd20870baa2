//! Atomic publish of the destination file
//!
//! Uses the write-to-temp-then-rename pattern so the destination is
//! never observed partially written.

use std::fs;
use std::path::Path;

use crate::error::MigrateResult;

/// Write `content` to `tmp`, then rename `tmp` onto `dest`
///
/// Any failure before the rename leaves the destination exactly as it
/// was; the temp file may be left behind as litter. After a successful
/// rename the temp path is removed if anything still sits there, and
/// that cleanup never fails the run.
pub fn atomic_publish(dest: &Path, tmp: &Path, content: &[u8]) -> MigrateResult<()> {
    fs::write(tmp, content)?;
    fs::rename(tmp, dest)?;
    let _ = fs::remove_file(tmp);
    Ok(())
}
