//! Atomic file writes
//!
//! The backing document is rewritten in full on every mutation, so a crash
//! mid-write must never leave a reader looking at a truncated file. Writes go
//! to a `.tmp` sibling, get flushed with `sync_all()`, and are renamed over
//! the destination. The destination is therefore always either the old
//! version or the new one.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;

/// Atomically replace `path` with `content`
///
/// Creates the parent directory when missing, writes a `.tmp` sibling,
/// syncs it to disk and renames it into place.
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &str) -> io::Result<()> {
    let path = path.as_ref();
    let temp_path = path.with_extension("tmp");

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut file = File::create(&temp_path)?;
    file.write_all(content.as_bytes())?;
    file.sync_all()?;

    fs::rename(&temp_path, path)?;

    Ok(())
}

/// Remove `.tmp` leftovers from interrupted writes
///
/// Called once at startup on the data directory; returns how many files were
/// removed.
pub fn cleanup_temp_files<P: AsRef<Path>>(dir: P) -> io::Result<usize> {
    let dir = dir.as_ref();
    let mut cleaned = 0;

    if !dir.exists() {
        return Ok(0);
    }

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.extension().map(|e| e == "tmp").unwrap_or(false) {
            fs::remove_file(&path)?;
            cleaned += 1;
        }
    }

    Ok(cleaned)
}
