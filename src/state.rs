// src/state.rs
//! Sharded marker-file persistence shared with the certwatch monitor

use crate::errors::AuthorizeError;
use crate::fingerprint::TbsFingerprint;
use std::fs::{self, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Records "already notified" markers in the monitor's state directory.
///
/// Layout, byte-for-byte what the monitor scans:
/// `<state_dir>/certs/<first 2 hex chars>/.<64 hex chars>.notified`
///
/// The marker's existence is the signal; its content stays empty. This
/// store never deletes or rewrites a marker.
pub struct MarkerStore {
    state_dir: PathBuf,
}

/// Shard subdirectory name: the first two hex characters.
/// Guarded instead of sliced blind, so a malformed digest surfaces as
/// an error rather than a panic.
fn shard_prefix(hex: &str) -> Result<&str, AuthorizeError> {
    if hex.len() < 2 {
        return Err(AuthorizeError::FingerprintTooShort { len: hex.len() });
    }
    Ok(&hex[0..2])
}

impl MarkerStore {
    pub fn new(state_dir: impl Into<PathBuf>) -> Self {
        Self {
            state_dir: state_dir.into(),
        }
    }

    pub fn state_dir(&self) -> &Path {
        &self.state_dir
    }

    fn paths(&self, fingerprint: &TbsFingerprint) -> Result<(PathBuf, PathBuf), AuthorizeError> {
        let hex = fingerprint.to_hex();
        let shard_dir = self.state_dir.join("certs").join(shard_prefix(&hex)?);
        let marker = shard_dir.join(format!(".{hex}.notified"));
        Ok((shard_dir, marker))
    }

    /// Derive the marker path for a fingerprint without touching disk
    pub fn marker_path(&self, fingerprint: &TbsFingerprint) -> Result<PathBuf, AuthorizeError> {
        Ok(self.paths(fingerprint)?.1)
    }

    /// Record the marker for a fingerprint, if it is not already present.
    ///
    /// Safe to call repeatedly and from concurrent processes: an
    /// existing marker, whether found up front or created by a racing
    /// process between the check and the create, is a success.
    pub fn ensure_marker(&self, fingerprint: &TbsFingerprint) -> Result<PathBuf, AuthorizeError> {
        let (shard_dir, path) = self.paths(fingerprint)?;

        // Presence check that does not follow symlinks
        if fs::symlink_metadata(&path).is_ok() {
            debug!("marker already present: {}", path.display());
            return Ok(path);
        }

        fs::create_dir_all(&shard_dir).map_err(|source| AuthorizeError::CreateDir {
            path: shard_dir.clone(),
            source,
        })?;

        // Exclusive create; losing the race to another process is fine
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(_) => debug!("marker created: {}", path.display()),
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                debug!("marker created concurrently: {}", path.display());
            }
            Err(source) => return Err(AuthorizeError::CreateMarker { path, source }),
        }

        Ok(path)
    }
}
