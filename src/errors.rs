// src/errors.rs
//! Error taxonomy for the authorize pipeline

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong between raw certificate bytes and a
/// recorded marker file. Each stage surfaces its own variant so the
/// driver can report which stage failed.
#[derive(Debug, Error)]
pub enum AuthorizeError {
    /// A PEM block was present but does not hold a certificate
    #[error("PEM block type is {label:?}, expected CERTIFICATE")]
    InvalidPemLabel { label: String },

    /// More than one PEM block in the input
    #[error("expected a single CERTIFICATE PEM block, found {count}")]
    AmbiguousPem { count: usize },

    /// DER did not parse as a well-formed X.509 certificate
    #[error("error parsing certificate: {detail}")]
    CertificateParse { detail: String },

    /// Hex encoding of the digest is too short for shard derivation.
    /// Cannot happen for a 32-byte digest, but the slice is guarded
    /// rather than allowed to panic.
    #[error("TBS hash hex is too short: {len} characters")]
    FingerprintTooShort { len: usize },

    #[error("error creating directory {}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error creating marker file {}", path.display())]
    CreateMarker {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
