// src/authorize.rs
//! One-shot pipeline: certificate bytes in, marker path out

use crate::cert_parser::CertParser;
use crate::decoder::decode_certificate;
use crate::errors::AuthorizeError;
use crate::fingerprint::TbsFingerprint;
use crate::state::MarkerStore;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Decode the certificate, fingerprint its TBSCertificate, and record
/// the marker in the monitor's state directory.
///
/// Returns the marker path whether this call created the marker or a
/// previous run already had.
pub fn authorize_certificate(
    parser: &dyn CertParser,
    cert_bytes: &[u8],
    state_dir: &Path,
) -> Result<PathBuf, AuthorizeError> {
    let der = decode_certificate(cert_bytes)?;
    let tbs = parser.extract_tbs(&der)?;
    let fingerprint = TbsFingerprint::of(&tbs);
    debug!("TBS fingerprint: {}", fingerprint);

    MarkerStore::new(state_dir).ensure_marker(&fingerprint)
}
