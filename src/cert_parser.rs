// src/cert_parser.rs
use crate::errors::AuthorizeError;
use x509_parser::prelude::*;

/// Structural certificate parsing capability.
///
/// The only thing the pipeline needs from a parser is the exact raw
/// byte range of the TBSCertificate element (ASN.1 SEQUENCE, tag and
/// length included). Implementations must not validate signatures,
/// chains, or validity periods. The seam exists so tests can swap in a
/// stub without ASN.1 fixtures.
pub trait CertParser {
    fn extract_tbs(&self, der: &[u8]) -> Result<Vec<u8>, AuthorizeError>;
}

/// Production parser backed by x509-parser
#[derive(Debug, Default, Clone, Copy)]
pub struct X509CertParser;

impl CertParser for X509CertParser {
    fn extract_tbs(&self, der: &[u8]) -> Result<Vec<u8>, AuthorizeError> {
        let (_, cert) = X509Certificate::from_der(der).map_err(|e| {
            AuthorizeError::CertificateParse {
                detail: format!("{:?}", e),
            }
        })?;

        // Raw TBSCertificate span, exactly the bytes the monitor hashes
        Ok(cert.tbs_certificate.as_ref().to_vec())
    }
}
