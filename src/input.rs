// src/input.rs
use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read};

/// Read certificate bytes from a file, or from stdin when the path is
/// `-`. Stdin is consumed to EOF in one blocking read.
pub fn read_certificate_bytes(path: &str) -> Result<Vec<u8>> {
    if path == "-" {
        let mut buf = Vec::new();
        io::stdin()
            .read_to_end(&mut buf)
            .context("error reading certificate from stdin")?;
        Ok(buf)
    } else {
        fs::read(path).with_context(|| format!("error reading certificate from {path}"))
    }
}
