// src/cli.rs
use clap::Parser;
use std::path::PathBuf;

/// certwatch-authorize: pre-authorize a certificate for certwatch
///
/// Computes the SHA-256 of the certificate's TBSCertificate and creates
/// a .notified marker in the monitor's state directory, so certwatch
/// never alerts on this certificate or on the precertificate that
/// shares its signed payload.
#[derive(Parser, Debug, Clone)]
#[command(name = "certwatch-authorize")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a PEM or DER encoded certificate (use - to read from stdin)
    #[arg(short = 'c', long = "cert")]
    pub cert: String,

    /// State directory used by the certwatch monitor
    #[arg(long = "state-dir")]
    pub state_dir: Option<PathBuf>,

    /// Verbose logging (set log level to debug)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Quiet logging (set log level to error)
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

impl Cli {
    /// Validate flag combinations and return errors for invalid usage
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.verbose && self.quiet {
            anyhow::bail!("Cannot specify both --verbose and --quiet");
        }

        Ok(())
    }

    /// Determine log level based on verbose/quiet flags.
    /// Default is warn: a successful run stays silent.
    pub fn log_level(&self) -> &str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "warn"
        }
    }
}
