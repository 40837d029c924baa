// src/main.rs
use certwatch_authorize::authorize::authorize_certificate;
use certwatch_authorize::cert_parser::X509CertParser;
use certwatch_authorize::cli::Cli;
use certwatch_authorize::config;
use certwatch_authorize::input::read_certificate_bytes;
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Validate arguments
    cli.validate()?;

    // Initialize logging; stderr only, stdout stays empty on success
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let state_dir = match cli.state_dir {
        Some(dir) => dir,
        None => config::default_state_dir()?,
    };
    tracing::debug!("using state directory {}", state_dir.display());

    let cert_bytes = read_certificate_bytes(&cli.cert)?;

    let marker = authorize_certificate(&X509CertParser, &cert_bytes, &state_dir)?;
    tracing::debug!("marker recorded at {}", marker.display());

    Ok(())
}
