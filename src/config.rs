// src/config.rs
//! State-directory resolution shared with the certwatch monitor

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use std::process;

const STATE_DIR_ENV: &str = "CERTWATCH_STATE_DIR";

/// True when the service manager launched this process directly.
/// systemd's StateDirectory environment only applies in that case.
fn started_by_service_manager() -> bool {
    env::var("SYSTEMD_EXEC_PID")
        .map(|pid| pid == process::id().to_string())
        .unwrap_or(false)
}

/// Resolve the monitor's state directory.
///
/// Precedence: `CERTWATCH_STATE_DIR`, then systemd's `STATE_DIRECTORY`
/// when running as a unit, then `~/.certwatch`.
pub fn default_state_dir() -> Result<PathBuf> {
    if let Ok(dir) = env::var(STATE_DIR_ENV) {
        if !dir.is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }

    if started_by_service_manager() {
        if let Ok(dir) = env::var("STATE_DIRECTORY") {
            if !dir.is_empty() {
                return Ok(PathBuf::from(dir));
            }
        }
    }

    let home = dirs::home_dir().context("unable to determine home directory")?;
    Ok(home.join(".certwatch"))
}

#[cfg(test)]
mod tests {
    use super::*;

    // Environment is process-global, so the override and the fallback
    // are exercised in one test to avoid racing parallel tests.
    #[test]
    fn test_state_dir_resolution() {
        unsafe { env::set_var(STATE_DIR_ENV, "/custom/state") };
        assert_eq!(
            default_state_dir().unwrap(),
            PathBuf::from("/custom/state")
        );

        // Empty value counts as unset
        unsafe { env::set_var(STATE_DIR_ENV, "") };
        let fallback = default_state_dir().unwrap();
        assert!(fallback.ends_with(".certwatch"));

        unsafe { env::remove_var(STATE_DIR_ENV) };
        let default = default_state_dir().unwrap();
        assert!(default.ends_with(".certwatch"));
    }

    #[test]
    fn test_not_under_service_manager() {
        // SYSTEMD_EXEC_PID is unset (or belongs to another process) in
        // a test run, so the systemd path must not trigger
        assert!(!started_by_service_manager());
    }
}
