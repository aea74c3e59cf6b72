//! Error taxonomy for the harness.

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HarnessError {
    /// No element with the given id exists on the page.
    #[error("element not found: #{id}")]
    ElementNotFound { id: String },

    /// An element did not become visible before the wait expired.
    #[error("timed out after {}ms waiting for #{id} to become visible", timeout.as_millis())]
    WaitTimeout { id: String, timeout: Duration },

    /// Observed page state diverged from what the scenario expects.
    #[error("{check}: expected {expected:?}, got {actual:?}")]
    AssertionMismatch {
        check: String,
        expected: String,
        actual: String,
    },

    #[error("failed to start browser session: {0}")]
    Launch(String),

    #[error("browser command failed: {0}")]
    Browser(String),

    #[error("failed to save screenshot to {}: {reason}", path.display())]
    Screenshot { path: PathBuf, reason: String },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("failed to load page: {0}")]
    Fetch(String),
}

impl HarnessError {
    pub fn mismatch(
        check: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        HarnessError::AssertionMismatch {
            check: check.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn not_found(id: &str) -> Self {
        HarnessError::ElementNotFound { id: id.to_string() }
    }

    /// Short machine-readable kind, used in suite reports.
    pub fn kind(&self) -> &'static str {
        match self {
            HarnessError::ElementNotFound { .. } => "element_not_found",
            HarnessError::WaitTimeout { .. } => "wait_timeout",
            HarnessError::AssertionMismatch { .. } => "assertion_mismatch",
            HarnessError::Launch(_) => "launch",
            HarnessError::Browser(_) => "browser",
            HarnessError::Screenshot { .. } => "screenshot",
            HarnessError::Config(_) => "config",
            HarnessError::Fetch(_) => "fetch",
        }
    }
}

pub type Result<T, E = HarnessError> = std::result::Result<T, E>;
