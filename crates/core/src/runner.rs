//! Sequential scenario runner with scoped sessions and a failure screenshot hook.

use crate::browser::{Browser, Launcher};
use crate::config::SuiteConfig;
use crate::error::{HarnessError, Result};
use crate::scenario::Scenario;
use crate::session::{self, Session};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::Instrument;

/// Why a scenario failed, in report form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Failure {
    pub kind: &'static str,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ScenarioOutcome {
    pub scenario: Scenario,
    pub passed: bool,
    pub elapsed_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<Failure>,
    /// Written only when the scenario failed and the capture succeeded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screenshot: Option<PathBuf>,
    #[serde(skip)]
    pub error: Option<HarnessError>,
}

#[derive(Debug, Default, Serialize)]
pub struct SuiteReport {
    pub passed: usize,
    pub failed: usize,
    pub outcomes: Vec<ScenarioOutcome>,
}

impl SuiteReport {
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    pub fn push(&mut self, outcome: ScenarioOutcome) {
        if outcome.passed {
            self.passed += 1;
        } else {
            self.failed += 1;
        }
        self.outcomes.push(outcome);
    }

    /// One line per scenario plus a summary line.
    pub fn to_compact_string(&self) -> String {
        let mut out = String::new();
        for outcome in &self.outcomes {
            let status = if outcome.passed { "ok" } else { "FAILED" };
            out.push_str(&format!(
                "{} ... {} ({}ms)",
                outcome.scenario, status, outcome.elapsed_ms
            ));
            if let Some(failure) = &outcome.failure {
                out.push_str(&format!("\n    {}: {}", failure.kind, failure.message));
            }
            if let Some(path) = &outcome.screenshot {
                out.push_str(&format!("\n    screenshot: {}", path.display()));
            }
            out.push('\n');
        }
        out.push_str(&format!(
            "result: {}. {} passed; {} failed",
            if self.all_passed() { "ok" } else { "FAILED" },
            self.passed,
            self.failed
        ));
        out
    }
}

pub struct Runner<L: Launcher> {
    launcher: L,
    config: SuiteConfig,
}

impl<L: Launcher> Runner<L> {
    pub fn new(launcher: L, config: SuiteConfig) -> Self {
        Self { launcher, config }
    }

    /// Run scenarios one after another. A failure never stops the suite.
    pub async fn run_all(&self, scenarios: &[Scenario]) -> SuiteReport {
        let mut report = SuiteReport::default();
        for scenario in scenarios {
            report.push(self.run(*scenario).await);
        }
        tracing::info!(passed = report.passed, failed = report.failed, "suite finished");
        report
    }

    /// Acquire a fresh session, run the scenario, screenshot on failure, and
    /// release the session on every path.
    pub async fn run(&self, scenario: Scenario) -> ScenarioOutcome {
        let span = tracing::info_span!("scenario", name = scenario.name());
        async move {
            let started = Instant::now();
            tracing::info!(description = scenario.description(), "scenario started");

            let (result, screenshot) = match session::acquire(&self.launcher, &self.config).await {
                Ok(mut session) => {
                    let (result, screenshot) = self.run_scoped(scenario, &mut session).await;
                    if let Err(e) = session.release().await {
                        tracing::warn!(error = %e, "failed to release browser session");
                    }
                    (result, screenshot)
                }
                Err(e) => (Err(e), None),
            };

            let elapsed_ms = started.elapsed().as_millis() as u64;
            match &result {
                Ok(()) => tracing::info!(elapsed_ms, "scenario passed"),
                Err(e) => tracing::error!(elapsed_ms, error = %e, "scenario failed"),
            }

            let error = result.err();
            ScenarioOutcome {
                scenario,
                passed: error.is_none(),
                elapsed_ms,
                failure: error.as_ref().map(|e| Failure {
                    kind: e.kind(),
                    message: e.to_string(),
                }),
                screenshot,
                error,
            }
        }
        .instrument(span)
        .await
    }

    async fn run_scoped(
        &self,
        scenario: Scenario,
        session: &mut Session<L::Browser>,
    ) -> (Result<()>, Option<PathBuf>) {
        match scenario.run(session).await {
            Ok(()) => (Ok(()), None),
            Err(e) => {
                let path = self.config.screenshot_dir.join(scenario.screenshot_file());
                let screenshot = capture_on_failure(session.browser(), &path).await;
                (Err(e), screenshot)
            }
        }
    }
}

/// Best-effort diagnostic capture. A failed capture is logged and never
/// replaces the scenario's own error.
pub async fn capture_on_failure<B: Browser + ?Sized>(
    browser: &mut B,
    path: &Path,
) -> Option<PathBuf> {
    match save_screenshot(browser, path).await {
        Ok(()) => {
            tracing::info!(path = %path.display(), "saved failure screenshot");
            Some(path.to_path_buf())
        }
        Err(e) => {
            tracing::warn!(error = %e, "could not capture failure screenshot");
            None
        }
    }
}

async fn save_screenshot<B: Browser + ?Sized>(browser: &mut B, path: &Path) -> Result<()> {
    let png = browser.screenshot().await.map_err(|e| HarnessError::Screenshot {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| HarnessError::Screenshot {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
    }
    tokio::fs::write(path, png)
        .await
        .map_err(|e| HarnessError::Screenshot {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
}
