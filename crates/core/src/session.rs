//! Per-scenario browser session: acquire, use, release.

use crate::browser::{Browser, Launcher};
use crate::config::SuiteConfig;
use crate::error::Result;
use crate::wait::Wait;

/// One browser instance plus its explicit-wait policy.
///
/// Sessions are never reused: every scenario acquires its own and releases
/// it when done, whatever the outcome.
pub struct Session<B: Browser> {
    browser: B,
    wait: Wait,
}

impl<B: Browser> Session<B> {
    pub fn new(browser: B, wait: Wait) -> Self {
        Self { browser, wait }
    }

    pub fn browser(&mut self) -> &mut B {
        &mut self.browser
    }

    /// The single wait-point of a scenario.
    pub async fn wait_visible(&mut self, id: &str) -> Result<()> {
        let wait = self.wait;
        wait.until_visible(&mut self.browser, id).await
    }

    pub async fn click(&mut self, id: &str) -> Result<()> {
        tracing::debug!(id, "click");
        self.browser.click(id).await
    }

    pub async fn text(&mut self, id: &str) -> Result<String> {
        self.browser.text(id).await
    }

    pub async fn is_displayed(&mut self, id: &str) -> Result<bool> {
        self.browser.is_displayed(id).await
    }

    pub async fn attribute(&mut self, id: &str, name: &str) -> Result<Option<String>> {
        self.browser.attribute(id, name).await
    }

    pub async fn is_selected(&mut self, id: &str) -> Result<bool> {
        self.browser.is_selected(id).await
    }

    /// Close the browser. Consumes the session so it cannot be used again.
    pub async fn release(mut self) -> Result<()> {
        tracing::debug!("releasing browser session");
        self.browser.close().await
    }
}

/// Launch a browser with the suite's profile and open the target page.
///
/// No retries: a launch failure is fatal to the calling scenario. If the
/// browser starts but the page fails to load, the browser is closed before
/// the error is returned.
pub async fn acquire<L: Launcher>(
    launcher: &L,
    config: &SuiteConfig,
) -> Result<Session<L::Browser>> {
    let mut browser = launcher.launch(config).await?;
    tracing::info!(url = %config.target_url, "opening target page");
    if let Err(e) = browser.goto(&config.target_url).await {
        if let Err(close_err) = browser.close().await {
            tracing::warn!(error = %close_err, "failed to close browser after navigation error");
        }
        return Err(e);
    }
    Ok(Session::new(browser, Wait::from(&config.wait)))
}
