//! Explicit waits: poll page state until a condition holds or time runs out.

use crate::browser::Browser;
use crate::config::WaitPolicy;
use crate::error::{HarnessError, Result};
use std::time::Duration;
use tokio::time::{sleep, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wait {
    pub timeout: Duration,
    pub poll: Duration,
}

impl Wait {
    pub fn new(timeout: Duration, poll: Duration) -> Self {
        Self { timeout, poll }
    }

    /// Block until `#id` is present and displayed.
    ///
    /// A missing element counts as "not visible yet", so this also covers
    /// elements the page inserts after the trigger.
    pub async fn until_visible<B: Browser + ?Sized>(
        &self,
        browser: &mut B,
        id: &str,
    ) -> Result<()> {
        let started = Instant::now();
        let deadline = started + self.timeout;
        loop {
            match browser.is_displayed(id).await {
                Ok(true) => {
                    let elapsed_ms = started.elapsed().as_millis() as u64;
                    tracing::debug!(id, elapsed_ms, "element visible");
                    return Ok(());
                }
                Ok(false) | Err(HarnessError::ElementNotFound { .. }) => {}
                Err(e) => return Err(e),
            }
            if Instant::now() >= deadline {
                let timeout_ms = self.timeout.as_millis() as u64;
                tracing::debug!(id, timeout_ms, "wait timed out");
                return Err(HarnessError::WaitTimeout {
                    id: id.to_string(),
                    timeout: self.timeout,
                });
            }
            sleep(self.poll).await;
        }
    }
}

impl From<&WaitPolicy> for Wait {
    fn from(policy: &WaitPolicy) -> Self {
        Self::new(policy.timeout(), policy.poll_interval())
    }
}

impl Default for Wait {
    fn default() -> Self {
        Self::from(&WaitPolicy::default())
    }
}
