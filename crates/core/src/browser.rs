//! The seam between the harness and a browser automation backend.
//!
//! Every element is addressed by its DOM id. Implementations report a missing
//! element as [`HarnessError::ElementNotFound`] and any other protocol
//! failure as [`HarnessError::Browser`].

use crate::config::SuiteConfig;
use crate::error::Result;
use async_trait::async_trait;

#[cfg(doc)]
use crate::error::HarnessError;

#[async_trait]
pub trait Browser: Send {
    async fn goto(&mut self, url: &str) -> Result<()>;

    /// Clear the current value of a text input.
    async fn clear(&mut self, id: &str) -> Result<()>;

    /// Type text into an element, appending to its current value.
    async fn send_keys(&mut self, id: &str, text: &str) -> Result<()>;

    async fn click(&mut self, id: &str) -> Result<()>;

    async fn is_displayed(&mut self, id: &str) -> Result<bool>;

    /// Rendered text of an element.
    async fn text(&mut self, id: &str) -> Result<String>;

    /// Content attribute, `None` if absent.
    async fn attribute(&mut self, id: &str, name: &str) -> Result<Option<String>>;

    /// Live DOM property, e.g. the current `value` of an input.
    async fn property(&mut self, id: &str, name: &str) -> Result<Option<String>>;

    /// Selection state of a checkbox or radio.
    async fn is_selected(&mut self, id: &str) -> Result<bool>;

    /// PNG screenshot of the current viewport.
    async fn screenshot(&mut self) -> Result<Vec<u8>>;

    /// End the browser session. Called exactly once per session.
    async fn close(&mut self) -> Result<()>;
}

/// Starts a fresh browser for each scenario.
#[async_trait]
pub trait Launcher: Send + Sync {
    type Browser: Browser;

    async fn launch(&self, config: &SuiteConfig) -> Result<Self::Browser>;
}
