//! WebDriver backend over fantoccini.
//! Gated behind the "webdriver" feature flag.

use crate::browser::{Browser, Launcher};
use crate::config::SuiteConfig;
use crate::error::{HarnessError, Result};
use async_trait::async_trait;
use fantoccini::elements::Element;
use fantoccini::error::CmdError;
use fantoccini::{Client, ClientBuilder, Locator};

/// Connects to a running chromedriver and opens a session with the suite's
/// browser profile.
#[derive(Debug, Default, Clone, Copy)]
pub struct ChromeLauncher;

#[async_trait]
impl Launcher for ChromeLauncher {
    type Browser = WebDriverBrowser;

    async fn launch(&self, config: &SuiteConfig) -> Result<WebDriverBrowser> {
        let client = ClientBuilder::native()
            .capabilities(config.browser.capabilities())
            .connect(&config.webdriver_url)
            .await
            .map_err(|e| HarnessError::Launch(format!("{}: {}", config.webdriver_url, e)))?;
        Ok(WebDriverBrowser { client })
    }
}

pub struct WebDriverBrowser {
    client: Client,
}

impl WebDriverBrowser {
    async fn find(&self, id: &str) -> Result<Element> {
        self.client
            .find(Locator::Id(id))
            .await
            .map_err(|e| element_error(id, e))
    }
}

fn element_error(id: &str, err: CmdError) -> HarnessError {
    if err.is_no_such_element() {
        HarnessError::not_found(id)
    } else {
        HarnessError::Browser(format!("#{}: {}", id, err))
    }
}

#[async_trait]
impl Browser for WebDriverBrowser {
    async fn goto(&mut self, url: &str) -> Result<()> {
        self.client
            .goto(url)
            .await
            .map_err(|e| HarnessError::Browser(format!("navigate to {}: {}", url, e)))
    }

    async fn clear(&mut self, id: &str) -> Result<()> {
        let el = self.find(id).await?;
        el.clear().await.map_err(|e| element_error(id, e))
    }

    async fn send_keys(&mut self, id: &str, text: &str) -> Result<()> {
        let el = self.find(id).await?;
        el.send_keys(text).await.map_err(|e| element_error(id, e))
    }

    async fn click(&mut self, id: &str) -> Result<()> {
        let el = self.find(id).await?;
        el.click().await.map_err(|e| element_error(id, e))
    }

    async fn is_displayed(&mut self, id: &str) -> Result<bool> {
        let el = self.find(id).await?;
        el.is_displayed().await.map_err(|e| element_error(id, e))
    }

    async fn text(&mut self, id: &str) -> Result<String> {
        let el = self.find(id).await?;
        el.text().await.map_err(|e| element_error(id, e))
    }

    async fn attribute(&mut self, id: &str, name: &str) -> Result<Option<String>> {
        let el = self.find(id).await?;
        el.attr(name).await.map_err(|e| element_error(id, e))
    }

    async fn property(&mut self, id: &str, name: &str) -> Result<Option<String>> {
        let el = self.find(id).await?;
        el.prop(name).await.map_err(|e| element_error(id, e))
    }

    async fn is_selected(&mut self, id: &str) -> Result<bool> {
        let el = self.find(id).await?;
        el.is_selected().await.map_err(|e| element_error(id, e))
    }

    async fn screenshot(&mut self) -> Result<Vec<u8>> {
        self.client
            .screenshot()
            .await
            .map_err(|e| HarnessError::Browser(format!("screenshot: {}", e)))
    }

    async fn close(&mut self) -> Result<()> {
        self.client
            .clone()
            .close()
            .await
            .map_err(|e| HarnessError::Browser(format!("close session: {}", e)))
    }
}
