//! Plain HTTP loading of the page under test, without a browser.
//! Gated behind the "fetch" feature flag.

use crate::error::{HarnessError, Result};
use reqwest::Client;
use url::Url;

/// Configuration for page fetching.
pub struct FetchConfig {
    /// User-Agent header.
    pub user_agent: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// Responses larger than this are rejected.
    pub max_response_bytes: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: concat!("formprobe/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout_secs: 30,
            max_response_bytes: 2 * 1024 * 1024,
        }
    }
}

/// Fetch a URL and return its body as text.
pub async fn fetch_html(url: &str, config: &FetchConfig) -> Result<String> {
    let parsed_url = Url::parse(url)
        .map_err(|e| HarnessError::Fetch(format!("invalid URL {}: {}", url, e)))?;
    if !matches!(parsed_url.scheme(), "http" | "https") {
        return Err(HarnessError::Fetch(format!("unsupported scheme: {}", parsed_url.scheme())));
    }

    let client = Client::builder()
        .user_agent(&config.user_agent)
        .timeout(std::time::Duration::from_secs(config.timeout_secs))
        .build()
        .map_err(|e| HarnessError::Fetch(e.to_string()))?;

    let response = client
        .get(parsed_url.as_str())
        .send()
        .await
        .map_err(|e| HarnessError::Fetch(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(HarnessError::Fetch(format!("HTTP {} from {}", status.as_u16(), url)));
    }
    if let Some(len) = response.content_length() {
        if len as usize > config.max_response_bytes {
            return Err(HarnessError::Fetch(format!(
                "response too large: {} bytes (limit {})",
                len, config.max_response_bytes
            )));
        }
    }

    let body = response
        .bytes()
        .await
        .map_err(|e| HarnessError::Fetch(e.to_string()))?;
    if body.len() > config.max_response_bytes {
        return Err(HarnessError::Fetch(format!(
            "response too large: {} bytes (limit {})",
            body.len(),
            config.max_response_bytes
        )));
    }
    Ok(String::from_utf8_lossy(&body).into_owned())
}
