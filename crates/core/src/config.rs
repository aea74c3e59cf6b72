//! Suite configuration: target page, WebDriver endpoint, browser profile, waits.

use crate::error::{HarnessError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

pub const DEFAULT_TARGET_URL: &str =
    "https://ksksdiiee.github.io/ci-cd-lab9-autotests/registration.html";
pub const DEFAULT_WEBDRIVER_URL: &str = "http://localhost:9515";

pub const ENV_TARGET_URL: &str = "FORMPROBE_URL";
pub const ENV_WEBDRIVER_URL: &str = "FORMPROBE_WEBDRIVER";
pub const ENV_SCREENSHOT_DIR: &str = "FORMPROBE_SCREENSHOTS";

/// Configuration for a suite run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SuiteConfig {
    /// Page under test, loaded once per session.
    pub target_url: String,
    /// WebDriver server (chromedriver) endpoint.
    pub webdriver_url: String,
    /// Directory failure screenshots are written to.
    pub screenshot_dir: PathBuf,
    pub wait: WaitPolicy,
    pub browser: BrowserProfile,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            target_url: DEFAULT_TARGET_URL.to_string(),
            webdriver_url: DEFAULT_WEBDRIVER_URL.to_string(),
            screenshot_dir: PathBuf::from("."),
            wait: WaitPolicy::default(),
            browser: BrowserProfile::default(),
        }
    }
}

impl SuiteConfig {
    /// Load defaults, then the TOML file (if any), then environment overrides.
    ///
    /// Nothing is validated here: callers layer their own overrides on top
    /// and call [`SuiteConfig::validate`] once the result is final.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_from(path, |key| std::env::var(key).ok())
    }

    /// [`SuiteConfig::load`] with an explicit environment lookup.
    pub fn load_from<F>(path: Option<&Path>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match path {
            Some(path) => {
                let raw = std::fs::read_to_string(path).map_err(|e| {
                    HarnessError::Config(format!("cannot read {}: {}", path.display(), e))
                })?;
                Self::from_toml(&raw)?
            }
            None => Self::default(),
        };
        config.apply_env_from(lookup);
        Ok(config)
    }

    pub fn from_toml(raw: &str) -> Result<Self> {
        toml::from_str(raw).map_err(|e| HarnessError::Config(e.to_string()))
    }

    /// Apply `FORMPROBE_*` overrides using the given variable lookup.
    pub fn apply_env_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_TARGET_URL).filter(|v| !v.is_empty()) {
            self.target_url = url;
        }
        if let Some(url) = lookup(ENV_WEBDRIVER_URL).filter(|v| !v.is_empty()) {
            self.webdriver_url = url;
        }
        if let Some(dir) = lookup(ENV_SCREENSHOT_DIR).filter(|v| !v.is_empty()) {
            self.screenshot_dir = PathBuf::from(dir);
        }
    }

    /// Apply command-line overrides, the last configuration layer.
    pub fn apply_overrides(&mut self, overrides: &Overrides) {
        if let Some(url) = &overrides.target_url {
            self.target_url = url.clone();
        }
        if let Some(url) = &overrides.webdriver_url {
            self.webdriver_url = url.clone();
        }
        if let Some(dir) = &overrides.screenshot_dir {
            self.screenshot_dir = dir.clone();
        }
        if let Some(secs) = overrides.timeout_secs {
            self.wait.timeout_secs = secs;
        }
        if overrides.headed {
            self.browser.headless = false;
        }
    }

    pub fn validate(&self) -> Result<()> {
        Url::parse(&self.target_url)
            .map_err(|e| HarnessError::Config(format!("target_url {:?}: {}", self.target_url, e)))?;
        Url::parse(&self.webdriver_url).map_err(|e| {
            HarnessError::Config(format!("webdriver_url {:?}: {}", self.webdriver_url, e))
        })?;
        if self.wait.timeout_secs == 0 {
            return Err(HarnessError::Config("wait.timeout_secs must be positive".to_string()));
        }
        if self.wait.poll_interval_ms == 0 {
            return Err(HarnessError::Config("wait.poll_interval_ms must be positive".to_string()));
        }
        if self.browser.window_width == 0 || self.browser.window_height == 0 {
            return Err(HarnessError::Config("browser window size must be non-zero".to_string()));
        }
        Ok(())
    }
}

/// Values given on the command line.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub target_url: Option<String>,
    pub webdriver_url: Option<String>,
    pub screenshot_dir: Option<PathBuf>,
    pub timeout_secs: Option<u64>,
    pub headed: bool,
}

/// Explicit-wait policy bound to every session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WaitPolicy {
    pub timeout_secs: u64,
    pub poll_interval_ms: u64,
}

impl Default for WaitPolicy {
    fn default() -> Self {
        Self {
            timeout_secs: 10,
            poll_interval_ms: 500,
        }
    }
}

impl WaitPolicy {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

/// Fixed Chrome launch profile. Defaults are the CI-safe settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowserProfile {
    pub headless: bool,
    pub no_sandbox: bool,
    pub disable_dev_shm_usage: bool,
    pub disable_gpu: bool,
    pub disable_extensions: bool,
    pub window_width: u32,
    pub window_height: u32,
    /// Chrome switches removed from the default command line.
    pub exclude_switches: Vec<String>,
    /// Extra arguments appended after the profile's own.
    pub extra_args: Vec<String>,
}

impl Default for BrowserProfile {
    fn default() -> Self {
        Self {
            headless: true,
            no_sandbox: true,
            disable_dev_shm_usage: true,
            disable_gpu: true,
            disable_extensions: true,
            window_width: 1920,
            window_height: 1080,
            exclude_switches: vec!["enable-logging".to_string()],
            extra_args: Vec::new(),
        }
    }
}

impl BrowserProfile {
    pub fn chrome_args(&self) -> Vec<String> {
        let mut args = Vec::new();
        if self.no_sandbox {
            args.push("--no-sandbox".to_string());
        }
        if self.disable_dev_shm_usage {
            args.push("--disable-dev-shm-usage".to_string());
        }
        if self.disable_gpu {
            args.push("--disable-gpu".to_string());
        }
        if self.disable_extensions {
            args.push("--disable-extensions".to_string());
        }
        if self.headless {
            args.push("--headless".to_string());
        }
        args.push(format!("--window-size={},{}", self.window_width, self.window_height));
        args.extend(self.extra_args.iter().cloned());
        args
    }

    /// W3C capabilities for a new Chrome session.
    pub fn capabilities(&self) -> Map<String, Value> {
        let mut chrome = Map::new();
        chrome.insert("args".to_string(), json!(self.chrome_args()));
        if !self.exclude_switches.is_empty() {
            chrome.insert("excludeSwitches".to_string(), json!(self.exclude_switches));
        }

        let mut caps = Map::new();
        caps.insert("browserName".to_string(), json!("chrome"));
        caps.insert("goog:chromeOptions".to_string(), Value::Object(chrome));
        caps
    }
}
