//! In-memory stand-in for the registration page, driven through the
//! `Browser` trait so scenarios can run without a WebDriver server.

#![allow(dead_code)]

use async_trait::async_trait;
use formprobe_core::browser::{Browser, Launcher};
use formprobe_core::config::SuiteConfig;
use formprobe_core::error::{HarnessError, Result};
use formprobe_core::page;
use formprobe_core::session::Session;
use formprobe_core::wait::Wait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const PNG_MAGIC: &[u8] = b"\x89PNG\r\n\x1a\n";

/// Knobs for making the page misbehave.
#[derive(Debug, Clone, Default)]
pub struct Behavior {
    /// Submitting valid data never reveals the welcome view.
    pub never_welcome: bool,
    /// Replace every validation message with this text.
    pub message_override: Option<String>,
    /// Class put on the message element instead of "message error".
    pub message_class: Option<String>,
    /// Number of visibility polls before a revealed view actually shows.
    pub reveal_after_polls: u32,
    /// Ids that do not exist on the page.
    pub missing_ids: Vec<String>,
    /// Logout leaves this field filled.
    pub logout_keeps: Option<String>,
    /// Label on the logout button instead of "Выйти".
    pub logout_label: Option<String>,
    pub screenshot_fails: bool,
    pub launch_fails: bool,
    pub goto_fails: bool,
}

/// Everything the harness did, shared across all sessions of a launcher.
#[derive(Debug, Default)]
pub struct Journal {
    pub launched: usize,
    pub closed: usize,
    pub visited: Vec<String>,
    pub clicks: Vec<String>,
    pub typed: Vec<(String, String)>,
    pub cleared: Vec<String>,
    pub screenshots: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum View {
    Form,
    Welcome,
}

pub struct MockPage {
    behavior: Behavior,
    journal: Arc<Mutex<Journal>>,
    values: HashMap<String, String>,
    terms: bool,
    view: View,
    message: Option<String>,
    welcome: HashMap<String, String>,
    pending_polls: u32,
    closed: bool,
}

impl MockPage {
    pub fn new(behavior: Behavior) -> Self {
        Self::with_journal(behavior, Arc::new(Mutex::new(Journal::default())))
    }

    pub fn with_journal(behavior: Behavior, journal: Arc<Mutex<Journal>>) -> Self {
        let values = page::TEXT_FIELDS
            .iter()
            .map(|id| (id.to_string(), String::new()))
            .collect();
        Self {
            behavior,
            journal,
            values,
            terms: false,
            view: View::Form,
            message: None,
            welcome: HashMap::new(),
            pending_polls: 0,
            closed: false,
        }
    }

    pub fn journal(&self) -> Arc<Mutex<Journal>> {
        Arc::clone(&self.journal)
    }

    fn lookup(&self, id: &str) -> Result<()> {
        if self.closed {
            return Err(HarnessError::Browser("session already closed".to_string()));
        }
        let known = page::REQUIRED_IDS.contains(&id);
        if !known || self.behavior.missing_ids.iter().any(|m| m == id) {
            return Err(HarnessError::not_found(id));
        }
        Ok(())
    }

    fn visible(&self, id: &str) -> bool {
        if self.pending_polls > 0 {
            // Mid-transition: neither view is shown yet.
            return false;
        }
        match id {
            page::MESSAGE => self.view == View::Form && self.message.is_some(),
            page::WELCOME_PAGE | page::USER_NAME | page::LOGOUT_BUTTON => {
                self.view == View::Welcome
            }
            id if page::DISPLAY_FIELDS.contains(&id) => self.view == View::Welcome,
            _ => self.view == View::Form,
        }
    }

    fn value(&self, id: &str) -> String {
        self.values.get(id).cloned().unwrap_or_default()
    }

    fn validate(&self) -> Option<&'static str> {
        let required = [
            page::FIRST_NAME,
            page::LAST_NAME,
            page::EMAIL,
            page::NICKNAME,
            page::PASSWORD,
            page::CONFIRM_PASSWORD,
        ];
        if required.iter().any(|id| self.value(id).trim().is_empty()) {
            return Some("Пожалуйста, заполните все обязательные поля");
        }
        let email = self.value(page::EMAIL);
        let valid_email = match email.split_once('@') {
            Some((local, domain)) => {
                !local.is_empty() && domain.contains('.') && !domain.starts_with('.')
            }
            None => false,
        };
        if !valid_email {
            return Some("Введите корректный email адрес");
        }
        if self.value(page::PASSWORD).chars().count() < 8 {
            return Some("Пароль должен содержать минимум 8 символов");
        }
        if self.value(page::PASSWORD) != self.value(page::CONFIRM_PASSWORD) {
            return Some("Пароли не совпадают");
        }
        if !self.terms {
            return Some("Необходимо согласиться с условиями использования");
        }
        None
    }

    fn submit(&mut self) {
        match self.validate() {
            Some(message) => {
                let text = self
                    .behavior
                    .message_override
                    .clone()
                    .unwrap_or_else(|| message.to_string());
                self.message = Some(text);
            }
            None if self.behavior.never_welcome => {}
            None => {
                self.message = None;
                self.welcome.clear();
                let first = self.value(page::FIRST_NAME);
                let last = self.value(page::LAST_NAME);
                self.welcome
                    .insert(page::USER_NAME.to_string(), format!("{} {}", first, last));
                for (display, field) in page::DISPLAY_FIELDS.iter().zip([
                    page::FIRST_NAME,
                    page::LAST_NAME,
                    page::EMAIL,
                    page::PHONE,
                    page::NICKNAME,
                ]) {
                    let value = self.value(field);
                    self.welcome.insert(display.to_string(), value);
                }
                self.view = View::Welcome;
            }
        }
        self.pending_polls = self.behavior.reveal_after_polls;
    }

    fn logout(&mut self) {
        for (id, value) in self.values.iter_mut() {
            if self.behavior.logout_keeps.as_deref() != Some(id.as_str()) {
                value.clear();
            }
        }
        self.terms = false;
        self.message = None;
        self.welcome.clear();
        self.view = View::Form;
        self.pending_polls = self.behavior.reveal_after_polls;
    }
}

#[async_trait]
impl Browser for MockPage {
    async fn goto(&mut self, url: &str) -> Result<()> {
        self.journal.lock().unwrap().visited.push(url.to_string());
        if self.behavior.goto_fails {
            return Err(HarnessError::Browser(format!(
                "navigate to {}: net::ERR_NAME_NOT_RESOLVED",
                url
            )));
        }
        Ok(())
    }

    async fn clear(&mut self, id: &str) -> Result<()> {
        self.lookup(id)?;
        self.journal.lock().unwrap().cleared.push(id.to_string());
        if let Some(value) = self.values.get_mut(id) {
            value.clear();
        }
        Ok(())
    }

    async fn send_keys(&mut self, id: &str, text: &str) -> Result<()> {
        self.lookup(id)?;
        self.journal
            .lock()
            .unwrap()
            .typed
            .push((id.to_string(), text.to_string()));
        if let Some(value) = self.values.get_mut(id) {
            value.push_str(text);
        }
        Ok(())
    }

    async fn click(&mut self, id: &str) -> Result<()> {
        self.lookup(id)?;
        self.journal.lock().unwrap().clicks.push(id.to_string());
        match id {
            page::TERMS => self.terms = !self.terms,
            page::REGISTER_BUTTON => self.submit(),
            page::LOGOUT_BUTTON => self.logout(),
            _ => {}
        }
        Ok(())
    }

    async fn is_displayed(&mut self, id: &str) -> Result<bool> {
        self.lookup(id)?;
        if self.pending_polls > 0 {
            self.pending_polls -= 1;
            return Ok(false);
        }
        Ok(self.visible(id))
    }

    async fn text(&mut self, id: &str) -> Result<String> {
        self.lookup(id)?;
        if !self.visible(id) {
            return Ok(String::new());
        }
        let text = match id {
            page::MESSAGE => self.message.clone().unwrap_or_default(),
            page::LOGOUT_BUTTON => self
                .behavior
                .logout_label
                .clone()
                .unwrap_or_else(|| "Выйти".to_string()),
            page::REGISTER_BUTTON => "Зарегистрироваться".to_string(),
            other => self.welcome.get(other).cloned().unwrap_or_default(),
        };
        Ok(text)
    }

    async fn attribute(&mut self, id: &str, name: &str) -> Result<Option<String>> {
        self.lookup(id)?;
        let value = match (id, name) {
            (page::MESSAGE, "class") => Some(
                self.behavior
                    .message_class
                    .clone()
                    .unwrap_or_else(|| "message error".to_string()),
            ),
            (page::TERMS, "type") => Some("checkbox".to_string()),
            _ => None,
        };
        Ok(value)
    }

    async fn property(&mut self, id: &str, name: &str) -> Result<Option<String>> {
        self.lookup(id)?;
        if name == "value" {
            return Ok(self.values.get(id).cloned());
        }
        Ok(None)
    }

    async fn is_selected(&mut self, id: &str) -> Result<bool> {
        self.lookup(id)?;
        Ok(id == page::TERMS && self.terms)
    }

    async fn screenshot(&mut self) -> Result<Vec<u8>> {
        if self.behavior.screenshot_fails {
            return Err(HarnessError::Browser("screenshot: session crashed".to_string()));
        }
        self.journal.lock().unwrap().screenshots += 1;
        Ok(PNG_MAGIC.to_vec())
    }

    async fn close(&mut self) -> Result<()> {
        if self.closed {
            return Err(HarnessError::Browser("session already closed".to_string()));
        }
        self.closed = true;
        self.journal.lock().unwrap().closed += 1;
        Ok(())
    }
}

/// Hands out a fresh `MockPage` per launch; all pages share one journal.
pub struct MockLauncher {
    pub behavior: Behavior,
    pub journal: Arc<Mutex<Journal>>,
}

impl MockLauncher {
    pub fn new(behavior: Behavior) -> Self {
        Self {
            behavior,
            journal: Arc::new(Mutex::new(Journal::default())),
        }
    }

    pub fn journal(&self) -> Arc<Mutex<Journal>> {
        Arc::clone(&self.journal)
    }
}

#[async_trait]
impl Launcher for MockLauncher {
    type Browser = MockPage;

    async fn launch(&self, _config: &SuiteConfig) -> Result<MockPage> {
        if self.behavior.launch_fails {
            return Err(HarnessError::Launch("connection refused (os error 111)".to_string()));
        }
        self.journal.lock().unwrap().launched += 1;
        Ok(MockPage::with_journal(self.behavior.clone(), self.journal()))
    }
}

pub fn fast_wait() -> Wait {
    Wait::new(Duration::from_millis(200), Duration::from_millis(5))
}

/// A session on a well-behaved page with a short wait.
pub fn session() -> Session<MockPage> {
    Session::new(MockPage::new(Behavior::default()), fast_wait())
}

pub fn session_with(behavior: Behavior) -> Session<MockPage> {
    Session::new(MockPage::new(behavior), fast_wait())
}

/// Suite config with a short wait and screenshots under `dir`.
pub fn config_in(dir: &std::path::Path) -> SuiteConfig {
    let mut config = SuiteConfig::default();
    config.target_url = "http://127.0.0.1:8000/registration.html".to_string();
    config.screenshot_dir = dir.to_path_buf();
    config.wait.timeout_secs = 1;
    config.wait.poll_interval_ms = 10;
    config
}
