//! Form driver: write registration input into the page and read it back.

use crate::browser::Browser;
use crate::error::Result;
use crate::page;
use crate::session::Session;
use serde::{Deserialize, Serialize};

/// Values for the registration form. Empty fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrationInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub nickname: String,
    pub password: String,
    pub confirm_password: String,
    pub consent: bool,
}

impl RegistrationInput {
    /// Set both password fields to the same value.
    pub fn with_password(mut self, password: &str) -> Self {
        self.password = password.to_string();
        self.confirm_password = password.to_string();
        self
    }

    /// `first last`, as the welcome view shows it.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Pairs of (element id, value) for every text input.
    pub fn fields(&self) -> [(&'static str, &str); 7] {
        [
            (page::FIRST_NAME, self.first_name.as_str()),
            (page::LAST_NAME, self.last_name.as_str()),
            (page::EMAIL, self.email.as_str()),
            (page::PHONE, self.phone.as_str()),
            (page::NICKNAME, self.nickname.as_str()),
            (page::PASSWORD, self.password.as_str()),
            (page::CONFIRM_PASSWORD, self.confirm_password.as_str()),
        ]
    }

    /// Pairs of (display element id, expected text) on the welcome view.
    pub fn echoed_fields(&self) -> [(&'static str, &str); 5] {
        [
            (page::DISPLAY_FIRST_NAME, self.first_name.as_str()),
            (page::DISPLAY_LAST_NAME, self.last_name.as_str()),
            (page::DISPLAY_EMAIL, self.email.as_str()),
            (page::DISPLAY_PHONE, self.phone.as_str()),
            (page::DISPLAY_NICKNAME, self.nickname.as_str()),
        ]
    }
}

/// Values read back from the form inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormSnapshot {
    pub values: Vec<(String, String)>,
    pub consent: bool,
}

impl FormSnapshot {
    pub fn value(&self, id: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(field, _)| field == id)
            .map(|(_, value)| value.as_str())
    }
}

/// Fill every non-empty field, then set the consent checkbox.
pub async fn fill<B: Browser>(session: &mut Session<B>, input: &RegistrationInput) -> Result<()> {
    for (id, value) in input.fields() {
        if value.is_empty() {
            continue;
        }
        override_field(session, id, value).await?;
    }
    set_consent(session, input.consent).await
}

/// Fields whose values never reach the log.
pub fn is_secret(id: &str) -> bool {
    id == page::PASSWORD || id == page::CONFIRM_PASSWORD
}

/// Clear one field and type a new value into it.
pub async fn override_field<B: Browser>(
    session: &mut Session<B>,
    id: &str,
    value: &str,
) -> Result<()> {
    let browser = session.browser();
    browser.clear(id).await?;
    browser.send_keys(id, value).await?;
    if is_secret(id) {
        tracing::debug!(id, "filled field");
    } else {
        tracing::debug!(id, value, "filled field");
    }
    Ok(())
}

/// Bring the consent checkbox to `accepted`, clicking only if it differs.
pub async fn set_consent<B: Browser>(session: &mut Session<B>, accepted: bool) -> Result<()> {
    let browser = session.browser();
    if browser.is_selected(page::TERMS).await? != accepted {
        browser.click(page::TERMS).await?;
    }
    tracing::debug!(accepted, "consent checkbox set");
    Ok(())
}

/// Read the current `value` of the given inputs and the consent state.
pub async fn snapshot<B: Browser>(session: &mut Session<B>, ids: &[&str]) -> Result<FormSnapshot> {
    let browser = session.browser();
    let mut values = Vec::with_capacity(ids.len());
    for id in ids {
        let value = browser.property(id, "value").await?.unwrap_or_default();
        values.push((id.to_string(), value));
    }
    let consent = browser.is_selected(page::TERMS).await?;
    Ok(FormSnapshot { values, consent })
}
