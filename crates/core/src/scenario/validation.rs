//! Scenarios where the page must refuse the submission with a message.

use super::data;
use crate::assertions::{expect_contains, expect_contains_any, expect_contains_exact, expect_true};
use crate::browser::Browser;
use crate::error::Result;
use crate::form;
use crate::page;
use crate::session::Session;

pub const REQUIRED_FIELDS_PHRASE: &str = "заполните все обязательные поля";
pub const TERMS_PHRASE: &str = "согласиться с условиями";
pub const EMAIL_PHRASE: &str = "корректный email";
pub const PASSWORD_PHRASES: [&str; 3] = ["пароль", "символ", "символов"];
pub const MISMATCH_PHRASE: &str = "пароли не совпадают";

/// Class the message element carries when it reports an error.
pub const ERROR_CLASS: &str = "error";

/// Submit and wait for the message element, returning its text.
async fn submit_for_message<B: Browser>(session: &mut Session<B>) -> Result<String> {
    session.click(page::REGISTER_BUTTON).await?;
    session.wait_visible(page::MESSAGE).await?;
    let shown = session.is_displayed(page::MESSAGE).await?;
    expect_true("message displayed", shown)?;
    let text = session.text(page::MESSAGE).await?;
    tracing::info!(message = %text, "page refused submission");
    Ok(text)
}

/// Submit an untouched form.
pub async fn empty_fields<B: Browser>(session: &mut Session<B>) -> Result<()> {
    let text = submit_for_message(session).await?;
    let class = session
        .attribute(page::MESSAGE, "class")
        .await?
        .unwrap_or_default();
    expect_contains_exact("message class", &class, ERROR_CLASS)?;
    expect_contains("required fields message", &text, REQUIRED_FIELDS_PHRASE)
}

pub async fn without_terms<B: Browser>(session: &mut Session<B>) -> Result<()> {
    form::fill(session, &data::petr()).await?;
    let text = submit_for_message(session).await?;
    expect_contains("terms message", &text, TERMS_PHRASE)
}

pub async fn invalid_email<B: Browser>(session: &mut Session<B>) -> Result<()> {
    form::fill(session, &data::sergey_invalid_email()).await?;
    let text = submit_for_message(session).await?;
    expect_contains("email message", &text, EMAIL_PHRASE)
}

pub async fn weak_password<B: Browser>(session: &mut Session<B>) -> Result<()> {
    form::fill(session, &data::alexey_weak_password()).await?;
    let text = submit_for_message(session).await?;
    expect_contains_any("password message", &text, &PASSWORD_PHRASES)
}

pub async fn mismatched_passwords<B: Browser>(session: &mut Session<B>) -> Result<()> {
    form::fill(session, &data::dmitriy()).await?;
    form::override_field(session, page::CONFIRM_PASSWORD, data::MISMATCHED_CONFIRMATION)
        .await?;
    let text = submit_for_message(session).await?;
    expect_contains("password mismatch message", &text, MISMATCH_PHRASE)
}
