//! Scenarios that end on the welcome view: successful registration and
//! logout back to a reset form.

use super::data;
use crate::assertions::{expect_contains_any_exact, expect_eq, expect_false, expect_true};
use crate::browser::Browser;
use crate::error::Result;
use crate::form::{self, RegistrationInput};
use crate::page;
use crate::session::Session;
use serde::Serialize;

/// Inputs that must be empty after logout. Phone is not part of the reset check.
pub const RESET_FIELDS: [&str; 6] = [
    page::FIRST_NAME,
    page::LAST_NAME,
    page::EMAIL,
    page::NICKNAME,
    page::PASSWORD,
    page::CONFIRM_PASSWORD,
];

/// What the welcome view shows after a successful registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WelcomeView {
    pub user_name: String,
    pub echoed: Vec<(String, String)>,
    pub logout_visible: bool,
    pub logout_text: String,
}

pub async fn read_welcome_view<B: Browser>(session: &mut Session<B>) -> Result<WelcomeView> {
    let user_name = session.text(page::USER_NAME).await?;
    let mut echoed = Vec::with_capacity(5);
    for id in page::DISPLAY_FIELDS {
        echoed.push((id.to_string(), session.text(id).await?));
    }
    let logout_visible = session.is_displayed(page::LOGOUT_BUTTON).await?;
    let logout_text = session.text(page::LOGOUT_BUTTON).await?;
    Ok(WelcomeView {
        user_name,
        echoed,
        logout_visible,
        logout_text,
    })
}

/// Fill `input`, submit, and wait for the welcome view.
pub async fn register<B: Browser>(
    session: &mut Session<B>,
    input: &RegistrationInput,
) -> Result<()> {
    form::fill(session, input).await?;
    session.click(page::REGISTER_BUTTON).await?;
    session.wait_visible(page::WELCOME_PAGE).await
}

/// Register with valid data and check everything the welcome view echoes.
pub async fn successful_registration<B: Browser>(
    session: &mut Session<B>,
) -> Result<WelcomeView> {
    let input = data::ivan();
    register(session, &input).await?;

    let welcome_shown = session.is_displayed(page::WELCOME_PAGE).await?;
    expect_true("welcome page displayed", welcome_shown)?;

    let view = read_welcome_view(session).await?;
    expect_eq("user name", &input.full_name(), &view.user_name)?;
    for ((id, expected), (_, actual)) in input.echoed_fields().iter().zip(&view.echoed) {
        expect_eq(id, expected, actual)?;
    }
    expect_true("logout button displayed", view.logout_visible)?;
    expect_contains_any_exact("logout button text", &view.logout_text, &page::LOGOUT_LABELS)?;

    tracing::info!(user = %view.user_name, "registration accepted");
    Ok(view)
}

/// Register, log out, and check that the form came back empty.
pub async fn logout<B: Browser>(session: &mut Session<B>) -> Result<()> {
    register(session, &data::anna()).await?;

    session.click(page::LOGOUT_BUTTON).await?;
    session.wait_visible(page::REGISTRATION_FORM).await?;

    let form_shown = session.is_displayed(page::REGISTRATION_FORM).await?;
    expect_true("registration form displayed after logout", form_shown)?;

    let snapshot = form::snapshot(session, &RESET_FIELDS).await?;
    for (id, value) in &snapshot.values {
        expect_eq(&format!("{} cleared", id), "", value)?;
    }
    expect_false("terms checkbox selected", snapshot.consent)?;

    tracing::info!("logout reset the form");
    Ok(())
}
