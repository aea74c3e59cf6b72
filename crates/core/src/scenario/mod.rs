//! The registration-page scenarios.
//!
//! Each scenario is a linear fill, act, wait, assert sequence against a
//! fresh session. Running one inside a scoped session with a failure
//! screenshot is the runner's job; the bodies here only drive and assert.

pub mod data;
pub mod registration;
pub mod validation;

use crate::browser::Browser;
use crate::error::Result;
use crate::session::Session;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Scenario {
    SuccessfulRegistration,
    EmptyFields,
    WithoutTerms,
    InvalidEmail,
    WeakPassword,
    MismatchedPasswords,
    Logout,
}

impl Scenario {
    pub const ALL: [Scenario; 7] = [
        Scenario::SuccessfulRegistration,
        Scenario::EmptyFields,
        Scenario::WithoutTerms,
        Scenario::InvalidEmail,
        Scenario::WeakPassword,
        Scenario::MismatchedPasswords,
        Scenario::Logout,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Scenario::SuccessfulRegistration => "successful_registration",
            Scenario::EmptyFields => "empty_fields",
            Scenario::WithoutTerms => "without_terms",
            Scenario::InvalidEmail => "invalid_email",
            Scenario::WeakPassword => "weak_password",
            Scenario::MismatchedPasswords => "mismatched_passwords",
            Scenario::Logout => "logout",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Scenario::SuccessfulRegistration => {
                "valid data is accepted and echoed on the welcome view"
            }
            Scenario::EmptyFields => "submitting a blank form reports the required fields",
            Scenario::WithoutTerms => "valid data without consent asks to accept the terms",
            Scenario::InvalidEmail => "a malformed email is rejected",
            Scenario::WeakPassword => "a short password is rejected",
            Scenario::MismatchedPasswords => "differing password confirmation is rejected",
            Scenario::Logout => "logging out returns to an empty form",
        }
    }

    /// Fixed file name of the diagnostic screenshot taken on failure.
    pub fn screenshot_file(&self) -> &'static str {
        match self {
            Scenario::SuccessfulRegistration => "test_registration_failed.png",
            Scenario::EmptyFields => "test_empty_fields_failed.png",
            Scenario::WithoutTerms => "test_no_terms_failed.png",
            Scenario::InvalidEmail => "test_invalid_email_failed.png",
            Scenario::WeakPassword => "test_weak_password_failed.png",
            Scenario::MismatchedPasswords => "test_mismatched_passwords_failed.png",
            Scenario::Logout => "test_logout_failed.png",
        }
    }

    pub async fn run<B: Browser>(&self, session: &mut Session<B>) -> Result<()> {
        match self {
            Scenario::SuccessfulRegistration => {
                registration::successful_registration(session).await.map(|_| ())
            }
            Scenario::EmptyFields => validation::empty_fields(session).await,
            Scenario::WithoutTerms => validation::without_terms(session).await,
            Scenario::InvalidEmail => validation::invalid_email(session).await,
            Scenario::WeakPassword => validation::weak_password(session).await,
            Scenario::MismatchedPasswords => validation::mismatched_passwords(session).await,
            Scenario::Logout => registration::logout(session).await,
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown scenario {0:?}")]
pub struct UnknownScenario(pub String);

impl FromStr for Scenario {
    type Err = UnknownScenario;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let wanted = s.trim().replace('-', "_").to_lowercase();
        Scenario::ALL
            .into_iter()
            .find(|scenario| scenario.name() == wanted)
            .ok_or_else(|| UnknownScenario(s.to_string()))
    }
}
