//! Form driver tests.

mod support;

use formprobe_core::form::{self, RegistrationInput};
use formprobe_core::page;
use formprobe_core::scenario::data;
use formprobe_core::{Browser, HarnessError};
use pretty_assertions::assert_eq;
use support::{session, session_with, Behavior};

#[tokio::test]
async fn test_fill_skips_empty_fields() {
    let mut session = session();
    let journal = session.browser().journal();
    let input = RegistrationInput {
        first_name: "Пётр".to_string(),
        email: "p@example.com".to_string(),
        ..Default::default()
    };

    form::fill(&mut session, &input).await.unwrap();

    let journal = journal.lock().unwrap();
    assert_eq!(journal.cleared, vec!["firstName".to_string(), "email".to_string()]);
    assert_eq!(
        journal.typed,
        vec![
            ("firstName".to_string(), "Пётр".to_string()),
            ("email".to_string(), "p@example.com".to_string()),
        ]
    );
    assert!(journal.clicks.is_empty(), "consent already unset: {:?}", journal.clicks);
}

#[tokio::test]
async fn test_fill_replaces_existing_values() {
    let mut session = session();
    session.browser().send_keys(page::NICKNAME, "stale").await.unwrap();

    form::fill(&mut session, &data::ivan()).await.unwrap();

    let snapshot = form::snapshot(&mut session, &page::TEXT_FIELDS).await.unwrap();
    assert_eq!(snapshot.value(page::NICKNAME), Some("ivan123"));
    assert_eq!(snapshot.value(page::PHONE), Some("+7 (999) 123-45-67"));
    assert_eq!(snapshot.value(page::CONFIRM_PASSWORD), Some("TestPassword123!"));
    assert!(snapshot.consent);
}

#[tokio::test]
async fn test_set_consent_only_clicks_when_state_differs() {
    let mut session = session();
    let journal = session.browser().journal();

    form::set_consent(&mut session, true).await.unwrap();
    form::set_consent(&mut session, true).await.unwrap();
    form::set_consent(&mut session, false).await.unwrap();
    form::set_consent(&mut session, false).await.unwrap();

    let clicks = journal.lock().unwrap().clicks.clone();
    assert_eq!(clicks, vec!["terms".to_string(), "terms".to_string()]);
    assert!(!session.is_selected(page::TERMS).await.unwrap());
}

#[tokio::test]
async fn test_fill_propagates_missing_element() {
    let mut session = session_with(Behavior {
        missing_ids: vec![page::TERMS.to_string()],
        ..Default::default()
    });

    let err = form::fill(&mut session, &data::anna()).await.unwrap_err();
    assert!(matches!(err, HarnessError::ElementNotFound { ref id } if id == "terms"));
}

#[test]
fn test_with_password_sets_both_fields() {
    let input = RegistrationInput::default().with_password("S3cret!pass");
    assert_eq!(input.password, "S3cret!pass");
    assert_eq!(input.confirm_password, "S3cret!pass");
    assert!(!input.consent);
}

#[test]
fn test_fields_cover_every_text_input_in_page_order() {
    let input = data::ivan();
    let ids: Vec<&str> = input.fields().iter().map(|(id, _)| *id).collect();
    assert_eq!(ids, page::TEXT_FIELDS.to_vec());
    assert_eq!(input.full_name(), "Иван Иванов");
}

#[test]
fn test_input_deserializes_with_defaults() {
    let input: RegistrationInput =
        serde_json::from_str(r#"{"first_name":"Анна","consent":true}"#).unwrap();
    assert_eq!(input.first_name, "Анна");
    assert_eq!(input.last_name, "");
    assert!(input.consent);
}

#[test]
fn test_password_fields_are_kept_out_of_logs() {
    assert!(form::is_secret(page::PASSWORD));
    assert!(form::is_secret(page::CONFIRM_PASSWORD));
    assert!(!form::is_secret(page::EMAIL));
    assert!(!form::is_secret(page::NICKNAME));
}
