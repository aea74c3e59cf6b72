//! Element identifiers of the registration page.
//!
//! These ids are the only coupling between the harness and the page under
//! test. Renaming any of them on the page breaks the harness.

pub const FIRST_NAME: &str = "firstName";
pub const LAST_NAME: &str = "lastName";
pub const EMAIL: &str = "email";
pub const PHONE: &str = "phone";
pub const NICKNAME: &str = "nickname";
pub const PASSWORD: &str = "password";
pub const CONFIRM_PASSWORD: &str = "confirmPassword";
pub const TERMS: &str = "terms";
pub const REGISTER_BUTTON: &str = "register-btn";

pub const REGISTRATION_FORM: &str = "registration-form";
pub const MESSAGE: &str = "message";

pub const WELCOME_PAGE: &str = "welcome-page";
pub const USER_NAME: &str = "user-name";
pub const DISPLAY_FIRST_NAME: &str = "display-firstName";
pub const DISPLAY_LAST_NAME: &str = "display-lastName";
pub const DISPLAY_EMAIL: &str = "display-email";
pub const DISPLAY_PHONE: &str = "display-phone";
pub const DISPLAY_NICKNAME: &str = "display-nickname";
pub const LOGOUT_BUTTON: &str = "logout-btn";

/// Labels the logout button may carry.
pub const LOGOUT_LABELS: [&str; 2] = ["Выйти", "Logout"];

/// Text inputs of the form, in page order.
pub const TEXT_FIELDS: [&str; 7] = [
    FIRST_NAME,
    LAST_NAME,
    EMAIL,
    PHONE,
    NICKNAME,
    PASSWORD,
    CONFIRM_PASSWORD,
];

/// Every id the harness touches.
pub const REQUIRED_IDS: [&str; 19] = [
    FIRST_NAME,
    LAST_NAME,
    EMAIL,
    PHONE,
    NICKNAME,
    PASSWORD,
    CONFIRM_PASSWORD,
    TERMS,
    REGISTER_BUTTON,
    WELCOME_PAGE,
    USER_NAME,
    DISPLAY_FIRST_NAME,
    DISPLAY_LAST_NAME,
    DISPLAY_EMAIL,
    DISPLAY_PHONE,
    DISPLAY_NICKNAME,
    LOGOUT_BUTTON,
    MESSAGE,
    REGISTRATION_FORM,
];

/// Welcome-view elements that echo the submitted data, in page order.
pub const DISPLAY_FIELDS: [&str; 5] = [
    DISPLAY_FIRST_NAME,
    DISPLAY_LAST_NAME,
    DISPLAY_EMAIL,
    DISPLAY_PHONE,
    DISPLAY_NICKNAME,
];
