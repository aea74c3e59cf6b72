//! Registration data used by the scenarios.

use crate::form::RegistrationInput;

fn user(first: &str, last: &str, email: &str, nickname: &str, password: &str) -> RegistrationInput {
    RegistrationInput {
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: email.to_string(),
        nickname: nickname.to_string(),
        consent: true,
        ..Default::default()
    }
    .with_password(password)
}

pub fn ivan() -> RegistrationInput {
    RegistrationInput {
        phone: "+7 (999) 123-45-67".to_string(),
        ..user("Иван", "Иванов", "ivanov@example.com", "ivan123", "TestPassword123!")
    }
}

/// Valid data, but consent is withheld.
pub fn petr() -> RegistrationInput {
    RegistrationInput {
        consent: false,
        ..user("Петр", "Петров", "petrov@example.com", "petr456", "PetrPass123!")
    }
}

pub fn sergey_invalid_email() -> RegistrationInput {
    user("Сергей", "Сергеев", "invalid-email", "sergey789", "SergeyPass123!")
}

pub fn alexey_weak_password() -> RegistrationInput {
    user("Алексей", "Алексеев", "alexeev@example.com", "alex123", "weak")
}

pub fn dmitriy() -> RegistrationInput {
    user("Дмитрий", "Дмитриев", "dmitriev@example.com", "dima456", "DmitriyPass123!")
}

pub const MISMATCHED_CONFIRMATION: &str = "DifferentPass123!";

pub fn anna() -> RegistrationInput {
    user("Анна", "Аннова", "annova@example.com", "anna789", "AnnaPass123!")
}
