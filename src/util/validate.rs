//! Client-side form validation.
//!
//! Field validators are pure and cheap enough to run on every keystroke. The
//! email rule is a business allow-list of domain suffixes, not general address
//! validation. The password rule caps length at ten characters and has no
//! minimum.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use std::sync::LazyLock;

use regex::Regex;

use crate::net::types::{LoginRequest, RegisterRequest};

pub const MAX_PASSWORD_LEN: usize = 10;
pub const MIN_USERNAME_LEN: usize = 3;
pub const MAX_USERNAME_LEN: usize = 20;

/// Symbols that satisfy the "number or special character" password rule.
pub const PASSWORD_SYMBOLS: &str = r#"!@#$%^&*()_+-=[]{};':"\|,.<>/?"#;

static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email shape regex is valid")
});

static EMAIL_ALLOWED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^[^\s@]+@[^\s@]+\.(com|me|co\.ke|org|net|edu|gov|mil|int|info|biz|name|pro|aero|coop|museum)$",
    )
    .expect("email domain regex is valid")
});

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EmailError {
    #[error("Email is required")]
    Required,
    #[error("Email must be in format 'example@domain.com'")]
    Format,
    #[error("Email must have a valid domain (.com, .me, .co.ke, etc.)")]
    Domain,
}

/// Password rules, in the order they are checked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PasswordError {
    #[error("Password is required")]
    Required,
    #[error("Password must not exceed 10 characters")]
    TooLong,
    #[error("Password must include at least one uppercase letter")]
    MissingUppercase,
    #[error("Password must include at least one lowercase letter")]
    MissingLowercase,
    #[error("Password must include at least one number or special character")]
    MissingDigitOrSymbol,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum UsernameError {
    #[error("Username is required")]
    Required,
    #[error("Username must be at least 3 characters")]
    TooShort,
    #[error("Username must not exceed 20 characters")]
    TooLong,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfirmError {
    #[error("Confirm password is required")]
    Required,
    #[error("Passwords do not match")]
    Mismatch,
}

/// # Errors
///
/// Returns the first failed email rule.
pub fn validate_email(email: &str) -> Result<(), EmailError> {
    if email.is_empty() {
        return Err(EmailError::Required);
    }
    if !EMAIL_SHAPE.is_match(email) {
        return Err(EmailError::Format);
    }
    if !EMAIL_ALLOWED.is_match(email) {
        return Err(EmailError::Domain);
    }
    Ok(())
}

/// # Errors
///
/// Returns the first failed password rule; length is checked before content.
pub fn validate_password(password: &str) -> Result<(), PasswordError> {
    if password.is_empty() {
        return Err(PasswordError::Required);
    }
    if password.chars().count() > MAX_PASSWORD_LEN {
        return Err(PasswordError::TooLong);
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(PasswordError::MissingUppercase);
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return Err(PasswordError::MissingLowercase);
    }
    if !password
        .chars()
        .any(|c| c.is_ascii_digit() || PASSWORD_SYMBOLS.contains(c))
    {
        return Err(PasswordError::MissingDigitOrSymbol);
    }
    Ok(())
}

/// # Errors
///
/// Returns the failed length rule for the trimmed username.
pub fn validate_username(username: &str) -> Result<(), UsernameError> {
    let len = username.trim().chars().count();
    if len == 0 {
        Err(UsernameError::Required)
    } else if len < MIN_USERNAME_LEN {
        Err(UsernameError::TooShort)
    } else if len > MAX_USERNAME_LEN {
        Err(UsernameError::TooLong)
    } else {
        Ok(())
    }
}

/// # Errors
///
/// Returns an error when `confirm` is empty or differs from `password`.
pub fn validate_confirm(password: &str, confirm: &str) -> Result<(), ConfirmError> {
    if confirm.is_empty() {
        Err(ConfirmError::Required)
    } else if confirm != password {
        Err(ConfirmError::Mismatch)
    } else {
        Ok(())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Per-field messages for the login form; `None` means the field is fine.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginErrors {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl LoginErrors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

/// Check the login form and build the request body.
///
/// Only presence is required of the password: accounts may predate the
/// registration policy.
///
/// # Errors
///
/// Returns the per-field messages when any field is invalid.
pub fn validate_login(form: &LoginForm) -> Result<LoginRequest, LoginErrors> {
    let email = form.email.trim();
    let errors = LoginErrors {
        email: validate_email(email).err().map(|e| e.to_string()),
        password: form
            .password
            .is_empty()
            .then(|| PasswordError::Required.to_string()),
    };
    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(LoginRequest { email: email.to_owned(), password: form.password.clone() })
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupErrors {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub confirm: Option<String>,
}

impl SignupErrors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.email.is_none() && self.password.is_none() && self.confirm.is_none()
    }
}

/// Check every signup field and build the request body.
///
/// # Errors
///
/// Returns the per-field messages when any field is invalid.
pub fn validate_signup(form: &SignupForm) -> Result<RegisterRequest, SignupErrors> {
    let username = form.username.trim();
    let email = form.email.trim();
    let errors = SignupErrors {
        username: validate_username(username).err().map(|e| e.to_string()),
        email: validate_email(email).err().map(|e| e.to_string()),
        password: validate_password(&form.password).err().map(|e| e.to_string()),
        confirm: validate_confirm(&form.password, &form.confirm)
            .err()
            .map(|e| e.to_string()),
    };
    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(RegisterRequest {
        name: username.to_owned(),
        username: username.to_owned(),
        email: email.to_owned(),
        password: form.password.clone(),
    })
}
