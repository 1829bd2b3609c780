//! Stubbed authentication.
//!
//! Validates sign-up input and hands out the [`User`] record the store
//! owns. There is no real backend: login accepts one fixture credential
//! pair and nothing is stored or hashed.

use once_cell::sync::Lazy;
use regex::Regex;
use uuid::Uuid;

use crate::models::User;

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap());

pub const MIN_USERNAME_LEN: usize = 3;
pub const MIN_PASSWORD_LEN: usize = 6;

// Fixture credentials accepted until a real backend exists.
const STUB_USERNAME: &str = "test";
const STUB_PASSWORD: &str = "password";
const STUB_EMAIL: &str = "test@example.com";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    #[error("Username must be at least 3 characters")]
    UsernameTooShort,

    #[error("Password must be at least 6 characters")]
    PasswordTooShort,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Email must be a valid email")]
    InvalidEmail,

    #[error("Invalid username or password")]
    BadCredentials,
}

pub fn validate_sign_up(
    username: &str,
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<(), Error> {
    if username.chars().count() < MIN_USERNAME_LEN {
        return Err(Error::UsernameTooShort);
    }
    if !EMAIL_REGEX.is_match(email) {
        return Err(Error::InvalidEmail);
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(Error::PasswordTooShort);
    }
    if password != confirm {
        return Err(Error::PasswordMismatch);
    }
    Ok(())
}

pub fn sign_up(username: &str, email: &str, password: &str, confirm: &str) -> Result<User, Error> {
    validate_sign_up(username, email, password, confirm)?;
    Ok(new_user(username, email))
}

pub fn login(username: &str, password: &str) -> Result<User, Error> {
    if username == STUB_USERNAME && password == STUB_PASSWORD {
        Ok(new_user(username, STUB_EMAIL))
    } else {
        Err(Error::BadCredentials)
    }
}

fn new_user(username: &str, email: &str) -> User {
    User {
        id: Uuid::new_v4().to_string(),
        username: username.to_string(),
        email: email.to_string(),
        total_catches: 0,
        biggest_fish: None,
        friends: Vec::new(),
    }
}
