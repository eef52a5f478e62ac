//! Authentication primitives: login credentials and signup validation.
//!
//! Keep inbound payload parsing outside the domain by exposing constructors
//! that validate string inputs before a handler talks to a port or service.

use std::fmt;

use zeroize::Zeroizing;

use super::user::{UserValidationError, Username};

/// Domain error returned when login payload values are invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginValidationError {
    /// Username was missing or blank once trimmed.
    EmptyUsername,
    /// Password was blank.
    EmptyPassword,
}

impl fmt::Display for LoginValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyUsername => write!(f, "username must not be empty"),
            Self::EmptyPassword => write!(f, "password must not be empty"),
        }
    }
}

impl std::error::Error for LoginValidationError {}

/// Validated login credentials used by authentication services.
///
/// ## Invariants
/// - `username` is trimmed and must not be empty after trimming.
/// - `password` is non-empty and keeps caller-provided whitespace.
///
/// # Examples
/// ```
/// use puppy_collector::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts(" ada ", "correct horse").unwrap();
/// assert_eq!(creds.username(), "ada");
/// assert_eq!(creds.password(), "correct horse");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    username: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Construct credentials from raw username/password inputs.
    pub fn try_from_parts(username: &str, password: &str) -> Result<Self, LoginValidationError> {
        let normalized = username.trim();
        if normalized.is_empty() {
            return Err(LoginValidationError::EmptyUsername);
        }
        if password.is_empty() {
            return Err(LoginValidationError::EmptyPassword);
        }
        Ok(Self {
            username: normalized.to_owned(),
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Trimmed username as submitted.
    pub fn username(&self) -> &str {
        self.username.as_str()
    }

    /// Password as submitted.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// Minimum accepted password length, in characters.
pub const PASSWORD_MIN_LENGTH: usize = 8;

// Lower-cased; compared case-insensitively.
const COMMON_PASSWORDS: &[&str] = &[
    "123456", "12345678", "123456789", "1234567890", "111111", "000000", "654321", "password",
    "password1", "password123", "passw0rd", "qwerty", "qwerty123", "qwertyuiop", "abc123",
    "abcd1234", "letmein", "welcome", "welcome1", "monkey", "dragon", "football", "baseball",
    "iloveyou", "trustno1", "sunshine", "princess", "admin123", "administrator", "superman",
    "starwars", "whatever", "freedom", "shadow", "master", "michael", "jennifer", "computer",
    "internet", "changeme", "secret123", "zaq12wsx", "1q2w3e4r", "1qaz2wsx", "asdfghjkl",
    "asdfasdf", "puppies1", "doggy123", "iloveyou1", "login123",
];

/// Reasons a signup submission is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignupValidationError {
    Username(UserValidationError),
    PasswordRequired,
    PasswordMismatch,
    PasswordTooShort { min: usize },
    PasswordEntirelyNumeric,
    PasswordTooCommon,
    PasswordTooSimilarToUsername,
}

impl fmt::Display for SignupValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Username(err) => err.fmt(f),
            Self::PasswordRequired => write!(f, "password must not be empty"),
            Self::PasswordMismatch => write!(f, "the two password fields didn't match"),
            Self::PasswordTooShort { min } => {
                write!(f, "password must contain at least {min} characters")
            }
            Self::PasswordEntirelyNumeric => write!(f, "password is entirely numeric"),
            Self::PasswordTooCommon => write!(f, "password is too common"),
            Self::PasswordTooSimilarToUsername => {
                write!(f, "password is too similar to the username")
            }
        }
    }
}

impl std::error::Error for SignupValidationError {}

impl From<UserValidationError> for SignupValidationError {
    fn from(value: UserValidationError) -> Self {
        Self::Username(value)
    }
}

/// Validated signup submission.
///
/// ## Invariants
/// - `username` satisfies [`Username`] rules.
/// - `password` matched its confirmation and passed the password rules.
///
/// # Examples
/// ```
/// use puppy_collector::domain::{SignupCredentials, SignupValidationError};
///
/// let ok = SignupCredentials::try_from_parts("ada", "kibble-tower-9", "kibble-tower-9");
/// assert!(ok.is_ok());
///
/// let mismatch = SignupCredentials::try_from_parts("ada", "kibble-tower-9", "kibble-tower-8");
/// assert_eq!(mismatch.unwrap_err(), SignupValidationError::PasswordMismatch);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupCredentials {
    username: Username,
    password: Zeroizing<String>,
}

impl SignupCredentials {
    /// Validate a raw signup submission.
    pub fn try_from_parts(
        username: &str,
        password: &str,
        confirmation: &str,
    ) -> Result<Self, SignupValidationError> {
        let username = Username::new(username.trim())?;
        if password.is_empty() || confirmation.is_empty() {
            return Err(SignupValidationError::PasswordRequired);
        }
        if password != confirmation {
            return Err(SignupValidationError::PasswordMismatch);
        }
        validate_password(password, &username)?;
        Ok(Self {
            username,
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Validated username for the new account.
    pub fn username(&self) -> &Username {
        &self.username
    }

    /// Password as submitted.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

fn validate_password(password: &str, username: &Username) -> Result<(), SignupValidationError> {
    if password.chars().count() < PASSWORD_MIN_LENGTH {
        return Err(SignupValidationError::PasswordTooShort {
            min: PASSWORD_MIN_LENGTH,
        });
    }
    if password.chars().all(|c| c.is_ascii_digit()) {
        return Err(SignupValidationError::PasswordEntirelyNumeric);
    }
    let lowered = password.to_lowercase();
    if COMMON_PASSWORDS.contains(&lowered.trim()) {
        return Err(SignupValidationError::PasswordTooCommon);
    }
    if lowered.contains(&username.as_str().to_lowercase()) {
        return Err(SignupValidationError::PasswordTooSimilarToUsername);
    }
    Ok(())
}
