//! Driving port for account registration.

use async_trait::async_trait;

use crate::domain::{Error, SignupCredentials, User};

/// Domain use-case port for creating accounts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SignupService: Send + Sync {
    /// Create an account from validated credentials.
    ///
    /// A username that is already taken yields
    /// [`crate::domain::ErrorCode::Conflict`].
    async fn signup(&self, credentials: &SignupCredentials) -> Result<User, Error>;
}
