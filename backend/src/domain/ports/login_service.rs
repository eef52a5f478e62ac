//! Driving port for login/authentication use-cases.
//!
//! Inbound adapters call it to authenticate credentials without knowing the
//! backing user store or hashing scheme.

use async_trait::async_trait;

use crate::domain::{Error, LoginCredentials, User, UserId};

/// Domain use-case port for authentication.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Validate credentials and return the authenticated user id.
    ///
    /// Unknown usernames and wrong passwords both yield
    /// [`crate::domain::ErrorCode::Unauthorized`].
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<UserId, Error>;

    /// Resolve the user named by a session cookie.
    ///
    /// `None` means the account no longer exists and the session is stale.
    async fn session_user(&self, id: &UserId) -> Result<Option<User>, Error>;
}
