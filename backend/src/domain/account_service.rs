//! Account services: signup and password login.
//!
//! [`AccountService`] implements both the [`LoginService`] and
//! [`SignupService`] driving ports on top of a user repository and a
//! password hasher.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};
use zeroize::Zeroizing;

use crate::domain::ports::{
    LoginService, PasswordHashError, PasswordHasher, SignupService, UserPersistenceError,
    UserRepository,
};
use crate::domain::{
    Error, LoginCredentials, SignupCredentials, User, UserAccount, UserId, Username,
};

fn map_repository_error(error: UserPersistenceError) -> Error {
    match error {
        UserPersistenceError::Connection { message } => {
            Error::service_unavailable(format!("user repository unavailable: {message}"))
        }
        UserPersistenceError::Query { message } => {
            Error::internal(format!("user repository error: {message}"))
        }
        UserPersistenceError::DuplicateUsername { username } => {
            Error::conflict(format!("username {username} is already taken"))
        }
    }
}

fn map_hash_error(error: PasswordHashError) -> Error {
    Error::internal(error.to_string())
}

fn invalid_credentials() -> Error {
    Error::unauthorized("invalid credentials")
}

/// Account service implementing the login and signup driving ports.
#[derive(Clone)]
pub struct AccountService<R, H> {
    users: Arc<R>,
    hasher: Arc<H>,
}

impl<R, H> AccountService<R, H> {
    /// Build the service over a user store and a password hasher.
    pub fn new(users: Arc<R>, hasher: Arc<H>) -> Self {
        Self { users, hasher }
    }
}

impl<R, H> AccountService<R, H>
where
    H: PasswordHasher + 'static,
{
    /// Run a hashing job on the blocking pool so Argon2 never stalls a worker.
    async fn with_hasher<T, F>(&self, job: F) -> Result<T, Error>
    where
        T: Send + 'static,
        F: FnOnce(&H) -> Result<T, PasswordHashError> + Send + 'static,
    {
        let hasher = Arc::clone(&self.hasher);
        tokio::task::spawn_blocking(move || job(hasher.as_ref()))
            .await
            .map_err(|err| Error::internal(format!("password hashing task failed: {err}")))?
            .map_err(map_hash_error)
    }
}

#[async_trait]
impl<R, H> LoginService for AccountService<R, H>
where
    R: UserRepository,
    H: PasswordHasher + 'static,
{
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<UserId, Error> {
        // A username that could never have been registered cannot match.
        let Ok(username) = Username::new(credentials.username()) else {
            return Err(invalid_credentials());
        };

        let account = self
            .users
            .find_by_username(&username)
            .await
            .map_err(map_repository_error)?;

        let Some(account) = account else {
            warn!(%username, "login rejected: unknown username");
            return Err(invalid_credentials());
        };

        let password = Zeroizing::new(credentials.password().to_owned());
        let stored = account.password_hash;
        let matches = self
            .with_hasher(move |hasher| hasher.verify(&password, &stored))
            .await?;
        if !matches {
            warn!(%username, "login rejected: wrong password");
            return Err(invalid_credentials());
        }

        Ok(*account.user.id())
    }

    async fn session_user(&self, id: &UserId) -> Result<Option<User>, Error> {
        self.users.find_by_id(id).await.map_err(map_repository_error)
    }
}

#[async_trait]
impl<R, H> SignupService for AccountService<R, H>
where
    R: UserRepository,
    H: PasswordHasher + 'static,
{
    async fn signup(&self, credentials: &SignupCredentials) -> Result<User, Error> {
        let password = Zeroizing::new(credentials.password().to_owned());
        let password_hash = self
            .with_hasher(move |hasher| hasher.hash(&password))
            .await?;

        let user = User::new(UserId::random(), credentials.username().clone());
        let account = UserAccount {
            user: user.clone(),
            password_hash,
        };

        self.users
            .create(&account)
            .await
            .map_err(map_repository_error)?;

        info!(user_id = %user.id(), username = %user.username(), "account created");
        Ok(user)
    }
}
