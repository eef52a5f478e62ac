//! Session helpers to keep HTTP handlers free of framework-specific logic.
//!
//! [`SessionContext`] wraps the Actix session with domain-friendly operations.
//! [`AuthenticatedUser`] is the access-control gate: extracting it from a
//! request without a valid session short-circuits with a `302` to the login
//! page carrying the original path as `next`. A session naming a user that no
//! longer exists is purged and treated the same way.

use actix_session::Session;
use actix_web::error::InternalError;
use actix_web::http::header::LOCATION;
use actix_web::{dev::Payload, web, FromRequest, HttpRequest, HttpResponse};
use futures_util::future::LocalBoxFuture;

use crate::domain::{Error, UserId};

use super::state::HttpState;

pub(crate) const USER_ID_KEY: &str = "user_id";

/// Path of the login form.
pub const LOGIN_PATH: &str = "/accounts/login/";

/// Newtype wrapper that exposes higher-level session operations.
#[derive(Clone)]
pub struct SessionContext(Session);

impl SessionContext {
    /// Wrap an Actix session.
    pub fn new(session: Session) -> Self {
        Self(session)
    }

    /// Persist the authenticated user's id, rotating the session first.
    pub fn persist_user(&self, user_id: &UserId) -> Result<(), Error> {
        self.0.renew();
        self.0
            .insert(USER_ID_KEY, user_id.to_string())
            .map_err(|error| Error::internal(format!("failed to persist session: {error}")))
    }

    /// Fetch the current user id from the session, if present.
    ///
    /// A malformed id is treated as no session at all.
    pub fn user_id(&self) -> Result<Option<UserId>, Error> {
        let id = self
            .0
            .get::<String>(USER_ID_KEY)
            .map_err(|error| Error::internal(format!("failed to read session: {error}")))?;
        Ok(id.and_then(|raw| match UserId::new(raw) {
            Ok(id) => Some(id),
            Err(error) => {
                tracing::warn!("invalid user id in session cookie: {error}");
                None
            }
        }))
    }

    /// Drop every value and expire the cookie.
    pub fn clear(&self) {
        self.0.purge();
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = Session::from_request(req, payload);
        Box::pin(async move { fut.await.map(SessionContext::new) })
    }
}

/// Identity of the logged-in caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedUser(pub UserId);

impl AuthenticatedUser {
    /// Identifier of the caller's account.
    pub fn id(&self) -> &UserId {
        &self.0
    }
}

/// Build the login URL that returns to `next` after authenticating.
///
/// # Examples
/// ```
/// use puppy_collector::inbound::http::session::login_redirect_target;
///
/// assert_eq!(
///     login_redirect_target("/puppies/3/?tab=toys"),
///     "/accounts/login/?next=%2Fpuppies%2F3%2F%3Ftab%3Dtoys"
/// );
/// ```
pub fn login_redirect_target(next: &str) -> String {
    match serde_urlencoded::to_string([("next", next)]) {
        Ok(query) => format!("{LOGIN_PATH}?{query}"),
        Err(_) => LOGIN_PATH.to_owned(),
    }
}

fn login_redirect(req: &HttpRequest) -> actix_web::Error {
    let next = req
        .uri()
        .path_and_query()
        .map_or_else(|| req.path().to_owned(), |pq| pq.as_str().to_owned());
    let response = HttpResponse::Found()
        .insert_header((LOCATION, login_redirect_target(&next)))
        .finish();
    InternalError::from_response("login required", response).into()
}

impl FromRequest for AuthenticatedUser {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = SessionContext::from_request(req, payload);
        let state = req.app_data::<web::Data<HttpState>>().cloned();
        let req = req.clone();
        Box::pin(async move {
            let session = fut.await?;
            let Some(id) = session.user_id()? else {
                return Err(login_redirect(&req));
            };
            let state =
                state.ok_or_else(|| Error::internal("HTTP state is not registered"))?;
            if state.login.session_user(&id).await?.is_none() {
                tracing::warn!(user_id = %id, "session names an unknown user; purging");
                session.clear();
                return Err(login_redirect(&req));
            }
            Ok(Self(id))
        })
    }
}
