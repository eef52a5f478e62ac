//! Test helpers for inbound HTTP components.

use actix_session::{storage::CookieSessionStore, SessionMiddleware};
use actix_web::cookie::{Cookie, Key, SameSite};
use actix_web::dev::ServiceResponse;
use actix_web::{web, HttpResponse};
use std::sync::Arc;

use super::session::SessionContext;
use super::session_config::{SessionSettings, SESSION_COOKIE_NAME};
use super::state::HttpState;
use super::ApiResult;
use crate::domain::ports::{
    MockLoginService, MockPuppiesCommand, MockPuppiesQuery, MockSignupService, MockToysCommand,
    MockToysQuery,
};
use crate::domain::{Error, User, UserId, Username};

/// Session middleware with a fresh key and the `Secure` flag off.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionSettings {
        key: Key::generate(),
        cookie_secure: false,
        same_site: SameSite::Lax,
    }
    .middleware()
}

/// Extract the session cookie set by `response`.
pub fn session_cookie<B>(response: &ServiceResponse<B>) -> Cookie<'static> {
    response
        .response()
        .cookies()
        .find(|cookie| cookie.name() == SESSION_COOKIE_NAME)
        .map(Cookie::into_owned)
        .expect("session cookie set")
}

/// Mocks for every driving port, turned into [`HttpState`] once primed.
///
/// The default login mock resolves every session user id to an account, so
/// protected handlers can be exercised after [`login_as`].
pub struct MockPorts {
    pub login: MockLoginService,
    pub signup: MockSignupService,
    pub puppies: MockPuppiesCommand,
    pub puppies_query: MockPuppiesQuery,
    pub toys: MockToysCommand,
    pub toys_query: MockToysQuery,
}

impl Default for MockPorts {
    fn default() -> Self {
        let mut login = MockLoginService::new();
        login.expect_session_user().returning(|id| {
            let username = Username::new("tester").expect("fixture username");
            Ok(Some(User::new(*id, username)))
        });
        Self {
            login,
            signup: MockSignupService::new(),
            puppies: MockPuppiesCommand::new(),
            puppies_query: MockPuppiesQuery::new(),
            toys: MockToysCommand::new(),
            toys_query: MockToysQuery::new(),
        }
    }
}

impl MockPorts {
    pub fn into_state(self) -> web::Data<HttpState> {
        web::Data::new(HttpState {
            login: Arc::new(self.login),
            signup: Arc::new(self.signup),
            puppies: Arc::new(self.puppies),
            puppies_query: Arc::new(self.puppies_query),
            toys: Arc::new(self.toys),
            toys_query: Arc::new(self.toys_query),
        })
    }
}

/// Route that logs `user` in, for tests of protected handlers.
pub async fn login_as(user: web::Path<String>, session: SessionContext) -> ApiResult<HttpResponse> {
    let id = UserId::new(user.as_str()).map_err(|err| Error::invalid_request(err.to_string()))?;
    session.persist_user(&id)?;
    Ok(HttpResponse::Ok().finish())
}

pub const LOGIN_AS_PATH: &str = "/test/login-as/{user}";
