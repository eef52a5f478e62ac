//! Account handlers: signup, login and logout.
//!
//! ```text
//! GET|POST /accounts/signup/
//! GET|POST /accounts/login/
//! POST     /accounts/logout/
//! ```
//!
//! Failed submissions re-render the form with `200` and a single
//! page-level message; individual validation errors are never echoed.

use actix_web::{get, post, web, HttpResponse};
use serde::Deserialize;
use tracing::debug;
use utoipa::IntoParams;

use crate::domain::{Error, ErrorCode, LoginCredentials, SignupCredentials};
use crate::inbound::http::forms::{LoginForm, SignupForm};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::views::{found, AccountFormView};
use crate::inbound::http::ApiResult;

/// Shown when a signup submission is rejected for any reason.
pub const SIGNUP_ERROR: &str = "Invalid sign up - try again";
/// Shown when a login submission is rejected for any reason.
pub const LOGIN_ERROR: &str = "Please enter a correct username and password.";
/// Landing page after signup or a login without `next`.
pub const AFTER_LOGIN_PATH: &str = "/puppies/";

/// Query string of the login page.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct NextQuery {
    /// Local path to continue to after logging in.
    pub next: Option<String>,
}

/// Accept `next` only when it is a local absolute path.
///
/// # Examples
/// ```
/// use puppy_collector::inbound::http::accounts::safe_next;
///
/// assert_eq!(safe_next(Some("/toys/")), Some("/toys/"));
/// assert_eq!(safe_next(Some("//evil.example/")), None);
/// assert_eq!(safe_next(Some("https://evil.example/")), None);
/// ```
pub fn safe_next(next: Option<&str>) -> Option<&str> {
    next.filter(|path| {
        path.starts_with('/')
            && !path.starts_with("//")
            && !path.starts_with("/\\")
            && !path.chars().any(char::is_control)
    })
}

fn rerender(view: AccountFormView) -> HttpResponse {
    HttpResponse::Ok().json(view)
}

/// Empty signup form.
#[utoipa::path(
    get,
    path = "/accounts/signup/",
    responses((status = 200, description = "Signup form", body = AccountFormView)),
    tags = ["accounts"],
    operation_id = "signupForm"
)]
#[get("/accounts/signup/")]
pub async fn signup_form() -> web::Json<AccountFormView> {
    web::Json(AccountFormView::default())
}

/// Create an account and log it in.
#[utoipa::path(
    post,
    path = "/accounts/signup/",
    request_body(content = SignupForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 302, description = "Account created; redirect to the puppy list"),
        (status = 200, description = "Rejected; form shown again", body = AccountFormView),
        (status = 503, description = "Service unavailable", body = Error)
    ),
    tags = ["accounts"],
    operation_id = "signup"
)]
#[post("/accounts/signup/")]
pub async fn signup(
    state: web::Data<HttpState>,
    session: SessionContext,
    form: web::Form<SignupForm>,
) -> ApiResult<HttpResponse> {
    let form = form.into_inner();
    let rejected = || {
        rerender(AccountFormView {
            error_message: SIGNUP_ERROR.to_owned(),
            ..AccountFormView::default()
        })
    };

    let credentials =
        match SignupCredentials::try_from_parts(&form.username, &form.password1, &form.password2) {
            Ok(credentials) => credentials,
            Err(reason) => {
                debug!(%reason, "signup rejected");
                return Ok(rejected());
            }
        };

    match state.signup.signup(&credentials).await {
        Ok(user) => {
            session.persist_user(user.id())?;
            Ok(found(AFTER_LOGIN_PATH))
        }
        Err(error) if error.code() == ErrorCode::Conflict => Ok(rejected()),
        Err(error) => Err(error),
    }
}

/// Login form.
#[utoipa::path(
    get,
    path = "/accounts/login/",
    params(NextQuery),
    responses((status = 200, description = "Login form", body = AccountFormView)),
    tags = ["accounts"],
    operation_id = "loginForm"
)]
#[get("/accounts/login/")]
pub async fn login_form(query: web::Query<NextQuery>) -> web::Json<AccountFormView> {
    web::Json(AccountFormView {
        next: safe_next(query.next.as_deref()).map(str::to_owned),
        ..AccountFormView::default()
    })
}

/// Authenticate and continue to `next`.
#[utoipa::path(
    post,
    path = "/accounts/login/",
    request_body(content = LoginForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 302, description = "Logged in; redirect to `next` or the puppy list"),
        (status = 200, description = "Rejected; form shown again", body = AccountFormView),
        (status = 503, description = "Service unavailable", body = Error)
    ),
    tags = ["accounts"],
    operation_id = "login"
)]
#[post("/accounts/login/")]
pub async fn login(
    state: web::Data<HttpState>,
    session: SessionContext,
    form: web::Form<LoginForm>,
) -> ApiResult<HttpResponse> {
    let form = form.into_inner();
    let next = safe_next(form.next.as_deref()).map(str::to_owned);
    let rejected = |username: &str, next: Option<String>| {
        rerender(AccountFormView {
            username: Some(username.trim().to_owned()),
            next,
            error_message: LOGIN_ERROR.to_owned(),
        })
    };

    let credentials = match LoginCredentials::try_from_parts(&form.username, &form.password) {
        Ok(credentials) => credentials,
        Err(_) => return Ok(rejected(&form.username, next)),
    };

    match state.login.authenticate(&credentials).await {
        Ok(user_id) => {
            session.persist_user(&user_id)?;
            Ok(found(next.as_deref().unwrap_or(AFTER_LOGIN_PATH)))
        }
        Err(error) if error.code() == ErrorCode::Unauthorized => {
            Ok(rejected(credentials.username(), next))
        }
        Err(error) => Err(error),
    }
}

/// End the session.
#[utoipa::path(
    post,
    path = "/accounts/logout/",
    responses((status = 302, description = "Session cleared; redirect home")),
    tags = ["accounts"],
    operation_id = "logout"
)]
#[post("/accounts/logout/")]
pub async fn logout(session: SessionContext) -> HttpResponse {
    session.clear();
    found("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::header::LOCATION;
    use actix_web::http::StatusCode;
    use actix_web::App;
    use mockall::predicate::always;
    use rstest::rstest;
    use serde_json::Value;

    use crate::domain::{User, UserId};
    use crate::inbound::http::test_utils::{test_session_middleware, MockPorts};

    const ADA: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";

    async fn post_form(ports: MockPorts, uri: &str, body: &str) -> actix_web::dev::ServiceResponse {
        let app = actix_web::test::init_service(
            App::new()
                .app_data(ports.into_state())
                .wrap(test_session_middleware())
                .service(signup)
                .service(login)
                .service(logout),
        )
        .await;
        let req = actix_web::test::TestRequest::post()
            .uri(uri)
            .insert_header(("content-type", "application/x-www-form-urlencoded"))
            .set_payload(body.to_owned())
            .to_request();
        actix_web::test::call_service(&app, req).await
    }

    fn location(res: &actix_web::dev::ServiceResponse) -> Option<&str> {
        res.headers().get(LOCATION).and_then(|v| v.to_str().ok())
    }

    #[rstest]
    #[case(None, None)]
    #[case(Some("/puppies/3/"), Some("/puppies/3/"))]
    #[case(Some("puppies/"), None)]
    #[case(Some("/\\evil.example"), None)]
    #[case(Some("/ok\nLocation: x"), None)]
    fn safe_next_keeps_only_local_paths(#[case] raw: Option<&str>, #[case] expected: Option<&str>) {
        assert_eq!(safe_next(raw), expected);
    }

    #[rstest]
    #[actix_web::test]
    async fn signup_with_mismatched_passwords_rerenders() {
        let mut ports = MockPorts::default();
        ports.signup.expect_signup().times(0);

        let res = post_form(
            ports,
            "/accounts/signup/",
            "username=ada&password1=tr0ub4dor&password2=tr0ub4dour",
        )
        .await;

        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = actix_web::test::read_body_json(res).await;
        assert_eq!(body["errorMessage"], SIGNUP_ERROR);
    }

    #[rstest]
    #[actix_web::test]
    async fn signup_taken_username_rerenders() {
        let mut ports = MockPorts::default();
        ports
            .signup
            .expect_signup()
            .times(1)
            .returning(|_| Err(Error::conflict("username taken")));

        let res = post_form(
            ports,
            "/accounts/signup/",
            "username=ada&password1=tr0ub4dor%26x&password2=tr0ub4dor%26x",
        )
        .await;

        assert_eq!(res.status(), StatusCode::OK);
    }

    #[rstest]
    #[actix_web::test]
    async fn signup_logs_in_and_redirects() {
        let mut ports = MockPorts::default();
        ports.signup.expect_signup().times(1).returning(|creds| {
            let id = UserId::new(ADA).expect("fixture id");
            Ok(User::new(id, creds.username().clone()))
        });

        let res = post_form(
            ports,
            "/accounts/signup/",
            "username=ada&password1=tr0ub4dor%26x&password2=tr0ub4dor%26x",
        )
        .await;

        assert_eq!(res.status(), StatusCode::FOUND);
        assert_eq!(location(&res), Some(AFTER_LOGIN_PATH));
        assert!(res.response().cookies().next().is_some());
    }

    #[rstest]
    #[actix_web::test]
    async fn failed_login_rerenders_without_401() {
        let mut ports = MockPorts::default();
        ports
            .login
            .expect_authenticate()
            .with(always())
            .returning(|_| Err(Error::unauthorized("invalid credentials")));

        let res = post_form(
            ports,
            "/accounts/login/",
            "username=ada&password=wrong&next=%2Ftoys%2F",
        )
        .await;

        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = actix_web::test::read_body_json(res).await;
        assert_eq!(body["errorMessage"], LOGIN_ERROR);
        assert_eq!(body["next"], "/toys/");
        assert_eq!(body["username"], "ada");
    }

    #[rstest]
    #[case("username=ada&password=pw&next=%2Ftoys%2F", "/toys/")]
    #[case("username=ada&password=pw&next=https%3A%2F%2Fevil.example%2F", AFTER_LOGIN_PATH)]
    #[case("username=ada&password=pw", AFTER_LOGIN_PATH)]
    #[actix_web::test]
    async fn login_redirects_to_safe_next(#[case] body: &str, #[case] expected: &str) {
        let mut ports = MockPorts::default();
        ports
            .login
            .expect_authenticate()
            .returning(|_| UserId::new(ADA).map_err(|e| Error::internal(e.to_string())));

        let res = post_form(ports, "/accounts/login/", body).await;

        assert_eq!(res.status(), StatusCode::FOUND);
        assert_eq!(location(&res), Some(expected));
    }

    #[rstest]
    #[actix_web::test]
    async fn login_propagates_infrastructure_failures() {
        let mut ports = MockPorts::default();
        ports
            .login
            .expect_authenticate()
            .returning(|_| Err(Error::service_unavailable("pool exhausted")));

        let res = post_form(ports, "/accounts/login/", "username=ada&password=pw").await;
        assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[rstest]
    #[actix_web::test]
    async fn logout_redirects_home() {
        let res = post_form(MockPorts::default(), "/accounts/logout/", "").await;
        assert_eq!(res.status(), StatusCode::FOUND);
        assert_eq!(location(&res), Some("/"));
    }
}
