//! Shared helpers for backend integration tests.
//!
//! Integration tests compile as separate crates under `backend/tests/`, so the
//! in-process site and per-user browser live here instead of being copied
//! into every suite. Each request builds a fresh Actix service over the same
//! shared state, so data and session keys persist across requests.

use actix_web::cookie::{Cookie, Key, SameSite};
use actix_web::http::StatusCode;
use actix_web::http::header::LOCATION;
use actix_web::{App, test, web};
use serde_json::Value;

use puppy_collector::Trace;
use puppy_collector::inbound::http::configure;
use puppy_collector::inbound::http::health::HealthState;
use puppy_collector::inbound::http::session_config::{SESSION_COOKIE_NAME, SessionSettings};
use puppy_collector::inbound::http::state::HttpState;

/// Password accepted by the signup validators.
pub const PASSWORD: &str = "kibble-and-biscuits";

/// What a test needs from one response.
#[derive(Debug)]
pub struct Snapshot {
    pub status: StatusCode,
    pub location: Option<String>,
    pub body: Option<Value>,
    session: Option<Cookie<'static>>,
}

impl Snapshot {
    /// JSON body, panicking with context when the response had none.
    pub fn json(&self) -> &Value {
        self.body.as_ref().expect("response should carry a JSON body")
    }
}

/// The application under test, sharing one state across requests.
#[derive(Clone)]
pub struct Site {
    state: web::Data<HttpState>,
    health: web::Data<HealthState>,
    session: SessionSettings,
}

impl Site {
    pub fn new(state: HttpState) -> Self {
        Self {
            state: web::Data::new(state),
            health: web::Data::new(HealthState::new()),
            session: SessionSettings {
                key: Key::generate(),
                cookie_secure: false,
                same_site: SameSite::Lax,
            },
        }
    }

    /// The same deployment after a restart: fresh state, same session key.
    pub fn restarted(&self, state: HttpState) -> Self {
        Self {
            state: web::Data::new(state),
            health: web::Data::new(HealthState::new()),
            session: self.session.clone(),
        }
    }

    /// Open a browser with an empty cookie jar.
    pub fn browser(&self) -> Browser {
        Browser {
            site: self.clone(),
            cookie: None,
        }
    }

    async fn send(&self, req: test::TestRequest) -> Snapshot {
        let app = test::init_service(
            App::new()
                .app_data(self.state.clone())
                .app_data(self.health.clone())
                .wrap(self.session.middleware())
                .wrap(Trace)
                .configure(configure),
        )
        .await;
        let res = test::call_service(&app, req.to_request()).await;

        let status = res.status();
        let location = res
            .headers()
            .get(LOCATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        let session = res
            .response()
            .cookies()
            .find(|cookie| cookie.name() == SESSION_COOKIE_NAME)
            .map(|cookie| cookie.into_owned());
        let bytes = test::read_body(res).await;
        let body = serde_json::from_slice(&bytes).ok();

        Snapshot {
            status,
            location,
            body,
            session,
        }
    }
}

/// One user agent with its own session cookie.
pub struct Browser {
    site: Site,
    cookie: Option<Cookie<'static>>,
}

impl Browser {
    async fn send(&mut self, mut req: test::TestRequest) -> Snapshot {
        if let Some(cookie) = &self.cookie {
            req = req.cookie(cookie.clone());
        }
        let snapshot = self.site.send(req).await;
        if let Some(cookie) = &snapshot.session {
            self.cookie = Some(cookie.clone());
        }
        snapshot
    }

    /// Keep the cookie jar but send later requests to `site`.
    pub fn visit(&mut self, site: &Site) {
        self.site = site.clone();
    }

    pub async fn get(&mut self, uri: &str) -> Snapshot {
        self.send(test::TestRequest::get().uri(uri)).await
    }

    pub async fn post(&mut self, uri: &str, form: &[(&str, &str)]) -> Snapshot {
        self.send(test::TestRequest::post().uri(uri).set_form(form))
            .await
    }

    /// Register `username` and keep the resulting session.
    pub async fn sign_up(&mut self, username: &str) -> Snapshot {
        self.post(
            "/accounts/signup/",
            &[
                ("username", username),
                ("password1", PASSWORD),
                ("password2", PASSWORD),
            ],
        )
        .await
    }

    /// Create a puppy and return its id, read back from the owner's list.
    pub async fn add_puppy(&mut self, name: &str, breed: &str, age: &str) -> i64 {
        let created = self
            .post(
                "/puppies/new/",
                &[("name", name), ("breed", breed), ("age", age)],
            )
            .await;
        assert_eq!(created.status, StatusCode::FOUND, "puppy should be created");
        let list = self.get("/puppies/").await;
        list.json()["puppies"]
            .as_array()
            .and_then(|puppies| puppies.iter().find(|puppy| puppy["name"] == name))
            .and_then(|puppy| puppy["id"].as_i64())
            .expect("created puppy should be listed")
    }

    /// Create a toy and return its id, read from the redirect target.
    pub async fn add_toy(&mut self, name: &str, color: &str) -> i64 {
        let created = self
            .post("/toys/new/", &[("name", name), ("color", color)])
            .await;
        created
            .location
            .as_deref()
            .and_then(|location| location.strip_prefix("/toys/"))
            .and_then(|rest| rest.trim_end_matches('/').parse().ok())
            .expect("toy redirect should carry its id")
    }

    /// Names of the toys on a puppy's detail page.
    pub async fn toy_names(&mut self, puppy: i64) -> Vec<String> {
        let detail = self.get(&format!("/puppies/{puppy}/")).await;
        names(&detail.json()["toys"])
    }
}

/// Collect the `name` of every object in a JSON array.
pub fn names(items: &Value) -> Vec<String> {
    items
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item["name"].as_str().map(str::to_owned))
                .collect()
        })
        .unwrap_or_default()
}
