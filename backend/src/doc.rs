//! OpenAPI document for the puppy collector.
//!
//! Registers every handler from the inbound HTTP layer plus the domain and
//! view-model schemas they return. Swagger UI serves it under `/docs` in
//! debug builds.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::domain::{Error, ErrorCode, Feeding, FieldErrors, Meal, Puppy, Toy, User};
use crate::inbound::http::health::ProbeStatus;
use crate::inbound::http::session_config::SESSION_COOKIE_NAME;
use crate::inbound::http::views::{
    AccountFormView, MealChoice, PageView, PuppyDetailView, PuppyListView, ToyListView,
};

struct SessionCookieAddon;

impl Modify for SessionCookieAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                SESSION_COOKIE_NAME,
                "Encrypted session cookie issued by signup and login.",
            ))),
        );
    }
}

/// OpenAPI document for every route.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SessionCookieAddon),
    info(
        title = "Puppy Collector",
        description = "Track puppies, their meals and their toys. Pages return JSON view models; form posts redirect."
    ),
    security(("SessionCookie" = [])),
    paths(
        crate::inbound::http::pages::home,
        crate::inbound::http::pages::about,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
        crate::inbound::http::accounts::signup_form,
        crate::inbound::http::accounts::signup,
        crate::inbound::http::accounts::login_form,
        crate::inbound::http::accounts::login,
        crate::inbound::http::accounts::logout,
        crate::inbound::http::puppies::list_puppies,
        crate::inbound::http::puppies::new_puppy_form,
        crate::inbound::http::puppies::create_puppy,
        crate::inbound::http::puppies::puppy_detail,
        crate::inbound::http::puppies::add_feeding,
        crate::inbound::http::puppies::edit_puppy_form,
        crate::inbound::http::puppies::update_puppy,
        crate::inbound::http::puppies::confirm_delete_puppy,
        crate::inbound::http::puppies::delete_puppy,
        crate::inbound::http::puppies::assoc_toy,
        crate::inbound::http::puppies::unassoc_toy,
        crate::inbound::http::toys::list_toys,
        crate::inbound::http::toys::new_toy_form,
        crate::inbound::http::toys::create_toy,
        crate::inbound::http::toys::toy_detail,
        crate::inbound::http::toys::edit_toy_form,
        crate::inbound::http::toys::update_toy,
        crate::inbound::http::toys::confirm_delete_toy,
        crate::inbound::http::toys::delete_toy,
    ),
    components(schemas(
        Error,
        ErrorCode,
        FieldErrors,
        User,
        Puppy,
        Toy,
        Feeding,
        Meal,
        MealChoice,
        PageView,
        ProbeStatus,
        AccountFormView,
        PuppyListView,
        PuppyDetailView,
        ToyListView,
    )),
    tags(
        (name = "pages", description = "Public pages"),
        (name = "accounts", description = "Signup, login and logout"),
        (name = "puppies", description = "Puppies, their feedings and toys"),
        (name = "toys", description = "The shared toy box"),
        (name = "health", description = "Probes for orchestration")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use utoipa::openapi::schema::Schema;
    use utoipa::openapi::RefOr;

    fn object_fields(name: &str) -> Vec<String> {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        match schemas.get(name).expect("schema registered") {
            RefOr::T(Schema::Object(obj)) => obj.properties.keys().cloned().collect(),
            _ => panic!("expected Object schema for {name}"),
        }
    }

    #[rstest]
    fn error_schema_exposes_envelope_fields() {
        let fields = object_fields("Error");
        for field in ["code", "message", "traceId", "details"] {
            assert!(fields.iter().any(|f| f == field), "missing {field}");
        }
    }

    #[rstest]
    fn puppy_schema_hides_owner() {
        let fields = object_fields("Puppy");
        assert!(fields.iter().any(|f| f == "breed"));
        assert!(!fields.iter().any(|f| f == "owner"));
    }

    #[rstest]
    #[case("/puppies/{id}/add_feeding/")]
    #[case("/accounts/login/")]
    #[case("/toys/{id}/delete/")]
    fn routes_are_documented(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path));
    }
}
