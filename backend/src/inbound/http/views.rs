//! JSON view models returned by page handlers, plus the redirect helper.

use actix_web::http::header::LOCATION;
use actix_web::HttpResponse;
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{Feeding, FieldErrors, Meal, Puppy, PuppyDetail, Toy};

/// `302 Found` pointing at `location`.
pub fn found(location: impl AsRef<str>) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((LOCATION, location.as_ref()))
        .finish()
}

/// Detail page path for a puppy, e.g. `/puppies/3/`.
pub fn puppy_url(puppy: impl std::fmt::Display) -> String {
    format!("/puppies/{puppy}/")
}

/// Detail page path for a toy, e.g. `/toys/7/`.
pub fn toy_url(toy: impl std::fmt::Display) -> String {
    format!("/toys/{toy}/")
}

/// Static page content.
#[derive(Debug, Serialize, ToSchema)]
pub struct PageView {
    pub title: &'static str,
    pub body: &'static str,
}

/// A form with the values to show and any per-field errors.
#[derive(Debug, Serialize, ToSchema)]
pub struct FormView<T> {
    pub form: T,
    pub errors: FieldErrors,
}

impl<T> FormView<T> {
    /// A form page with no errors yet.
    pub fn blank(form: T) -> Self {
        Self {
            form,
            errors: FieldErrors::default(),
        }
    }

    /// Re-render `form` with its field errors.
    pub fn invalid(form: T, errors: FieldErrors) -> Self {
        Self { form, errors }
    }
}

/// Confirmation page shown before deleting `object`.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmDeleteView<T> {
    pub object: T,
    pub cancel_url: String,
}

/// Account forms carry one page-level message instead of field errors.
#[derive(Debug, Default, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AccountFormView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    pub error_message: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PuppyListView {
    pub puppies: Vec<Puppy>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ToyListView {
    pub toys: Vec<Toy>,
}

/// A selectable meal for the feeding form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct MealChoice {
    pub code: &'static str,
    pub label: &'static str,
}

impl From<Meal> for MealChoice {
    fn from(meal: Meal) -> Self {
        Self {
            code: meal.code(),
            label: meal.label(),
        }
    }
}

/// Everything the puppy detail page shows.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PuppyDetailView {
    pub puppy: Puppy,
    pub feedings: Vec<Feeding>,
    pub toys: Vec<Toy>,
    /// Toys not yet given to this puppy.
    pub available_toys: Vec<Toy>,
    pub meal_choices: Vec<MealChoice>,
    pub fed_for_today: bool,
}

impl From<PuppyDetail> for PuppyDetailView {
    fn from(detail: PuppyDetail) -> Self {
        Self {
            puppy: detail.puppy,
            feedings: detail.feedings,
            toys: detail.toys,
            available_toys: detail.available_toys,
            meal_choices: Meal::ALL.into_iter().map(MealChoice::from).collect(),
            fed_for_today: detail.fed_for_today,
        }
    }
}
