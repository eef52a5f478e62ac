//! Puppy handlers.
//!
//! ```text
//! GET      /puppies/
//! GET|POST /puppies/new/
//! GET      /puppies/{id}/
//! GET|POST /puppies/{id}/edit/
//! GET|POST /puppies/{id}/delete/
//! POST     /puppies/{id}/add_feeding/
//! POST     /puppies/{id}/assoc_toy/{toy_id}/
//! POST     /puppies/{id}/unassoc_toy/{toy_id}/
//! ```
//!
//! Every handler requires a session. Edit and delete answer `404` to anyone
//! but the owner.

use actix_web::{get, post, web, HttpResponse};
use tracing::debug;

use crate::domain::{Error, PuppyId, ToyId};
use crate::inbound::http::forms::{FeedingForm, PuppyEditForm, PuppyForm};
use crate::inbound::http::session::AuthenticatedUser;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::views::{
    found, puppy_url, ConfirmDeleteView, FormView, PuppyDetailView, PuppyListView,
};
use crate::inbound::http::ApiResult;

const PUPPIES_PATH: &str = "/puppies/";

/// Puppies owned by the caller.
#[utoipa::path(
    get,
    path = "/puppies/",
    responses(
        (status = 200, description = "Owned puppies", body = PuppyListView),
        (status = 302, description = "Not logged in; redirect to login")
    ),
    tags = ["puppies"],
    operation_id = "listPuppies"
)]
#[get("/puppies/")]
pub async fn list_puppies(
    state: web::Data<HttpState>,
    user: AuthenticatedUser,
) -> ApiResult<web::Json<PuppyListView>> {
    let puppies = state.puppies_query.list_owned(user.id()).await?;
    Ok(web::Json(PuppyListView { puppies }))
}

/// Empty puppy form.
#[utoipa::path(
    get,
    path = "/puppies/new/",
    responses((status = 200, description = "Puppy form", body = FormView<PuppyForm>)),
    tags = ["puppies"],
    operation_id = "newPuppyForm"
)]
#[get("/puppies/new/")]
pub async fn new_puppy_form(_user: AuthenticatedUser) -> web::Json<FormView<PuppyForm>> {
    web::Json(FormView::blank(PuppyForm::default()))
}

/// Create a puppy owned by the caller.
#[utoipa::path(
    post,
    path = "/puppies/new/",
    request_body(content = PuppyForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 302, description = "Created; redirect to the puppy list"),
        (status = 200, description = "Invalid; form with errors", body = FormView<PuppyForm>)
    ),
    tags = ["puppies"],
    operation_id = "createPuppy"
)]
#[post("/puppies/new/")]
pub async fn create_puppy(
    state: web::Data<HttpState>,
    user: AuthenticatedUser,
    form: web::Form<PuppyForm>,
) -> ApiResult<HttpResponse> {
    let form = form.into_inner();
    match form.validate() {
        Ok(draft) => {
            state.puppies.create(user.id(), draft).await?;
            Ok(found(PUPPIES_PATH))
        }
        Err(errors) => Ok(HttpResponse::Ok().json(FormView::invalid(form, errors))),
    }
}

/// Puppy with its feedings, toys and the toys it could still get.
#[utoipa::path(
    get,
    path = "/puppies/{id}/",
    params(("id" = i64, Path, description = "Puppy id")),
    responses(
        (status = 200, description = "Puppy detail", body = PuppyDetailView),
        (status = 404, description = "No such puppy", body = Error)
    ),
    tags = ["puppies"],
    operation_id = "puppyDetail"
)]
#[get("/puppies/{id}/")]
pub async fn puppy_detail(
    state: web::Data<HttpState>,
    _user: AuthenticatedUser,
    path: web::Path<i64>,
) -> ApiResult<web::Json<PuppyDetailView>> {
    let detail = state.puppies_query.detail(PuppyId(path.into_inner())).await?;
    Ok(web::Json(PuppyDetailView::from(detail)))
}

/// Record a meal; invalid submissions are dropped.
#[utoipa::path(
    post,
    path = "/puppies/{id}/add_feeding/",
    params(("id" = i64, Path, description = "Puppy id")),
    request_body(content = FeedingForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 302, description = "Redirect to the puppy detail page"),
        (status = 404, description = "No such puppy", body = Error)
    ),
    tags = ["puppies"],
    operation_id = "addFeeding"
)]
#[post("/puppies/{id}/add_feeding/")]
pub async fn add_feeding(
    state: web::Data<HttpState>,
    _user: AuthenticatedUser,
    path: web::Path<i64>,
    form: web::Form<FeedingForm>,
) -> ApiResult<HttpResponse> {
    let id = PuppyId(path.into_inner());
    match form.validate() {
        Ok(draft) => {
            state.puppies.add_feeding(id, draft).await?;
        }
        Err(errors) => debug!(puppy = %id, %errors, "feeding dropped"),
    }
    Ok(found(puppy_url(id)))
}

/// Prefilled edit form.
#[utoipa::path(
    get,
    path = "/puppies/{id}/edit/",
    params(("id" = i64, Path, description = "Puppy id")),
    responses(
        (status = 200, description = "Edit form", body = FormView<PuppyEditForm>),
        (status = 404, description = "No such puppy owned by the caller", body = Error)
    ),
    tags = ["puppies"],
    operation_id = "editPuppyForm"
)]
#[get("/puppies/{id}/edit/")]
pub async fn edit_puppy_form(
    state: web::Data<HttpState>,
    user: AuthenticatedUser,
    path: web::Path<i64>,
) -> ApiResult<web::Json<FormView<PuppyEditForm>>> {
    let puppy = state
        .puppies_query
        .find_owned(user.id(), PuppyId(path.into_inner()))
        .await?;
    Ok(web::Json(FormView::blank(PuppyEditForm::from(&puppy))))
}

/// Update breed, description and age in place.
#[utoipa::path(
    post,
    path = "/puppies/{id}/edit/",
    params(("id" = i64, Path, description = "Puppy id")),
    request_body(content = PuppyEditForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 302, description = "Updated; redirect to the puppy detail page"),
        (status = 200, description = "Invalid; form with errors", body = FormView<PuppyEditForm>),
        (status = 404, description = "No such puppy owned by the caller", body = Error)
    ),
    tags = ["puppies"],
    operation_id = "updatePuppy"
)]
#[post("/puppies/{id}/edit/")]
pub async fn update_puppy(
    state: web::Data<HttpState>,
    user: AuthenticatedUser,
    path: web::Path<i64>,
    form: web::Form<PuppyEditForm>,
) -> ApiResult<HttpResponse> {
    let id = PuppyId(path.into_inner());
    let form = form.into_inner();
    match form.validate() {
        Ok(changes) => {
            state.puppies.update(user.id(), id, changes).await?;
            Ok(found(puppy_url(id)))
        }
        Err(errors) => {
            // Only the owner may learn the puppy exists.
            state.puppies_query.find_owned(user.id(), id).await?;
            Ok(HttpResponse::Ok().json(FormView::invalid(form, errors)))
        }
    }
}

/// Confirmation page before deleting.
#[utoipa::path(
    get,
    path = "/puppies/{id}/delete/",
    params(("id" = i64, Path, description = "Puppy id")),
    responses(
        (status = 200, description = "Delete confirmation", body = ConfirmDeleteView<crate::domain::Puppy>),
        (status = 404, description = "No such puppy owned by the caller", body = Error)
    ),
    tags = ["puppies"],
    operation_id = "confirmDeletePuppy"
)]
#[get("/puppies/{id}/delete/")]
pub async fn confirm_delete_puppy(
    state: web::Data<HttpState>,
    user: AuthenticatedUser,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    let id = PuppyId(path.into_inner());
    let puppy = state.puppies_query.find_owned(user.id(), id).await?;
    Ok(HttpResponse::Ok().json(ConfirmDeleteView {
        object: puppy,
        cancel_url: puppy_url(id),
    }))
}

/// Delete the puppy with its feedings and toy links.
#[utoipa::path(
    post,
    path = "/puppies/{id}/delete/",
    params(("id" = i64, Path, description = "Puppy id")),
    responses(
        (status = 302, description = "Deleted; redirect to the puppy list"),
        (status = 404, description = "No such puppy owned by the caller", body = Error)
    ),
    tags = ["puppies"],
    operation_id = "deletePuppy"
)]
#[post("/puppies/{id}/delete/")]
pub async fn delete_puppy(
    state: web::Data<HttpState>,
    user: AuthenticatedUser,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    state
        .puppies
        .delete(user.id(), PuppyId(path.into_inner()))
        .await?;
    Ok(found(PUPPIES_PATH))
}

/// Give a toy to a puppy. Repeating it changes nothing.
#[utoipa::path(
    post,
    path = "/puppies/{id}/assoc_toy/{toy_id}/",
    params(
        ("id" = i64, Path, description = "Puppy id"),
        ("toy_id" = i64, Path, description = "Toy id")
    ),
    responses(
        (status = 302, description = "Redirect to the puppy detail page"),
        (status = 404, description = "No such puppy or toy", body = Error)
    ),
    tags = ["puppies"],
    operation_id = "assocToy"
)]
#[post("/puppies/{id}/assoc_toy/{toy_id}/")]
pub async fn assoc_toy(
    state: web::Data<HttpState>,
    _user: AuthenticatedUser,
    path: web::Path<(i64, i64)>,
) -> ApiResult<HttpResponse> {
    let (id, toy) = path.into_inner();
    let id = PuppyId(id);
    state.puppies.assoc_toy(id, ToyId(toy)).await?;
    Ok(found(puppy_url(id)))
}

/// Take a toy away from a puppy. Repeating it changes nothing.
#[utoipa::path(
    post,
    path = "/puppies/{id}/unassoc_toy/{toy_id}/",
    params(
        ("id" = i64, Path, description = "Puppy id"),
        ("toy_id" = i64, Path, description = "Toy id")
    ),
    responses(
        (status = 302, description = "Redirect to the puppy detail page"),
        (status = 404, description = "No such puppy", body = Error)
    ),
    tags = ["puppies"],
    operation_id = "unassocToy"
)]
#[post("/puppies/{id}/unassoc_toy/{toy_id}/")]
pub async fn unassoc_toy(
    state: web::Data<HttpState>,
    _user: AuthenticatedUser,
    path: web::Path<(i64, i64)>,
) -> ApiResult<HttpResponse> {
    let (id, toy) = path.into_inner();
    let id = PuppyId(id);
    state.puppies.unassoc_toy(id, ToyId(toy)).await?;
    Ok(found(puppy_url(id)))
}

#[cfg(test)]
#[path = "puppies_tests.rs"]
mod tests;
