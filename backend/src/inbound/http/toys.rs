//! Toy handlers.
//!
//! ```text
//! GET      /toys/
//! GET|POST /toys/new/
//! GET      /toys/{id}/
//! GET|POST /toys/{id}/edit/
//! GET|POST /toys/{id}/delete/
//! ```
//!
//! Toys are shared: any logged-in user may manage any toy.

use actix_web::{get, post, web, HttpResponse};

use crate::domain::{Error, Toy, ToyId};
use crate::inbound::http::forms::ToyForm;
use crate::inbound::http::session::AuthenticatedUser;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::views::{found, toy_url, ConfirmDeleteView, FormView, ToyListView};
use crate::inbound::http::ApiResult;

const TOYS_PATH: &str = "/toys/";

/// Every toy, by name.
#[utoipa::path(
    get,
    path = "/toys/",
    responses((status = 200, description = "All toys", body = ToyListView)),
    tags = ["toys"],
    operation_id = "listToys"
)]
#[get("/toys/")]
pub async fn list_toys(
    state: web::Data<HttpState>,
    _user: AuthenticatedUser,
) -> ApiResult<web::Json<ToyListView>> {
    let toys = state.toys_query.list().await?;
    Ok(web::Json(ToyListView { toys }))
}

/// Empty toy form.
#[utoipa::path(
    get,
    path = "/toys/new/",
    responses((status = 200, description = "Toy form", body = FormView<ToyForm>)),
    tags = ["toys"],
    operation_id = "newToyForm"
)]
#[get("/toys/new/")]
pub async fn new_toy_form(_user: AuthenticatedUser) -> web::Json<FormView<ToyForm>> {
    web::Json(FormView::blank(ToyForm::default()))
}

#[utoipa::path(
    post,
    path = "/toys/new/",
    request_body(content = ToyForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 302, description = "Created; redirect to the toy"),
        (status = 200, description = "Invalid; form with errors", body = FormView<ToyForm>)
    ),
    tags = ["toys"],
    operation_id = "createToy"
)]
#[post("/toys/new/")]
pub async fn create_toy(
    state: web::Data<HttpState>,
    _user: AuthenticatedUser,
    form: web::Form<ToyForm>,
) -> ApiResult<HttpResponse> {
    let form = form.into_inner();
    match form.validate() {
        Ok(draft) => {
            let toy = state.toys.create(draft).await?;
            Ok(found(toy_url(toy.id)))
        }
        Err(errors) => Ok(HttpResponse::Ok().json(FormView::invalid(form, errors))),
    }
}

#[utoipa::path(
    get,
    path = "/toys/{id}/",
    params(("id" = i64, Path, description = "Toy id")),
    responses(
        (status = 200, description = "Toy", body = Toy),
        (status = 404, description = "No such toy", body = Error)
    ),
    tags = ["toys"],
    operation_id = "toyDetail"
)]
#[get("/toys/{id}/")]
pub async fn toy_detail(
    state: web::Data<HttpState>,
    _user: AuthenticatedUser,
    path: web::Path<i64>,
) -> ApiResult<web::Json<Toy>> {
    let toy = state.toys_query.get(ToyId(path.into_inner())).await?;
    Ok(web::Json(toy))
}

#[utoipa::path(
    get,
    path = "/toys/{id}/edit/",
    params(("id" = i64, Path, description = "Toy id")),
    responses(
        (status = 200, description = "Prefilled toy form", body = FormView<ToyForm>),
        (status = 404, description = "No such toy", body = Error)
    ),
    tags = ["toys"],
    operation_id = "editToyForm"
)]
#[get("/toys/{id}/edit/")]
pub async fn edit_toy_form(
    state: web::Data<HttpState>,
    _user: AuthenticatedUser,
    path: web::Path<i64>,
) -> ApiResult<web::Json<FormView<ToyForm>>> {
    let toy = state.toys_query.get(ToyId(path.into_inner())).await?;
    Ok(web::Json(FormView::blank(ToyForm::from(&toy))))
}

#[utoipa::path(
    post,
    path = "/toys/{id}/edit/",
    params(("id" = i64, Path, description = "Toy id")),
    request_body(content = ToyForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 302, description = "Updated; redirect to the toy"),
        (status = 200, description = "Invalid; form with errors", body = FormView<ToyForm>),
        (status = 404, description = "No such toy", body = Error)
    ),
    tags = ["toys"],
    operation_id = "updateToy"
)]
#[post("/toys/{id}/edit/")]
pub async fn update_toy(
    state: web::Data<HttpState>,
    _user: AuthenticatedUser,
    path: web::Path<i64>,
    form: web::Form<ToyForm>,
) -> ApiResult<HttpResponse> {
    let id = ToyId(path.into_inner());
    let form = form.into_inner();
    match form.validate() {
        Ok(draft) => {
            state.toys.update(id, draft).await?;
            Ok(found(toy_url(id)))
        }
        Err(errors) => {
            state.toys_query.get(id).await?;
            Ok(HttpResponse::Ok().json(FormView::invalid(form, errors)))
        }
    }
}

#[utoipa::path(
    get,
    path = "/toys/{id}/delete/",
    params(("id" = i64, Path, description = "Toy id")),
    responses(
        (status = 200, description = "Delete confirmation", body = ConfirmDeleteView<Toy>),
        (status = 404, description = "No such toy", body = Error)
    ),
    tags = ["toys"],
    operation_id = "confirmDeleteToy"
)]
#[get("/toys/{id}/delete/")]
pub async fn confirm_delete_toy(
    state: web::Data<HttpState>,
    _user: AuthenticatedUser,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    let id = ToyId(path.into_inner());
    let toy = state.toys_query.get(id).await?;
    Ok(HttpResponse::Ok().json(ConfirmDeleteView {
        object: toy,
        cancel_url: toy_url(id),
    }))
}

/// Delete a toy, taking it away from every puppy.
#[utoipa::path(
    post,
    path = "/toys/{id}/delete/",
    params(("id" = i64, Path, description = "Toy id")),
    responses(
        (status = 302, description = "Deleted; redirect to the toy list"),
        (status = 404, description = "No such toy", body = Error)
    ),
    tags = ["toys"],
    operation_id = "deleteToy"
)]
#[post("/toys/{id}/delete/")]
pub async fn delete_toy(
    state: web::Data<HttpState>,
    _user: AuthenticatedUser,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    state.toys.delete(ToyId(path.into_inner())).await?;
    Ok(found(TOYS_PATH))
}
