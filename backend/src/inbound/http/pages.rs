//! Public static pages.
//!
//! ```text
//! GET /
//! GET /about/
//! ```

use actix_web::{get, web};

use super::views::PageView;

const HOME: PageView = PageView {
    title: "Puppy Collector",
    body: "Keep track of your puppies, what they eat and what they play with.",
};

const ABOUT: PageView = PageView {
    title: "About",
    body: "Sign up, add your puppies, log every meal and hand out toys.",
};

/// Landing page.
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Home page", body = PageView)),
    tags = ["pages"],
    operation_id = "home"
)]
#[get("/")]
pub async fn home() -> web::Json<PageView> {
    web::Json(HOME)
}

/// About page.
#[utoipa::path(
    get,
    path = "/about/",
    responses((status = 200, description = "About page", body = PageView)),
    tags = ["pages"],
    operation_id = "about"
)]
#[get("/about/")]
pub async fn about() -> web::Json<PageView> {
    web::Json(ABOUT)
}
