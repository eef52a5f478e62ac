//! HTTP inbound adapter: page, form and probe handlers.

pub mod accounts;
pub mod error;
pub mod forms;
pub mod health;
pub mod pages;
pub mod puppies;
pub mod session;
pub mod session_config;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod toys;
pub mod views;

use actix_web::web;

pub use error::ApiResult;

/// Register every application route.
///
/// Literal segments such as `/puppies/new/` are registered before the
/// `{id}` patterns they would otherwise be captured by. The caller supplies
/// [`state::HttpState`], [`health::HealthState`] and the session middleware.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use puppy_collector::inbound::http::configure;
///
/// let _app = App::new().configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(pages::home)
        .service(pages::about)
        .service(health::ready)
        .service(health::live)
        .service(accounts::signup_form)
        .service(accounts::signup)
        .service(accounts::login_form)
        .service(accounts::login)
        .service(accounts::logout)
        .service(puppies::list_puppies)
        .service(puppies::new_puppy_form)
        .service(puppies::create_puppy)
        .service(puppies::puppy_detail)
        .service(puppies::add_feeding)
        .service(puppies::edit_puppy_form)
        .service(puppies::update_puppy)
        .service(puppies::confirm_delete_puppy)
        .service(puppies::delete_puppy)
        .service(puppies::assoc_toy)
        .service(puppies::unassoc_toy)
        .service(toys::list_toys)
        .service(toys::new_toy_form)
        .service(toys::create_toy)
        .service(toys::toy_detail)
        .service(toys::edit_toy_form)
        .service(toys::update_toy)
        .service(toys::confirm_delete_toy)
        .service(toys::delete_toy);
}
