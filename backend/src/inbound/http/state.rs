//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    LoginService, PuppiesCommand, PuppiesQuery, SignupService, ToysCommand, ToysQuery,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub login: Arc<dyn LoginService>,
    pub signup: Arc<dyn SignupService>,
    pub puppies: Arc<dyn PuppiesCommand>,
    pub puppies_query: Arc<dyn PuppiesQuery>,
    pub toys: Arc<dyn ToysCommand>,
    pub toys_query: Arc<dyn ToysQuery>,
}
