//! Domain primitives, aggregates and services.
//!
//! Purpose: Define strongly typed domain entities used by the HTTP and
//! persistence layers, plus the services implementing the driving ports.
//! Form constructors validate raw strings so adapters never hand unchecked
//! input to a port.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic error payload.
//! - User, Username, UserId, UserAccount: identities and stored credentials.
//! - LoginCredentials, SignupCredentials: validated authentication input.
//! - Puppy, Toy, Feeding and their drafts: records and validated form input.
//! - AccountService, PuppyService, ToyService: driving port implementations.

pub mod account_service;
pub mod auth;
pub mod error;
pub mod feeding;
pub mod ports;
pub mod puppy;
pub mod puppy_service;
pub mod toy;
pub mod toy_service;
pub mod trace_id;
pub mod user;
pub mod validation;

pub use self::account_service::AccountService;
pub use self::auth::{
    LoginCredentials, LoginValidationError, SignupCredentials, SignupValidationError,
    PASSWORD_MIN_LENGTH,
};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::feeding::{fed_for_day, Feeding, FeedingDraft, FeedingId, Meal};
pub use self::puppy::{Puppy, PuppyChanges, PuppyDetail, PuppyDraft, PuppyId};
pub use self::puppy_service::PuppyService;
pub use self::toy::{Toy, ToyDraft, ToyId};
pub use self::toy_service::ToyService;
pub use self::trace_id::{TraceId, TRACE_ID_HEADER};
pub use self::user::{User, UserAccount, UserId, UserValidationError, Username};
pub use self::validation::FieldErrors;

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use puppy_collector::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::not_found("puppy 3 not found"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
