//! HTTP adapter mapping for domain errors.
//!
//! Domain errors become JSON envelopes with a matching status code.
//! Infrastructure failures are logged in full and returned with a generic
//! message so database details never reach the client.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use tracing::{error, warn};

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

const INTERNAL_MESSAGE: &str = "Internal server error";
const UNAVAILABLE_MESSAGE: &str = "Service temporarily unavailable";

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorCode::Forbidden => StatusCode::FORBIDDEN,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::Conflict => StatusCode::CONFLICT,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Replace infrastructure messages and details with a generic payload.
fn client_view(error: &Error) -> Error {
    let replacement = match error.code() {
        ErrorCode::InternalError => {
            error!(trace_id = ?error.trace_id(), message = error.message(), "internal error");
            Error::internal(INTERNAL_MESSAGE)
        }
        ErrorCode::ServiceUnavailable => {
            warn!(trace_id = ?error.trace_id(), message = error.message(), "backing service unavailable");
            Error::service_unavailable(UNAVAILABLE_MESSAGE)
        }
        _ => return error.clone(),
    };
    match error.trace_id() {
        Some(id) => replacement.with_trace_id(id.to_owned()),
        None => replacement,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }
        builder.json(client_view(self))
    }
}

#[cfg(test)]
mod tests;
