//! Errors returned to the browser.

use crate::pages::error_page;
use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use reelpost_metadata::MetadataError;
use std::fmt::{Display, Formatter};
use tracing::error;

/// An error page to send back to the user. The message is shown as-is, so it must never carry
/// upstream details.
#[derive(Debug)]
pub struct ReelpostWebError {
    pub status: u16,
    pub message: String,
}

impl ResponseError for ReelpostWebError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        HttpResponse::build(status)
            .insert_header(ContentType::html())
            .body(error_page(status, &self.message))
    }
}

impl ReelpostWebError {
    /// Create a new instance of [ReelpostWebError] with a given [StatusCode].
    /// Before creating a new [ReelpostWebError], check for dedicated methods
    /// to return the appropriate status code.
    pub fn new(message: &str, status: StatusCode) -> Self {
        ReelpostWebError {
            message: String::from(message),
            status: status.as_u16(),
        }
    }

    pub fn bad_request(message: &str) -> Self {
        Self::new(message, StatusCode::BAD_REQUEST)
    }

    pub fn bad_gateway() -> Self {
        Self::new(
            "The movie database could not be reached. Please try again later.",
            StatusCode::BAD_GATEWAY,
        )
    }
}

impl From<MetadataError> for ReelpostWebError {
    fn from(e: MetadataError) -> Self {
        error!(error = ?e, "Metadata provider request failed.");
        ReelpostWebError::bad_gateway()
    }
}

impl Display for ReelpostWebError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.status, self.message)
    }
}
