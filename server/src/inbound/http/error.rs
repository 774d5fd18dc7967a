//! HTTP adapter mapping for domain errors.
//!
//! Keeps [`DomainError`] transport-agnostic while letting Actix handlers
//! turn failures into consistent JSON responses and status codes.

use actix_web::error::{JsonPayloadError, PathError};
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode};
use serde_json::json;
use tracing::error;

use crate::domain::ports::RepositoryError;
use crate::domain::{DomainError, ErrorCode};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, DomainError>;

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::Conflict => StatusCode::CONFLICT,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn redact_if_internal(err: &DomainError) -> DomainError {
    if matches!(err.code(), ErrorCode::InternalError) {
        error!(error = %err, "internal error surfaced to client");
        DomainError::internal("Internal server error")
    } else {
        err.clone()
    }
}

impl ResponseError for DomainError {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(redact_if_internal(self))
    }
}

/// Translate persistence failures into the domain error taxonomy.
pub fn map_repository_error(error: RepositoryError) -> DomainError {
    match error {
        RepositoryError::Connection { message } => DomainError::service_unavailable(message),
        RepositoryError::Duplicate { message } => DomainError::conflict(message),
        RepositoryError::Query { message } => DomainError::internal(message),
    }
}

/// Map JSON body failures (malformed payloads, missing or mistyped fields,
/// unparseable dates) onto the validation error schema.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    DomainError::invalid_request(err.to_string())
        .with_details(json!({ "code": "invalid_body" }))
        .into()
}

/// Map path extraction failures (non-numeric ids) onto the validation error
/// schema.
pub fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    DomainError::invalid_request(format!("invalid path parameter: {err}"))
        .with_details(json!({ "code": "invalid_path" }))
        .into()
}

#[cfg(test)]
mod tests {
    //! Status mapping and redaction coverage.
    use actix_web::body::to_bytes;
    use rstest::rstest;
    use serde_json::Value;

    use super::*;

    #[rstest]
    #[case(DomainError::invalid_request("bad"), StatusCode::BAD_REQUEST)]
    #[case(DomainError::not_found("missing"), StatusCode::NOT_FOUND)]
    #[case(DomainError::conflict("taken"), StatusCode::CONFLICT)]
    #[case(
        DomainError::service_unavailable("down"),
        StatusCode::SERVICE_UNAVAILABLE
    )]
    #[case(DomainError::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
    fn status_codes_follow_the_taxonomy(
        #[case] err: DomainError,
        #[case] expected: StatusCode,
    ) {
        assert_eq!(err.status_code(), expected);
    }

    #[tokio::test]
    async fn internal_messages_are_redacted() {
        let err = DomainError::internal("sqlite exploded at /var/db");
        let response = err.error_response();
        let body = to_bytes(response.into_body()).await.expect("body bytes");
        let value: Value = serde_json::from_slice(&body).expect("error payload");
        assert_eq!(
            value.get("message").and_then(Value::as_str),
            Some("Internal server error")
        );
    }

    #[tokio::test]
    async fn not_found_messages_pass_through() {
        let err = DomainError::not_found("order 7 does not exist");
        let response = err.error_response();
        let body = to_bytes(response.into_body()).await.expect("body bytes");
        let value: Value = serde_json::from_slice(&body).expect("error payload");
        assert_eq!(
            value.get("message").and_then(Value::as_str),
            Some("order 7 does not exist")
        );
        assert_eq!(
            value.get("code").and_then(Value::as_str),
            Some("not_found")
        );
    }

    #[rstest]
    fn repository_errors_map_onto_the_taxonomy() {
        let conn = map_repository_error(RepositoryError::connection("refused"));
        assert_eq!(conn.code(), ErrorCode::ServiceUnavailable);

        let dup = map_repository_error(RepositoryError::duplicate("users.id"));
        assert_eq!(dup.code(), ErrorCode::Conflict);

        let query = map_repository_error(RepositoryError::query("syntax"));
        assert_eq!(query.code(), ErrorCode::InternalError);
    }
}
