//! Tests for HTTP error mapping.

use super::*;
use crate::domain::{PersonId, ports::PersonRepositoryError};
use actix_web::body::to_bytes;
use rstest::{fixture, rstest};
use serde_json::json;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn internal_error_case() -> Error {
    Error::internal("boom")
        .with_trace_id(TRACE_ID)
        .with_details(json!({"secret": "x"}))
}

#[fixture]
fn invalid_request_case() -> Error {
    Error::invalid_request("bad")
        .with_trace_id(TRACE_ID)
        .with_details(json!({"field": "cpf"}))
}

#[rstest]
#[case(Error::invalid_request("bad"), StatusCode::BAD_REQUEST)]
#[case(Error::not_found("missing"), StatusCode::NOT_FOUND)]
#[case(Error::service_unavailable("down"), StatusCode::SERVICE_UNAVAILABLE)]
#[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] error: Error, #[case] status: StatusCode) {
    assert_eq!(ResponseError::status_code(&error), status);
}

async fn response_body(error: &Error) -> (StatusCode, Option<String>, serde_json::Value) {
    let response = ResponseError::error_response(error);
    let status = response.status();
    let header = response
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    let body = serde_json::from_slice(&bytes).expect("error body is JSON");
    (status, header, body)
}

#[rstest]
#[actix_web::test]
async fn internal_errors_are_redacted(internal_error_case: Error) {
    let (status, header, body) = response_body(&internal_error_case).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(header.as_deref(), Some(TRACE_ID));
    assert_eq!(body["message"], "Internal server error");
    assert_eq!(body["code"], "internal_error");
    assert_eq!(body["traceId"], TRACE_ID);
    assert!(body.get("details").is_none());
}

#[rstest]
#[actix_web::test]
async fn client_errors_keep_their_details(invalid_request_case: Error) {
    let (status, header, body) = response_body(&invalid_request_case).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(header.as_deref(), Some(TRACE_ID));
    assert_eq!(body["message"], "bad");
    assert_eq!(body["details"], json!({"field": "cpf"}));
}

#[rstest]
#[actix_web::test]
async fn errors_without_trace_id_omit_header() {
    let (_, header, body) = response_body(&Error::not_found("missing")).await;

    assert!(header.is_none());
    assert!(body.get("traceId").is_none());
}

#[rstest]
#[case(PersonServiceError::not_found(PersonId::new(42)), ErrorCode::NotFound)]
#[case(
    PersonServiceError::from(PersonRepositoryError::connection("refused")),
    ErrorCode::ServiceUnavailable
)]
#[case(
    PersonServiceError::from(PersonRepositoryError::query("syntax")),
    ErrorCode::InternalError
)]
fn person_errors_map_to_codes(#[case] error: PersonServiceError, #[case] code: ErrorCode) {
    assert_eq!(map_person_error(error).code(), code);
}

#[rstest]
fn actix_errors_become_internal_errors() {
    let actix_error = actix_web::error::ErrorBadGateway("upstream");
    let error = Error::from(actix_error);

    assert_eq!(error.code(), ErrorCode::InternalError);
    assert_eq!(error.message(), "Internal server error");
}
