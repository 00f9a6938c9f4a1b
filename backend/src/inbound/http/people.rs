//! People HTTP handlers.
//!
//! ```text
//! POST /api/v1/people
//! GET /api/v1/people
//! GET /api/v1/people/{id}
//! PUT /api/v1/people/{id}
//! DELETE /api/v1/people/{id}
//! ```
//!
//! Payloads are validated here; the domain only ever sees well-formed
//! [`PersonDto`] values.

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::domain::{Error, MessageResponse, PersonDto};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::map_person_error;
use crate::inbound::http::schemas::{ErrorSchema, MessageResponseSchema, PersonSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, parse_cpf, parse_date, parse_name, parse_person_id,
};

const FIRST_NAME: FieldName = FieldName::new("firstName");
const LAST_NAME: FieldName = FieldName::new("lastName");
const CPF: FieldName = FieldName::new("cpf");
const BIRTH_DATE: FieldName = FieldName::new("birthDate");

/// Request payload for creating or replacing a person.
///
/// Any `id` or `age` sent by the client is ignored.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PersonRequest {
    #[schema(example = "John")]
    pub first_name: Option<String>,
    #[schema(example = "Doe")]
    pub last_name: Option<String>,
    /// Eleven digits, optionally formatted as `000.000.000-00`.
    #[schema(example = "529.982.247-25")]
    pub cpf: Option<String>,
    /// ISO-8601 calendar date.
    #[schema(example = "1990-05-20")]
    pub birth_date: Option<String>,
}

impl TryFrom<PersonRequest> for PersonDto {
    type Error = Error;

    fn try_from(request: PersonRequest) -> Result<Self, Self::Error> {
        let PersonRequest {
            first_name,
            last_name,
            cpf,
            birth_date,
        } = request;
        Ok(Self {
            id: None,
            first_name: parse_name(first_name, FIRST_NAME)?,
            last_name: parse_name(last_name, LAST_NAME)?,
            cpf: parse_cpf(cpf, CPF)?,
            birth_date: parse_date(birth_date, BIRTH_DATE)?,
            age: None,
        })
    }
}

/// Create a person.
#[utoipa::path(
    post,
    path = "/api/v1/people",
    request_body = PersonRequest,
    responses(
        (status = 201, description = "Person created", body = MessageResponseSchema),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["people"],
    operation_id = "createPerson"
)]
#[post("/people")]
pub async fn create_person(
    state: web::Data<HttpState>,
    payload: web::Json<PersonRequest>,
) -> ApiResult<HttpResponse> {
    let person = PersonDto::try_from(payload.into_inner())?;
    let response: MessageResponse = state
        .people
        .create_person(person)
        .await
        .map_err(map_person_error)?;
    Ok(HttpResponse::Created().json(response))
}

/// List every person.
#[utoipa::path(
    get,
    path = "/api/v1/people",
    responses(
        (status = 200, description = "All people", body = [PersonSchema]),
        (status = 503, description = "Service unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["people"],
    operation_id = "listPeople"
)]
#[get("/people")]
pub async fn list_people(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<PersonDto>>> {
    let people = state
        .people_query
        .list_all()
        .await
        .map_err(map_person_error)?;
    Ok(web::Json(people))
}

/// Fetch a person by identifier.
#[utoipa::path(
    get,
    path = "/api/v1/people/{id}",
    params(
        ("id" = i64, Path, description = "Person identifier")
    ),
    responses(
        (status = 200, description = "Person", body = PersonSchema),
        (status = 400, description = "Invalid identifier", body = ErrorSchema),
        (status = 404, description = "Not found", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["people"],
    operation_id = "getPerson"
)]
#[get("/people/{id}")]
pub async fn get_person(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<PersonDto>> {
    let id = parse_person_id(&path.into_inner())?;
    let person = state
        .people_query
        .find_by_id(id)
        .await
        .map_err(map_person_error)?;
    Ok(web::Json(person))
}

/// Replace every field of a stored person.
#[utoipa::path(
    put,
    path = "/api/v1/people/{id}",
    request_body = PersonRequest,
    params(
        ("id" = i64, Path, description = "Person identifier")
    ),
    responses(
        (status = 200, description = "Person updated", body = MessageResponseSchema),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Not found", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["people"],
    operation_id = "updatePerson"
)]
#[put("/people/{id}")]
pub async fn update_person(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<PersonRequest>,
) -> ApiResult<web::Json<MessageResponse>> {
    let id = parse_person_id(&path.into_inner())?;
    let person = PersonDto::try_from(payload.into_inner())?;
    let response = state
        .people
        .update_by_id(id, person)
        .await
        .map_err(map_person_error)?;
    Ok(web::Json(response))
}

/// Delete a stored person.
#[utoipa::path(
    delete,
    path = "/api/v1/people/{id}",
    params(
        ("id" = i64, Path, description = "Person identifier")
    ),
    responses(
        (status = 204, description = "Person deleted"),
        (status = 400, description = "Invalid identifier", body = ErrorSchema),
        (status = 404, description = "Not found", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["people"],
    operation_id = "deletePerson"
)]
#[delete("/people/{id}")]
pub async fn delete_person(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_person_id(&path.into_inner())?;
    state
        .people
        .delete_by_id(id)
        .await
        .map_err(map_person_error)?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
#[path = "people_tests.rs"]
mod tests;
