//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every people and health endpoint together with the
//! schema wrappers from `inbound::http::schemas`, keeping domain types free
//! of utoipa derives. The document backs Swagger UI in debug builds and is
//! exported by `cargo run --bin openapi-dump`.

use utoipa::OpenApi;

use crate::inbound::http::people::PersonRequest;
use crate::inbound::http::schemas::{
    ErrorCodeSchema, ErrorSchema, MessageResponseSchema, PersonSchema,
};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "People API",
        description = "CRUD registry of people identified by CPF, with ages derived on read."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::people::create_person,
        crate::inbound::http::people::list_people,
        crate::inbound::http::people::get_person,
        crate::inbound::http::people::update_person,
        crate::inbound::http::people::delete_person,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        PersonRequest,
        PersonSchema,
        MessageResponseSchema,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "people", description = "Person registry operations"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
