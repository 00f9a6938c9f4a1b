//! Server construction and middleware wiring.

mod config;
mod settings;

pub use config::ServerConfig;
pub use settings::ServerSettings;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use mockable::DefaultClock;
use tracing::info;

use people_api::Trace;
#[cfg(debug_assertions)]
use people_api::doc::ApiDoc;
use people_api::domain::PersonService;
use people_api::domain::ports::PersonRepository;
use people_api::inbound::http::health::{HealthState, live, ready};
use people_api::inbound::http::people::{
    create_person, delete_person, get_person, list_people, update_person,
};
use people_api::inbound::http::state::HttpState;
use people_api::inbound::http::validation::json_error_handler;
use people_api::outbound::memory::InMemoryPersonRepository;
use people_api::outbound::persistence::DieselPersonRepository;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

fn person_state<R>(repo: R) -> HttpState
where
    R: PersonRepository + 'static,
{
    let service = Arc::new(PersonService::new(Arc::new(repo), Arc::new(DefaultClock)));
    HttpState::new(service.clone(), service)
}

/// Build the HTTP state, using PostgreSQL when a pool is configured and the
/// in-memory repository otherwise.
fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let state = match &config.db_pool {
        Some(pool) => {
            info!("person repository: postgres");
            person_state(DieselPersonRepository::new(pool.clone()))
        }
        None => {
            info!("person repository: in-memory");
            person_state(InMemoryPersonRepository::default())
        }
    };
    web::Data::new(state)
}

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let api = web::scope("/api/v1")
        .service(create_person)
        .service(list_people)
        .service(get_person)
        .service(update_person)
        .service(delete_person);

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .wrap(Trace)
        .service(api)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// # Returns
/// A spawned [`Server`] that must be awaited to drive the listener.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let http_state = build_http_state(&config);
    let ServerConfig {
        bind_addr,
        db_pool: _,
    } = config;

    let server = HttpServer::new(move || {
        build_app(server_health_state.clone(), http_state.clone())
    })
    .bind(bind_addr)?
    .run();

    health_state.mark_ready();
    info!(%bind_addr, "listening");
    Ok(server)
}

/// Application wired exactly as served, over the in-memory repository.
#[cfg(test)]
pub(crate) fn test_app() -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let config = ServerConfig::new(std::net::SocketAddr::from(([127, 0, 0, 1], 0)));
    let health_state = web::Data::new(HealthState::new());
    health_state.mark_ready();
    build_app(health_state, build_http_state(&config))
}
