//! Tests for the application bootstrap, covering readiness signalling and
//! route wiring over the in-memory repository.

use std::net::SocketAddr;

use actix_web::http::StatusCode;
use actix_web::{test, web};
use rstest::{fixture, rstest};
use serde_json::{Value, json};

use super::server::{ServerConfig, create_server};
use super::HealthState;

#[fixture]
fn health_state() -> web::Data<HealthState> {
    web::Data::new(HealthState::new())
}

#[fixture]
fn ephemeral_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 0))
}

#[rstest]
#[actix_web::test]
async fn create_server_marks_ready(
    health_state: web::Data<HealthState>,
    ephemeral_addr: SocketAddr,
) {
    assert!(!health_state.is_ready(), "state should start unready");

    let config = ServerConfig::new(ephemeral_addr);
    assert_eq!(config.bind_addr(), ephemeral_addr);
    let _server = create_server(health_state.clone(), config).expect("server binds");

    assert!(health_state.is_ready(), "server should be ready after bind");
}

#[rstest]
#[actix_web::test]
async fn create_server_reports_bind_failure(health_state: web::Data<HealthState>) {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind probe listener");
    let taken = listener.local_addr().expect("probe address");

    let result = create_server(health_state.clone(), ServerConfig::new(taken));

    assert!(result.is_err(), "binding an occupied port must fail");
    assert!(!health_state.is_ready());
}

#[actix_web::test]
async fn app_routes_people_requests_through_json_error_handler() {
    let app = test::init_service(super::server::test_app()).await;

    let request = test::TestRequest::post()
        .uri("/api/v1/people")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["code"], "invalid_request");
    assert_eq!(body["details"]["code"], "invalid_body");
}

#[actix_web::test]
async fn app_serves_people_and_probes() {
    let app = test::init_service(super::server::test_app()).await;

    let create = test::TestRequest::post()
        .uri("/api/v1/people")
        .set_json(json!({
            "firstName": "John",
            "lastName": "Doe",
            "cpf": "52998224725",
            "birthDate": "2000-01-01"
        }))
        .to_request();
    let response = test::call_service(&app, create).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let live = test::TestRequest::get().uri("/health/live").to_request();
    assert_eq!(test::call_service(&app, live).await.status(), StatusCode::OK);
}
