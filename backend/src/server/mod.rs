//! Server construction and wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use vaxreg::Trace;
#[cfg(debug_assertions)]
use vaxreg::doc::ApiDoc;
use vaxreg::domain::VaccineRegistryService;
use vaxreg::domain::ports::VaccineRegistry;
use vaxreg::inbound::http::health::{HealthState, live, ready};
use vaxreg::inbound::http::state::HttpState;
use vaxreg::inbound::http::vaccines::{
    delete_vaccine, find_vaccine, is_code_registered, list_vaccines, register_vaccine,
    update_vaccine,
};
use vaxreg::outbound::persistence::InMemoryVaccineRepository;

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
    // The check route must register before the single-record route so
    // "/vaccines/check/{code}" is not captured by "/vaccines/{code}".
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(list_vaccines)
        .service(is_code_registered)
        .service(find_vaccine)
        .service(register_vaccine)
        .service(update_vaccine)
        .service(delete_vaccine)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    #[cfg(not(debug_assertions))]
    let app = app;

    app
}

/// Construct an Actix HTTP server wired over an isolated in-memory store.
///
/// # Parameters
/// - `health_state`: shared readiness state, marked ready once the listener
///   is bound.
/// - `config`: pre-built [`ServerConfig`] with the bind address.
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
    let repository = Arc::new(InMemoryVaccineRepository::new());
    let registry: Arc<dyn VaccineRegistry> = Arc::new(VaccineRegistryService::new(repository));
    let http_state = web::Data::new(HttpState::new(registry));

    let server_health_state = health_state.clone();
    let server = HttpServer::new(move || {
        build_app(server_health_state.clone(), http_state.clone())
    })
    .bind(config.bind_addr())?
    .run();

    health_state.mark_ready();
    Ok(server)
}
