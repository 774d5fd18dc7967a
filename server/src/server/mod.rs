//! Server construction and route wiring.

mod config;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

pub use config::{AppSettings, ServerConfig};

#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::inbound::http::error::{json_error_handler, path_error_handler};
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::offers::{create_offer, delete_offer, list_offers, update_offer};
use crate::inbound::http::orders::{
    create_order, delete_order, get_order, list_orders, update_order,
};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::users::{create_user, delete_user, list_users, update_user};
use crate::outbound::persistence::{
    DbPool, DieselOfferRepository, DieselOrderRepository, DieselUserRepository,
};

/// Wire the Diesel adapters into the shared HTTP state.
#[must_use]
pub fn build_http_state(pool: &DbPool) -> HttpState {
    HttpState::new(
        Arc::new(DieselUserRepository::new(pool.clone())),
        Arc::new(DieselOrderRepository::new(pool.clone())),
        Arc::new(DieselOfferRepository::new(pool.clone())),
    )
}

/// Assemble the application with every route and extractor error handler.
pub fn build_app(
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
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .service(list_users)
        .service(create_user)
        .service(update_user)
        .service(delete_user)
        .service(list_orders)
        .service(create_order)
        .service(get_order)
        .service(update_order)
        .service(delete_order)
        .service(list_offers)
        .service(create_offer)
        .service(update_offer)
        .service(delete_offer)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    #[cfg(not(debug_assertions))]
    let app = app;

    app
}

/// Construct an Actix HTTP server using the provided health state and
/// configuration.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let http_state = web::Data::new(build_http_state(&config.pool));
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || {
        build_app(server_health_state.clone(), http_state.clone())
    })
    .bind(config.bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
