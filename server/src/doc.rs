//! OpenAPI documentation configuration.
//!
//! Defines the [`ApiDoc`] struct generating the OpenAPI specification for
//! the REST API: all resource endpoints, the health probes, and the schema
//! components for the record payloads and the error envelope. Swagger UI
//! serves the document in debug builds.

use utoipa::OpenApi;

use crate::domain::{
    DomainError, ErrorCode, NewOffer, NewOrder, NewUser, Offer, OfferChanges, Order,
    OrderChanges, User, UserChanges,
};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "taskmarket API",
        description = "CRUD interface over users, orders and offers."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::orders::list_orders,
        crate::inbound::http::orders::create_order,
        crate::inbound::http::orders::get_order,
        crate::inbound::http::orders::update_order,
        crate::inbound::http::orders::delete_order,
        crate::inbound::http::offers::list_offers,
        crate::inbound::http::offers::create_offer,
        crate::inbound::http::offers::update_offer,
        crate::inbound::http::offers::delete_offer,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        User,
        NewUser,
        UserChanges,
        Order,
        NewOrder,
        OrderChanges,
        Offer,
        NewOffer,
        OfferChanges,
        DomainError,
        ErrorCode,
    )),
    tags(
        (name = "users", description = "Customer and executor profiles"),
        (name = "orders", description = "Work orders placed by customers"),
        (name = "offers", description = "Executor offers against orders"),
        (name = "health", description = "Liveness and readiness probes")
    )
)]
pub struct ApiDoc;
