//! Orders API handlers.
//!
//! Orders are the only resource with a collection-level POST and an
//! item-level GET. Dates arrive as `MM/DD/YYYY` text and come back in the
//! store's ISO form.
//!
//! ```text
//! GET /orders/
//! POST /orders/ {"name":"...","start_date":"03/01/2024",...}
//! GET /orders/{id}/
//! PUT /orders/{id}/
//! DELETE /orders/{id}/
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};

use crate::domain::{DomainError, NewOrder, Order, OrderChanges};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::map_repository_error;
use crate::inbound::http::state::HttpState;

fn order_not_found(id: i32) -> DomainError {
    DomainError::not_found(format!("order {id} does not exist"))
}

/// List all orders ordered by id.
#[utoipa::path(
    get,
    path = "/orders/",
    responses(
        (status = 200, description = "Orders", body = [Order]),
        (status = 503, description = "Storage unavailable", body = DomainError)
    ),
    tags = ["orders"],
    operation_id = "listOrders"
)]
#[get("/orders/")]
pub async fn list_orders(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Order>>> {
    let orders = state
        .orders()
        .list()
        .await
        .map_err(map_repository_error)?;
    Ok(web::Json(orders))
}

/// Create an order. The id is optional; the store assigns one when omitted.
#[utoipa::path(
    post,
    path = "/orders/",
    request_body = NewOrder,
    responses(
        (status = 201, description = "Order created"),
        (status = 400, description = "Invalid request", body = DomainError),
        (status = 409, description = "Duplicate id", body = DomainError),
        (status = 503, description = "Storage unavailable", body = DomainError)
    ),
    tags = ["orders"],
    operation_id = "createOrder"
)]
#[post("/orders/")]
pub async fn create_order(
    state: web::Data<HttpState>,
    payload: web::Json<NewOrder>,
) -> ApiResult<HttpResponse> {
    state
        .orders()
        .insert(payload.into_inner())
        .await
        .map_err(map_repository_error)?;
    Ok(HttpResponse::Created().finish())
}

/// Fetch a single order by id.
#[utoipa::path(
    get,
    path = "/orders/{id}/",
    params(("id" = i32, Path, description = "Order id")),
    responses(
        (status = 200, description = "Order", body = Order),
        (status = 404, description = "Order not found", body = DomainError),
        (status = 503, description = "Storage unavailable", body = DomainError)
    ),
    tags = ["orders"],
    operation_id = "getOrder"
)]
#[get("/orders/{id}/")]
pub async fn get_order(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<Order>> {
    let id = path.into_inner();
    let order = state
        .orders()
        .find_by_id(id)
        .await
        .map_err(map_repository_error)?
        .ok_or_else(|| order_not_found(id))?;
    Ok(web::Json(order))
}

/// Replace every mutable field of an existing order.
#[utoipa::path(
    put,
    path = "/orders/{id}/",
    params(("id" = i32, Path, description = "Order id")),
    request_body = OrderChanges,
    responses(
        (status = 204, description = "Order updated"),
        (status = 400, description = "Invalid request", body = DomainError),
        (status = 404, description = "Order not found", body = DomainError),
        (status = 503, description = "Storage unavailable", body = DomainError)
    ),
    tags = ["orders"],
    operation_id = "updateOrder"
)]
#[put("/orders/{id}/")]
pub async fn update_order(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
    payload: web::Json<OrderChanges>,
) -> ApiResult<HttpResponse> {
    let id = path.into_inner();
    let updated = state
        .orders()
        .update(id, payload.into_inner())
        .await
        .map_err(map_repository_error)?;
    if updated {
        Ok(HttpResponse::NoContent().finish())
    } else {
        Err(order_not_found(id))
    }
}

/// Delete an order by id.
#[utoipa::path(
    delete,
    path = "/orders/{id}/",
    params(("id" = i32, Path, description = "Order id")),
    responses(
        (status = 202, description = "Order deleted"),
        (status = 404, description = "Order not found", body = DomainError),
        (status = 503, description = "Storage unavailable", body = DomainError)
    ),
    tags = ["orders"],
    operation_id = "deleteOrder"
)]
#[delete("/orders/{id}/")]
pub async fn delete_order(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    let id = path.into_inner();
    let deleted = state
        .orders()
        .delete(id)
        .await
        .map_err(map_repository_error)?;
    if deleted {
        Ok(HttpResponse::Accepted().finish())
    } else {
        Err(order_not_found(id))
    }
}
