//! Offers API handlers.
//!
//! Offers link an executor to an order. The create route historically
//! mis-mapped its payload onto the user shape; it now decodes the offer
//! shape and writes through the offer port.
//!
//! ```text
//! GET /offers/
//! POST /offers/{id}/ {"id":1,"order_id":1,"executor_id":2}
//! PUT /offers/{id}/
//! DELETE /offers/{id}/
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};

use crate::domain::{DomainError, NewOffer, Offer, OfferChanges};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::map_repository_error;
use crate::inbound::http::state::HttpState;

fn offer_not_found(id: i32) -> DomainError {
    DomainError::not_found(format!("offer {id} does not exist"))
}

/// List all offers ordered by id.
#[utoipa::path(
    get,
    path = "/offers/",
    responses(
        (status = 200, description = "Offers", body = [Offer]),
        (status = 503, description = "Storage unavailable", body = DomainError)
    ),
    tags = ["offers"],
    operation_id = "listOffers"
)]
#[get("/offers/")]
pub async fn list_offers(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Offer>>> {
    let offers = state
        .offers()
        .list()
        .await
        .map_err(map_repository_error)?;
    Ok(web::Json(offers))
}

/// Create an offer from the request body.
///
/// The path id is accepted for symmetry with the other offer routes but the
/// record id comes from the body.
#[utoipa::path(
    post,
    path = "/offers/{id}/",
    params(("id" = i32, Path, description = "Ignored; the body carries the id")),
    request_body = NewOffer,
    responses(
        (status = 201, description = "Offer created"),
        (status = 400, description = "Invalid request", body = DomainError),
        (status = 409, description = "Duplicate id", body = DomainError),
        (status = 503, description = "Storage unavailable", body = DomainError)
    ),
    tags = ["offers"],
    operation_id = "createOffer"
)]
#[post("/offers/{id}/")]
pub async fn create_offer(
    state: web::Data<HttpState>,
    _path: web::Path<i32>,
    payload: web::Json<NewOffer>,
) -> ApiResult<HttpResponse> {
    state
        .offers()
        .insert(payload.into_inner())
        .await
        .map_err(map_repository_error)?;
    Ok(HttpResponse::Created().finish())
}

/// Replace both references of an existing offer.
#[utoipa::path(
    put,
    path = "/offers/{id}/",
    params(("id" = i32, Path, description = "Offer id")),
    request_body = OfferChanges,
    responses(
        (status = 204, description = "Offer updated"),
        (status = 400, description = "Invalid request", body = DomainError),
        (status = 404, description = "Offer not found", body = DomainError),
        (status = 503, description = "Storage unavailable", body = DomainError)
    ),
    tags = ["offers"],
    operation_id = "updateOffer"
)]
#[put("/offers/{id}/")]
pub async fn update_offer(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
    payload: web::Json<OfferChanges>,
) -> ApiResult<HttpResponse> {
    let id = path.into_inner();
    let updated = state
        .offers()
        .update(id, payload.into_inner())
        .await
        .map_err(map_repository_error)?;
    if updated {
        Ok(HttpResponse::NoContent().finish())
    } else {
        Err(offer_not_found(id))
    }
}

/// Delete an offer by id.
#[utoipa::path(
    delete,
    path = "/offers/{id}/",
    params(("id" = i32, Path, description = "Offer id")),
    responses(
        (status = 202, description = "Offer deleted"),
        (status = 404, description = "Offer not found", body = DomainError),
        (status = 503, description = "Storage unavailable", body = DomainError)
    ),
    tags = ["offers"],
    operation_id = "deleteOffer"
)]
#[delete("/offers/{id}/")]
pub async fn delete_offer(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    let id = path.into_inner();
    let deleted = state
        .offers()
        .delete(id)
        .await
        .map_err(map_repository_error)?;
    if deleted {
        Ok(HttpResponse::Accepted().finish())
    } else {
        Err(offer_not_found(id))
    }
}
