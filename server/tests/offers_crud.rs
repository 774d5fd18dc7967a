//! End-to-end CRUD coverage for the offers resource against SQLite.
//!
//! The create route decodes the offer shape; a regression here would mean
//! the handler slipped back to decoding a user-shaped payload.

mod support;

use actix_web::{http::StatusCode, test as actix_test};
use serde_json::{Value, json};
use taskmarket::server::build_app;

use support::{app_states, fresh_pool};

#[actix_web::test]
async fn create_persists_the_offer_shape() {
    let pool = fresh_pool();
    let (health, http) = app_states(&pool);
    let app = actix_test::init_service(build_app(health, http)).await;

    let created = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/offers/1/")
            .set_json(json!({ "id": 1, "order_id": 1, "executor_id": 2 }))
            .to_request(),
    )
    .await;
    assert_eq!(created.status(), StatusCode::CREATED);

    let listed = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri("/offers/").to_request(),
    )
    .await;
    assert_eq!(listed.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(listed).await;
    let offers = body.as_array().expect("array");
    assert_eq!(offers.len(), 1);
    assert_eq!(offers[0].get("order_id").and_then(Value::as_i64), Some(1));
    assert_eq!(
        offers[0].get("executor_id").and_then(Value::as_i64),
        Some(2)
    );
}

#[actix_web::test]
async fn user_shaped_payload_is_rejected() {
    let pool = fresh_pool();
    let (health, http) = app_states(&pool);
    let app = actix_test::init_service(build_app(health, http)).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/offers/1/")
            .set_json(json!({
                "id": 1,
                "first_name": "Marat",
                "last_name": "Safin",
                "age": 34,
                "email": "marat@example.com",
                "role": "executor",
                "phone": "+7 921 555 0102"
            }))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn update_and_delete_round_trip() {
    let pool = fresh_pool();
    let (health, http) = app_states(&pool);
    let app = actix_test::init_service(build_app(health, http)).await;

    let created = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/offers/1/")
            .set_json(json!({ "id": 1, "order_id": 1, "executor_id": 2 }))
            .to_request(),
    )
    .await;
    assert_eq!(created.status(), StatusCode::CREATED);

    let updated = actix_test::call_service(
        &app,
        actix_test::TestRequest::put()
            .uri("/offers/1/")
            .set_json(json!({ "order_id": 2, "executor_id": 3 }))
            .to_request(),
    )
    .await;
    assert_eq!(updated.status(), StatusCode::NO_CONTENT);

    let listed = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri("/offers/").to_request(),
    )
    .await;
    let body: Value = actix_test::read_body_json(listed).await;
    assert_eq!(
        body.as_array().expect("array")[0]
            .get("executor_id")
            .and_then(Value::as_i64),
        Some(3)
    );

    let deleted = actix_test::call_service(
        &app,
        actix_test::TestRequest::delete()
            .uri("/offers/1/")
            .to_request(),
    )
    .await;
    assert_eq!(deleted.status(), StatusCode::ACCEPTED);

    let again = actix_test::call_service(
        &app,
        actix_test::TestRequest::delete()
            .uri("/offers/1/")
            .to_request(),
    )
    .await;
    assert_eq!(again.status(), StatusCode::NOT_FOUND);
}
