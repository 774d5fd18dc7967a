//! Users API handlers.
//!
//! ```text
//! GET /users/
//! POST /users/{id}/ {"id":1,"name":"Elena",...}
//! PUT /users/{id}/ {"name":"Elena",...}
//! DELETE /users/{id}/
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};

use crate::domain::{DomainError, NewUser, User, UserChanges};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::map_repository_error;
use crate::inbound::http::state::HttpState;

fn user_not_found(id: i32) -> DomainError {
    DomainError::not_found(format!("user {id} does not exist"))
}

/// List all users ordered by id.
#[utoipa::path(
    get,
    path = "/users/",
    responses(
        (status = 200, description = "Users", body = [User]),
        (status = 503, description = "Storage unavailable", body = DomainError)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users/")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<User>>> {
    let users = state
        .users()
        .list()
        .await
        .map_err(map_repository_error)?;
    Ok(web::Json(users))
}

/// Create a user from the request body.
///
/// The path id is accepted for symmetry with the other user routes but the
/// record id comes from the body.
#[utoipa::path(
    post,
    path = "/users/{id}/",
    params(("id" = i32, Path, description = "Ignored; the body carries the id")),
    request_body = NewUser,
    responses(
        (status = 201, description = "User created"),
        (status = 400, description = "Invalid request", body = DomainError),
        (status = 409, description = "Duplicate id", body = DomainError),
        (status = 503, description = "Storage unavailable", body = DomainError)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users/{id}/")]
pub async fn create_user(
    state: web::Data<HttpState>,
    _path: web::Path<i32>,
    payload: web::Json<NewUser>,
) -> ApiResult<HttpResponse> {
    state
        .users()
        .insert(payload.into_inner())
        .await
        .map_err(map_repository_error)?;
    Ok(HttpResponse::Created().finish())
}

/// Replace every mutable field of an existing user.
#[utoipa::path(
    put,
    path = "/users/{id}/",
    params(("id" = i32, Path, description = "User id")),
    request_body = UserChanges,
    responses(
        (status = 204, description = "User updated"),
        (status = 400, description = "Invalid request", body = DomainError),
        (status = 404, description = "User not found", body = DomainError),
        (status = 503, description = "Storage unavailable", body = DomainError)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[put("/users/{id}/")]
pub async fn update_user(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
    payload: web::Json<UserChanges>,
) -> ApiResult<HttpResponse> {
    let id = path.into_inner();
    let updated = state
        .users()
        .update(id, payload.into_inner())
        .await
        .map_err(map_repository_error)?;
    if updated {
        Ok(HttpResponse::NoContent().finish())
    } else {
        Err(user_not_found(id))
    }
}

/// Delete a user by id.
#[utoipa::path(
    delete,
    path = "/users/{id}/",
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 202, description = "User deleted"),
        (status = 404, description = "User not found", body = DomainError),
        (status = 503, description = "Storage unavailable", body = DomainError)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/users/{id}/")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    let id = path.into_inner();
    let deleted = state
        .users()
        .delete(id)
        .await
        .map_err(map_repository_error)?;
    if deleted {
        Ok(HttpResponse::Accepted().finish())
    } else {
        Err(user_not_found(id))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use actix_web::{App, http::StatusCode, test as actix_test, web};
    use async_trait::async_trait;
    use serde_json::{Value, json};

    use super::*;
    use crate::domain::ports::{
        OfferRepository, OrderRepository, RepositoryError, UserRepository,
    };
    use crate::domain::{
        NewOffer, NewOrder, Offer, OfferChanges, Order, OrderChanges,
    };

    /// In-memory user store for exercising handlers without a database.
    #[derive(Default)]
    struct StubUserRepository {
        users: Mutex<Vec<User>>,
    }

    impl StubUserRepository {
        fn with_users(users: Vec<User>) -> Self {
            Self {
                users: Mutex::new(users),
            }
        }
    }

    #[async_trait]
    impl UserRepository for StubUserRepository {
        async fn insert(&self, user: NewUser) -> Result<(), RepositoryError> {
            let mut users = self.users.lock().expect("lock");
            if users.iter().any(|u| u.id == user.id) {
                return Err(RepositoryError::duplicate(format!("user {}", user.id)));
            }
            users.push(User {
                id: user.id,
                first_name: user.first_name,
                last_name: user.last_name,
                age: user.age,
                email: user.email,
                role: user.role,
                phone: user.phone,
            });
            Ok(())
        }

        async fn list(&self) -> Result<Vec<User>, RepositoryError> {
            Ok(self.users.lock().expect("lock").clone())
        }

        async fn find_by_id(&self, id: i32) -> Result<Option<User>, RepositoryError> {
            Ok(self
                .users
                .lock()
                .expect("lock")
                .iter()
                .find(|u| u.id == id)
                .cloned())
        }

        async fn update(&self, id: i32, changes: UserChanges) -> Result<bool, RepositoryError> {
            let mut users = self.users.lock().expect("lock");
            let Some(user) = users.iter_mut().find(|u| u.id == id) else {
                return Ok(false);
            };
            user.first_name = changes.first_name;
            user.last_name = changes.last_name;
            user.age = changes.age;
            user.email = changes.email;
            user.role = changes.role;
            user.phone = changes.phone;
            Ok(true)
        }

        async fn delete(&self, id: i32) -> Result<bool, RepositoryError> {
            let mut users = self.users.lock().expect("lock");
            let before = users.len();
            users.retain(|u| u.id != id);
            Ok(users.len() < before)
        }
    }

    struct UnusedOrderRepository;

    #[async_trait]
    impl OrderRepository for UnusedOrderRepository {
        async fn insert(&self, _order: NewOrder) -> Result<(), RepositoryError> {
            unreachable!("orders are not exercised by user handler tests")
        }

        async fn list(&self) -> Result<Vec<Order>, RepositoryError> {
            unreachable!("orders are not exercised by user handler tests")
        }

        async fn find_by_id(&self, _id: i32) -> Result<Option<Order>, RepositoryError> {
            unreachable!("orders are not exercised by user handler tests")
        }

        async fn update(&self, _id: i32, _changes: OrderChanges) -> Result<bool, RepositoryError> {
            unreachable!("orders are not exercised by user handler tests")
        }

        async fn delete(&self, _id: i32) -> Result<bool, RepositoryError> {
            unreachable!("orders are not exercised by user handler tests")
        }
    }

    struct UnusedOfferRepository;

    #[async_trait]
    impl OfferRepository for UnusedOfferRepository {
        async fn insert(&self, _offer: NewOffer) -> Result<(), RepositoryError> {
            unreachable!("offers are not exercised by user handler tests")
        }

        async fn list(&self) -> Result<Vec<Offer>, RepositoryError> {
            unreachable!("offers are not exercised by user handler tests")
        }

        async fn find_by_id(&self, _id: i32) -> Result<Option<Offer>, RepositoryError> {
            unreachable!("offers are not exercised by user handler tests")
        }

        async fn update(&self, _id: i32, _changes: OfferChanges) -> Result<bool, RepositoryError> {
            unreachable!("offers are not exercised by user handler tests")
        }

        async fn delete(&self, _id: i32) -> Result<bool, RepositoryError> {
            unreachable!("offers are not exercised by user handler tests")
        }
    }

    fn sample_user(id: i32) -> User {
        User {
            id,
            first_name: "Elena".into(),
            last_name: "Volkova".into(),
            age: 29,
            email: "elena@example.com".into(),
            role: "customer".into(),
            phone: "+7 921 555 0101".into(),
        }
    }

    fn state_with_users(users: Vec<User>) -> HttpState {
        HttpState::new(
            Arc::new(StubUserRepository::with_users(users)),
            Arc::new(UnusedOrderRepository),
            Arc::new(UnusedOfferRepository),
        )
    }

    fn test_app(
        state: HttpState,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(state))
            .service(list_users)
            .service(create_user)
            .service(update_user)
            .service(delete_user)
    }

    #[actix_web::test]
    async fn list_returns_seeded_users() {
        let app =
            actix_test::init_service(test_app(state_with_users(vec![sample_user(1)]))).await;
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri("/users/").to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = actix_test::read_body(response).await;
        let value: Value = serde_json::from_slice(&body).expect("response JSON");
        let users = value.as_array().expect("array");
        assert_eq!(users.len(), 1);
        assert_eq!(
            users[0].get("first_name").and_then(Value::as_str),
            Some("Elena")
        );
    }

    #[actix_web::test]
    async fn create_takes_the_id_from_the_body_not_the_path() {
        let state = state_with_users(Vec::new());
        let app = actix_test::init_service(test_app(state.clone())).await;
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/users/99/")
                .set_json(json!({
                    "id": 5,
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
        assert_eq!(response.status(), StatusCode::CREATED);

        let stored = state.users().find_by_id(5).await.expect("lookup");
        assert!(stored.is_some());
        let absent = state.users().find_by_id(99).await.expect("lookup");
        assert!(absent.is_none());
    }

    #[actix_web::test]
    async fn create_with_duplicate_id_conflicts() {
        let app =
            actix_test::init_service(test_app(state_with_users(vec![sample_user(1)]))).await;
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/users/1/")
                .set_json(json!({
                    "id": 1,
                    "first_name": "Elena",
                    "last_name": "Volkova",
                    "age": 29,
                    "email": "elena@example.com",
                    "role": "customer",
                    "phone": "+7 921 555 0101"
                }))
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CONFLICT);
        let body = actix_test::read_body(response).await;
        let value: Value = serde_json::from_slice(&body).expect("error payload");
        assert_eq!(value.get("code").and_then(Value::as_str), Some("conflict"));
    }

    #[actix_web::test]
    async fn update_overwrites_and_returns_no_content() {
        let state = state_with_users(vec![sample_user(1)]);
        let app = actix_test::init_service(test_app(state.clone())).await;
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::put()
                .uri("/users/1/")
                .set_json(json!({
                    "first_name": "Elena",
                    "last_name": "Sokolova",
                    "age": 30,
                    "email": "elena.sokolova@example.com",
                    "role": "customer",
                    "phone": "+7 921 555 0101"
                }))
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let stored = state
            .users()
            .find_by_id(1)
            .await
            .expect("lookup")
            .expect("user present");
        assert_eq!(stored.last_name, "Sokolova");
        assert_eq!(stored.age, 30);
    }

    #[actix_web::test]
    async fn update_of_missing_user_is_not_found() {
        let app = actix_test::init_service(test_app(state_with_users(Vec::new()))).await;
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::put()
                .uri("/users/42/")
                .set_json(json!({
                    "first_name": "Nobody",
                    "last_name": "Here",
                    "age": 1,
                    "email": "nobody@example.com",
                    "role": "customer",
                    "phone": "+7 000 000 0000"
                }))
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = actix_test::read_body(response).await;
        let value: Value = serde_json::from_slice(&body).expect("error payload");
        assert_eq!(
            value.get("message").and_then(Value::as_str),
            Some("user 42 does not exist")
        );
    }

    #[actix_web::test]
    async fn delete_returns_accepted_then_not_found() {
        let state = state_with_users(vec![sample_user(1)]);
        let app = actix_test::init_service(test_app(state)).await;

        let first = actix_test::call_service(
            &app,
            actix_test::TestRequest::delete().uri("/users/1/").to_request(),
        )
        .await;
        assert_eq!(first.status(), StatusCode::ACCEPTED);

        let second = actix_test::call_service(
            &app,
            actix_test::TestRequest::delete().uri("/users/1/").to_request(),
        )
        .await;
        assert_eq!(second.status(), StatusCode::NOT_FOUND);
    }
}
