//! JSON REST handlers for users.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::Value;

use petstore_app::ports::{PetRepository, Upsert, UserRepository};
use petstore_domain::error::ValidationError;
use petstore_domain::id::UserId;
use petstore_domain::time::{self, Timestamp};
use petstore_domain::user::{NewUser, User};

use crate::error::ApiError;
use crate::extract::{JsonBody, PathId};
use crate::router::Mount;
use crate::state::AppState;

/// Path prefix of the users resource.
pub const PREFIX: &str = "/users";

/// Request body for creating or replacing a user.
///
/// The `id` is not part of it: create ignores any `id`, replace reads it
/// separately.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRequest {
    pub first_name: Option<String>,
    pub birthdate: Option<Timestamp>,
}

/// Possible responses from the list and filter endpoints.
pub enum ListResponse {
    Ok(Json<Vec<User>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get and delete endpoints.
pub enum GetResponse {
    Ok(Json<User>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<User>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the replace endpoint.
pub enum ReplaceResponse {
    Replaced(Json<User>),
    Created(Json<User>),
}

impl From<Upsert<User>> for ReplaceResponse {
    fn from(outcome: Upsert<User>) -> Self {
        match outcome {
            Upsert::Replaced(user) => Self::Replaced(Json(user)),
            Upsert::Created(user) => Self::Created(Json(user)),
        }
    }
}

impl IntoResponse for ReplaceResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Replaced(json) => json.into_response(),
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// The users resource: [`PREFIX`] plus its routes.
pub fn mount<UR, PR>() -> Mount<AppState<UR, PR>>
where
    UR: UserRepository + Send + Sync + 'static,
    PR: PetRepository + Send + Sync + 'static,
{
    let routes = Router::new()
        .route(
            "/",
            routing::get(list::<UR, PR>)
                .post(create::<UR, PR>)
                .put(replace::<UR, PR>),
        )
        .route(
            "/firstName/{name}",
            routing::get(find_by_first_name::<UR, PR>),
        )
        .route(
            "/{id}",
            routing::get(get::<UR, PR>).delete(delete::<UR, PR>),
        );
    Mount::new(PREFIX, routes)
}

/// `GET /users`
pub async fn list<UR, PR>(
    State(state): State<AppState<UR, PR>>,
) -> Result<ListResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    PR: PetRepository + Send + Sync + 'static,
{
    let users = state.user_service.list_users().await?;
    Ok(ListResponse::Ok(Json(users)))
}

/// `GET /users/firstName/:name`
pub async fn find_by_first_name<UR, PR>(
    State(state): State<AppState<UR, PR>>,
    Path(name): Path<String>,
) -> Result<ListResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    PR: PetRepository + Send + Sync + 'static,
{
    let users = state.user_service.find_users_by_first_name(&name).await?;
    Ok(ListResponse::Ok(Json(users)))
}

/// `GET /users/:id`
pub async fn get<UR, PR>(
    State(state): State<AppState<UR, PR>>,
    PathId(id): PathId<UserId>,
) -> Result<GetResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    PR: PetRepository + Send + Sync + 'static,
{
    let user = state.user_service.get_user(id).await?;
    Ok(GetResponse::Ok(Json(user)))
}

/// `POST /users`
pub async fn create<UR, PR>(
    State(state): State<AppState<UR, PR>>,
    body: JsonBody,
) -> Result<CreateResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    PR: PetRepository + Send + Sync + 'static,
{
    let req: UserRequest = body.into_request()?;
    let user = NewUser::new(
        req.first_name.unwrap_or_default(),
        req.birthdate.unwrap_or_else(time::now),
    );
    let created = state.user_service.create_user(user).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PUT /users`
///
/// A missing or non-positive id answers 422 whatever the rest of the body holds.
pub async fn replace<UR, PR>(
    State(state): State<AppState<UR, PR>>,
    body: JsonBody,
) -> Result<ReplaceResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    PR: PetRepository + Send + Sync + 'static,
{
    let id = body_id(&body.0)?;
    let req: UserRequest = body.into_request()?;
    let user = User {
        id,
        first_name: req.first_name.unwrap_or_default(),
        birthdate: req.birthdate.unwrap_or_else(time::now),
    };
    let outcome = state.user_service.replace_user(user).await?;
    Ok(outcome.into())
}

/// `DELETE /users/:id`
pub async fn delete<UR, PR>(
    State(state): State<AppState<UR, PR>>,
    PathId(id): PathId<UserId>,
) -> Result<GetResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    PR: PetRepository + Send + Sync + 'static,
{
    let removed = state.user_service.delete_user(id).await?;
    Ok(GetResponse::Ok(Json(removed)))
}

/// The body's `id`, which must be a JSON integer of at least 1.
fn body_id(body: &Value) -> Result<UserId, ValidationError> {
    body.get("id")
        .and_then(Value::as_u64)
        .filter(|id| *id >= 1)
        .map(UserId::new)
        .ok_or(ValidationError::InvalidId)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, header};
    use http_body_util::BodyExt;
    use petstore_adapter_storage_memory::{InMemoryPetRepository, InMemoryUserRepository};
    use petstore_app::services::pet_service::PetService;
    use petstore_app::services::user_service::UserService;
    use serde_json::json;
    use tower::ServiceExt;

    type TestState = AppState<InMemoryUserRepository, InMemoryPetRepository>;

    fn state() -> TestState {
        AppState::new(
            UserService::new(InMemoryUserRepository::seeded().unwrap()),
            PetService::new(InMemoryPetRepository::seeded().unwrap()),
        )
    }

    async fn send(state: &TestState, request: Request<Body>) -> (StatusCode, Value) {
        let response = crate::router::build(state.clone())
            .oneshot(request)
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    fn get_req(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn json_req(method: &str, uri: &str, body: &Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn delete_req(uri: &str) -> Request<Body> {
        Request::builder()
            .method("DELETE")
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    async fn user_count(state: &TestState) -> usize {
        state.user_service.list_users().await.unwrap().len()
    }

    #[tokio::test]
    async fn should_list_seeded_users() {
        let state = state();
        let (status, body) = send(&state, get_req("/users")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 1);
        assert_eq!(body[0]["firstName"], "Abby");
    }

    #[tokio::test]
    async fn should_create_user_with_next_id() {
        let state = state();
        let (status, body) =
            send(&state, json_req("POST", "/users", &json!({ "firstName": "Ben" }))).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["id"], 2);
        assert_eq!(body["firstName"], "Ben");
        assert_eq!(user_count(&state).await, 2);
    }

    #[tokio::test]
    async fn should_ignore_client_supplied_id_on_create() {
        let state = state();
        let (_, body) = send(
            &state,
            json_req("POST", "/users", &json!({ "id": 40, "firstName": "Ben" })),
        )
        .await;
        assert_eq!(body["id"], 2);
    }

    #[tokio::test]
    async fn should_keep_supplied_birthdate_on_create() {
        let state = state();
        let (_, body) = send(
            &state,
            json_req(
                "POST",
                "/users",
                &json!({ "firstName": "Ben", "birthdate": "2001-02-03T00:00:00Z" }),
            ),
        )
        .await;
        assert_eq!(body["birthdate"], "2001-02-03T00:00:00Z");
    }

    #[tokio::test]
    async fn should_reject_create_without_first_name_and_store_nothing() {
        let state = state();
        let (status, body) = send(&state, json_req("POST", "/users", &json!({}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "firstName must not be empty");
        assert_eq!(user_count(&state).await, 1);
    }

    #[tokio::test]
    async fn should_reject_create_without_json_content_type() {
        let state = state();
        let request = Request::builder()
            .method("POST")
            .uri("/users")
            .body(Body::from(r#"{"firstName":"Ben"}"#))
            .unwrap();
        let (status, _) = send(&state, request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(user_count(&state).await, 1);
    }

    #[tokio::test]
    async fn should_get_user_by_id() {
        let state = state();
        let (status, body) = send(&state, get_req("/users/1")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["firstName"], "Abby");
    }

    #[tokio::test]
    async fn should_return_empty_404_for_unknown_id() {
        let state = state();
        let (status, body) = send(&state, get_req("/users/99")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, Value::Null);
    }

    #[tokio::test]
    async fn should_return_400_for_non_numeric_id() {
        let state = state();
        let (status, body) = send(&state, get_req("/users/abby")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "invalid id in path");

        let (status, _) = send(&state, delete_req("/users/abby")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn should_filter_by_first_name() {
        let state = state();
        send(&state, json_req("POST", "/users", &json!({ "firstName": "Ben" }))).await;
        send(&state, json_req("POST", "/users", &json!({ "firstName": "Abby" }))).await;

        let (status, body) = send(&state, get_req("/users/firstName/Abby")).await;
        assert_eq!(status, StatusCode::OK);
        let ids: Vec<u64> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|u| u["id"].as_u64().unwrap())
            .collect();
        assert_eq!(ids, [1, 3]);
    }

    #[tokio::test]
    async fn should_return_empty_array_when_no_first_name_matches() {
        let state = state();
        let (status, body) = send(&state, get_req("/users/firstName/abby")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn should_replace_first_user_in_place_with_200() {
        let state = state();
        send(&state, json_req("POST", "/users", &json!({ "firstName": "Ben" }))).await;

        let (status, body) = send(
            &state,
            json_req("PUT", "/users", &json!({ "id": 1, "firstName": "Abigail" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["firstName"], "Abigail");

        let (_, all) = send(&state, get_req("/users")).await;
        assert_eq!(all.as_array().unwrap().len(), 2);
        assert_eq!(all[0]["firstName"], "Abigail");
        assert_eq!(all[1]["firstName"], "Ben");
    }

    #[tokio::test]
    async fn should_append_unknown_id_with_201() {
        let state = state();
        let (status, body) = send(
            &state,
            json_req("PUT", "/users", &json!({ "id": 7, "firstName": "Gus" })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["id"], 7);
        assert_eq!(user_count(&state).await, 2);
    }

    #[tokio::test]
    async fn should_return_422_for_missing_or_invalid_put_id() {
        let state = state();
        for body in [
            json!({ "firstName": "Nobody" }),
            json!({ "id": 0, "firstName": "Zero" }),
            json!({ "id": -3, "firstName": "Negative" }),
            json!({ "id": "2", "firstName": "Text" }),
            json!({ "id": 1.5, "firstName": "Fraction" }),
            json!({ "id": null }),
        ] {
            let (status, response) = send(&state, json_req("PUT", "/users", &body)).await;
            assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "body: {body}");
            assert_eq!(response, Value::Null);
        }
        assert_eq!(user_count(&state).await, 1);
    }

    #[tokio::test]
    async fn should_replace_user_created_past_i64_range() {
        let state = state();
        let max = i64::MAX.unsigned_abs();
        let (status, _) = send(
            &state,
            json_req("PUT", "/users", &json!({ "id": max, "firstName": "Max" })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, created) =
            send(&state, json_req("POST", "/users", &json!({ "firstName": "Next" }))).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["id"], max + 1);

        let (status, replaced) = send(
            &state,
            json_req("PUT", "/users", &json!({ "id": max + 1, "firstName": "Renamed" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(replaced["firstName"], "Renamed");
        assert_eq!(user_count(&state).await, 3);
    }

    #[tokio::test]
    async fn should_answer_500_when_no_id_is_left_to_allocate() {
        let state = state();
        let (status, _) = send(
            &state,
            json_req("PUT", "/users", &json!({ "id": u64::MAX, "firstName": "Last" })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, body) =
            send(&state, json_req("POST", "/users", &json!({ "firstName": "Over" }))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "internal server error");
        assert_eq!(user_count(&state).await, 2);
    }

    #[tokio::test]
    async fn should_reject_put_without_first_name_after_id_check() {
        let state = state();
        let (status, _) = send(&state, json_req("PUT", "/users", &json!({ "id": 1 }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (_, body) = send(&state, get_req("/users/1")).await;
        assert_eq!(body["firstName"], "Abby");
    }

    #[tokio::test]
    async fn should_delete_user_and_return_it() {
        let state = state();
        let (status, body) = send(&state, delete_req("/users/1")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["firstName"], "Abby");

        let (status, _) = send(&state, get_req("/users/1")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_return_404_when_deleting_absent_user() {
        let state = state();
        let (status, body) = send(&state, delete_req("/users/99")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, Value::Null);
        assert_eq!(user_count(&state).await, 1);
    }

    #[test]
    fn should_accept_only_positive_integer_body_ids() {
        assert_eq!(body_id(&json!({ "id": 4 })).unwrap(), UserId::new(4));
        assert_eq!(
            body_id(&json!({ "id": u64::MAX })).unwrap(),
            UserId::new(u64::MAX)
        );
        assert!(body_id(&json!({ "id": 0 })).is_err());
        assert!(body_id(&json!([1])).is_err());
    }
}
