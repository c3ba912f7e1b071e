//! JSON REST handlers for pets.

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};

use petstore_app::ports::{PetRepository, UserRepository};
use petstore_domain::pet::Pet;

use crate::error::ApiError;
use crate::router::Mount;
use crate::state::AppState;

/// Path prefix of the pets resource.
pub const PREFIX: &str = "/pets";

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Pet>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// The pets resource: [`PREFIX`] plus its routes.
pub fn mount<UR, PR>() -> Mount<AppState<UR, PR>>
where
    UR: UserRepository + Send + Sync + 'static,
    PR: PetRepository + Send + Sync + 'static,
{
    Mount::new(PREFIX, Router::new().route("/", get(list::<UR, PR>)))
}

/// `GET /pets`
pub async fn list<UR, PR>(
    State(state): State<AppState<UR, PR>>,
) -> Result<ListResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    PR: PetRepository + Send + Sync + 'static,
{
    let pets = state.pet_service.list_pets().await?;
    Ok(ListResponse::Ok(Json(pets)))
}
