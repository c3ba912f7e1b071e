//! Request extractors for the API handlers.
//!
//! [`JsonBody`] reads the value the body-parsing stage of the
//! [`pipeline`](crate::pipeline) attached to the request; [`PathId`] parses
//! a single `{id}` path segment.

use std::convert::Infallible;
use std::num::ParseIntError;
use std::str::FromStr;

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use axum::response::{IntoResponse, Response};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use petstore_domain::error::ValidationError;

use crate::error::ApiError;

/// Body parsed by the pipeline, stored in the request extensions.
#[derive(Debug, Clone)]
pub struct ParsedBody(pub Value);

/// The JSON request body, or an empty object when the request did not carry
/// a JSON content type.
#[derive(Debug)]
pub struct JsonBody(pub Value);

impl JsonBody {
    /// Deserialize the body into a request type.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidBody`] when fields have the wrong shape.
    pub fn into_request<T: DeserializeOwned>(self) -> Result<T, ValidationError> {
        serde_json::from_value(self.0).map_err(ValidationError::InvalidBody)
    }
}

impl<S: Send + Sync> FromRequestParts<S> for JsonBody {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let value = parts
            .extensions
            .remove::<ParsedBody>()
            .map_or_else(|| Value::Object(Map::new()), |body| body.0);
        Ok(Self(value))
    }
}

/// A numeric id taken from the route's single path parameter.
#[derive(Debug)]
pub struct PathId<T>(pub T);

impl<S, T> FromRequestParts<S> for PathId<T>
where
    S: Send + Sync,
    T: FromStr<Err = ParseIntError> + Send,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(IntoResponse::into_response)?;
        raw.parse().map(Self).map_err(|err| {
            ApiError::from(ValidationError::InvalidPathId(err)).into_response()
        })
    }
}
