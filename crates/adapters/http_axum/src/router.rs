//! Axum router assembly.

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;

use petstore_app::ports::{PetRepository, UserRepository};

use crate::state::AppState;

/// A resource router registered under a path prefix.
///
/// Every resource goes through the same registration path, so the
/// composer never special-cases one resource over another.
pub struct Mount<S> {
    prefix: &'static str,
    routes: Router<S>,
}

impl<S> Mount<S>
where
    S: Clone + Send + Sync + 'static,
{
    /// Bind `routes` under `prefix` (e.g. `/users`).
    pub fn new(prefix: &'static str, routes: Router<S>) -> Self {
        Self { prefix, routes }
    }

    /// The prefix the routes are nested under.
    #[must_use]
    pub fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Nest this mount's routes into `router`.
    #[must_use]
    pub fn register(self, router: Router<S>) -> Router<S> {
        tracing::debug!(prefix = self.prefix, "mounting resource router");
        router.nest(self.prefix, self.routes)
    }
}

/// Build the top-level axum [`Router`].
///
/// Registers every resource [`Mount`] in order, answers unmatched paths and
/// methods with a bare 404, and wraps everything in the request
/// [`pipeline`](crate::pipeline).
pub fn build<UR, PR>(state: AppState<UR, PR>) -> Router
where
    UR: UserRepository + Send + Sync + 'static,
    PR: PetRepository + Send + Sync + 'static,
{
    let router = crate::api::mounts::<UR, PR>()
        .into_iter()
        .fold(Router::new().route("/health", get(health_check)), |router, mount| {
            mount.register(router)
        })
        .fallback(not_found)
        .method_not_allowed_fallback(not_found);

    crate::pipeline::apply(router).with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use petstore_adapter_storage_memory::{InMemoryPetRepository, InMemoryUserRepository};
    use petstore_app::services::pet_service::PetService;
    use petstore_app::services::user_service::UserService;
    use tower::ServiceExt;

    fn app() -> Router {
        build(AppState::new(
            UserService::new(InMemoryUserRepository::seeded().unwrap()),
            PetService::new(InMemoryPetRepository::seeded().unwrap()),
        ))
    }

    async fn call(method: &str, uri: &str) -> (StatusCode, String) {
        let response = app()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let (status, body) = call("GET", "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "OK");
    }

    #[tokio::test]
    async fn should_return_bare_404_for_unknown_path() {
        let (status, body) = call("GET", "/owners").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn should_return_404_for_unregistered_method() {
        let (status, _) = call("PATCH", "/users").await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = call("POST", "/pets").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_dispatch_to_every_mount() {
        let (status, _) = call("GET", "/users").await;
        assert_eq!(status, StatusCode::OK);

        let (status, _) = call("GET", "/pets").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[test]
    fn should_expose_mount_prefixes_in_registration_order() {
        let prefixes: Vec<&str> =
            crate::api::mounts::<InMemoryUserRepository, InMemoryPetRepository>()
                .iter()
                .map(Mount::prefix)
                .collect();
        assert_eq!(prefixes, ["/users", "/pets"]);
    }
}
