//! Shared application state for axum handlers.

use std::sync::Arc;

use petstore_app::ports::{PetRepository, UserRepository};
use petstore_app::services::pet_service::PetService;
use petstore_app::services::user_service::UserService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository types to avoid dynamic dispatch.
/// `Clone` is implemented manually so the underlying types themselves do not
/// need to be `Clone` — only the `Arc` wrappers are cloned.
pub struct AppState<UR, PR> {
    /// User CRUD service.
    pub user_service: Arc<UserService<UR>>,
    /// Pet query service.
    pub pet_service: Arc<PetService<PR>>,
}

impl<UR, PR> Clone for AppState<UR, PR> {
    fn clone(&self) -> Self {
        Self {
            user_service: Arc::clone(&self.user_service),
            pet_service: Arc::clone(&self.pet_service),
        }
    }
}

impl<UR, PR> AppState<UR, PR>
where
    UR: UserRepository + Send + Sync + 'static,
    PR: PetRepository + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(user_service: UserService<UR>, pet_service: PetService<PR>) -> Self {
        Self {
            user_service: Arc::new(user_service),
            pet_service: Arc::new(pet_service),
        }
    }
}
