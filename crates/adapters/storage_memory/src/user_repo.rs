//! In-memory implementation of [`UserRepository`].

use std::future::Future;

use tokio::sync::RwLock;

use petstore_app::ports::{Upsert, UserRepository};
use petstore_domain::error::{IdExhaustedError, PetstoreError};
use petstore_domain::id::UserId;
use petstore_domain::user::{NewUser, User};

use crate::collection::Collection;
use crate::seed;

/// Lock-guarded, ordered user collection.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Collection<User>>,
}

impl InMemoryUserRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository holding `users` in the given order.
    #[must_use]
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: RwLock::new(Collection::from(users)),
        }
    }

    /// Create a repository holding the sample users.
    ///
    /// # Errors
    ///
    /// Returns [`PetstoreError::Validation`] if the sample data is invalid.
    pub fn seeded() -> Result<Self, PetstoreError> {
        Ok(Self::with_users(seed::users()?))
    }
}

impl UserRepository for InMemoryUserRepository {
    fn get_all(&self) -> impl Future<Output = Result<Vec<User>, PetstoreError>> + Send {
        async move { Ok(self.users.read().await.records().to_vec()) }
    }

    fn get_by_id(
        &self,
        id: UserId,
    ) -> impl Future<Output = Result<Option<User>, PetstoreError>> + Send {
        async move { Ok(self.users.read().await.find_by_id(id).cloned()) }
    }

    fn find_by_first_name(
        &self,
        first_name: &str,
    ) -> impl Future<Output = Result<Vec<User>, PetstoreError>> + Send {
        async move {
            let users = self.users.read().await;
            Ok(users.filter_by(|user| user.first_name == first_name))
        }
    }

    fn create(&self, user: NewUser) -> impl Future<Output = Result<User, PetstoreError>> + Send {
        async move {
            let mut users = self.users.write().await;
            let id = users
                .next_id()
                .ok_or(IdExhaustedError { entity: "User" })?;
            let user = user.with_id(id);
            users.append(user.clone());
            tracing::debug!(id = %user.id, len = users.len(), "user appended");
            Ok(user)
        }
    }

    fn upsert(
        &self,
        user: User,
    ) -> impl Future<Output = Result<Upsert<User>, PetstoreError>> + Send {
        async move {
            let mut users = self.users.write().await;
            match users.find_index_by_id(user.id) {
                Some(index) => {
                    users.replace_at(index, user.clone());
                    tracing::debug!(id = %user.id, index, "user replaced");
                    Ok(Upsert::Replaced(user))
                }
                None => {
                    users.append(user.clone());
                    tracing::debug!(id = %user.id, len = users.len(), "user appended");
                    Ok(Upsert::Created(user))
                }
            }
        }
    }

    fn delete(
        &self,
        id: UserId,
    ) -> impl Future<Output = Result<Option<User>, PetstoreError>> + Send {
        async move {
            let mut users = self.users.write().await;
            let removed = users
                .find_index_by_id(id)
                .and_then(|index| users.remove_at(index));
            if removed.is_some() {
                tracing::debug!(%id, len = users.len(), "user removed");
            }
            Ok(removed)
        }
    }
}
