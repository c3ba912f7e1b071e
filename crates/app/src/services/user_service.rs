//! User service — use-cases for managing users.

use petstore_domain::error::{NotFoundError, PetstoreError};
use petstore_domain::id::UserId;
use petstore_domain::user::{NewUser, User};

use crate::ports::{Upsert, UserRepository};

/// Application service for user CRUD operations.
pub struct UserService<R> {
    repo: R,
}

impl<R: UserRepository> UserService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// List all users in insertion order.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_users(&self) -> Result<Vec<User>, PetstoreError> {
        self.repo.get_all().await
    }

    /// List users whose first name matches exactly (case-sensitive).
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn find_users_by_first_name(
        &self,
        first_name: &str,
    ) -> Result<Vec<User>, PetstoreError> {
        self.repo.find_by_first_name(first_name).await
    }

    /// Look up a user by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`PetstoreError::NotFound`] when no user with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_user(&self, id: UserId) -> Result<User, PetstoreError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Store a new user under the next free id.
    ///
    /// # Errors
    ///
    /// Returns [`PetstoreError::Validation`] if the first name is empty, or
    /// a storage error propagated from the repository. Nothing is stored
    /// when validation fails.
    #[tracing::instrument(skip(self, user), fields(first_name = %user.first_name))]
    pub async fn create_user(&self, user: NewUser) -> Result<User, PetstoreError> {
        user.validate()?;
        let created = self.repo.create(user).await?;
        tracing::info!(id = %created.id, "user created");
        Ok(created)
    }

    /// Replace the user carrying the same id, or append it when absent.
    ///
    /// # Errors
    ///
    /// Returns [`PetstoreError::Validation`] if the id is zero or the first
    /// name is empty, or a storage error from the repository.
    #[tracing::instrument(skip(self, user), fields(id = %user.id))]
    pub async fn replace_user(&self, user: User) -> Result<Upsert<User>, PetstoreError> {
        user.validate()?;
        let outcome = self.repo.upsert(user).await?;
        if let Upsert::Created(created) = &outcome {
            tracing::info!(id = %created.id, "user created by replace");
        }
        Ok(outcome)
    }

    /// Delete a user by id, returning the removed record.
    ///
    /// # Errors
    ///
    /// Returns [`PetstoreError::NotFound`] when no user with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_user(&self, id: UserId) -> Result<User, PetstoreError> {
        self.repo.delete(id).await?.ok_or_else(|| not_found(id))
    }
}

fn not_found(id: UserId) -> PetstoreError {
    NotFoundError {
        entity: "User",
        id: id.to_string(),
    }
    .into()
}
