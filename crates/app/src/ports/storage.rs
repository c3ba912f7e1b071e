//! Storage port — repository traits for the record collections.
//!
//! Collections are ordered: listing returns records in insertion order and a
//! replacement keeps the record at its original position.

use std::future::Future;

use petstore_domain::error::PetstoreError;
use petstore_domain::id::UserId;
use petstore_domain::pet::Pet;
use petstore_domain::user::{NewUser, User};

/// Outcome of a replace-or-insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Upsert<T> {
    /// A record with the same id existed and was replaced in place.
    Replaced(T),
    /// No record had the id; the record was appended.
    Created(T),
}

/// Repository for persisting and querying [`User`]s.
pub trait UserRepository {
    /// Get all users in insertion order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<User>, PetstoreError>> + Send;

    /// Get a user by id.
    fn get_by_id(
        &self,
        id: UserId,
    ) -> impl Future<Output = Result<Option<User>, PetstoreError>> + Send;

    /// Get every user whose first name equals `first_name` exactly.
    fn find_by_first_name(
        &self,
        first_name: &str,
    ) -> impl Future<Output = Result<Vec<User>, PetstoreError>> + Send;

    /// Store a new user under the next free id (`max + 1`, or `1` when empty).
    ///
    /// Id allocation and insertion are atomic with respect to other calls.
    fn create(&self, user: NewUser) -> impl Future<Output = Result<User, PetstoreError>> + Send;

    /// Replace the user with the same id in place, or append it.
    fn upsert(
        &self,
        user: User,
    ) -> impl Future<Output = Result<Upsert<User>, PetstoreError>> + Send;

    /// Remove a user by id, returning the removed record if there was one.
    fn delete(
        &self,
        id: UserId,
    ) -> impl Future<Output = Result<Option<User>, PetstoreError>> + Send;
}

/// Repository for querying [`Pet`]s.
pub trait PetRepository {
    /// Get all pets in insertion order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Pet>, PetstoreError>> + Send;
}
