//! Pet service — read-only use-cases for pets.

use petstore_domain::error::PetstoreError;
use petstore_domain::pet::Pet;

use crate::ports::PetRepository;

/// Application service for pet queries.
pub struct PetService<R> {
    repo: R,
}

impl<R: PetRepository> PetService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// List all pets in insertion order.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_pets(&self) -> Result<Vec<Pet>, PetstoreError> {
        self.repo.get_all().await
    }
}
