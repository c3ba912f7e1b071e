//! In-memory implementation of [`PetRepository`].

use std::future::Future;

use tokio::sync::RwLock;

use petstore_app::ports::PetRepository;
use petstore_domain::error::PetstoreError;
use petstore_domain::pet::Pet;

use crate::collection::Collection;
use crate::seed;

/// Lock-guarded, ordered pet collection.
#[derive(Debug, Default)]
pub struct InMemoryPetRepository {
    pets: RwLock<Collection<Pet>>,
}

impl InMemoryPetRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository holding `pets` in the given order.
    #[must_use]
    pub fn with_pets(pets: Vec<Pet>) -> Self {
        Self {
            pets: RwLock::new(Collection::from(pets)),
        }
    }

    /// Create a repository holding the sample pets.
    ///
    /// # Errors
    ///
    /// Returns [`PetstoreError::Validation`] if the sample data is invalid.
    pub fn seeded() -> Result<Self, PetstoreError> {
        Ok(Self::with_pets(seed::pets()?))
    }
}

impl PetRepository for InMemoryPetRepository {
    fn get_all(&self) -> impl Future<Output = Result<Vec<Pet>, PetstoreError>> + Send {
        async move { Ok(self.pets.read().await.records().to_vec()) }
    }
}
