//! Pet — an animal belonging to a user.
//!
//! `owner_id` references a [`User`](crate::user::User) but the reference is
//! not checked; a pet may name an owner that was never stored or has been
//! deleted.

use serde::{Deserialize, Serialize};

use crate::error::{PetstoreError, ValidationError};
use crate::id::{PetId, Record, UserId};
use crate::time::{self, Timestamp};

/// A stored pet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    pub id: PetId,
    pub name: String,
    pub species: String,
    pub birthdate: Timestamp,
    pub owner_id: UserId,
}

impl Pet {
    /// Create a builder for constructing a [`Pet`].
    #[must_use]
    pub fn builder() -> PetBuilder {
        PetBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidId`] when `id` is zero and
    /// [`ValidationError::EmptyName`] when `name` is empty.
    pub fn validate(&self) -> Result<(), PetstoreError> {
        if self.id.get() == 0 {
            return Err(ValidationError::InvalidId.into());
        }
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        Ok(())
    }
}

impl Record for Pet {
    type Id = PetId;

    fn id(&self) -> PetId {
        self.id
    }
}

/// Step-by-step builder for [`Pet`].
#[derive(Debug, Default)]
pub struct PetBuilder {
    id: Option<PetId>,
    name: Option<String>,
    species: Option<String>,
    birthdate: Option<Timestamp>,
    owner_id: Option<UserId>,
}

impl PetBuilder {
    #[must_use]
    pub fn id(mut self, id: PetId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn species(mut self, species: impl Into<String>) -> Self {
        self.species = Some(species.into());
        self
    }

    #[must_use]
    pub fn birthdate(mut self, birthdate: Timestamp) -> Self {
        self.birthdate = Some(birthdate);
        self
    }

    #[must_use]
    pub fn owner_id(mut self, owner_id: UserId) -> Self {
        self.owner_id = Some(owner_id);
        self
    }

    /// Consume the builder, validate, and return a [`Pet`].
    ///
    /// # Errors
    ///
    /// Returns [`PetstoreError::Validation`] if `id` or `name` is missing.
    pub fn build(self) -> Result<Pet, PetstoreError> {
        let pet = Pet {
            id: self.id.unwrap_or(PetId::new(0)),
            name: self.name.unwrap_or_default(),
            species: self.species.unwrap_or_default(),
            birthdate: self.birthdate.unwrap_or_else(time::now),
            owner_id: self.owner_id.unwrap_or(UserId::new(0)),
        };
        pet.validate()?;
        Ok(pet)
    }
}
