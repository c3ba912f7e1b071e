//! User — a person who owns pets.

use serde::{Deserialize, Serialize};

use crate::error::{PetstoreError, ValidationError};
use crate::id::{Record, UserId};
use crate::time::{self, Timestamp};

/// A stored user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub first_name: String,
    pub birthdate: Timestamp,
}

impl User {
    /// Create a builder for constructing a [`User`].
    #[must_use]
    pub fn builder() -> UserBuilder {
        UserBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// The id is checked before the name.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidId`] when `id` is zero and
    /// [`ValidationError::EmptyFirstName`] when `first_name` is empty.
    pub fn validate(&self) -> Result<(), PetstoreError> {
        if self.id.get() == 0 {
            return Err(ValidationError::InvalidId.into());
        }
        if self.first_name.is_empty() {
            return Err(ValidationError::EmptyFirstName.into());
        }
        Ok(())
    }
}

impl Record for User {
    type Id = UserId;

    fn id(&self) -> UserId {
        self.id
    }
}

/// A user that has not been stored yet and therefore has no id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub first_name: String,
    pub birthdate: Timestamp,
}

impl NewUser {
    /// A new user born at `birthdate`.
    #[must_use]
    pub fn new(first_name: impl Into<String>, birthdate: Timestamp) -> Self {
        Self {
            first_name: first_name.into(),
            birthdate,
        }
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyFirstName`] when `first_name` is empty.
    pub fn validate(&self) -> Result<(), PetstoreError> {
        if self.first_name.is_empty() {
            return Err(ValidationError::EmptyFirstName.into());
        }
        Ok(())
    }

    /// Attach the id allocated by the store.
    #[must_use]
    pub fn with_id(self, id: UserId) -> User {
        User {
            id,
            first_name: self.first_name,
            birthdate: self.birthdate,
        }
    }
}

/// Step-by-step builder for [`User`].
#[derive(Debug, Default)]
pub struct UserBuilder {
    id: Option<UserId>,
    first_name: Option<String>,
    birthdate: Option<Timestamp>,
}

impl UserBuilder {
    #[must_use]
    pub fn id(mut self, id: UserId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    #[must_use]
    pub fn birthdate(mut self, birthdate: Timestamp) -> Self {
        self.birthdate = Some(birthdate);
        self
    }

    /// Consume the builder, validate, and return a [`User`].
    ///
    /// A missing birthdate defaults to the current time.
    ///
    /// # Errors
    ///
    /// Returns [`PetstoreError::Validation`] if `id` or `first_name` is
    /// missing or empty.
    pub fn build(self) -> Result<User, PetstoreError> {
        let user = User {
            id: self.id.unwrap_or(UserId::new(0)),
            first_name: self.first_name.unwrap_or_default(),
            birthdate: self.birthdate.unwrap_or_else(time::now),
        };
        user.validate()?;
        Ok(user)
    }
}
