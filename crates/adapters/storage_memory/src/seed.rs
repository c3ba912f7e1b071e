//! Sample records every collection starts with.

use petstore_domain::error::PetstoreError;
use petstore_domain::id::{PetId, UserId};
use petstore_domain::pet::Pet;
use petstore_domain::time;
use petstore_domain::user::User;

/// A single user, Abby, born "now".
///
/// # Errors
///
/// Returns [`PetstoreError::Validation`] if a sample user breaks a domain
/// invariant.
pub fn users() -> Result<Vec<User>, PetstoreError> {
    let abby = User::builder()
        .id(UserId::new(1))
        .first_name("Abby")
        .birthdate(time::now())
        .build()?;
    Ok(vec![abby])
}

/// A single cat, Fluffy, owned by user 1.
///
/// # Errors
///
/// Returns [`PetstoreError::Validation`] if a sample pet breaks a domain
/// invariant.
pub fn pets() -> Result<Vec<Pet>, PetstoreError> {
    let mut fluffy = Pet::builder()
        .id(PetId::new(1))
        .name("Fluffy")
        .species("cat")
        .owner_id(UserId::new(1));
    if let Some(birthdate) = time::midnight(2019, 1, 1) {
        fluffy = fluffy.birthdate(birthdate);
    }
    Ok(vec![fluffy.build()?])
}
