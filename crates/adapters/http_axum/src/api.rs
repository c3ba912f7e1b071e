//! JSON REST API handler modules.
//!
//! Each resource module exposes a `mount()` — its prefix plus routes —
//! and [`mounts`] lists them in registration order.

#[allow(clippy::missing_errors_doc)]
pub mod pets;
#[allow(clippy::missing_errors_doc)]
pub mod users;

use petstore_app::ports::{PetRepository, UserRepository};

use crate::router::Mount;
use crate::state::AppState;

/// Every resource router, in registration order.
pub fn mounts<UR, PR>() -> Vec<Mount<AppState<UR, PR>>>
where
    UR: UserRepository + Send + Sync + 'static,
    PR: PetRepository + Send + Sync + 'static,
{
    vec![users::mount(), pets::mount()]
}
