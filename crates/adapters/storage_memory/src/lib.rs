//! # petstore-adapter-storage-memory
//!
//! In-memory persistence adapter.
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `petstore-app::ports::storage`
//! - Keep each resource as an ordered [`Collection`] behind an async
//!   read/write lock, so id allocation + append (and find + replace/remove)
//!   run as one critical section
//! - Provide the sample records every collection is seeded with
//!
//! ## Dependency rule
//! Depends on `petstore-app` (for port traits) and `petstore-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

pub mod collection;
pub mod pet_repo;
pub mod seed;
pub mod user_repo;

pub use collection::Collection;
pub use pet_repo::InMemoryPetRepository;
pub use user_repo::InMemoryUserRepository;
