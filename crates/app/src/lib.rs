//! # petstore-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `UserRepository` — ordered CRUD for users with store-assigned ids
//!   - `PetRepository` — read access to pets
//! - Define **driving/inbound ports** as use-case structs:
//!   - `UserService` — list, filter, get, create, replace, delete
//!   - `PetService` — list
//! - Orchestrate domain objects without knowing *how* records are stored
//!
//! ## Dependency rule
//! Depends on `petstore-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
