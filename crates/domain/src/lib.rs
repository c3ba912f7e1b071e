//! # petstore-domain
//!
//! Pure domain model for the petstore service.
//!
//! ## Responsibilities
//! - Foundational types: typed integer identifiers, error conventions, timestamps
//! - Define **Users** (people who own pets)
//! - Define **Pets** (animals, each referencing an owning user)
//! - Contain all invariant enforcement for these records
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod pet;
pub mod user;
