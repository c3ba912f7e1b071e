//! # petstore-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **JSON API** for the `users` and `pets` resources
//! - Register every resource router through one interface
//!   ([`router::Mount`]: a path prefix plus its routes)
//! - Thread each request through the [`pipeline`]: panic guard, HTTP trace,
//!   request log, JSON body parsing, then routing with a 404 fallback
//! - Map application results and [`PetstoreError`](petstore_domain::error::PetstoreError)s
//!   into HTTP responses
//!
//! ## Dependency rule
//! Depends on `petstore-app` (for port traits and services) and `petstore-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod extract;
pub mod pipeline;
pub mod router;
pub mod state;
