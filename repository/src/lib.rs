//! Keel Repository Boundary
//!
//! The pluggable persistence interface consumed by the patch pipeline.
//!
//! Responsibilities:
//! - Define the per-type `Repository` trait (fetch/save plus optional
//!   meta/links capabilities)
//! - Define the opaque request-scoped `ParamProvider` threaded through to
//!   repository construction
//! - Provide an `InMemoryRepository` for tests and demos
//!
//! # Module Structure
//!
//! - `error` - Repository error types
//! - `memory` - In-memory repository implementation
//! - `provider` - Request-scoped parameter provider
//! - `repository` - The `Repository` trait and factory alias

mod error;
mod memory;
mod provider;
mod repository;

pub use error::{RepositoryError, RepositoryResult};
pub use memory::InMemoryRepository;
pub use provider::{EmptyProvider, ParamProvider};
pub use repository::{JsonMap, Repository, RepositoryFactory};
