//! # Spring Aventure Database Crate
//!
//! This crate is the entity store of the admin backend. It provides a small,
//! generic repository abstraction and two families of implementations:
//!
//! - **PostgreSQL DAOs** (`PgPotionDao`, `PgQualiteDao`) built on a pooled
//!   `sqlx` connection, with the schema managed by embedded migrations.
//! - **`InMemoryRepository`**, a process-local store with the same semantics,
//!   used by the test suites and by the server's `--in-memory` mode.
//!
//! ## Public API
//!
//! - `connect` / `run_migrations`: pool creation and schema migration.
//! - `CrudRepository` / `PagingRepository`: the store contracts the web layer
//!   is written against. Both are object safe, so handlers hold them as
//!   `Arc<dyn CrudRepository<T>>`.
//! - `DbError`: the specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod connection;
pub mod error;
pub mod memory;
pub mod potion_dao;
pub mod qualite_dao;
pub mod repository;

// Re-export the key components to create a clean, public-facing API.
pub use connection::{connect, run_migrations};
pub use error::DbError;
pub use memory::InMemoryRepository;
pub use potion_dao::PgPotionDao;
pub use qualite_dao::{default_qualites, PgQualiteDao};
pub use repository::{CrudRepository, PagingRepository};
