//! # Spring Aventure Core Types
//!
//! The shared vocabulary of the admin backend: the persisted game entities and
//! the paging types used to query them. This crate has no knowledge of HTTP or
//! of a particular database; both the `database` and `web-server` crates build
//! on top of it.

// Declare the modules that make up this crate.
pub mod entities;
pub mod error;
pub mod paging;

// Re-export the core types to provide a clean public API.
pub use entities::{Entity, Potion, Qualite};
pub use error::CoreError;
pub use paging::{Direction, Page, PageRequest, Sort};
