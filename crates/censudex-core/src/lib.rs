//! # censudex-core
//!
//! Core crate for the Censudex auth service. Contains configuration schemas,
//! capability traits, shared domain types, and the unified error system.
//!
//! This crate has **no** internal dependencies on other Censudex crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
