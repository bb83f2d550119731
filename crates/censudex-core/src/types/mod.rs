//! Shared domain types.

pub mod client;
pub mod credential;

pub use client::ClientRecord;
pub use credential::Credential;
