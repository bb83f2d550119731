//! Session flows composing the token codec, directory, and blocklist.

pub mod service;

pub use service::AuthService;
