//! External credential directory clients.

pub mod http;

pub use http::HttpDirectoryClient;
