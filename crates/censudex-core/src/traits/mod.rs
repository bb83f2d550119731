//! Capability traits implemented across the Censudex crates.

pub mod blocklist;
pub mod directory;

pub use blocklist::TokenBlocklist;
pub use directory::DirectoryClient;
