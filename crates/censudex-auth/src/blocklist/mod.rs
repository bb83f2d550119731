//! Token revocation blocklist implementations.

pub mod memory;

pub use memory::MemoryTokenBlocklist;
