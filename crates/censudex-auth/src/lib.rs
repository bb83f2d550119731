//! # censudex-auth
//!
//! Bearer session token lifecycle for the Censudex platform.
//!
//! ## Modules
//!
//! - `jwt`: JWT token creation and validation (HS256, unique `jti` per issuance)
//! - `blocklist`: in-memory self-cleaning revocation store keyed by `jti`
//! - `directory`: HTTP client for the external clients directory
//! - `session`: login / authorize / logout flows composing the above

pub mod blocklist;
pub mod directory;
pub mod jwt;
pub mod session;

pub use blocklist::MemoryTokenBlocklist;
pub use directory::HttpDirectoryClient;
pub use jwt::{Claims, JwtDecoder, JwtEncoder};
pub use session::AuthService;
