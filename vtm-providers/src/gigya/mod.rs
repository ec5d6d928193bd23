//! Gigya Identity Provider Client
//!
//! Pure HTTP client for the Gigya `accounts.login` endpoint used by the
//! VTM single sign-on. Returns the signed identity assertion
//! (uid + signature + timestamp) that the playback APIs expect.

pub mod client;
pub mod error;
pub mod types;

pub use client::GigyaClient;
pub use error::GigyaError;
pub use types::Identity;
