// VTM Provider Clients
//
// This crate contains pure HTTP client implementations for the external
// services a VTM.be channel adapter talks to. These clients are independent
// of the channel pipeline and can be used standalone.
//
// Architecture:
// - vtm-providers: Pure HTTP clients (Gigya, VTM site, Medialaan playback)
// - vtm-channel: session manager + listing/stream resolvers calling these clients

// HTTP clients (no channel dependency)
pub mod gigya;
pub mod medialaan;
pub mod vtm;

// HLS manifest resolution
pub mod hls;

pub(crate) mod json;

// Re-export client types for convenience
pub use gigya::{GigyaClient, GigyaError};
pub use hls::{HlsError, StreamVariant};
pub use medialaan::{MedialaanClient, MedialaanError};
pub use vtm::{VtmClient, VtmError};
