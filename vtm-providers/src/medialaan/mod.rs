//! Medialaan Playback API Client
//!
//! Pure HTTP client for the playback-authorization side of the platform:
//! the VOD item/video endpoint, the one-shot Gigya request-token exchange
//! and the live stream manifest endpoint.

pub mod client;
pub mod error;
pub mod types;

pub use client::MedialaanClient;
pub use error::MedialaanError;
