// VTM.be Channel Adapter
//
// Maps the broadcaster's site and APIs into the generic media-item model a
// media-center host consumes:
//
// - session:  Gigya login with a short-lived cached signature
// - listing:  JSON feeds and scraped HTML pages -> MediaItems
// - stream:   playback authorization + HLS manifest -> stream alternatives
// - channel:  composition of the three behind injectable capability traits
//
// The HTTP clients themselves live in the vtm-providers crate.

pub mod channel;
pub mod config;
pub mod error;
pub mod item;
pub mod listing;
pub mod logging;
pub mod session;
pub mod settings;
pub mod stream;
pub mod vault;

pub use channel::{Channel, ListingSource, StreamSource};
pub use config::ChannelConfig;
pub use error::{ChannelError, Result};
pub use item::{ItemKind, MediaItem, LIVE_STREAM_URL};
pub use listing::ListingResolver;
pub use session::{Session, SessionManager, SIGNATURE_SETTING};
pub use settings::{JsonFileSettings, MemorySettings, SettingsStore};
pub use stream::StreamResolver;
pub use vtm_providers::StreamVariant;
