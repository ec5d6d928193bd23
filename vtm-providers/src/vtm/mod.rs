//! VTM.be Site Client
//!
//! Pure HTTP client for the broadcaster's site: JSON program/article feeds,
//! scraped HTML listing pages and the video detail page with its embedded
//! player JSON.

pub mod client;
pub mod error;
pub mod scrape;
pub mod types;

pub use client::VtmClient;
pub use error::VtmError;
pub use types::{ArticleEntry, ProgramEntry};
