//! shrike-core - Trigger-based filtering engine for news feed items.
//!
//! This crate provides the item model, the trigger algebra, the
//! configuration interpreter, and the filter pipeline. Fetching feeds
//! and presenting matches are left to [`FeedSource`] and [`ItemSink`]
//! implementations outside the core.
//!
//! # Example
//!
//! ```
//! use shrike_core::{FeedEntry, FilterPipeline, Item, TriggerSet};
//!
//! # fn main() -> shrike_core::Result<()> {
//! let set = TriggerSet::parse("t1,title,election\nADD,t1")?;
//!
//! let entry = FeedEntry {
//!     guid: "example:1".into(),
//!     title: "Election results are in".into(),
//!     description: "Counting continued overnight.".into(),
//!     link: "https://example.com/election".into(),
//!     published: "Tue, 02 Jan 2024 15:04:05 +0000".into(),
//! };
//! let items = vec![Item::try_from(entry)?];
//!
//! let mut pipeline = FilterPipeline::new();
//! let matched = pipeline.filter(&items, set.active());
//! assert_eq!(matched.len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod pipeline;
pub mod traits;
pub mod triggers;
pub mod types;

pub use error::{Error, Result};
pub use pipeline::FilterPipeline;
pub use traits::{FeedSource, ItemSink};
pub use triggers::{Phrase, Trigger, TriggerSet};
pub use types::{FeedEntry, Item};
