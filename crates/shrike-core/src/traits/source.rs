//! Feed source trait.

use crate::error::Result;
use crate::types::FeedEntry;

/// Supplies batches of raw feed entries.
///
/// Implementations own transport and feed-format concerns entirely; the
/// core only normalizes what they return. Entries must arrive with HTML
/// entities already decoded.
pub trait FeedSource {
    /// Source name, used in diagnostics.
    fn name(&self) -> &str;

    /// Produce the next batch of entries. An empty batch is valid.
    fn fetch(&mut self) -> Result<Vec<FeedEntry>>;
}
