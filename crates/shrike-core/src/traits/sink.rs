//! Item sink trait.

use crate::error::Result;
use crate::types::Item;

/// Receives items surfaced by the filter pipeline.
///
/// Within one pipeline, every delivered item is unique by guid.
/// Presentation is entirely the implementation's concern.
pub trait ItemSink {
    /// Deliver a batch of matched items.
    fn deliver(&mut self, items: &[Item]) -> Result<()>;
}
