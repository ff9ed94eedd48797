//! The normalized news item and its raw feed form.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::types::time;

/// A raw entry as supplied by a feed source.
///
/// Text fields arrive with HTML entities already decoded; `published` is
/// the feed's date string, parsed when converting into an [`Item`]. This
/// is also the JSON Lines record shape the CLI consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedEntry {
    /// Globally unique identifier for the story.
    pub guid: String,
    /// Story headline.
    pub title: String,
    /// Story summary or body excerpt.
    pub description: String,
    /// Link to the full story.
    pub link: String,
    /// Publication date string, e.g. `Tue, 02 Jan 2024 15:04:05 +0000`.
    pub published: String,
}

/// A normalized news item, the unit triggers evaluate against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Globally unique identifier for the story.
    pub guid: String,
    /// Story headline.
    pub title: String,
    /// Story summary or body excerpt.
    pub description: String,
    /// Link to the full story.
    pub link: String,
    /// Zone-aware publication timestamp.
    pub published_at: DateTime<FixedOffset>,
}

impl Item {
    /// Create an item from already-parsed parts.
    pub fn new(
        guid: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        link: impl Into<String>,
        published_at: DateTime<FixedOffset>,
    ) -> Self {
        Self {
            guid: guid.into(),
            title: title.into(),
            description: description.into(),
            link: link.into(),
            published_at,
        }
    }
}

impl TryFrom<FeedEntry> for Item {
    type Error = Error;

    /// Normalize a raw entry, parsing its publication date.
    fn try_from(entry: FeedEntry) -> Result<Self, Self::Error> {
        let published_at = time::parse_pub_date(&entry.published)?;
        Ok(Self {
            guid: entry.guid,
            title: entry.title,
            description: entry.description,
            link: entry.link,
            published_at,
        })
    }
}
