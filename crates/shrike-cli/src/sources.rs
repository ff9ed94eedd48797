//! Feed sources backed by local files.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

use shrike_core::{FeedEntry, FeedSource, Result};
use tracing::debug;

/// Reads feed entries from a JSON Lines file: one JSON-encoded
/// [`FeedEntry`] per line, blank lines skipped.
///
/// Each `fetch` re-reads the file, so a caller polling the same source
/// picks up entries appended since the previous batch.
pub struct JsonlFeedSource {
    path: PathBuf,
    name: String,
}

impl JsonlFeedSource {
    /// Create a source reading from `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path.display().to_string();
        Self { path, name }
    }
}

impl FeedSource for JsonlFeedSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn fetch(&mut self) -> Result<Vec<FeedEntry>> {
        let reader = BufReader::new(File::open(&self.path)?);
        let mut entries = Vec::new();
        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            entries.push(serde_json::from_str(&line)?);
        }
        debug!("read {} entries from {}", entries.len(), self.name);
        Ok(entries)
    }
}
