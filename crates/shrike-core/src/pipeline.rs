//! Filter pipeline: applies active triggers to batches of items.
//!
//! Selection is disjunctive: an item is surfaced when at least one
//! trigger fires for it. Results keep input order and are deduplicated
//! by guid. Dedup state lives on the pipeline instance and persists
//! across calls, so repeated batches from a polling caller never
//! resurface an item already delivered.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::debug;

use crate::triggers::Trigger;
use crate::types::Item;

/// Applies a trigger list to item batches, deduplicating by guid.
#[derive(Debug, Clone, Default)]
pub struct FilterPipeline {
    seen: HashSet<String>,
}

impl FilterPipeline {
    /// Create a pipeline with empty dedup state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter `items` through `triggers`.
    ///
    /// Returns the items matching at least one trigger, in input order,
    /// at most once per guid over the lifetime of this pipeline. Items
    /// whose guid was already delivered are skipped without evaluation.
    pub fn filter(&mut self, items: &[Item], triggers: &[Arc<Trigger>]) -> Vec<Item> {
        let mut matched = Vec::new();
        for item in items {
            if self.seen.contains(&item.guid) {
                continue;
            }
            if triggers.iter().any(|trigger| trigger.evaluate(item)) {
                self.seen.insert(item.guid.clone());
                matched.push(item.clone());
            }
        }
        debug!("matched {} of {} items", matched.len(), items.len());
        matched
    }

    /// Number of distinct guids delivered so far.
    pub fn seen_count(&self) -> usize {
        self.seen.len()
    }

    /// Forget every guid delivered so far.
    pub fn reset(&mut self) {
        self.seen.clear();
    }
}
