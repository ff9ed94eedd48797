//! Trigger definitions: leaf predicates over item content and time, plus
//! boolean combinators.
//!
//! Triggers form a tree evaluated against one [`Item`] at a time:
//! - `Title` / `Description`: fire when a phrase occurs in that field
//! - `Before` / `After`: fire strictly before/after a fixed threshold
//! - `Not` / `And` / `Or`: combine other triggers
//!
//! Composite children are reference-counted, so one definition can appear
//! in several trees without duplication.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::triggers::phrase::Phrase;
use crate::types::Item;

/// A predicate over news items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Trigger {
    /// Fires when the phrase occurs in the item title.
    Title { phrase: Phrase },

    /// Fires when the phrase occurs in the item description.
    Description { phrase: Phrase },

    /// Fires for items published strictly before the threshold.
    Before { threshold: DateTime<FixedOffset> },

    /// Fires for items published strictly after the threshold.
    After { threshold: DateTime<FixedOffset> },

    /// Inverts another trigger.
    Not { inner: Arc<Trigger> },

    /// Fires when both children fire.
    And {
        left: Arc<Trigger>,
        right: Arc<Trigger>,
    },

    /// Fires when either child fires.
    Or {
        left: Arc<Trigger>,
        right: Arc<Trigger>,
    },
}

impl Trigger {
    /// Create a title phrase trigger.
    pub fn title(phrase: &str) -> Self {
        Self::Title {
            phrase: Phrase::new(phrase),
        }
    }

    /// Create a description phrase trigger.
    pub fn description(phrase: &str) -> Self {
        Self::Description {
            phrase: Phrase::new(phrase),
        }
    }

    /// Create a trigger firing before `threshold`.
    pub fn before(threshold: DateTime<FixedOffset>) -> Self {
        Self::Before { threshold }
    }

    /// Create a trigger firing after `threshold`.
    pub fn after(threshold: DateTime<FixedOffset>) -> Self {
        Self::After { threshold }
    }

    /// Negate a trigger.
    pub fn not(inner: impl Into<Arc<Trigger>>) -> Self {
        Self::Not {
            inner: inner.into(),
        }
    }

    /// Conjunction of two triggers.
    pub fn and(left: impl Into<Arc<Trigger>>, right: impl Into<Arc<Trigger>>) -> Self {
        Self::And {
            left: left.into(),
            right: right.into(),
        }
    }

    /// Disjunction of two triggers.
    pub fn or(left: impl Into<Arc<Trigger>>, right: impl Into<Arc<Trigger>>) -> Self {
        Self::Or {
            left: left.into(),
            right: right.into(),
        }
    }

    /// Evaluate this trigger against an item. Total: never fails.
    pub fn evaluate(&self, item: &Item) -> bool {
        match self {
            Trigger::Title { phrase } => phrase.matches(&item.title),
            Trigger::Description { phrase } => phrase.matches(&item.description),
            Trigger::Before { threshold } => item.published_at < *threshold,
            Trigger::After { threshold } => item.published_at > *threshold,
            Trigger::Not { inner } => !inner.evaluate(item),
            Trigger::And { left, right } => left.evaluate(item) && right.evaluate(item),
            Trigger::Or { left, right } => left.evaluate(item) || right.evaluate(item),
        }
    }
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trigger::Title { phrase } => write!(f, "title contains \"{}\"", phrase),
            Trigger::Description { phrase } => write!(f, "description contains \"{}\"", phrase),
            Trigger::Before { threshold } => write!(f, "published before {}", threshold),
            Trigger::After { threshold } => write!(f, "published after {}", threshold),
            Trigger::Not { inner } => write!(f, "not ({})", inner),
            Trigger::And { left, right } => write!(f, "({}) and ({})", left, right),
            Trigger::Or { left, right } => write!(f, "({}) or ({})", left, right),
        }
    }
}
