//! Core data types for shrike.

mod item;
pub mod time;

pub use item::{FeedEntry, Item};
