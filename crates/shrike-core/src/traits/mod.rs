//! Collaborator traits implemented outside the core.

mod sink;
mod source;

pub use sink::ItemSink;
pub use source::FeedSource;
