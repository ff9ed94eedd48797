//! Trigger algebra: phrase matching, predicate trees, and the
//! configuration interpreter that builds them.

mod parser;
mod phrase;
mod types;

pub use parser::TriggerSet;
pub use phrase::{tokenize, Phrase};
pub use types::Trigger;
