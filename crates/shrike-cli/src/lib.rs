//! shrike-cli - command-line interface for the shrike filtering engine.
//!
//! ## Subcommands
//!
//! - `run` - filter a batch of feed entries through a trigger file
//! - `validate` - parse a trigger file and describe its contents
//!
//! CLI construction is separated from the handlers; filtering semantics
//! live in `shrike-core`. This crate contributes the file-backed
//! [`sources`] and stream-backed [`sinks`] the handlers wire together.

pub mod run;
pub mod sinks;
pub mod sources;
pub mod validate;
