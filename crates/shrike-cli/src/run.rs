//! Run subcommand: filter a batch of feed entries through a trigger file.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use shrike_core::{FeedSource, FilterPipeline, Item, ItemSink, TriggerSet};
use tracing::info;

use crate::sinks::{JsonSink, TextSink};
use crate::sources::JsonlFeedSource;

/// Arguments for the run subcommand.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Trigger configuration file.
    #[arg(long)]
    pub triggers: PathBuf,

    /// JSON Lines file of feed entries to filter.
    #[arg(long)]
    pub items: PathBuf,

    /// Emit matched items as a JSON array instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Execute `shrike run`.
pub fn run(args: RunArgs) -> anyhow::Result<()> {
    let mut sink: Box<dyn ItemSink> = if args.json {
        Box::new(JsonSink::stdout())
    } else {
        Box::new(TextSink::stdout())
    };
    execute(&args, sink.as_mut())
}

/// Load triggers, read and normalize entries, filter, deliver.
fn execute(args: &RunArgs, sink: &mut dyn ItemSink) -> anyhow::Result<()> {
    let set = TriggerSet::load(&args.triggers)
        .with_context(|| format!("failed to load triggers from {}", args.triggers.display()))?;
    info!("loaded {} active trigger(s)", set.len());

    let mut source = JsonlFeedSource::new(&args.items);
    let entries = source
        .fetch()
        .with_context(|| format!("failed to read entries from {}", source.name()))?;
    let items = entries
        .into_iter()
        .map(Item::try_from)
        .collect::<shrike_core::Result<Vec<_>>>()
        .context("failed to normalize feed entries")?;

    let mut pipeline = FilterPipeline::new();
    let matched = pipeline.filter(&items, set.active());
    info!("{} of {} item(s) matched", matched.len(), items.len());

    sink.deliver(&matched)?;
    Ok(())
}
