//! Validate subcommand: parse a trigger file and describe its contents.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Args;
use serde::Serialize;
use shrike_core::{Trigger, TriggerSet};

/// Arguments for the validate subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Trigger configuration file.
    #[arg(long)]
    pub triggers: PathBuf,

    /// Emit the parsed configuration as JSON.
    #[arg(long)]
    pub json: bool,
}

/// JSON shape of a parsed configuration.
#[derive(Serialize)]
struct Report<'a> {
    bindings: BTreeMap<&'a str, &'a Arc<Trigger>>,
    active: &'a [Arc<Trigger>],
}

/// Execute `shrike validate`.
pub fn run(args: ValidateArgs) -> anyhow::Result<()> {
    let set = TriggerSet::load(&args.triggers)
        .with_context(|| format!("invalid trigger configuration {}", args.triggers.display()))?;
    print!("{}", render(&set, args.json)?);
    Ok(())
}

/// Render a parsed set as text or JSON.
fn render(set: &TriggerSet, json: bool) -> anyhow::Result<String> {
    if json {
        let report = Report {
            bindings: set.bindings().collect(),
            active: set.active(),
        };
        return Ok(format!("{}\n", serde_json::to_string_pretty(&report)?));
    }

    let mut bindings: Vec<_> = set.bindings().collect();
    bindings.sort_by_key(|(name, _)| *name);

    let mut out = format!(
        "{} binding(s), {} active trigger(s)\n",
        bindings.len(),
        set.len()
    );
    for (name, trigger) in bindings {
        out.push_str(&format!("  {} = {}\n", name, trigger));
    }
    if !set.is_empty() {
        out.push_str("active:\n");
        for trigger in set.active() {
            out.push_str(&format!("  {}\n", trigger));
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const CONFIG: &str = "\
t1,title,purple cow
t2,after,01 Jan 2024 00:00:00
t3,and,t1,t2
ADD,t3";

    #[test]
    fn test_render_text_lists_bindings_and_active() {
        let set = TriggerSet::parse(CONFIG).unwrap();
        let text = render(&set, false).unwrap();
        assert!(text.starts_with("3 binding(s), 1 active trigger(s)\n"));
        assert!(text.contains("  t1 = title contains \"purple cow\"\n"));
        assert!(text.contains("active:\n"));
    }

    #[test]
    fn test_render_json_shape() {
        let set = TriggerSet::parse(CONFIG).unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&render(&set, true).unwrap()).unwrap();
        assert_eq!(json["bindings"]["t3"]["type"], "and");
        assert_eq!(json["active"][0]["type"], "and");
        assert_eq!(json["active"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_run_rejects_bad_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "t1,title").unwrap();
        file.flush().unwrap();

        let err = run(ValidateArgs {
            triggers: file.path().to_path_buf(),
            json: false,
        })
        .unwrap_err();
        assert!(err.to_string().contains("invalid trigger configuration"));
    }
}
