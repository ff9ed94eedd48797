//! Line-oriented trigger configuration interpreter.
//!
//! Configuration is a sequence of comma-separated records, one per line.
//! A definition line (`name,kind,args...`) binds a name to a trigger; an
//! inclusion line (`ADD,name,...`) marks named triggers active. Blank
//! lines and lines starting with `//` are skipped. Names and kind
//! keywords are case-insensitive; references resolve against bindings
//! made on earlier lines only.
//!
//! ```text
//! // surface election coverage from 2024 onward
//! t1,title,election
//! t2,after,01 Jan 2024 00:00:00
//! t3,and,t1,t2
//! ADD,t3
//! ```

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use crate::error::{Error, Result};
use crate::triggers::types::Trigger;
use crate::types::time;

/// Marker for comment lines.
const COMMENT: &str = "//";

/// Keyword opening an inclusion line, compared case-insensitively.
const ADD_KEYWORD: &str = "add";

/// A parsed trigger configuration: named bindings plus the ordered list
/// of triggers marked active.
#[derive(Debug, Clone, Default)]
pub struct TriggerSet {
    bindings: HashMap<String, Arc<Trigger>>,
    active: Vec<Arc<Trigger>>,
}

impl TriggerSet {
    /// Interpret configuration text.
    ///
    /// Stops at the first bad line; errors carry 1-based line numbers,
    /// counting every line of `text` including comments and blanks.
    pub fn parse(text: &str) -> Result<Self> {
        let mut set = TriggerSet::default();
        for (index, raw) in text.lines().enumerate() {
            let line = raw.trim_end();
            if line.is_empty() || line.starts_with(COMMENT) {
                continue;
            }
            set.interpret_line(line, index + 1)?;
        }
        Ok(set)
    }

    /// Read and interpret a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Triggers marked active, in inclusion order.
    pub fn active(&self) -> &[Arc<Trigger>] {
        &self.active
    }

    /// Look up a binding by name, case-insensitively.
    pub fn binding(&self, name: &str) -> Option<&Arc<Trigger>> {
        self.bindings.get(&name.to_lowercase())
    }

    /// Iterate over all bindings, in no particular order.
    pub fn bindings(&self) -> impl Iterator<Item = (&str, &Arc<Trigger>)> {
        self.bindings
            .iter()
            .map(|(name, trigger)| (name.as_str(), trigger))
    }

    /// Number of active triggers.
    pub fn len(&self) -> usize {
        self.active.len()
    }

    /// Whether no triggers are active.
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    fn interpret_line(&mut self, line: &str, number: usize) -> Result<()> {
        let fields: Vec<&str> = line.split(',').collect();
        if fields[0].to_lowercase() == ADD_KEYWORD {
            return self.include(&fields[1..], number);
        }
        if fields.len() < 3 {
            return Err(Error::malformed(number, "expected name,kind,arguments"));
        }

        let name = fields[0].to_lowercase();
        let kind = fields[1].to_lowercase();
        let trigger = self.build_trigger(&kind, &fields[2..], number)?;
        debug!("line {}: bound '{}' to {}", number, name, trigger);
        // Last write wins; triggers already activated keep the old binding.
        self.bindings.insert(name, Arc::new(trigger));
        Ok(())
    }

    fn build_trigger(&self, kind: &str, args: &[&str], number: usize) -> Result<Trigger> {
        match kind {
            "title" => {
                expect_args(kind, args, 1, number)?;
                Ok(Trigger::title(args[0]))
            }
            "description" => {
                expect_args(kind, args, 1, number)?;
                Ok(Trigger::description(args[0]))
            }
            "before" => {
                expect_args(kind, args, 1, number)?;
                Ok(Trigger::before(time::parse_threshold(args[0])?))
            }
            "after" => {
                expect_args(kind, args, 1, number)?;
                Ok(Trigger::after(time::parse_threshold(args[0])?))
            }
            "not" => {
                expect_args(kind, args, 1, number)?;
                Ok(Trigger::not(self.resolve(args[0], number)?))
            }
            "and" => {
                expect_args(kind, args, 2, number)?;
                let left = self.resolve(args[0], number)?;
                let right = self.resolve(args[1], number)?;
                Ok(Trigger::and(left, right))
            }
            "or" => {
                expect_args(kind, args, 2, number)?;
                let left = self.resolve(args[0], number)?;
                let right = self.resolve(args[1], number)?;
                Ok(Trigger::or(left, right))
            }
            _ => Err(Error::unknown_kind(kind, number)),
        }
    }

    fn resolve(&self, name: &str, number: usize) -> Result<Arc<Trigger>> {
        let key = name.to_lowercase();
        self.bindings
            .get(&key)
            .cloned()
            .ok_or_else(|| Error::unknown_name(key, number))
    }

    fn include(&mut self, names: &[&str], number: usize) -> Result<()> {
        if names.is_empty() {
            return Err(Error::malformed(
                number,
                "ADD line must name at least one trigger",
            ));
        }
        for name in names {
            let trigger = self.resolve(name, number)?;
            debug!("line {}: activated '{}'", number, name.to_lowercase());
            self.active.push(trigger);
        }
        Ok(())
    }
}

/// Check a definition's argument count against its kind's arity.
fn expect_args(kind: &str, args: &[&str], expected: usize, number: usize) -> Result<()> {
    if args.len() != expected {
        return Err(Error::malformed(
            number,
            format!(
                "kind '{}' takes {} argument(s), got {}",
                kind,
                expected,
                args.len()
            ),
        ));
    }
    Ok(())
}
