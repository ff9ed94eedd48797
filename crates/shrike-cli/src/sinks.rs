//! Sinks writing matched items to an output stream.

use std::io::{self, Write};

use shrike_core::{Item, ItemSink, Result};

/// Writes one two-line block per item: the title, then the indented link.
pub struct TextSink<W> {
    writer: W,
}

impl TextSink<io::Stdout> {
    /// Text sink writing to stdout.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TextSink<W> {
    /// Text sink writing to `writer`.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ItemSink for TextSink<W> {
    fn deliver(&mut self, items: &[Item]) -> Result<()> {
        for item in items {
            writeln!(self.writer, "{}", item.title)?;
            writeln!(self.writer, "    {}", item.link)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

/// Writes the whole batch as one pretty-printed JSON array.
pub struct JsonSink<W> {
    writer: W,
}

impl JsonSink<io::Stdout> {
    /// JSON sink writing to stdout.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> JsonSink<W> {
    /// JSON sink writing to `writer`.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ItemSink for JsonSink<W> {
    fn deliver(&mut self, items: &[Item]) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, items)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shrike_core::types::time::parse_pub_date;

    fn items() -> Vec<Item> {
        vec![
            Item::new(
                "g1",
                "Purple cow spotted",
                "Seen grazing downtown.",
                "https://example.com/cow",
                parse_pub_date("Tue, 02 Jan 2024 15:04:05 GMT").unwrap(),
            ),
            Item::new(
                "g2",
                "Budget approved",
                "Passed on a narrow vote.",
                "https://example.com/budget",
                parse_pub_date("Tue, 02 Jan 2024 16:00:00 GMT").unwrap(),
            ),
        ]
    }

    #[test]
    fn test_text_sink_layout() {
        let mut buffer = Vec::new();
        TextSink::new(&mut buffer).deliver(&items()).unwrap();
        let output = String::from_utf8(buffer).unwrap();
        assert_eq!(
            output,
            "Purple cow spotted\n    https://example.com/cow\n\
             Budget approved\n    https://example.com/budget\n"
        );
    }

    #[test]
    fn test_text_sink_empty_batch() {
        let mut buffer = Vec::new();
        TextSink::new(&mut buffer).deliver(&[]).unwrap();
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_json_sink_emits_parseable_array() {
        let mut buffer = Vec::new();
        JsonSink::new(&mut buffer).deliver(&items()).unwrap();
        let parsed: Vec<Item> = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(parsed, items());
    }

    #[test]
    fn test_json_sink_empty_batch_is_empty_array() {
        let mut buffer = Vec::new();
        JsonSink::new(&mut buffer).deliver(&[]).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap().trim(), "[]");
    }
}
