//! Accumulated configuration text.

use std::fmt;
use std::io;

/// Ordered block of configuration lines.
///
/// Rendered with every line terminated by `\n`, which is the exact form
/// a device CLI accepts when the block is pasted or uploaded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigText {
    lines: Vec<String>,
}

impl ConfigText {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one line; it must not contain a line terminator.
    pub fn push_line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Appends every line of `other` after the current ones.
    pub fn append(&mut self, other: ConfigText) {
        self.lines.extend(other.lines);
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Writes the rendered block to `out`.
    pub fn write_to<W: io::Write>(&self, mut out: W) -> io::Result<()> {
        for line in &self.lines {
            writeln!(out, "{}", line)?;
        }
        out.flush()
    }
}

impl fmt::Display for ConfigText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

impl Extend<String> for ConfigText {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        self.lines.extend(iter);
    }
}

impl FromIterator<String> for ConfigText {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            lines: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_display_terminates_every_line() {
        let mut text = ConfigText::new();
        text.push_line("interface f0/1");
        text.push_line("exit");
        assert_eq!(text.to_string(), "interface f0/1\nexit\n");
    }

    #[test]
    fn test_empty_renders_nothing() {
        assert_eq!(ConfigText::new().to_string(), "");
    }

    #[test]
    fn test_append_concatenates() {
        let mut first: ConfigText = vec!["a".to_string()].into_iter().collect();
        let second: ConfigText = vec!["b".to_string(), "c".to_string()].into_iter().collect();
        first.append(second);
        assert_eq!(first.lines(), &["a", "b", "c"]);
    }

    #[test]
    fn test_write_to_matches_display() {
        let mut text = ConfigText::new();
        text.extend(["one".to_string(), "two".to_string()]);

        let mut buf = Vec::new();
        text.write_to(&mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), text.to_string());
    }
}
