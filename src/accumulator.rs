use std::fmt::{self, Debug, Display, Write};

use derivative::Derivative;

use crate::indentor::Indentor;
use crate::options::{Options, ReadMode};

const NEWLINE: char = '\n';
const SEPARATOR_WIDTH: usize = 30;
const SEPARATOR_CHAR: char = '-';

/// Accumulates indented, line-oriented text
///
/// Most operations start a new line: a newline followed by the current indentation. The `raw`
/// operations continue the current line, and the `prepend` operations insert before everything
/// built so far.
///
/// ```rust
/// use linebuild::TextAccumulator;
///
/// let mut out = TextAccumulator::new("Report");
/// out.indent_increase()
///     .named_value("count", 3)
///     .formatted_line(format_args!("{} items", "three"));
/// out.formatted_raw(format_args!("(done)"));
///
/// assert_eq!(out.render(), "Report\n\tcount: 3\n\tthree items (done)");
/// ```
#[derive(Derivative, Clone)]
#[derivative(Debug)]
pub struct TextAccumulator {
    /// Everything appended so far
    buffer: String,
    /// Number of indentation units written after each line break
    indent_depth: usize,
    read_mode: ReadMode,
    #[derivative(Debug = "ignore")]
    indentor: Indentor,
}

impl Default for TextAccumulator {
    fn default() -> Self {
        Self::new("")
    }
}

impl TextAccumulator {
    pub fn new(initial: impl Into<String>) -> Self {
        Self::with_options(initial, Options::default())
    }

    /// Starts the buffer with formatted text, e.g. `TextAccumulator::formatted(format_args!("{n} results"))`
    pub fn formatted(args: fmt::Arguments) -> Self {
        Self::new(fmt::format(args))
    }

    /// An empty `options.indent_unit` turns indentation off
    pub fn with_options(initial: impl Into<String>, options: Options) -> Self {
        Self {
            buffer: initial.into(),
            indent_depth: 0,
            read_mode: options.read_mode,
            indentor: Indentor::new(options.indent_unit),
        }
    }

    // Internal writers

    /// Writes a newline and the current indentation
    pub(crate) fn line_prefix(&mut self) {
        self.buffer.push(NEWLINE);
        let indent = self.indentor.get_indent(self.indent_depth);
        self.buffer.push_str(indent);
    }

    pub(crate) fn push_fmt(&mut self, args: fmt::Arguments) {
        // Writing to a String only fails if a Display impl does; keep whatever was written
        let _ = self.buffer.write_fmt(args);
    }

    pub(crate) fn push_line(&mut self, text: &str) {
        self.line_prefix();
        self.buffer.push_str(text);
    }

    pub(crate) fn push_line_fmt(&mut self, args: fmt::Arguments) {
        self.line_prefix();
        self.push_fmt(args);
    }

    /// Writes every line of `text` on its own indented line
    pub(crate) fn push_split(&mut self, text: &str) {
        for line in text.split(NEWLINE) {
            self.push_line(line);
        }
    }

    pub(crate) fn buffer_mut(&mut self) -> &mut String {
        &mut self.buffer
    }

    // Indentation and mode

    pub fn indent_increase(&mut self) -> &mut Self {
        self.indent_depth += 1;
        self
    }

    /// Never goes below zero
    pub fn indent_decrease(&mut self) -> &mut Self {
        self.indent_depth = self.indent_depth.saturating_sub(1);
        self
    }

    pub fn indent_reset(&mut self) -> &mut Self {
        self.indent_depth = 0;
        self
    }

    pub fn indent_depth(&self) -> usize {
        self.indent_depth
    }

    pub fn indent_unit(&self) -> &str {
        self.indentor.unit()
    }

    /// `true` switches to [`ReadMode::ConsumeOnRead`], `false` back to [`ReadMode::Persistent`]
    pub fn enable_clear_on_read(&mut self, clear: bool) -> &mut Self {
        self.set_read_mode(ReadMode::from(clear))
    }

    pub fn set_read_mode(&mut self, mode: ReadMode) -> &mut Self {
        self.read_mode = mode;
        self
    }

    pub fn read_mode(&self) -> ReadMode {
        self.read_mode
    }

    // Line oriented

    /// A bare newline, without indentation
    pub fn newline(&mut self) -> &mut Self {
        self.buffer.push(NEWLINE);
        self
    }

    /// Each item on its own indented line
    ///
    /// An empty iterator writes a bare newline instead, like [`Self::newline`]
    pub fn lines<I>(&mut self, lines: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut lines = lines.into_iter().peekable();
        if lines.peek().is_none() {
            return self.newline();
        }

        for line in lines {
            self.push_line(line.as_ref());
        }
        self
    }

    pub fn formatted_line(&mut self, args: fmt::Arguments) -> &mut Self {
        self.push_line_fmt(args);
        self
    }

    /// The [`Debug`] representation, which names struct fields
    pub fn value(&mut self, value: impl Debug) -> &mut Self {
        self.push_line_fmt(format_args!("{value:?}"));
        self
    }

    /// The [`Display`] representation
    pub fn value_no_field_names(&mut self, value: impl Display) -> &mut Self {
        self.push_line_fmt(format_args!("{value}"));
        self
    }

    /// `name: value`, with the value's [`Debug`] representation
    pub fn named_value(&mut self, name: &str, value: impl Debug) -> &mut Self {
        self.push_line_fmt(format_args!("{name}: {value:?}"));
        self
    }

    /// A line indented one level less than the current depth
    ///
    /// Equivalent to `indent_decrease().value_no_field_names(title).indent_increase()`, except
    /// that at depth zero the depth stays zero.
    pub fn header(&mut self, title: impl Display) -> &mut Self {
        let depth = self.indent_depth;
        self.indent_depth = depth.saturating_sub(1);
        self.line_prefix();
        self.indent_depth = depth;

        self.push_fmt(format_args!("{title}"));
        self
    }

    /// Splits `text` on newlines so every line gets the current indentation
    ///
    /// Empty text writes nothing
    pub fn split_lines(&mut self, text: &str) -> &mut Self {
        let segments: Vec<&str> = text.split(NEWLINE).collect();

        match segments.as_slice() {
            [single] if single.is_empty() => {}
            [single] => self.push_line(single),
            many => {
                self.lines(many);
            }
        }
        self
    }

    /// Numbered lines: `[00] first`, `[01] second`
    ///
    /// Items containing newlines are split first, and every resulting line gets its own number
    pub fn indexed_list<I>(&mut self, items: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let flattened = flatten_lines(items);

        for (i, line) in flattened.iter().enumerate() {
            self.push_line_fmt(format_args!("[{i:02}] {line}"));
        }
        self
    }

    // Same line

    /// Appends `text` as-is
    pub fn raw(&mut self, text: &str) -> &mut Self {
        self.buffer.push_str(text);
        self
    }

    /// A space, then the formatted text, on the current line
    pub fn formatted_raw(&mut self, args: fmt::Arguments) -> &mut Self {
        self.buffer.push(' ');
        self.push_fmt(args);
        self
    }

    // Prefix insertion

    /// Inserts `indent_units` indentation units and the formatted text before everything in the buffer
    pub fn prepend_formatted(&mut self, indent_units: usize, args: fmt::Arguments) -> &mut Self {
        let mut prefix = String::new();
        if indent_units > 0 {
            prefix.push_str(self.indentor.get_indent(indent_units));
        }
        let _ = prefix.write_fmt(args);

        self.buffer.insert_str(0, &prefix);
        self
    }

    /// Like [`Self::prepend_formatted`] with the [`Debug`] representation of `value`
    pub fn prepend_value(&mut self, indent_units: usize, value: impl Debug) -> &mut Self {
        self.prepend_formatted(indent_units, format_args!("{value:?}"))
    }

    // Retrieval

    /// The assembled text
    ///
    /// In [`ReadMode::ConsumeOnRead`] the buffer is left empty afterwards
    pub fn render(&mut self) -> String {
        match self.read_mode {
            ReadMode::Persistent => self.buffer.clone(),
            ReadMode::ConsumeOnRead => {
                tracing::trace!(len = self.buffer.len(), "Draining text buffer on read");
                std::mem::take(&mut self.buffer)
            }
        }
    }

    /// Empties the buffer regardless of the read mode. Indentation is kept
    pub fn reset(&mut self) -> &mut Self {
        self.buffer.clear();
        self
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn into_string(self) -> String {
        self.buffer
    }

    // Separators

    /// A line of 30 dashes
    pub fn separator(&mut self) -> &mut Self {
        self.separator_with(SEPARATOR_CHAR)
    }

    /// A line of 30 `symbol`s
    pub fn separator_with(&mut self, symbol: char) -> &mut Self {
        let line: String = std::iter::repeat(symbol).take(SEPARATOR_WIDTH).collect();
        self.push_line(&line);
        self
    }
}

/// Splits every item on newlines, keeping the overall order
fn flatten_lines<I>(items: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    items
        .into_iter()
        .flat_map(|item| {
            item.as_ref()
                .split(NEWLINE)
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .collect()
}

impl Write for TextAccumulator {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.buffer.push_str(s);
        Ok(())
    }
}

/// Shows the buffer without consuming it, whatever the read mode
impl Display for TextAccumulator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.buffer)
    }
}

impl From<TextAccumulator> for String {
    fn from(acc: TextAccumulator) -> String {
        acc.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flatten_lines() {
        assert_eq!(
            flatten_lines(["a\nb", "c", "", "d\n"]),
            vec!["a", "b", "c", "", "d", ""]
        );
        assert!(flatten_lines(Vec::<String>::new()).is_empty());
    }

    #[test]
    fn test_line_prefix_uses_cached_indent() {
        let mut acc = TextAccumulator::with_options("", Options::spaces(2));
        acc.indent_increase().indent_increase();
        acc.line_prefix();
        assert_eq!(acc.as_str(), "\n    ");

        acc.indent_reset();
        acc.line_prefix();
        assert_eq!(acc.as_str(), "\n    \n");
    }

    #[test]
    fn test_push_split() {
        let mut acc = TextAccumulator::default();
        acc.indent_increase();
        acc.push_split("a\nb");
        assert_eq!(acc.as_str(), "\n\ta\n\tb");
    }

    #[test]
    fn test_debug_hides_indentor() {
        let acc = TextAccumulator::new("x");
        let debug = format!("{acc:?}");
        assert!(debug.contains("buffer: \"x\""));
        assert!(!debug.contains("indentor"));
    }
}
