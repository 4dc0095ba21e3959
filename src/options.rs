use strum::{Display, EnumIter, EnumString};

const TAB: &str = "\t";

/// What [`crate::TextAccumulator::render`] does to the buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum ReadMode {
    /// Rendering leaves the buffer alone
    Persistent,
    /// Rendering hands the buffer out and leaves it empty, so every render produces a fresh document
    ConsumeOnRead,
}

impl Default for ReadMode {
    fn default() -> Self {
        Self::Persistent
    }
}

impl From<bool> for ReadMode {
    fn from(clear_on_read: bool) -> Self {
        if clear_on_read {
            Self::ConsumeOnRead
        } else {
            Self::Persistent
        }
    }
}

/// Configuration for a [`crate::TextAccumulator`]
///
/// ```rust
/// use linebuild::{Options, ReadMode};
///
/// let options = Options::spaces(2).read_mode(ReadMode::ConsumeOnRead);
/// assert_eq!(options.indent_unit, "  ");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// One level of indentation. Empty turns indentation off
    pub indent_unit: String,
    pub read_mode: ReadMode,
}

impl Default for Options {
    fn default() -> Self {
        Self::tabs()
    }
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// One tab per indentation level
    pub fn tabs() -> Self {
        Self {
            indent_unit: TAB.to_string(),
            read_mode: ReadMode::default(),
        }
    }

    /// `count` spaces per indentation level
    pub fn spaces(count: usize) -> Self {
        Self {
            indent_unit: " ".repeat(count),
            read_mode: ReadMode::default(),
        }
    }

    pub fn indent_unit(mut self, unit: impl Into<String>) -> Self {
        self.indent_unit = unit.into();
        self
    }

    pub fn read_mode(mut self, mode: ReadMode) -> Self {
        self.read_mode = mode;
        self
    }
}
