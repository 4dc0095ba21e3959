const ADDITIONAL_INDENT: usize = 4;

/// Caches an indentation unit repeated enough times for the deepest level seen so far
///
/// An empty unit is allowed and indents every level with nothing
#[derive(Debug, Clone)]
pub struct Indentor {
    indent_str: String,
    buf: String,
}

impl Indentor {
    pub fn new(indent_str: impl AsRef<str>) -> Self {
        let indent_str = indent_str.as_ref().to_string();
        let buf = indent_str.repeat(ADDITIONAL_INDENT);

        Self { indent_str, buf }
    }

    /// The single indentation unit
    pub fn unit(&self) -> &str {
        &self.indent_str
    }

    /// Return a `&str` of the `indent_str` repeated `level` times
    ///
    /// Will update internal buffer if required
    pub fn get_indent(&mut self, level: usize) -> &str {
        if self.indent_str.is_empty() {
            return "";
        }

        let levels_cached = self.levels_cached();

        if level > levels_cached {
            self.buf.push_str(
                &self
                    .indent_str
                    .repeat(level - levels_cached + ADDITIONAL_INDENT),
            );
        }

        &self.buf[0..(level * self.indent_str.len())]
    }

    /// Gets the number of indent levels cached
    ///
    /// Only meaningful for a non-empty unit
    fn levels_cached(&self) -> usize {
        self.buf.len() / self.indent_str.len()
    }
}
