use std::fmt::{Debug, Display};

use tracing::warn;

use crate::accumulator::TextAccumulator;
use crate::error::{Error, Result};
use crate::template;

impl TextAccumulator {
    /// Appends `value` like [`Self::value`] if there is one. Returns whether anything was appended
    pub fn if_some<T: Debug>(&mut self, value: Option<T>) -> bool {
        match value {
            Some(value) => {
                self.value(value);
                true
            }
            None => false,
        }
    }

    /// Appends `when_true` or `when_false` on a new line. Returns `condition`
    pub fn either(&mut self, condition: bool, when_true: impl Debug, when_false: impl Debug) -> bool {
        if condition {
            self.value(when_true);
        } else {
            self.value(when_false);
        }
        condition
    }

    /// Fills the template matching `condition` and appends it on a new line. Returns `condition`
    ///
    /// If the chosen template is empty nothing is written at all, not even the line break.
    /// See [`crate::template`] for the template syntax.
    pub fn either_formatted(
        &mut self,
        condition: bool,
        template_true: &str,
        template_false: &str,
        arg_true: impl Display,
        arg_false: impl Display,
    ) -> bool {
        if condition && !template_true.is_empty() {
            self.line_prefix();
            template::fill_into(self.buffer_mut(), template_true, &arg_true);
        } else if !condition && !template_false.is_empty() {
            self.line_prefix();
            template::fill_into(self.buffer_mut(), template_false, &arg_false);
        }
        condition
    }

    /// A pass/fail list: for each name, [`Self::either_formatted`] with the matching condition
    ///
    /// `conditions` and `names` are parallel. If their lengths differ nothing is written and
    /// [`Error::LengthMismatch`] is returned.
    ///
    /// ```rust
    /// use linebuild::TextAccumulator;
    ///
    /// let mut out = TextAccumulator::default();
    /// out.conditional_list(&[true, false], "ok {}", "FAILED {}", &["build", "test"])
    ///     .unwrap();
    /// assert_eq!(out.render(), "\nok build\nFAILED test");
    /// ```
    pub fn conditional_list<S: AsRef<str>>(
        &mut self,
        conditions: &[bool],
        template_true: &str,
        template_false: &str,
        names: &[S],
    ) -> Result<&mut Self> {
        if conditions.len() != names.len() {
            warn!(
                conditions = conditions.len(),
                names = names.len(),
                "Refusing to write conditional list with mismatched lengths"
            );
            return Err(Error::LengthMismatch {
                conditions: conditions.len(),
                names: names.len(),
            });
        }

        for (&condition, name) in conditions.iter().zip(names) {
            let name = name.as_ref();
            self.either_formatted(condition, template_true, template_false, name, name);
        }
        Ok(self)
    }

    /// `Error: <message>` for an error, otherwise the value like [`Self::value`]
    pub fn result<T: Debug, E: Display>(&mut self, result: std::result::Result<T, E>) -> &mut Self {
        match result {
            Ok(value) => self.value(value),
            Err(e) => self.error_line(e),
        }
    }

    /// Writes the error line if there is an error, then the filled template if there is a value
    ///
    /// The two checks are independent, so both lines, one of them, or neither may be written.
    pub fn result_and<T: Display, E: Display>(
        &mut self,
        template: &str,
        value: Option<T>,
        error: Option<E>,
    ) -> &mut Self {
        if let Some(e) = error {
            self.error_line(e);
        }

        if let Some(value) = value.filter(|_| !template.is_empty()) {
            self.line_prefix();
            template::fill_into(self.buffer_mut(), template, &value);
        }
        self
    }

    fn error_line(&mut self, e: impl Display) -> &mut Self {
        self.formatted_line(format_args!("Error: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_either_formatted_empty_template_is_noop() {
        let mut acc = TextAccumulator::new("x");
        acc.indent_increase();

        assert!(acc.either_formatted(true, "", "never {}", 1, 2));
        assert!(!acc.either_formatted(false, "never {}", "", 1, 2));
        assert_eq!(acc.as_str(), "x");
    }

    #[test]
    fn test_conditional_list_mismatch_writes_nothing() {
        let mut acc = TextAccumulator::new("start");

        let err = acc
            .conditional_list(&[true, true, false], "+{}", "-{}", &["a", "b"])
            .unwrap_err();

        assert_eq!(
            err,
            Error::LengthMismatch {
                conditions: 3,
                names: 2
            }
        );
        assert_eq!(
            err.to_string(),
            "Parallel lists differ in length: 3 conditions for 2 names"
        );
        assert_eq!(acc.as_str(), "start");
    }

    #[test]
    fn test_conditional_list_skips_empty_branch() {
        let mut acc = TextAccumulator::default();
        acc.conditional_list(&[true, false, true], "{} passed", "", &["a", "b", "c"])
            .unwrap();
        assert_eq!(acc.as_str(), "\na passed\nc passed");
    }

    #[test]
    fn test_result_and_requires_template() {
        let mut acc = TextAccumulator::default();
        acc.result_and("", Some(5), None::<&str>);
        assert!(acc.is_empty());

        acc.result_and("value {}", None::<i32>, None::<&str>);
        assert!(acc.is_empty());
    }
}
