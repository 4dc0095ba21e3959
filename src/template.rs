//! Runtime templates for operations whose format is picked at runtime
//!
//! A template is plain text where every `{}` is replaced by the argument's [`Display`] output.
//! `{{` and `}}` produce literal braces. Anything else, including unmatched braces or named
//! placeholders like `{name}`, is copied through verbatim.

use std::fmt::{Display, Write};

const PLACEHOLDER: &str = "{}";
const ESCAPED_LEFT_BRACE: &str = "{{";
const ESCAPED_RIGHT_BRACE: &str = "}}";

const BRACES: &[char] = &['{', '}'];

/// Fill `template` with `arg`, appending the result to `out`
pub fn fill_into(out: &mut String, template: &str, arg: &dyn Display) {
    let mut rest = template;

    while let Some(pos) = rest.find(BRACES) {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        rest = if tail.starts_with(ESCAPED_LEFT_BRACE) {
            out.push('{');
            &tail[2..]
        } else if tail.starts_with(ESCAPED_RIGHT_BRACE) {
            out.push('}');
            &tail[2..]
        } else if tail.starts_with(PLACEHOLDER) {
            // A failing Display impl leaves whatever it managed to write
            let _ = write!(out, "{arg}");
            &tail[2..]
        } else {
            out.push_str(&tail[..1]);
            &tail[1..]
        };
    }

    out.push_str(rest);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill(template: &str, arg: &dyn Display) -> String {
        let mut out = String::new();
        fill_into(&mut out, template, arg);
        out
    }

    #[test]
    fn test_placeholders() {
        assert_eq!(fill("got {}", &"x"), "got x");
        assert_eq!(fill("{} and {}", &3), "3 and 3");
        assert_eq!(fill("no placeholder", &3), "no placeholder");
        assert_eq!(fill("", &3), "");
        assert_eq!(fill("{}", &"ünïcödé"), "ünïcödé");
    }

    #[test]
    fn test_escapes() {
        assert_eq!(fill("{{}}", &1), "{}");
        assert_eq!(fill("{{{}}}", &1), "{1}");
        assert_eq!(fill("a }} b", &1), "a } b");
    }

    #[test]
    fn test_malformed_is_verbatim() {
        assert_eq!(fill("{name}", &1), "{name}");
        assert_eq!(fill("open {", &1), "open {");
        assert_eq!(fill("} close", &1), "} close");
        assert_eq!(fill("%v {:?}", &1), "%v {:?}");
    }

    #[test]
    fn test_fill_into_appends() {
        let mut out = String::from("prefix ");
        fill_into(&mut out, "[{}]", &"x");
        assert_eq!(out, "prefix [x]");
    }
}
