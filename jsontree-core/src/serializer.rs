//! Text rendering for [`Value`] trees.
//!
//! Two layouts:
//! - compact (`indent < 0`): no whitespace between tokens
//! - pretty (`indent >= 0`): one element or member per line, indented with
//!   one tab per nesting level counted from `indent`
//!
//! Strings are written between quotes without escaping, matching the
//! parser's verbatim string handling.

use std::fmt::{self, Write};

use crate::value::Value;

/// Layout for [`Value::write_text`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// No inserted whitespace or line breaks.
    Compact,
    /// Line per element; the value itself sits at this depth.
    Pretty(usize),
}

impl Indent {
    fn nested(self) -> Indent {
        match self {
            Indent::Compact => Indent::Compact,
            Indent::Pretty(depth) => Indent::Pretty(depth + 1),
        }
    }
}

impl From<i32> for Indent {
    fn from(indent: i32) -> Self {
        usize::try_from(indent).map_or(Indent::Compact, Indent::Pretty)
    }
}

/// Render `value` as text. Negative `indent` selects the compact layout.
///
/// ```
/// use jsontree_core::{parse, to_text};
///
/// let v = parse("[1, 2]").unwrap();
/// assert_eq!(to_text(&v, -1), "[1,2]");
/// assert_eq!(to_text(&v, 0), "[\n\t1,\n\t2\n]");
/// ```
pub fn to_text(value: &Value, indent: i32) -> String {
    value.to_text(indent)
}

fn write_tabs<W: Write>(out: &mut W, count: usize) -> fmt::Result {
    for _ in 0..count {
        out.write_char('\t')?;
    }
    Ok(())
}

fn write_number<W: Write>(out: &mut W, n: f64) -> fmt::Result {
    if n.is_finite() {
        write!(out, "{n}")
    } else {
        // no JSON literal for NaN or infinity
        out.write_str("null")
    }
}

impl Value {
    /// Render as text. Negative `indent` selects the compact layout.
    pub fn to_text(&self, indent: i32) -> String {
        let mut out = String::new();
        // `fmt::Write for String` never returns `Err`
        let _ = self.write_text(&mut out, Indent::from(indent));
        out
    }

    /// Write this value into `out` using the given layout.
    pub fn write_text<W: Write>(&self, out: &mut W, indent: Indent) -> fmt::Result {
        match self {
            Value::Null => out.write_str("null"),
            Value::Boolean(b) => out.write_str(if *b { "true" } else { "false" }),
            Value::Number(n) => write_number(out, *n),
            Value::String(s) => write!(out, "\"{s}\""),
            Value::Array(items) => {
                write_container(out, indent, ('[', ']'), items.iter(), |out, item, inner| {
                    item.write_text(out, inner)
                })
            }
            Value::Object(map) => {
                let sep = match indent {
                    Indent::Compact => ":",
                    Indent::Pretty(_) => ": ",
                };
                write_container(out, indent, ('{', '}'), map.iter(), |out, (key, value), inner| {
                    write!(out, "\"{key}\"{sep}")?;
                    value.write_text(out, inner)
                })
            }
        }
    }
}

/// Shared bracket/separator layout for arrays and objects.
fn write_container<W, I, F>(
    out: &mut W,
    indent: Indent,
    (open, close): (char, char),
    entries: I,
    mut write_entry: F,
) -> fmt::Result
where
    W: Write,
    I: Iterator,
    F: FnMut(&mut W, I::Item, Indent) -> fmt::Result,
{
    let inner = indent.nested();
    out.write_char(open)?;
    if let Indent::Pretty(_) = indent {
        out.write_char('\n')?;
    }

    let mut entries = entries.peekable();
    while let Some(entry) = entries.next() {
        if let Indent::Pretty(depth) = inner {
            write_tabs(out, depth)?;
        }
        write_entry(out, entry, inner)?;
        if entries.peek().is_some() {
            out.write_char(',')?;
        }
        if let Indent::Pretty(_) = indent {
            out.write_char('\n')?;
        }
    }

    if let Indent::Pretty(depth) = indent {
        write_tabs(out, depth)?;
    }
    out.write_char(close)
}

impl fmt::Display for Value {
    /// Pretty layout at depth 0.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_text(f, Indent::Pretty(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Object;

    #[test]
    fn test_scalars() {
        assert_eq!(Value::Null.to_text(-1), "null");
        assert_eq!(Value::Boolean(true).to_text(-1), "true");
        assert_eq!(Value::Boolean(false).to_text(0), "false");
        assert_eq!(Value::Number(45.54545).to_text(-1), "45.54545");
        assert_eq!(Value::Number(3.0).to_text(-1), "3");
        assert_eq!(Value::Number(-0.5).to_text(-1), "-0.5");
        assert_eq!(Value::from("hi there!").to_text(-1), "\"hi there!\"");
    }

    #[test]
    fn test_non_finite_numbers() {
        assert_eq!(Value::Number(f64::NAN).to_text(-1), "null");
        assert_eq!(Value::Number(f64::INFINITY).to_text(-1), "null");
    }

    #[test]
    fn test_indent_from_int() {
        assert_eq!(Indent::from(-1), Indent::Compact);
        assert_eq!(Indent::from(-7), Indent::Compact);
        assert_eq!(Indent::from(0), Indent::Pretty(0));
        assert_eq!(Indent::from(3), Indent::Pretty(3));
    }

    #[test]
    fn test_compact_nested() {
        let v = Value::from(vec![
            Value::from(vec![Value::from(1)]),
            Value::Array(Vec::new()),
        ]);
        assert_eq!(v.to_text(-1), "[[1],[]]");
    }

    #[test]
    fn test_pretty_nested_array() {
        let v = Value::from(vec![Value::from(vec![Value::from(1), Value::from(2)])]);
        assert_eq!(v.to_text(0), "[\n\t[\n\t\t1,\n\t\t2\n\t]\n]");
    }

    #[test]
    fn test_pretty_starts_at_given_depth() {
        let v = Value::from(vec![Value::Null]);
        assert_eq!(v.to_text(2), "[\n\t\t\tnull\n\t\t]");
    }

    #[test]
    fn test_empty_containers() {
        assert_eq!(Value::Array(vec![]).to_text(-1), "[]");
        assert_eq!(Value::Object(Object::new()).to_text(-1), "{}");
        assert_eq!(Value::Array(vec![]).to_text(0), "[\n]");
        assert_eq!(Value::Object(Object::new()).to_text(1), "{\n\t}");
    }

    #[test]
    fn test_object_single_member() {
        let mut v = Value::Object(Object::new());
        v["key"] = Value::from(true);
        assert_eq!(v.to_text(-1), "{\"key\":true}");
        assert_eq!(v.to_text(0), "{\n\t\"key\": true\n}");
    }

    #[test]
    fn test_display_is_pretty() {
        let v = Value::from(vec![Value::from("a")]);
        assert_eq!(v.to_string(), "[\n\t\"a\"\n]");
    }
}
