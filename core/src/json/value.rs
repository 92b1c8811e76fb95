use std::collections::HashMap;
use std::fmt::{self, Write};

pub type JsonArray = Vec<JsonValue>;

/// Object members. Iteration order is unspecified.
pub type JsonObject = HashMap<String, JsonValue>;

#[derive(Debug, Clone, PartialEq)]
pub enum JsonValue {
    Number(f64),
    String(String),
    Boolean(bool),
    Null,
    Array(JsonArray),
    Object(JsonObject),
}

impl JsonValue {
    /// Member lookup on objects; `None` for every other variant.
    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        match self {
            JsonValue::Object(object) => object.get(key),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&JsonArray> {
        match self {
            JsonValue::Array(array) => Some(array),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&JsonObject> {
        match self {
            JsonValue::Object(object) => Some(object),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            JsonValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            JsonValue::String(s) => Some(s),
            _ => None,
        }
    }

    fn write_to(&self, f: &mut fmt::Formatter<'_>, indent: Option<usize>) -> fmt::Result {
        match self {
            JsonValue::Number(n) => write!(f, "{n}"),
            JsonValue::String(s) => write_escaped(f, s),
            JsonValue::Boolean(b) => write!(f, "{b}"),
            JsonValue::Null => write!(f, "null"),
            JsonValue::Array(array) => {
                if array.is_empty() {
                    return write!(f, "[]");
                }
                f.write_char('[')?;
                for (i, item) in array.iter().enumerate() {
                    if i > 0 {
                        f.write_char(',')?;
                    }
                    newline(f, indent.map(|level| level + 1))?;
                    item.write_to(f, indent.map(|level| level + 1))?;
                }
                newline(f, indent)?;
                f.write_char(']')
            }
            JsonValue::Object(object) => {
                if object.is_empty() {
                    return write!(f, "{{}}");
                }
                // Sorted so the output is stable across runs.
                let mut members: Vec<_> = object.iter().collect();
                members.sort_by(|a, b| a.0.cmp(b.0));

                f.write_char('{')?;
                for (i, (key, value)) in members.into_iter().enumerate() {
                    if i > 0 {
                        f.write_char(',')?;
                    }
                    newline(f, indent.map(|level| level + 1))?;
                    write_escaped(f, key)?;
                    f.write_str(if indent.is_some() { ": " } else { ":" })?;
                    value.write_to(f, indent.map(|level| level + 1))?;
                }
                newline(f, indent)?;
                f.write_char('}')
            }
        }
    }
}

/// Compact JSON text; the alternate form (`{:#}`) indents by two spaces.
impl fmt::Display for JsonValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let indent = f.alternate().then_some(0);
        self.write_to(f, indent)
    }
}

fn newline(f: &mut fmt::Formatter<'_>, indent: Option<usize>) -> fmt::Result {
    if let Some(level) = indent {
        f.write_char('\n')?;
        for _ in 0..level {
            f.write_str("  ")?;
        }
    }
    Ok(())
}

fn write_escaped(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    f.write_char('"')?;
    for c in s.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            '\u{8}' => f.write_str("\\b")?,
            '\u{c}' => f.write_str("\\f")?,
            c if c.is_control() => write!(f, "\\u{:04x}", c as u32)?,
            c => f.write_char(c)?,
        }
    }
    f.write_char('"')
}
