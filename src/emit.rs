//! Serialization of a [`Table`] back into TOML text.
//!
//! Scalars and inline arrays are written as `key = value` lines. Nested
//! tables become `[path]` sections and arrays whose every element is a table
//! become repeated `[[path]]` sections. Output is value-identical on re-parse,
//! not byte-identical to whatever text the tree was parsed from.

#[cfg(test)]
#[path = "./emit_tests.rs"]
mod tests;

use crate::table::Key;
use crate::{Table, Value};
use std::fmt::{self, Write};

/// Serializes `table` as a TOML document.
///
/// Parsing the result yields a table equal to `table`.
///
/// # Examples
///
/// ```
/// let table = toml_tree::parse("title = 'demo'\n[owner]\nname = \"Tom\"")?;
/// assert_eq!(
///     toml_tree::dump(&table),
///     "title = \"demo\"\n\n[owner]\nname = \"Tom\"\n",
/// );
/// # Ok::<(), toml_tree::Error>(())
/// ```
pub fn dump(table: &Table) -> String {
    table.to_string()
}

/// Writes the same text as [`dump`].
impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Emitter::new(f).table_body(self)
    }
}

struct Emitter<'a, 'w, W: Write> {
    out: &'w mut W,
    /// Keys from the root to the section being written.
    path: Vec<&'a Key>,
    wrote_any: bool,
}

impl<'a, 'w, W: Write> Emitter<'a, 'w, W> {
    fn new(out: &'w mut W) -> Self {
        Emitter {
            out,
            path: Vec::new(),
            wrote_any: false,
        }
    }

    fn table_body(&mut self, table: &'a Table) -> fmt::Result {
        for (key, value) in table {
            if is_section(value) {
                continue;
            }
            write_key(self.out, key.as_str())?;
            self.out.write_str(" = ")?;
            write_value(self.out, value)?;
            self.out.write_char('\n')?;
            self.wrote_any = true;
        }

        for (key, value) in table {
            match value {
                Value::Table(sub) => {
                    self.path.push(key);
                    self.table_section(sub)?;
                    self.path.pop();
                }
                Value::Array(array) if array.is_array_of_tables() => {
                    self.path.push(key);
                    for element in array {
                        if let Value::Table(sub) = element {
                            self.header("[[", "]]")?;
                            self.table_body(sub)?;
                        }
                    }
                    self.path.pop();
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn table_section(&mut self, table: &'a Table) -> fmt::Result {
        // the headers of sub-sections create this table implicitly
        let has_lines = table.values().any(|v| !is_section(v));
        if has_lines || table.is_empty() {
            self.header("[", "]")?;
        }
        self.table_body(table)
    }

    fn header(&mut self, open: &str, close: &str) -> fmt::Result {
        if self.wrote_any {
            self.out.write_char('\n')?;
        }
        self.out.write_str(open)?;
        for (i, key) in self.path.iter().enumerate() {
            if i > 0 {
                self.out.write_char('.')?;
            }
            write_key(self.out, key.as_str())?;
        }
        self.out.write_str(close)?;
        self.out.write_char('\n')?;
        self.wrote_any = true;
        Ok(())
    }
}

/// Entries written as their own `[..]` / `[[..]]` sections rather than as a
/// `key = value` line.
fn is_section(value: &Value) -> bool {
    match value {
        Value::Table(_) => true,
        Value::Array(array) => array.is_array_of_tables(),
        _ => false,
    }
}

fn is_bare_key(key: &str) -> bool {
    !key.is_empty()
        && key
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}

fn write_key<W: Write>(out: &mut W, key: &str) -> fmt::Result {
    if is_bare_key(key) {
        out.write_str(key)
    } else {
        write_string(out, key)
    }
}

fn write_string<W: Write>(out: &mut W, s: &str) -> fmt::Result {
    out.write_char('"')?;
    let mut run = 0;
    for (i, ch) in s.char_indices() {
        let escape = match ch {
            '"' => "\\\"",
            '\\' => "\\\\",
            '\u{8}' => "\\b",
            '\t' => "\\t",
            '\n' => "\\n",
            '\u{c}' => "\\f",
            '\r' => "\\r",
            '\u{0}'..='\u{1f}' | '\u{7f}' => "",
            _ => continue,
        };
        out.write_str(&s[run..i])?;
        if escape.is_empty() {
            write!(out, "\\u{:04X}", ch as u32)?;
        } else {
            out.write_str(escape)?;
        }
        run = i + ch.len_utf8();
    }
    out.write_str(&s[run..])?;
    out.write_char('"')
}

fn write_float<W: Write>(out: &mut W, f: f64) -> fmt::Result {
    if f.is_nan() {
        return out.write_str("nan");
    }
    if f.is_infinite() {
        return out.write_str(if f > 0.0 { "inf" } else { "-inf" });
    }
    let mut buffer = zmij::Buffer::new();
    let text = buffer.format(f);
    out.write_str(text)?;
    // a float must not read back as an integer
    if !text.contains(['.', 'e', 'E']) {
        out.write_str(".0")?;
    }
    Ok(())
}

/// Writes `value` in its inline form.
fn write_value<W: Write>(out: &mut W, value: &Value) -> fmt::Result {
    match value {
        Value::String(s) => write_string(out, s),
        Value::Integer(i) => write!(out, "{i}"),
        Value::Float(f) => write_float(out, *f),
        Value::Boolean(b) => out.write_str(if *b { "true" } else { "false" }),
        Value::LocalDate(d) => write!(out, "{d}"),
        Value::LocalTime(t) => write!(out, "{t}"),
        Value::LocalDateTime(dt) => write!(out, "{dt}"),
        Value::OffsetDateTime(dt) => write!(out, "{dt}"),
        Value::Array(array) => {
            out.write_char('[')?;
            for (i, element) in array.iter().enumerate() {
                if i > 0 {
                    out.write_str(", ")?;
                }
                write_value(out, element)?;
            }
            out.write_char(']')
        }
        Value::Table(table) => {
            if table.is_empty() {
                return out.write_str("{}");
            }
            out.write_str("{ ")?;
            for (i, (key, value)) in table.iter().enumerate() {
                if i > 0 {
                    out.write_str(", ")?;
                }
                write_key(out, key.as_str())?;
                out.write_str(" = ")?;
                write_value(out, value)?;
            }
            out.write_str(" }")
        }
    }
}
