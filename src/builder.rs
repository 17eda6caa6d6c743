//! Incremental construction of a document tree from key paths and headers.
//!
//! The builder owns the root table and a cursor naming the table that
//! `key = value` lines currently write into. Every mutation checks the
//! [`Definition`] of the entries it passes through, which is what rejects
//! duplicate keys and table redefinitions.

#[cfg(test)]
#[path = "./builder_tests.rs"]
mod tests;

use crate::table::{Definition, Entry, Key};
use crate::{Array, ErrorKind, Span, Table, Value};

pub(crate) type BuildError = (ErrorKind, Span);

pub(crate) struct Builder {
    root: Table,
    /// Entry indices leading from the root to the current table. An entry
    /// holding an array of tables stands for its last element.
    cursor: Vec<usize>,
}

impl Builder {
    pub(crate) fn new() -> Self {
        Self {
            root: Table::new(),
            cursor: Vec::new(),
        }
    }

    pub(crate) fn finish(self) -> Table {
        self.root
    }

    /// Handles `a.b.c = value` relative to the current table.
    pub(crate) fn assign_key_path(
        &mut self,
        path: &[Key],
        value: Value,
        def: Definition,
    ) -> Result<(), BuildError> {
        let table = table_at(&mut self.root, &self.cursor);
        insert_dotted(table, path, value, def)
    }

    /// Handles a `[a.b.c]` header. The opened table becomes the current one.
    pub(crate) fn open_table(&mut self, path: &[Key]) -> Result<(), BuildError> {
        let Some((last, parents)) = path.split_last() else {
            return Ok(());
        };
        let mut cursor = Vec::with_capacity(path.len());
        let mut table = &mut self.root;
        for key in parents {
            let idx = navigate_header_intermediate(table, key)?;
            cursor.push(idx);
            table = descend(table.entry_mut(idx));
        }

        if let Some(idx) = table.find_index(&last.name) {
            let entry = table.entry_mut(idx);
            match (&entry.value, entry.def) {
                (Value::Table(_), Definition::Implicit) => {
                    entry.def = Definition::Header;
                    entry.key.span = last.span;
                }
                (Value::Table(_), Definition::Header) => {
                    return Err((
                        ErrorKind::DuplicateTable {
                            name: path_name(path),
                            first: entry.key.span,
                        },
                        last.span,
                    ));
                }
                _ => return Err(duplicate_key(entry, last)),
            }
            cursor.push(idx);
        } else {
            cursor.push(table.push(last.clone(), Value::Table(Table::new()), Definition::Header));
        }
        self.cursor = cursor;
        Ok(())
    }

    /// Handles a `[[a.b.c]]` header. The freshly appended table becomes the
    /// current one.
    pub(crate) fn open_array_table(&mut self, path: &[Key]) -> Result<(), BuildError> {
        let Some((last, parents)) = path.split_last() else {
            return Ok(());
        };
        let mut cursor = Vec::with_capacity(path.len());
        let mut table = &mut self.root;
        for key in parents {
            let idx = navigate_header_intermediate(table, key)?;
            cursor.push(idx);
            table = descend(table.entry_mut(idx));
        }

        if let Some(idx) = table.find_index(&last.name) {
            let entry = table.entry_mut(idx);
            match (&mut entry.value, entry.def) {
                (Value::Array(array), Definition::ArrayOfTables) => {
                    array.push(Table::new());
                }
                (Value::Table(_), _) => return Err((ErrorKind::RedefineAsArray, last.span)),
                _ => return Err(duplicate_key(entry, last)),
            }
            cursor.push(idx);
        } else {
            let mut array = Array::new();
            array.push(Table::new());
            cursor.push(table.push(
                last.clone(),
                Value::Array(array),
                Definition::ArrayOfTables,
            ));
        }
        self.cursor = cursor;
        Ok(())
    }
}

/// Inserts `value` at the dotted `path` below `table`, creating dotted
/// tables for every segment but the last.
pub(crate) fn insert_dotted(
    table: &mut Table,
    path: &[Key],
    value: Value,
    def: Definition,
) -> Result<(), BuildError> {
    let Some((last, parents)) = path.split_last() else {
        return Ok(());
    };
    let mut table = table;
    for key in parents {
        let idx = navigate_dotted(table, key)?;
        table = descend(table.entry_mut(idx));
    }
    if let Some(idx) = table.find_index(&last.name) {
        return Err(duplicate_key(table.entry(idx), last));
    }
    table.push(last.clone(), value, def);
    Ok(())
}

/// Resolves one intermediate segment of a dotted key.
fn navigate_dotted(table: &mut Table, key: &Key) -> Result<usize, BuildError> {
    let Some(idx) = table.find_index(&key.name) else {
        return Ok(table.push(key.clone(), Value::Table(Table::new()), Definition::Dotted));
    };
    let entry = table.entry_mut(idx);
    if !matches!(entry.value, Value::Table(_)) || entry.def.is_sealed_for_dotted() {
        return Err((
            ErrorKind::DottedKeyInvalidType {
                first: entry.key.span,
            },
            key.span,
        ));
    }
    // once extended by a dotted key, a table can no longer get its own header
    if entry.def == Definition::Implicit {
        entry.def = Definition::Dotted;
    }
    Ok(idx)
}

/// Resolves one intermediate segment of a table or array-of-tables header.
fn navigate_header_intermediate(table: &mut Table, key: &Key) -> Result<usize, BuildError> {
    let Some(idx) = table.find_index(&key.name) else {
        return Ok(table.push(key.clone(), Value::Table(Table::new()), Definition::Implicit));
    };
    let entry = table.entry(idx);
    match (&entry.value, entry.def) {
        (Value::Table(_), def) if !def.is_frozen() => Ok(idx),
        (Value::Array(_), Definition::ArrayOfTables) => Ok(idx),
        _ => Err(duplicate_key(entry, key)),
    }
}

fn duplicate_key(existing: &Entry, key: &Key) -> BuildError {
    (
        ErrorKind::DuplicateKey {
            key: key.name.clone(),
            first: existing.key.span,
        },
        key.span,
    )
}

fn path_name(path: &[Key]) -> String {
    let mut name = String::new();
    for (i, key) in path.iter().enumerate() {
        if i > 0 {
            name.push('.');
        }
        name.push_str(&key.name);
    }
    name
}

fn table_at<'t>(root: &'t mut Table, cursor: &[usize]) -> &'t mut Table {
    let mut table = root;
    for &idx in cursor {
        table = descend(table.entry_mut(idx));
    }
    table
}

/// The table an entry stands for while navigating: the table itself, or the
/// last element of an array of tables.
fn descend(entry: &mut Entry) -> &mut Table {
    match &mut entry.value {
        Value::Table(table) => table,
        Value::Array(array) => match array.last_mut() {
            Some(Value::Table(table)) => table,
            _ => unreachable!("array of tables without a table element"),
        },
        _ => unreachable!("navigated into a non-table entry"),
    }
}
