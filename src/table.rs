#[cfg(test)]
#[path = "./table_tests.rs"]
mod tests;

use crate::Span;
use crate::value::Value;
use std::fmt;

/// Tables with at least this many entries use the hash index for lookups.
pub(crate) const INDEXED_TABLE_THRESHOLD: usize = 6;

/// A table key together with where it was written.
///
/// Keys built through the API carry an empty span. Equality only looks at the
/// name.
#[derive(Clone)]
pub struct Key {
    pub name: String,
    pub span: Span,
}

impl Key {
    pub fn new(name: impl Into<String>, span: Span) -> Self {
        Self {
            name: name.into(),
            span,
        }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.name
    }
}

impl PartialEq for Key {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Key {}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.name, f)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// How a table entry came to exist. The parser consults this to decide
/// whether a later header or dotted key may extend or redefine the entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Definition {
    /// A scalar from `key = value`, or anything inserted through the API.
    Value,
    /// An inline `[ ... ]` array. Cannot be extended by `[[key]]`.
    Array,
    /// An array grown by `[[key]]` headers.
    ArrayOfTables,
    /// A table created as an intermediate step of a header path. May still
    /// be opened by its own header later.
    Implicit,
    /// A table created by a dotted key. Cannot be opened by a header.
    Dotted,
    /// A table opened by a `[key]` header.
    Header,
    /// An inline `{ ... }` table, closed to any later additions.
    Inline,
}

impl Definition {
    #[inline]
    pub(crate) fn is_frozen(self) -> bool {
        matches!(self, Definition::Inline)
    }

    /// Tables a dotted key may not reopen.
    #[inline]
    pub(crate) fn is_sealed_for_dotted(self) -> bool {
        matches!(self, Definition::Header | Definition::Inline)
    }
}

#[derive(Clone)]
pub(crate) struct Entry {
    pub(crate) key: Key,
    pub(crate) value: Value,
    pub(crate) def: Definition,
}

/// A TOML table: key/value pairs in insertion order with unique keys.
///
/// Lookups scan linearly until the table holds
/// [`INDEXED_TABLE_THRESHOLD`] entries, then go through a hash index.
#[derive(Clone, Default)]
pub struct Table {
    entries: Vec<Entry>,
    index: foldhash::HashMap<String, usize>,
}

impl Table {
    /// Creates an empty table.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        let idx = self.find_index(name)?;
        Some(&self.entries[idx].value)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Value> {
        let idx = self.find_index(name)?;
        Some(&mut self.entries[idx].value)
    }

    pub fn get_key_value(&self, name: &str) -> Option<(&Key, &Value)> {
        let idx = self.find_index(name)?;
        let entry = &self.entries[idx];
        Some((&entry.key, &entry.value))
    }

    #[inline]
    pub fn contains_key(&self, name: &str) -> bool {
        self.find_index(name).is_some()
    }

    /// Returns how the entry for `name` was defined.
    pub fn definition(&self, name: &str) -> Option<Definition> {
        let idx = self.find_index(name)?;
        Some(self.entries[idx].def)
    }

    /// Inserts a value, replacing and returning any existing value under the
    /// same key. A replaced entry keeps its position.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        let name = name.into();
        let value = value.into();
        if let Some(idx) = self.find_index(&name) {
            let entry = &mut self.entries[idx];
            entry.def = Definition::Value;
            return Some(std::mem::replace(&mut entry.value, value));
        }
        self.push(Key::new(name, Span::default()), value, Definition::Value);
        None
    }

    /// Removes the entry for `name`, preserving the order of the remaining
    /// entries.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.remove_entry(name).map(|(_, value)| value)
    }

    pub fn remove_entry(&mut self, name: &str) -> Option<(Key, Value)> {
        let idx = self.find_index(name)?;
        let entry = self.entries.remove(idx);
        self.rebuild_index();
        Some((entry.key, entry.value))
    }

    /// Iterates over the entries in insertion order.
    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.key.name.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.iter().map(|e| &e.value)
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut Value> {
        self.entries.iter_mut().map(|e| &mut e.value)
    }

    pub(crate) fn find_index(&self, name: &str) -> Option<usize> {
        if self.entries.len() >= INDEXED_TABLE_THRESHOLD {
            return self.index.get(name).copied();
        }
        self.entries.iter().position(|e| e.key.name == name)
    }

    /// Appends an entry. Does **not** check for duplicates.
    pub(crate) fn push(&mut self, key: Key, value: Value, def: Definition) -> usize {
        let idx = self.entries.len();
        self.entries.push(Entry { key, value, def });
        let len = idx + 1;
        if len == INDEXED_TABLE_THRESHOLD {
            self.rebuild_index();
        } else if len > INDEXED_TABLE_THRESHOLD {
            self.index.insert(self.entries[idx].key.name.clone(), idx);
        }
        idx
    }

    #[inline]
    pub(crate) fn entry(&self, idx: usize) -> &Entry {
        &self.entries[idx]
    }

    #[inline]
    pub(crate) fn entry_mut(&mut self, idx: usize) -> &mut Entry {
        &mut self.entries[idx]
    }

    fn rebuild_index(&mut self) {
        self.index.clear();
        if self.entries.len() < INDEXED_TABLE_THRESHOLD {
            return;
        }
        for (i, entry) in self.entries.iter().enumerate() {
            self.index.insert(entry.key.name.clone(), i);
        }
    }
}

/// Tables compare as maps: the same keys with equal values, in any order.
impl PartialEq for Table {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .entries
                .iter()
                .all(|e| other.get(&e.key.name) == Some(&e.value))
    }
}

impl fmt::Debug for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for entry in &self.entries {
            map.entry(&entry.key, &entry.value);
        }
        map.finish()
    }
}

impl std::ops::Index<&str> for Table {
    type Output = Value;

    /// # Panics
    ///
    /// Panics if the key is not present in the table.
    fn index(&self, name: &str) -> &Value {
        match self.get(name) {
            Some(value) => value,
            None => panic!("key `{name}` not found in table"),
        }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Table {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = Table::new();
        for (k, v) in iter {
            table.insert(k, v);
        }
        table
    }
}

/// Borrowing iterator over the entries of a [`Table`].
pub struct Iter<'a> {
    inner: std::slice::Iter<'a, Entry>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a Key, &'a Value);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|e| (&e.key, &e.value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a Table {
    type Item = (&'a Key, &'a Value);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owning iterator over the entries of a [`Table`].
pub struct IntoIter {
    inner: std::vec::IntoIter<Entry>,
}

impl Iterator for IntoIter {
    type Item = (Key, Value);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|e| (e.key, e.value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for IntoIter {}

impl IntoIterator for Table {
    type Item = (Key, Value);
    type IntoIter = IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.entries.into_iter(),
        }
    }
}
