#[cfg(test)]
#[path = "./value_tests.rs"]
mod tests;

use crate::time::{Date, LocalDateTime, OffsetDateTime, Time};
use crate::{Array, Table};
use std::fmt;

/// A TOML value.
///
/// The four date/time variants are distinct types: a value parsed from a
/// local date stays a local date through a dump and re-parse.
///
/// Use the `as_*` methods ([`as_str`](Self::as_str),
/// [`as_integer`](Self::as_integer), [`as_table`](Self::as_table), etc.) to
/// extract a value, or match on the variants directly.
///
/// # Examples
///
/// ```
/// let table = toml_tree::parse("x = 42\ny = [1, 2]")?;
/// assert_eq!(table["x"].as_integer(), Some(42));
/// assert_eq!(table["y"][1].as_integer(), Some(2));
/// assert!(table.get("missing").is_none());
/// # Ok::<(), toml_tree::Error>(())
/// ```
#[derive(Clone)]
pub enum Value {
    String(String),
    Integer(i64),
    /// Any IEEE 754 double, including `inf`, `-inf` and `nan`.
    Float(f64),
    Boolean(bool),
    LocalDate(Date),
    LocalTime(Time),
    LocalDateTime(LocalDateTime),
    /// An instant, stored as UTC.
    OffsetDateTime(OffsetDateTime),
    Array(Array),
    Table(Table),
}

impl Value {
    /// Returns the TOML type name (e.g. `"string"`, `"integer"`, `"table"`).
    pub fn type_str(&self) -> &'static str {
        match self {
            Value::String(_) => "string",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::Boolean(_) => "boolean",
            Value::LocalDate(_) => "local date",
            Value::LocalTime(_) => "local time",
            Value::LocalDateTime(_) => "local datetime",
            Value::OffsetDateTime(_) => "offset datetime",
            Value::Array(_) => "array",
            Value::Table(_) => "table",
        }
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        if let Value::String(s) = self {
            Some(s)
        } else {
            None
        }
    }

    #[inline]
    pub fn as_integer(&self) -> Option<i64> {
        if let Value::Integer(i) = self {
            Some(*i)
        } else {
            None
        }
    }

    #[inline]
    pub fn as_float(&self) -> Option<f64> {
        if let Value::Float(f) = self {
            Some(*f)
        } else {
            None
        }
    }

    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        if let Value::Boolean(b) = self {
            Some(*b)
        } else {
            None
        }
    }

    #[inline]
    pub fn as_local_date(&self) -> Option<Date> {
        if let Value::LocalDate(d) = self {
            Some(*d)
        } else {
            None
        }
    }

    #[inline]
    pub fn as_local_time(&self) -> Option<Time> {
        if let Value::LocalTime(t) = self {
            Some(*t)
        } else {
            None
        }
    }

    #[inline]
    pub fn as_local_datetime(&self) -> Option<LocalDateTime> {
        if let Value::LocalDateTime(dt) = self {
            Some(*dt)
        } else {
            None
        }
    }

    #[inline]
    pub fn as_offset_datetime(&self) -> Option<OffsetDateTime> {
        if let Value::OffsetDateTime(dt) = self {
            Some(*dt)
        } else {
            None
        }
    }

    #[inline]
    pub fn as_array(&self) -> Option<&Array> {
        if let Value::Array(a) = self {
            Some(a)
        } else {
            None
        }
    }

    #[inline]
    pub fn as_array_mut(&mut self) -> Option<&mut Array> {
        if let Value::Array(a) = self {
            Some(a)
        } else {
            None
        }
    }

    #[inline]
    pub fn as_table(&self) -> Option<&Table> {
        if let Value::Table(t) = self {
            Some(t)
        } else {
            None
        }
    }

    #[inline]
    pub fn as_table_mut(&mut self) -> Option<&mut Table> {
        if let Value::Table(t) = self {
            Some(t)
        } else {
            None
        }
    }

    /// Looks up `key` if this value is a table.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Table(t) => t.get(key),
            _ => None,
        }
    }

    /// Returns `true` for the four date/time variants.
    pub fn is_datetime(&self) -> bool {
        matches!(
            self,
            Value::LocalDate(_)
                | Value::LocalTime(_)
                | Value::LocalDateTime(_)
                | Value::OffsetDateTime(_)
        )
    }
}

/// Value equality. Floats compare with `==`, except that NaN equals NaN so
/// that a parsed `nan` compares equal to itself after a round trip.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::LocalDate(a), Value::LocalDate(b)) => a == b,
            (Value::LocalTime(a), Value::LocalTime(b)) => a == b,
            (Value::LocalDateTime(a), Value::LocalDateTime(b)) => a == b,
            (Value::OffsetDateTime(a), Value::OffsetDateTime(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Table(a), Value::Table(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => s.fmt(f),
            Value::Integer(i) => i.fmt(f),
            Value::Float(v) => v.fmt(f),
            Value::Boolean(b) => b.fmt(f),
            Value::LocalDate(d) => fmt::Display::fmt(d, f),
            Value::LocalTime(t) => fmt::Display::fmt(t, f),
            Value::LocalDateTime(dt) => fmt::Display::fmt(dt, f),
            Value::OffsetDateTime(dt) => fmt::Display::fmt(dt, f),
            Value::Array(a) => a.fmt(f),
            Value::Table(t) => t.fmt(f),
        }
    }
}

impl std::ops::Index<&str> for Value {
    type Output = Value;

    /// # Panics
    ///
    /// Panics if this is not a table or the key is missing.
    fn index(&self, key: &str) -> &Value {
        match self {
            Value::Table(t) => &t[key],
            other => panic!("cannot index {} with key `{key}`", other.type_str()),
        }
    }
}

impl std::ops::Index<usize> for Value {
    type Output = Value;

    /// # Panics
    ///
    /// Panics if this is not an array or the index is out of bounds.
    fn index(&self, index: usize) -> &Value {
        match self {
            Value::Array(a) => &a[index],
            other => panic!("cannot index {} with {index}", other.type_str()),
        }
    }
}

macro_rules! impl_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                #[inline]
                fn from(value: $ty) -> Self {
                    Value::$variant(value)
                }
            }
        )*
    };
}

impl_from! {
    String => String,
    i64 => Integer,
    f64 => Float,
    bool => Boolean,
    Date => LocalDate,
    Time => LocalTime,
    LocalDateTime => LocalDateTime,
    OffsetDateTime => OffsetDateTime,
    Array => Array,
    Table => Table,
}

impl From<&str> for Value {
    #[inline]
    fn from(value: &str) -> Self {
        Value::String(value.to_owned())
    }
}

impl From<i32> for Value {
    #[inline]
    fn from(value: i32) -> Self {
        Value::Integer(value as i64)
    }
}

impl From<Vec<Value>> for Value {
    #[inline]
    fn from(values: Vec<Value>) -> Self {
        Value::Array(Array::from(values))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Value {
    fn serialize<S>(&self, ser: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Value::String(s) => ser.serialize_str(s),
            Value::Integer(i) => ser.serialize_i64(*i),
            Value::Float(f) => ser.serialize_f64(*f),
            Value::Boolean(b) => ser.serialize_bool(*b),
            Value::LocalDate(d) => serde::Serialize::serialize(d, ser),
            Value::LocalTime(t) => serde::Serialize::serialize(t, ser),
            Value::LocalDateTime(dt) => serde::Serialize::serialize(dt, ser),
            Value::OffsetDateTime(dt) => serde::Serialize::serialize(dt, ser),
            Value::Array(arr) => serde::Serialize::serialize(arr, ser),
            Value::Table(tab) => serde::Serialize::serialize(tab, ser),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Array {
    fn serialize<S>(&self, ser: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = ser.serialize_seq(Some(self.len()))?;
        for ele in self {
            seq.serialize_element(ele)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Table {
    fn serialize<S>(&self, ser: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = ser.serialize_map(Some(self.len()))?;
        for (k, v) in self {
            map.serialize_entry(k.as_str(), v)?;
        }
        map.end()
    }
}
