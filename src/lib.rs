//! A TOML 1.1 parser and serializer over an owned value tree.
//!
//! [`parse`] turns text into a root [`Table`], preserving insertion order and
//! keeping the four date/time forms apart. [`dump`] writes a tree back out as
//! TOML that parses to an equal tree. Offset datetimes are normalized to UTC
//! on the way in, so they are always written with a `Z` suffix.
//!
//! # Examples
//!
//! ```
//! use toml_tree::{Error, Value};
//!
//! let content = r#"
//! dev-mode = true
//!
//! [[things]]
//! name = "hammer"
//! value = 43
//!
//! [[things]]
//! name = "drill"
//! value = 300
//! color = "green"
//! built = 2024-03-01T12:00:00+02:00
//! "#;
//!
//! let mut table = toml_tree::parse(content)?;
//!
//! let things = table["things"].as_array().unwrap();
//! assert_eq!(things.len(), 2);
//! assert_eq!(things[0]["name"].as_str(), Some("hammer"));
//! assert_eq!(
//!     things[1]["built"].as_offset_datetime().unwrap().to_string(),
//!     "2024-03-01T10:00:00Z",
//! );
//!
//! table.insert("dev-mode", false);
//! let text = toml_tree::dump(&table);
//! assert_eq!(toml_tree::parse(&text)?, table);
//! assert_eq!(table.get("dev-mode"), Some(&Value::Boolean(false)));
//! # Ok::<(), Error>(())
//! ```

mod array;
mod builder;
mod emit;
mod error;
mod parser;
mod span;
mod table;
mod time;
mod value;

pub use array::Array;
pub use emit::dump;
pub use error::{Error, ErrorCategory, ErrorKind};
pub use parser::parse;
pub use span::Span;
pub use table::{Definition, Key, Table};
pub use time::{Date, LocalDateTime, OffsetDateTime, Time};
pub use value::Value;

#[cfg(feature = "serde")]
pub mod impl_serde;

use std::path::Path;

/// Reads and parses the TOML file at `path`.
///
/// Fails with [`ErrorKind::Io`] if the file cannot be read and with
/// [`ErrorKind::InvalidUtf8`] if its content is not UTF-8. The span of the
/// latter points at the first invalid byte.
pub fn load(path: impl AsRef<Path>) -> Result<Table, Error> {
    let bytes = std::fs::read(path)?;
    let text = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => {
            let at = err.utf8_error().valid_up_to() as u32;
            return Err(Error::from((ErrorKind::InvalidUtf8, Span::new(at, at + 1))));
        }
    };
    parse(&text)
}

/// Writes [`dump`]`(table)` to `path`, creating or truncating the file.
pub fn dump_to_path(table: &Table, path: impl AsRef<Path>) -> Result<(), Error> {
    std::fs::write(path, dump(table))?;
    Ok(())
}

impl std::str::FromStr for Table {
    type Err = Error;

    /// Same as [`parse`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}
