#![cfg_attr(docsrs, doc(cfg(feature = "serde")))]

//! Provides [`serde::Serialize`] support for the date and time types, which
//! serialize as their TOML text.
//!
//! The [`serde::Serialize`] impls for [`Value`](crate::Value),
//! [`Table`](crate::Table) and [`Array`](crate::Array) live in `value.rs`.

use crate::{Date, LocalDateTime, OffsetDateTime, Time};

macro_rules! serialize_as_str {
    ($($ty:ty),*) => {
        $(
            impl serde::Serialize for $ty {
                fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
                where
                    S: serde::Serializer,
                {
                    serializer.collect_str(self)
                }
            }
        )*
    };
}

serialize_as_str!(Date, Time, LocalDateTime, OffsetDateTime);
