#![no_main]

use libfuzzer_sys::fuzz_target;
use toml_tree::{Date, LocalDateTime, OffsetDateTime, Time};

fn reparse<T>(text: &str)
where
    T: std::str::FromStr + std::fmt::Display + PartialEq + std::fmt::Debug,
{
    let Ok(value) = text.parse::<T>() else {
        return;
    };
    let formatted = value.to_string();
    let Ok(out) = formatted.parse::<T>() else {
        panic!("{text:?} formatted as {formatted:?}, which does not parse");
    };
    assert_eq!(value, out);
}

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    reparse::<Date>(text);
    reparse::<Time>(text);
    reparse::<LocalDateTime>(text);
    reparse::<OffsetDateTime>(text);
});
