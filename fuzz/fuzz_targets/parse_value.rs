#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    if let Err(err) = toml_tree::parse(text) {
        assert!(err.span.start as usize <= text.len());
        assert!(err.line_info.is_some());
    }
});
