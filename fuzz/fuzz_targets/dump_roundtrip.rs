#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(table) = toml_tree::parse(text) else {
        return;
    };
    let dumped = toml_tree::dump(&table);
    let reparsed = match toml_tree::parse(&dumped) {
        Ok(reparsed) => reparsed,
        Err(err) => panic!("dump output failed to parse: {err}\ninput:\n{text}\ndumped:\n{dumped}"),
    };
    assert_eq!(table, reparsed, "input:\n{text}\ndumped:\n{dumped}");
    // dumping is a fixed point after the first pass
    assert_eq!(dumped, toml_tree::dump(&reparsed));
});
