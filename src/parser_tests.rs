use super::{MAX_NESTING, parse_number};
use crate::table::{Definition, Table};
use crate::{Date, ErrorCategory, ErrorKind, LocalDateTime, OffsetDateTime, Time, Value};

#[track_caller]
fn parse_ok(input: &str) -> Table {
    crate::parse(input).unwrap_or_else(|e| panic!("parse failed for {input:?}: {e}"))
}

#[track_caller]
fn parse_err(input: &str) -> crate::Error {
    match crate::parse(input) {
        Ok(table) => panic!("expected {input:?} to fail, got {table:?}"),
        Err(e) => e,
    }
}

#[track_caller]
fn string_of(input: &str) -> String {
    let table = parse_ok(input);
    match table.get("a") {
        Some(Value::String(s)) => s.clone(),
        other => panic!("expected a string for {input:?}, got {other:?}"),
    }
}

#[test]
fn basic_scalar_values() {
    let v = parse_ok("");
    assert!(v.is_empty());

    let v = parse_ok("a = \"hello\"");
    assert_eq!(v["a"].as_str(), Some("hello"));

    let v = parse_ok("a = 42");
    assert_eq!(v["a"].as_integer(), Some(42));

    let v = parse_ok("a = -100");
    assert_eq!(v["a"].as_integer(), Some(-100));

    let v = parse_ok("a = 3.14");
    let f = v["a"].as_float().unwrap();
    assert!((f - 3.14).abs() < f64::EPSILON);

    let v = parse_ok("a = true\nb = false");
    assert_eq!(v["a"].as_bool(), Some(true));
    assert_eq!(v["b"].as_bool(), Some(false));

    let v = parse_ok("a = 1\nb = 2\nc = 3");
    assert_eq!(v.keys().collect::<Vec<_>>(), ["a", "b", "c"]);
}

#[test]
fn whitespace_comments_and_line_endings() {
    let v = parse_ok("# leading\n\n  a = 1 # trailing\r\n\tb = 2\n# last");
    assert_eq!(v["a"].as_integer(), Some(1));
    assert_eq!(v["b"].as_integer(), Some(2));

    // a lone carriage return is not a newline
    let e = parse_err("a = 1\rb = 2");
    assert_eq!(e.category(), ErrorCategory::Syntax);
    let e = parse_err("\r");
    assert!(matches!(e.kind, ErrorKind::Unexpected('\r')));

    // control characters may not appear in comments
    assert!(parse_err("# bell \u{7}\n").category() == ErrorCategory::Syntax);
}

#[test]
fn string_escapes() {
    let cases = [
        (r#"a = "line1\nline2""#, "line1\nline2"),
        (r#"a = "col1\tcol2""#, "col1\tcol2"),
        (r#"a = "path\\to""#, "path\\to"),
        (r#"a = "say \"hi\"""#, "say \"hi\""),
        (r#"a = "\b\f\r""#, "\u{8}\u{c}\r"),
        (r#"a = "\u0041""#, "A"),
        (r#"a = "\U0001F600""#, "\u{1F600}"),
        (r#"a = "\e[0m""#, "\u{1b}[0m"),
        (r#"a = "\x41\xe9""#, "A\u{e9}"),
        (r#"a = "caf\u00e9 ok""#, "café ok"),
    ];
    for (input, expected) in cases {
        assert_eq!(string_of(input), expected, "input: {input}");
    }
}

#[test]
fn invalid_escapes() {
    let e = parse_err(r#"a = "\q""#);
    assert!(matches!(e.kind, ErrorKind::InvalidEscape('q')));
    assert_eq!(e.span.start, 6);

    let e = parse_err(r#"a = "\u00G1""#);
    assert!(matches!(e.kind, ErrorKind::InvalidHexEscape('G')));

    let e = parse_err(r#"a = "\x4""#);
    assert!(matches!(e.kind, ErrorKind::InvalidHexEscape('"')));

    let e = parse_err(r#"a = "\uD800""#);
    assert!(matches!(e.kind, ErrorKind::InvalidEscapeValue(0xd800)));

    let e = parse_err(r#"a = "\U00110000""#);
    assert!(matches!(e.kind, ErrorKind::InvalidEscapeValue(0x110000)));
}

#[test]
fn literal_strings_are_raw() {
    assert_eq!(string_of(r"a = 'C:\Users\nodejs'"), r"C:\Users\nodejs");
    assert_eq!(string_of("a = ''"), "");
    assert_eq!(string_of("a = \"\""), "");
    assert_eq!(string_of("a = 'a \"quote\"'"), "a \"quote\"");
}

#[test]
fn multiline_strings() {
    // the newline right after the opening delimiter is trimmed
    assert_eq!(string_of("a = \"\"\"\nRoses\nViolets\"\"\""), "Roses\nViolets");
    assert_eq!(string_of("a = '''\r\nfirst\r\nsecond'''"), "first\r\nsecond");

    // line-ending backslash eats the newline and the leading whitespace
    let input = "a = \"\"\"\nThe quick \\\n\n    brown \\   \n  fox.\"\"\"";
    assert_eq!(string_of(input), "The quick brown fox.");

    // up to two quotes may precede the closing delimiter
    assert_eq!(string_of(r##"a = """a"b""""##), "a\"b\"");
    assert_eq!(string_of(r#"a = """""""""#), "\"\"");
    assert_eq!(string_of("a = '''x'''''"), "x''");

    // escapes stay literal in multiline literal strings
    assert_eq!(string_of("a = '''\\n'''"), "\\n");
}

#[test]
fn invalid_strings() {
    let e = parse_err("a = \"abc");
    assert!(matches!(e.kind, ErrorKind::UnterminatedString));
    assert_eq!(e.span.start, 4);

    let e = parse_err("a = \"\"\"abc\"\"");
    assert!(matches!(e.kind, ErrorKind::UnterminatedString));

    let e = parse_err("a = \"line\nbreak\"");
    assert!(matches!(e.kind, ErrorKind::InvalidCharInString('\n')));

    let e = parse_err("a = 'tab\u{0}'");
    assert!(matches!(e.kind, ErrorKind::InvalidCharInString('\0')));

    let e = parse_err("a = \"del\u{7f}\"");
    assert!(matches!(e.kind, ErrorKind::InvalidCharInString('\u{7f}')));

    // whitespace after a line-ending backslash must reach a newline
    let e = parse_err("a = \"\"\"x \\ y\"\"\"");
    assert!(matches!(e.kind, ErrorKind::InvalidEscape(' ')));

    // too many closing quotes leave a stray delimiter behind
    assert!(crate::parse("a = \"\"\"x\"\"\"\"\"\"").is_err());
}

#[test]
fn integers() {
    let cases = [
        ("+99", 99),
        ("0", 0),
        ("-0", 0),
        ("1_000_000", 1_000_000),
        ("0xDEAD_beef", 0xdead_beef),
        ("0o755", 0o755),
        ("0b1101_0110", 0b1101_0110),
        ("9223372036854775807", i64::MAX),
        ("-9223372036854775808", i64::MIN),
    ];
    for (text, expected) in cases {
        let table = parse_ok(&format!("a = {text}"));
        assert_eq!(table["a"].as_integer(), Some(expected), "input: {text}");
    }
}

#[test]
fn invalid_integers() {
    for text in [
        "01", "-01", "1__0", "1_", "0x", "-0x1", "+0o7", "0b2", "0xG", "0X1F", "1a",
    ] {
        let e = parse_err(&format!("a = {text}"));
        assert!(
            matches!(e.kind, ErrorKind::InvalidNumber),
            "{text} gave {:?}",
            e.kind
        );
    }

    for text in ["9223372036854775808", "-9223372036854775809", "0xffffffffffffffff"] {
        let e = parse_err(&format!("a = {text}"));
        assert!(matches!(e.kind, ErrorKind::OutOfRange("integer")), "{text}");
        assert_eq!(e.category(), ErrorCategory::Semantic);
    }
}

#[test]
fn floats() {
    let cases = [
        ("+1.0", 1.0),
        ("-0.01", -0.01),
        ("5e+22", 5e22),
        ("1e06", 1e6),
        ("-2E-2", -2e-2),
        ("6.626e-34", 6.626e-34),
        ("224_617.445_991_228", 224_617.445_991_228),
        ("0.0", 0.0),
        ("0e0", 0.0),
    ];
    for (text, expected) in cases {
        let table = parse_ok(&format!("a = {text}"));
        assert_eq!(table["a"].as_float(), Some(expected), "input: {text}");
    }

    let table = parse_ok("a = inf\nb = +inf\nc = -inf\nd = nan\ne = +nan\nf = -nan");
    assert_eq!(table["a"].as_float(), Some(f64::INFINITY));
    assert_eq!(table["b"].as_float(), Some(f64::INFINITY));
    assert_eq!(table["c"].as_float(), Some(f64::NEG_INFINITY));
    for key in ["d", "e", "f"] {
        assert!(table[key].as_float().unwrap().is_nan());
    }
    assert!(table["f"].as_float().unwrap().is_sign_negative());

    let table = parse_ok("a = -0.0");
    assert!(table["a"].as_float().unwrap().is_sign_negative());
}

#[test]
fn invalid_floats() {
    for text in ["1.", ".5", "1.e5", "1e", "1e_5", "3.e+20", "1.2.3", "1e5.0", "00.1", "1__0.0"] {
        assert!(crate::parse(&format!("a = {text}")).is_err(), "{text}");
    }
    // overflowing literals are not silently turned into infinity
    let e = parse_err("a = 1e400");
    assert!(matches!(e.kind, ErrorKind::InvalidNumber));
}

#[test]
fn parse_number_classifies_tokens() {
    assert_eq!(parse_number("12"), Ok(Value::Integer(12)));
    assert_eq!(parse_number("-1.5"), Ok(Value::Float(-1.5)));
    assert_eq!(parse_number("1_2e1_0"), Ok(Value::Float(12e10)));
    assert_eq!(parse_number("0x_1"), Err(ErrorKind::InvalidNumber));
}

#[test]
fn bare_words() {
    let e = parse_err("a = hello");
    assert!(matches!(e.kind, ErrorKind::UnquotedString));
    assert_eq!((e.span.start, e.span.end), (4, 9));

    let e = parse_err("a = True");
    assert!(matches!(e.kind, ErrorKind::UnquotedString));

    let e = parse_err("a = ");
    assert!(matches!(e.kind, ErrorKind::UnexpectedEof));

    let e = parse_err("a = \n");
    assert!(matches!(
        e.kind,
        ErrorKind::Wanted {
            expected: "a value",
            found: "a newline"
        }
    ));
}

#[test]
fn datetimes() {
    let table = parse_ok(
        "odt = 1979-05-27T07:32:00Z\n\
         odt2 = 1979-05-27T00:32:00.999999-07:00\n\
         ldt = 1979-05-27T07:32:00\n\
         spaced = 1979-05-27 07:32:00\n\
         ld = 1979-05-27\n\
         lt = 07:32:00\n\
         short = 07:32\n",
    );
    let odt = table["odt"].as_offset_datetime().unwrap();
    assert_eq!(odt.to_string(), "1979-05-27T07:32:00Z");
    let odt2 = table["odt2"].as_offset_datetime().unwrap();
    assert_eq!(odt2.to_string(), "1979-05-27T07:32:00.999999Z");

    let ldt: LocalDateTime = "1979-05-27T07:32:00".parse().unwrap();
    assert_eq!(table["ldt"].as_local_datetime(), Some(ldt));
    assert_eq!(table["spaced"].as_local_datetime(), Some(ldt));
    assert_eq!(table["ld"].as_local_date(), Date::new(1979, 5, 27));
    assert_eq!(table["lt"].as_local_time(), Time::new(7, 32, 0, 0));
    assert_eq!(table["short"].as_local_time(), Time::new(7, 32, 0, 0));

    // a local date followed by a comment, not a time
    let table = parse_ok("d = 1979-05-27 # birthday");
    assert!(matches!(table["d"], Value::LocalDate(_)));

    // datetimes inside arrays
    let table = parse_ok("a = [1979-05-27, 07:32:00]");
    assert!(matches!(table["a"][0], Value::LocalDate(_)));
    assert!(matches!(table["a"][1], Value::LocalTime(_)));
}

#[test]
fn invalid_datetimes() {
    let e = parse_err("a = 1979-02-30");
    assert!(matches!(e.kind, ErrorKind::OutOfRange("day")));
    assert_eq!(e.category(), ErrorCategory::Semantic);

    let e = parse_err("a = 1979-05-27T07:32:60");
    assert!(matches!(e.kind, ErrorKind::OutOfRange("second")));

    let e = parse_err("a = 1979-05-27T07:32:00+24:00");
    assert!(matches!(e.kind, ErrorKind::OutOfRange("offset hour")));

    let e = parse_err("a = 1979-5-27");
    assert_eq!(e.category(), ErrorCategory::Syntax);

    let e = parse_err("a = 07:32:00Z");
    assert!(matches!(e.kind, ErrorKind::InvalidDatetime));

    // offsets may push an instant out of the representable years
    let e = parse_err("a = 0000-01-01T00:00:00+01:00");
    assert!(matches!(e.kind, ErrorKind::OutOfRange("year")));

    let odt: OffsetDateTime = "9999-12-31T23:59:59Z".parse().unwrap();
    assert_eq!(odt.date().year(), 9999);
}

#[test]
fn keys() {
    let table = parse_ok(
        "bare_key = 1\n\
         bare-key = 2\n\
         1234 = 3\n\
         \"quoted key\" = 4\n\
         'literal \\key' = 5\n\
         \"\" = 6\n\
         \"\\u00e9\" = 7\n",
    );
    assert_eq!(table["bare_key"].as_integer(), Some(1));
    assert_eq!(table["bare-key"].as_integer(), Some(2));
    assert_eq!(table["1234"].as_integer(), Some(3));
    assert_eq!(table["quoted key"].as_integer(), Some(4));
    assert_eq!(table["literal \\key"].as_integer(), Some(5));
    assert_eq!(table[""].as_integer(), Some(6));
    assert_eq!(table["é"].as_integer(), Some(7));

    // quoted and bare forms name the same key
    let e = parse_err("spelling = 1\n\"spelling\" = 2");
    assert!(matches!(e.kind, ErrorKind::DuplicateKey { ref key, .. } if key == "spelling"));

    let e = parse_err("\"\"\"multi\"\"\" = 1");
    assert!(matches!(e.kind, ErrorKind::MultilineStringKey));

    let e = parse_err("= 1");
    assert!(matches!(
        e.kind,
        ErrorKind::Wanted {
            expected: "a table key",
            ..
        }
    ));

    let e = parse_err("key value");
    assert!(matches!(
        e.kind,
        ErrorKind::Wanted {
            expected: "an equals",
            ..
        }
    ));
}

#[test]
fn dotted_keys() {
    let table = parse_ok("a.b.c = 1\na . b . d = 2\n\"x.y\".z = 3\nsite.\"google.com\" = true");
    assert_eq!(table["a"]["b"]["c"].as_integer(), Some(1));
    assert_eq!(table["a"]["b"]["d"].as_integer(), Some(2));
    assert_eq!(table["x.y"]["z"].as_integer(), Some(3));
    assert_eq!(table["site"]["google.com"].as_bool(), Some(true));

    // 3.14159 as a key is two segments
    let table = parse_ok("3.14159 = \"pi\"");
    assert_eq!(table["3"]["14159"].as_str(), Some("pi"));

    let e = parse_err("a = 1\na.b = 2");
    assert!(matches!(e.kind, ErrorKind::DottedKeyInvalidType { .. }));

    let e = parse_err("a.b = 1\na.b.c = 2");
    assert!(matches!(e.kind, ErrorKind::DottedKeyInvalidType { .. }));
}

#[test]
fn tables() {
    let table = parse_ok(
        "[table-1]\nkey1 = \"some string\"\n\n[table-2]\nkey1 = 456\n\n[ dog . \"tater.man\" ]\ntype.name = \"pug\"",
    );
    assert_eq!(table["table-1"]["key1"].as_str(), Some("some string"));
    assert_eq!(table["table-2"]["key1"].as_integer(), Some(456));
    assert_eq!(table["dog"]["tater.man"]["type"]["name"].as_str(), Some("pug"));

    // super-tables may be defined after their children
    let table = parse_ok("[x.y.z.w]\n[x]\na = 1");
    assert_eq!(table["x"]["a"].as_integer(), Some(1));
    assert!(table["x"]["y"]["z"]["w"].as_table().unwrap().is_empty());

    // empty table header
    let table = parse_ok("[empty]");
    assert!(table["empty"].as_table().unwrap().is_empty());
    assert_eq!(table.definition("empty"), Some(Definition::Header));
}

#[test]
fn table_redefinition() {
    let e = parse_err("[fruit]\napple = 1\n\n[fruit]\norange = 2");
    assert!(matches!(e.kind, ErrorKind::DuplicateTable { ref name, .. } if name == "fruit"));
    assert_eq!(e.line_info, Some((3, 1)));

    let e = parse_err("[fruit]\napple = 1\n\n[fruit.apple]");
    assert!(matches!(e.kind, ErrorKind::DuplicateKey { .. }));

    // a table defined by dotted keys cannot get a header afterwards
    let e = parse_err("[fruit]\napple.color = \"red\"\n\n[fruit.apple]");
    assert!(matches!(e.kind, ErrorKind::DuplicateKey { .. }));

    // but its sub-tables may be opened
    let table = parse_ok("[fruit]\napple.color = \"red\"\n\n[fruit.apple.texture]\nsmooth = true");
    assert_eq!(table["fruit"]["apple"]["texture"]["smooth"].as_bool(), Some(true));

    // dotted keys may not reopen a header table
    let e = parse_err("[a.b]\nc = 1\n[a]\nb.d = 2");
    assert!(matches!(e.kind, ErrorKind::DottedKeyInvalidType { .. }));
}

#[test]
fn header_syntax_errors() {
    for input in ["[a", "[a]]", "[[a]", "[[a] ]", "[]", "[a.]", "[a] b = 1", "[ [a]]"] {
        let e = parse_err(input);
        assert_eq!(e.category(), ErrorCategory::Syntax, "{input}");
    }
}

#[test]
fn arrays() {
    let table = parse_ok(
        "ints = [1, 2, 3]\n\
         mixed = [1, \"two\", 3.0, [4], {five = 5}]\n\
         empty = []\n\
         nested = [[1, 2], [\"a\"]]\n\
         multi = [\n  1, # one\n  2,\n\n  # done\n]\n",
    );
    assert_eq!(table["ints"].as_array().unwrap().len(), 3);
    assert_eq!(table["mixed"][1].as_str(), Some("two"));
    assert_eq!(table["mixed"][3][0].as_integer(), Some(4));
    assert_eq!(table["mixed"][4]["five"].as_integer(), Some(5));
    assert!(table["empty"].as_array().unwrap().is_empty());
    assert_eq!(table["nested"][1][0].as_str(), Some("a"));
    assert_eq!(table["multi"].as_array().unwrap().len(), 2);
    assert_eq!(table.definition("ints"), Some(Definition::Array));

    for input in ["a = [1,,2]", "a = [,]", "a = [1 2]", "a = [1", "a = [1,"] {
        assert!(crate::parse(input).is_err(), "{input}");
    }
}

#[test]
fn inline_tables() {
    let table = parse_ok(
        "name = { first = \"Tom\", last = \"Preston-Werner\" }\n\
         point = {x=1,y=2}\n\
         animal = { type.name = \"pug\" }\n\
         empty = {}\n",
    );
    assert_eq!(table["name"]["last"].as_str(), Some("Preston-Werner"));
    assert_eq!(table["point"]["y"].as_integer(), Some(2));
    assert_eq!(table["animal"]["type"]["name"].as_str(), Some("pug"));
    assert!(table["empty"].as_table().unwrap().is_empty());
    assert_eq!(table.definition("name"), Some(Definition::Inline));

    // newlines, comments and a trailing comma are allowed
    let table = parse_ok("t = {\n  a = 1, # first\n  b = [\n    2,\n  ],\n}\n");
    assert_eq!(table["t"]["a"].as_integer(), Some(1));
    assert_eq!(table["t"]["b"][0].as_integer(), Some(2));

    let e = parse_err("t = { a = 1, a = 2 }");
    assert!(matches!(e.kind, ErrorKind::DuplicateKey { .. }));

    for input in ["t = {,}", "t = { a = 1,, }", "t = { a = 1 b = 2 }", "t = { a }", "t = { a = 1"] {
        assert!(crate::parse(input).is_err(), "{input}");
    }
}

#[test]
fn inline_tables_are_closed() {
    let e = parse_err("[product]\ntype = { name = \"Nail\" }\ntype.edible = false");
    assert!(matches!(e.kind, ErrorKind::DottedKeyInvalidType { .. }));

    let e = parse_err("a = { b = 1 }\n[a.c]");
    assert!(matches!(e.kind, ErrorKind::DuplicateKey { .. }));

    let e = parse_err("a = { b = 1 }\n[a]");
    assert!(matches!(e.kind, ErrorKind::DuplicateKey { .. }));
}

#[test]
fn arrays_of_tables() {
    let table = parse_ok(
        "[[products]]\nname = \"Hammer\"\nsku = 738594937\n\n\
         [[products]]\n\n\
         [[products]]\nname = \"Nail\"\ncolor = \"gray\"\n",
    );
    let products = table["products"].as_array().unwrap();
    assert_eq!(products.len(), 3);
    assert_eq!(products[0]["sku"].as_integer(), Some(738594937));
    assert!(products[1].as_table().unwrap().is_empty());
    assert_eq!(products[2]["color"].as_str(), Some("gray"));
    assert_eq!(table.definition("products"), Some(Definition::ArrayOfTables));

    // headers below the array attach to its last element
    let table = parse_ok(
        "[[fruits]]\nname = \"apple\"\n[fruits.physical]\ncolor = \"red\"\n\
         [[fruits.varieties]]\nname = \"red delicious\"\n\
         [[fruits]]\nname = \"banana\"\n[[fruits.varieties]]\nname = \"plantain\"\n",
    );
    assert_eq!(table["fruits"][0]["physical"]["color"].as_str(), Some("red"));
    assert_eq!(table["fruits"][0]["varieties"][0]["name"].as_str(), Some("red delicious"));
    assert_eq!(table["fruits"][1]["varieties"][0]["name"].as_str(), Some("plantain"));
}

#[test]
fn array_of_tables_conflicts() {
    let e = parse_err("fruits = []\n[[fruits]]");
    assert!(matches!(e.kind, ErrorKind::DuplicateKey { .. }));

    let e = parse_err("[fruit.physical]\n[[fruit.physical]]");
    assert!(matches!(e.kind, ErrorKind::RedefineAsArray));

    let e = parse_err("[[fruit]]\n[fruit]");
    assert!(matches!(e.kind, ErrorKind::DuplicateKey { .. }));

    let e = parse_err("[[a]]\n[a.b]\n[a.b]");
    assert!(matches!(e.kind, ErrorKind::DuplicateTable { ref name, .. } if name == "a.b"));
}

#[test]
fn error_positions() {
    let e = parse_err("a = 1\nb = 2\nc = @");
    assert_eq!(e.line_info, Some((2, 4)));
    assert_eq!((e.span.start, e.span.end), (16, 17));
    assert_eq!(e.to_string(), "expected a value, found a character at line 3, column 5");

    let e = parse_err("a = 1\na = 2");
    match e.kind {
        ErrorKind::DuplicateKey { first, .. } => assert_eq!((first.start, first.end), (0, 1)),
        ref other => panic!("unexpected {other:?}"),
    }
    assert_eq!((e.span.start, e.span.end), (6, 7));
}

#[test]
fn trailing_content_after_value() {
    let e = parse_err("a = 1 b = 2");
    assert!(matches!(
        e.kind,
        ErrorKind::Wanted {
            expected: "newline",
            found: "an identifier"
        }
    ));
    assert!(crate::parse("a = \"x\" \"y\"").is_err());
    assert!(crate::parse("a = true false").is_err());
}

#[test]
fn nesting_limit() {
    fn nested_arrays(depth: usize) -> String {
        format!("a = {}{}", "[".repeat(depth), "]".repeat(depth))
    }

    let table = parse_ok(&nested_arrays(MAX_NESTING));
    let reparsed = parse_ok(&crate::dump(&table));
    assert_eq!(table, reparsed);

    let e = parse_err(&nested_arrays(MAX_NESTING + 1));
    assert!(matches!(e.kind, ErrorKind::OutOfRange("nesting depth")));
    assert_eq!(e.span.start as usize, 4 + MAX_NESTING);

    // far past the limit still fails cleanly instead of exhausting the stack
    let e = parse_err(&nested_arrays(100_000));
    assert!(matches!(e.kind, ErrorKind::OutOfRange("nesting depth")));

    let deep_inline = format!("a = {}{}", "{b = ".repeat(20_000), "}".repeat(20_000));
    let e = parse_err(&deep_inline);
    assert!(matches!(e.kind, ErrorKind::OutOfRange("nesting depth")));

    let deep_dotted = format!("{} = 1", vec!["k"; MAX_NESTING + 2].join("."));
    let e = parse_err(&deep_dotted);
    assert!(matches!(e.kind, ErrorKind::OutOfRange("nesting depth")));
    assert_eq!(e.span.start, 0);

    let deep_header = format!("[{}]", vec!["k"; MAX_NESTING + 1].join("."));
    let e = parse_err(&deep_header);
    assert!(matches!(e.kind, ErrorKind::OutOfRange("nesting depth")));

    // header, dotted key and value nesting add up
    let half = MAX_NESTING / 2;
    let combined = format!(
        "[{}]\n{} = [[1]]",
        vec!["h"; half].join("."),
        vec!["d"; half].join(".")
    );
    let e = parse_err(&combined);
    assert!(matches!(e.kind, ErrorKind::OutOfRange("nesting depth")));
    let fits = format!(
        "[{}]\n{} = [[1]]",
        vec!["h"; half].join("."),
        vec!["d"; half - 2].join(".")
    );
    parse_ok(&fits);
}

#[test]
fn large_flat_document() {
    let mut input = String::new();
    for i in 0..500 {
        input.push_str(&format!("key{i} = {i}\n"));
    }
    let table = parse_ok(&input);
    assert_eq!(table.len(), 500);
    assert_eq!(table["key321"].as_integer(), Some(321));
}

#[test]
fn random_garbage_never_panics() {
    let alphabet: &[u8] = b"ab=1. \n[]{},\"'#\\-+:eZT0x_";
    let mut rng = oorandom::Rand32::new(0x70_6d_6c);
    for _ in 0..2000 {
        let len = rng.rand_range(0..40) as usize;
        let text: String = (0..len)
            .map(|_| alphabet[rng.rand_range(0..alphabet.len() as u32) as usize] as char)
            .collect();
        if let Err(e) = crate::parse(&text) {
            assert!(e.span.start as usize <= text.len(), "{text:?}: {e}");
        }
    }
}
