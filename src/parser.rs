//! Recursive-descent TOML parser.
//!
//! The scanner is a byte cursor over the input: each `read_*` / `eat_*`
//! method recognizes one lexical unit at the cursor. Parsed keys and values
//! are handed to the [`Builder`], which owns the growing tree.

#[cfg(test)]
#[path = "./parser_tests.rs"]
mod tests;

use crate::builder::{self, BuildError, Builder};
use crate::table::{Definition, Key};
use crate::time::{Datetime, looks_like_datetime};
use crate::{Array, Error, ErrorKind, Span, Table, Value};

/// Inputs above 512MiB are rejected before parsing begins.
const MAX_SIZE: usize = 1 << 29;

/// Deepest nesting of tables and arrays a document may reach, counting every
/// header and dotted-key segment as well as every `[` and `{`.
const MAX_NESTING: usize = 256;

/// The error details live on the [`Parser`]; this marker only signals that
/// they have been recorded.
struct ParseError;

struct Parser<'a> {
    input: &'a str,
    /// Raw bytes of `input`.
    bytes: &'a [u8],
    cursor: usize,

    // Error context, populated just before returning ParseError
    error_span: Span,
    error_kind: Option<ErrorKind>,

    builder: Builder,
    /// Nesting of the current header path.
    header_depth: usize,
    /// Nesting of the value being parsed.
    depth: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Parser {
            input,
            bytes: input.as_bytes(),
            cursor: 0,
            error_span: Span::new(0, 0),
            error_kind: None,
            builder: Builder::new(),
            header_depth: 0,
            depth: 0,
        }
    }

    // -- error helpers ------------------------------------------------------

    #[cold]
    fn set_error(&mut self, start: usize, end: Option<usize>, kind: ErrorKind) -> ParseError {
        self.error_span = Span::new(start as u32, end.unwrap_or(start + 1) as u32);
        self.error_kind = Some(kind);
        ParseError
    }

    #[cold]
    fn fail(&mut self, (kind, span): BuildError) -> ParseError {
        self.error_span = span;
        self.error_kind = Some(kind);
        ParseError
    }

    /// Descends `levels` deeper, failing once the tree would be nested too
    /// deeply to be handled without exhausting the stack.
    fn enter(&mut self, levels: usize, at: usize) -> Result<(), ParseError> {
        self.depth += levels;
        if self.depth > MAX_NESTING {
            return Err(self.set_error(at, None, ErrorKind::OutOfRange("nesting depth")));
        }
        Ok(())
    }

    fn take_error(&mut self) -> Error {
        let Some(kind) = self.error_kind.take() else {
            unreachable!("parse failed without recording an error");
        };
        let span = self.error_span;
        let line_info = Some(self.to_linecol(span.start as usize));
        Error {
            kind,
            span,
            line_info,
        }
    }

    fn to_linecol(&self, offset: usize) -> (usize, usize) {
        let mut line_start = 0;
        let mut line_num = 0;
        for (i, &b) in self.bytes.iter().enumerate() {
            if i >= offset {
                return (line_num, offset - line_start);
            }
            if b == b'\n' {
                line_num += 1;
                line_start = i + 1;
            }
        }
        (line_num, offset.saturating_sub(line_start))
    }

    /// The character starting at byte `i`, for error messages.
    fn char_at(&self, i: usize) -> char {
        self.input
            .get(i..)
            .and_then(|rest| rest.chars().next())
            .unwrap_or(char::REPLACEMENT_CHARACTER)
    }

    // -- cursor operations --------------------------------------------------

    #[inline]
    fn peek_byte(&self) -> Option<u8> {
        self.bytes.get(self.cursor).copied()
    }

    #[inline]
    fn peek_byte_at(&self, offset: usize) -> Option<u8> {
        self.bytes.get(self.cursor + offset).copied()
    }

    #[inline]
    fn advance(&mut self) {
        self.cursor += 1;
    }

    #[inline]
    fn eat_byte(&mut self, b: u8) -> bool {
        if self.peek_byte() == Some(b) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn expect_byte(&mut self, b: u8) -> Result<(), ParseError> {
        if self.eat_byte(b) {
            Ok(())
        } else {
            let start = self.cursor;
            let (found_desc, end) = self.scan_token_desc_and_end();
            Err(self.set_error(
                start,
                Some(end),
                ErrorKind::Wanted {
                    expected: byte_describe(b),
                    found: found_desc,
                },
            ))
        }
    }

    fn eat_whitespace(&mut self) {
        while let Some(b' ' | b'\t') = self.peek_byte() {
            self.advance();
        }
    }

    fn eat_comment(&mut self) -> Result<bool, ParseError> {
        if !self.eat_byte(b'#') {
            return Ok(false);
        }
        // valid comment bytes: tab, 0x20..=0x7E, 0x80..=0xFF
        while let Some(0x09 | 0x20..=0x7E | 0x80..) = self.peek_byte() {
            self.advance();
        }
        self.eat_newline_or_eof().map(|()| true)
    }

    fn eat_newline_or_eof(&mut self) -> Result<(), ParseError> {
        if self.peek_byte().is_none() || self.eat_newline() {
            return Ok(());
        }
        let start = self.cursor;
        let (found_desc, end) = self.scan_token_desc_and_end();
        Err(self.set_error(
            start,
            Some(end),
            ErrorKind::Wanted {
                expected: "newline",
                found: found_desc,
            },
        ))
    }

    fn eat_newline(&mut self) -> bool {
        match self.peek_byte() {
            Some(b'\n') => {
                self.advance();
                true
            }
            Some(b'\r') if self.peek_byte_at(1) == Some(b'\n') => {
                self.cursor += 2;
                true
            }
            _ => false,
        }
    }

    /// Whitespace, an optional comment, then a newline or the end of input.
    fn eat_line_end(&mut self) -> Result<(), ParseError> {
        self.eat_whitespace();
        if self.eat_comment()? {
            return Ok(());
        }
        self.eat_newline_or_eof()
    }

    /// Whitespace, comments and newlines, as allowed between the elements of
    /// arrays and inline tables.
    fn eat_intermediate(&mut self) -> Result<(), ParseError> {
        loop {
            self.eat_whitespace();
            if self.eat_newline() {
                continue;
            }
            if !self.eat_comment()? {
                return Ok(());
            }
        }
    }

    /// Describes the "token" at the cursor and where it ends, for errors.
    fn scan_token_desc_and_end(&self) -> (&'static str, usize) {
        match self.peek_byte() {
            None => ("eof", self.bytes.len()),
            Some(b'\n' | b'\r') => ("a newline", self.cursor + 1),
            Some(b' ' | b'\t') => {
                let mut end = self.cursor + 1;
                while let Some(b' ' | b'\t') = self.bytes.get(end) {
                    end += 1;
                }
                ("whitespace", end)
            }
            Some(b'#') => ("a comment", self.cursor + 1),
            Some(b'=') => ("an equals", self.cursor + 1),
            Some(b'.') => ("a period", self.cursor + 1),
            Some(b',') => ("a comma", self.cursor + 1),
            Some(b':') => ("a colon", self.cursor + 1),
            Some(b'+') => ("a plus", self.cursor + 1),
            Some(b'{') => ("a left brace", self.cursor + 1),
            Some(b'}') => ("a right brace", self.cursor + 1),
            Some(b'[') => ("a left bracket", self.cursor + 1),
            Some(b']') => ("a right bracket", self.cursor + 1),
            Some(b'\'' | b'"') => ("a string", self.cursor + 1),
            Some(b) if is_keylike_byte(b) => {
                let mut end = self.cursor + 1;
                while self.bytes.get(end).is_some_and(|&b| is_keylike_byte(b)) {
                    end += 1;
                }
                ("an identifier", end)
            }
            Some(_) => ("a character", self.cursor + self.char_at(self.cursor).len_utf8()),
        }
    }

    // -- keys ---------------------------------------------------------------

    fn read_keylike(&mut self) -> &'a str {
        let start = self.cursor;
        while self.peek_byte().is_some_and(is_keylike_byte) {
            self.advance();
        }
        let input = self.input;
        &input[start..self.cursor]
    }

    fn read_key(&mut self) -> Result<Key, ParseError> {
        let start = self.cursor;
        match self.peek_byte() {
            Some(delim @ (b'"' | b'\'')) => {
                self.advance();
                let (name, multiline) = self.read_string(start, delim)?;
                if multiline {
                    return Err(self.set_error(
                        start,
                        Some(self.cursor),
                        ErrorKind::MultilineStringKey,
                    ));
                }
                Ok(Key::new(name, Span::new(start as u32, self.cursor as u32)))
            }
            Some(b) if is_keylike_byte(b) => {
                let name = self.read_keylike();
                Ok(Key::new(name, Span::new(start as u32, self.cursor as u32)))
            }
            Some(_) => {
                let (found_desc, end) = self.scan_token_desc_and_end();
                Err(self.set_error(
                    start,
                    Some(end),
                    ErrorKind::Wanted {
                        expected: "a table key",
                        found: found_desc,
                    },
                ))
            }
            None => Err(self.set_error(
                self.bytes.len(),
                None,
                ErrorKind::Wanted {
                    expected: "a table key",
                    found: "eof",
                },
            )),
        }
    }

    /// Reads `a`, `a.b`, `"a" . 'b'` and so on, including trailing whitespace.
    fn read_key_path(&mut self) -> Result<Vec<Key>, ParseError> {
        let mut path = vec![self.read_key()?];
        self.eat_whitespace();
        while self.eat_byte(b'.') {
            self.eat_whitespace();
            path.push(self.read_key()?);
            self.eat_whitespace();
        }
        Ok(path)
    }

    // -- strings ------------------------------------------------------------

    /// Reads a string whose opening delimiter starts at `start`. The cursor
    /// must sit right after that first delimiter. Returns the decoded content
    /// and whether the string was multiline.
    fn read_string(&mut self, start: usize, delim: u8) -> Result<(String, bool), ParseError> {
        let mut multiline = false;
        if self.eat_byte(delim) {
            if self.eat_byte(delim) {
                multiline = true;
            } else {
                return Ok((String::new(), false));
            }
        }
        if multiline {
            self.eat_newline();
        }

        let mut out = String::new();
        let mut run = self.cursor;
        loop {
            let i = self.cursor;
            let Some(&b) = self.bytes.get(i) else {
                return Err(self.set_error(start, None, ErrorKind::UnterminatedString));
            };
            match b {
                d if d == delim => {
                    if !multiline {
                        out.push_str(&self.input[run..i]);
                        self.cursor = i + 1;
                        return Ok((out, false));
                    }
                    let mut n = 1;
                    while n < 5 && self.bytes.get(i + n) == Some(&delim) {
                        n += 1;
                    }
                    self.cursor = i + n;
                    if n >= 3 {
                        // up to two quotes directly before the closing
                        // delimiter belong to the content
                        out.push_str(&self.input[run..i + n - 3]);
                        return Ok((out, true));
                    }
                }
                b'\\' if delim == b'"' => {
                    out.push_str(&self.input[run..i]);
                    self.cursor = i + 1;
                    self.read_basic_escape(start, multiline, &mut out)?;
                    run = self.cursor;
                }
                b'\n' if multiline => self.cursor = i + 1,
                b'\r' if multiline && self.bytes.get(i + 1) == Some(&b'\n') => {
                    self.cursor = i + 2;
                }
                0x09 | 0x20..=0x7E | 0x80.. => self.cursor = i + 1,
                _ => {
                    return Err(self.set_error(i, None, ErrorKind::InvalidCharInString(b as char)));
                }
            }
        }
    }

    fn read_basic_escape(
        &mut self,
        string_start: usize,
        multi: bool,
        out: &mut String,
    ) -> Result<(), ParseError> {
        let i = self.cursor;
        let Some(&b) = self.bytes.get(i) else {
            return Err(self.set_error(string_start, None, ErrorKind::UnterminatedString));
        };
        self.cursor = i + 1;

        match b {
            b'"' => out.push('"'),
            b'\\' => out.push('\\'),
            b'b' => out.push('\u{8}'),
            b'f' => out.push('\u{c}'),
            b'n' => out.push('\n'),
            b'r' => out.push('\r'),
            b't' => out.push('\t'),
            b'e' => out.push('\u{1b}'),
            b'u' => out.push(self.read_hex(4, string_start, i)?),
            b'U' => out.push(self.read_hex(8, string_start, i)?),
            b'x' => out.push(self.read_hex(2, string_start, i)?),
            b' ' | b'\t' | b'\n' | b'\r' if multi => {
                // line-ending backslash, \r\n counts as \n
                let c = if b == b'\r' && self.eat_byte(b'\n') {
                    '\n'
                } else {
                    b as char
                };
                if c != '\n' {
                    // only whitespace may sit between the backslash and the newline
                    loop {
                        match self.peek_byte() {
                            Some(b' ' | b'\t') => self.advance(),
                            _ if self.eat_newline() => break,
                            _ => return Err(self.set_error(i, None, ErrorKind::InvalidEscape(c))),
                        }
                    }
                }
                loop {
                    match self.peek_byte() {
                        Some(b' ' | b'\t' | b'\n') => self.advance(),
                        Some(b'\r') if self.peek_byte_at(1) == Some(b'\n') => self.cursor += 2,
                        _ => break,
                    }
                }
            }
            _ => {
                let c = self.char_at(i);
                return Err(self.set_error(i, Some(i + c.len_utf8()), ErrorKind::InvalidEscape(c)));
            }
        }
        Ok(())
    }

    fn read_hex(
        &mut self,
        n: usize,
        string_start: usize,
        escape_start: usize,
    ) -> Result<char, ParseError> {
        let mut val = 0u32;
        for _ in 0..n {
            let Some(&byte) = self.bytes.get(self.cursor) else {
                return Err(self.set_error(string_start, None, ErrorKind::UnterminatedString));
            };
            let Some(digit) = (byte as char).to_digit(16) else {
                let i = self.cursor;
                let c = self.char_at(i);
                return Err(self.set_error(i, Some(i + c.len_utf8()), ErrorKind::InvalidHexEscape(c)));
            };
            val = val * 16 + digit;
            self.advance();
        }
        match char::from_u32(val) {
            Some(ch) => Ok(ch),
            None => Err(self.set_error(
                escape_start - 1,
                Some(self.cursor),
                ErrorKind::InvalidEscapeValue(val),
            )),
        }
    }

    // -- values -------------------------------------------------------------

    fn value(&mut self) -> Result<Value, ParseError> {
        let at = self.cursor;
        let Some(byte) = self.peek_byte() else {
            return Err(self.set_error(self.bytes.len(), None, ErrorKind::UnexpectedEof));
        };
        match byte {
            b'"' | b'\'' => {
                self.advance();
                let (s, _multiline) = self.read_string(at, byte)?;
                Ok(Value::String(s))
            }
            b'{' => {
                self.enter(1, at)?;
                self.advance();
                let table = self.inline_table_contents()?;
                self.depth -= 1;
                Ok(Value::Table(table))
            }
            b'[' => {
                self.enter(1, at)?;
                self.advance();
                let array = self.array_contents()?;
                self.depth -= 1;
                Ok(Value::Array(array))
            }
            _ if looks_like_datetime(&self.bytes[at..]) => self.datetime(),
            b'+' | b'-' | b'0'..=b'9' => self.number(),
            b if is_keylike_byte(b) => {
                let key = self.read_keylike();
                match key {
                    "true" => Ok(Value::Boolean(true)),
                    "false" => Ok(Value::Boolean(false)),
                    "inf" => Ok(Value::Float(f64::INFINITY)),
                    "nan" => Ok(Value::Float(f64::NAN)),
                    _ => Err(self.set_error(at, Some(self.cursor), ErrorKind::UnquotedString)),
                }
            }
            _ => {
                let (found_desc, end) = self.scan_token_desc_and_end();
                Err(self.set_error(
                    at,
                    Some(end),
                    ErrorKind::Wanted {
                        expected: "a value",
                        found: found_desc,
                    },
                ))
            }
        }
    }

    fn datetime(&mut self) -> Result<Value, ParseError> {
        let start = self.cursor;
        match Datetime::munch(&self.bytes[start..]) {
            Ok((len, datetime)) => {
                self.cursor = start + len;
                Ok(match datetime {
                    Datetime::Date(d) => Value::LocalDate(d),
                    Datetime::Time(t) => Value::LocalTime(t),
                    Datetime::Local(dt) => Value::LocalDateTime(dt),
                    Datetime::Offset(dt) => Value::OffsetDateTime(dt),
                })
            }
            Err(err) => {
                let end = self.token_end(start);
                Err(self.set_error(start, Some(end), err.into()))
            }
        }
    }

    /// End of the number-like token starting at `start`: keylike bytes plus
    /// the `.` and `+` that floats may contain.
    fn token_end(&self, start: usize) -> usize {
        let mut end = start;
        while let Some(&b) = self.bytes.get(end) {
            if is_keylike_byte(b) || b == b'.' || b == b'+' || b == b':' {
                end += 1;
            } else {
                break;
            }
        }
        end
    }

    fn number(&mut self) -> Result<Value, ParseError> {
        let start = self.cursor;
        let mut end = start;
        while let Some(&b) = self.bytes.get(end) {
            if is_keylike_byte(b) || b == b'.' || b == b'+' {
                end += 1;
            } else {
                break;
            }
        }
        self.cursor = end;
        let input = self.input;
        match parse_number(&input[start..end]) {
            Ok(value) => Ok(value),
            Err(kind) => Err(self.set_error(start, Some(end), kind)),
        }
    }

    fn inline_table_contents(&mut self) -> Result<Table, ParseError> {
        let mut table = Table::new();
        self.eat_intermediate()?;
        if self.eat_byte(b'}') {
            return Ok(table);
        }
        loop {
            let key_start = self.cursor;
            let path = self.read_key_path()?;
            self.expect_byte(b'=')?;
            self.eat_whitespace();
            // the last segment is counted by the value itself
            self.enter(path.len() - 1, key_start)?;
            let value = self.value()?;
            self.depth -= path.len() - 1;
            let def = literal_definition(&value);
            if let Err(err) = builder::insert_dotted(&mut table, &path, value, def) {
                return Err(self.fail(err));
            }

            self.eat_intermediate()?;
            if self.eat_byte(b'}') {
                return Ok(table);
            }
            self.expect_byte(b',')?;
            self.eat_intermediate()?;
            if self.eat_byte(b'}') {
                return Ok(table);
            }
        }
    }

    fn array_contents(&mut self) -> Result<Array, ParseError> {
        let mut array = Array::new();
        loop {
            self.eat_intermediate()?;
            if self.eat_byte(b']') {
                return Ok(array);
            }
            array.push(self.value()?);
            self.eat_intermediate()?;
            if !self.eat_byte(b',') {
                break;
            }
        }
        self.eat_intermediate()?;
        self.expect_byte(b']')?;
        Ok(array)
    }

    // -- document -----------------------------------------------------------

    fn parse_document(&mut self) -> Result<(), ParseError> {
        loop {
            self.eat_whitespace();
            if self.eat_comment()? {
                continue;
            }
            if self.eat_newline() {
                continue;
            }
            match self.peek_byte() {
                None => return Ok(()),
                Some(b'[') => self.process_table_header()?,
                Some(b'\r') => {
                    return Err(self.set_error(self.cursor, None, ErrorKind::Unexpected('\r')));
                }
                Some(_) => self.process_key_value()?,
            }
        }
    }

    fn process_table_header(&mut self) -> Result<(), ParseError> {
        self.expect_byte(b'[')?;
        let is_array = self.eat_byte(b'[');
        self.eat_whitespace();
        let key_start = self.cursor;
        let path = self.read_key_path()?;
        self.depth = 0;
        self.enter(path.len(), key_start)?;
        self.header_depth = path.len();
        self.expect_byte(b']')?;
        if is_array {
            self.expect_byte(b']')?;
        }
        self.eat_line_end()?;

        let result = if is_array {
            self.builder.open_array_table(&path)
        } else {
            self.builder.open_table(&path)
        };
        result.map_err(|err| self.fail(err))
    }

    fn process_key_value(&mut self) -> Result<(), ParseError> {
        let key_start = self.cursor;
        let path = self.read_key_path()?;
        self.expect_byte(b'=')?;
        self.eat_whitespace();
        self.depth = self.header_depth;
        self.enter(path.len() - 1, key_start)?;
        let value = self.value()?;
        self.eat_line_end()?;

        let def = literal_definition(&value);
        let result = self.builder.assign_key_path(&path, value, def);
        result.map_err(|err| self.fail(err))
    }
}

/// Parses a TOML document into its root [`Table`].
///
/// The whole document is validated before anything is returned: on error no
/// part of the tree is available.
///
/// # Examples
///
/// ```
/// let table = toml_tree::parse("[server]\nport = 8080\n")?;
/// assert_eq!(table["server"]["port"].as_integer(), Some(8080));
/// # Ok::<(), toml_tree::Error>(())
/// ```
pub fn parse(s: &str) -> Result<Table, Error> {
    if s.len() > MAX_SIZE {
        return Err(Error {
            kind: ErrorKind::FileTooLarge,
            span: Span::new(0, 0),
            line_info: None,
        });
    }

    let mut parser = Parser::new(s);
    match parser.parse_document() {
        Ok(()) => Ok(parser.builder.finish()),
        Err(ParseError) => Err(parser.take_error()),
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Values written inline are closed once parsed: arrays cannot be extended by
/// `[[key]]` and tables not at all.
fn literal_definition(value: &Value) -> Definition {
    match value {
        Value::Array(_) => Definition::Array,
        Value::Table(_) => Definition::Inline,
        _ => Definition::Value,
    }
}

/// Parses an integer or float token, including its sign.
fn parse_number(text: &str) -> Result<Value, ErrorKind> {
    let (negative, body) = match text.as_bytes().first() {
        Some(b'+') => (false, &text[1..]),
        Some(b'-') => (true, &text[1..]),
        _ => (false, text),
    };
    let signed = body.len() != text.len();
    let sign = if negative { -1.0 } else { 1.0 };
    match body {
        "inf" => return Ok(Value::Float(f64::INFINITY.copysign(sign))),
        "nan" => return Ok(Value::Float(f64::NAN.copysign(sign))),
        _ => {}
    }

    for (prefix, radix) in [("0x", 16), ("0o", 8), ("0b", 2)] {
        if let Some(digits) = body.strip_prefix(prefix) {
            if signed || !valid_digits(digits, radix) {
                return Err(ErrorKind::InvalidNumber);
            }
            return match i64::from_str_radix(&digits.replace('_', ""), radix) {
                Ok(n) => Ok(Value::Integer(n)),
                Err(_) => Err(ErrorKind::OutOfRange("integer")),
            };
        }
    }

    let (mantissa, exponent) = match body.find(['e', 'E']) {
        Some(i) => (&body[..i], Some(&body[i + 1..])),
        None => (body, None),
    };
    let (integral, fraction) = match mantissa.split_once('.') {
        Some((integral, fraction)) => (integral, Some(fraction)),
        None => (mantissa, None),
    };
    if !valid_digits(integral, 10) || (integral.len() > 1 && integral.starts_with('0')) {
        return Err(ErrorKind::InvalidNumber);
    }
    if fraction.is_some_and(|f| !valid_digits(f, 10)) {
        return Err(ErrorKind::InvalidNumber);
    }
    if let Some(exponent) = exponent {
        let digits = exponent.strip_prefix(['+', '-']).unwrap_or(exponent);
        if !valid_digits(digits, 10) {
            return Err(ErrorKind::InvalidNumber);
        }
    }

    let cleaned = text.replace('_', "");
    if fraction.is_none() && exponent.is_none() {
        return match cleaned.parse::<i64>() {
            Ok(n) => Ok(Value::Integer(n)),
            Err(_) => Err(ErrorKind::OutOfRange("integer")),
        };
    }
    match cleaned.parse::<f64>() {
        Ok(f) if f.is_finite() => Ok(Value::Float(f)),
        _ => Err(ErrorKind::InvalidNumber),
    }
}

/// Non-empty digits of `radix`, where every `_` sits between two digits.
fn valid_digits(s: &str, radix: u32) -> bool {
    let bytes = s.as_bytes();
    let (Some(&first), Some(&last)) = (bytes.first(), bytes.last()) else {
        return false;
    };
    if first == b'_' || last == b'_' {
        return false;
    }
    let mut prev_underscore = false;
    for &b in bytes {
        if b == b'_' {
            if prev_underscore {
                return false;
            }
            prev_underscore = true;
        } else if (b as char).is_digit(radix) {
            prev_underscore = false;
        } else {
            return false;
        }
    }
    true
}

#[inline]
fn is_keylike_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-' || b == b'_'
}

fn byte_describe(b: u8) -> &'static str {
    match b {
        b'\n' => "a newline",
        b' ' | b'\t' => "whitespace",
        b'=' => "an equals",
        b'.' => "a period",
        b',' => "a comma",
        b':' => "a colon",
        b'+' => "a plus",
        b'{' => "a left brace",
        b'}' => "a right brace",
        b'[' => "a left bracket",
        b']' => "a right bracket",
        b'\'' | b'"' => "a string",
        _ if is_keylike_byte(b) => "an identifier",
        _ => "a character",
    }
}
