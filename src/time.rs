//! TOML date and time values, and the normalization of offset datetimes to
//! UTC.

#[cfg(test)]
#[path = "./time_tests.rs"]
mod tests;

use crate::{Error, ErrorKind, Span};
use std::fmt;
use std::str::FromStr;

/// A calendar date, `YYYY-MM-DD`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Date {
    year: u16,
    month: u8,
    day: u8,
}

/// A wall clock time, `HH:MM:SS[.fraction]`, kept to nanosecond precision.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Time {
    hour: u8,
    minute: u8,
    second: u8,
    nanosecond: u32,
}

/// A date and time without any relation to an offset or timezone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LocalDateTime {
    pub date: Date,
    pub time: Time,
}

/// An instant in time.
///
/// The offset written in the source document is applied when the value is
/// created and then discarded: the stored fields are always UTC and the value
/// is always written back with a `Z` suffix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OffsetDateTime {
    utc: LocalDateTime,
}

const SECONDS_PER_DAY: i64 = 86_400;
const MAX_OFFSET_MINUTES: i32 = 23 * 60 + 59;

fn is_leap_year(year: u16) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

fn days_in_month(year: u16, month: u8) -> u8 {
    const DAYS: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
    if month == 2 && is_leap_year(year) {
        29
    } else {
        DAYS[month as usize]
    }
}

/// Days since 1970-01-01 in the proleptic Gregorian calendar.
fn days_from_civil(year: i64, month: u8, day: u8) -> i64 {
    let y = if month <= 2 { year - 1 } else { year };
    let era = y.div_euclid(400);
    let yoe = y - era * 400;
    let mp = (month as i64 + 9) % 12;
    let doy = (153 * mp + 2) / 5 + day as i64 - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

fn civil_from_days(days: i64) -> (i64, u8, u8) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u8;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u8;
    let year = yoe + era * 400 + (month <= 2) as i64;
    (year, month, day)
}

impl Date {
    /// Returns `None` unless `month` is 1 to 12 and `day` exists in that month.
    pub fn new(year: u16, month: u8, day: u8) -> Option<Date> {
        if year > 9999 || month < 1 || month > 12 {
            return None;
        }
        if day < 1 || day > days_in_month(year, month) {
            return None;
        }
        Some(Date { year, month, day })
    }

    #[inline]
    pub fn year(&self) -> u16 {
        self.year
    }

    #[inline]
    pub fn month(&self) -> u8 {
        self.month
    }

    #[inline]
    pub fn day(&self) -> u8 {
        self.day
    }

    fn days_since_epoch(&self) -> i64 {
        days_from_civil(self.year as i64, self.month, self.day)
    }
}

impl Time {
    /// Returns `None` unless every field is in range. Leap seconds are not
    /// representable.
    pub fn new(hour: u8, minute: u8, second: u8, nanosecond: u32) -> Option<Time> {
        if hour > 23 || minute > 59 || second > 59 || nanosecond >= 1_000_000_000 {
            return None;
        }
        Some(Time {
            hour,
            minute,
            second,
            nanosecond,
        })
    }

    #[inline]
    pub fn hour(&self) -> u8 {
        self.hour
    }

    #[inline]
    pub fn minute(&self) -> u8 {
        self.minute
    }

    #[inline]
    pub fn second(&self) -> u8 {
        self.second
    }

    #[inline]
    pub fn nanosecond(&self) -> u32 {
        self.nanosecond
    }

    fn seconds_since_midnight(&self) -> i64 {
        self.hour as i64 * 3600 + self.minute as i64 * 60 + self.second as i64
    }
}

impl LocalDateTime {
    pub fn new(date: Date, time: Time) -> Self {
        Self { date, time }
    }
}

impl OffsetDateTime {
    /// Interprets `local` as a wall clock reading at `offset_minutes` east of
    /// UTC and converts it to the corresponding instant.
    ///
    /// Returns `None` if the offset magnitude exceeds `23:59` or the instant
    /// falls outside of the years `0000` to `9999`.
    pub fn from_local(local: LocalDateTime, offset_minutes: i32) -> Option<Self> {
        if offset_minutes.abs() > MAX_OFFSET_MINUTES {
            return None;
        }
        let secs = local.date.days_since_epoch() * SECONDS_PER_DAY
            + local.time.seconds_since_midnight()
            - offset_minutes as i64 * 60;
        Self::from_unix_timestamp(secs, local.time.nanosecond)
    }

    /// Builds an instant from seconds since `1970-01-01T00:00:00Z`.
    pub fn from_unix_timestamp(secs: i64, nanosecond: u32) -> Option<Self> {
        if nanosecond >= 1_000_000_000 {
            return None;
        }
        let days = secs.div_euclid(SECONDS_PER_DAY);
        let rem = secs.rem_euclid(SECONDS_PER_DAY);
        let (year, month, day) = civil_from_days(days);
        if !(0..=9999).contains(&year) {
            return None;
        }
        Some(Self {
            utc: LocalDateTime {
                date: Date {
                    year: year as u16,
                    month,
                    day,
                },
                time: Time {
                    hour: (rem / 3600) as u8,
                    minute: (rem / 60 % 60) as u8,
                    second: (rem % 60) as u8,
                    nanosecond,
                },
            },
        })
    }

    /// Seconds since `1970-01-01T00:00:00Z`, negative before it.
    pub fn unix_timestamp(&self) -> i64 {
        self.utc.date.days_since_epoch() * SECONDS_PER_DAY + self.utc.time.seconds_since_midnight()
    }

    #[inline]
    pub fn nanosecond(&self) -> u32 {
        self.utc.time.nanosecond
    }

    /// The UTC calendar date of this instant.
    #[inline]
    pub fn date(&self) -> Date {
        self.utc.date
    }

    /// The UTC wall clock time of this instant.
    #[inline]
    pub fn time(&self) -> Time {
        self.utc.time
    }

    #[inline]
    pub fn utc(&self) -> LocalDateTime {
        self.utc
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)?;
        if self.nanosecond != 0 {
            let mut frac = self.nanosecond;
            let mut width = 9;
            while frac % 10 == 0 {
                frac /= 10;
                width -= 1;
            }
            write!(f, ".{frac:0width$}")?;
        }
        Ok(())
    }
}

impl fmt::Display for LocalDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}T{}", self.date, self.time)
    }
}

impl fmt::Display for OffsetDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}Z", self.utc)
    }
}

/// Any of the four date/time forms TOML distinguishes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Datetime {
    Date(Date),
    Time(Time),
    Local(LocalDateTime),
    Offset(OffsetDateTime),
}

impl Datetime {
    fn describe(&self) -> &'static str {
        match self {
            Datetime::Date(_) => "a local date",
            Datetime::Time(_) => "a local time",
            Datetime::Local(_) => "a local datetime",
            Datetime::Offset(_) => "an offset datetime",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum DatetimeError {
    Malformed,
    OutOfRange(&'static str),
}

impl From<DatetimeError> for ErrorKind {
    fn from(err: DatetimeError) -> Self {
        match err {
            DatetimeError::Malformed => ErrorKind::InvalidDatetime,
            DatetimeError::OutOfRange(field) => ErrorKind::OutOfRange(field),
        }
    }
}

/// Returns `true` if `input` begins like a date (`dddd-`) or a time (`dd:`).
pub(crate) fn looks_like_datetime(input: &[u8]) -> bool {
    match input {
        [a, b, b':', ..] => a.is_ascii_digit() && b.is_ascii_digit(),
        [a, b, c, d, b'-', ..] => {
            a.is_ascii_digit() && b.is_ascii_digit() && c.is_ascii_digit() && d.is_ascii_digit()
        }
        _ => false,
    }
}

impl Datetime {
    /// Consumes the longest date/time literal at the start of `input`,
    /// returning the number of bytes read along with the validated value.
    pub(crate) fn munch(input: &[u8]) -> Result<(usize, Datetime), DatetimeError> {
        use DatetimeError::{Malformed, OutOfRange};
        enum State {
            Year,
            Month,
            Day,
            Hour,
            Minute,
            Second,
            Frac,
            OffHour,
            OffMin,
        }
        let mut state = match input {
            [_, _, b':', ..] => State::Hour,
            [_, _, _, _, b'-', ..] => State::Year,
            _ => return Err(Malformed),
        };

        let (mut year, mut month, mut day) = (0u16, 0u8, 0u8);
        let (mut hour, mut minute, mut second, mut nanosecond) = (0u8, 0u8, 0u8, 0u32);
        let mut has_date = false;
        let mut has_time = false;
        let mut offset: Option<i32> = None;

        let mut current = 0u32;
        let mut len = 0u32;
        let mut off_sign: i32 = 1;
        let mut off_hour: u8 = 0;
        let mut i = 0usize;

        'outer: loop {
            let byte = input.get(i).copied().unwrap_or(0);
            if byte.is_ascii_digit() {
                len += 1;
                if len <= 9 {
                    current = current * 10 + (byte - b'0') as u32;
                }
                i += 1;
                continue;
            }
            'next: {
                match state {
                    State::Year => {
                        if len != 4 || byte != b'-' {
                            return Err(Malformed);
                        }
                        year = current as u16;
                        state = State::Month;
                        break 'next;
                    }
                    State::Month => {
                        if len != 2 || byte != b'-' {
                            return Err(Malformed);
                        }
                        if current < 1 || current > 12 {
                            return Err(OutOfRange("month"));
                        }
                        month = current as u8;
                        state = State::Day;
                        break 'next;
                    }
                    State::Day => {
                        if len != 2 {
                            return Err(Malformed);
                        }
                        if current < 1 || current > days_in_month(year, month) as u32 {
                            return Err(OutOfRange("day"));
                        }
                        day = current as u8;
                        has_date = true;
                        if byte == b'T' || byte == b't' {
                            state = State::Hour;
                            break 'next;
                        } else if byte == b' '
                            && input.get(i + 1).is_some_and(|b| b.is_ascii_digit())
                        {
                            state = State::Hour;
                            break 'next;
                        } else {
                            break 'outer;
                        }
                    }
                    State::Hour => {
                        if len != 2 || byte != b':' {
                            return Err(Malformed);
                        }
                        if current > 23 {
                            return Err(OutOfRange("hour"));
                        }
                        hour = current as u8;
                        state = State::Minute;
                        break 'next;
                    }
                    State::Minute => {
                        if len != 2 {
                            return Err(Malformed);
                        }
                        if current > 59 {
                            return Err(OutOfRange("minute"));
                        }
                        minute = current as u8;
                        has_time = true;
                        if byte == b':' {
                            state = State::Second;
                            break 'next;
                        }
                        // seconds are optional, go look for an offset
                    }
                    State::Second => {
                        if len != 2 {
                            return Err(Malformed);
                        }
                        if current > 59 {
                            return Err(OutOfRange("second"));
                        }
                        second = current as u8;
                        if byte == b'.' {
                            state = State::Frac;
                            break 'next;
                        }
                    }
                    State::Frac => {
                        if len == 0 {
                            return Err(Malformed);
                        }
                        let mut nanos = current;
                        let mut digits = len.min(9);
                        while digits < 9 {
                            nanos *= 10;
                            digits += 1;
                        }
                        nanosecond = nanos;
                    }
                    State::OffHour => {
                        if len != 2 || byte != b':' {
                            return Err(Malformed);
                        }
                        if current > 23 {
                            return Err(OutOfRange("offset hour"));
                        }
                        off_hour = current as u8;
                        state = State::OffMin;
                        break 'next;
                    }
                    State::OffMin => {
                        if len != 2 {
                            return Err(Malformed);
                        }
                        if current > 59 {
                            return Err(OutOfRange("offset minute"));
                        }
                        offset = Some(off_sign * (off_hour as i32 * 60 + current as i32));
                        break 'outer;
                    }
                }
                match byte {
                    b'Z' | b'z' => {
                        offset = Some(0);
                        i += 1;
                        break 'outer;
                    }
                    b'+' => {
                        off_sign = 1;
                        state = State::OffHour;
                    }
                    b'-' => {
                        off_sign = -1;
                        state = State::OffHour;
                    }
                    _ => break 'outer,
                }
            }
            i += 1;
            current = 0;
            len = 0;
        }

        let date = Date { year, month, day };
        let time = Time {
            hour,
            minute,
            second,
            nanosecond,
        };
        let value = match (has_date, has_time, offset) {
            (true, false, _) => Datetime::Date(date),
            (false, true, None) => Datetime::Time(time),
            (true, true, None) => Datetime::Local(LocalDateTime { date, time }),
            (true, true, Some(minutes)) => {
                let local = LocalDateTime { date, time };
                match OffsetDateTime::from_local(local, minutes) {
                    Some(instant) => Datetime::Offset(instant),
                    None => return Err(OutOfRange("year")),
                }
            }
            (false, _, _) => return Err(Malformed),
        };
        Ok((i, value))
    }

    /// Parses the whole of `text` as a single date/time literal.
    fn parse_exact(text: &str) -> Result<Datetime, Error> {
        let span = Span::new(0, text.len() as u32);
        match Datetime::munch(text.as_bytes()) {
            Ok((len, value)) if len == text.len() => Ok(value),
            Ok(_) => Err((ErrorKind::InvalidDatetime, span).into()),
            Err(err) => Err((ErrorKind::from(err), span).into()),
        }
    }
}

macro_rules! impl_from_str {
    ($ty:ty, $variant:ident, $expected:literal) => {
        impl FromStr for $ty {
            type Err = Error;

            fn from_str(text: &str) -> Result<Self, Self::Err> {
                match Datetime::parse_exact(text)? {
                    Datetime::$variant(value) => Ok(value),
                    other => Err((
                        ErrorKind::Wanted {
                            expected: $expected,
                            found: other.describe(),
                        },
                        Span::new(0, text.len() as u32),
                    )
                        .into()),
                }
            }
        }
    };
}

impl_from_str!(Date, Date, "a local date");
impl_from_str!(Time, Time, "a local time");
impl_from_str!(LocalDateTime, Local, "a local datetime");
impl_from_str!(OffsetDateTime, Offset, "an offset datetime");
