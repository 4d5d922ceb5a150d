//! Pattern-driven parsing.
//!
//! The parser walks the compiled parts against input text, accumulating
//! fields into a [`DateRecord`] and finally resolving them into an
//! [`Instant`]. Runs of adjacent numeric fields of unknown individual
//! width are handled by the backtracking walk in [`run_parse`]: only the
//! run's leading field flexes, shrinking by one character per retry, so
//! `HHmmss` reads `"123456"` as 12:34:56 and `"12345"` as 1:23:45 but
//! rejects `"1234"`.

use crate::error::ParseError;
use crate::fields::Field;
use crate::info::DateTimeFormatInfo;
use crate::instant::Instant;
use crate::iso::IsoDate;
use crate::offset::parse_gmt_offset;
use crate::pattern::{CompiledPattern, PatternPart};
use crate::record::DateRecord;
use crate::utils;

#[cfg(test)]
mod tests;

/// Options controlling a parse call.
#[non_exhaustive]
#[derive(Debug, Default, Clone, Copy)]
pub struct ParseOptions {
    /// Reject calendrically impossible field combinations instead of
    /// wrapping them forward.
    pub strict: bool,
    /// The date supplying unset year/month/day defaults and anchoring
    /// the two-digit-year window. `None` reads the system clock under
    /// the `sys` feature and falls back to the Unix epoch date without
    /// it.
    pub reference: Option<IsoDate>,
    /// Offset in minutes east of UTC applied when the input carries no
    /// zone information.
    pub default_offset: i32,
}

impl ParseOptions {
    /// Lenient options: overflow wraps forward.
    pub fn lenient() -> Self {
        Self::default()
    }

    /// Strict options: impossible dates are rejected.
    pub fn strict() -> Self {
        Self {
            strict: true,
            ..Self::default()
        }
    }
}

impl CompiledPattern {
    /// Parses `text` from the beginning.
    ///
    /// On success returns the resolved instant and the number of bytes
    /// consumed; consuming less than the whole input is left for the
    /// caller to judge. On failure nothing is consumed.
    pub fn parse(
        &self,
        text: &str,
        info: &impl DateTimeFormatInfo,
        options: ParseOptions,
    ) -> Result<(Instant, usize), ParseError> {
        self.parse_from(text, 0, info, options)
    }

    /// Parses `text` starting at byte offset `start`.
    pub fn parse_from(
        &self,
        text: &str,
        start: usize,
        info: &impl DateTimeFormatInfo,
        options: ParseOptions,
    ) -> Result<(Instant, usize), ParseError> {
        let (record, consumed) =
            run_parse(self.parts(), text, start, info).ok_or_else(ParseError::no_match)?;
        let reference = options.reference.unwrap_or_else(default_reference);
        let instant = record.resolve(reference, options.strict, options.default_offset)?;
        Ok((instant, consumed))
    }
}

fn default_reference() -> IsoDate {
    #[cfg(feature = "sys")]
    {
        crate::sys::today()
    }
    #[cfg(not(feature = "sys"))]
    {
        IsoDate::new_unchecked(1970, 1, 1)
    }
}

/// Walks the parts against `text`, filling `record`. Returns the record
/// and the number of bytes consumed, or `None` when the input does not
/// match.
pub(crate) fn run_parse(
    parts: &[PatternPart],
    text: &str,
    start: usize,
    info: &impl DateTimeFormatInfo,
) -> Option<(DateRecord, usize)> {
    let mut record = DateRecord::default();
    let mut pos = start;

    // Abutting-run bookkeeping: the pattern index and input offset where
    // the current run began, and how many leading widths were tried.
    let mut abut_pat: Option<usize> = None;
    let mut abut_offset = start;
    let mut abut_pass = 0usize;

    let mut i = 0;
    while i < parts.len() {
        match &parts[i] {
            PatternPart::Field {
                field,
                count,
                abut_start,
            } => {
                if abut_pat.is_none() && *abut_start {
                    abut_pat = Some(i);
                    abut_offset = pos;
                    abut_pass = 0;
                }

                if let Some(run_start) = abut_pat {
                    // Inside a run every field keeps its declared width,
                    // except the leading one, which narrows on each pass.
                    // Once it cannot narrow further the run has failed.
                    let mut width = *count;
                    if i == run_start {
                        width = count.checked_sub(abut_pass)?;
                        if width == 0 {
                            return None;
                        }
                        abut_pass += 1;
                    }

                    if !sub_parse(text, &mut pos, *field, *count, width, &mut record, info) {
                        // A failure anywhere in the run rewinds to the
                        // run's start and retries with a narrower lead.
                        i = run_start;
                        pos = abut_offset;
                        continue;
                    }
                } else if !sub_parse(text, &mut pos, *field, *count, 0, &mut record, info) {
                    return None;
                }
            }
            PatternPart::Whitespace(_) => {
                abut_pat = None;
                // One pattern space matches a run of input whitespace,
                // but at least one character must be present.
                let s = pos;
                skip_space(text, &mut pos);
                if pos == s {
                    return None;
                }
            }
            PatternPart::Literal(literal) => {
                abut_pat = None;
                if !text[pos..].starts_with(literal.as_str()) {
                    return None;
                }
                pos += literal.len();
            }
        }
        i += 1;
    }

    Some((record, pos - start))
}

/// Parses one field at `pos`. `width` is non-zero only inside an
/// abutting run, where numeric fields must respect it; outside a run a
/// numeric field consumes every digit it can see.
fn sub_parse(
    text: &str,
    pos: &mut usize,
    field: Field,
    count: usize,
    width: usize,
    record: &mut DateRecord,
    info: &impl DateTimeFormatInfo,
) -> bool {
    skip_space(text, pos);
    let start = *pos;

    let mut value = None;
    if field.is_numeric(count) {
        if width > 0 {
            // The run's geometry requires this many characters to exist.
            if start + width > text.len() {
                return false;
            }
            value = utils::parse_int_max(text, pos, width);
        } else {
            value = utils::parse_int(text, pos);
        }
    }

    match field {
        Field::Era => {
            let index = match_name_pair(text, pos, &info.eras_full(), &info.eras_short());
            match index {
                Some(index) => {
                    record.era = Some(index as u8);
                    true
                }
                None => false,
            }
        }
        Field::Month => sub_parse_month(
            text,
            pos,
            record,
            value,
            &info.months_full(),
            &info.months_short(),
        ),
        Field::StandaloneMonth => sub_parse_month(
            text,
            pos,
            record,
            value,
            &info.months_full_standalone(),
            &info.months_short_standalone(),
        ),
        Field::DayOfWeek => {
            sub_parse_day_of_week(text, pos, record, &info.weekdays_full(), &info.weekdays_short())
        }
        Field::StandaloneDayOfWeek => sub_parse_day_of_week(
            text,
            pos,
            record,
            &info.weekdays_full_standalone(),
            &info.weekdays_short_standalone(),
        ),
        Field::AmPm => match match_string(text, pos, &info.am_pms()) {
            Some(index) => {
                record.ampm = Some(index as u8);
                true
            }
            None => false,
        },
        Field::Year => sub_parse_year(text, pos, start, value, count, record),
        Field::DayOfMonth => match value {
            Some(day) if day > 0 => {
                record.day_of_month = Some(day);
                true
            }
            _ => false,
        },
        Field::FractionalSecond => match value {
            Some(value) => sub_parse_fractional_seconds(value, *pos - start, record),
            None => false,
        },
        Field::Hour1To12 => match value {
            Some(hour) => {
                // Twelve on a 1..=12 clock is hour zero.
                record.hour = Some(if hour == 12 { 0 } else { hour });
                record.midnight_is_24 = false;
                true
            }
            None => false,
        },
        Field::Hour0To11 | Field::Hour0To23 => match value {
            Some(hour) => {
                record.hour = Some(hour);
                record.midnight_is_24 = false;
                true
            }
            None => false,
        },
        Field::Hour1To24 => match value {
            Some(hour) => {
                record.hour = Some(hour);
                record.midnight_is_24 = true;
                true
            }
            None => false,
        },
        Field::Minute => match value {
            Some(minute) => {
                record.minute = Some(minute);
                true
            }
            None => false,
        },
        Field::Second => match value {
            Some(second) => {
                record.second = Some(second);
                true
            }
            None => false,
        },
        Field::ZoneRfc => {
            // ISO-8601 times mark UTC with a literal Z.
            if text[*pos..].starts_with('Z') {
                *pos += 1;
                record.tz_offset_minutes = Some(0);
                return true;
            }
            sub_parse_zone(text, pos, record)
        }
        Field::ZoneName | Field::ZoneId => sub_parse_zone(text, pos, record),
        // Quarters render but carry no parseable date information.
        Field::Quarter => false,
    }
}

fn sub_parse_month(
    text: &str,
    pos: &mut usize,
    record: &mut DateRecord,
    value: Option<i32>,
    full: &[&str; 12],
    short: &[&str; 12],
) -> bool {
    match value {
        // A symbol month (MMM and up) or a numeric pattern over
        // non-numeric input falls through to name matching.
        None => match match_name_pair(text, pos, full, short) {
            Some(index) => {
                record.month = Some(index as i32);
                true
            }
            None => false,
        },
        Some(value) if value > 0 => {
            record.month = Some(value - 1);
            true
        }
        Some(_) => false,
    }
}

fn sub_parse_day_of_week(
    text: &str,
    pos: &mut usize,
    record: &mut DateRecord,
    full: &[&str; 7],
    short: &[&str; 7],
) -> bool {
    match match_name_pair(text, pos, full, short) {
        Some(index) => {
            record.day_of_week = Some(index);
            true
        }
        None => false,
    }
}

/// Years allow a sign, resolve bare two-digit values through the default
/// century, and participate in abutting runs.
fn sub_parse_year(
    text: &str,
    pos: &mut usize,
    start: usize,
    value: Option<i32>,
    count: usize,
    record: &mut DateRecord,
) -> bool {
    let mut signed = false;
    let value = match value {
        Some(value) => value,
        None => {
            // A sign-prefixed year bypasses the two-digit window.
            let sign = match text.as_bytes().get(*pos) {
                Some(b'+') => 1,
                Some(b'-') => -1,
                _ => return false,
            };
            *pos += 1;
            let Some(magnitude) = utils::parse_int(text, pos) else {
                return false;
            };
            signed = true;
            sign * magnitude
        }
    };

    // Overwritten on every pass, so a backtracking retry that reads a
    // different width does not inherit a stale flag.
    record.two_digit_year = !signed && *pos - start == 2 && count == 2;
    record.year = Some(value);
    true
}

/// Fractional seconds left-justify: `"4"` is 400ms while `"45678"`
/// rounds to 457ms.
fn sub_parse_fractional_seconds(value: i32, digits: usize, record: &mut DateRecord) -> bool {
    let mut value = i64::from(value);
    if digits < 3 {
        for _ in digits..3 {
            value *= 10;
        }
    } else {
        let mut scale: i64 = 1;
        for _ in 3..digits {
            scale *= 10;
        }
        value = (value + scale / 2) / scale;
    }
    record.millisecond = Some(value as i32);
    true
}

fn sub_parse_zone(text: &str, pos: &mut usize, record: &mut DateRecord) -> bool {
    match parse_gmt_offset(text, pos) {
        Some(offset) => {
            record.tz_offset_minutes = Some(offset);
            true
        }
        None => false,
    }
}

/// Tries the full names first, then the short names, mirroring how
/// counts of four and three select them when formatting.
fn match_name_pair<const N: usize>(
    text: &str,
    pos: &mut usize,
    full: &[&str; N],
    short: &[&str; N],
) -> Option<usize> {
    match_string(text, pos, full).or_else(|| match_string(text, pos, short))
}

/// Matches the longest candidate that is a case-insensitive prefix of
/// the input at `pos`, and advances past it. Multiple candidates can
/// share a prefix (Červen and Červenec, say), so every one is tested.
fn match_string(text: &str, pos: &mut usize, candidates: &[&str]) -> Option<usize> {
    let rest = &text[*pos..];
    let mut best: Option<(usize, usize)> = None;
    for (index, candidate) in candidates.iter().enumerate() {
        if candidate.is_empty() {
            continue;
        }
        if let Some(len) = prefix_match_len(rest, candidate) {
            if best.is_none_or(|(_, best_len)| len > best_len) {
                best = Some((index, len));
            }
        }
    }
    let (index, len) = best?;
    *pos += len;
    Some(index)
}

/// Byte length of `candidate` matched case-insensitively at the start of
/// `text`, or `None` if it is not a prefix.
fn prefix_match_len(text: &str, candidate: &str) -> Option<usize> {
    let mut input = text.chars();
    let mut matched = 0;
    for expected in candidate.chars() {
        let actual = input.next()?;
        if actual != expected && !actual.to_lowercase().eq(expected.to_lowercase()) {
            return None;
        }
        matched += actual.len_utf8();
    }
    Some(matched)
}

fn skip_space(text: &str, pos: &mut usize) {
    let bytes = text.as_bytes();
    while matches!(bytes.get(*pos), Some(b' ' | b'\t' | b'\r' | b'\n')) {
        *pos += 1;
    }
}
