//! Rendering of compiled patterns.

use alloc::string::String;
use core::fmt::Write as _;

use writeable::Writeable;

use crate::fields::Field;
use crate::info::DateTimeFormatInfo;
use crate::instant::Instant;
use crate::iso::IsoDateTime;
use crate::offset::{FormattableOffset, OffsetDialect};
use crate::pattern::{CompiledPattern, PatternPart};
use crate::provider::{TimeZoneProvider, UTC};

impl CompiledPattern {
    /// Formats `instant` at UTC.
    pub fn format(&self, instant: Instant, info: &impl DateTimeFormatInfo) -> String {
        self.format_with_zone(instant, &UTC, info)
    }

    /// Formats `instant` in the supplied zone.
    ///
    /// Formatting a compiled pattern cannot fail: every field letter was
    /// vetted at compile time and every value has a rendering.
    pub fn format_with_zone(
        &self,
        instant: Instant,
        zone: &impl TimeZoneProvider,
        info: &impl DateTimeFormatInfo,
    ) -> String {
        let offset = zone.offset_minutes(&instant);
        let fields = IsoDateTime::from_instant(instant, offset);

        let mut buf = String::with_capacity(self.pattern().len() + 16);
        for part in self.parts() {
            match part {
                PatternPart::Literal(text) | PatternPart::Whitespace(text) => buf.push_str(text),
                PatternPart::Field { field, count, .. } => {
                    sub_format(&mut buf, *field, *count, &fields, instant, zone, info);
                }
            }
        }
        buf
    }
}

fn sub_format(
    buf: &mut String,
    field: Field,
    count: usize,
    fields: &IsoDateTime,
    instant: Instant,
    zone: &impl TimeZoneProvider,
    info: &impl DateTimeFormatInfo,
) {
    let date = fields.date;
    let time = fields.time;
    match field {
        Field::Era => {
            let index = usize::from(date.year >= 0);
            if count >= 4 {
                buf.push_str(info.eras_full()[index]);
            } else {
                buf.push_str(info.eras_short()[index]);
            }
        }
        Field::Year => format_year(buf, count, date.year),
        Field::Month => {
            let month = usize::from(date.month) - 1;
            match count {
                5 => buf.push_str(info.months_narrow()[month]),
                4 => buf.push_str(info.months_full()[month]),
                3 => buf.push_str(info.months_short()[month]),
                _ => zero_padded(buf, month as i64 + 1, count),
            }
        }
        Field::StandaloneMonth => {
            let month = usize::from(date.month) - 1;
            match count {
                5 => buf.push_str(info.months_narrow_standalone()[month]),
                4 => buf.push_str(info.months_full_standalone()[month]),
                3 => buf.push_str(info.months_short_standalone()[month]),
                _ => zero_padded(buf, month as i64 + 1, count),
            }
        }
        Field::Quarter => {
            let quarter = usize::from(date.month - 1) / 3;
            if count < 4 {
                buf.push_str(info.quarters_short()[quarter]);
            } else {
                buf.push_str(info.quarters_full()[quarter]);
            }
        }
        Field::DayOfMonth => zero_padded(buf, i64::from(date.day), count),
        Field::DayOfWeek => {
            let day = date.day_of_week();
            match count {
                5 => buf.push_str(info.weekdays_narrow()[day]),
                4 => buf.push_str(info.weekdays_full()[day]),
                _ => buf.push_str(info.weekdays_short()[day]),
            }
        }
        Field::StandaloneDayOfWeek => {
            let day = date.day_of_week();
            match count {
                5 => buf.push_str(info.weekdays_narrow_standalone()[day]),
                4 => buf.push_str(info.weekdays_full_standalone()[day]),
                3 => buf.push_str(info.weekdays_short_standalone()[day]),
                _ => zero_padded(buf, day as i64, 1),
            }
        }
        Field::AmPm => {
            let index = usize::from(time.hour >= 12);
            buf.push_str(info.am_pms()[index]);
        }
        Field::Hour1To12 => {
            let value = i64::from(time.hour) % 12;
            zero_padded(buf, if value == 0 { 12 } else { value }, count);
        }
        Field::Hour0To23 => zero_padded(buf, i64::from(time.hour), count),
        Field::Hour0To11 => zero_padded(buf, i64::from(time.hour) % 12, count),
        Field::Hour1To24 => {
            let value = i64::from(time.hour);
            zero_padded(buf, if value == 0 { 24 } else { value }, count);
        }
        Field::Minute => zero_padded(buf, i64::from(time.minute), count),
        Field::Second => zero_padded(buf, i64::from(time.second), count),
        Field::FractionalSecond => format_fractional_seconds(buf, count, time.millisecond),
        Field::ZoneName => {
            if count < 4 {
                buf.push_str(&zone.short_name(&instant));
            } else {
                buf.push_str(&zone.long_name(&instant));
            }
        }
        Field::ZoneId => buf.push_str(&zone.id()),
        Field::ZoneRfc => {
            let dialect = match count {
                0..=2 => OffsetDialect::Rfc822,
                3 => OffsetDialect::Iso8601,
                _ => OffsetDialect::Gmt,
            };
            let offset = FormattableOffset::from_minutes(zone.offset_minutes(&instant), dialect);
            // Writing into a `String` cannot fail.
            let _ = offset.write_to(buf);
        }
    }
}

/// A count of exactly 2 truncates to the last two digits; a count of 1
/// never pads. The era carries the sign, so only the magnitude renders.
fn format_year(buf: &mut String, count: usize, year: i32) {
    let value = i64::from(year).abs();
    match count {
        1 => zero_padded(buf, value, 1),
        2 => zero_padded(buf, value % 100, 2),
        _ => zero_padded(buf, value, count),
    }
}

/// Fractional seconds are left-justified: zero-padding extends to the
/// right, and narrow counts round toward the nearest bucket without ever
/// carrying into the seconds.
fn format_fractional_seconds(buf: &mut String, count: usize, millisecond: u16) {
    let value = i64::from(millisecond);
    match count {
        1 => zero_padded(buf, ((value + 50) / 100).min(9), 1),
        2 => zero_padded(buf, ((value + 5) / 10).min(99), 2),
        _ => {
            zero_padded(buf, value, 3);
            for _ in 3..count {
                buf.push('0');
            }
        }
    }
}

fn zero_padded(buf: &mut String, value: i64, width: usize) {
    // Writing into a `String` cannot fail.
    let _ = write!(buf, "{value:0width$}");
}
