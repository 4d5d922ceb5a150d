//! Encoding and decoding of textual UTC offsets.
//!
//! Three dialects are rendered: RFC-822 (`-0700`), ISO-8601 (`-07:00`)
//! and GMT (`GMT-07:00`). Parsing accepts a `GMT`/`UTC` prefix followed
//! by an optional signed offset, or a bare signed offset, where the
//! digits disambiguate between whole hours (`-7`), `HH:MM` and packed
//! `HHMM`.

use core::fmt;

use writeable::{impl_display_with_writeable, LengthHint, Writeable};

use crate::utils::{self, MINUTES_PER_HOUR};
use crate::Sign;

/// Textual dialect for a rendered offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OffsetDialect {
    /// `-0700`
    Rfc822,
    /// `-07:00`
    Iso8601,
    /// `GMT-07:00`
    Gmt,
}

/// A UTC offset prepared for rendering.
#[derive(Debug)]
pub(crate) struct FormattableOffset {
    pub(crate) sign: Sign,
    pub(crate) hour: u8,
    pub(crate) minute: u8,
    pub(crate) dialect: OffsetDialect,
}

impl FormattableOffset {
    pub(crate) fn from_minutes(minutes: i32, dialect: OffsetDialect) -> Self {
        let sign = if minutes < 0 {
            Sign::Negative
        } else {
            Sign::Positive
        };
        let magnitude = minutes.unsigned_abs();
        Self {
            sign,
            hour: (magnitude / 60) as u8,
            minute: (magnitude % 60) as u8,
            dialect,
        }
    }
}

impl Writeable for FormattableOffset {
    fn write_to<W: fmt::Write + ?Sized>(&self, sink: &mut W) -> fmt::Result {
        if self.dialect == OffsetDialect::Gmt {
            sink.write_str("GMT")?;
        }
        match self.sign {
            Sign::Negative => sink.write_char('-')?,
            _ => sink.write_char('+')?,
        }
        write_padded_u8(self.hour, sink)?;
        if self.dialect != OffsetDialect::Rfc822 {
            sink.write_char(':')?;
        }
        write_padded_u8(self.minute, sink)
    }

    fn writeable_length_hint(&self) -> LengthHint {
        match self.dialect {
            OffsetDialect::Rfc822 => LengthHint::exact(5),
            OffsetDialect::Iso8601 => LengthHint::exact(6),
            OffsetDialect::Gmt => LengthHint::exact(9),
        }
    }
}

impl_display_with_writeable!(FormattableOffset);

fn write_padded_u8<W: fmt::Write + ?Sized>(num: u8, sink: &mut W) -> fmt::Result {
    if num < 10 {
        sink.write_char('0')?;
    }
    num.write_to(sink)
}

/// Parses a zone specification at `pos`: `GMT` or `UTC` followed by an
/// optional signed offset, or a bare signed offset. Returns the offset in
/// minutes east of UTC, or `None` on a malformed signed offset.
pub(crate) fn parse_gmt_offset(text: &str, pos: &mut usize) -> Option<i32> {
    // Check the generic prefixes first so localized data containing the
    // string "GMT" cannot shadow a GMT+hh:mm specification.
    let rest = &text[*pos..];
    if rest.starts_with("GMT") || rest.starts_with("UTC") {
        *pos += 3;
    }
    parse_signed_offset(text, pos)
}

/// Parses the signed tail of an offset. A missing sign is an offset of
/// zero and consumes nothing. With a sign: `:`-separated digits are
/// hours then minutes; one or two digits below 24 are whole hours; any
/// other digit run packs `HHMM`.
pub(crate) fn parse_signed_offset(text: &str, pos: &mut usize) -> Option<i32> {
    let sign = match text.as_bytes().get(*pos) {
        Some(b'+') => 1,
        Some(b'-') => -1,
        _ => return Some(0),
    };
    *pos += 1;

    let start = *pos;
    let value = utils::parse_int(text, pos)?;
    let digits = *pos - start;

    let offset = if text.as_bytes().get(*pos) == Some(&b':') {
        *pos += 1;
        let minutes = utils::parse_int(text, pos)?;
        value * MINUTES_PER_HOUR + minutes
    } else if value < 24 && digits <= 2 {
        value * MINUTES_PER_HOUR
    } else {
        value % 100 + value / 100 * MINUTES_PER_HOUR
    };

    Some(sign * offset)
}
