//! The parse-time field accumulator and its resolution.

use crate::error::ParseError;
use crate::instant::Instant;
use crate::iso::IsoDate;
use crate::utils;

/// Index of the pm entry in an am/pm name array.
pub(crate) const PM: u8 = 1;

/// Accumulates fields while the parser walks a pattern against input
/// text, then resolves once into a concrete instant.
///
/// Every field starts unset. The record lives for a single parse call
/// and is consumed by [`DateRecord::resolve`].
#[derive(Debug, Default, Clone)]
pub(crate) struct DateRecord {
    /// Era name index; 0 marks years before the common era.
    pub(crate) era: Option<u8>,
    /// Raw year value; possibly a two-digit value awaiting window
    /// resolution.
    pub(crate) year: Option<i32>,
    /// The year was exactly two bare digits under a `yy` pattern.
    pub(crate) two_digit_year: bool,
    /// The two-digit year sat on the resolution window's boundary.
    /// Computed for compatibility; nothing consumes it further.
    #[allow(dead_code)]
    pub(crate) ambiguous_year: bool,
    /// Month, 0-based.
    pub(crate) month: Option<i32>,
    pub(crate) day_of_month: Option<i32>,
    /// Day of week, 0 is Sunday. Accumulated but not consulted when
    /// resolving.
    #[allow(dead_code)]
    pub(crate) day_of_week: Option<usize>,
    pub(crate) hour: Option<i32>,
    /// The hour came from a 1..=24 field, where 24 is midnight.
    pub(crate) midnight_is_24: bool,
    pub(crate) minute: Option<i32>,
    pub(crate) second: Option<i32>,
    pub(crate) millisecond: Option<i32>,
    /// Am/pm name index.
    pub(crate) ampm: Option<u8>,
    /// Zone offset in minutes east of UTC, sign already applied.
    pub(crate) tz_offset_minutes: Option<i32>,
}

impl DateRecord {
    /// Resolves the accumulated fields into an instant.
    ///
    /// `reference` supplies unset year/month/day values and anchors the
    /// two-digit-year window; `default_offset` applies when the input
    /// carried no zone information. Strict resolution rejects any set
    /// field that does not survive normalization; lenient resolution
    /// wraps overflow forward (February 30 becomes March 1 or 2).
    pub(crate) fn resolve(
        mut self,
        reference: IsoDate,
        strict: bool,
        default_offset: i32,
    ) -> Result<Instant, ParseError> {
        if self.two_digit_year {
            self.resolve_two_digit_year(reference.year);
        }

        // An era of index 0 negates the year: 1 BC is year 0.
        if self.era == Some(0) {
            if let Some(y) = self.year.filter(|y| *y > 0) {
                self.year = Some(-(y - 1));
            }
        }

        let year = self.year.unwrap_or(reference.year);
        let month = self.month.unwrap_or(i32::from(reference.month) - 1);
        if strict && !(0..12).contains(&month) {
            return Err(fail("month out of range"));
        }

        let (year, month) = utils::balance_year_month(year, month);
        let day = match self.day_of_month {
            Some(day) => {
                if strict && (day < 1 || day > i32::from(utils::days_in_month(year, month))) {
                    return Err(fail("no such day in month"));
                }
                day
            }
            // A month with no day clamps to the month's last day.
            None if self.month.is_some() => i32::from(utils::days_in_month(year, month)),
            None => i32::from(reference.day),
        };

        let mut hour = self.hour.unwrap_or(0);
        if self.midnight_is_24 && hour == 24 {
            hour = 0;
        }
        if self.ampm == Some(PM) && hour < 12 {
            hour += 12;
        }
        let minute = self.minute.unwrap_or(0);
        let second = self.second.unwrap_or(0);
        let millisecond = self.millisecond.unwrap_or(0);

        if strict {
            if !(0..24).contains(&hour) {
                return Err(fail("hour out of range"));
            }
            if !(0..60).contains(&minute) {
                return Err(fail("minute out of range"));
            }
            if !(0..60).contains(&second) {
                return Err(fail("second out of range"));
            }
            if !(0..1000).contains(&millisecond) {
                return Err(fail("millisecond out of range"));
            }
        }

        let local_ms = utils::epoch_ms_from_fields(
            year,
            month,
            i64::from(day),
            i64::from(hour),
            i64::from(minute),
            i64::from(second),
            i64::from(millisecond),
        );
        let offset = self.tz_offset_minutes.unwrap_or(default_offset);
        Ok(Instant::from_epoch_milliseconds(
            local_ms - i64::from(offset) * utils::MS_PER_MINUTE,
        ))
    }

    /// Places a bare two-digit year inside the moving 100-year window
    /// `[reference − 80, reference + 19]`. A value equal to the window
    /// start's own two digits is flagged ambiguous.
    pub(crate) fn resolve_two_digit_year(&mut self, reference_year: i32) {
        let Some(value) = self.year else {
            return;
        };
        let century_start = reference_year - 80;
        let window_start = century_start.rem_euclid(100);
        self.ambiguous_year = value == window_start;
        self.year = Some(
            (century_start / 100) * 100 + value + if value < window_start { 100 } else { 0 },
        );
    }
}

fn fail(msg: &'static str) -> ParseError {
    #[cfg(feature = "log")]
    log::debug!("date resolution rejected: {msg}");
    ParseError::invalid_date().with_message(msg)
}

#[cfg(test)]
mod tests {
    use super::*;

    const REF: IsoDate = IsoDate::new_unchecked(1997, 1, 1);

    #[test]
    fn two_digit_window() {
        let mut record = DateRecord {
            year: Some(12),
            two_digit_year: true,
            ..Default::default()
        };
        record.resolve_two_digit_year(REF.year);
        assert_eq!(record.year, Some(2012));
        assert!(!record.ambiguous_year);

        let mut record = DateRecord {
            year: Some(64),
            two_digit_year: true,
            ..Default::default()
        };
        record.resolve_two_digit_year(REF.year);
        assert_eq!(record.year, Some(1964));

        // 1997 − 80 = 1917, so 17 is the ambiguous boundary.
        let mut record = DateRecord {
            year: Some(17),
            two_digit_year: true,
            ..Default::default()
        };
        record.resolve_two_digit_year(REF.year);
        assert_eq!(record.year, Some(1917));
        assert!(record.ambiguous_year);
    }

    #[test]
    fn defaults_from_reference() {
        let record = DateRecord::default();
        let instant = record.resolve(REF, false, 0).unwrap();
        // 1997-01-01T00:00:00Z
        assert_eq!(instant.epoch_milliseconds(), 852_076_800_000);
    }

    #[test]
    fn day_clamps_to_month_end() {
        let record = DateRecord {
            year: Some(2024),
            month: Some(1), // February
            ..Default::default()
        };
        let instant = record.resolve(REF, false, 0).unwrap();
        let fields = crate::iso::IsoDateTime::from_instant(instant, 0);
        assert_eq!((fields.date.month, fields.date.day), (2, 29));
    }

    #[test]
    fn lenient_wraps_strict_rejects() {
        let record = DateRecord {
            year: Some(2024),
            month: Some(1),
            day_of_month: Some(30),
            ..Default::default()
        };
        let instant = record.clone().resolve(REF, false, 0).unwrap();
        let fields = crate::iso::IsoDateTime::from_instant(instant, 0);
        assert_eq!((fields.date.month, fields.date.day), (3, 1));

        assert!(record.resolve(REF, true, 0).is_err());
    }

    #[test]
    fn pm_and_midnight_hours() {
        let record = DateRecord {
            hour: Some(5),
            ampm: Some(PM),
            ..Default::default()
        };
        let instant = record.resolve(REF, false, 0).unwrap();
        let fields = crate::iso::IsoDateTime::from_instant(instant, 0);
        assert_eq!(fields.time.hour, 17);

        let record = DateRecord {
            hour: Some(24),
            midnight_is_24: true,
            ..Default::default()
        };
        let instant = record.resolve(REF, false, 0).unwrap();
        let fields = crate::iso::IsoDateTime::from_instant(instant, 0);
        assert_eq!(fields.time.hour, 0);
    }

    #[test]
    fn era_negates_year() {
        let record = DateRecord {
            era: Some(0),
            year: Some(1),
            ..Default::default()
        };
        let instant = record.resolve(REF, false, 0).unwrap();
        let fields = crate::iso::IsoDateTime::from_instant(instant, 0);
        assert_eq!(fields.date.year, 0);
    }

    #[test]
    fn offset_shifts_to_utc() {
        let record = DateRecord {
            year: Some(2001),
            month: Some(8),
            day_of_month: Some(9),
            hour: Some(7),
            minute: Some(16),
            second: Some(40),
            tz_offset_minutes: Some(330),
            ..Default::default()
        };
        let instant = record.resolve(REF, false, 0).unwrap();
        assert_eq!(instant.epoch_milliseconds(), 1_000_000_000_000);
    }
}
