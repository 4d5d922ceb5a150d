//! Wall-clock field slots.
//!
//! An [`IsoDate`] and [`IsoTime`] hold the proleptic-Gregorian calendar
//! fields of an instant as observed at an explicit UTC offset. They are
//! derived from and converted back to an [`Instant`](crate::Instant)
//! without any host-local date arithmetic.

use crate::error::ParseError;
use crate::instant::Instant;
use crate::{utils, MS_PER_DAY};

/// A calendar date: year, month (1..=12) and day of month.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct IsoDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl IsoDate {
    /// Creates a date, rejecting fields that name no calendar day.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, ParseError> {
        if !(1..=12).contains(&month) || day == 0 || day > utils::days_in_month(year, month) {
            return Err(ParseError::range().with_message("not a valid calendar date"));
        }
        Ok(Self::new_unchecked(year, month, day))
    }

    pub(crate) const fn new_unchecked(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    pub(crate) fn from_day_number(day_number: i64) -> Self {
        let (year, month, day) = utils::date_from_day_number(day_number);
        Self::new_unchecked(year, month, day)
    }

    pub(crate) fn to_day_number(self) -> i64 {
        utils::day_number_from_date(self.year, self.month, i64::from(self.day))
    }

    /// Day of week; 0 is Sunday.
    pub fn day_of_week(&self) -> usize {
        utils::day_of_week(self.to_day_number())
    }
}

/// A wall-clock time of day with millisecond precision.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct IsoTime {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub millisecond: u16,
}

impl IsoTime {
    pub(crate) fn from_ms_of_day(ms: i64) -> Self {
        Self {
            hour: (ms / utils::MS_PER_HOUR) as u8,
            minute: (ms / utils::MS_PER_MINUTE % 60) as u8,
            second: (ms / utils::MS_PER_SECOND % 60) as u8,
            millisecond: (ms % 1000) as u16,
        }
    }

    pub(crate) fn ms_of_day(&self) -> i64 {
        i64::from(self.hour) * utils::MS_PER_HOUR
            + i64::from(self.minute) * utils::MS_PER_MINUTE
            + i64::from(self.second) * utils::MS_PER_SECOND
            + i64::from(self.millisecond)
    }
}

/// A date and time of day, observed at some UTC offset.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct IsoDateTime {
    pub date: IsoDate,
    pub time: IsoTime,
}

impl IsoDateTime {
    /// Wall-clock fields of `instant` as observed `offset_minutes` east of
    /// UTC.
    pub fn from_instant(instant: Instant, offset_minutes: i32) -> Self {
        let local = instant.0 + i64::from(offset_minutes) * utils::MS_PER_MINUTE;
        let day_number = local.div_euclid(MS_PER_DAY);
        let ms_of_day = local.rem_euclid(MS_PER_DAY);
        Self {
            date: IsoDate::from_day_number(day_number),
            time: IsoTime::from_ms_of_day(ms_of_day),
        }
    }

    /// The instant these wall-clock fields describe at `offset_minutes`
    /// east of UTC.
    pub fn as_instant(&self, offset_minutes: i32) -> Instant {
        let local = self.date.to_day_number() * MS_PER_DAY + self.time.ms_of_day();
        Instant(local - i64::from(offset_minutes) * utils::MS_PER_MINUTE)
    }
}
