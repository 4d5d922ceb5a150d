//! Predefined pattern selection, including the fixed wire formats.

use alloc::borrow::Cow;

use crate::info::DateTimeFormatInfo;

/// RFC 2822 date format, fixed across all locales.
///
/// Example: `Thu, 20 May 2010 17:54:50 -0700`
pub const RFC2822_PATTERN: &str = "EEE, d MMM yyyy HH:mm:ss Z";

/// ISO 8601 date format, fixed across all locales.
///
/// Example: `2008-10-03T10:29:40.046-04:00`
pub const ISO8601_PATTERN: &str = "yyyy-MM-dd'T'HH:mm:ss.SSSZZZ";

/// Predefined date/time formats.
///
/// The two wire formats resolve to byte-exact pattern constants and are
/// always rendered with fixed English names; everything else resolves
/// through the supplied [`DateTimeFormatInfo`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum PredefinedFormat {
    Iso8601,
    Rfc2822,

    DateFull,
    DateLong,
    DateMedium,
    DateShort,

    TimeFull,
    TimeLong,
    TimeMedium,
    TimeShort,

    DateTimeFull,
    DateTimeLong,
    DateTimeMedium,
    DateTimeShort,

    Day,
    HourMinute,
    HourMinuteSecond,
    Hour24Minute,
    Hour24MinuteSecond,
    MinuteSecond,
    Month,
    MonthAbbr,
    MonthAbbrDay,
    MonthDay,
    MonthNumDay,
    MonthWeekdayDay,
    Year,
    YearMonth,
    YearMonthAbbr,
    YearMonthAbbrDay,
    YearMonthDay,
    YearMonthNum,
    YearMonthNumDay,
    YearMonthWeekdayDay,
    YearQuarter,
    YearQuarterAbbr,
}

impl PredefinedFormat {
    /// Whether this format always uses fixed English names and
    /// separators, regardless of the active locale.
    pub fn uses_fixed_english_strings(&self) -> bool {
        matches!(self, Self::Iso8601 | Self::Rfc2822)
    }

    /// Resolves this format's pattern string through `info`.
    pub fn pattern<'i>(&self, info: &'i impl DateTimeFormatInfo) -> Cow<'i, str> {
        let pattern = match self {
            Self::Iso8601 => ISO8601_PATTERN,
            Self::Rfc2822 => RFC2822_PATTERN,

            Self::DateFull => info.date_format_full(),
            Self::DateLong => info.date_format_long(),
            Self::DateMedium => info.date_format_medium(),
            Self::DateShort => info.date_format_short(),

            Self::TimeFull => info.time_format_full(),
            Self::TimeLong => info.time_format_long(),
            Self::TimeMedium => info.time_format_medium(),
            Self::TimeShort => info.time_format_short(),

            Self::DateTimeFull => {
                return Cow::Owned(
                    info.date_time_full(info.time_format_full(), info.date_format_full()),
                );
            }
            Self::DateTimeLong => {
                return Cow::Owned(
                    info.date_time_long(info.time_format_long(), info.date_format_long()),
                );
            }
            Self::DateTimeMedium => {
                return Cow::Owned(
                    info.date_time_medium(info.time_format_medium(), info.date_format_medium()),
                );
            }
            Self::DateTimeShort => {
                return Cow::Owned(
                    info.date_time_short(info.time_format_short(), info.date_format_short()),
                );
            }

            Self::Day => info.format_day(),
            Self::HourMinute => info.format_hour12_minute(),
            Self::HourMinuteSecond => info.format_hour12_minute_second(),
            Self::Hour24Minute => info.format_hour24_minute(),
            Self::Hour24MinuteSecond => info.format_hour24_minute_second(),
            Self::MinuteSecond => info.format_minute_second(),
            Self::Month => info.format_month_full(),
            Self::MonthAbbr => info.format_month_abbrev(),
            Self::MonthAbbrDay => info.format_month_abbrev_day(),
            Self::MonthDay => info.format_month_full_day(),
            Self::MonthNumDay => info.format_month_num_day(),
            Self::MonthWeekdayDay => info.format_month_full_weekday_day(),
            Self::Year => info.format_year(),
            Self::YearMonth => info.format_year_month_full(),
            Self::YearMonthAbbr => info.format_year_month_abbrev(),
            Self::YearMonthAbbrDay => info.format_year_month_abbrev_day(),
            Self::YearMonthDay => info.format_year_month_full_day(),
            Self::YearMonthNum => info.format_year_month_num(),
            Self::YearMonthNumDay => info.format_year_month_num_day(),
            Self::YearMonthWeekdayDay => info.format_year_month_weekday_day(),
            Self::YearQuarter => info.format_year_quarter_full(),
            Self::YearQuarterAbbr => info.format_year_quarter_short(),
        };
        Cow::Borrowed(pattern)
    }
}
