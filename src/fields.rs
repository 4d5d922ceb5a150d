//! The catalog of recognized pattern letters.

/// A date/time field selected by a pattern letter.
///
/// The letter's repeat count further selects the rendering style: text
/// fields switch between short, full and narrow names, numeric fields
/// zero-pad to the count, and the month fields are numeric below a count
/// of 3 and named at 3 or more.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Field {
    /// `G` - era designator.
    Era,
    /// `y` - year; a count of exactly 2 renders and parses the last two
    /// digits.
    Year,
    /// `M` - month in year.
    Month,
    /// `L` - standalone month in year.
    StandaloneMonth,
    /// `Q` - quarter.
    Quarter,
    /// `d` - day in month.
    DayOfMonth,
    /// `E` - day of week.
    DayOfWeek,
    /// `c` - standalone day of week.
    StandaloneDayOfWeek,
    /// `a` - am/pm marker.
    AmPm,
    /// `h` - hour in am/pm (1..=12).
    Hour1To12,
    /// `H` - hour in day (0..=23).
    Hour0To23,
    /// `K` - hour in am/pm (0..=11).
    Hour0To11,
    /// `k` - hour in day (1..=24).
    Hour1To24,
    /// `m` - minute in hour.
    Minute,
    /// `s` - second in minute.
    Second,
    /// `S` - fractional second, left-justified.
    FractionalSecond,
    /// `z` - time zone display name.
    ZoneName,
    /// `v` - time zone id.
    ZoneId,
    /// `Z` - time zone offset (RFC-822, ISO-8601 or GMT form by count).
    ZoneRfc,
}

impl Field {
    /// Maps a pattern letter to its field. Unrecognized letters are
    /// literal text.
    pub(crate) fn from_letter(ch: char) -> Option<Self> {
        Some(match ch {
            'G' => Self::Era,
            'y' => Self::Year,
            'M' => Self::Month,
            'L' => Self::StandaloneMonth,
            'Q' => Self::Quarter,
            'd' => Self::DayOfMonth,
            'E' => Self::DayOfWeek,
            'c' => Self::StandaloneDayOfWeek,
            'a' => Self::AmPm,
            'h' => Self::Hour1To12,
            'H' => Self::Hour0To23,
            'K' => Self::Hour0To11,
            'k' => Self::Hour1To24,
            'm' => Self::Minute,
            's' => Self::Second,
            'S' => Self::FractionalSecond,
            'z' => Self::ZoneName,
            'v' => Self::ZoneId,
            'Z' => Self::ZoneRfc,
            _ => return None,
        })
    }

    /// Whether the field renders and parses as a number at this count.
    pub(crate) fn is_numeric(&self, count: usize) -> bool {
        match self {
            // Months switch to names at a count of 3.
            Self::Month | Self::StandaloneMonth => count < 3,
            Self::Year
            | Self::DayOfMonth
            | Self::Hour1To12
            | Self::Hour0To23
            | Self::Hour0To11
            | Self::Hour1To24
            | Self::Minute
            | Self::Second
            | Self::FractionalSecond => true,
            _ => false,
        }
    }
}
