//! Localized names and default patterns consumed by the engine.

use alloc::format;
use alloc::string::String;

/// Read-only supplier of localized date/time symbols and default
/// patterns.
///
/// The engine treats an implementation as a plain value and never
/// mutates it. Name arrays are indexed the way the fields produce them:
/// months from January, weekdays from Sunday, eras as before/after, and
/// am before pm.
///
/// The standalone accessors and every default-pattern accessor have
/// English defaults, so a minimal locale only supplies its name arrays.
pub trait DateTimeFormatInfo {
    fn months_full(&self) -> [&str; 12];
    fn months_short(&self) -> [&str; 12];
    fn months_narrow(&self) -> [&str; 12];

    fn months_full_standalone(&self) -> [&str; 12] {
        self.months_full()
    }
    fn months_short_standalone(&self) -> [&str; 12] {
        self.months_short()
    }
    fn months_narrow_standalone(&self) -> [&str; 12] {
        self.months_narrow()
    }

    fn weekdays_full(&self) -> [&str; 7];
    fn weekdays_short(&self) -> [&str; 7];
    fn weekdays_narrow(&self) -> [&str; 7];

    fn weekdays_full_standalone(&self) -> [&str; 7] {
        self.weekdays_full()
    }
    fn weekdays_short_standalone(&self) -> [&str; 7] {
        self.weekdays_short()
    }
    fn weekdays_narrow_standalone(&self) -> [&str; 7] {
        self.weekdays_narrow()
    }

    fn eras_full(&self) -> [&str; 2];
    fn eras_short(&self) -> [&str; 2];

    fn am_pms(&self) -> [&str; 2];

    fn quarters_full(&self) -> [&str; 4];
    fn quarters_short(&self) -> [&str; 4];

    // Default pattern accessors, used by the predefined formats.

    fn date_format_full(&self) -> &str {
        "EEEE, MMMM d, y"
    }
    fn date_format_long(&self) -> &str {
        "MMMM d, y"
    }
    fn date_format_medium(&self) -> &str {
        "MMM d, y"
    }
    fn date_format_short(&self) -> &str {
        "M/d/yy"
    }

    fn time_format_full(&self) -> &str {
        "h:mm:ss a zzzz"
    }
    fn time_format_long(&self) -> &str {
        "h:mm:ss a z"
    }
    fn time_format_medium(&self) -> &str {
        "h:mm:ss a"
    }
    fn time_format_short(&self) -> &str {
        "h:mm a"
    }

    fn date_time_full(&self, time_pattern: &str, date_pattern: &str) -> String {
        format!("{date_pattern} {time_pattern}")
    }
    fn date_time_long(&self, time_pattern: &str, date_pattern: &str) -> String {
        format!("{date_pattern} {time_pattern}")
    }
    fn date_time_medium(&self, time_pattern: &str, date_pattern: &str) -> String {
        format!("{date_pattern} {time_pattern}")
    }
    fn date_time_short(&self, time_pattern: &str, date_pattern: &str) -> String {
        format!("{date_pattern} {time_pattern}")
    }

    fn format_day(&self) -> &str {
        "d"
    }
    fn format_hour12_minute(&self) -> &str {
        "h:mm a"
    }
    fn format_hour12_minute_second(&self) -> &str {
        "h:mm:ss a"
    }
    fn format_hour24_minute(&self) -> &str {
        "HH:mm"
    }
    fn format_hour24_minute_second(&self) -> &str {
        "HH:mm:ss"
    }
    fn format_minute_second(&self) -> &str {
        "mm:ss"
    }
    fn format_month_abbrev(&self) -> &str {
        "LLL"
    }
    fn format_month_abbrev_day(&self) -> &str {
        "MMM d"
    }
    fn format_month_full(&self) -> &str {
        "LLLL"
    }
    fn format_month_full_day(&self) -> &str {
        "MMMM d"
    }
    fn format_month_full_weekday_day(&self) -> &str {
        "EEEE, MMMM d"
    }
    fn format_month_num_day(&self) -> &str {
        "M/d"
    }
    fn format_year(&self) -> &str {
        "y"
    }
    fn format_year_month_abbrev(&self) -> &str {
        "MMM y"
    }
    fn format_year_month_abbrev_day(&self) -> &str {
        "MMM d, y"
    }
    fn format_year_month_full(&self) -> &str {
        "MMMM y"
    }
    fn format_year_month_full_day(&self) -> &str {
        "MMMM d, y"
    }
    fn format_year_month_num(&self) -> &str {
        "M/y"
    }
    fn format_year_month_num_day(&self) -> &str {
        "M/d/y"
    }
    fn format_year_month_weekday_day(&self) -> &str {
        "EEE, MMM d, y"
    }
    fn format_year_quarter_full(&self) -> &str {
        "QQQQ y"
    }
    fn format_year_quarter_short(&self) -> &str {
        "Q y"
    }
}

/// The fixed English symbols. The locale-independent wire formats always
/// format through these, whatever locale the surrounding application
/// carries.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DefaultDateTimeFormatInfo;

impl DateTimeFormatInfo for DefaultDateTimeFormatInfo {
    fn months_full(&self) -> [&str; 12] {
        [
            "January",
            "February",
            "March",
            "April",
            "May",
            "June",
            "July",
            "August",
            "September",
            "October",
            "November",
            "December",
        ]
    }

    fn months_short(&self) -> [&str; 12] {
        [
            "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
        ]
    }

    fn months_narrow(&self) -> [&str; 12] {
        ["J", "F", "M", "A", "M", "J", "J", "A", "S", "O", "N", "D"]
    }

    fn weekdays_full(&self) -> [&str; 7] {
        [
            "Sunday",
            "Monday",
            "Tuesday",
            "Wednesday",
            "Thursday",
            "Friday",
            "Saturday",
        ]
    }

    fn weekdays_short(&self) -> [&str; 7] {
        ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]
    }

    fn weekdays_narrow(&self) -> [&str; 7] {
        ["S", "M", "T", "W", "T", "F", "S"]
    }

    fn eras_full(&self) -> [&str; 2] {
        ["Before Christ", "Anno Domini"]
    }

    fn eras_short(&self) -> [&str; 2] {
        ["BC", "AD"]
    }

    fn am_pms(&self) -> [&str; 2] {
        ["AM", "PM"]
    }

    fn quarters_full(&self) -> [&str; 4] {
        ["1st quarter", "2nd quarter", "3rd quarter", "4th quarter"]
    }

    fn quarters_short(&self) -> [&str; 4] {
        ["Q1", "Q2", "Q3", "Q4"]
    }
}
