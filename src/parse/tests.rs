use super::{run_parse, ParseOptions};
use crate::error::ParseErrorKind;
use crate::info::DefaultDateTimeFormatInfo;
use crate::instant::Instant;
use crate::iso::{IsoDate, IsoDateTime, IsoTime};
use crate::pattern::CompiledPattern;

const INFO: DefaultDateTimeFormatInfo = DefaultDateTimeFormatInfo;
const REF_1997: IsoDate = IsoDate::new_unchecked(1997, 1, 1);

fn options() -> ParseOptions {
    ParseOptions {
        reference: Some(REF_1997),
        ..ParseOptions::default()
    }
}

fn parse(pattern: &str, text: &str) -> Result<(Instant, usize), crate::error::ParseError> {
    let compiled = CompiledPattern::compile(pattern).unwrap();
    compiled.parse(text, &INFO, options())
}

fn fields_of(instant: Instant) -> IsoDateTime {
    IsoDateTime::from_instant(instant, 0)
}

fn at(year: i32, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Instant {
    IsoDateTime {
        date: IsoDate::new_unchecked(year, month, day),
        time: IsoTime {
            hour,
            minute,
            second,
            millisecond: 0,
        },
    }
    .as_instant(0)
}

#[test]
fn abutting_backtrack() {
    // The leftmost field of a run flexes while the rest keep their
    // declared widths.
    let (instant, consumed) = parse("HHmmss", "123456").unwrap();
    let time = fields_of(instant).time;
    assert_eq!((time.hour, time.minute, time.second), (12, 34, 56));
    assert_eq!(consumed, 6);

    let (instant, consumed) = parse("HHmmss", "12345").unwrap();
    let time = fields_of(instant).time;
    assert_eq!((time.hour, time.minute, time.second), (1, 23, 45));
    assert_eq!(consumed, 5);

    let err = parse("HHmmss", "1234").unwrap_err();
    assert_eq!(err.kind(), ParseErrorKind::NoMatch);
}

#[test]
fn abutting_year_run() {
    let (instant, _) = parse("yyyyMMdd", "19960710").unwrap();
    let date = fields_of(instant).date;
    assert_eq!((date.year, date.month, date.day), (1996, 7, 10));

    // Seven digits force the year down to three.
    let (instant, _) = parse("yyyyMMdd", "9960710").unwrap();
    let date = fields_of(instant).date;
    assert_eq!((date.year, date.month, date.day), (996, 7, 10));
}

#[test]
fn two_digit_year_window() {
    let (instant, _) = parse("MM/dd/yy", "01/11/12").unwrap();
    assert_eq!(fields_of(instant).date, IsoDate::new_unchecked(2012, 1, 11));

    let (instant, _) = parse("MM/dd/yy", "05/04/64").unwrap();
    assert_eq!(fields_of(instant).date, IsoDate::new_unchecked(1964, 5, 4));
}

#[test]
fn two_digit_year_needs_exactly_two_digits() {
    // More digits than two under a yy pattern reads literally.
    let (instant, _) = parse("MM/dd/yy", "01/11/2012").unwrap();
    assert_eq!(fields_of(instant).date.year, 2012);

    // Four y's read any digit run literally.
    let (instant, _) = parse("MM/dd/yyyy", "01/11/12").unwrap();
    assert_eq!(fields_of(instant).date.year, 12);
}

#[test]
fn backtracked_year_width_clears_two_digit_reading() {
    // The first pass reads "91" as a two-digit year and then runs out of
    // input for the day; the retry reads "9", which must not inherit the
    // earlier pass's window resolution.
    let (instant, _) = parse("yyMMdd", "91231").unwrap();
    assert_eq!(fields_of(instant).date, IsoDate::new_unchecked(9, 12, 31));
}

#[test]
fn ambiguous_boundary_year_is_flagged() {
    let compiled = CompiledPattern::compile("yy").unwrap();
    let (record, _) = run_parse(compiled.parts(), "17", 0, &INFO).unwrap();
    let mut record = record;
    assert!(record.two_digit_year);
    record.resolve_two_digit_year(1997);
    assert!(record.ambiguous_year);
    assert_eq!(record.year, Some(1917));
}

#[test]
fn signed_years_bypass_the_window() {
    let (instant, _) = parse("MM/dd/yy", "01/11/+12").unwrap();
    assert_eq!(fields_of(instant).date.year, 12);

    let (instant, _) = parse("yy-MM-dd", "-1-03-04").unwrap();
    // Year -1 with no era.
    assert_eq!(fields_of(instant).date.year, -1);

    assert!(parse("yyyy-MM-dd", "+-03-04").is_err());
}

#[test]
fn named_months_and_weekdays() {
    let (instant, _) = parse("EEE, MMM d, yyyy", "Wed, Jul 10, 1996").unwrap();
    assert_eq!(fields_of(instant).date, IsoDate::new_unchecked(1996, 7, 10));

    let (instant, _) = parse("EEEE, MMMM d, yyyy", "Wednesday, July 10, 1996").unwrap();
    assert_eq!(fields_of(instant).date, IsoDate::new_unchecked(1996, 7, 10));

    // Name matching is case-insensitive and tries long names first.
    let (instant, _) = parse("MMM d yyyy", "JULY 10 1996").unwrap();
    assert_eq!(fields_of(instant).date, IsoDate::new_unchecked(1996, 7, 10));
}

#[test]
fn numeric_month_accepts_names() {
    // A numeric month pattern still recognizes symbol input.
    let (instant, _) = parse("M/d/yyyy", "July/10/1996").unwrap();
    assert_eq!(fields_of(instant).date.month, 7);
}

#[test]
fn unmatched_names_abort() {
    assert!(parse("MMM d yyyy", "Juy 10 1996").is_err());
    assert!(parse("h:mm a", "12:30 XX").is_err());
    assert!(parse("G yyyy", "XX 1996").is_err());
}

#[test]
fn eras() {
    let (instant, _) = parse("G yyyy-MM-dd", "AD 1996-07-10").unwrap();
    assert_eq!(fields_of(instant).date.year, 1996);

    let (instant, _) = parse("G yyyy-MM-dd", "BC 1-01-01").unwrap();
    assert_eq!(fields_of(instant).date.year, 0);

    let (instant, _) = parse("G yyyy-MM-dd", "Before Christ 5-01-01").unwrap();
    assert_eq!(fields_of(instant).date.year, -4);
}

#[test]
fn am_pm_resolution() {
    let (instant, _) = parse("h:mm a", "7:30 PM").unwrap();
    assert_eq!(fields_of(instant).time.hour, 19);

    let (instant, _) = parse("h:mm a", "12:30 AM").unwrap();
    assert_eq!(fields_of(instant).time.hour, 0);

    let (instant, _) = parse("h:mm a", "12:30 pm").unwrap();
    assert_eq!(fields_of(instant).time.hour, 12);
}

#[test]
fn hour_bases() {
    let (instant, _) = parse("kk:mm", "24:00").unwrap();
    assert_eq!(fields_of(instant).time.hour, 0);

    let (instant, _) = parse("KK:mm a", "00:30 PM").unwrap();
    assert_eq!(fields_of(instant).time.hour, 12);
}

#[test]
fn fractional_seconds_left_justify() {
    let (instant, _) = parse("ss.S", "05.4").unwrap();
    assert_eq!(fields_of(instant).time.millisecond, 400);

    let (instant, _) = parse("ss.SSS", "05.004").unwrap();
    assert_eq!(fields_of(instant).time.millisecond, 4);

    // Extra digits round to milliseconds.
    let (instant, _) = parse("ss.SSS", "05.45678").unwrap();
    assert_eq!(fields_of(instant).time.millisecond, 457);
}

#[test]
fn literal_and_whitespace_matching() {
    // A single pattern space spans any amount of input whitespace.
    let (instant, _) = parse("yyyy MM dd", "1996 \t 07  10").unwrap();
    assert_eq!(fields_of(instant).date, IsoDate::new_unchecked(1996, 7, 10));

    // Literals must match exactly.
    assert!(parse("yyyy-MM-dd", "1996/07/10").is_err());

    // Leading whitespace before a field is skipped.
    let (instant, consumed) = parse("yyyy", "  1996").unwrap();
    assert_eq!(fields_of(instant).date.year, 1996);
    assert_eq!(consumed, 6);
}

#[test]
fn partial_consumption_reports_progress() {
    let compiled = CompiledPattern::compile("yyyy-MM-dd").unwrap();
    let (_, consumed) = compiled
        .parse("1996-07-10 rest", &INFO, options())
        .unwrap();
    assert_eq!(consumed, 10);

    // And from a non-zero start offset.
    let (instant, consumed) = compiled
        .parse_from("date: 1996-07-10", 6, &INFO, options())
        .unwrap();
    assert_eq!(consumed, 10);
    assert_eq!(fields_of(instant).date.year, 1996);
}

#[test]
fn defaults_fill_unset_fields() {
    // Missing date fields come from the reference date.
    let (instant, _) = parse("HH:mm", "09:30").unwrap();
    let fields = fields_of(instant);
    assert_eq!(fields.date, REF_1997);
    assert_eq!((fields.time.hour, fields.time.minute), (9, 30));

    // A month with no day clamps to the month's end.
    let (instant, _) = parse("yyyy-MM", "2024-02").unwrap();
    assert_eq!(fields_of(instant).date.day, 29);
}

#[test]
fn strict_vs_lenient_calendar_overflow() {
    let (instant, _) = parse("yyyy-MM-dd", "2024-02-30").unwrap();
    assert_eq!(fields_of(instant).date, IsoDate::new_unchecked(2024, 3, 1));

    let (instant, _) = parse("yyyy-MM-dd", "2023-02-30").unwrap();
    assert_eq!(fields_of(instant).date, IsoDate::new_unchecked(2023, 3, 2));

    let compiled = CompiledPattern::compile("yyyy-MM-dd").unwrap();
    let strict = ParseOptions {
        strict: true,
        reference: Some(REF_1997),
        ..ParseOptions::default()
    };
    let err = compiled.parse("2024-02-30", &INFO, strict).unwrap_err();
    assert_eq!(err.kind(), ParseErrorKind::InvalidDate);
    assert!(compiled.parse("2024-02-29", &INFO, strict).is_ok());
}

#[test]
fn zone_offsets() {
    let expected = at(2001, 9, 9, 1, 46, 40);

    let (instant, _) = parse("yyyy-MM-dd HH:mm:ss Z", "2001-09-09 07:16:40 +0530").unwrap();
    assert_eq!(instant, expected);

    let (instant, _) = parse("yyyy-MM-dd HH:mm:ss ZZZ", "2001-09-09 07:16:40 +05:30").unwrap();
    assert_eq!(instant, expected);

    let (instant, _) = parse("yyyy-MM-dd HH:mm:ss ZZZZ", "2001-09-09 07:16:40 GMT+05:30").unwrap();
    assert_eq!(instant, expected);

    let (instant, _) = parse("yyyy-MM-dd HH:mm:ss Z", "2001-09-09 01:46:40 Z").unwrap();
    assert_eq!(instant, expected);

    let (instant, _) = parse("yyyy-MM-dd HH:mm:ss zzzz", "2001-08-08 21:46:40 UTC-4").unwrap();
    assert_eq!(instant, at(2001, 8, 9, 1, 46, 40));
}

#[test]
fn default_offset_applies_without_zone_text() {
    let compiled = CompiledPattern::compile("yyyy-MM-dd HH:mm:ss").unwrap();
    let east = ParseOptions {
        reference: Some(REF_1997),
        default_offset: 330,
        ..ParseOptions::default()
    };
    let (instant, _) = compiled
        .parse("2001-09-09 07:16:40", &INFO, east)
        .unwrap();
    assert_eq!(instant, at(2001, 9, 9, 1, 46, 40));
}

#[test]
fn quarter_patterns_do_not_parse() {
    assert!(parse("QQQQ y", "3rd quarter 1996").is_err());
}

#[test]
fn round_trips() {
    // Each pattern is exercised at its own precision: a formatted value
    // parses back to the original instant whenever the pattern carries
    // every non-zero field.
    let cases: &[(&str, &[Instant])] = &[
        (
            "yyyy-MM-dd'T'HH:mm:ss.SSSZZZ",
            &[
                at(1996, 7, 10, 15, 8, 56),
                at(1970, 1, 1, 0, 0, 0),
                Instant::from_epoch_milliseconds(1_000_000_000_123),
                Instant::from_epoch_milliseconds(-86_400_000),
            ],
        ),
        (
            "EEE, d MMM yyyy HH:mm:ss Z",
            &[at(1996, 7, 10, 15, 8, 56), at(2001, 9, 9, 1, 46, 40)],
        ),
        (
            "yyyy.MM.dd G 'at' HH:mm:ss",
            &[at(1996, 7, 10, 15, 8, 56), Instant::from_epoch_milliseconds(-86_400_000)],
        ),
        (
            "M/d/y H:m:s",
            &[at(1996, 7, 10, 15, 8, 56), at(1970, 1, 1, 0, 0, 0)],
        ),
        (
            "hh 'o''clock' a",
            &[at(1996, 7, 10, 15, 0, 0), at(1996, 7, 10, 3, 0, 0)],
        ),
    ];
    for (pattern, instants) in cases {
        let compiled = CompiledPattern::compile(pattern).unwrap();
        for &instant in *instants {
            let text = compiled.format(instant, &INFO);
            let reference = IsoDateTime::from_instant(instant, 0).date;
            let opts = ParseOptions {
                reference: Some(reference),
                ..ParseOptions::default()
            };
            let (parsed, consumed) = compiled.parse(&text, &INFO, opts).unwrap();
            assert_eq!(consumed, text.len(), "pattern {pattern:?} on {text:?}");
            assert_eq!(parsed, instant, "pattern {pattern:?} on {text:?}");
        }
    }
}
