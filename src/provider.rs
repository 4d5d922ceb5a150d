//! The `TimeZoneProvider` trait.

use alloc::borrow::Cow;
use alloc::format;

use crate::instant::Instant;

/// Answers "what is the UTC offset and display name of this zone at this
/// instant". Zone rule data is supplied by implementations, never
/// computed by the engine.
pub trait TimeZoneProvider {
    /// UTC offset in minutes east of UTC at `instant`.
    fn offset_minutes(&self, instant: &Instant) -> i32;

    /// Short display name at `instant`, e.g. `PDT`.
    fn short_name(&self, instant: &Instant) -> Cow<'_, str>;

    /// Long display name at `instant`, e.g. `Pacific Daylight Time`.
    fn long_name(&self, instant: &Instant) -> Cow<'_, str>;

    /// Zone identifier, e.g. `America/Los_Angeles`.
    fn id(&self) -> Cow<'_, str>;

    /// Whether daylight adjustment applies at `instant`.
    fn is_daylight(&self, instant: &Instant) -> bool;
}

/// A zone with a fixed offset and no daylight rules.
///
/// Display names take the `UTC-7` form and the identifier the POSIX
/// `Etc/GMT+7` form, whose sign runs opposite to the offset.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FixedOffsetZone {
    minutes: i32,
}

/// The UTC zone.
pub const UTC: FixedOffsetZone = FixedOffsetZone::new(0);

impl FixedOffsetZone {
    /// Creates a zone `minutes` east of UTC.
    pub const fn new(minutes: i32) -> Self {
        Self { minutes }
    }

    /// The fixed offset in minutes east of UTC.
    pub const fn offset(&self) -> i32 {
        self.minutes
    }

    fn display_name(&self) -> Cow<'static, str> {
        if self.minutes == 0 {
            return Cow::Borrowed("UTC");
        }
        let sign = if self.minutes < 0 { '-' } else { '+' };
        let magnitude = self.minutes.unsigned_abs();
        if magnitude % 60 == 0 {
            Cow::Owned(format!("UTC{sign}{}", magnitude / 60))
        } else {
            Cow::Owned(format!("UTC{sign}{}:{:02}", magnitude / 60, magnitude % 60))
        }
    }
}

impl TimeZoneProvider for FixedOffsetZone {
    fn offset_minutes(&self, _instant: &Instant) -> i32 {
        self.minutes
    }

    fn short_name(&self, _instant: &Instant) -> Cow<'_, str> {
        self.display_name()
    }

    fn long_name(&self, _instant: &Instant) -> Cow<'_, str> {
        self.display_name()
    }

    fn id(&self) -> Cow<'_, str> {
        if self.minutes % 60 == 0 {
            // POSIX-style identifiers carry the inverted sign.
            let sign = if self.minutes > 0 { '-' } else { '+' };
            Cow::Owned(format!("Etc/GMT{sign}{}", self.minutes.unsigned_abs() / 60))
        } else {
            self.display_name()
        }
    }

    fn is_daylight(&self, _instant: &Instant) -> bool {
        false
    }
}
