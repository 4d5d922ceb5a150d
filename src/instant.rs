//! The epoch-millisecond `Instant` type.

/// An absolute point in time, measured in milliseconds since the Unix
/// epoch and independent of any time zone.
///
/// Wall-clock fields are derived from an `Instant` only in combination
/// with an explicit UTC offset; see [`crate::iso::IsoDateTime`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Instant(pub(crate) i64);

impl Instant {
    /// Creates an `Instant` from milliseconds since the Unix epoch.
    pub const fn from_epoch_milliseconds(ms: i64) -> Self {
        Self(ms)
    }

    /// Returns the milliseconds since the Unix epoch.
    pub const fn epoch_milliseconds(&self) -> i64 {
        self.0
    }
}

impl From<i64> for Instant {
    fn from(value: i64) -> Self {
        Self(value)
    }
}
