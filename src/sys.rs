//! System clock access for "now" defaults.

use web_time::{SystemTime, UNIX_EPOCH};

use crate::instant::Instant;
use crate::iso::{IsoDate, IsoDateTime};

/// The current system time. Clocks set before the Unix epoch collapse to
/// the epoch.
pub fn now() -> Instant {
    let ms = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|duration| duration.as_millis() as i64)
        .unwrap_or(0);
    Instant::from_epoch_milliseconds(ms)
}

/// Today's date at UTC; the default reference for parse-time field
/// defaults and the two-digit-year window.
pub fn today() -> IsoDate {
    IsoDateTime::from_instant(now(), 0).date
}
