//! The `datetime_pattern` crate is a CLDR-pattern-driven date/time
//! formatting and parsing engine.
//!
//! A pattern string such as `"yyyy-MM-dd'T'HH:mm:ss.SSSZZZ"` is compiled
//! once into a [`CompiledPattern`], an immutable field program that both
//! renders an [`Instant`] into text and recovers an instant from text.
//!
//! ```rust
//! use datetime_pattern::{CompiledPattern, DefaultDateTimeFormatInfo, Instant, ParseOptions};
//!
//! let pattern = CompiledPattern::compile("yyyy-MM-dd HH:mm:ss").unwrap();
//! let info = DefaultDateTimeFormatInfo;
//!
//! let instant = Instant::from_epoch_milliseconds(1_000_000_000_000);
//! let text = pattern.format(instant, &info);
//! assert_eq!(text, "2001-09-09 01:46:40");
//!
//! let (parsed, consumed) = pattern.parse(&text, &info, ParseOptions::default()).unwrap();
//! assert_eq!(parsed, instant);
//! assert_eq!(consumed, text.len());
//! ```
//!
//! Localized names are consumed through the read-only
//! [`DateTimeFormatInfo`] trait and timezone offsets/names through
//! [`TimeZoneProvider`]; the engine itself carries only the fixed English
//! symbols used by the locale-independent wire formats.
#![no_std]
#![cfg_attr(not(test), forbid(clippy::unwrap_used))]
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod error;
pub mod fields;
pub mod info;
pub mod iso;
pub mod pattern;
pub mod provider;

mod format;
mod instant;
mod offset;
mod parse;
mod predefined;
mod record;
mod utils;

#[cfg(feature = "std")]
mod cache;

#[cfg(feature = "sys")]
pub mod sys;

use alloc::string::String;
use core::cmp::Ordering;

#[doc(inline)]
pub use error::{ParseError, PatternError};
pub use info::{DateTimeFormatInfo, DefaultDateTimeFormatInfo};
pub use instant::Instant;
pub use parse::ParseOptions;
pub use pattern::CompiledPattern;
pub use predefined::{PredefinedFormat, ISO8601_PATTERN, RFC2822_PATTERN};
pub use provider::{FixedOffsetZone, TimeZoneProvider, UTC};

#[cfg(feature = "std")]
pub use cache::PatternCache;

/// Milliseconds per day constant: 8.64e+7
pub const MS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// A general Sign type.
#[repr(i8)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Sign {
    #[default]
    Positive = 1,
    Zero = 0,
    Negative = -1,
}

impl From<i8> for Sign {
    fn from(value: i8) -> Self {
        match value.cmp(&0) {
            Ordering::Greater => Self::Positive,
            Ordering::Equal => Self::Zero,
            Ordering::Less => Self::Negative,
        }
    }
}

/// A compiled pattern paired with the symbols it formats and parses with.
///
/// This is the convenience surface over [`CompiledPattern`]: the
/// string-level `parse` methods require the whole input to be consumed,
/// mirroring the contract of the predefined wire formats.
#[derive(Debug, Clone)]
pub struct DateTimeFormat<I = DefaultDateTimeFormatInfo> {
    compiled: CompiledPattern,
    info: I,
}

impl DateTimeFormat<DefaultDateTimeFormatInfo> {
    /// Compiles `pattern` against the default English symbols.
    pub fn new(pattern: &str) -> Result<Self, PatternError> {
        Self::with_info(pattern, DefaultDateTimeFormatInfo)
    }

    /// Returns the format for a predefined pattern.
    ///
    /// The two wire formats ([`PredefinedFormat::Rfc2822`] and
    /// [`PredefinedFormat::Iso8601`]) always use fixed English names, as
    /// their contracts require.
    pub fn predefined(format: PredefinedFormat) -> Self {
        match Self::new(&format.pattern(&DefaultDateTimeFormatInfo)) {
            Ok(fmt) => fmt,
            Err(_) => unreachable!("stock patterns are well formed"),
        }
    }
}

impl<I: DateTimeFormatInfo> DateTimeFormat<I> {
    /// Compiles `pattern` against user-supplied symbols.
    pub fn with_info(pattern: &str, info: I) -> Result<Self, PatternError> {
        Ok(Self {
            compiled: CompiledPattern::compile(pattern)?,
            info,
        })
    }

    /// The original pattern string.
    pub fn pattern(&self) -> &str {
        self.compiled.pattern()
    }

    /// The compiled pattern.
    pub fn compiled(&self) -> &CompiledPattern {
        &self.compiled
    }

    /// The symbols this format was built with.
    pub fn info(&self) -> &I {
        &self.info
    }

    /// Formats `instant` at UTC.
    pub fn format(&self, instant: Instant) -> String {
        self.compiled.format(instant, &self.info)
    }

    /// Formats `instant` in the supplied zone.
    pub fn format_with_zone(&self, instant: Instant, zone: &impl TimeZoneProvider) -> String {
        self.compiled.format_with_zone(instant, zone, &self.info)
    }

    /// Parses the whole of `text` leniently; calendar overflow wraps
    /// forward (February 30 becomes March 1 or 2).
    pub fn parse(&self, text: &str) -> Result<Instant, ParseError> {
        self.parse_with_options(text, ParseOptions::default())
    }

    /// Parses the whole of `text` strictly; calendrically impossible
    /// field combinations are rejected.
    pub fn parse_strict(&self, text: &str) -> Result<Instant, ParseError> {
        self.parse_with_options(text, ParseOptions::strict())
    }

    /// Parses the whole of `text` with explicit options.
    pub fn parse_with_options(
        &self,
        text: &str,
        options: ParseOptions,
    ) -> Result<Instant, ParseError> {
        if text.is_empty() {
            return Err(ParseError::no_match().with_message("empty input"));
        }
        let (instant, consumed) = self.compiled.parse(text, &self.info, options)?;
        if consumed < text.len() {
            return Err(ParseError::no_match().with_message("input not fully consumed"));
        }
        Ok(instant)
    }
}
