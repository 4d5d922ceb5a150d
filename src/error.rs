//! Error types surfaced by pattern compilation and parsing.

use alloc::borrow::Cow;
use core::fmt;

/// The kind of failure encountered while compiling a pattern.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternErrorKind {
    /// The pattern's syntax was invalid.
    Syntax,
}

/// An error produced while compiling a pattern string.
///
/// The only rejected shape is an unterminated quoted literal; every other
/// pattern compiles and fails, if at all, at format or parse time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternError {
    kind: PatternErrorKind,
    msg: Cow<'static, str>,
}

impl PatternError {
    pub(crate) fn syntax() -> Self {
        Self {
            kind: PatternErrorKind::Syntax,
            msg: Cow::Borrowed(""),
        }
    }

    pub(crate) fn with_message(mut self, msg: impl Into<Cow<'static, str>>) -> Self {
        self.msg = msg.into();
        self
    }

    /// Returns this error's kind.
    pub fn kind(&self) -> PatternErrorKind {
        self.kind
    }

    /// Returns the error message.
    pub fn message(&self) -> &str {
        &self.msg
    }
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            PatternErrorKind::Syntax => f.write_str("invalid pattern")?,
        }
        if !self.msg.is_empty() {
            write!(f, ": {}", self.msg)?;
        }
        Ok(())
    }
}

impl core::error::Error for PatternError {}

/// The kind of failure encountered while parsing input text.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The input text did not match the pattern; nothing was consumed.
    NoMatch,
    /// The matched fields describe a calendar date or time that does not
    /// exist (strict mode only).
    InvalidDate,
    /// A value fell outside its representable range.
    Range,
}

/// An error produced while parsing input text against a compiled pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    kind: ParseErrorKind,
    msg: Cow<'static, str>,
}

impl ParseError {
    pub(crate) fn no_match() -> Self {
        Self {
            kind: ParseErrorKind::NoMatch,
            msg: Cow::Borrowed(""),
        }
    }

    pub(crate) fn invalid_date() -> Self {
        Self {
            kind: ParseErrorKind::InvalidDate,
            msg: Cow::Borrowed(""),
        }
    }

    pub(crate) fn range() -> Self {
        Self {
            kind: ParseErrorKind::Range,
            msg: Cow::Borrowed(""),
        }
    }

    pub(crate) fn with_message(mut self, msg: impl Into<Cow<'static, str>>) -> Self {
        self.msg = msg.into();
        self
    }

    /// Returns this error's kind.
    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }

    /// Returns the error message.
    pub fn message(&self) -> &str {
        &self.msg
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ParseErrorKind::NoMatch => f.write_str("input does not match pattern")?,
            ParseErrorKind::InvalidDate => f.write_str("invalid calendar date")?,
            ParseErrorKind::Range => f.write_str("value out of range")?,
        }
        if !self.msg.is_empty() {
            write!(f, ": {}", self.msg)?;
        }
        Ok(())
    }
}

impl core::error::Error for ParseError {}
