//! Pattern compilation.
//!
//! A pattern string is scanned once into an ordered sequence of
//! [`PatternPart`] values, resolving quoting and merging letter runs; a
//! second pass marks where runs of abutting numeric fields begin, which
//! the parser's backtracking depends on.

use alloc::string::String;
use alloc::vec::Vec;

use crate::error::PatternError;
use crate::fields::Field;

/// One element of a compiled pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternPart {
    /// Verbatim text; quoting has already been resolved.
    Literal(String),
    /// A run of spaces from the pattern, kept verbatim for formatting.
    /// When parsing, any amount of input whitespace satisfies it.
    Whitespace(String),
    /// A pattern letter with its repeat count. `abut_start` marks the
    /// first field of a maximal run of adjacent numeric fields.
    Field {
        field: Field,
        count: usize,
        abut_start: bool,
    },
}

impl PatternPart {
    pub(crate) fn is_numeric(&self) -> bool {
        matches!(self, Self::Field { field, count, .. } if field.is_numeric(*count))
    }
}

/// A compiled pattern: the ordered part list plus the original pattern
/// string. Immutable, and safely shared by any number of concurrent
/// formatting and parsing calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledPattern {
    pattern: String,
    parts: Vec<PatternPart>,
}

impl CompiledPattern {
    /// Compiles a pattern string.
    ///
    /// The only rejected shape is an unterminated quoted literal. Letters
    /// outside the recognized alphabet compile to literal text, so they
    /// fail at parse time unless the input carries them verbatim.
    pub fn compile(pattern: &str) -> Result<Self, PatternError> {
        let mut parts = parse_pattern(pattern)?;
        identify_abut_start(&mut parts);
        Ok(Self {
            pattern: String::from(pattern),
            parts,
        })
    }

    /// The original pattern string.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The compiled parts, in pattern order.
    pub fn parts(&self) -> &[PatternPart] {
        &self.parts
    }
}

fn parse_pattern(pattern: &str) -> Result<Vec<PatternPart>, PatternError> {
    let chars: Vec<char> = pattern.chars().collect();
    let mut parts = Vec::new();
    let mut buf = String::new();
    let mut in_quote = false;
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];

        // A space terminates the pending literal, quoted or not, and
        // extends into one part holding the whole run.
        if ch == ' ' {
            flush_literal(&mut parts, &mut buf);
            let start = i;
            while i + 1 < chars.len() && chars[i + 1] == ' ' {
                i += 1;
            }
            parts.push(PatternPart::Whitespace(" ".repeat(i - start + 1)));
            i += 1;
            continue;
        }

        if in_quote {
            if ch == '\'' {
                if chars.get(i + 1) == Some(&'\'') {
                    // A doubled quote inside a quoted section is one
                    // literal quote.
                    buf.push('\'');
                    i += 2;
                } else {
                    in_quote = false;
                    i += 1;
                }
            } else {
                buf.push(ch);
                i += 1;
            }
            continue;
        }

        if let Some(field) = Field::from_letter(ch) {
            flush_literal(&mut parts, &mut buf);
            let mut count = 1;
            while chars.get(i + count) == Some(&ch) {
                count += 1;
            }
            parts.push(PatternPart::Field {
                field,
                count,
                abut_start: false,
            });
            i += count;
            continue;
        }

        if ch == '\'' {
            if chars.get(i + 1) == Some(&'\'') {
                buf.push('\'');
                i += 2;
            } else {
                in_quote = true;
                i += 1;
            }
            continue;
        }

        buf.push(ch);
        i += 1;
    }

    if in_quote {
        return Err(PatternError::syntax().with_message("Missing trailing quote"));
    }

    flush_literal(&mut parts, &mut buf);
    Ok(parts)
}

fn flush_literal(parts: &mut Vec<PatternPart>, buf: &mut String) {
    if !buf.is_empty() {
        parts.push(PatternPart::Literal(core::mem::take(buf)));
    }
}

/// Marks the first part of every maximal run of two or more adjacent
/// numeric fields. Take the pattern `HHmmss` as an example: the parser
/// tries 2/2/2 input characters, then 1/2/2; only the leftmost field's
/// width shrinks, so it alone carries the mark.
fn identify_abut_start(parts: &mut [PatternPart]) {
    let mut abut = false;
    for i in 0..parts.len() {
        if parts[i].is_numeric() {
            if !abut && parts.get(i + 1).is_some_and(PatternPart::is_numeric) {
                abut = true;
                if let PatternPart::Field { abut_start, .. } = &mut parts[i] {
                    *abut_start = true;
                }
            }
        } else {
            abut = false;
        }
    }
}
