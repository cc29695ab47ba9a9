// crates/resource-l10n-core/src/runtime/substitution.rs
// ============================================================================
// Module: Placeholder Substitution
// Description: Strict `{name}` substitution with up-front validation.
// Purpose: Replace named placeholders without ever returning partial output.
// Dependencies: crate::core, crate::runtime::error
// ============================================================================

//! ## Overview
//! Placeholders are a name wrapped in braces: `{name}`. Names are
//! case-sensitive and cannot contain braces; there is no escaping. A `{`
//! that does not open a placeholder is copied verbatim.
//!
//! ## Invariants
//! - Every supplied key must occur as a placeholder, checked before any
//!   output is produced.
//! - Every occurrence of a supplied key is replaced; other placeholders are
//!   left untouched.
//! - Substituted values are never rescanned, so a value containing `{x}`
//!   is inserted literally.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;

use crate::core::ArgumentBag;
use crate::core::CultureId;
use crate::runtime::error::ResolveError;

// ============================================================================
// SECTION: Placeholder Scanning
// ============================================================================

/// A placeholder occurrence inside a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder<'a> {
    /// Byte offset of the opening brace.
    pub start: usize,
    /// Byte offset one past the closing brace.
    pub end: usize,
    /// Name between the braces.
    pub name: &'a str,
}

/// Iterator over placeholders in a template, left to right.
#[derive(Debug, Clone)]
pub struct Placeholders<'a> {
    /// Template being scanned.
    text: &'a str,
    /// Byte offset where scanning resumes.
    cursor: usize,
}

impl<'a> Iterator for Placeholders<'a> {
    type Item = Placeholder<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let rest = self.text.get(self.cursor ..)?;
            let open = self.cursor + rest.find('{')?;
            let after_open = open + 1;
            let tail = &self.text[after_open ..];
            let Some(offset) = tail.find(['{', '}']) else {
                self.cursor = self.text.len();
                return None;
            };
            let close = after_open + offset;
            if self.text.as_bytes()[close] == b'{' {
                // Nested opener: the earlier brace is literal text.
                self.cursor = close;
                continue;
            }
            self.cursor = close + 1;
            return Some(Placeholder {
                start: open,
                end: close + 1,
                name: &self.text[after_open .. close],
            });
        }
    }
}

/// Returns an iterator over the placeholders in `text`.
#[must_use]
pub const fn placeholders(text: &str) -> Placeholders<'_> {
    Placeholders {
        text,
        cursor: 0,
    }
}

/// Returns the distinct placeholder names in `text`, sorted.
#[must_use]
pub fn placeholder_names(text: &str) -> BTreeSet<&str> {
    placeholders(text).map(|placeholder| placeholder.name).collect()
}

// ============================================================================
// SECTION: Substitution
// ============================================================================

/// Substitutes `args` into `text`.
///
/// Absent argument values substitute as an empty segment.
///
/// # Errors
///
/// Returns [`ResolveError::UnmatchedParameter`] naming the first key (in
/// sorted order) that has no placeholder in `text`.
pub fn substitute(text: &str, args: &ArgumentBag, culture: &CultureId) -> Result<String, ResolveError> {
    let present = placeholder_names(text);
    if let Some(key) = args.keys().find(|key| !present.contains(key)) {
        return Err(ResolveError::UnmatchedParameter {
            key: key.to_string(),
            culture: culture.clone(),
        });
    }

    let mut output = String::with_capacity(text.len());
    let mut copied = 0usize;
    for placeholder in placeholders(text) {
        let Some(value) = args.get(placeholder.name) else {
            continue;
        };
        output.push_str(&text[copied .. placeholder.start]);
        output.push_str(value.unwrap_or_default());
        copied = placeholder.end;
    }
    output.push_str(&text[copied ..]);
    Ok(output)
}
