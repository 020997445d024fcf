//! Class name token scanning.
//!
//! Tokens produced by [`ClassPath`](crate::ClassPath) follow this grammar:
//!
//! ```text
//! token        := plain | prefixed
//! prefixed     := prefix "::" value
//! prefix       := segment (":" segment)*
//! value        := named | rawSingle | rawKeyValue
//! named        := "$" identifier
//! rawSingle    := "[" fieldWithNoColon "]"
//! rawKeyValue  := "[" key ":" field "]"
//! ```
//!
//! A token without a divider is scanned as a value with an empty prefix, so
//! bare `$group` or `[padding:10px]` tokens still take part in conflict
//! resolution. Scanning never fails. Anything that does not fit the grammar
//! is classified as [`ValueKind::Plain`] and is never deduplicated.

/// Separator between a token's modifier/group prefix and its value.
pub const DIVIDER: &str = "::";

/// Marker that starts a named (pre-registered) value.
pub const NAMED_SENTINEL: char = '$';

/// Separator between modifier path segments, and between key and field in
/// a bracketed argument.
const SEGMENT_SEPARATOR: char = ':';

/// How a token's value participates in conflict resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// `$lg`: a pre-registered style value.
    Named,
    /// `[100px]`: a raw argument for the prefix's style group.
    RawSingleArg,
    /// `[padding:10px]`: a raw property/value pair.
    RawKeyValueArg,
    /// A bare word, a malformed token, or an unrecognized value. Always kept.
    Plain,
}

impl ValueKind {
    /// Returns true for kinds that take part in the value namespace.
    pub fn is_value(self) -> bool {
        matches!(self, ValueKind::Named | ValueKind::RawSingleArg)
    }
}

/// A class name token split into its parts.
///
/// Borrows from the raw string, so scanning a token list allocates nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassToken<'a> {
    raw: &'a str,
    prefix: &'a str,
    value: &'a str,
    kind: ValueKind,
}

impl<'a> ClassToken<'a> {
    /// Scans a raw token.
    ///
    /// # Example
    ///
    /// ```rust
    /// use skribble_cx::{ClassToken, ValueKind};
    ///
    /// let token = ClassToken::parse("md:p::$2_5");
    /// assert_eq!(token.prefix(), "md:p");
    /// assert_eq!(token.group(), Some("p"));
    /// assert_eq!(token.kind(), ValueKind::Named);
    ///
    /// assert_eq!(ClassToken::parse("block").kind(), ValueKind::Plain);
    /// assert_eq!(ClassToken::parse("$block").kind(), ValueKind::Named);
    /// ```
    pub fn parse(raw: &'a str) -> Self {
        let Some((prefix, value)) = raw.split_once(DIVIDER) else {
            return Self {
                raw,
                prefix: "",
                value: raw,
                kind: classify(raw),
            };
        };

        if value.contains(DIVIDER) {
            log::trace!("class name '{}' has more than one divider, keeping as is", raw);
            return Self::plain(raw);
        }

        if prefix.is_empty() && value.is_empty() {
            return Self::plain(raw);
        }

        Self {
            raw,
            prefix,
            value,
            kind: classify(value),
        }
    }

    fn plain(raw: &'a str) -> Self {
        Self {
            raw,
            prefix: "",
            value: raw,
            kind: ValueKind::Plain,
        }
    }

    /// The original token.
    pub fn raw(&self) -> &'a str {
        self.raw
    }

    /// The modifier/group path before the divider. Empty without a divider.
    pub fn prefix(&self) -> &'a str {
        self.prefix
    }

    /// The part after the divider, or the whole token without one.
    pub fn value(&self) -> &'a str {
        self.value
    }

    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    /// The style group: the last segment of the prefix.
    ///
    /// Returns `None` when the prefix is empty.
    pub fn group(&self) -> Option<&'a str> {
        if self.prefix.is_empty() {
            return None;
        }
        Some(split_last_segment(self.prefix).1)
    }

    /// The modifier path: every prefix segment except the last one.
    pub fn modifiers(&self) -> &'a str {
        split_last_segment(self.prefix).0
    }

    /// The property key of a `[key:field]` argument.
    pub fn argument_key(&self) -> Option<&'a str> {
        if self.kind != ValueKind::RawKeyValueArg {
            return None;
        }
        bracket_contents(self.value)
            .and_then(|inner| inner.split_once(SEGMENT_SEPARATOR))
            .map(|(key, _)| key)
    }
}

fn split_last_segment(prefix: &str) -> (&str, &str) {
    prefix.rsplit_once(SEGMENT_SEPARATOR).unwrap_or(("", prefix))
}

fn bracket_contents(value: &str) -> Option<&str> {
    value.strip_prefix('[')?.strip_suffix(']')
}

fn classify(value: &str) -> ValueKind {
    if value.starts_with(NAMED_SENTINEL) {
        return ValueKind::Named;
    }

    match bracket_contents(value).map(|inner| inner.matches(SEGMENT_SEPARATOR).count()) {
        Some(0) => ValueKind::RawSingleArg,
        Some(1) => ValueKind::RawKeyValueArg,
        _ => ValueKind::Plain,
    }
}
