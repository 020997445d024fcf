//! The specificity table: which style groups subsume which others.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::error::RegistryError;

/// The default specificity table.
///
/// The `mb` entry lists `{mt, mb}` where `my` would be expected. Class name
/// precedence in existing stylesheets depends on it, so it is kept as is.
pub const DEFAULT_SPECIFICITY: &[(&str, &[&str])] = &[
    ("p", &["px", "py", "pt", "pr", "pl", "pb"]),
    ("px", &["pl", "pr"]),
    ("py", &["pt", "pb"]),
    ("m", &["mx", "my", "mt", "mr", "ml", "mb"]),
    ("mx", &["mr", "ml"]),
    ("mb", &["mt", "mb"]),
    ("pbl", &["pbls", "pble"]),
    ("pin", &["pins", "pine"]),
];

static NO_CHILDREN: BTreeSet<String> = BTreeSet::new();

/// A table mapping a parent style group to the child groups it subsumes.
///
/// A value applied to a parent group (`p`) invalidates any earlier value
/// applied to one of its children (`px`, `pt`, ...) under the same modifier
/// path. Children never invalidate their parent.
///
/// The table is only ever replaced wholesale; see [`replace_all`](Self::replace_all).
///
/// # Example
///
/// ```rust
/// use skribble_cx::SpecificityRegistry;
///
/// let registry = SpecificityRegistry::default();
/// assert!(registry.lookup("px").contains("pl"));
/// assert!(registry.lookup("unknown").is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SpecificityRegistry {
    groups: BTreeMap<String, BTreeSet<String>>,
}

impl Default for SpecificityRegistry {
    fn default() -> Self {
        let groups = DEFAULT_SPECIFICITY
            .iter()
            .map(|(parent, children)| {
                (
                    parent.to_string(),
                    children.iter().map(|c| c.to_string()).collect(),
                )
            })
            .collect();
        Self { groups }
    }
}

impl SpecificityRegistry {
    /// Creates a registry holding the default table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry with no groups. Only exact-key conflicts resolve.
    pub fn empty() -> Self {
        Self {
            groups: BTreeMap::new(),
        }
    }

    /// Builds a registry from a caller-supplied mapping.
    ///
    /// When a parent appears more than once, the last entry wins.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidMapping`] if two groups list each other
    /// as children. A group listing itself is allowed.
    pub fn from_mapping<I, K, V, S>(mapping: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let groups: BTreeMap<String, BTreeSet<String>> = mapping
            .into_iter()
            .map(|(parent, children)| {
                (
                    parent.into(),
                    children.into_iter().map(Into::into).collect(),
                )
            })
            .collect();

        validate(&groups)?;
        Ok(Self { groups })
    }

    /// Returns the groups subsumed by `group`, or an empty set if it is unregistered.
    pub fn lookup(&self, group: &str) -> &BTreeSet<String> {
        self.groups.get(group).unwrap_or(&NO_CHILDREN)
    }

    /// Returns true if `group` has an entry in the table.
    pub fn has_group(&self, group: &str) -> bool {
        self.groups.contains_key(group)
    }

    /// Discards the whole table and installs `mapping` in its place.
    ///
    /// This is not a merge: callers wanting to extend the defaults must
    /// merge them into `mapping` first (see [`to_mapping`](Self::to_mapping)).
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidMapping`] on a direct cycle, in which
    /// case the current table is retained unchanged.
    pub fn replace_all<I, K, V, S>(&mut self, mapping: I) -> Result<(), RegistryError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let next = Self::from_mapping(mapping)?;
        log::debug!("installing specificity table with {} groups", next.len());
        *self = next;
        Ok(())
    }

    /// Returns an iterator over registered parent groups, in sorted order.
    pub fn groups(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(|s| s.as_str())
    }

    /// Returns the table as a plain mapping, suitable for merging and
    /// passing back to [`replace_all`](Self::replace_all).
    pub fn to_mapping(&self) -> BTreeMap<String, Vec<String>> {
        self.groups
            .iter()
            .map(|(parent, children)| (parent.clone(), children.iter().cloned().collect()))
            .collect()
    }

    /// Returns the number of parent groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns true if no groups are registered.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Rejects direct two-element cycles. Longer cycles are not detected.
fn validate(groups: &BTreeMap<String, BTreeSet<String>>) -> Result<(), RegistryError> {
    for (parent, children) in groups {
        for child in children {
            if child == parent {
                continue;
            }
            if groups
                .get(child)
                .is_some_and(|grandchildren| grandchildren.contains(parent))
            {
                log::warn!(
                    "rejecting specificity mapping: '{}' and '{}' subsume each other",
                    parent,
                    child
                );
                return Err(RegistryError::InvalidMapping {
                    parent: parent.clone(),
                    child: child.clone(),
                });
            }
        }
    }
    Ok(())
}
