//! Specificity-aware class name deduplication.
//!
//! Two tokens conflict when they style the same property under the same
//! modifier path. Only the last token of each conflict survives:
//!
//! - **Values** (`$named` and `[single]`): tokens with the exact same prefix
//!   conflict. A token whose group subsumes another group (see
//!   [`SpecificityRegistry`]) also removes earlier tokens of that child
//!   group with the same modifiers. `p::$0` after `pt::[2px]` removes it; the
//!   reverse order keeps both.
//! - **Arguments** (`[key:field]`): tokens with the same prefix and key
//!   conflict. There is no group propagation here.
//!
//! A token without a divider has an empty prefix, so bare `$hidden` and
//! `$block` conflict, as do bare `[padding:1px]` and `[padding:2px]`.
//! Plain tokens are never removed and never remove anything. Surviving tokens
//! keep their relative order, and running the result through again changes
//! nothing.

use std::collections::HashMap;

use crate::specificity::SpecificityRegistry;
use crate::token::{ClassToken, ValueKind};

/// Returns the tokens that survive conflict resolution, in their original order.
///
/// # Example
///
/// ```rust
/// use skribble_cx::{deduplicate, SpecificityRegistry};
///
/// let registry = SpecificityRegistry::default();
/// let tokens = ["px::[100px]", "block", "pt::[200px]", "p::$0"];
///
/// assert_eq!(deduplicate(&tokens, &registry), vec!["block", "p::$0"]);
/// ```
pub fn deduplicate<'a, S>(tokens: &'a [S], registry: &SpecificityRegistry) -> Vec<&'a str>
where
    S: AsRef<str>,
{
    let parsed: Vec<ClassToken<'a>> = tokens
        .iter()
        .map(|token| ClassToken::parse(token.as_ref()))
        .collect();
    let removed = mark_removals(&parsed, registry);

    parsed
        .iter()
        .zip(removed)
        .filter_map(|(token, removed)| {
            if removed {
                log::trace!("dropping superseded class name '{}'", token.raw());
                None
            } else {
                Some(token.raw())
            }
        })
        .collect()
}

/// Deduplicates `tokens` and joins the survivors with a single space.
///
/// Empty input yields an empty string.
pub fn deduplicate_to_string<S>(tokens: &[S], registry: &SpecificityRegistry) -> String
where
    S: AsRef<str>,
{
    deduplicate(tokens, registry).join(" ")
}

/// Flags every token that a later token supersedes.
fn mark_removals(tokens: &[ClassToken<'_>], registry: &SpecificityRegistry) -> Vec<bool> {
    let mut removed = vec![false; tokens.len()];
    let mut value_targets: HashMap<&str, usize> = HashMap::new();
    let mut argument_targets: HashMap<(&str, &str), usize> = HashMap::new();
    let mut child_key = String::new();

    for (index, token) in tokens.iter().enumerate() {
        match token.kind() {
            kind if kind.is_value() => {
                let prefix = token.prefix();

                if let Some(&previous) = value_targets.get(prefix) {
                    removed[previous] = true;
                }

                // Children are checked before this token is recorded so a group
                // listing itself cannot remove the token being processed.
                if let Some(group) = token.group() {
                    let modifiers = token.modifiers();
                    for child in registry.lookup(group) {
                        child_key.clear();
                        if !modifiers.is_empty() {
                            child_key.push_str(modifiers);
                            child_key.push(':');
                        }
                        child_key.push_str(child);

                        if let Some(&previous) = value_targets.get(child_key.as_str()) {
                            removed[previous] = true;
                        }
                    }
                }

                value_targets.insert(prefix, index);
            }
            ValueKind::RawKeyValueArg => {
                let Some(key) = token.argument_key() else {
                    continue;
                };
                if let Some(previous) = argument_targets.insert((token.prefix(), key), index) {
                    removed[previous] = true;
                }
            }
            _ => {}
        }
    }

    removed
}
