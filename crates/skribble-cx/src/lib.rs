//! # Skribble cx - atomic class names without specificity fights
//!
//! Atomic CSS libraries leave it to the stylesheet to decide which of two
//! conflicting classes wins. This crate decides in code instead: when
//! class names are joined, any class superseded by a later one is removed.
//!
//! ## Tokens
//!
//! Class names are produced by [`ClassPath`] as `prefix::value` tokens:
//!
//! | Token | Meaning |
//! |-------|---------|
//! | `md:p::$2_5` | named value `$2_5` for group `p` under modifier `md` |
//! | `p::[100px]` | raw argument for group `p` |
//! | `md::[padding-left:100px]` | raw property/value pair under `md` |
//! | `block` | plain class name, always kept |
//!
//! ## Conflicts
//!
//! A later token replaces an earlier one with the same prefix. A token for a
//! parent group also replaces earlier tokens for the groups it subsumes,
//! according to the [`SpecificityRegistry`] (`p` subsumes `px`, `pt`, ...).
//!
//! ```rust
//! use skribble_cx::{cx, ClassPath};
//!
//! let padding_top = ClassPath::new().at("pt").arg("200px");
//! let padding = ClassPath::new().at("p").named("$0").unwrap();
//!
//! assert_eq!(cx([padding_top.as_str(), "flex", padding.as_str()]), "flex p::$0");
//! ```
//!
//! ## Configuration
//!
//! The process-wide table used by [`cx()`] starts with
//! [`DEFAULT_SPECIFICITY`](specificity::DEFAULT_SPECIFICITY) and can be
//! replaced with [`specificity::set_specificity`], or loaded from JSON/YAML
//! with [`SpecificityRegistry::from_yaml_str`]. Use [`cx_with`] or
//! [`deduplicate`] to pass a table explicitly.

mod builder;
mod cx;
mod dedupe;
mod error;
pub mod specificity;
mod token;

pub use builder::ClassPath;
pub use cx::{cx, cx_with, ClassValue};
pub use dedupe::{deduplicate, deduplicate_to_string};
pub use error::{BuildError, RegistryError};
pub use specificity::{SharedRegistry, SpecificityConfig, SpecificityRegistry};
pub use token::{ClassToken, ValueKind, DIVIDER, NAMED_SENTINEL};
