//! Specificity rules between style groups.
//!
//! This module provides the tables consulted when resolving class name
//! conflicts:
//!
//! - [`SpecificityRegistry`]: An immutable parent-to-children group table
//! - [`SharedRegistry`]: A registry that can be swapped while being read
//! - [`SpecificityConfig`]: JSON/YAML form of a table
//!
//! A parent group (e.g. `p`) subsumes its children (`px`, `pt`, ...): a
//! later padding value removes earlier padding-x or padding-top values that
//! share its modifier path.

mod config;
mod registry;
mod shared;

pub use config::SpecificityConfig;
pub use registry::{SpecificityRegistry, DEFAULT_SPECIFICITY};
pub use shared::{global, set_specificity, SharedRegistry};
