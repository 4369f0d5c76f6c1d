//! A process-wide registry behind a read-write lock.
//!
//! [`TagRegistry`] itself does no locking. Applications that configure styles
//! once at startup and parse from many threads can use this module instead of
//! threading a registry through their own code.
//!
//! ```
//! use tagstyle_rs::{Font, shared};
//!
//! shared::configure(|registry| registry.add_style("doc-shared-b", Font::new("Bold", 12.0)));
//!
//! let styled = shared::parse("<doc-shared-b>hi</doc-shared-b>").unwrap();
//! assert_eq!(styled.runs()[0].attributes.font, Some(Font::new("Bold", 12.0)));
//! ```

use once_cell::sync::Lazy;
use std::sync::{PoisonError, RwLock};

use tagstyle::{ParseError, StyledText, TagRegistry};

/// Global tag registry. Starts empty, with an empty default.
static REGISTRY: Lazy<RwLock<TagRegistry>> = Lazy::new(|| RwLock::new(TagRegistry::new()));

/// Mutates the shared registry under the write lock.
///
/// Parses running on other threads finish against the registry they started
/// with; parses started afterwards see the change.
pub fn configure<R>(f: impl FnOnce(&mut TagRegistry) -> R) -> R {
    let mut registry = REGISTRY.write().unwrap_or_else(PoisonError::into_inner);
    f(&mut registry)
}

/// Reads the shared registry under the read lock.
pub fn with_registry<R>(f: impl FnOnce(&TagRegistry) -> R) -> R {
    let registry = REGISTRY.read().unwrap_or_else(PoisonError::into_inner);
    f(&registry)
}

/// Parses `markup` against the shared registry.
pub fn parse(markup: &str) -> Result<StyledText<'_>, ParseError> {
    with_registry(|registry| StyledText::parse(markup, registry))
}
