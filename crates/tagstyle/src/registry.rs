//! Tag name to attribute set registry.

use std::collections::HashMap;
use std::sync::Arc;

use crate::attributes::{AttributeSet, Font};
use crate::color::Color;
use crate::error::SheetError;
use crate::sheet::{Selector, Stylesheet, parse_stylesheet};

/// Maps tag names to attribute overrides, plus the default attributes used
/// for text outside any tag.
///
/// Configure it once, then parse any number of documents against it. Tag
/// names are exact, case-sensitive matches.
///
/// # Examples
///
/// ```
/// use tagstyle::{AttributeSet, Font, TagRegistry};
///
/// let mut registry = TagRegistry::new();
/// registry.set_default(AttributeSet::new().with_font(Font::new("Helvetica", 14.0)));
/// registry.add_style("b", Font::new("Helvetica-Bold", 14.0));
///
/// assert!(registry.contains("b"));
/// assert!(registry.attributes_for("i").is_none());
/// ```
#[derive(Clone, Debug, Default)]
pub struct TagRegistry {
    default: Arc<AttributeSet>,
    tags: HashMap<String, AttributeSet>,
}

impl TagRegistry {
    /// Create a registry with empty default attributes and no tags.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`set_default`](Self::set_default).
    pub fn with_default(mut self, attributes: AttributeSet) -> Self {
        self.set_default(attributes);
        self
    }

    /// Build a registry from stylesheet source.
    pub fn from_stylesheet(source: &str) -> Result<Self, SheetError> {
        let sheet = parse_stylesheet(source)?;
        let mut registry = Self::new();
        registry.apply_stylesheet(&sheet);
        Ok(registry)
    }

    /// Replace the default attributes. Does not merge with the previous value.
    pub fn set_default(&mut self, attributes: AttributeSet) {
        log::debug!("registry: default attributes set to {}", attributes);
        self.default = Arc::new(attributes);
    }

    /// Replace the attributes registered for `tag`.
    pub fn set_attributes(&mut self, tag: impl Into<String>, attributes: AttributeSet) {
        let tag = tag.into();
        log::debug!("registry: <{}> set to {}", tag, attributes);
        self.tags.insert(tag, attributes);
    }

    /// Remove the mapping for `tag`, returning it if present.
    pub fn remove(&mut self, tag: &str) -> Option<AttributeSet> {
        let removed = self.tags.remove(tag);
        if removed.is_some() {
            log::debug!("registry: <{}> removed", tag);
        }
        removed
    }

    /// The attributes applied to text outside any recognized tag.
    pub fn default_attributes(&self) -> &AttributeSet {
        &self.default
    }

    pub(crate) fn shared_default(&self) -> Arc<AttributeSet> {
        Arc::clone(&self.default)
    }

    /// The override registered for `tag`, or `None` for an unknown tag.
    pub fn attributes_for(&self, tag: &str) -> Option<&AttributeSet> {
        self.tags.get(tag)
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags.contains_key(tag)
    }

    /// Registered tag names, in no particular order.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.tags.keys().map(String::as_str)
    }

    /// Number of registered tags.
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Apply every rule of a parsed stylesheet.
    ///
    /// Rules use the same blind-overwrite semantics as the setters: a selector
    /// replaces whatever was registered under it.
    pub fn apply_stylesheet(&mut self, sheet: &Stylesheet) {
        for (selector, attributes) in sheet.resolved() {
            match selector {
                Selector::Default => self.set_default(attributes),
                Selector::Tag(name) => self.set_attributes(name, attributes),
            }
        }
    }

    // Convenience

    /// Register `tag` with just a font.
    pub fn add_style(&mut self, tag: impl Into<String>, font: Font) {
        self.set_attributes(tag, AttributeSet::new().with_font(font));
    }

    /// Register `tag` with a font and text color.
    pub fn add_style_with_color(&mut self, tag: impl Into<String>, font: Font, color: Color) {
        self.set_attributes(
            tag,
            AttributeSet::new().with_font(font).with_text_color(color),
        );
    }

    /// Register `tag` with the common fields. Both booleans are set, so they
    /// override inherited values even when `false`.
    pub fn add_style_with(
        &mut self,
        tag: impl Into<String>,
        font: Font,
        color: Color,
        background: Option<Color>,
        strikethrough: bool,
        underline: bool,
    ) {
        let mut attributes = AttributeSet::new()
            .with_font(font)
            .with_text_color(color)
            .with_strikethrough(strikethrough)
            .with_underline(underline);
        attributes.background_color = background;
        self.set_attributes(tag, attributes);
    }
}
