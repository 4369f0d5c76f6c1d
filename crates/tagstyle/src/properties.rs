//! Flat property maps handed to a renderer.
//!
//! [`AttributeSet::to_properties`](crate::AttributeSet::to_properties) turns a
//! resolved attribute set into a [`PropertyMap`]. Only present fields appear
//! in the map; there is no placeholder for absent ones.

use std::collections::BTreeMap;
use std::fmt;

use crate::attributes::{Fields, Font, ParagraphStyle};
use crate::color::Color;

/// A property name, one per attribute field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PropertyKey {
    Font,
    TextColor,
    BackgroundColor,
    Strikethrough,
    Underline,
    Ligatures,
    Kern,
    OutlineColor,
    OutlineWidth,
    ParagraphStyle,
    ShadowBlurRadius,
    ShadowColor,
    ShadowOffset,
}

impl PropertyKey {
    /// Every key, in map order.
    pub const ALL: [PropertyKey; 13] = [
        PropertyKey::Font,
        PropertyKey::TextColor,
        PropertyKey::BackgroundColor,
        PropertyKey::Strikethrough,
        PropertyKey::Underline,
        PropertyKey::Ligatures,
        PropertyKey::Kern,
        PropertyKey::OutlineColor,
        PropertyKey::OutlineWidth,
        PropertyKey::ParagraphStyle,
        PropertyKey::ShadowBlurRadius,
        PropertyKey::ShadowColor,
        PropertyKey::ShadowOffset,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PropertyKey::Font => "font",
            PropertyKey::TextColor => "text_color",
            PropertyKey::BackgroundColor => "background_color",
            PropertyKey::Strikethrough => "strikethrough",
            PropertyKey::Underline => "underline",
            PropertyKey::Ligatures => "ligatures",
            PropertyKey::Kern => "kern",
            PropertyKey::OutlineColor => "outline_color",
            PropertyKey::OutlineWidth => "outline_width",
            PropertyKey::ParagraphStyle => "paragraph_style",
            PropertyKey::ShadowBlurRadius => "shadow_blur_radius",
            PropertyKey::ShadowColor => "shadow_color",
            PropertyKey::ShadowOffset => "shadow_offset",
        }
    }

    /// The attribute field this key is produced from.
    pub fn field(self) -> Fields {
        match self {
            PropertyKey::Font => Fields::FONT,
            PropertyKey::TextColor => Fields::TEXT_COLOR,
            PropertyKey::BackgroundColor => Fields::BACKGROUND_COLOR,
            PropertyKey::Strikethrough => Fields::STRIKETHROUGH,
            PropertyKey::Underline => Fields::UNDERLINE,
            PropertyKey::Ligatures => Fields::LIGATURES,
            PropertyKey::Kern => Fields::KERN,
            PropertyKey::OutlineColor => Fields::OUTLINE_COLOR,
            PropertyKey::OutlineWidth => Fields::OUTLINE_WIDTH,
            PropertyKey::ParagraphStyle => Fields::PARAGRAPH_STYLE,
            PropertyKey::ShadowBlurRadius => Fields::SHADOW_BLUR,
            PropertyKey::ShadowColor => Fields::SHADOW_COLOR,
            PropertyKey::ShadowOffset => Fields::SHADOW_OFFSET,
        }
    }
}

impl fmt::Display for PropertyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A typed property value.
#[derive(Clone, Debug, PartialEq)]
pub enum PropertyValue {
    Font(Font),
    Color(Color),
    Bool(bool),
    Number(f64),
    Paragraph(ParagraphStyle),
    Offset(f64, f64),
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Font(font) => write!(f, "{}", font),
            PropertyValue::Color(color) => write!(f, "{}", color),
            PropertyValue::Bool(b) => write!(f, "{}", b),
            PropertyValue::Number(n) => write!(f, "{}", n),
            PropertyValue::Paragraph(p) => write!(f, "[{}]", p),
            PropertyValue::Offset(x, y) => write!(f, "({}, {})", x, y),
        }
    }
}

/// Property name to value, ordered by key.
pub type PropertyMap = BTreeMap<PropertyKey, PropertyValue>;
