//! Attribute sets for styled text.
//!
//! An [`AttributeSet`] is a bag of optional visual properties. A field that is
//! `None` inherits from the enclosing context; a field that is `Some` overrides
//! it, even when the value is neutral (`Some(false)`, `Some(0.0)`).

use std::fmt;

use bitflags::bitflags;

use crate::color::Color;
use crate::properties::{PropertyKey, PropertyMap, PropertyValue};

/// A font reference: family name and point size.
///
/// Resolving this to a real platform font happens at the render boundary.
#[derive(Clone, Debug, PartialEq)]
pub struct Font {
    pub family: String,
    pub size: f64,
}

impl Font {
    pub fn new(family: impl Into<String>, size: f64) -> Self {
        Self {
            family: family.into(),
            size,
        }
    }
}

impl fmt::Display for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.family, self.size)
    }
}

/// Horizontal alignment of lines within a paragraph.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextAlignment {
    #[default]
    Natural,
    Left,
    Center,
    Right,
    Justified,
}

impl TextAlignment {
    pub fn as_str(self) -> &'static str {
        match self {
            TextAlignment::Natural => "natural",
            TextAlignment::Left => "left",
            TextAlignment::Center => "center",
            TextAlignment::Right => "right",
            TextAlignment::Justified => "justify",
        }
    }
}

/// Paragraph layout parameters.
///
/// Treated as one opaque value: merging replaces it as a whole.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParagraphStyle {
    pub alignment: TextAlignment,
    /// Extra space between lines.
    pub line_spacing: f64,
    /// Space after the paragraph.
    pub paragraph_spacing: f64,
    pub first_line_head_indent: f64,
    pub head_indent: f64,
    pub tail_indent: f64,
}

impl fmt::Display for ParagraphStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "align={} line={} paragraph={} first={} head={} tail={}",
            self.alignment.as_str(),
            self.line_spacing,
            self.paragraph_spacing,
            self.first_line_head_indent,
            self.head_indent,
            self.tail_indent
        )
    }
}

bitflags! {
    /// The set of fields present on an [`AttributeSet`].
    ///
    /// # Example
    ///
    /// ```
    /// use tagstyle::{AttributeSet, Fields};
    ///
    /// let attrs = AttributeSet::new().with_underline(false).with_kern(1.0);
    /// assert_eq!(attrs.fields(), Fields::UNDERLINE | Fields::KERN);
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Fields: u16 {
        const FONT              = 1 << 0;
        const TEXT_COLOR        = 1 << 1;
        const BACKGROUND_COLOR  = 1 << 2;
        const STRIKETHROUGH     = 1 << 3;
        const UNDERLINE         = 1 << 4;
        const LIGATURES         = 1 << 5;
        const KERN              = 1 << 6;
        const OUTLINE_COLOR     = 1 << 7;
        const OUTLINE_WIDTH     = 1 << 8;
        const PARAGRAPH_STYLE   = 1 << 9;
        const SHADOW_BLUR       = 1 << 10;
        const SHADOW_COLOR      = 1 << 11;
        const SHADOW_OFFSET     = 1 << 12;
    }
}

/// Optional visual properties applied to a run of text.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AttributeSet {
    pub font: Option<Font>,
    pub text_color: Option<Color>,
    pub background_color: Option<Color>,
    pub strikethrough: Option<bool>,
    pub underline: Option<bool>,
    /// Allow characters to combine into ligatures.
    pub ligatures: Option<bool>,
    /// Extra distance between characters.
    pub kern: Option<f64>,
    pub outline_color: Option<Color>,
    pub outline_width: Option<f64>,
    pub paragraph_style: Option<ParagraphStyle>,
    pub shadow_blur_radius: Option<f64>,
    pub shadow_color: Option<Color>,
    /// Shadow offset as `(x, y)`.
    pub shadow_offset: Option<(f64, f64)>,
}

impl AttributeSet {
    /// Create an empty set (every field inherits).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_font(mut self, font: Font) -> Self {
        self.font = Some(font);
        self
    }

    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = Some(color);
        self
    }

    pub fn with_background_color(mut self, color: Color) -> Self {
        self.background_color = Some(color);
        self
    }

    pub fn with_strikethrough(mut self, strikethrough: bool) -> Self {
        self.strikethrough = Some(strikethrough);
        self
    }

    pub fn with_underline(mut self, underline: bool) -> Self {
        self.underline = Some(underline);
        self
    }

    pub fn with_ligatures(mut self, ligatures: bool) -> Self {
        self.ligatures = Some(ligatures);
        self
    }

    pub fn with_kern(mut self, kern: f64) -> Self {
        self.kern = Some(kern);
        self
    }

    pub fn with_outline(mut self, color: Color, width: f64) -> Self {
        self.outline_color = Some(color);
        self.outline_width = Some(width);
        self
    }

    pub fn with_paragraph_style(mut self, style: ParagraphStyle) -> Self {
        self.paragraph_style = Some(style);
        self
    }

    pub fn with_shadow(mut self, color: Color, blur_radius: f64, offset: (f64, f64)) -> Self {
        self.shadow_color = Some(color);
        self.shadow_blur_radius = Some(blur_radius);
        self.shadow_offset = Some(offset);
        self
    }

    /// Returns true if no field is present.
    pub fn is_empty(&self) -> bool {
        self.fields().is_empty()
    }

    /// The set of present fields.
    pub fn fields(&self) -> Fields {
        let mut fields = Fields::empty();
        fields.set(Fields::FONT, self.font.is_some());
        fields.set(Fields::TEXT_COLOR, self.text_color.is_some());
        fields.set(Fields::BACKGROUND_COLOR, self.background_color.is_some());
        fields.set(Fields::STRIKETHROUGH, self.strikethrough.is_some());
        fields.set(Fields::UNDERLINE, self.underline.is_some());
        fields.set(Fields::LIGATURES, self.ligatures.is_some());
        fields.set(Fields::KERN, self.kern.is_some());
        fields.set(Fields::OUTLINE_COLOR, self.outline_color.is_some());
        fields.set(Fields::OUTLINE_WIDTH, self.outline_width.is_some());
        fields.set(Fields::PARAGRAPH_STYLE, self.paragraph_style.is_some());
        fields.set(Fields::SHADOW_BLUR, self.shadow_blur_radius.is_some());
        fields.set(Fields::SHADOW_COLOR, self.shadow_color.is_some());
        fields.set(Fields::SHADOW_OFFSET, self.shadow_offset.is_some());
        fields
    }

    /// Apply `overrides` on top of this set.
    ///
    /// Each field takes the override's value when present, otherwise keeps
    /// this set's value. Associative, not commutative.
    ///
    /// # Examples
    ///
    /// ```
    /// use tagstyle::{AttributeSet, Color, Font};
    ///
    /// let base = AttributeSet::new()
    ///     .with_font(Font::new("Helvetica", 14.0))
    ///     .with_underline(false);
    /// let overrides = AttributeSet::new()
    ///     .with_underline(true)
    ///     .with_text_color(Color::BLACK);
    ///
    /// let merged = base.merge(&overrides);
    /// assert_eq!(merged.font, Some(Font::new("Helvetica", 14.0)));
    /// assert_eq!(merged.underline, Some(true));
    /// assert_eq!(merged.text_color, Some(Color::BLACK));
    /// ```
    pub fn merge(&self, overrides: &AttributeSet) -> AttributeSet {
        AttributeSet {
            font: overrides.font.clone().or_else(|| self.font.clone()),
            text_color: overrides.text_color.or(self.text_color),
            background_color: overrides.background_color.or(self.background_color),
            strikethrough: overrides.strikethrough.or(self.strikethrough),
            underline: overrides.underline.or(self.underline),
            ligatures: overrides.ligatures.or(self.ligatures),
            kern: overrides.kern.or(self.kern),
            outline_color: overrides.outline_color.or(self.outline_color),
            outline_width: overrides.outline_width.or(self.outline_width),
            paragraph_style: overrides
                .paragraph_style
                .clone()
                .or_else(|| self.paragraph_style.clone()),
            shadow_blur_radius: overrides.shadow_blur_radius.or(self.shadow_blur_radius),
            shadow_color: overrides.shadow_color.or(self.shadow_color),
            shadow_offset: overrides.shadow_offset.or(self.shadow_offset),
        }
    }

    /// Flatten into a property map for the render boundary.
    ///
    /// Absent fields are omitted from the map.
    pub fn to_properties(&self) -> PropertyMap {
        let mut map = PropertyMap::new();
        let mut put = |key: PropertyKey, value: Option<PropertyValue>| {
            if let Some(value) = value {
                map.insert(key, value);
            }
        };

        put(PropertyKey::Font, self.font.clone().map(PropertyValue::Font));
        put(PropertyKey::TextColor, self.text_color.map(PropertyValue::Color));
        put(
            PropertyKey::BackgroundColor,
            self.background_color.map(PropertyValue::Color),
        );
        put(
            PropertyKey::Strikethrough,
            self.strikethrough.map(PropertyValue::Bool),
        );
        put(PropertyKey::Underline, self.underline.map(PropertyValue::Bool));
        put(PropertyKey::Ligatures, self.ligatures.map(PropertyValue::Bool));
        put(PropertyKey::Kern, self.kern.map(PropertyValue::Number));
        put(
            PropertyKey::OutlineColor,
            self.outline_color.map(PropertyValue::Color),
        );
        put(
            PropertyKey::OutlineWidth,
            self.outline_width.map(PropertyValue::Number),
        );
        put(
            PropertyKey::ParagraphStyle,
            self.paragraph_style.clone().map(PropertyValue::Paragraph),
        );
        put(
            PropertyKey::ShadowBlurRadius,
            self.shadow_blur_radius.map(PropertyValue::Number),
        );
        put(
            PropertyKey::ShadowColor,
            self.shadow_color.map(PropertyValue::Color),
        );
        put(
            PropertyKey::ShadowOffset,
            self.shadow_offset.map(|(x, y)| PropertyValue::Offset(x, y)),
        );

        map
    }
}

impl fmt::Display for AttributeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.to_properties().iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", key, value)?;
        }
        f.write_str("}")
    }
}
