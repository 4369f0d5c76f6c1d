//! Platform-neutral color values.
//!
//! Colors are stored as four non-premultiplied sRGB components in `0.0..=1.0`.
//! Converting them into a platform color object is left to the renderer.

use std::fmt;

use phf::phf_map;

use crate::error::ColorParseError;

/// CSS color names and their 8-bit sRGB components.
static NAMED_COLORS: phf::Map<&'static str, (u8, u8, u8)> = phf_map! {
    "black" => (0, 0, 0),
    "white" => (255, 255, 255),
    "red" => (255, 0, 0),
    "green" => (0, 128, 0),
    "blue" => (0, 0, 255),
    "yellow" => (255, 255, 0),
    "cyan" => (0, 255, 255),
    "aqua" => (0, 255, 255),
    "magenta" => (255, 0, 255),
    "fuchsia" => (255, 0, 255),
    "gray" => (128, 128, 128),
    "grey" => (128, 128, 128),
    "darkgray" => (169, 169, 169),
    "darkgrey" => (169, 169, 169),
    "lightgray" => (211, 211, 211),
    "lightgrey" => (211, 211, 211),
    "silver" => (192, 192, 192),
    "maroon" => (128, 0, 0),
    "olive" => (128, 128, 0),
    "lime" => (0, 255, 0),
    "navy" => (0, 0, 128),
    "purple" => (128, 0, 128),
    "teal" => (0, 128, 128),
    "orange" => (255, 165, 0),
    "pink" => (255, 192, 203),
    "brown" => (165, 42, 42),
    "coral" => (255, 127, 80),
    "gold" => (255, 215, 0),
    "indigo" => (75, 0, 130),
    "violet" => (238, 130, 238),
    "crimson" => (220, 20, 60),
    "tomato" => (255, 99, 71),
    "salmon" => (250, 128, 114),
    "khaki" => (240, 230, 140),
    "beige" => (245, 245, 220),
    "ivory" => (255, 255, 240),
    "lavender" => (230, 230, 250),
    "plum" => (221, 160, 221),
    "orchid" => (218, 112, 214),
    "tan" => (210, 180, 140),
    "chocolate" => (210, 105, 30),
    "firebrick" => (178, 34, 34),
    "darkred" => (139, 0, 0),
    "darkgreen" => (0, 100, 0),
    "darkblue" => (0, 0, 139),
    "skyblue" => (135, 206, 235),
    "steelblue" => (70, 130, 180),
    "royalblue" => (65, 105, 225),
    "slategray" => (112, 128, 144),
    "slategrey" => (112, 128, 144),
    "rebeccapurple" => (102, 51, 153),
};

/// An sRGB color with alpha.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red component.
    pub r: f32,
    /// Green component.
    pub g: f32,
    /// Blue component.
    pub b: f32,
    /// Alpha component, `1.0` is opaque.
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);
    pub const TRANSPARENT: Color = Color::new(0.0, 0.0, 0.0, 0.0);

    /// Create a color from float components.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from 8-bit components.
    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgba8(r, g, b, 255)
    }

    /// Create a color from 8-bit components.
    pub fn rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: f32::from(r) / 255.0,
            g: f32::from(g) / 255.0,
            b: f32::from(b) / 255.0,
            a: f32::from(a) / 255.0,
        }
    }

    /// Return the same color with a different alpha.
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Quantize to 8-bit components, clamping out-of-range values.
    pub fn to_rgba8(self) -> [u8; 4] {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }

    /// Parse a color from a string.
    ///
    /// Supports:
    /// - Named colors: `red`, `navy`, `rebeccapurple`, etc.
    /// - Hex colors: `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`
    /// - RGB functions: `rgb(r, g, b)`, `rgba(r, g, b, a)` with `a` in `0..=1`
    ///
    /// # Examples
    ///
    /// ```
    /// use tagstyle::Color;
    ///
    /// let red = Color::parse("red").unwrap();
    /// assert_eq!(red, Color::rgb8(255, 0, 0));
    ///
    /// let hex = Color::parse("#ff5733").unwrap();
    /// assert_eq!(hex.to_rgba8(), [255, 87, 51, 255]);
    /// ```
    pub fn parse(input: &str) -> Result<Self, ColorParseError> {
        let input = input.trim();

        if let Some(hex) = input.strip_prefix('#') {
            return Self::parse_hex(hex);
        }

        if let Some(args) = input
            .strip_prefix("rgba(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            return Self::parse_rgb_func(args, true);
        }

        if let Some(args) = input
            .strip_prefix("rgb(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            return Self::parse_rgb_func(args, false);
        }

        Self::parse_named(input)
    }

    /// Parse a hex color (without the # prefix).
    fn parse_hex(hex: &str) -> Result<Self, ColorParseError> {
        let invalid = || ColorParseError::InvalidHex(format!("#{}", hex));

        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let digit = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).map_err(|_| invalid());
        let pair = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());

        match hex.len() {
            3 => Ok(Self::rgb8(digit(0)? * 17, digit(1)? * 17, digit(2)? * 17)),
            4 => Ok(Self::rgba8(
                digit(0)? * 17,
                digit(1)? * 17,
                digit(2)? * 17,
                digit(3)? * 17,
            )),
            6 => Ok(Self::rgb8(pair(0)?, pair(2)?, pair(4)?)),
            8 => Ok(Self::rgba8(pair(0)?, pair(2)?, pair(4)?, pair(6)?)),
            _ => Err(invalid()),
        }
    }

    /// Parse an RGB function (the part inside the parentheses).
    fn parse_rgb_func(input: &str, with_alpha: bool) -> Result<Self, ColorParseError> {
        let parts: Vec<&str> = input.split(',').map(|s| s.trim()).collect();
        let expected = if with_alpha { 4 } else { 3 };

        if parts.len() != expected {
            return Err(ColorParseError::InvalidRgb(input.to_string()));
        }

        let channel = |s: &str| {
            s.parse::<u8>()
                .map_err(|_| ColorParseError::InvalidRgb(format!("invalid channel: {}", s)))
        };

        let color = Self::rgb8(channel(parts[0])?, channel(parts[1])?, channel(parts[2])?);

        if !with_alpha {
            return Ok(color);
        }

        let alpha = parts[3]
            .parse::<f32>()
            .ok()
            .filter(|a| (0.0..=1.0).contains(a))
            .ok_or_else(|| ColorParseError::InvalidRgb(format!("invalid alpha: {}", parts[3])))?;

        Ok(color.with_alpha(alpha))
    }

    /// Parse a named color.
    fn parse_named(name: &str) -> Result<Self, ColorParseError> {
        NAMED_COLORS
            .get(name.to_ascii_lowercase().as_str())
            .map(|&(r, g, b)| Self::rgb8(r, g, b))
            .ok_or_else(|| ColorParseError::UnknownName(name.to_string()))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, a] = self.to_rgba8();
        if a == 255 {
            write!(f, "#{:02x}{:02x}{:02x}", r, g, b)
        } else {
            write!(f, "#{:02x}{:02x}{:02x}{:02x}", r, g, b, a)
        }
    }
}
