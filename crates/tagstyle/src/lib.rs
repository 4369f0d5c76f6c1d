//! Tag markup to styled text runs.
//!
//! This crate compiles strings like `Hello <b>World</b>!` into an ordered
//! sequence of [`Run`]s, each carrying a fully resolved [`AttributeSet`].
//!
//! # Overview
//!
//! - A [`TagRegistry`] maps tag names to attribute overrides and holds the
//!   default attributes for untagged text.
//! - [`parser::parse`] scans the markup once, keeping a stack of open tags.
//!   Text inside nested tags gets the default merged with every enclosing
//!   tag's overrides, innermost last.
//! - The renderer consumes the runs and flattens each attribute set with
//!   [`AttributeSet::to_properties`].
//!
//! Tags must nest strictly: `</i>` must close the innermost open tag, and all
//! tags must be closed by the end of input. Tags missing from the registry
//! still open and close, but change nothing.
//!
//! # Usage
//!
//! ```
//! use tagstyle::{AttributeSet, Font, StyledText, TagRegistry};
//!
//! let mut registry = TagRegistry::new();
//! registry.set_default(AttributeSet::new().with_font(Font::new("Regular", 12.0)));
//! registry.add_style("b", Font::new("Bold", 12.0));
//!
//! let styled = StyledText::parse("Hello <b>World</b>!", &registry).unwrap();
//! assert_eq!(styled.text(), "Hello World!");
//!
//! let fonts: Vec<_> = styled
//!     .runs()
//!     .iter()
//!     .map(|run| run.attributes.font.as_ref().unwrap().family.as_str())
//!     .collect();
//! assert_eq!(fonts, ["Regular", "Bold", "Regular"]);
//! ```
//!
//! Registries can also be configured from a stylesheet; see [`sheet`].

pub mod attributes;
pub mod color;
pub mod error;
pub mod markup;
pub mod parser;
pub mod properties;
pub mod registry;
pub mod run;
pub mod sheet;

// Re-export main types at crate root
pub use attributes::{AttributeSet, Fields, Font, ParagraphStyle, TextAlignment};
pub use color::Color;
pub use error::{ColorParseError, ParseError, SheetError};
pub use markup::StyledText;
pub use parser::parse;
pub use properties::{PropertyKey, PropertyMap, PropertyValue};
pub use registry::TagRegistry;
pub use run::Run;
pub use sheet::{Stylesheet, parse_stylesheet};
