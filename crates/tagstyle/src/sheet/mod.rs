//! Stylesheets for configuring a [`TagRegistry`](crate::TagRegistry).
//!
//! A stylesheet is a list of rules. Each rule names one or more selectors and
//! a block of declarations:
//!
//! ```text
//! /* default attributes */
//! * { font: "Helvetica" 14; color: #333333; }
//!
//! b, strong { font: "Helvetica-Bold" 14; }
//! em { underline: true; kern: 1.5; }
//! quote { text-align: justify; paragraph-spacing: 34; first-line-indent: 10; }
//! ```
//!
//! `*` selects the default attributes; any other name selects a tag.
//!
//! ## Properties
//!
//! | property | value |
//! |---|---|
//! | `font` | `"<family>" <size>` or `<family> <size>` |
//! | `color`, `background`, `outline-color`, `shadow-color` | color |
//! | `strikethrough`, `underline`, `ligatures` | `true` / `false` |
//! | `kern`, `outline-width`, `shadow-blur` | number |
//! | `shadow-offset` | `<x> <y>` |
//! | `text-align` | `left`, `center`, `right`, `justify`, `natural` |
//! | `line-spacing`, `paragraph-spacing`, `first-line-indent`, `head-indent`, `tail-indent` | number |
//!
//! Rules that share a selector cascade: later declarations win property by
//! property, paragraph properties included. Comments may appear anywhere
//! whitespace can, including inside a value. Unknown properties are skipped
//! with a warning.

pub mod values;

use nom::{
    IResult,
    branch::alt,
    bytes::complete::{tag, take_until, take_while, take_while1},
    character::complete::{char, multispace1, satisfy},
    combinator::{map, opt, recognize, value},
    multi::{many0, many1, separated_list1},
    sequence::{delimited, pair, preceded, tuple},
};

use crate::attributes::{AttributeSet, ParagraphStyle, TextAlignment};
use crate::error::SheetError;

/// What a rule applies to.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Selector {
    /// `*`: the registry's default attributes.
    Default,
    /// A tag name.
    Tag(String),
}

/// A rule: selectors and the attributes their block declares.
///
/// `attributes.paragraph_style` is built from `paragraph`, which keeps the
/// paragraph properties the block actually declared.
#[derive(Clone, Debug, PartialEq)]
pub struct Rule {
    pub selectors: Vec<Selector>,
    pub attributes: AttributeSet,
    pub paragraph: ParagraphDeclarations,
}

/// Paragraph properties declared in a block, each present or absent.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParagraphDeclarations {
    pub alignment: Option<TextAlignment>,
    pub line_spacing: Option<f64>,
    pub paragraph_spacing: Option<f64>,
    pub first_line_head_indent: Option<f64>,
    pub head_indent: Option<f64>,
    pub tail_indent: Option<f64>,
}

impl ParagraphDeclarations {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Field-wise cascade: `later` wins wherever it declares a property.
    pub fn cascade(&self, later: &Self) -> Self {
        Self {
            alignment: later.alignment.or(self.alignment),
            line_spacing: later.line_spacing.or(self.line_spacing),
            paragraph_spacing: later.paragraph_spacing.or(self.paragraph_spacing),
            first_line_head_indent: later.first_line_head_indent.or(self.first_line_head_indent),
            head_indent: later.head_indent.or(self.head_indent),
            tail_indent: later.tail_indent.or(self.tail_indent),
        }
    }

    /// The paragraph style these declarations describe, with undeclared
    /// properties at their defaults. `None` if nothing was declared.
    pub fn to_style(&self) -> Option<ParagraphStyle> {
        if self.is_empty() {
            return None;
        }

        let defaults = ParagraphStyle::default();
        Some(ParagraphStyle {
            alignment: self.alignment.unwrap_or(defaults.alignment),
            line_spacing: self.line_spacing.unwrap_or(defaults.line_spacing),
            paragraph_spacing: self.paragraph_spacing.unwrap_or(defaults.paragraph_spacing),
            first_line_head_indent: self
                .first_line_head_indent
                .unwrap_or(defaults.first_line_head_indent),
            head_indent: self.head_indent.unwrap_or(defaults.head_indent),
            tail_indent: self.tail_indent.unwrap_or(defaults.tail_indent),
        })
    }
}

/// A parsed stylesheet.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Stylesheet {
    pub rules: Vec<Rule>,
}

impl Stylesheet {
    /// One attribute set per selector, in order of first appearance.
    ///
    /// When several rules name the same selector, later declarations merge
    /// over earlier ones. Paragraph properties cascade individually, so
    /// `quote { text-align: justify; } quote { head-indent: 5; }` keeps both.
    pub fn resolved(&self) -> Vec<(Selector, AttributeSet)> {
        let mut resolved: Vec<(Selector, AttributeSet, ParagraphDeclarations)> = Vec::new();
        for rule in &self.rules {
            for selector in &rule.selectors {
                match resolved.iter().position(|(s, _, _)| s == selector) {
                    Some(i) => {
                        let (_, attributes, paragraph) = &mut resolved[i];
                        *attributes = attributes.merge(&rule.attributes);
                        *paragraph = paragraph.cascade(&rule.paragraph);
                    }
                    None => resolved.push((
                        selector.clone(),
                        rule.attributes.clone(),
                        rule.paragraph.clone(),
                    )),
                }
            }
        }

        resolved
            .into_iter()
            .map(|(selector, mut attributes, paragraph)| {
                attributes.paragraph_style = paragraph.to_style();
                (selector, attributes)
            })
            .collect()
    }
}

/// A declaration before its value is interpreted.
struct RawDeclaration<'a> {
    property: &'a str,
    /// Trimmed, with comments removed.
    value: String,
}

/// Parses a stylesheet.
///
/// # Examples
///
/// ```
/// use tagstyle::sheet::{parse_stylesheet, Selector};
///
/// let sheet = parse_stylesheet("* { kern: 1; } b, strong { underline: true; }").unwrap();
/// assert_eq!(sheet.rules.len(), 2);
/// assert_eq!(sheet.rules[1].selectors[1], Selector::Tag("strong".to_string()));
/// ```
pub fn parse_stylesheet(source: &str) -> Result<Stylesheet, SheetError> {
    let (remaining, raw_rules) =
        many0(parse_rule)(source).map_err(|e| SheetError::InvalidSyntax(e.to_string()))?;

    let remaining = skip_trivia(remaining);
    if !remaining.is_empty() {
        let line = source[..source.len() - remaining.len()].matches('\n').count() + 1;
        let snippet: String = remaining.chars().take(24).collect();
        return Err(SheetError::InvalidSyntax(format!(
            "unexpected input at line {}: {}",
            line, snippet
        )));
    }

    let rules = raw_rules
        .into_iter()
        .map(|(selectors, declarations)| {
            let (attributes, paragraph) = build_attributes(&declarations)?;
            Ok(Rule {
                selectors,
                attributes,
                paragraph,
            })
        })
        .collect::<Result<Vec<_>, SheetError>>()?;

    Ok(Stylesheet { rules })
}

/// Turn a rule's declarations into an attribute set.
fn build_attributes(
    declarations: &[RawDeclaration<'_>],
) -> Result<(AttributeSet, ParagraphDeclarations), SheetError> {
    let mut attributes = AttributeSet::new();
    let mut paragraph = ParagraphDeclarations::default();

    for declaration in declarations {
        let (property, value) = (declaration.property, declaration.value.as_str());
        let invalid = || SheetError::InvalidValue {
            property: property.to_string(),
            value: value.to_string(),
        };

        match property {
            "font" => attributes.font = Some(values::font(value).ok_or_else(invalid)?),
            "color" => attributes.text_color = Some(values::color(value).ok_or_else(invalid)?),
            "background" => {
                attributes.background_color = Some(values::color(value).ok_or_else(invalid)?)
            }
            "strikethrough" => {
                attributes.strikethrough = Some(values::boolean(value).ok_or_else(invalid)?)
            }
            "underline" => attributes.underline = Some(values::boolean(value).ok_or_else(invalid)?),
            "ligatures" => attributes.ligatures = Some(values::boolean(value).ok_or_else(invalid)?),
            "kern" => attributes.kern = Some(values::number(value).ok_or_else(invalid)?),
            "outline-color" => {
                attributes.outline_color = Some(values::color(value).ok_or_else(invalid)?)
            }
            "outline-width" => {
                attributes.outline_width = Some(values::number(value).ok_or_else(invalid)?)
            }
            "shadow-blur" => {
                attributes.shadow_blur_radius = Some(values::number(value).ok_or_else(invalid)?)
            }
            "shadow-color" => {
                attributes.shadow_color = Some(values::color(value).ok_or_else(invalid)?)
            }
            "shadow-offset" => {
                attributes.shadow_offset = Some(values::offset(value).ok_or_else(invalid)?)
            }

            // Paragraph properties
            "text-align" => {
                paragraph.alignment = Some(values::alignment(value).ok_or_else(invalid)?)
            }
            "line-spacing" => {
                paragraph.line_spacing = Some(values::number(value).ok_or_else(invalid)?)
            }
            "paragraph-spacing" => {
                paragraph.paragraph_spacing = Some(values::number(value).ok_or_else(invalid)?)
            }
            "first-line-indent" => {
                paragraph.first_line_head_indent = Some(values::number(value).ok_or_else(invalid)?)
            }
            "head-indent" => {
                paragraph.head_indent = Some(values::number(value).ok_or_else(invalid)?)
            }
            "tail-indent" => {
                paragraph.tail_indent = Some(values::number(value).ok_or_else(invalid)?)
            }

            _ => log::warn!("stylesheet: unknown property `{}` skipped", property),
        }
    }

    attributes.paragraph_style = paragraph.to_style();
    Ok((attributes, paragraph))
}

fn comment(input: &str) -> IResult<&str, &str> {
    delimited(tag("/*"), take_until("*/"), tag("*/"))(input)
}

/// Whitespace and `/* ... */` comments.
fn trivia(input: &str) -> IResult<&str, ()> {
    value((), many0(alt((value((), multispace1), value((), comment)))))(input)
}

fn skip_trivia(input: &str) -> &str {
    trivia(input).map(|(rest, _)| rest).unwrap_or(input)
}

/// A tag name, using the same grammar as the markup lexer.
fn parse_tag_name(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        satisfy(|c| c.is_ascii_alphabetic()),
        take_while(|c: char| c.is_ascii_alphanumeric() || c == '_' || c == '-'),
    ))(input)
}

fn parse_selector(input: &str) -> IResult<&str, Selector> {
    alt((
        map(char('*'), |_| Selector::Default),
        map(parse_tag_name, |name| Selector::Tag(name.to_string())),
    ))(input)
}

fn parse_selector_list(input: &str) -> IResult<&str, Vec<Selector>> {
    separated_list1(tuple((trivia, char(','), trivia)), parse_selector)(input)
}

/// Parses `property: value;`. The semicolon is optional before `}`.
fn parse_declaration(input: &str) -> IResult<&str, RawDeclaration<'_>> {
    let (input, _) = trivia(input)?;
    let (input, property) =
        take_while1(|c: char| c.is_ascii_alphanumeric() || c == '-')(input)?;
    let (input, _) = tuple((trivia, char(':'), trivia))(input)?;
    let (input, pieces) = many1(alt((
        map(comment, |_| ""),
        take_while1(|c: char| c != ';' && c != '}' && c != '/'),
        tag("/"),
    )))(input)?;
    let (input, _) = opt(preceded(trivia, char(';')))(input)?;

    Ok((
        input,
        RawDeclaration {
            property,
            value: pieces.concat().trim().to_string(),
        },
    ))
}

/// Parses `selectors { declarations }`.
fn parse_rule(input: &str) -> IResult<&str, (Vec<Selector>, Vec<RawDeclaration<'_>>)> {
    let (input, _) = trivia(input)?;
    let (input, selectors) = parse_selector_list(input)?;
    let (input, _) = trivia(input)?;
    let (input, declarations) = delimited(
        char('{'),
        many0(parse_declaration),
        preceded(trivia, char('}')),
    )(input)?;

    Ok((input, (selectors, declarations)))
}
