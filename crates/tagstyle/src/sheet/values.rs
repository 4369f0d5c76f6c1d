//! Value parsing for stylesheet properties.
//!
//! Each parser takes the full, trimmed value text of a declaration and
//! returns `None` if it does not form a valid value.

use nom::{
    IResult,
    branch::alt,
    bytes::complete::{tag, take_until, take_while1},
    character::complete::{char, digit1, multispace1},
    combinator::{all_consuming, map, map_res, opt, recognize},
    sequence::{delimited, pair, separated_pair, tuple},
};

use crate::attributes::{Font, TextAlignment};
use crate::color::Color;

/// Parse a floating point or integer number.
fn parse_number(input: &str) -> IResult<&str, f64> {
    map_res(
        recognize(tuple((
            opt(char('-')),
            digit1,
            opt(pair(char('.'), digit1)),
        ))),
        |s: &str| s.parse::<f64>(),
    )(input)
}

/// A font family: quoted (may contain spaces) or a bare word. A bare word
/// cannot contain `"`, so an unterminated quote is rejected.
fn parse_family(input: &str) -> IResult<&str, &str> {
    alt((
        delimited(char('"'), take_until("\""), char('"')),
        take_while1(|c: char| !c.is_whitespace() && c != '"'),
    ))(input)
}

fn parse_alignment(input: &str) -> IResult<&str, TextAlignment> {
    alt((
        map(tag("natural"), |_| TextAlignment::Natural),
        map(tag("left"), |_| TextAlignment::Left),
        map(tag("center"), |_| TextAlignment::Center),
        map(tag("right"), |_| TextAlignment::Right),
        map(tag("justify"), |_| TextAlignment::Justified),
    ))(input)
}

pub fn number(value: &str) -> Option<f64> {
    all_consuming(parse_number)(value).ok().map(|(_, n)| n)
}

pub fn boolean(value: &str) -> Option<bool> {
    match value {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

pub fn color(value: &str) -> Option<Color> {
    Color::parse(value).ok()
}

/// `"Helvetica Neue" 14` or `Menlo 12`. The size must be positive.
pub fn font(value: &str) -> Option<Font> {
    all_consuming(separated_pair(parse_family, multispace1, parse_number))(value)
        .ok()
        .filter(|(_, (family, size))| !family.is_empty() && *size > 0.0)
        .map(|(_, (family, size))| Font::new(family, size))
}

/// `<x> <y>`.
pub fn offset(value: &str) -> Option<(f64, f64)> {
    all_consuming(separated_pair(parse_number, multispace1, parse_number))(value)
        .ok()
        .map(|(_, pair)| pair)
}

pub fn alignment(value: &str) -> Option<TextAlignment> {
    all_consuming(parse_alignment)(value).ok().map(|(_, a)| a)
}
