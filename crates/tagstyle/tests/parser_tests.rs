//! Comprehensive tests for the tag markup parser.

use std::sync::Arc;

use tagstyle::{AttributeSet, Color, Font, ParseError, StyledText, TagRegistry};

fn regular() -> Font {
    Font::new("Regular", 12.0)
}

fn bold() -> Font {
    Font::new("Bold", 12.0)
}

fn registry() -> TagRegistry {
    let mut registry = TagRegistry::new().with_default(AttributeSet::new().with_font(regular()));
    registry.add_style("b", bold());
    registry
}

fn texts<'a>(styled: &StyledText<'a>) -> Vec<&'a str> {
    styled.runs().iter().map(|run| run.text).collect()
}

/// One line per run: the quoted text, then its attributes.
fn listing(styled: &StyledText<'_>) -> String {
    styled
        .runs()
        .iter()
        .map(|run| format!("{:?} {}", run.text, run.attributes))
        .collect::<Vec<_>>()
        .join("\n")
}

// ============================================================================
// Basic Parsing
// ============================================================================

#[test]
fn parse_hello_world() {
    let styled = StyledText::parse("Hello <b>World</b>!", &registry()).unwrap();
    insta::assert_snapshot!(listing(&styled), @r#"
"Hello " {font: Regular 12}
"World" {font: Bold 12}
"!" {font: Regular 12}
"#);
}

#[test]
fn parse_plain_text_is_one_default_run() {
    let registry = registry();
    let styled = StyledText::parse("No tags at all.", &registry).unwrap();
    assert_eq!(styled.runs().len(), 1);
    assert_eq!(styled.runs()[0].text, "No tags at all.");
    assert_eq!(*styled.runs()[0].attributes, *registry.default_attributes());
}

#[test]
fn parse_empty_string() {
    let styled = StyledText::parse("", &registry()).unwrap();
    assert!(styled.is_empty());
    assert_eq!(styled.text(), "");
}

#[test]
fn parse_whitespace_only() {
    let styled = StyledText::parse("   ", &registry()).unwrap();
    assert_eq!(texts(&styled), ["   "]);
}

// ============================================================================
// Concatenation
// ============================================================================

#[test]
fn runs_concatenate_to_stripped_markup() {
    let registry = registry();
    let cases = [
        ("Hello <b>World</b>!", "Hello World!"),
        ("<b>a</b><b>b</b>", "ab"),
        ("<x><b>deep</b> <y>er</y></x>", "deep er"),
        ("1 < 2 and 3 > 2", "1 < 2 and 3 > 2"),
        ("<b>日本語</b> and émoji 🎉", "日本語 and émoji 🎉"),
        ("<b></b><x></x>", ""),
    ];

    for (markup, expected) in cases {
        let styled = StyledText::parse(markup, &registry).unwrap();
        assert_eq!(styled.text(), expected, "markup: {}", markup);
        assert_eq!(styled.text_len(), expected.len());
        for run in styled.runs() {
            assert_eq!(&markup[run.range.clone()], run.text);
        }
    }
}

#[test]
fn runs_are_ordered_and_non_overlapping() {
    let styled = StyledText::parse("a<b>b<x>c</x>d</b>e", &registry()).unwrap();
    let ranges: Vec<_> = styled.runs().iter().map(|r| r.range.clone()).collect();
    for pair in ranges.windows(2) {
        assert!(pair[0].end <= pair[1].start);
    }
    assert_eq!(texts(&styled), ["a", "b", "c", "d", "e"]);
}

// ============================================================================
// Attribute Resolution
// ============================================================================

#[test]
fn override_wins_inside_tag() {
    let mut registry =
        TagRegistry::new().with_default(AttributeSet::new().with_underline(false));
    registry.set_attributes("u", AttributeSet::new().with_underline(true));

    let styled = StyledText::parse("off <u>on</u> off", &registry).unwrap();
    let underline: Vec<_> = styled
        .runs()
        .iter()
        .map(|r| r.attributes.underline)
        .collect();
    assert_eq!(underline, [Some(false), Some(true), Some(false)]);
}

#[test]
fn disjoint_fields_merge_additively() {
    let mut registry = TagRegistry::new();
    registry.set_attributes("A", AttributeSet::new().with_font(bold()));
    registry.set_attributes("B", AttributeSet::new().with_text_color(Color::rgb8(255, 0, 0)));

    let styled = StyledText::parse("<A><B>x</B></A>", &registry).unwrap();
    let attrs = &styled.runs()[0].attributes;
    assert_eq!(attrs.font, Some(bold()));
    assert_eq!(attrs.text_color, Some(Color::rgb8(255, 0, 0)));
}

#[test]
fn inner_tag_wins() {
    let mut registry = TagRegistry::new();
    registry.set_attributes("A", AttributeSet::new().with_font(Font::new("F1", 12.0)));
    registry.set_attributes("B", AttributeSet::new().with_font(Font::new("F2", 12.0)));

    let styled = StyledText::parse("<A>a<B>b</B>a</A>", &registry).unwrap();
    let fonts: Vec<_> = styled
        .runs()
        .iter()
        .map(|r| r.attributes.font.clone().unwrap().family)
        .collect();
    assert_eq!(fonts, ["F1", "F2", "F1"]);
}

#[test]
fn explicit_false_overrides_inherited_true() {
    let mut registry = TagRegistry::new();
    registry.set_attributes("s", AttributeSet::new().with_strikethrough(true));
    registry.set_attributes("plain", AttributeSet::new().with_strikethrough(false));

    let styled = StyledText::parse("<s>a<plain>b</plain></s>", &registry).unwrap();
    assert_eq!(styled.runs()[0].attributes.strikethrough, Some(true));
    assert_eq!(styled.runs()[1].attributes.strikethrough, Some(false));
}

#[test]
fn nested_resolution_snapshot() {
    let mut registry = TagRegistry::new().with_default(
        AttributeSet::new()
            .with_font(regular())
            .with_text_color(Color::BLACK),
    );
    registry.add_style("b", bold());
    registry.set_attributes(
        "hl",
        AttributeSet::new()
            .with_background_color(Color::rgb8(255, 255, 0))
            .with_underline(true),
    );

    let styled = StyledText::parse("a <hl>b <b>c</b></hl> d", &registry).unwrap();
    insta::assert_snapshot!(listing(&styled), @r#"
"a " {font: Regular 12, text_color: #000000}
"b " {font: Regular 12, text_color: #000000, background_color: #ffff00, underline: true}
"c" {font: Bold 12, text_color: #000000, background_color: #ffff00, underline: true}
" d" {font: Regular 12, text_color: #000000}
"#);
}

// ============================================================================
// Unknown Tags
// ============================================================================

#[test]
fn unknown_tag_groups_without_styling() {
    let registry = registry();
    let styled = StyledText::parse("a<span>b</span>c", &registry).unwrap();
    assert_eq!(texts(&styled), ["a", "b", "c"]);
    for run in styled.runs() {
        assert_eq!(*run.attributes, *registry.default_attributes());
    }
}

#[test]
fn unknown_tag_must_still_nest() {
    let err = StyledText::parse("<span>a</b>", &registry()).unwrap_err();
    assert_eq!(err, ParseError::UnmatchedCloseTag("b".into(), 7));
}

#[test]
fn unknown_tag_inside_known_keeps_parent_attributes() {
    let styled = StyledText::parse("<b>a<span>b</span></b>", &registry()).unwrap();
    let runs = styled.runs();
    assert_eq!(runs[1].attributes.font, Some(bold()));
    assert!(Arc::ptr_eq(&runs[0].attributes, &runs[1].attributes));
}

#[test]
fn tag_names_are_case_sensitive() {
    let styled = StyledText::parse("<B>x</B>", &registry()).unwrap();
    assert_eq!(styled.runs()[0].attributes.font, Some(regular()));
}

// ============================================================================
// Redundant Nesting
// ============================================================================

#[test]
fn identical_nested_tags_are_legal() {
    let styled = StyledText::parse("<b><b>text</b></b>", &registry()).unwrap();
    assert_eq!(texts(&styled), ["text"]);
    assert_eq!(styled.runs()[0].attributes.font, Some(bold()));
}

#[test]
fn identical_nested_tags_close_in_order() {
    let err = StyledText::parse("<b><b>text</b>", &registry()).unwrap_err();
    assert_eq!(err, ParseError::UnclosedTag("b".into(), 0));
}

#[test]
fn reregistering_same_attributes_is_idempotent() {
    let once = registry();
    let mut twice = registry();
    twice.add_style("b", bold());

    let markup = "x <b>y</b> z";
    let a = StyledText::parse(markup, &once).unwrap();
    let b = StyledText::parse(markup, &twice).unwrap();
    assert_eq!(a, b);
}

// ============================================================================
// Empty Runs
// ============================================================================

#[test]
fn empty_tag_pair_emits_no_run() {
    let styled = StyledText::parse("<b></b>text", &registry()).unwrap();
    assert_eq!(texts(&styled), ["text"]);
    assert_eq!(styled.runs()[0].attributes.font, Some(regular()));
}

#[test]
fn adjacent_boundaries_emit_no_empty_runs() {
    let styled = StyledText::parse("<b><x></x></b><b>a</b>", &registry()).unwrap();
    assert_eq!(texts(&styled), ["a"]);
    assert!(styled.runs().iter().all(|run| !run.is_empty()));
}

// ============================================================================
// Literal Angle Brackets
// ============================================================================

#[test]
fn non_tag_brackets_are_text() {
    let styled = StyledText::parse("if a < b <b>and</b> c > d", &registry()).unwrap();
    assert_eq!(texts(&styled), ["if a < b ", "and", " c > d"]);
}

#[test]
fn malformed_tag_syntax_is_text() {
    let styled = StyledText::parse("<> </> <1> <b", &registry()).unwrap();
    assert_eq!(texts(&styled), ["<> </> <1> <b"]);
}

// ============================================================================
// Error Cases
// ============================================================================

#[test]
fn mismatched_close_tag() {
    let err = StyledText::parse("<b>x</i>", &registry()).unwrap_err();
    assert_eq!(err, ParseError::UnmatchedCloseTag("i".into(), 4));
    assert_eq!(err.tag(), "i");
    assert_eq!(err.offset(), 4);
}

#[test]
fn unclosed_tag_at_end() {
    let err = StyledText::parse("<b>x", &registry()).unwrap_err();
    assert_eq!(err, ParseError::UnclosedTag("b".into(), 0));
}

#[test]
fn overlapping_tags_are_rejected() {
    let err = StyledText::parse("<b><i>x</b>y</i>", &registry()).unwrap_err();
    assert_eq!(err, ParseError::UnmatchedCloseTag("b".into(), 7));
}

#[test]
fn close_tag_with_nothing_open() {
    let err = StyledText::parse("text</b>", &registry()).unwrap_err();
    assert_eq!(err, ParseError::UnmatchedCloseTag("b".into(), 4));
}

#[test]
fn failed_parse_leaves_registry_untouched() {
    let registry = registry();
    let before = registry.clone();
    assert!(StyledText::parse("<b>oops", &registry).is_err());
    assert_eq!(registry.default_attributes(), before.default_attributes());
    assert_eq!(registry.attributes_for("b"), before.attributes_for("b"));
    assert_eq!(registry.len(), before.len());
}

#[test]
fn error_offsets_are_byte_offsets() {
    let err = StyledText::parse("日本<b>x</i>", &registry()).unwrap_err();
    // "日本" is six bytes, "<b>x" four more.
    assert_eq!(err.offset(), 10);
}

// ============================================================================
// attributes_at
// ============================================================================

#[test]
fn attributes_at_plain_text_offsets() {
    let styled = StyledText::parse("Hello <b>World</b>", &registry()).unwrap();
    assert_eq!(styled.attributes_at(0).unwrap().font, Some(regular()));
    assert_eq!(styled.attributes_at(6).unwrap().font, Some(bold()));
    assert!(styled.attributes_at(11).is_none());
}

// ============================================================================
// Sharing Across Threads
// ============================================================================

#[test]
fn runs_can_be_sent_to_other_threads() {
    let registry = registry();
    let styled = StyledText::parse("a <b>b</b>", &registry).unwrap();
    let attributes: Vec<Arc<AttributeSet>> =
        styled.runs().iter().map(|r| Arc::clone(&r.attributes)).collect();

    let fonts = std::thread::spawn(move || {
        attributes
            .iter()
            .map(|a| a.font.clone().unwrap().family)
            .collect::<Vec<_>>()
    })
    .join()
    .unwrap();
    assert_eq!(fonts, ["Regular", "Bold"]);
}
