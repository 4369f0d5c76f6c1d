//! StyledText result type.
//!
//! This is the result of parsing tag markup.

use std::slice;

use crate::attributes::AttributeSet;
use crate::error::ParseError;
use crate::registry::TagRegistry;
use crate::run::Run;

/// The result of parsing tag markup.
///
/// Holds the ordered runs. Their texts concatenate to the markup with all tag
/// syntax removed.
///
/// # Examples
///
/// ```
/// use tagstyle::{Font, StyledText, TagRegistry};
///
/// let mut registry = TagRegistry::new();
/// registry.add_style("b", Font::new("Bold", 12.0));
///
/// let styled = StyledText::parse("Hello <b>World</b>", &registry).unwrap();
/// assert_eq!(styled.text(), "Hello World");
/// assert_eq!(styled.runs().len(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyledText<'a> {
    /// The markup the runs were parsed from.
    source: &'a str,
    runs: Vec<Run<'a>>,
}

impl<'a> StyledText<'a> {
    /// Create a StyledText from already-resolved runs.
    pub fn new(source: &'a str, runs: Vec<Run<'a>>) -> Self {
        Self { source, runs }
    }

    /// Parse markup against a registry.
    pub fn parse(input: &'a str, registry: &TagRegistry) -> Result<Self, ParseError> {
        crate::parser::parse(input, registry)
    }

    /// The markup input.
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Get all runs.
    pub fn runs(&self) -> &[Run<'a>] {
        &self.runs
    }

    pub fn into_runs(self) -> Vec<Run<'a>> {
        self.runs
    }

    pub fn iter(&self) -> slice::Iter<'_, Run<'a>> {
        self.runs.iter()
    }

    /// Plain text with all markup stripped.
    pub fn text(&self) -> String {
        self.runs.iter().map(|run| run.text).collect()
    }

    /// Length of the plain text in bytes.
    pub fn text_len(&self) -> usize {
        self.runs.iter().map(Run::len).sum()
    }

    /// Returns true if there is no text at all.
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Attributes in effect at a byte offset of the plain text.
    ///
    /// Returns `None` past the end of the text.
    pub fn attributes_at(&self, offset: usize) -> Option<&AttributeSet> {
        let mut start = 0;
        for run in &self.runs {
            let end = start + run.len();
            if offset < end {
                return Some(&run.attributes);
            }
            start = end;
        }
        None
    }
}

impl<'s, 'a> IntoIterator for &'s StyledText<'a> {
    type Item = &'s Run<'a>;
    type IntoIter = slice::Iter<'s, Run<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.runs.iter()
    }
}

impl<'a> IntoIterator for StyledText<'a> {
    type Item = Run<'a>;
    type IntoIter = std::vec::IntoIter<Run<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.runs.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    fn run<'a>(text: &'a str, start: usize, kern: f64) -> Run<'a> {
        Run {
            text,
            range: start..start + text.len(),
            attributes: Arc::new(AttributeSet::new().with_kern(kern)),
        }
    }

    #[test]
    fn empty_styled_text() {
        let styled = StyledText::default();
        assert!(styled.is_empty());
        assert_eq!(styled.text(), "");
        assert_eq!(styled.text_len(), 0);
        assert!(styled.attributes_at(0).is_none());
    }

    #[test]
    fn attributes_at_offsets() {
        let source = "Hello <x>World</x>";
        let styled = StyledText::new(source, vec![run("Hello ", 0, 1.0), run("World", 9, 2.0)]);

        assert_eq!(styled.text(), "Hello World");
        assert_eq!(styled.text_len(), 11);
        assert_eq!(styled.attributes_at(0).unwrap().kern, Some(1.0));
        assert_eq!(styled.attributes_at(5).unwrap().kern, Some(1.0));
        assert_eq!(styled.attributes_at(6).unwrap().kern, Some(2.0));
        assert_eq!(styled.attributes_at(10).unwrap().kern, Some(2.0));
        assert!(styled.attributes_at(11).is_none());
    }

    #[test]
    fn iterate_runs() {
        let styled = StyledText::new("ab", vec![run("a", 0, 1.0), run("b", 1, 2.0)]);
        let texts: Vec<_> = (&styled).into_iter().map(|r| r.text).collect();
        assert_eq!(texts, ["a", "b"]);
        assert_eq!(styled.source(), "ab");

        let owned: Vec<_> = styled.into_iter().collect();
        assert_eq!(owned.len(), 2);
    }
}
