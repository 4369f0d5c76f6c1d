//! Main markup parser.
//!
//! Combines the lexer with a registry to produce [`StyledText`].

use std::ops::Range;
use std::sync::Arc;

use smallvec::SmallVec;

use crate::attributes::AttributeSet;
use crate::error::ParseError;
use crate::markup::StyledText;
use crate::registry::TagRegistry;
use crate::run::Run;

use super::lexer::{Lexer, Token};

/// Parses tag markup against a registry.
///
/// Returns either the complete run sequence or the first malformation found;
/// never a partial result.
///
/// # Examples
///
/// ```
/// use tagstyle::{AttributeSet, Font, TagRegistry};
/// use tagstyle::parser::parse;
///
/// let mut registry = TagRegistry::new();
/// registry.set_default(AttributeSet::new().with_font(Font::new("Regular", 12.0)));
/// registry.add_style("b", Font::new("Bold", 12.0));
///
/// let styled = parse("Hello <b>World</b>!", &registry).unwrap();
/// let texts: Vec<_> = styled.runs().iter().map(|r| r.text).collect();
/// assert_eq!(texts, ["Hello ", "World", "!"]);
/// ```
pub fn parse<'a>(input: &'a str, registry: &TagRegistry) -> Result<StyledText<'a>, ParseError> {
    match Parser::new(input, registry).run() {
        Ok(runs) => {
            log::trace!("parsed {} runs from {} bytes", runs.len(), input.len());
            Ok(StyledText::new(input, runs))
        }
        Err(err) => {
            log::debug!("markup rejected: {}", err);
            Err(err)
        }
    }
}

/// One level of tag nesting.
#[derive(Clone, Debug)]
struct Frame<'a> {
    /// `None` for the implicit base frame.
    tag: Option<&'a str>,
    /// Byte offset of the opening tag.
    offset: usize,
    /// Effective attributes at this depth.
    attributes: Arc<AttributeSet>,
}

/// The main parser state.
struct Parser<'a, 'r> {
    input: &'a str,
    registry: &'r TagRegistry,
    /// Nesting stack; the bottom frame is the registry default.
    stack: SmallVec<[Frame<'a>; 8]>,
    /// Byte range of text accumulated under the current top frame.
    pending: Option<Range<usize>>,
    runs: Vec<Run<'a>>,
}

impl<'a, 'r> Parser<'a, 'r> {
    fn new(input: &'a str, registry: &'r TagRegistry) -> Self {
        let mut stack = SmallVec::new();
        stack.push(Frame {
            tag: None,
            offset: 0,
            attributes: registry.shared_default(),
        });

        Self {
            input,
            registry,
            stack,
            pending: None,
            runs: Vec::new(),
        }
    }

    fn run(mut self) -> Result<Vec<Run<'a>>, ParseError> {
        for lexeme in Lexer::new(self.input) {
            self.process_token(lexeme.token, lexeme.range)?;
        }
        self.finish()
    }

    fn top(&self) -> &Frame<'a> {
        // The base frame is never popped.
        &self.stack[self.stack.len() - 1]
    }

    /// Process a single token.
    fn process_token(&mut self, token: Token<'a>, range: Range<usize>) -> Result<(), ParseError> {
        match token {
            Token::Text(_) => {
                self.push_text(range);
                Ok(())
            }
            Token::OpenTag(name) => {
                self.open_tag(name, range.start);
                Ok(())
            }
            Token::CloseTag(name) => self.close_tag(name, range.start),
        }
    }

    /// Extend the pending text. Text tokens under one frame are contiguous.
    fn push_text(&mut self, range: Range<usize>) {
        self.pending = Some(match self.pending.take() {
            Some(pending) => pending.start..range.end,
            None => range,
        });
    }

    /// Emit pending text as a run under the current top frame.
    fn flush(&mut self) {
        let Some(range) = self.pending.take() else {
            return;
        };
        if range.is_empty() {
            return;
        }

        let input = self.input;
        let attributes = Arc::clone(&self.top().attributes);
        self.runs.push(Run {
            text: &input[range.clone()],
            range,
            attributes,
        });
    }

    fn open_tag(&mut self, name: &'a str, offset: usize) {
        self.flush();

        let parent = &self.top().attributes;
        let attributes = match self.registry.attributes_for(name) {
            Some(overrides) => Arc::new(parent.merge(overrides)),
            None => {
                log::trace!("<{}> at byte {} is not registered; grouping only", name, offset);
                Arc::clone(parent)
            }
        };

        self.stack.push(Frame {
            tag: Some(name),
            offset,
            attributes,
        });
    }

    fn close_tag(&mut self, name: &'a str, offset: usize) -> Result<(), ParseError> {
        if self.top().tag != Some(name) {
            return Err(ParseError::UnmatchedCloseTag(name.to_string(), offset));
        }

        self.flush();
        self.stack.pop();
        Ok(())
    }

    /// Flush remaining text and check that every tag was closed.
    fn finish(mut self) -> Result<Vec<Run<'a>>, ParseError> {
        if let Some(frame) = self.stack.last() {
            if let Some(tag) = frame.tag {
                return Err(ParseError::UnclosedTag(tag.to_string(), frame.offset));
            }
        }

        self.flush();
        Ok(self.runs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::Font;

    fn registry() -> TagRegistry {
        let mut registry = TagRegistry::new()
            .with_default(AttributeSet::new().with_font(Font::new("Regular", 12.0)));
        registry.add_style("b", Font::new("Bold", 12.0));
        registry
    }

    fn texts<'a>(styled: &StyledText<'a>) -> Vec<&'a str> {
        styled.runs().iter().map(|r| r.text).collect()
    }

    #[test]
    fn parse_plain_text() {
        let registry = registry();
        let styled = parse("Hello World", &registry).unwrap();
        assert_eq!(texts(&styled), ["Hello World"]);
        assert_eq!(*styled.runs()[0].attributes, *registry.default_attributes());
    }

    #[test]
    fn parse_empty_input() {
        let styled = parse("", &registry()).unwrap();
        assert!(styled.runs().is_empty());
    }

    #[test]
    fn runs_carry_source_ranges() {
        let styled = parse("ab<b>cd</b>e", &registry()).unwrap();
        let ranges: Vec<_> = styled.runs().iter().map(|r| r.range.clone()).collect();
        assert_eq!(ranges, vec![0..2, 5..7, 11..12]);
    }

    #[test]
    fn runs_in_one_frame_share_attributes() {
        let styled = parse("a<x>b</x>c", &registry()).unwrap();
        let runs = styled.runs();
        assert_eq!(runs.len(), 3);
        assert!(Arc::ptr_eq(&runs[0].attributes, &runs[1].attributes));
        assert!(Arc::ptr_eq(&runs[0].attributes, &runs[2].attributes));
    }

    #[test]
    fn close_without_open() {
        let err = parse("x</b>", &registry()).unwrap_err();
        assert_eq!(err, ParseError::UnmatchedCloseTag("b".into(), 1));
    }

    #[test]
    fn unclosed_reports_innermost() {
        let err = parse("<b>x<i>y", &registry()).unwrap_err();
        assert_eq!(err, ParseError::UnclosedTag("i".into(), 4));
    }

    #[test]
    fn deep_nesting_spills_stack() {
        let depth = 32;
        let input = format!("{}x{}", "<b>".repeat(depth), "</b>".repeat(depth));
        let styled = parse(&input, &registry()).unwrap();
        assert_eq!(texts(&styled), ["x"]);
        assert_eq!(
            styled.runs()[0].attributes.font,
            Some(Font::new("Bold", 12.0))
        );
    }
}
