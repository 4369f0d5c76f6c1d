//! Run type for styled text output.

use std::ops::Range;
use std::sync::Arc;

use crate::attributes::AttributeSet;
use crate::properties::PropertyMap;

/// A contiguous span of text with its fully resolved attributes.
///
/// `text` borrows from the markup input and `range` is its byte range there.
/// Runs produced under the same nesting frame share one attribute set.
#[derive(Clone, Debug, PartialEq)]
pub struct Run<'a> {
    pub text: &'a str,
    pub range: Range<usize>,
    pub attributes: Arc<AttributeSet>,
}

impl<'a> Run<'a> {
    /// Length of the text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false for runs produced by the parser.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Flatten the attributes for a renderer.
    pub fn properties(&self) -> PropertyMap {
        self.attributes.to_properties()
    }
}
