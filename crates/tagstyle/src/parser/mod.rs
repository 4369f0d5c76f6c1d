//! Parser for tag markup.
//!
//! This module contains the lexer and the main markup parser.

mod lexer;
mod markup;

pub use lexer::{Lexeme, Lexer, Token};
pub use markup::parse;
