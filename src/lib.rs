//! Styled text from lightweight tag markup.
//!
//! This crate re-exports the [`tagstyle`] core and adds the pieces an
//! application needs around it: loading stylesheets from disk, a file logger,
//! and a process-wide [`shared`] registry.
//!
//! ```no_run
//! use tagstyle_rs::StyledText;
//!
//! fn main() -> tagstyle_rs::Result<()> {
//!     tagstyle_rs::init_logger("tagstyle.log")?;
//!     let registry = tagstyle_rs::load_stylesheet("styles.tss")?;
//!
//!     let styled = StyledText::parse("Hello <b>World</b>!", &registry)?;
//!     for run in &styled {
//!         println!("{:?} {}", run.text, run.attributes);
//!     }
//!     Ok(())
//! }
//! ```

pub mod error;
mod log_init;
pub mod shared;

use std::path::Path;

pub use error::{Result, TagstyleError};
pub use log;
pub use log_init::init_logger;
pub use tagstyle::*;

/// Reads a stylesheet file and builds a registry from it.
pub fn load_stylesheet(path: impl AsRef<Path>) -> Result<TagRegistry> {
    let source = std::fs::read_to_string(path)?;
    Ok(TagRegistry::from_stylesheet(&source)?)
}
