//! Crate error type.
//!
//! Transformation itself is total: every rule produces output for any
//! attribute/children shape. The only fallible step is turning input text
//! into an element tree.

use thiserror::Error;

/// Errors surfaced by [`Trestle::render`](crate::Trestle::render).
#[derive(Debug, Error)]
pub enum Error {
    /// The markup could not be read as an element tree.
    #[error("markup parse error at byte {position}")]
    Parse {
        position: u64,
        #[source]
        source: quick_xml::Error,
    },
}
