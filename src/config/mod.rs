//! Engine configuration.
//!
//! `Options` is serde-friendly so a host application can embed it in its own
//! config file. Every field has a default; an empty table gives the stock
//! engine.
//!
//! # Example
//!
//! ```toml
//! column-count = 12
//! escape-attributes = false
//!
//! [components]
//! menu-item = "item"
//! custom = ["panel"]
//! ```

mod components;

pub use components::Components;

use serde::{Deserialize, Serialize};

/// Engine options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Options {
    /// Number of grid columns a row is divided into.
    pub column_count: usize,

    /// Entity-escape attribute values before interpolating them into output
    /// markup.
    ///
    /// Off by default: templates are trusted-author input and values pass
    /// through verbatim, `"` and `<` included. Turn this on to get strict
    /// output for testing.
    pub escape_attributes: bool,

    /// Tag-identity table mapping markup tags to component kinds.
    pub components: Components,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            column_count: 12,
            escape_attributes: false,
            components: Components::default(),
        }
    }
}
