//! trestle - email template compiler.
//!
//! Converts documents written with semantic custom elements (`<row>`,
//! `<button>`, `<menu>`, `<accordion>`, `<spacer>`, ...) into the deeply
//! nested `<table>` markup email clients actually render, conditional-
//! comment guards for Outlook included.
//!
//! ```
//! use trestle::Trestle;
//!
//! let engine = Trestle::new();
//! let html = engine.render("<callout>Ship it</callout>").unwrap();
//! assert!(html.starts_with("<table class=\"callout\">"));
//! ```
//!
//! The engine is a single-pass, post-order string composer: children are
//! transformed to final HTML before their parent's rule runs. It does not
//! validate input, does not sanitize attribute values (see
//! [`Options::escape_attributes`] for the opt-in strict mode), and treats
//! `<raw>` blocks as opaque bytes.

pub mod component;
pub mod config;
pub mod dom;
mod engine;
mod error;
mod raw;

pub use config::{Components, Options};
pub use engine::Trestle;
pub use error::Error;
