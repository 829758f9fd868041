//! The component transformation engine.
//!
//! One rule per component kind. Each rule is a pure function of the element
//! and its already-resolved inner content - the walker has finished the
//! children before a rule runs, so "inner" is always final HTML text. The
//! single exception to purity is the centering rule ([`center`]), which
//! edits its own descendants before its wrapper is re-emitted.
//!
//! Rules never validate: a missing `href` or a non-numeric `size` degrades
//! into markup containing an empty or literal value, never an error.

pub mod attrs;
pub mod center;
pub mod classes;
pub mod column;
pub mod factory;
pub mod spacer;

pub use factory::Factory;

/// The closed set of component kinds.
///
/// `Custom` is the fallback for tags the identity table recognizes but has
/// no dedicated rule for; dispatch over recognized tags is total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentKind {
    HLine,
    Row,
    Columns,
    Button,
    Container,
    Logo,
    BlockGrid,
    Menu,
    MenuItem,
    Center,
    Callout,
    Spacer,
    Wrapper,
    Accordion,
    AccordionItem,
    AccordionHeader,
    AccordionContent,
    Custom,
}
