//! CSS selector construction per [Selectors Level 4](https://www.w3.org/TR/selectors-4/).
//!
//! # Scope
//!
//! This crate builds selector *strings* from composable parts:
//! - **Fragments** — type, id, class, attribute, pseudo-class, and
//!   pseudo-element components, each rendered with its CSS punctuation
//!   (`#`, `.`, `[...]`, `:`, `::`) at append time
//! - **Combinators** ([§ 16](https://www.w3.org/TR/selectors-4/#combinators)) —
//!   descendant, child (`>`), next-sibling (`+`), subsequent-sibling (`~`),
//!   or any raw token
//! - **Structural enforcement** — at most one type, id, and pseudo-element
//!   fragment per selector, and compound-internal ordering per
//!   [§ 4.1](https://www.w3.org/TR/selectors-4/#structure)
//!
//! # Not in scope
//!
//! - Parsing selector strings back into structured form
//! - Matching selectors against a document tree
//! - Validating fragment values against the CSS identifier grammar
//!
//! # Example
//!
//! ```
//! use bilby_selector::{combine, element, id};
//!
//! let link = element("a")
//!     .attr(r#"href$=".png""#)
//!     .and_then(|s| s.pseudo_class("focus"))
//!     .unwrap();
//! assert_eq!(link.to_css(), r#"a[href$=".png"]:focus"#);
//!
//! let scoped = combine(id("gallery"), ">", link);
//! assert_eq!(scoped.to_css(), r#"#gallery > a[href$=".png"]:focus"#);
//! ```

/// The selector accumulator, its fluent API, and the factory functions.
pub mod builder;
/// Standard combinators per [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators).
pub mod combinator;
/// Errors raised on structurally invalid fragment appends.
pub mod error;
/// Fragment kinds, their ordering table, and rendering.
pub mod fragment;

// Re-exports for convenience
pub use builder::{
    Selector, SelectorPart, attr, class, combine, element, fragment, id, pseudo_class,
    pseudo_element,
};
pub use combinator::Combinator;
pub use error::SelectorError;
pub use fragment::{Fragment, FragmentKind};
