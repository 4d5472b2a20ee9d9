//! The selector accumulator and its fluent construction API.
//!
//! [§ 4.3 Complex selectors](https://www.w3.org/TR/selectors-4/#complex)
//!
//! A [`Selector`] is an append-only log of rendered fragments and combinator
//! tokens. Every fluent call takes the selector by value and returns the
//! extended one, so a selector that has been merged into another through
//! [`combine`] cannot be touched again; the borrow checker rules out the
//! shared-sequence bugs an in-place design would invite.

use core::fmt;

use serde::Serialize;

use crate::error::SelectorError;
use crate::fragment::{Fragment, FragmentKind};

/// One entry in the append-order log of a [`Selector`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SelectorPart {
    /// A rendered simple-selector fragment.
    Fragment(Fragment),
    /// A combinator joiner, stored verbatim with its surrounding spaces.
    Combinator(String),
}

/// An accumulating CSS selector.
///
/// Created through the factory functions ([`element`], [`id`], [`class`],
/// [`attr`], [`pseudo_class`], [`pseudo_element`], [`fragment`]) and grown
/// through the fluent methods of the same names. Two structural rules are
/// enforced on every fragment append:
///
/// - element, id, and pseudo-element fragments appear at most once in the
///   whole selector;
/// - within a compound (a run of fragments not separated by a combinator),
///   kinds appear in the order element, id, class, attribute, pseudo-class,
///   pseudo-element.
///
/// Combinator tokens appended through [`combine`] are never validated.
///
/// # Example
///
/// ```
/// use bilby_selector::{combine, element, id};
///
/// let item = element("li").class("active").unwrap();
/// assert_eq!(combine(id("nav"), ">", item).to_css(), "#nav > li.active");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selector {
    /// Fragments and combinator tokens in append order. Sole state.
    parts: Vec<SelectorPart>,
}

impl Selector {
    /// Append one rendered fragment, then re-check both structural rules.
    ///
    /// Uniqueness is checked before ordering so that an append violating
    /// both rules reports the duplicate.
    fn append(mut self, kind: FragmentKind, value: &str) -> Result<Self, SelectorError> {
        self.parts
            .push(SelectorPart::Fragment(Fragment::render(kind, value)));
        self.check_uniqueness()?;
        self.check_order()?;
        Ok(self)
    }

    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    ///
    /// Append a type selector fragment; `name` is used verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::DuplicatePart`] if the selector already
    /// contains a type selector, or [`SelectorError::PartOutOfOrder`] if the
    /// current compound already has a higher-ranked fragment.
    pub fn element(self, name: &str) -> Result<Self, SelectorError> {
        self.append(FragmentKind::Element, name)
    }

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    ///
    /// Append an id fragment, rendered as `#name`.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::DuplicatePart`] if the selector already
    /// contains an id, or [`SelectorError::PartOutOfOrder`] if the current
    /// compound already has a higher-ranked fragment.
    pub fn id(self, name: &str) -> Result<Self, SelectorError> {
        self.append(FragmentKind::Id, name)
    }

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    ///
    /// Append a class fragment, rendered as `.name`. May repeat.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::PartOutOfOrder`] if the current compound
    /// already has a higher-ranked fragment, or
    /// [`SelectorError::DuplicatePart`] if an earlier combine introduced a
    /// duplicate unique fragment.
    pub fn class(self, name: &str) -> Result<Self, SelectorError> {
        self.append(FragmentKind::Class, name)
    }

    /// [§ 6 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    ///
    /// Append an attribute fragment. `body` is the entire condition between
    /// the brackets, inserted verbatim: `attr(r#"href$=".png""#)` renders as
    /// `[href$=".png"]`. May repeat.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::PartOutOfOrder`] if the current compound
    /// already has a higher-ranked fragment, or
    /// [`SelectorError::DuplicatePart`] if an earlier combine introduced a
    /// duplicate unique fragment.
    pub fn attr(self, body: &str) -> Result<Self, SelectorError> {
        self.append(FragmentKind::Attribute, body)
    }

    /// [§ 4 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    ///
    /// Append a pseudo-class fragment, rendered as `:name`. May repeat.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::PartOutOfOrder`] if the current compound
    /// already has a higher-ranked fragment, or
    /// [`SelectorError::DuplicatePart`] if an earlier combine introduced a
    /// duplicate unique fragment.
    pub fn pseudo_class(self, name: &str) -> Result<Self, SelectorError> {
        self.append(FragmentKind::PseudoClass, name)
    }

    /// [§ 11 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
    ///
    /// Append a pseudo-element fragment, rendered as `::name`.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::DuplicatePart`] if the selector already
    /// contains a pseudo-element. Ordering cannot fail here because
    /// pseudo-elements carry the highest rank.
    pub fn pseudo_element(self, name: &str) -> Result<Self, SelectorError> {
        self.append(FragmentKind::PseudoElement, name)
    }

    /// Append a fragment of an arbitrary kind.
    ///
    /// Data-driven counterpart of the six named methods, for callers that
    /// receive the kind at runtime.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::DuplicatePart`] or
    /// [`SelectorError::PartOutOfOrder`] under the same rules as the named
    /// methods.
    pub fn fragment(self, kind: FragmentKind, value: &str) -> Result<Self, SelectorError> {
        self.append(kind, value)
    }

    /// Render the selector to its CSS text.
    ///
    /// Pure concatenation of the append-order log; never fails and may be
    /// called any number of times.
    #[must_use]
    pub fn to_css(&self) -> String {
        self.to_string()
    }

    /// At most one element, id, and pseudo-element in the whole selector.
    fn check_uniqueness(&self) -> Result<(), SelectorError> {
        for kind in [
            FragmentKind::Element,
            FragmentKind::Id,
            FragmentKind::PseudoElement,
        ] {
            let count = self
                .fragments()
                .filter(|fragment| fragment.kind() == kind)
                .count();
            if count > 1 {
                return Err(SelectorError::DuplicatePart { kind });
            }
        }
        Ok(())
    }

    /// Non-decreasing rank within the trailing compound.
    ///
    /// Only the fragments after the last combinator token are examined:
    /// every earlier compound was validated before its combine, and order is
    /// never re-checked across a combine boundary.
    fn check_order(&self) -> Result<(), SelectorError> {
        let compound_start = self
            .parts
            .iter()
            .rposition(|part| matches!(part, SelectorPart::Combinator(_)))
            .map_or(0, |position| position + 1);

        let mut previous: Option<FragmentKind> = None;
        for part in &self.parts[compound_start..] {
            let SelectorPart::Fragment(fragment) = part else {
                continue;
            };
            if let Some(before) = previous
                && fragment.kind().rank() < before.rank()
            {
                return Err(SelectorError::PartOutOfOrder {
                    kind: fragment.kind(),
                    after: before,
                });
            }
            previous = Some(fragment.kind());
        }
        Ok(())
    }

    /// The fragments of the selector in append order, combinators skipped.
    fn fragments(&self) -> impl Iterator<Item = &Fragment> {
        self.parts.iter().filter_map(|part| match part {
            SelectorPart::Fragment(fragment) => Some(fragment),
            SelectorPart::Combinator(_) => None,
        })
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        for part in &self.parts {
            match part {
                SelectorPart::Fragment(fragment) => formatter.write_str(fragment.text())?,
                SelectorPart::Combinator(token) => formatter.write_str(token)?,
            }
        }
        Ok(())
    }
}

/// Start a selector with a fragment of an arbitrary kind.
///
/// A one-fragment selector satisfies both structural rules by construction,
/// so the factories are infallible.
#[must_use]
pub fn fragment(kind: FragmentKind, value: &str) -> Selector {
    Selector {
        parts: vec![SelectorPart::Fragment(Fragment::render(kind, value))],
    }
}

/// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
///
/// Start a selector with a type selector; `name` is used verbatim.
#[must_use]
pub fn element(name: &str) -> Selector {
    fragment(FragmentKind::Element, name)
}

/// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
///
/// Start a selector with an id fragment, rendered as `#name`.
#[must_use]
pub fn id(name: &str) -> Selector {
    fragment(FragmentKind::Id, name)
}

/// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
///
/// Start a selector with a class fragment, rendered as `.name`.
#[must_use]
pub fn class(name: &str) -> Selector {
    fragment(FragmentKind::Class, name)
}

/// [§ 6 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
///
/// Start a selector with an attribute fragment; `body` is the entire
/// condition between the brackets, inserted verbatim.
#[must_use]
pub fn attr(body: &str) -> Selector {
    fragment(FragmentKind::Attribute, body)
}

/// [§ 4 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
///
/// Start a selector with a pseudo-class fragment, rendered as `:name`.
#[must_use]
pub fn pseudo_class(name: &str) -> Selector {
    fragment(FragmentKind::PseudoClass, name)
}

/// [§ 11 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
///
/// Start a selector with a pseudo-element fragment, rendered as `::name`.
#[must_use]
pub fn pseudo_element(name: &str) -> Selector {
    fragment(FragmentKind::PseudoElement, name)
}

/// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
///
/// Join two selectors with a combinator token.
///
/// The token is inserted verbatim between two spaces; it is not validated,
/// so any string is accepted (use [`crate::Combinator::token`] for the
/// standard four). Both operands are consumed into the result, which carries
/// `left`'s log, the joiner, then `right`'s log.
#[must_use]
pub fn combine(left: Selector, combinator: &str, right: Selector) -> Selector {
    let mut parts = left.parts;
    parts.push(SelectorPart::Combinator(format!(" {combinator} ")));
    parts.extend(right.parts);
    Selector { parts }
}
