//! Errors raised while appending fragments to a selector.

use thiserror::Error;

use crate::fragment::FragmentKind;

/// A structural violation detected when a fragment is appended.
///
/// Both variants abort selector construction: the faulty append consumes the
/// selector, so there is nothing left to retry against. Combinator appends
/// through [`crate::combine`] never raise these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// A second element, id, or pseudo-element fragment was appended to a
    /// selector that already contains one.
    #[error("{kind} selector must not occur more than once inside a selector")]
    DuplicatePart {
        /// The kind that was appended a second time.
        kind: FragmentKind,
    },

    /// The appended fragment's kind is ranked before a kind already present
    /// in the current compound. Fragments must follow the order element, id,
    /// class, attribute, pseudo-class, pseudo-element.
    #[error("{kind} selector must come before the {after} selector already present")]
    PartOutOfOrder {
        /// The kind of the appended fragment.
        kind: FragmentKind,
        /// The higher-ranked kind it was appended after.
        after: FragmentKind,
    },
}

#[cfg(test)]
mod tests {
    use super::SelectorError;
    use crate::fragment::FragmentKind;

    #[test]
    fn test_error_messages_name_the_kinds() {
        let duplicate = SelectorError::DuplicatePart {
            kind: FragmentKind::PseudoElement,
        };
        assert_eq!(
            duplicate.to_string(),
            "pseudo-element selector must not occur more than once inside a selector"
        );

        let out_of_order = SelectorError::PartOutOfOrder {
            kind: FragmentKind::Id,
            after: FragmentKind::Class,
        };
        assert_eq!(
            out_of_order.to_string(),
            "id selector must come before the class selector already present"
        );
    }
}
