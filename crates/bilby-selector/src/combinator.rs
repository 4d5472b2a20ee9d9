//! Combinators per [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators).
//!
//! "A combinator is punctuation that represents a particular kind of
//! relationship between the selectors on either side."

use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
///
/// The four standard combinators. [`crate::combine`] accepts any raw token
/// string; this enum names the standard ones for callers that prefer not to
/// spell out punctuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Combinator {
    /// [§ 16.1 Descendant combinator](https://www.w3.org/TR/selectors-4/#descendant-combinators)
    /// "A descendant combinator is whitespace that separates two compound
    /// selectors. A selector of the form 'A B' represents an element B that
    /// is an arbitrary descendant of some ancestor element A."
    Descendant,

    /// [§ 16.2 Child combinator](https://www.w3.org/TR/selectors-4/#child-combinators)
    /// "A child combinator is a greater-than sign (>) that separates two
    /// compound selectors. A selector of the form 'A > B' represents an
    /// element B that is a direct child of element A."
    Child,

    /// [§ 16.3 Next-sibling combinator](https://www.w3.org/TR/selectors-4/#adjacent-sibling-combinators)
    /// "A next-sibling combinator is a plus sign (+) that separates two
    /// compound selectors. A selector of the form 'A + B' represents an
    /// element B that immediately follows element A, where A and B share
    /// the same parent."
    NextSibling,

    /// [§ 16.4 Subsequent-sibling combinator](https://www.w3.org/TR/selectors-4/#general-sibling-combinators)
    /// "A subsequent-sibling combinator is a tilde (~) that separates two
    /// compound selectors. A selector of the form 'A ~ B' represents an
    /// element B that follows element A (not necessarily immediately),
    /// where A and B share the same parent."
    SubsequentSibling,
}

impl Combinator {
    /// The token text to pass to [`crate::combine`].
    ///
    /// `combine` already supplies the whitespace around the token, so the
    /// descendant combinator is the empty string rather than a space.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Descendant => "",
            Self::Child => ">",
            Self::NextSibling => "+",
            Self::SubsequentSibling => "~",
        }
    }
}
