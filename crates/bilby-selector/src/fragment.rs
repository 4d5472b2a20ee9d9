//! Selector fragments and their fixed ordering table.
//!
//! [§ 4.1 Structure and Terminology](https://www.w3.org/TR/selectors-4/#structure)

use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// [§ 4.1 Structure and Terminology](https://www.w3.org/TR/selectors-4/#structure)
///
/// The six kinds of simple selector a compound selector may contain.
///
/// The declaration order mirrors the order the kinds must appear in within a
/// compound selector: type, id, class, attribute, pseudo-class,
/// pseudo-element (see [`FragmentKind::rank`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum FragmentKind {
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    /// "A type selector is the name of a document language element type."
    ///
    /// Examples: `div`, `p`, `a`
    Element,

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    /// "An ID selector is a hash (#, U+0023) immediately followed by the
    /// ID value, which is an identifier."
    ///
    /// Examples: `#main`, `#nav-bar`
    Id,

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    /// "The class selector is given as a full stop (. U+002E) immediately
    /// followed by an identifier."
    ///
    /// Examples: `.highlight`, `.btn`
    Class,

    /// [§ 6 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    /// An attribute condition between square brackets.
    ///
    /// Examples: `[href]`, `[src$=".png"]`, `[lang|=en]`
    Attribute,

    /// [§ 4 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    /// A colon followed by the pseudo-class name.
    ///
    /// Examples: `:hover`, `:first-child`, `:nth-child(2)`
    PseudoClass,

    /// [§ 11 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
    /// Two colons followed by the pseudo-element name.
    ///
    /// Examples: `::before`, `::first-line`
    PseudoElement,
}

impl FragmentKind {
    /// Position of this kind in the compound-selector ordering.
    ///
    /// [§ 4.1](https://www.w3.org/TR/selectors-4/#structure)
    /// "A compound selector is a sequence of simple selectors... If it
    /// contains a type selector or universal selector, that selector must
    /// come first in the sequence."
    ///
    /// Fragments appended to a selector must be non-decreasing in rank.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Element => 1,
            Self::Id => 2,
            Self::Class => 3,
            Self::Attribute => 4,
            Self::PseudoClass => 5,
            Self::PseudoElement => 6,
        }
    }

    /// Whether a selector may contain this kind at most once.
    ///
    /// Type, id, and pseudo-element fragments are unique; class, attribute,
    /// and pseudo-class fragments repeat freely.
    #[must_use]
    pub const fn is_unique(self) -> bool {
        matches!(self, Self::Element | Self::Id | Self::PseudoElement)
    }
}

/// One selector component, stored with its CSS punctuation already applied.
///
/// The raw value is rendered exactly once, when the fragment is created;
/// stringifying a selector is then pure concatenation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fragment {
    /// The rendered text, e.g. `.nav` for the class `nav`.
    text: String,
    /// Which kind of simple selector this is.
    kind: FragmentKind,
}

impl Fragment {
    /// Render a raw value into a fragment of the given kind.
    ///
    /// The value is not validated against the CSS identifier grammar; it is
    /// only wrapped with the kind's punctuation. Element names are used
    /// verbatim, and attribute bodies are inserted verbatim between `[` and
    /// `]`, so callers may supply any attribute condition such as
    /// `href$=".png"`.
    #[must_use]
    pub fn render(kind: FragmentKind, value: &str) -> Self {
        let text = match kind {
            FragmentKind::Element => value.to_string(),
            FragmentKind::Id => format!("#{value}"),
            FragmentKind::Class => format!(".{value}"),
            FragmentKind::Attribute => format!("[{value}]"),
            FragmentKind::PseudoClass => format!(":{value}"),
            FragmentKind::PseudoElement => format!("::{value}"),
        };
        Self { text, kind }
    }

    /// The rendered text of this fragment, punctuation included.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The kind of this fragment.
    #[must_use]
    pub const fn kind(&self) -> FragmentKind {
        self.kind
    }
}

#[cfg(test)]
mod tests {
    use super::{Fragment, FragmentKind};

    #[test]
    fn test_render_punctuation() {
        assert_eq!(Fragment::render(FragmentKind::Element, "div").text(), "div");
        assert_eq!(Fragment::render(FragmentKind::Id, "main").text(), "#main");
        assert_eq!(Fragment::render(FragmentKind::Class, "nav").text(), ".nav");
        assert_eq!(
            Fragment::render(FragmentKind::Attribute, "href$=\".png\"").text(),
            "[href$=\".png\"]"
        );
        assert_eq!(
            Fragment::render(FragmentKind::PseudoClass, "hover").text(),
            ":hover"
        );
        assert_eq!(
            Fragment::render(FragmentKind::PseudoElement, "before").text(),
            "::before"
        );
    }

    #[test]
    fn test_rank_is_strictly_increasing() {
        let kinds = [
            FragmentKind::Element,
            FragmentKind::Id,
            FragmentKind::Class,
            FragmentKind::Attribute,
            FragmentKind::PseudoClass,
            FragmentKind::PseudoElement,
        ];
        for pair in kinds.windows(2) {
            assert!(pair[0].rank() < pair[1].rank());
        }
    }

    #[test]
    fn test_unique_kinds() {
        assert!(FragmentKind::Element.is_unique());
        assert!(FragmentKind::Id.is_unique());
        assert!(FragmentKind::PseudoElement.is_unique());
        assert!(!FragmentKind::Class.is_unique());
        assert!(!FragmentKind::Attribute.is_unique());
        assert!(!FragmentKind::PseudoClass.is_unique());
    }

    #[test]
    fn test_kind_display_is_kebab_case() {
        assert_eq!(FragmentKind::PseudoClass.to_string(), "pseudo-class");
        assert_eq!(FragmentKind::Element.to_string(), "element");
    }
}
