//! Integration tests for selector construction, ordering, and uniqueness.

use bilby_selector::{
    Combinator, FragmentKind, SelectorError, attr, class, combine, element, fragment, id,
    pseudo_class, pseudo_element,
};

#[test]
fn test_single_fragment_selectors() {
    assert_eq!(element("div").to_css(), "div");
    assert_eq!(id("main").to_css(), "#main");
    assert_eq!(class("editable").to_css(), ".editable");
    assert_eq!(attr("href").to_css(), "[href]");
    assert_eq!(pseudo_class("hover").to_css(), ":hover");
    assert_eq!(pseudo_element("first-line").to_css(), "::first-line");
}

#[test]
fn test_fluent_chain_concatenates_in_append_order() {
    let selector = id("main")
        .class("container")
        .and_then(|s| s.class("editable"))
        .unwrap();
    assert_eq!(selector.to_css(), "#main.container.editable");
}

#[test]
fn test_full_compound_in_rank_order() {
    let selector = element("div")
        .id("app")
        .and_then(|s| s.class("wide"))
        .and_then(|s| s.attr("data-mode=dark"))
        .and_then(|s| s.pseudo_class("focus-within"))
        .and_then(|s| s.pseudo_element("after"))
        .unwrap();
    assert_eq!(
        selector.to_css(),
        "div#app.wide[data-mode=dark]:focus-within::after"
    );
}

#[test]
fn test_attr_body_is_verbatim() {
    let selector = element("a")
        .attr(r#"href$=".png""#)
        .and_then(|s| s.pseudo_class("focus"))
        .unwrap();
    assert_eq!(selector.to_css(), r#"a[href$=".png"]:focus"#);
}

#[test]
fn test_to_css_is_repeatable() {
    let selector = element("td").pseudo_class("nth-of-type(even)").unwrap();
    assert_eq!(selector.to_css(), "td:nth-of-type(even)");
    assert_eq!(selector.to_css(), selector.to_string());
}

#[test]
fn test_second_id_is_rejected() {
    let error = id("main").id("sidebar").unwrap_err();
    assert_eq!(
        error,
        SelectorError::DuplicatePart {
            kind: FragmentKind::Id
        }
    );
}

#[test]
fn test_second_element_is_rejected() {
    let error = element("div").element("span").unwrap_err();
    assert_eq!(
        error,
        SelectorError::DuplicatePart {
            kind: FragmentKind::Element
        }
    );
}

#[test]
fn test_second_pseudo_element_is_rejected() {
    let error = pseudo_element("before").pseudo_element("after").unwrap_err();
    assert_eq!(
        error,
        SelectorError::DuplicatePart {
            kind: FragmentKind::PseudoElement
        }
    );
}

#[test]
fn test_repeatable_kinds_may_repeat() {
    let selector = class("a")
        .class("b")
        .and_then(|s| s.attr("x"))
        .and_then(|s| s.attr("y"))
        .and_then(|s| s.pseudo_class("hover"))
        .and_then(|s| s.pseudo_class("focus"))
        .unwrap();
    assert_eq!(selector.to_css(), ".a.b[x][y]:hover:focus");
}

#[test]
fn test_id_after_class_is_out_of_order() {
    let error = class("container").id("main").unwrap_err();
    assert_eq!(
        error,
        SelectorError::PartOutOfOrder {
            kind: FragmentKind::Id,
            after: FragmentKind::Class,
        }
    );
}

#[test]
fn test_element_after_pseudo_element_is_out_of_order() {
    let error = pseudo_element("before").element("div").unwrap_err();
    assert_eq!(
        error,
        SelectorError::PartOutOfOrder {
            kind: FragmentKind::Element,
            after: FragmentKind::PseudoElement,
        }
    );
}

#[test]
fn test_class_after_attr_is_out_of_order() {
    let error = element("input").attr("type=text").and_then(|s| s.class("wide"));
    assert_eq!(
        error.unwrap_err(),
        SelectorError::PartOutOfOrder {
            kind: FragmentKind::Class,
            after: FragmentKind::Attribute,
        }
    );
}

#[test]
fn test_combine_matches_manual_concatenation() {
    let left = element("p").pseudo_class("focus").unwrap();
    let right = element("a").attr("href").unwrap();
    let left_css = left.to_css();
    let right_css = right.to_css();

    let combined = combine(left, "+", right);
    assert_eq!(combined.to_css(), format!("{left_css} + {right_css}"));
}

#[test]
fn test_nested_combine_is_flat_concatenation() {
    let inner = combine(
        element("tr").pseudo_class("nth-of-type(even)").unwrap(),
        "~",
        element("td"),
    );
    let selector = combine(element("table").id("data").unwrap(), ">", inner);
    assert_eq!(
        selector.to_css(),
        "table#data > tr:nth-of-type(even) ~ td"
    );
}

#[test]
fn test_combinator_tokens_feed_combine() {
    let child = combine(id("nav"), Combinator::Child.token(), element("li"));
    assert_eq!(child.to_css(), "#nav > li");

    let sibling = combine(
        element("h1"),
        Combinator::NextSibling.token(),
        element("p"),
    );
    assert_eq!(sibling.to_css(), "h1 + p");
}

#[test]
fn test_combine_token_is_not_validated() {
    let odd = combine(element("a"), "||", element("b"));
    assert_eq!(odd.to_css(), "a || b");
}

#[test]
fn test_fragment_factory_is_data_driven() {
    let selector = fragment(FragmentKind::Element, "ul")
        .fragment(FragmentKind::Class, "menu")
        .unwrap();
    assert_eq!(selector.to_css(), "ul.menu");
}

#[test]
fn test_selector_serializes_its_part_log() {
    let selector = id("main").class("nav").unwrap();
    let json = serde_json::to_string(&selector).unwrap();
    assert!(json.contains("#main"));
    assert!(json.contains(".nav"));
}
