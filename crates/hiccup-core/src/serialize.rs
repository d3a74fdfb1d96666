//! Hiccup serialization
//!
//! Converts an element tree into Hiccup notation text:
//! `[tag#id.class.segments {:attr "value"} child child ...]`.

use crate::ast::{class_segments, is_blank_text, Attributes, Element, Node};
use crate::escape::push_quoted;
use crate::options::Options;
use crate::{Error, Result};

/// Serialize an element and its subtree to Hiccup notation
pub fn to_hiccup(element: &Element, options: &Options) -> Result<String> {
    let mut output = String::with_capacity(256);
    serialize_element(element, options, 0, &mut output)?;
    Ok(output)
}

/// Format the tag header: `tag`, then `#id`, then `.class.segments` when
/// `class_shorthand` is set. No surrounding brackets.
pub fn format_tag_header(element: &Element, class_shorthand: bool) -> String {
    let mut out = String::new();
    push_tag_header(element, class_shorthand, &mut out);
    out
}

/// Format the attribute map as ` {:key "value" ...}`, or an empty string when
/// nothing is left to show. `id` is always left out; `class` is left out when
/// `remove_class` is set.
pub fn format_attributes(attributes: &Attributes, remove_class: bool) -> String {
    let mut out = String::new();
    push_attributes(attributes, remove_class, &mut out);
    out
}

/// Format a child sequence, each child prefixed by one space. Blank text
/// children produce nothing.
pub fn format_children(children: &[Node], options: &Options) -> Result<String> {
    let mut out = String::new();
    serialize_children(children, options, 0, &mut out)?;
    Ok(out)
}

/// Whether the `class` attribute of `element` can go into the tag header
pub fn uses_class_shorthand(element: &Element, options: &Options) -> bool {
    options.class_shorthand
        && element
            .attr("class")
            .is_some_and(|class| !class.contains('/'))
}

fn serialize_element(
    element: &Element,
    options: &Options,
    depth: usize,
    out: &mut String,
) -> Result<()> {
    if element.tag.is_empty() {
        return Err(Error::EmptyTag);
    }
    if let Some(limit) = options.max_depth {
        if depth >= limit {
            return Err(Error::DepthLimitExceeded { limit });
        }
    }

    let shorthand = uses_class_shorthand(element, options);

    out.push('[');
    push_tag_header(element, shorthand, out);
    push_attributes(&element.attributes, shorthand, out);
    serialize_children(&element.children, options, depth + 1, out)?;
    out.push(']');
    Ok(())
}

fn push_tag_header(element: &Element, class_shorthand: bool, out: &mut String) {
    out.push_str(&element.tag);

    if let Some(id) = element.attr("id") {
        out.push('#');
        out.push_str(id);
    }

    if class_shorthand {
        if let Some(class) = element.attr("class") {
            for segment in class_segments(class) {
                out.push('.');
                out.push_str(segment);
            }
        }
    }
}

fn push_attributes(attributes: &Attributes, remove_class: bool, out: &mut String) {
    let mut shown = attributes
        .iter()
        .filter(|(key, _)| match key.as_str() {
            "id" => false,
            "class" => !remove_class,
            _ => true,
        })
        .peekable();

    if shown.peek().is_none() {
        return;
    }

    out.push_str(" {");
    for (i, (key, value)) in shown.enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push(':');
        out.push_str(key);
        out.push(' ');
        push_quoted(value, out);
    }
    out.push('}');
}

fn serialize_children(
    children: &[Node],
    options: &Options,
    depth: usize,
    out: &mut String,
) -> Result<()> {
    for child in children {
        match child {
            Node::Text(text) => {
                if !is_blank_text(text) {
                    out.push(' ');
                    push_quoted(text, out);
                }
            }
            Node::Element(element) => {
                out.push(' ');
                serialize_element(element, options, depth, out)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn convert(element: &Element) -> String {
        to_hiccup(element, &Options::default()).unwrap()
    }

    fn no_shorthand() -> Options {
        Options::with_class_shorthand(false)
    }

    #[test]
    fn test_empty_element() {
        assert_eq!(convert(&Element::new("br")), "[br]");
    }

    #[test]
    fn test_id_goes_into_header() {
        let element = Element::with_attrs("span", vec![("id", "x")]);
        assert_eq!(convert(&element), "[span#x]");
    }

    #[test]
    fn test_id_is_not_escaped_or_split() {
        let element = Element::with_attrs("a", vec![("id", "one two")]);
        assert_eq!(convert(&element), "[a#one two]");
    }

    #[test]
    fn test_class_shorthand() {
        let element = Element::with_attrs("div", vec![("class", "a b")]).child("text");
        assert_eq!(convert(&element), r#"[div.a.b "text"]"#);
    }

    #[test]
    fn test_class_shorthand_trims_and_collapses_whitespace() {
        let element = Element::with_attrs("div", vec![("class", "  a \n  b\tc ")]);
        assert_eq!(convert(&element), "[div.a.b.c]");
    }

    #[test]
    fn test_class_shorthand_disabled() {
        let element = Element::with_attrs("div", vec![("class", "a b")]).child("text");
        let result = to_hiccup(&element, &no_shorthand()).unwrap();
        assert_eq!(result, r#"[div {:class "a b"} "text"]"#);
    }

    #[test]
    fn test_class_with_slash_stays_in_map() {
        let element = Element::with_attrs("div", vec![("class", "a/b")]).child("text");
        assert_eq!(convert(&element), r#"[div {:class "a/b"} "text"]"#);
    }

    #[test]
    fn test_slash_fallback_keeps_whole_class_value() {
        let element = Element::with_attrs("div", vec![("class", "w-1/2 p-4")]);
        assert_eq!(convert(&element), r#"[div {:class "w-1/2 p-4"}]"#);
    }

    #[test]
    fn test_id_and_class_in_header() {
        let element = Element::with_attrs("section", vec![("class", "a b"), ("id", "x")]);
        assert_eq!(convert(&element), "[section#x.a.b]");
    }

    #[test]
    fn test_id_in_header_class_in_map_without_shorthand() {
        let element = Element::with_attrs("p", vec![("id", "x"), ("class", "a")]);
        let result = to_hiccup(&element, &no_shorthand()).unwrap();
        assert_eq!(result, r#"[p#x {:class "a"}]"#);
    }

    #[test]
    fn test_nbsp_text_is_kept() {
        let element = Element::new("p").child("\u{a0}");
        assert_eq!(convert(&element), "[p \"\u{a0}\"]");
    }

    #[test]
    fn test_nbsp_in_class_does_not_split() {
        let element = Element::with_attrs("div", vec![("class", "a\u{a0}b c")]).child("x");
        assert_eq!(convert(&element), "[div.a\u{a0}b.c \"x\"]");
    }

    #[test]
    fn test_blank_class_with_shorthand() {
        let element = Element::with_attrs("div", vec![("class", "   ")]);
        assert_eq!(convert(&element), "[div]");
    }

    #[test]
    fn test_attribute_order_is_preserved() {
        let element = Element::with_attrs(
            "div",
            vec![("data-x", "1"), ("data-y", "2"), ("aria-label", "z")],
        );
        assert_eq!(
            convert(&element),
            r#"[div {:data-x "1" :data-y "2" :aria-label "z"}]"#
        );
    }

    #[test]
    fn test_attribute_values_are_escaped() {
        let element = Element::with_attrs("input", vec![("value", "say \"hi\"\n\\")]);
        assert_eq!(convert(&element), r#"[input {:value "say \"hi\"\n\\"}]"#);
    }

    #[test]
    fn test_whitespace_only_text_is_dropped() {
        let element = Element::new("p").child("   \n ");
        assert_eq!(convert(&element), "[p]");
    }

    #[test]
    fn test_whitespace_between_elements_is_dropped() {
        let element = Element::new("ul")
            .child("\n  ")
            .child(Element::new("li").child("a"))
            .child("\n  ")
            .child(Element::new("li").child("b"))
            .child("\n");
        assert_eq!(convert(&element), r#"[ul [li "a"] [li "b"]]"#);
    }

    #[test]
    fn test_text_is_kept_verbatim() {
        let element = Element::new("p").child("  padded  ");
        assert_eq!(convert(&element), r#"[p "  padded  "]"#);
    }

    #[test]
    fn test_mixed_content_order() {
        let element = Element::new("p")
            .child("Hello ")
            .child(Element::new("em").child("big"))
            .child(" world");
        assert_eq!(convert(&element), r#"[p "Hello " [em "big"] " world"]"#);
    }

    #[test]
    fn test_nested_shorthand_is_decided_per_node() {
        let element = Element::with_attrs("div", vec![("class", "a/b")])
            .child(Element::with_attrs("span", vec![("class", "c")]));
        assert_eq!(convert(&element), r#"[div {:class "a/b"} [span.c]]"#);
    }

    #[test]
    fn test_format_tag_header() {
        let element = Element::with_attrs("div", vec![("id", "main"), ("class", " a  b ")]);
        assert_eq!(format_tag_header(&element, true), "div#main.a.b");
        assert_eq!(format_tag_header(&element, false), "div#main");
    }

    #[test]
    fn test_format_attributes() {
        let element = Element::with_attrs("div", vec![("id", "main"), ("class", "a")]);
        assert_eq!(format_attributes(&element.attributes, true), "");
        assert_eq!(
            format_attributes(&element.attributes, false),
            r#" {:class "a"}"#
        );
        assert_eq!(format_attributes(&Attributes::new(), false), "");
    }

    #[test]
    fn test_format_children() {
        let children = vec![Node::text(" "), Node::text("x"), Node::element("br")];
        let result = format_children(&children, &Options::default()).unwrap();
        assert_eq!(result, r#" "x" [br]"#);
        assert_eq!(format_children(&[], &Options::default()).unwrap(), "");
    }

    #[test]
    fn test_empty_tag_is_rejected() {
        let element = Element::new("div").child(Element::new(""));
        assert!(matches!(
            to_hiccup(&element, &Options::default()),
            Err(Error::EmptyTag)
        ));
    }

    #[test]
    fn test_depth_limit() {
        let element = Element::new("a").child(Element::new("b").child(Element::new("c")));
        let options = Options {
            max_depth: Some(2),
            ..Options::default()
        };
        assert!(matches!(
            to_hiccup(&element, &options),
            Err(Error::DepthLimitExceeded { limit: 2 })
        ));

        let options = Options {
            max_depth: Some(3),
            ..Options::default()
        };
        assert_eq!(to_hiccup(&element, &options).unwrap(), "[a [b [c]]]");
    }

    proptest! {
        #[test]
        fn prop_blank_children_never_change_output(
            blanks in proptest::collection::vec("[ \t\n\r]{0,4}", 0..6)
        ) {
            let mut element = Element::new("div").child(Element::new("hr"));
            for blank in &blanks {
                element.add_child(blank.as_str());
            }
            prop_assert_eq!(convert(&element), "[div [hr]]");
        }

        #[test]
        fn prop_attribute_keys_print_in_insertion_order(
            keys in proptest::collection::vec("data-[a-z]{1,6}", 1..8)
        ) {
            let mut element = Element::new("div");
            for key in &keys {
                element.set_attr(key, "v");
            }
            let output = convert(&element);
            let mut last = 0;
            for key in element.attributes.keys() {
                let token = format!(":{} ", key);
                let at = output.find(&token).unwrap();
                prop_assert!(at >= last);
                last = at;
            }
        }
    }
}
