// src/checker/dom.rs
// =============================================================================
// A small read-only view over the parsed page.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Is built on html5ever, so malformed markup is repaired, never rejected
//
// The checks only ever need a handful of questions answered:
// - "give me every <img> (in document order)"
// - "give me every <label for=...> inside this form"
// - "what is this element's attribute / text?"
// so instead of handing scraper types to every check we wrap them in
// Document, Element and Node.
// =============================================================================

use html5ever::driver::ParseOpts;
use html5ever::tendril::TendrilSink;
use html5ever::tree_builder::TreeBuilderOpts;
use scraper::{ElementRef, Html};

/// A parsed page. Owns the tree; everything else borrows from it.
pub struct Document {
    html: Html,
}

/// A borrowed handle to one element in a Document
#[derive(Debug, Clone, Copy)]
pub struct Element<'a> {
    inner: ElementRef<'a>,
}

/// A child of an element: either another element or a run of text.
/// Comments and doctypes are dropped.
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    Element(Element<'a>),
    Text(&'a str),
}

impl Document {
    // Parses raw response bytes
    //
    // Invalid UTF-8 is replaced rather than rejected and broken markup is
    // recovered by html5ever, so this never fails.
    //
    // Scripting is off: with it on, <noscript> content is kept as raw text
    // and any <img> inside it would never be checked.
    pub fn parse(bytes: &[u8]) -> Self {
        let source = String::from_utf8_lossy(bytes);
        let opts = ParseOpts {
            tree_builder: TreeBuilderOpts {
                scripting_enabled: false,
                ..Default::default()
            },
            ..Default::default()
        };
        let html = html5ever::driver::parse_document(Html::new_document(), opts).one(&*source);
        Document { html }
    }

    /// The <html> element. html5ever always creates one, even for fragments.
    pub fn root(&self) -> Element<'_> {
        Element {
            inner: self.html.root_element(),
        }
    }

    /// Every element named `tag`, in document order (including <html> itself)
    pub fn find_all<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = Element<'a>> + 'a {
        self.elements().filter(move |el| el.name() == tag)
    }

    /// Every element whose name is one of `tags`, in document order
    pub fn find_all_of<'a>(
        &'a self,
        tags: &'a [&'a str],
    ) -> impl Iterator<Item = Element<'a>> + 'a {
        self.elements().filter(move |el| tags.contains(&el.name()))
    }

    /// Every element named `tag` whose `attr` equals `value` exactly
    pub fn find_all_with<'a>(
        &'a self,
        tag: &'a str,
        attr: &'a str,
        value: &'a str,
    ) -> impl Iterator<Item = Element<'a>> + 'a {
        self.find_all(tag).filter(move |el| el.attr(attr) == Some(value))
    }

    fn elements(&self) -> impl Iterator<Item = Element<'_>> {
        self.html
            .tree
            .root()
            .descendants()
            .filter_map(ElementRef::wrap)
            .map(|inner| Element { inner })
    }
}

impl<'a> Element<'a> {
    /// Lower-case tag name ("img", "button", ...)
    pub fn name(&self) -> &'a str {
        self.inner.value().name()
    }

    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.inner.value().attr(name)
    }

    /// Direct children, elements and text only
    pub fn children(self) -> impl Iterator<Item = Node<'a>> {
        self.inner.children().filter_map(|child| match child.value() {
            scraper::Node::Text(text) => Some(Node::Text(&**text)),
            scraper::Node::Element(_) => {
                ElementRef::wrap(child).map(|inner| Node::Element(Element { inner }))
            }
            _ => None,
        })
    }

    /// All text below this element concatenated, like DOM textContent
    pub fn text_content(self) -> String {
        let mut out = String::new();
        collect_text(self, &mut out);
        out
    }

    /// Descendant elements named `tag` (not including self)
    pub fn find_all(self, tag: &'a str) -> impl Iterator<Item = Element<'a>> {
        self.descendants().filter(move |el| el.name() == tag)
    }

    pub fn find_all_of(self, tags: &'a [&'a str]) -> impl Iterator<Item = Element<'a>> {
        self.descendants().filter(move |el| tags.contains(&el.name()))
    }

    pub fn find_all_with(
        self,
        tag: &'a str,
        attr: &'a str,
        value: &'a str,
    ) -> impl Iterator<Item = Element<'a>> {
        self.find_all(tag).filter(move |el| el.attr(attr) == Some(value))
    }

    fn descendants(self) -> impl Iterator<Item = Element<'a>> {
        // descendants() yields the node itself first
        self.inner
            .descendants()
            .skip(1)
            .filter_map(ElementRef::wrap)
            .map(|inner| Element { inner })
    }
}

fn collect_text(element: Element<'_>, out: &mut String) {
    for child in element.children() {
        match child {
            Node::Text(text) => out.push_str(text),
            Node::Element(el) => collect_text(el, out),
        }
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is the 'a on Element<'a>?
//    - A lifetime: it says "this Element borrows from something that lives
//      for 'a" (here, the Document)
//    - The compiler won't let an Element outlive the Document it came from
//
// 2. Why is Element Copy?
//    - It's just a pointer into the tree (scraper's ElementRef is Copy too)
//    - Copying it is as cheap as copying a reference, so methods can take
//      `self` by value
//
// 3. Why return `impl Iterator` instead of Vec?
//    - Nothing is collected until the caller asks, e.g. `.count()` or
//      `.next().is_some()` can stop early
//    - Calling find_all again simply walks the tree again
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(html: &str) -> Document {
        Document::parse(html.as_bytes())
    }

    #[test]
    fn test_find_all_in_document_order() {
        let d = doc(r#"<p><img src="a"></p><div><img src="b"><img src="c"></div>"#);
        let srcs: Vec<_> = d.find_all("img").filter_map(|img| img.attr("src")).collect();
        assert_eq!(srcs, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_find_all_is_restartable() {
        let d = doc("<a>1</a><a>2</a>");
        assert_eq!(d.find_all("a").count(), 2);
        assert_eq!(d.find_all("a").count(), 2);
    }

    #[test]
    fn test_find_all_with_attribute_filter() {
        let d = doc(r#"<meta charset="utf-8"><meta name="viewport" content="x">"#);
        assert_eq!(d.find_all_with("meta", "name", "viewport").count(), 1);
        assert_eq!(d.find_all_with("meta", "name", "robots").count(), 0);
    }

    #[test]
    fn test_text_content_is_recursive() {
        let d = doc("<button> Save <span>draft</span><!-- c --></button>");
        let button = d.find_all("button").next().unwrap();
        assert_eq!(button.text_content(), " Save draft");
    }

    #[test]
    fn test_children_skip_comments() {
        let d = doc("<div>hi<!-- note --><b>x</b></div>");
        let div = d.find_all("div").next().unwrap();
        let kinds: Vec<_> = div
            .children()
            .map(|c| match c {
                Node::Text(t) => format!("text:{}", t),
                Node::Element(e) => format!("el:{}", e.name()),
            })
            .collect();
        assert_eq!(kinds, vec!["text:hi", "el:b"]);
    }

    #[test]
    fn test_element_find_all_excludes_self() {
        let d = doc("<form><div><input id=a></div><select id=b></select></form>");
        let form = d.find_all("form").next().unwrap();
        assert_eq!(form.find_all("form").count(), 0);
        let ids: Vec<_> = form
            .find_all_of(&["input", "textarea", "select"])
            .filter_map(|el| el.attr("id"))
            .collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_malformed_html_still_parses() {
        let d = doc("<html lang=en><body><p>unclosed <b>bold <img src=x></body>");
        assert_eq!(d.root().name(), "html");
        assert_eq!(d.root().attr("lang"), Some("en"));
        assert_eq!(d.find_all("img").count(), 1);
    }

    #[test]
    fn test_noscript_content_is_parsed_as_markup() {
        let d = doc(r#"<body><noscript><img src="pixel"></noscript></body>"#);
        let noscript = d.find_all("noscript").next().unwrap();
        assert_eq!(noscript.find_all("img").count(), 1);
    }

    #[test]
    fn test_root_exists_for_empty_input() {
        let d = doc("");
        assert_eq!(d.root().name(), "html");
        assert_eq!(d.root().attr("lang"), None);
    }
}
