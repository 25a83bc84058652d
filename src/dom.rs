//! Thin capability layer over the HTML library.
//!
//! Extraction code only needs three operations: find every node matching a
//! structural pattern under a root, read a node's text, and read one of its
//! attributes. Keeping those behind this module means the selector engine
//! can be swapped without touching the extraction logic.

use scraper::{ElementRef, Selector};

/// All elements under `root` matching the CSS pattern, in document order.
///
/// Panics if `css` is not a valid selector; every pattern in this crate is
/// a string literal checked by the tests.
pub fn select_all<'a>(root: ElementRef<'a>, css: &str) -> Vec<ElementRef<'a>> {
    let selector = Selector::parse(css).expect("invalid CSS selector");
    root.select(&selector).collect()
}

/// Concatenated text of all descendants of `el`.
pub fn text_of(el: ElementRef) -> String {
    el.text().collect()
}

/// Text of the first match, or the empty string when nothing matches.
pub fn first_text(root: ElementRef, css: &str) -> String {
    select_all(root, css)
        .first()
        .map(|el| text_of(*el))
        .unwrap_or_default()
}

/// Attribute value of the first match, if the node exists and carries it.
pub fn first_attr(root: ElementRef, css: &str, attr: &str) -> Option<String> {
    select_all(root, css)
        .first()
        .and_then(|el| el.attr(attr))
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    const PAGE: &str = r#"
        <div class="outer">
            <p class="item"><a href="one.php">First</a></p>
            <p class="item">Second</p>
        </div>
    "#;

    #[test]
    fn select_all_returns_document_order() {
        let doc = Html::parse_document(PAGE);
        let items = select_all(doc.root_element(), ".outer .item");
        assert_eq!(items.len(), 2);
        assert_eq!(text_of(items[0]), "First");
        assert_eq!(text_of(items[1]), "Second");
    }

    #[test]
    fn first_text_defaults_to_empty() {
        let doc = Html::parse_document(PAGE);
        assert_eq!(first_text(doc.root_element(), ".item"), "First");
        assert_eq!(first_text(doc.root_element(), ".missing"), "");
    }

    #[test]
    fn first_attr_reads_href() {
        let doc = Html::parse_document(PAGE);
        let root = doc.root_element();
        assert_eq!(first_attr(root, ".item a", "href").as_deref(), Some("one.php"));
        assert_eq!(first_attr(root, ".item a", "title"), None);
        assert_eq!(first_attr(root, ".missing a", "href"), None);
    }
}
