// src/checker/document.rs
// =============================================================================
// A tiny view of a parsed HTML page.
//
// The table extractor and the title resolver only ever need three things:
// - find one element by tag name and id
// - find all elements with a tag name (in the page, or below an element)
// - read the text inside an element
//
// Those live behind the StructuredDocument / DocumentNode traits, and
// HtmlDocument implements them with the `scraper` crate. The extraction logic
// is written against the traits, so it does not care which parser is used.
// =============================================================================

use scraper::{ElementRef, Html, Selector};

/// A parsed page that can be searched by tag and id
pub trait StructuredDocument {
    type Node<'a>: DocumentNode
    where
        Self: 'a;

    /// First element named `tag` whose `id` attribute equals `id`
    fn find_by_id(&self, tag: &str, id: &str) -> Option<Self::Node<'_>>;

    /// All elements named `tag`, in document order
    fn find_all(&self, tag: &str) -> Vec<Self::Node<'_>>;
}

/// One element of a StructuredDocument
pub trait DocumentNode: Sized {
    /// All descendant elements named `tag`, in document order
    fn find_all(&self, tag: &str) -> Vec<Self>;

    /// Concatenated text of the element and all its descendants
    fn text_content(&self) -> String;
}

/// An HTML page parsed with html5ever (through scraper)
pub struct HtmlDocument {
    html: Html,
}

impl HtmlDocument {
    pub fn parse(body: &str) -> Self {
        Self {
            html: Html::parse_document(body),
        }
    }
}

#[derive(Clone, Copy)]
pub struct HtmlNode<'a>(ElementRef<'a>);

impl StructuredDocument for HtmlDocument {
    type Node<'a> = HtmlNode<'a>
    where
        Self: 'a;

    fn find_by_id(&self, tag: &str, id: &str) -> Option<HtmlNode<'_>> {
        // Filter on the id ourselves instead of building "table#id": ids
        // coming from config may contain characters that are not valid CSS
        let selector = tag_selector(tag)?;
        self.html
            .select(&selector)
            .find(|element| element.value().id() == Some(id))
            .map(HtmlNode)
    }

    fn find_all(&self, tag: &str) -> Vec<HtmlNode<'_>> {
        match tag_selector(tag) {
            Some(selector) => self.html.select(&selector).map(HtmlNode).collect(),
            None => Vec::new(),
        }
    }
}

impl<'a> DocumentNode for HtmlNode<'a> {
    fn find_all(&self, tag: &str) -> Vec<Self> {
        match tag_selector(tag) {
            Some(selector) => self.0.select(&selector).map(HtmlNode).collect(),
            None => Vec::new(),
        }
    }

    fn text_content(&self) -> String {
        self.0.text().collect()
    }
}

// A tag name that does not form a valid selector simply matches nothing
fn tag_selector(tag: &str) -> Option<Selector> {
    Selector::parse(tag).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html><head><title>Page</title></head><body>
            <table id="first"><tr><td>one</td></tr></table>
            <div id="second">not a table</div>
            <table id="second"><tr><td>two <b>bold</b></td><td>three</td></tr></table>
        </body></html>
    "#;

    #[test]
    fn test_find_by_id_matches_tag_and_id() {
        let doc = HtmlDocument::parse(PAGE);
        let table = doc.find_by_id("table", "second").unwrap();
        let cells: Vec<String> = table.find_all("td").iter().map(|c| c.text_content()).collect();
        assert_eq!(cells, vec!["two bold", "three"]);
    }

    #[test]
    fn test_find_by_id_missing() {
        let doc = HtmlDocument::parse(PAGE);
        assert!(doc.find_by_id("table", "third").is_none());
        assert!(doc.find_by_id("table", "").is_none());
    }

    #[test]
    fn test_find_all_in_document_order() {
        let doc = HtmlDocument::parse(PAGE);
        let tables = doc.find_all("table");
        assert_eq!(tables.len(), 2);
        assert_eq!(tables[0].text_content(), "one");
    }

    #[test]
    fn test_invalid_tag_matches_nothing() {
        let doc = HtmlDocument::parse(PAGE);
        assert!(doc.find_all("<<").is_empty());
        assert!(doc.find_by_id("", "first").is_none());
    }

    #[test]
    fn test_id_with_css_special_characters() {
        let doc = HtmlDocument::parse(r#"<table id="a.b:c"><tr><td>x</td></tr></table>"#);
        assert!(doc.find_by_id("table", "a.b:c").is_some());
    }
}
