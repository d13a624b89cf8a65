//! Parsed HTML document with the lookups the extractors rely on
//!
//! Wraps a `scraper::Html` and exposes element search by tag, by class
//! pattern, by href pattern and by matching text node, plus whitespace
//! normalised text of an element.

use regex::Regex;
use scraper::{ElementRef, Html, Selector};

/// A parsed page
pub struct Document {
    html: Html,
}

impl Document {
    /// Parses a full HTML document. Parsing never fails; broken markup is
    /// repaired the way browsers do it.
    pub fn parse(html: &str) -> Self {
        Self {
            html: Html::parse_document(html),
        }
    }

    /// Returns the first element with the given tag name
    pub fn first_by_tag(&self, tag: &str) -> Option<ElementRef<'_>> {
        let selector = Selector::parse(tag).ok()?;
        self.html.select(&selector).next()
    }

    /// Returns the first element carrying a class that matches `pattern`
    ///
    /// Each class of a multi-class attribute is tested on its own.
    pub fn first_by_class(&self, pattern: &Regex) -> Option<ElementRef<'_>> {
        let selector = Selector::parse("[class]").ok()?;
        self.html
            .select(&selector)
            .find(|element| element.value().classes().any(|class| pattern.is_match(class)))
    }

    /// Returns every anchor whose href matches `pattern`, in document order
    pub fn anchors_with_href(&self, pattern: &Regex) -> Vec<ElementRef<'_>> {
        let selector = match Selector::parse("a[href]") {
            Ok(selector) => selector,
            Err(_) => return Vec::new(),
        };

        self.html
            .select(&selector)
            .filter(|element| {
                element
                    .value()
                    .attr("href")
                    .is_some_and(|href| pattern.is_match(href))
            })
            .collect()
    }

    /// Returns the parent element of the first text node matching `pattern`
    ///
    /// Text inside `<script>` and `<style>` is not visible and is skipped.
    pub fn parent_of_text(&self, pattern: &Regex) -> Option<ElementRef<'_>> {
        self.html.root_element().descendants().find_map(|node| {
            let text = node.value().as_text()?;
            if !pattern.is_match(text) {
                return None;
            }

            let parent = node.parent().and_then(ElementRef::wrap)?;
            match parent.value().name() {
                "script" | "style" => None,
                _ => Some(parent),
            }
        })
    }
}

/// Returns the visible text of an element, whitespace runs collapsed and
/// trimmed
///
/// Text nodes are concatenated as-is, so inline markup such as
/// `<b>1</b>,` does not introduce spaces.
pub fn element_text(element: &ElementRef<'_>) -> String {
    let text = element.text().collect::<String>();
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Returns the href attribute of an element, if any
pub fn element_href<'a>(element: &ElementRef<'a>) -> Option<&'a str> {
    element.value().attr("href")
}
