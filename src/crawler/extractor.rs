//! Heuristic field extraction from company detail pages
//!
//! Each field is produced by an independent [`FieldRule`]. A rule looks at
//! the parsed document and either yields a value or nothing; a missing
//! marker is the normal case and never an error. [`DetailExtractor`] runs
//! every rule and merges the results into one [`CompanyRecord`].

use crate::crawler::document::{element_href, element_text, Document};
use crate::model::{CompanyRecord, Field};
use regex::Regex;
use std::sync::OnceLock;

/// One independent extraction rule
pub trait FieldRule: Send + Sync {
    /// The record field this rule fills
    fn field(&self) -> Field;

    /// Extracts the field value from the document, if the markup allows it
    fn extract(&self, document: &Document) -> Option<String>;
}

fn pattern(cell: &'static OnceLock<Regex>, source: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(source).expect("extraction pattern is a valid regex"))
}

fn name_class_pattern() -> &'static Regex {
    static CELL: OnceLock<Regex> = OnceLock::new();
    pattern(&CELL, r"company.*name|title")
}

fn code_label_pattern() -> &'static Regex {
    static CELL: OnceLock<Regex> = OnceLock::new();
    pattern(&CELL, r"Įmonės kodas|Kodas")
}

fn code_value_pattern() -> &'static Regex {
    static CELL: OnceLock<Regex> = OnceLock::new();
    pattern(&CELL, r"\d{9}")
}

fn address_label_pattern() -> &'static Regex {
    static CELL: OnceLock<Regex> = OnceLock::new();
    pattern(&CELL, r"Adresas|Address")
}

fn address_prefix_pattern() -> &'static Regex {
    static CELL: OnceLock<Regex> = OnceLock::new();
    pattern(&CELL, r"^\s*(?:Adresas|Address)\s*:?\s*")
}

fn tel_href_pattern() -> &'static Regex {
    static CELL: OnceLock<Regex> = OnceLock::new();
    pattern(&CELL, r"^\s*tel:")
}

fn mailto_href_pattern() -> &'static Regex {
    static CELL: OnceLock<Regex> = OnceLock::new();
    pattern(&CELL, r"^\s*mailto:")
}

fn http_href_pattern() -> &'static Regex {
    static CELL: OnceLock<Regex> = OnceLock::new();
    pattern(&CELL, r"^\s*https?://")
}

fn www_text_pattern() -> &'static Regex {
    static CELL: OnceLock<Regex> = OnceLock::new();
    pattern(&CELL, r"www\.")
}

fn non_empty(value: String) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Company name: the first `<h1>`, else the first element whose class looks
/// like a company name or title
pub struct NameRule;

impl FieldRule for NameRule {
    fn field(&self) -> Field {
        Field::Name
    }

    fn extract(&self, document: &Document) -> Option<String> {
        let element = document
            .first_by_tag("h1")
            .or_else(|| document.first_by_class(name_class_pattern()))?;
        non_empty(element_text(&element))
    }
}

/// Registration code: the first 9-digit run in the element holding the
/// "code" label
pub struct RegistrationCodeRule;

impl FieldRule for RegistrationCodeRule {
    fn field(&self) -> Field {
        Field::RegistrationCode
    }

    fn extract(&self, document: &Document) -> Option<String> {
        let parent = document.parent_of_text(code_label_pattern())?;
        let text = element_text(&parent);
        code_value_pattern()
            .find(&text)
            .map(|found| found.as_str().to_string())
    }
}

/// Address: the text of the element holding the "address" label, without
/// the label
pub struct AddressRule;

impl FieldRule for AddressRule {
    fn field(&self) -> Field {
        Field::Address
    }

    fn extract(&self, document: &Document) -> Option<String> {
        let parent = document.parent_of_text(address_label_pattern())?;
        let text = element_text(&parent);
        non_empty(address_prefix_pattern().replace(&text, "").into_owned())
    }
}

/// Phone: visible text of the first `tel:` link
pub struct PhoneRule;

impl FieldRule for PhoneRule {
    fn field(&self) -> Field {
        Field::Phone
    }

    fn extract(&self, document: &Document) -> Option<String> {
        let anchors = document.anchors_with_href(tel_href_pattern());
        let anchor = anchors.first()?;
        non_empty(element_text(anchor))
    }
}

/// Email: href of the first `mailto:` link without the scheme
pub struct EmailRule;

impl FieldRule for EmailRule {
    fn field(&self) -> Field {
        Field::Email
    }

    fn extract(&self, document: &Document) -> Option<String> {
        let anchors = document.anchors_with_href(mailto_href_pattern());
        let href = element_href(anchors.first()?)?;
        non_empty(mailto_href_pattern().replace(href, "").into_owned())
    }
}

/// Website: href of the first http(s) link whose text shows a `www.` address
pub struct WebsiteRule;

impl FieldRule for WebsiteRule {
    fn field(&self) -> Field {
        Field::Website
    }

    fn extract(&self, document: &Document) -> Option<String> {
        document
            .anchors_with_href(http_href_pattern())
            .into_iter()
            .find(|anchor| www_text_pattern().is_match(&element_text(anchor)))
            .and_then(|anchor| element_href(&anchor).map(str::to_string))
    }
}

/// Runs a set of field rules against detail pages
pub struct DetailExtractor {
    rules: Vec<Box<dyn FieldRule>>,
}

impl DetailExtractor {
    /// Creates an extractor with a custom rule set
    pub fn new(rules: Vec<Box<dyn FieldRule>>) -> Self {
        Self { rules }
    }

    /// Builds a record for `url` from the document
    ///
    /// Rules are independent; one that finds nothing leaves its field
    /// absent. The result is always a valid record, even if only the URL is
    /// set.
    pub fn extract(&self, url: &str, document: &Document) -> CompanyRecord {
        let mut record = CompanyRecord::new(url);

        for rule in &self.rules {
            match rule.extract(document) {
                Some(value) => record.set(rule.field(), value),
                None => tracing::trace!("No {:?} found on {}", rule.field(), url),
            }
        }

        record
    }
}

impl Default for DetailExtractor {
    fn default() -> Self {
        Self::new(vec![
            Box::new(NameRule),
            Box::new(RegistrationCodeRule),
            Box::new(AddressRule),
            Box::new(PhoneRule),
            Box::new(EmailRule),
            Box::new(WebsiteRule),
        ])
    }
}
