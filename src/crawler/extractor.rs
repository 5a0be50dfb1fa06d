//! Journal record extraction from one result page
//!
//! Each journal entry on a result page lives in its own container element.
//! Extraction is per-container and per-field: a field that is missing from
//! the markup degrades to its default instead of failing the record, and
//! only a missing journal name discards the container entirely.

use scraper::{ElementRef, Html, Selector};
use serde::Serialize;

/// Sentinel substituted for optional fields absent from the markup
pub const UNKNOWN: &str = "unknown";

const CONTAINER_MARKER: &str = "div.list-item";
const NAME_MARKER: &str = "div.affil-name a";
const AFFILIATION_MARKER: &str = "div.affil-loc";
const ACCREDITATION_MARKER: &str = "span.num-stat.accredited";

/// One scraped journal entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JournalRecord {
    /// Journal title, always non-empty
    pub name: String,

    /// Owning institution, `"unknown"` if absent
    pub affiliation: String,

    /// Accreditation tier, `"unknown"` if absent
    pub accreditation: String,

    /// URL of the journal's page, empty string if absent
    pub link: String,
}

/// A container discarded because its journal name could not be extracted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedContainer {
    /// Zero-based position of the container on its page
    pub index: usize,
}

/// Result of extracting one page
#[derive(Debug, Default)]
pub struct Extraction {
    /// Records in in-page order
    pub records: Vec<JournalRecord>,

    /// Containers dropped for lacking a name, for warning logs
    pub dropped: Vec<DroppedContainer>,
}

/// Extracts all journal records from one result page
///
/// Zero records is a valid outcome (e.g. a trailing page with no matching
/// entries) and is not distinguished from an empty document.
pub fn extract_records(doc: &Html) -> Extraction {
    let (Ok(container), Ok(name_marker), Ok(affiliation_marker), Ok(accreditation_marker)) = (
        Selector::parse(CONTAINER_MARKER),
        Selector::parse(NAME_MARKER),
        Selector::parse(AFFILIATION_MARKER),
        Selector::parse(ACCREDITATION_MARKER),
    ) else {
        return Extraction::default();
    };

    let mut extraction = Extraction::default();

    for (index, item) in doc.select(&container).enumerate() {
        let name_element = item.select(&name_marker).next();

        let name = name_element.map(element_text).unwrap_or_default();
        if name.is_empty() {
            extraction.dropped.push(DroppedContainer { index });
            continue;
        }

        let link = name_element
            .and_then(|el| el.value().attr("href"))
            .unwrap_or("")
            .trim()
            .to_string();

        extraction.records.push(JournalRecord {
            name,
            affiliation: text_or_default(&item, &affiliation_marker, UNKNOWN),
            accreditation: text_or_default(&item, &accreditation_marker, UNKNOWN),
            link,
        });
    }

    extraction
}

/// Collects and trims the text content of an element
fn element_text(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Extracts the text of the first match inside `item`, or the default when
/// the marker matches nothing or only whitespace
fn text_or_default(item: &ElementRef, marker: &Selector, default: &str) -> String {
    item.select(marker)
        .next()
        .map(element_text)
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(items: &str) -> Html {
        Html::parse_document(&format!("<html><body>{}</body></html>", items))
    }

    const FULL_ITEM: &str = r#"
        <div class="list-item">
            <div class="affil-name mb-3">
                <a href="https://sinta.kemdikbud.go.id/journals/profile/1">Jurnal Teknologi</a>
            </div>
            <div class="affil-loc mt-2">Universitas Indonesia</div>
            <span class="num-stat accredited">S2</span>
        </div>"#;

    #[test]
    fn test_extract_full_record() {
        let extraction = extract_records(&page(FULL_ITEM));
        assert_eq!(
            extraction.records,
            vec![JournalRecord {
                name: "Jurnal Teknologi".to_string(),
                affiliation: "Universitas Indonesia".to_string(),
                accreditation: "S2".to_string(),
                link: "https://sinta.kemdikbud.go.id/journals/profile/1".to_string(),
            }]
        );
        assert!(extraction.dropped.is_empty());
    }

    #[test]
    fn test_missing_optional_fields_take_sentinel() {
        let item = r#"
            <div class="list-item">
                <div class="affil-name"><a href="/journals/profile/2">Jurnal Fisika</a></div>
            </div>"#;
        let extraction = extract_records(&page(item));

        let record = &extraction.records[0];
        assert_eq!(record.name, "Jurnal Fisika");
        assert_eq!(record.affiliation, UNKNOWN);
        assert_eq!(record.accreditation, UNKNOWN);
    }

    #[test]
    fn test_missing_link_is_empty_string() {
        let item = r#"
            <div class="list-item">
                <div class="affil-name"><a>Jurnal Kimia</a></div>
            </div>"#;
        let extraction = extract_records(&page(item));
        assert_eq!(extraction.records[0].link, "");
    }

    #[test]
    fn test_nameless_container_is_dropped_with_index() {
        let items = format!(
            r#"{}
            <div class="list-item"><div class="affil-loc">Orphaned affiliation</div></div>
            {}"#,
            FULL_ITEM, FULL_ITEM
        );
        let extraction = extract_records(&page(&items));

        assert_eq!(extraction.records.len(), 2);
        assert_eq!(extraction.dropped, vec![DroppedContainer { index: 1 }]);
    }

    #[test]
    fn test_whitespace_only_name_is_dropped() {
        let item = r#"
            <div class="list-item">
                <div class="affil-name"><a href="/x">   </a></div>
            </div>"#;
        let extraction = extract_records(&page(item));
        assert!(extraction.records.is_empty());
        assert_eq!(extraction.dropped.len(), 1);
    }

    #[test]
    fn test_empty_page_yields_no_records() {
        let extraction = extract_records(&page(""));
        assert!(extraction.records.is_empty());
        assert!(extraction.dropped.is_empty());
    }

    #[test]
    fn test_in_page_order_is_preserved() {
        let items = r#"
            <div class="list-item"><div class="affil-name"><a href="/a">Alpha</a></div></div>
            <div class="list-item"><div class="affil-name"><a href="/b">Beta</a></div></div>
            <div class="list-item"><div class="affil-name"><a href="/c">Gamma</a></div></div>"#;
        let extraction = extract_records(&page(items));

        let names: Vec<&str> = extraction
            .records
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(names, vec!["Alpha", "Beta", "Gamma"]);
    }
}
