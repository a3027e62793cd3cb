use crate::parsers::{Selectors, document_base, resolve_link};
use crate::results::{CategoryEntry, Extraction, ExtractionFailure};
use crate::utils::rendered_text;
use scraper::Html;
use url::Url;

/// Extract every category link from the rendered directory page, in page order.
///
/// Relative links resolve against the page's `<base href>` when it has one,
/// otherwise against `page_url`.
pub fn parse_categories(
    html: &str,
    page_url: &Url,
    selectors: &Selectors,
) -> Extraction<CategoryEntry> {
    let doc = Html::parse_document(html);
    let base_url = document_base(&doc, page_url, selectors);
    let mut extraction = Extraction::default();

    for (index, anchor) in doc.select(&selectors.category_link).enumerate() {
        let name = rendered_text(anchor);
        let item = format!("category #{index} ({name})");

        let Some(href) = anchor.value().attr("href") else {
            extraction
                .failures
                .push(ExtractionFailure::new(item, "no href"));
            continue;
        };

        match resolve_link(&base_url, href) {
            Ok(link) => extraction.items.push(CategoryEntry { name, link }),
            Err(e) => extraction
                .failures
                .push(ExtractionFailure::new(item, e.to_string())),
        }
    }

    ::log::debug!(
        "Category parser found {} links ({} skipped)",
        extraction.items.len(),
        extraction.failures.len()
    );
    extraction
}
