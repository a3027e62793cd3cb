use crate::parsers::{Selectors, document_base, resolve_link};
use crate::results::{Extraction, ExtractionFailure, RecipeRef};
use crate::utils::rendered_text;
use scraper::{ElementRef, Html};
use url::Url;

/// Extract recipe cards from a fully scrolled category page.
///
/// A card without a link or without its nested title is recorded as a
/// failure and skipped; the remaining cards are still returned.
pub fn parse_recipe_cards(
    html: &str,
    page_url: &Url,
    category: &str,
    selectors: &Selectors,
) -> Extraction<RecipeRef> {
    let doc = Html::parse_document(html);
    let base_url = document_base(&doc, page_url, selectors);
    let mut extraction = Extraction::default();

    for (index, card) in doc.select(&selectors.recipe_card).enumerate() {
        match parse_card(card, &base_url, category, selectors) {
            Ok(recipe) => extraction.items.push(recipe),
            Err(reason) => extraction.failures.push(ExtractionFailure::new(
                format!("{category} card #{index}"),
                reason,
            )),
        }
    }

    extraction
}

fn parse_card(
    card: ElementRef<'_>,
    base_url: &Url,
    category: &str,
    selectors: &Selectors,
) -> Result<RecipeRef, String> {
    let href = card
        .value()
        .attr("href")
        .ok_or_else(|| "card has no href".to_string())?;
    let link = resolve_link(base_url, href).map_err(|e| e.to_string())?;

    let title = card
        .select(&selectors.card_title)
        .next()
        .ok_or_else(|| "card has no title element".to_string())?;

    Ok(RecipeRef {
        category: category.to_string(),
        recipe_name: rendered_text(title),
        link,
    })
}
