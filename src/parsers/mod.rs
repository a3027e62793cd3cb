pub mod cards;
pub mod categories;
pub mod recipe;

#[cfg(test)]
mod tests;

use crate::config::SiteSelectors;
use crate::error::{Error, Result};
use scraper::{Html, Selector};
use url::Url;

/// The site selectors, compiled once per stage
#[derive(Debug, Clone)]
pub struct Selectors {
    pub category_link: Selector,
    pub recipe_card: Selector,
    pub card_title: Selector,
    pub detail_item: Selector,
    pub detail_label: Selector,
    pub detail_value: Selector,
    pub ingredient_list: Selector,
    pub ingredient_item: Selector,
    pub nutrition_table: Selector,
    pub table_row: Selector,
    pub table_cell: Selector,
    pub rating: Selector,
    pub rating_count: Selector,
    pub base_href: Selector,
}

impl Selectors {
    pub fn compile(site: &SiteSelectors) -> Result<Self> {
        Ok(Self {
            category_link: compile(&site.category_link)?,
            recipe_card: compile(&site.recipe_card)?,
            card_title: compile(&site.card_title)?,
            detail_item: compile(&site.detail_item)?,
            detail_label: compile(&site.detail_label)?,
            detail_value: compile(&site.detail_value)?,
            ingredient_list: compile(&site.ingredient_list)?,
            ingredient_item: compile(&site.ingredient_item)?,
            nutrition_table: compile(&site.nutrition_table)?,
            table_row: compile("tr")?,
            table_cell: compile("td")?,
            rating: compile(&site.rating)?,
            rating_count: compile(&site.rating_count)?,
            base_href: compile("base[href]")?,
        })
    }
}

fn compile(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| Error::InvalidSelector {
        selector: css.to_string(),
        reason: e.to_string(),
    })
}

/// Base URL for the links of `doc`: the first `<base href>`, joined against
/// `page_url`, or `page_url` itself when there is none or it does not parse
pub(crate) fn document_base(doc: &Html, page_url: &Url, selectors: &Selectors) -> Url {
    doc.select(&selectors.base_href)
        .next()
        .and_then(|base| base.value().attr("href"))
        .and_then(|href| page_url.join(href.trim()).ok())
        .unwrap_or_else(|| page_url.clone())
}

/// Resolve an href against the base URL of the page it was found on
pub(crate) fn resolve_link(page_url: &Url, href: &str) -> Result<String> {
    Ok(page_url.join(href.trim())?.to_string())
}
