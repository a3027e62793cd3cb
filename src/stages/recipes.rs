use crate::artifacts;
use crate::browser::{Browser, WebDriverSession, scroll_until_stable};
use crate::config::PipelineConfig;
use crate::error::Result;
use crate::parsers::Selectors;
use crate::parsers::cards::parse_recipe_cards;
use crate::results::{CategoryEntry, Extraction, RecipeRef};
use crate::stages::{landed_url, log_failures, settle, with_session};
use regex::Regex;
use std::time::Duration;
use url::Url;

/// Visit every category page and collect its recipe cards, in category order.
///
/// A category whose page cannot be loaded or scrolled is logged and skipped.
pub async fn enumerate_recipes<B: Browser>(
    browser: &mut B,
    categories: &[CategoryEntry],
    config: &PipelineConfig,
    selectors: &Selectors,
) -> Result<Vec<RecipeRef>> {
    let filter = config
        .category_filter
        .as_deref()
        .map(Regex::new)
        .transpose()?;

    let mut recipes = Vec::new();
    for category in categories {
        if let Some(filter) = &filter {
            if !filter.is_match(&category.name) {
                ::log::debug!("Category filter rejected: {}", category.name);
                continue;
            }
        }

        ::log::info!("Scraping {} -> {}", category.name, category.link);
        match enumerate_category(browser, category, config, selectors).await {
            Ok(extraction) => {
                log_failures(&extraction.failures);
                ::log::info!(
                    "Found {} recipes for {}",
                    extraction.items.len(),
                    category.name
                );
                recipes.extend(extraction.items);
            }
            Err(e) => {
                ::log::warn!("Skipped category {}: {}", category.name, e);
            }
        }
    }

    Ok(recipes)
}

/// Load one category page, scroll it until no more cards load, and parse the cards
async fn enumerate_category<B: Browser>(
    browser: &mut B,
    category: &CategoryEntry,
    config: &PipelineConfig,
    selectors: &Selectors,
) -> Result<Extraction<RecipeRef>> {
    let page_url = Url::parse(&category.link)?;
    let card_css = &config.selectors.recipe_card;
    let overlay_css = &config.selectors.overlay_dismiss;
    let overlay_pause = config.timing.overlay_pause();

    browser.goto(page_url.as_str()).await?;
    settle(browser, card_css, config.timing.category_settle()).await?;
    dismiss_overlay(browser, overlay_css, overlay_pause).await;

    let outcome = scroll_until_stable(browser, &config.scroll).await?;
    ::log::debug!(
        "Scrolled {} {} times ({:?})",
        category.name,
        outcome.attempts,
        outcome.stop
    );

    settle(browser, card_css, config.timing.post_scroll_settle()).await?;
    // The overlay can come back while scrolling
    dismiss_overlay(browser, overlay_css, overlay_pause).await;

    let html = browser.source().await?;
    let base_url = landed_url(browser, &page_url).await;
    Ok(parse_recipe_cards(&html, &base_url, &category.name, selectors))
}

/// Best-effort click on the overlay's dismiss button; every failure is ignored
async fn dismiss_overlay<B: Browser>(browser: &mut B, css: &str, pause: Duration) {
    match browser.click_if_present(css).await {
        Ok(true) => {
            ::log::debug!("Popup dismissed");
            tokio::time::sleep(pause).await;
        }
        Ok(false) => {}
        Err(e) => ::log::trace!("Popup dismissal failed: {}", e),
    }
}

/// Read the category table, enumerate recipes with an open browser, and write the recipe list
pub async fn run_stage<B: Browser>(
    browser: &mut B,
    config: &PipelineConfig,
) -> Result<Vec<RecipeRef>> {
    let selectors = Selectors::compile(&config.selectors)?;
    let categories = artifacts::read_categories(&config.categories_path())?;
    ::log::info!("Loaded {} categories", categories.len());

    let recipes = enumerate_recipes(browser, &categories, config, &selectors).await?;

    let path = config.recipes_path();
    artifacts::write_recipe_refs(&path, &recipes)?;
    ::log::info!("Saved {} recipes to {}", recipes.len(), path.display());
    Ok(recipes)
}

/// Run the recipe stage in its own WebDriver session
pub async fn run(config: &PipelineConfig) -> Result<Vec<RecipeRef>> {
    with_session(
        async || WebDriverSession::connect(&config.browser, config.browser.headless).await,
        async |session| run_stage(session, config).await,
    )
    .await
}
