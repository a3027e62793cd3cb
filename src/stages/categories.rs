use crate::artifacts;
use crate::browser::{Browser, WebDriverSession};
use crate::config::PipelineConfig;
use crate::error::Result;
use crate::parsers::Selectors;
use crate::parsers::categories::parse_categories;
use crate::results::CategoryEntry;
use crate::stages::{landed_url, log_failures, settle, with_session};
use url::Url;

/// Load the directory page and extract its category links.
///
/// A page that fails to load or settle yields an empty list rather than an
/// error. Links resolve against the URL the browser landed on.
pub async fn collect_categories<B: Browser>(
    browser: &mut B,
    config: &PipelineConfig,
    selectors: &Selectors,
) -> Result<Vec<CategoryEntry>> {
    let page_url = Url::parse(&config.directory_url)?;
    ::log::info!("Collecting categories from {}", page_url);

    if let Err(e) = browser.goto(page_url.as_str()).await {
        ::log::error!("Failed to load {}: {}", page_url, e);
        return Ok(Vec::new());
    }
    if let Err(e) = settle(
        browser,
        &config.selectors.category_link,
        config.timing.directory_settle(),
    )
    .await
    {
        ::log::error!("Failed waiting for categories on {}: {}", page_url, e);
        return Ok(Vec::new());
    }

    let html = match browser.source().await {
        Ok(html) => html,
        Err(e) => {
            ::log::error!("Failed to get source for {}: {}", page_url, e);
            return Ok(Vec::new());
        }
    };

    let base_url = landed_url(browser, &page_url).await;
    let extraction = parse_categories(&html, &base_url, selectors);
    log_failures(&extraction.failures);
    Ok(extraction.items)
}

/// Collect categories with an open browser and write the category table
pub async fn run_stage<B: Browser>(
    browser: &mut B,
    config: &PipelineConfig,
) -> Result<Vec<CategoryEntry>> {
    let selectors = Selectors::compile(&config.selectors)?;
    let categories = collect_categories(browser, config, &selectors).await?;

    let path = config.categories_path();
    artifacts::write_categories(&path, &categories)?;
    ::log::info!("Saved {} categories to {}", categories.len(), path.display());
    Ok(categories)
}

/// Run the category stage in its own WebDriver session
pub async fn run(config: &PipelineConfig) -> Result<Vec<CategoryEntry>> {
    with_session(
        async || WebDriverSession::connect(&config.browser, config.browser.headless).await,
        async |session| run_stage(session, config).await,
    )
    .await
}
