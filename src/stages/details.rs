use crate::artifacts;
use crate::browser::{Browser, WebDriverSession};
use crate::config::PipelineConfig;
use crate::error::Result;
use crate::parsers::Selectors;
use crate::parsers::recipe::parse_recipe_page;
use crate::results::{ExtractionFailure, RecipeDetail, RecipeFields, RecipeRef};
use crate::stages::{settle, with_session};
use crate::utils::chunk_bounds;
use std::path::PathBuf;
use std::time::Instant;

/// What happened to one chunk of the recipe list
#[derive(Debug, Clone)]
pub struct ChunkReport {
    /// 1-based chunk number
    pub number: usize,
    pub path: PathBuf,
    /// Records written to the chunk file
    pub written: usize,
    /// Recipes written with default fields because their page could not be read
    pub failures: Vec<ExtractionFailure>,
    /// Left untouched because its file already existed
    pub skipped: bool,
}

/// Fetch one recipe page and parse its detail fields.
///
/// Always returns a record for `recipe`; when the page cannot be read the
/// detail fields keep their defaults and the failure is returned alongside.
pub async fn enrich_recipe<B: Browser>(
    browser: &mut B,
    recipe: &RecipeRef,
    config: &PipelineConfig,
    selectors: &Selectors,
) -> (RecipeDetail, Option<ExtractionFailure>) {
    ::log::info!("Scraping: {} | {}", recipe.recipe_name, recipe.link);

    match fetch_fields(browser, recipe, config, selectors).await {
        Ok(fields) => {
            ::log::info!(
                "Success: {} | Rating: {} ({})",
                recipe.recipe_name,
                fields.total_rating,
                fields.rating_count
            );
            (RecipeDetail::new(recipe.clone(), fields), None)
        }
        Err(e) => {
            ::log::warn!("FAILED {}: {}", recipe.recipe_name, e);
            (
                RecipeDetail::unavailable(recipe.clone()),
                Some(ExtractionFailure::new(&recipe.recipe_name, e.to_string())),
            )
        }
    }
}

async fn fetch_fields<B: Browser>(
    browser: &mut B,
    recipe: &RecipeRef,
    config: &PipelineConfig,
    selectors: &Selectors,
) -> Result<RecipeFields> {
    browser.goto(&recipe.link).await?;
    settle(
        browser,
        &config.selectors.detail_item,
        config.timing.recipe_settle(),
    )
    .await?;
    let html = browser.source().await?;
    Ok(parse_recipe_page(&html, selectors))
}

/// Enrich `recipes` chunk by chunk, writing each chunk's file as soon as it completes.
///
/// Exactly `chunk_count` chunk files are produced (fewer when resuming).
pub async fn enrich_in_chunks<B: Browser>(
    browser: &mut B,
    recipes: &[RecipeRef],
    config: &PipelineConfig,
    selectors: &Selectors,
) -> Result<Vec<ChunkReport>> {
    let parts = config.chunk_count.max(1);
    let mut reports = Vec::with_capacity(parts);

    for (index, range) in chunk_bounds(recipes.len(), parts).into_iter().enumerate() {
        let number = index + 1;
        let path = config.chunk_path(number);

        if config.resume && path.exists() {
            ::log::info!("Part {} already saved at {}, skipping", number, path.display());
            reports.push(ChunkReport {
                number,
                path,
                written: 0,
                failures: Vec::new(),
                skipped: true,
            });
            continue;
        }

        ::log::info!(
            "--- Processing Part {}/{} ({} to {}) ---",
            number,
            parts,
            range.start,
            range.end
        );

        let mut details = Vec::with_capacity(range.len());
        let mut failures = Vec::new();
        for recipe in &recipes[range] {
            let (detail, failure) = enrich_recipe(browser, recipe, config, selectors).await;
            details.push(detail);
            failures.extend(failure);
        }

        artifacts::write_chunk(&path, &details)?;
        ::log::info!("Saved Part {} to '{}'", number, path.display());
        reports.push(ChunkReport {
            number,
            path,
            written: details.len(),
            failures,
            skipped: false,
        });
    }

    Ok(reports)
}

/// Read the recipe list and enrich it with an open browser
pub async fn run_stage<B: Browser>(
    browser: &mut B,
    config: &PipelineConfig,
) -> Result<Vec<ChunkReport>> {
    let start_time = Instant::now();
    let selectors = Selectors::compile(&config.selectors)?;
    let recipes = artifacts::read_recipe_refs(&config.recipes_path())?;
    ::log::info!("Loaded {} recipes", recipes.len());

    let reports = enrich_in_chunks(browser, &recipes, config, &selectors).await?;

    let failed: usize = reports.iter().map(|r| r.failures.len()).sum();
    ::log::info!(
        "All parts complete ({} recipes without details). Total time: {:.2} seconds",
        failed,
        start_time.elapsed().as_secs_f64()
    );
    Ok(reports)
}

/// Run the detail stage in one WebDriver session held across all chunks
pub async fn run(config: &PipelineConfig) -> Result<Vec<ChunkReport>> {
    with_session(
        async || WebDriverSession::connect(&config.browser, config.browser.headless_enrichment).await,
        async |session| run_stage(session, config).await,
    )
    .await
}
