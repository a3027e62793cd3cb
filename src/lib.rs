//! Recipe-site scraping pipeline.
//!
//! Three stages run in order, each handing its results to the next through a
//! file: categories from the directory page, recipe cards per category, then
//! per-recipe details written in checkpointed chunks.

pub mod artifacts;
pub mod browser;
pub mod config;
pub mod error;
pub mod parsers;
pub mod results;
pub mod stages;
pub mod utils;

pub use config::PipelineConfig;
pub use error::{Error, Result};
pub use results::{CategoryEntry, RecipeDetail, RecipeRef};

use stages::details::ChunkReport;
use std::path::{Path, PathBuf};

/// Which stages to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Categories,
    Recipes,
    Details,
}

/// Main builder for running the pipeline
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    /// Create a pipeline with the given configuration
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Load configuration from a file
    pub fn from_config_file(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(PipelineConfig::from_file(path)?))
    }

    /// Set the URL of the WebDriver server
    pub fn with_webdriver_url(mut self, url: impl Into<String>) -> Self {
        self.config.browser.webdriver_url = url.into();
        self
    }

    /// Set the directory artifacts are read from and written to
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.output_dir = dir.into();
        self
    }

    /// Set the number of chunk files the detail stage writes
    pub fn with_chunk_count(mut self, chunks: usize) -> Self {
        self.config.chunk_count = chunks;
        self
    }

    /// Skip detail chunks that were already written
    pub fn with_resume(mut self, resume: bool) -> Self {
        self.config.resume = resume;
        self
    }

    /// Only visit categories whose name matches `pattern`
    pub fn with_category_filter(mut self, pattern: impl Into<String>) -> Self {
        self.config.category_filter = Some(pattern.into());
        self
    }

    /// Run every stage headless
    pub fn with_headless(mut self, headless: bool) -> Self {
        self.config.browser.headless = headless;
        self.config.browser.headless_enrichment = headless;
        self
    }

    /// The configuration the stages will run with, after every `with_*` override
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Stage 1: write the category table
    pub async fn collect_categories(&self) -> Result<Vec<CategoryEntry>> {
        stages::categories::run(&self.config).await
    }

    /// Stage 2: write the recipe list from the category table
    pub async fn enumerate_recipes(&self) -> Result<Vec<RecipeRef>> {
        stages::recipes::run(&self.config).await
    }

    /// Stage 3: write the enriched chunks from the recipe list
    pub async fn enrich_details(&self) -> Result<Vec<ChunkReport>> {
        stages::details::run(&self.config).await
    }

    /// Run a single stage from its input artifact
    pub async fn run_stage(&self, stage: Stage) -> Result<()> {
        match stage {
            Stage::Categories => {
                self.collect_categories().await?;
            }
            Stage::Recipes => {
                self.enumerate_recipes().await?;
            }
            Stage::Details => {
                self.enrich_details().await?;
            }
        }
        Ok(())
    }

    /// Run all three stages in order; a failing stage stops the run
    pub async fn run_all(&self) -> Result<()> {
        for stage in [Stage::Categories, Stage::Recipes, Stage::Details] {
            ::log::info!("Starting {:?} stage", stage);
            self.run_stage(stage).await?;
        }
        ::log::info!("Scraping completed successfully!");
        Ok(())
    }
}
