use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Top-level configuration shared by all three stages
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Page listing every cuisine category
    #[serde(default = "default_directory_url")]
    pub directory_url: String,

    /// Directory all stage artifacts are read from and written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Stage 1 output / stage 2 input
    #[serde(default = "default_categories_file")]
    pub categories_file: String,

    /// Stage 2 output / stage 3 input
    #[serde(default = "default_recipes_file")]
    pub recipes_file: String,

    /// Stage 3 outputs are named `<prefix><n>.json`, n starting at 1
    #[serde(default = "default_chunk_file_prefix")]
    pub chunk_file_prefix: String,

    /// Number of checkpointed chunks stage 3 writes
    #[serde(default = "default_chunk_count")]
    pub chunk_count: usize,

    /// Skip stage 3 chunks whose output file already exists
    #[serde(default)]
    pub resume: bool,

    /// Regex restricting which categories stage 2 visits (matched against the name)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_filter: Option<String>,

    #[serde(default)]
    pub browser: BrowserConfig,

    #[serde(default)]
    pub timing: TimingConfig,

    #[serde(default)]
    pub scroll: ScrollConfig,

    #[serde(default)]
    pub selectors: SiteSelectors,
}

/// Which WebDriver-backed browser to request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrowserKind {
    Firefox,
    Chrome,
}

/// WebDriver connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowserConfig {
    /// URL for the WebDriver instance
    #[serde(default = "default_webdriver_url")]
    pub webdriver_url: String,

    #[serde(default = "default_browser_kind")]
    pub kind: BrowserKind,

    /// Headless mode for the category and recipe stages
    #[serde(default)]
    pub headless: bool,

    /// Headless mode for the detail stage
    #[serde(default = "default_true")]
    pub headless_enrichment: bool,
}

/// Upper bounds for readiness waits, in milliseconds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimingConfig {
    #[serde(default = "default_directory_settle_ms")]
    pub directory_settle_ms: u64,

    #[serde(default = "default_category_settle_ms")]
    pub category_settle_ms: u64,

    #[serde(default = "default_post_scroll_settle_ms")]
    pub post_scroll_settle_ms: u64,

    /// Unconditional pause after the overlay was clicked away
    #[serde(default = "default_overlay_pause_ms")]
    pub overlay_pause_ms: u64,

    /// Wait for the details container on recipe pages; 0 relies on page load alone
    #[serde(default = "default_recipe_settle_ms")]
    pub recipe_settle_ms: u64,
}

/// Scroll-until-stable tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollConfig {
    #[serde(default = "default_step_px")]
    pub step_px: i64,

    #[serde(default = "default_scroll_pause_ms")]
    pub pause_ms: u64,

    /// Consecutive unchanged heights after which the page counts as fully loaded
    #[serde(default = "default_stall_threshold")]
    pub stall_threshold: u32,

    /// Hard cap on scroll attempts per page
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
}

/// CSS selectors describing the target site's markup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteSelectors {
    #[serde(default = "default_category_link")]
    pub category_link: String,
    #[serde(default = "default_overlay_dismiss")]
    pub overlay_dismiss: String,
    #[serde(default = "default_recipe_card")]
    pub recipe_card: String,
    #[serde(default = "default_card_title")]
    pub card_title: String,
    #[serde(default = "default_detail_item")]
    pub detail_item: String,
    #[serde(default = "default_detail_label")]
    pub detail_label: String,
    #[serde(default = "default_detail_value")]
    pub detail_value: String,
    #[serde(default = "default_ingredient_list")]
    pub ingredient_list: String,
    #[serde(default = "default_ingredient_item")]
    pub ingredient_item: String,
    #[serde(default = "default_nutrition_table")]
    pub nutrition_table: String,
    #[serde(default = "default_rating")]
    pub rating: String,
    #[serde(default = "default_rating_count")]
    pub rating_count: String,
}

fn default_directory_url() -> String {
    "https://www.allrecipes.com/cuisine-a-z-6740455".to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_categories_file() -> String {
    "cuisines.csv".to_string()
}

fn default_recipes_file() -> String {
    "cuisines_recipes.json".to_string()
}

fn default_chunk_file_prefix() -> String {
    "enhanced_recipes_part_".to_string()
}

fn default_chunk_count() -> usize {
    5
}

/// Default value for webdriver_url
fn default_webdriver_url() -> String {
    "http://localhost:4444".to_string()
}

fn default_browser_kind() -> BrowserKind {
    BrowserKind::Firefox
}

fn default_true() -> bool {
    true
}

fn default_directory_settle_ms() -> u64 {
    5000
}

fn default_category_settle_ms() -> u64 {
    2000
}

fn default_post_scroll_settle_ms() -> u64 {
    5000
}

fn default_overlay_pause_ms() -> u64 {
    1000
}

fn default_recipe_settle_ms() -> u64 {
    0
}

fn default_step_px() -> i64 {
    1000
}

fn default_scroll_pause_ms() -> u64 {
    500
}

fn default_stall_threshold() -> u32 {
    20
}

fn default_max_attempts() -> u32 {
    400
}

fn default_category_link() -> String {
    "a.mntl-link-list__link".to_string()
}

fn default_overlay_dismiss() -> String {
    "button.pushly-prompt-btn-dismiss".to_string()
}

fn default_recipe_card() -> String {
    "a.mntl-card-list-items".to_string()
}

fn default_card_title() -> String {
    "span.card__title-text".to_string()
}

fn default_detail_item() -> String {
    "div.mm-recipes-details__item".to_string()
}

fn default_detail_label() -> String {
    "div.mm-recipes-details__label".to_string()
}

fn default_detail_value() -> String {
    "div.mm-recipes-details__value".to_string()
}

fn default_ingredient_list() -> String {
    "ul.mm-recipes-structured-ingredients__list".to_string()
}

fn default_ingredient_item() -> String {
    "li.mm-recipes-structured-ingredients__list-item".to_string()
}

fn default_nutrition_table() -> String {
    "table.mm-recipes-nutrition-facts-summary__table".to_string()
}

fn default_rating() -> String {
    r#"div[id*="mm-recipes-review-bar__rating_"]"#.to_string()
}

fn default_rating_count() -> String {
    r#"div[id*="mm-recipes-review-bar__rating-count_"]"#.to_string()
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            directory_url: default_directory_url(),
            output_dir: default_output_dir(),
            categories_file: default_categories_file(),
            recipes_file: default_recipes_file(),
            chunk_file_prefix: default_chunk_file_prefix(),
            chunk_count: default_chunk_count(),
            resume: false,
            category_filter: None,
            browser: BrowserConfig::default(),
            timing: TimingConfig::default(),
            scroll: ScrollConfig::default(),
            selectors: SiteSelectors::default(),
        }
    }
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            webdriver_url: default_webdriver_url(),
            kind: default_browser_kind(),
            headless: false,
            headless_enrichment: true,
        }
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            directory_settle_ms: default_directory_settle_ms(),
            category_settle_ms: default_category_settle_ms(),
            post_scroll_settle_ms: default_post_scroll_settle_ms(),
            overlay_pause_ms: default_overlay_pause_ms(),
            recipe_settle_ms: default_recipe_settle_ms(),
        }
    }
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            step_px: default_step_px(),
            pause_ms: default_scroll_pause_ms(),
            stall_threshold: default_stall_threshold(),
            max_attempts: default_max_attempts(),
        }
    }
}

impl Default for SiteSelectors {
    fn default() -> Self {
        Self {
            category_link: default_category_link(),
            overlay_dismiss: default_overlay_dismiss(),
            recipe_card: default_recipe_card(),
            card_title: default_card_title(),
            detail_item: default_detail_item(),
            detail_label: default_detail_label(),
            detail_value: default_detail_value(),
            ingredient_list: default_ingredient_list(),
            ingredient_item: default_ingredient_item(),
            nutrition_table: default_nutrition_table(),
            rating: default_rating(),
            rating_count: default_rating_count(),
        }
    }
}

impl PipelineConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }

    /// Override the WebDriver URL with the WEBDRIVER_URL environment variable if provided
    pub fn apply_env(&mut self) {
        if let Ok(webdriver_url) = std::env::var("WEBDRIVER_URL") {
            if !webdriver_url.is_empty() {
                self.browser.webdriver_url = webdriver_url;
            }
        }
    }

    pub fn categories_path(&self) -> PathBuf {
        self.output_dir.join(&self.categories_file)
    }

    pub fn recipes_path(&self) -> PathBuf {
        self.output_dir.join(&self.recipes_file)
    }

    /// Path of the 1-based chunk `number`
    pub fn chunk_path(&self, number: usize) -> PathBuf {
        self.output_dir
            .join(crate::utils::chunk_file_name(&self.chunk_file_prefix, number))
    }
}

impl TimingConfig {
    pub fn directory_settle(&self) -> Duration {
        Duration::from_millis(self.directory_settle_ms)
    }

    pub fn category_settle(&self) -> Duration {
        Duration::from_millis(self.category_settle_ms)
    }

    pub fn post_scroll_settle(&self) -> Duration {
        Duration::from_millis(self.post_scroll_settle_ms)
    }

    pub fn overlay_pause(&self) -> Duration {
        Duration::from_millis(self.overlay_pause_ms)
    }

    pub fn recipe_settle(&self) -> Duration {
        Duration::from_millis(self.recipe_settle_ms)
    }
}

impl ScrollConfig {
    pub fn pause(&self) -> Duration {
        Duration::from_millis(self.pause_ms)
    }
}
