
use crate::config::PipelineConfig;
use std::path::PathBuf;
use tempfile::{TempDir, tempdir};

/// Config writing into a fresh temporary directory, with every wait disabled.
///
/// The directory is removed when the returned guard drops, including when
/// the test panics.
fn scratch_config() -> (TempDir, PipelineConfig) {
    let dir = tempdir().unwrap();

    let mut config = PipelineConfig {
        output_dir: dir.path().join("out"),
        directory_url: "https://example.test/cuisine-a-z".to_string(),
        ..PipelineConfig::default()
    };
    config.timing.directory_settle_ms = 0;
    config.timing.category_settle_ms = 0;
    config.timing.post_scroll_settle_ms = 0;
    config.timing.overlay_pause_ms = 0;
    config.timing.recipe_settle_ms = 0;
    config.scroll.pause_ms = 0;
    config.scroll.stall_threshold = 2;
    config.scroll.max_attempts = 10;
    (dir, config)
}

#[test]
fn test_scratch_dir_removed_when_test_panics() {
    let result = std::panic::catch_unwind(|| {
        let (dir, config) = scratch_config();
        crate::artifacts::write_categories(&config.categories_path(), &[]).unwrap();
        assert!(config.categories_path().exists());
        std::panic::panic_any(dir.path().to_path_buf());
    });

    let root = result.unwrap_err().downcast::<PathBuf>().unwrap();
    assert!(!root.exists());
}

fn category_page(cards: &[(&str, &str)]) -> String {
    let body: String = cards
        .iter()
        .map(|(href, title)| {
            format!(
                r#"<a class="mntl-card-list-items" href="{href}"><span class="card__title-text">{title}</span></a>"#
            )
        })
        .collect();
    format!("<html><body>{body}</body></html>")
}

fn recipe_page(total_time: &str, rating: &str) -> String {
    format!(
        r#"<html><body>
        <div id="mm-recipes-review-bar__rating_1-0">{rating}</div>
        <div class="mm-recipes-details__item">
          <div class="mm-recipes-details__label">Total Time:</div>
          <div class="mm-recipes-details__value">{total_time}</div>
        </div>
        </body></html>"#
    )
}
