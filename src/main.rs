use clap::Parser;
use cuisine_crawl::{Pipeline, PipelineConfig};
use std::process::ExitCode;

mod args;
use args::{Args, to_stage};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => match PipelineConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                ::log::error!("Failed to load config {}: {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => PipelineConfig::default(),
    };
    config.apply_env();

    let mut pipeline = Pipeline::new(config);
    if let Some(url) = args.webdriver_url {
        pipeline = pipeline.with_webdriver_url(url);
    }
    if let Some(dir) = args.output_dir {
        pipeline = pipeline.with_output_dir(dir);
    }
    if let Some(chunks) = args.chunks {
        pipeline = pipeline.with_chunk_count(chunks);
    }
    if args.resume {
        pipeline = pipeline.with_resume(true);
    }
    if let Some(pattern) = args.only {
        pipeline = pipeline.with_category_filter(pattern);
    }
    if args.headless {
        pipeline = pipeline.with_headless(true);
    }

    ::log::info!(
        "Using WebDriver at {}",
        pipeline.config().browser.webdriver_url
    );

    let result = match to_stage(args.command) {
        Some(stage) => pipeline.run_stage(stage).await,
        None => pipeline.run_all().await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            ::log::error!("Pipeline failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
