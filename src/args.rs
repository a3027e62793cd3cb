use clap::{Parser, Subcommand};
use cuisine_crawl::Stage;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cuisine-crawl")]
#[command(about = "Scrapes cuisine categories, their recipes, and recipe details")]
#[command(version)]
pub struct Args {
    /// Stage to run (all stages when omitted)
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to a JSON configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// WebDriver server URL
    #[arg(long, global = true)]
    pub webdriver_url: Option<String>,

    /// Directory for the stage artifacts
    #[arg(short, long, global = true)]
    pub output_dir: Option<PathBuf>,

    /// Number of chunk files written by the details stage
    #[arg(long, global = true)]
    pub chunks: Option<usize>,

    /// Skip detail chunks whose file already exists
    #[arg(long, global = true)]
    pub resume: bool,

    /// Only visit categories whose name matches this regex
    #[arg(long, global = true)]
    pub only: Option<String>,

    /// Run every stage headless
    #[arg(long, global = true)]
    pub headless: bool,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Run all stages in order
    All,
    /// Collect the category table
    Categories,
    /// Enumerate recipes for every category
    Recipes,
    /// Enrich recipes with their page details
    Details,
}

/// Convert the CLI command to the stage to run; `None` means every stage
pub fn to_stage(command: Option<Command>) -> Option<Stage> {
    match command {
        None | Some(Command::All) => None,
        Some(Command::Categories) => Some(Stage::Categories),
        Some(Command::Recipes) => Some(Stage::Recipes),
        Some(Command::Details) => Some(Stage::Details),
    }
}
