#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::app::export::ExportFormat;
#[cfg(feature = "cli")]
use crate::domain::model::Category;
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "movie-catalog")]
#[command(about = "Browse a movie catalog enriched with OMDb metadata")]
pub struct CliConfig {
    /// Path to a TOML catalog file (defaults to the built-in catalog)
    #[arg(long, global = true)]
    pub catalog: Option<String>,

    /// OMDb API key (overrides the catalog file and OMDB_API_KEY)
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// OMDb endpoint override
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Max in-flight OMDb lookups, 0 for no limit
    #[arg(long, global = true)]
    pub concurrent_requests: Option<usize>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List movies, optionally filtered by category and search text
    List {
        #[arg(short, long, default_value = "all")]
        category: Category,

        /// Matches title (case-insensitive) or year
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Show details and download links for one movie
    Show {
        /// IMDb id, e.g. tt1517268
        imdb_id: String,
    },
    /// List the available categories
    Categories,
    /// Write the filtered listing to a file
    Export {
        #[arg(short, long, default_value = "csv")]
        format: ExportFormat,

        #[arg(short, long, default_value = "./output")]
        output: String,

        #[arg(short, long, default_value = "all")]
        category: Category,

        #[arg(short, long)]
        search: Option<String>,
    },
    /// Interactive browser reading commands from stdin
    Browse,
}

#[cfg(feature = "cli")]
impl Command {
    /// 不需要呼叫 OMDb 的子命令
    pub fn is_offline(&self) -> bool {
        matches!(self, Command::Categories)
    }
}
