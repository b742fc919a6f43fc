use crate::types::{LogLevel, OutputFormat};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "holocron")]
#[command(about = "Browse the film catalog and read each film's opening crawl", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        help = "Catalog base URL (overrides HOLOCRON_API_URL and the config file)"
    )]
    pub api_url: Option<String>,

    #[arg(long, global = true, help = "Path to config.toml")]
    pub config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t, global = true, help = "Output of `films` and `film`")]
    pub format: OutputFormat,

    #[arg(
        long,
        value_enum,
        default_value_t,
        global = true,
        help = "Log verbosity (RUST_LOG takes precedence)"
    )]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive browser: film list on the left, opening crawl on the right
    Browse {
        #[arg(default_value = "/", help = "Location to open, e.g. /films/1")]
        path: String,
    },

    /// Print every film in catalog order
    Films,

    /// Print one film with its opening crawl
    Film { id: String },
}
