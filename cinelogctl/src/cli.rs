use clap::{Args, Parser, Subcommand, ValueEnum};
use cinelog_core::{ColumnPolicy, ParseStrategy};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "cinelogctl",
    version,
    about = "Sort, filter and manage a cinelog movie table"
)]
pub struct Cli {
    /// Backend base URL (overrides `server_url` from the config)
    #[arg(long, env = "CINELOG_SERVER_URL", global = true)]
    pub server: Option<String>,
    /// Config file (TOML or JSON)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Sort a table file by one column, toggling the persisted direction
    Sort(SortArgs),
    /// Print the rows a watch filter leaves visible
    Filter {
        #[arg(long)]
        input: PathBuf,
        /// Only rows that have not been watched yet
        #[arg(long)]
        not_watched: bool,
    },
    /// Resolve a search bar input to its film page
    Search { input: String },
    /// Show the compact form of a rating
    Rating {
        /// Rating source, e.g. "Internet Movie Database"
        source: String,
        /// Rating value, e.g. "8.1/10"
        value: String,
    },
    /// Delete or refresh a film on the backend
    Film {
        #[command(subcommand)]
        action: FilmAction,
    },
    /// Update or delete a film's feedback entry
    Entry {
        #[command(subcommand)]
        action: EntryAction,
    },
}

#[derive(Debug, Args)]
pub struct SortArgs {
    /// Table JSON file
    #[arg(long)]
    pub input: PathBuf,
    /// Column index, or header name
    #[arg(long)]
    pub column: String,
    /// Sort state JSON file; read when present and rewritten afterwards
    #[arg(long)]
    pub state: Option<PathBuf>,
    /// Parsing policy; defaults to the configured one
    #[arg(long, value_enum)]
    pub policy: Option<PolicyArg>,
    /// Write the sorted table here instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PolicyArg {
    Canonical,
    Rating,
    Numeric,
    Integer,
    Text,
}

impl PolicyArg {
    pub fn policy(self) -> ColumnPolicy {
        match self {
            PolicyArg::Canonical => ColumnPolicy::canonical(),
            PolicyArg::Rating => ColumnPolicy::uniform(ParseStrategy::Rating),
            PolicyArg::Numeric => ColumnPolicy::uniform(ParseStrategy::Numeric),
            PolicyArg::Integer => ColumnPolicy::uniform(ParseStrategy::Integer),
            PolicyArg::Text => ColumnPolicy::uniform(ParseStrategy::Text),
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum FilmAction {
    /// Remove the film from the collection
    Delete { id: String },
    /// Re-fetch the film's metadata
    Refresh { id: String },
}

#[derive(Debug, Subcommand)]
pub enum EntryAction {
    /// Replace the film's feedback entry
    Update {
        id: String,
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        comment: String,
        #[arg(long)]
        watched: bool,
    },
    /// Delete the film's feedback entry
    Delete { id: String },
}
