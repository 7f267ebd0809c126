//! Command-line arguments

use std::path::PathBuf;

use clap::{ArgAction, Parser};

#[derive(Debug, Parser)]
#[command(
    name = "get-papers-list",
    version,
    disable_version_flag = true,
    about = "Fetch PubMed papers with non-academic authors."
)]
pub struct Cli {
    /// PubMed query (use quotes)
    pub query: String,

    /// Output CSV file name
    #[arg(short = 'f', long = "file", value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Enable debug output
    #[arg(short = 'd', long = "debug")]
    pub debug: bool,

    /// Config file (TOML, or JSON by extension)
    #[arg(short = 'c', long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Contact email sent to NCBI with each request
    #[arg(long, value_name = "ADDR")]
    pub email: Option<String>,

    /// Maximum number of PubMed IDs to fetch
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub retmax: Option<u32>,

    /// Print version
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    version: (),
}
