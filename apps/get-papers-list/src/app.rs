//! Search, screen and report pipeline

use std::path::Path;

use papers_core::{
    format_plain, screen_papers, write_csv_file, AuthorAggregator, PapersConfig, PubMedClient,
    ReportRow, Result,
};

use crate::cli::Cli;

pub const NO_RESULTS_MESSAGE: &str = "No papers with non-academic authors found.";

/// Config file and environment first, then command-line overrides
pub fn load_config(cli: &Cli) -> Result<PapersConfig> {
    let mut config = PapersConfig::load_standard(cli.config.as_deref())?;
    if let Some(email) = &cli.email {
        config.pubmed.email = email.clone();
    }
    if let Some(retmax) = cli.retmax {
        config.pubmed.retmax = retmax;
    }
    config.validate()?;
    Ok(config)
}

/// Search PubMed and keep the papers with at least one non-academic author
pub async fn get_papers(query: &str, config: &PapersConfig) -> Result<Vec<ReportRow>> {
    let aggregator = AuthorAggregator::from_config(&config.signals)?;
    let client = PubMedClient::new(config.pubmed.clone())?;

    tracing::info!("Searching PubMed for query: {}", query);
    let pmids = client.search(query).await?;
    tracing::info!("Found {} papers. Fetching details...", pmids.len());

    let papers = client.fetch_details(&pmids).await?;
    let rows = screen_papers(&aggregator, &papers);
    tracing::info!("Found {} papers with non-academic authors.", rows.len());

    Ok(rows)
}

/// Write rows to `file` as CSV, or render them for the terminal.
///
/// Returns the text to print on stdout. Nothing is written when there are no rows.
pub fn emit(rows: &[ReportRow], file: Option<&Path>) -> Result<String> {
    if rows.is_empty() {
        return Ok(format!("{}\n", NO_RESULTS_MESSAGE));
    }

    match file {
        Some(path) => {
            write_csv_file(path, rows)?;
            Ok(format!("Results saved to {}\n", path.display()))
        }
        None => Ok(format_plain(rows)),
    }
}

pub async fn run(cli: &Cli) -> Result<String> {
    let config = load_config(cli)?;
    let rows = get_papers(&cli.query, &config).await?;
    emit(&rows, cli.file.as_deref())
}
