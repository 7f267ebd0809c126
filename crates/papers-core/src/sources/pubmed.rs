//! PubMed source plugin for biomedical literature
//!
//! API docs: https://www.ncbi.nlm.nih.gov/books/NBK25501/
//! Rate limit: 3 requests/second without API key, 10 with key

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use serde::Deserialize;

use super::traits::{SourceError, SourceMetadata};
use crate::domain::paper::UNKNOWN_PUBLICATION_DATE;
use crate::domain::{Author, Paper};

pub struct PubMedSource;

#[derive(Debug, Default, Deserialize)]
struct ESearchEnvelope {
    #[serde(default)]
    esearchresult: ESearchResult,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ESearchResult {
    #[serde(default)]
    idlist: Vec<String>,
    #[serde(default, rename = "ERROR")]
    error: Option<String>,
}

/// Accumulates one `<Author>` element
#[derive(Default)]
struct AuthorBuilder {
    last_name: String,
    fore_name: String,
    affiliations: Vec<String>,
    affiliation: String,
}

impl AuthorBuilder {
    fn finish(self) -> Author {
        let mut author = Author::from_parts(self.fore_name.trim(), self.last_name.trim());
        author.affiliations = self.affiliations;
        author
    }
}

/// Accumulates one `<PubmedArticle>` element
#[derive(Default)]
struct ArticleBuilder {
    pmid: Option<String>,
    title: String,
    title_done: bool,
    pub_date: Option<PubDateParts>,
    in_pub_date: bool,
    authors: Vec<Author>,
    author: Option<AuthorBuilder>,
}

#[derive(Default)]
struct PubDateParts {
    year: String,
    month: String,
    day: String,
}

impl ArticleBuilder {
    fn finish(self) -> Paper {
        let publication_date = match self.pub_date {
            Some(parts) => format_pub_date(&parts.year, &parts.month, &parts.day),
            None => UNKNOWN_PUBLICATION_DATE.to_string(),
        };
        Paper {
            pmid: self.pmid.unwrap_or_default(),
            title: self.title.trim().to_string(),
            publication_date,
            authors: self.authors,
        }
    }

    fn start(&mut self, name: &[u8]) {
        match name {
            b"PubDate" if self.pub_date.is_none() => {
                self.pub_date = Some(PubDateParts::default());
                self.in_pub_date = true;
            }
            b"Author" if self.author.is_none() => self.author = Some(AuthorBuilder::default()),
            _ => {}
        }
    }

    fn end(&mut self, name: &[u8], parent: Option<&[u8]>) {
        match name {
            b"ArticleTitle" => self.title_done = true,
            b"PubDate" => self.in_pub_date = false,
            b"Affiliation" if parent == Some(b"AffiliationInfo".as_slice()) => {
                if let Some(author) = self.author.as_mut() {
                    let text = std::mem::take(&mut author.affiliation);
                    let text = text.trim();
                    if !text.is_empty() {
                        author.affiliations.push(text.to_string());
                    }
                }
            }
            b"Author" => {
                if let Some(author) = self.author.take() {
                    self.authors.push(author.finish());
                }
            }
            _ => {}
        }
    }

    fn text(&mut self, text: &str, stack: &[Vec<u8>]) {
        let current = stack.last().map(Vec::as_slice);

        if !self.title_done && stack.iter().any(|n| n.as_slice() == b"ArticleTitle") {
            self.title.push_str(text);
            return;
        }

        match current {
            Some(b"PMID") if self.pmid.is_none() => self.pmid = Some(text.trim().to_string()),
            Some(b"Year") | Some(b"Month") | Some(b"Day") if self.in_pub_date => {
                if let Some(parts) = self.pub_date.as_mut() {
                    let value = text.trim().to_string();
                    match current {
                        Some(b"Year") => parts.year = value,
                        Some(b"Month") => parts.month = value,
                        _ => parts.day = value,
                    }
                }
            }
            _ => {
                let Some(author) = self.author.as_mut() else {
                    return;
                };
                match current {
                    Some(b"LastName") => author.last_name.push_str(text),
                    Some(b"ForeName") => author.fore_name.push_str(text),
                    _ if in_affiliation(stack) => author.affiliation.push_str(text),
                    _ => {}
                }
            }
        }
    }
}

/// Whether the innermost elements include `AffiliationInfo/Affiliation`
fn in_affiliation(stack: &[Vec<u8>]) -> bool {
    stack
        .windows(2)
        .any(|w| w[0].as_slice() == b"AffiliationInfo" && w[1].as_slice() == b"Affiliation")
}

/// `YYYY-MM-DD`, defaulting missing parts to `1900`, `01`, `01`.
///
/// Month and day are left-padded with `0` to two characters; textual months
/// such as `Jan` pass through unchanged.
pub fn format_pub_date(year: &str, month: &str, day: &str) -> String {
    let or_default = |value: &str, default: &'static str| {
        if value.is_empty() {
            default.to_string()
        } else {
            value.to_string()
        }
    };
    format!(
        "{}-{:0>2}-{:0>2}",
        or_default(year, "1900"),
        or_default(month, "01"),
        or_default(day, "01")
    )
}

fn element_name(e: &BytesStart<'_>) -> Vec<u8> {
    e.name().as_ref().to_vec()
}

impl PubMedSource {
    pub fn metadata() -> SourceMetadata {
        SourceMetadata {
            rate_limit_per_second: 3.0,
            keyed_rate_limit_per_second: 10.0,
        }
    }

    /// Parse PubMed XML response (efetch format)
    pub fn parse_efetch_response(xml: &str) -> Result<Vec<Paper>, SourceError> {
        let mut reader = Reader::from_str(xml);
        reader.trim_text(false);

        let mut papers = Vec::new();
        let mut buf = Vec::new();
        let mut stack: Vec<Vec<u8>> = Vec::new();
        let mut article: Option<ArticleBuilder> = None;
        // Element depth at which the current article's stack begins
        let mut article_depth = 0;

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) => {
                    let name = element_name(e);
                    if name.as_slice() == b"PubmedArticle" && article.is_none() {
                        article = Some(ArticleBuilder::default());
                        article_depth = stack.len() + 1;
                    } else if let Some(builder) = article.as_mut() {
                        builder.start(&name);
                    }
                    stack.push(name);
                }
                Ok(Event::Empty(ref e)) => {
                    // Self-closing elements carry no text; only an empty author matters.
                    if let Some(builder) = article.as_mut() {
                        let name = element_name(e);
                        builder.start(&name);
                        builder.end(&name, stack.last().map(Vec::as_slice));
                    }
                }
                Ok(Event::End(_)) => {
                    let name = stack.pop().unwrap_or_default();
                    if name.as_slice() == b"PubmedArticle" && stack.len() + 1 == article_depth {
                        if let Some(builder) = article.take() {
                            papers.push(builder.finish());
                        }
                    } else if let Some(builder) = article.as_mut() {
                        builder.end(&name, stack.last().map(Vec::as_slice));
                    }
                }
                Ok(Event::Text(e)) => {
                    if let Some(builder) = article.as_mut() {
                        let text = e
                            .unescape()
                            .map_err(|err| SourceError::Parse(format!("XML parse error: {}", err)))?;
                        builder.text(&text, &stack[article_depth.min(stack.len())..]);
                    }
                }
                Ok(Event::CData(e)) => {
                    if let Some(builder) = article.as_mut() {
                        let text = String::from_utf8_lossy(&e).to_string();
                        builder.text(&text, &stack[article_depth.min(stack.len())..]);
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => return Err(SourceError::Parse(format!("XML parse error: {}", e))),
                _ => {}
            }
            buf.clear();
        }

        tracing::debug!("Parsed {} PubMed articles", papers.len());
        Ok(papers)
    }

    /// Parse esearch JSON response (`retmode=json`) to get PMIDs
    pub fn parse_esearch_response(json: &str) -> Result<Vec<String>, SourceError> {
        let envelope: ESearchEnvelope = serde_json::from_str(json)
            .map_err(|e| SourceError::Parse(format!("JSON parse error: {}", e)))?;

        if let Some(message) = envelope.error {
            if message.to_lowercase().contains("rate limit") {
                return Err(SourceError::RateLimit);
            }
            return Err(SourceError::InvalidQuery(message));
        }
        if let Some(message) = envelope.esearchresult.error {
            return Err(SourceError::InvalidQuery(message));
        }

        Ok(envelope.esearchresult.idlist)
    }
}

#[cfg(feature = "native")]
mod client {
    use std::time::Duration;

    use super::PubMedSource;
    use crate::config::PubMedConfig;
    use crate::domain::Paper;
    use crate::http::HttpClient;
    use crate::sources::SourceError;

    /// Async E-utilities client: esearch for PMIDs, efetch for details
    pub struct PubMedClient {
        http: HttpClient,
        config: PubMedConfig,
    }

    impl PubMedClient {
        pub fn new(config: PubMedConfig) -> Result<Self, SourceError> {
            let user_agent = format!("{}/{}", config.tool, env!("CARGO_PKG_VERSION"));
            let http = HttpClient::new(&user_agent, Duration::from_secs(config.timeout_secs))?;
            Ok(Self { http, config })
        }

        pub fn config(&self) -> &PubMedConfig {
            &self.config
        }

        fn endpoint(&self, name: &str) -> String {
            let base = self.config.base_url.trim_end_matches('/');
            format!("{}/{}", base, name)
        }

        /// Parameters NCBI asks every client to send
        fn identity_params(&self) -> Vec<(&str, &str)> {
            let mut params = vec![
                ("email", self.config.email.as_str()),
                ("tool", self.config.tool.as_str()),
            ];
            if let Some(key) = self.config.api_key.as_deref() {
                params.push(("api_key", key));
            }
            params
        }

        fn request_interval(&self) -> Duration {
            let meta = PubMedSource::metadata();
            let rate = if self.config.api_key.is_some() {
                meta.keyed_rate_limit_per_second
            } else {
                meta.rate_limit_per_second
            };
            Duration::from_secs_f32(1.0 / rate)
        }

        /// Search PubMed and return up to `retmax` PMIDs
        pub async fn search(&self, query: &str) -> Result<Vec<String>, SourceError> {
            let retmax = self.config.retmax.to_string();
            let mut params = vec![
                ("db", "pubmed"),
                ("term", query),
                ("retmode", "json"),
                ("retmax", retmax.as_str()),
            ];
            params.extend(self.identity_params());

            let response = self
                .http
                .get_with_params(&self.endpoint("esearch.fcgi"), &params)
                .await?;
            let pmids = PubMedSource::parse_esearch_response(&response.body)?;
            tracing::debug!("esearch returned {} PMIDs", pmids.len());
            Ok(pmids)
        }

        /// Fetch article details, `fetch_batch_size` PMIDs per request.
        ///
        /// An empty PMID list performs no request.
        pub async fn fetch_details(&self, pmids: &[String]) -> Result<Vec<Paper>, SourceError> {
            let mut papers = Vec::with_capacity(pmids.len());

            for (i, batch) in pmids.chunks(self.config.fetch_batch_size).enumerate() {
                if i > 0 {
                    tokio::time::sleep(self.request_interval()).await;
                }
                let ids = batch.join(",");
                let mut params = vec![("db", "pubmed"), ("id", ids.as_str()), ("retmode", "xml")];
                params.extend(self.identity_params());

                let response = self
                    .http
                    .get_with_params(&self.endpoint("efetch.fcgi"), &params)
                    .await?;
                let parsed = PubMedSource::parse_efetch_response(&response.body)?;
                tracing::debug!("efetch batch {} returned {} articles", i + 1, parsed.len());
                papers.extend(parsed);
            }

            Ok(papers)
        }
    }

}

#[cfg(feature = "native")]
pub use client::PubMedClient;
