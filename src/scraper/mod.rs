//! Regulation scraper
//!
//! Downloads the configured regulation pages, reduces them to plain text
//! and replaces the stored snapshot. Pages that fail to download are
//! skipped with a warning; if none succeed the snapshot is left untouched.

mod html;

#[cfg(feature = "scrape")]
use std::time::Duration;

use log::{info, warn};
use thiserror::Error;

pub use html::html_to_text;

#[cfg(feature = "scrape")]
use crate::config::ScraperConfig;
use crate::core::models::Regulation;
use crate::core::ports::{RegulationStore, RegulationStoreError};

/// Errors that can occur while scraping
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Request could not be sent or the body could not be read
    #[error("failed to fetch {url}: {message}")]
    Fetch {
        /// Requested URL
        url: String,
        /// Transport error description
        message: String,
    },

    /// Server answered with a non-success status
    #[error("failed to fetch {url}: HTTP {status}")]
    Status {
        /// Requested URL
        url: String,
        /// HTTP status code
        status: u16,
    },

    /// The snapshot could not be written
    #[error("could not save regulations: {0}")]
    Store(#[from] RegulationStoreError),
}

/// HTTP client abstraction for dependency injection
pub trait HttpClient {
    /// Perform a GET request and return the response body
    fn get(&self, url: &str) -> Result<String, ScrapeError>;
}

/// Production HTTP client using reqwest
#[cfg(feature = "scrape")]
#[derive(Debug)]
pub struct ReqwestClient {
    client: reqwest::blocking::Client,
}

#[cfg(feature = "scrape")]
impl ReqwestClient {
    /// Build a client from scraper settings
    pub fn new(config: &ScraperConfig) -> Result<Self, ScrapeError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| ScrapeError::Fetch {
                url: String::new(),
                message: format!("could not create HTTP client: {e}"),
            })?;
        Ok(Self { client })
    }
}

#[cfg(feature = "scrape")]
impl HttpClient for ReqwestClient {
    fn get(&self, url: &str) -> Result<String, ScrapeError> {
        let fetch_error = |e: reqwest::Error| ScrapeError::Fetch {
            url: url.to_string(),
            message: e.to_string(),
        };

        let response = self.client.get(url).send().map_err(fetch_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        response.text().map_err(fetch_error)
    }
}

/// Download and convert every page, skipping failures
#[must_use]
pub fn scrape(client: &dyn HttpClient, urls: &[String]) -> Vec<Regulation> {
    urls.iter()
        .filter_map(|url| match client.get(url) {
            Ok(html) => {
                info!("fetched {url}");
                Some(Regulation::new(url.clone(), html_to_text(&html)))
            },
            Err(e) => {
                warn!("{e}");
                None
            },
        })
        .collect()
}

/// Scrape all pages and replace the stored snapshot
///
/// Returns the number of pages saved. Nothing is written when no page
/// could be fetched.
pub fn refresh(
    client: &dyn HttpClient,
    urls: &[String],
    store: &dyn RegulationStore,
) -> Result<usize, ScrapeError> {
    info!("scraping {} regulation page(s)", urls.len());
    let entries = scrape(client, urls);

    if entries.is_empty() {
        warn!("no pages scraped; nothing saved");
        return Ok(0);
    }

    store.save(&entries)?;
    info!("saved {} page(s)", entries.len());
    Ok(entries.len())
}
