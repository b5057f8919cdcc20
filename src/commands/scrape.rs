//! Regulation scrape command

use regimed::config::Config;
use regimed::output::{OutputMode, ScrapeResult};
use regimed::scraper::{self, ReqwestClient};

/// Refresh the regulation snapshot from the configured pages
pub fn scrape(config: &Config, mode: OutputMode) -> anyhow::Result<()> {
    let client = ReqwestClient::new(&config.scraper)?;
    let store = config.regulation_store();

    let saved = scraper::refresh(&client, &config.scraper.urls, &store)?;

    let result = ScrapeResult {
        saved,
        output: store.path().display().to_string(),
    };
    print!("{}", result.format(mode));
    Ok(())
}
