// File: crates/trends-cli/src/fetch.rs
// Summary: CSV source fetchers: blocking HTTP against a base URL, or a local data directory.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::blocking::Client;

/// Upstream data directory of the published chart sources.
pub const DATA_FILE_PATH: &str = "https://raw.githubusercontent.com/cfpb/consumer-credit-trends/master/data/";

/// Returns the text of a named source. Shared read-only across render tasks.
pub trait Fetcher: Sync {
    fn fetch(&self, source: &str) -> Result<String>;
}

pub struct HttpFetcher {
    client: Client,
    base: String,
}

impl HttpFetcher {
    pub fn new(base: impl Into<String>, timeout: Duration) -> Result<Self> {
        let mut base = base.into();
        if !base.ends_with('/') {
            base.push('/');
        }
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base })
    }

    pub fn url_for(&self, source: &str) -> String {
        format!("{}{}", self.base, source.trim_start_matches('/'))
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, source: &str) -> Result<String> {
        let url = self.url_for(source);
        let resp = self
            .client
            .get(&url)
            .send()
            .with_context(|| format!("GET {url}"))?
            .error_for_status()
            .with_context(|| format!("GET {url}"))?;
        resp.text().with_context(|| format!("reading body of {url}"))
    }
}

pub struct DirFetcher {
    root: PathBuf,
}

impl DirFetcher {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl Fetcher for DirFetcher {
    fn fetch(&self, source: &str) -> Result<String> {
        let path = self.root.join(source);
        std::fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))
    }
}

/// HTTP fetcher for `http(s)://` bases, directory fetcher otherwise.
pub fn fetcher_for(base: &str, timeout: Duration) -> Result<Box<dyn Fetcher>> {
    if base.starts_with("http://") || base.starts_with("https://") {
        Ok(Box::new(HttpFetcher::new(base, timeout)?))
    } else {
        Ok(Box::new(DirFetcher::new(base)))
    }
}
