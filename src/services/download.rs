use std::fmt;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;
use reqwest::blocking::Client;

use crate::error::{Error, Result};

pub const BKRS_BASE_URL: &str = "https://bkrs.info/";

// Page listing the current dumps
const DOWNLOADS_PAGE: &str = "p47";

const TIMEOUT_SECS: u64 = 600;

static DAILY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"downloads/daily/dabkrs_\d+\.gz").unwrap());

static DAILY_RU_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"downloads/daily/dabruks_\d+\.gz").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DumpKind {
    /// Chinese-Russian daily dump.
    Daily,
    /// Russian-Chinese daily dump.
    DailyRu,
}

impl DumpKind {
    fn link_re(self) -> &'static Regex {
        match self {
            DumpKind::Daily => &*DAILY_RE,
            DumpKind::DailyRu => &*DAILY_RU_RE,
        }
    }
}

impl fmt::Display for DumpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DumpKind::Daily => f.write_str("daily"),
            DumpKind::DailyRu => f.write_str("daily ru"),
        }
    }
}

/// Provides a local copy of the latest dump.
pub trait DumpFetcher {
    fn fetch_latest(&self, kind: DumpKind) -> Result<PathBuf>;
}

/// Finds the dump link for `kind` in the downloads page HTML.
pub fn find_download_link(html: &str, kind: DumpKind) -> Option<&str> {
    kind.link_re().find(html).map(|m| m.as_str())
}

/// Downloads dumps from bkrs.info into a local directory.
pub struct BkrsDownloader {
    client: Client,
    base_url: String,
    download_dir: PathBuf,
}

impl BkrsDownloader {
    pub fn new(download_dir: impl Into<PathBuf>) -> Result<Self> {
        Self::with_base_url(BKRS_BASE_URL, download_dir)
    }

    pub fn with_base_url(base_url: &str, download_dir: impl Into<PathBuf>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(TIMEOUT_SECS))
            .build()?;

        let mut base_url = base_url.to_string();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }

        Ok(BkrsDownloader {
            client,
            base_url,
            download_dir: download_dir.into(),
        })
    }

    fn download(&self, url: &str, dest: &Path) -> Result<()> {
        let mut resp = self.client.get(url).send()?.error_for_status()?;
        let mut out = File::create(dest)?;
        resp.copy_to(&mut out)?;
        Ok(())
    }
}

impl DumpFetcher for BkrsDownloader {
    fn fetch_latest(&self, kind: DumpKind) -> Result<PathBuf> {
        tracing::info!("Downloading latest {} version...", kind);

        let page_url = format!("{}{}", self.base_url, DOWNLOADS_PAGE);
        let html = self
            .client
            .get(&page_url)
            .send()?
            .error_for_status()?
            .text()?;

        let link = find_download_link(&html, kind).ok_or(Error::DownloadLinkNotFound { kind })?;
        let url = format!("{}{}", self.base_url, link);

        // Link always ends in the file name
        let file_name = link.rsplit('/').next().unwrap_or(link);
        let dest = self.download_dir.join(file_name);

        if dest.exists() {
            tracing::info!("{} already exists. Skipping download.", dest.display());
            return Ok(dest);
        }

        if let Err(e) = self.download(&url, &dest) {
            // Don't leave a truncated dump that would be reused next time
            let _ = std::fs::remove_file(&dest);
            return Err(e);
        }

        tracing::info!("Downloaded {}", dest.display());
        Ok(dest)
    }
}
