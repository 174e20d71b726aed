//! # Update Check
//!
//! Looks up the latest published release and compares it with the running
//! version. The lookup is slow network I/O, so it runs on its own thread:
//!
//! ```text
//! owning thread                      background thread
//! ─────────────                      ─────────────────
//! UpdateCheck::spawn(source, v) ───► source.latest_release()
//!        │                           parse_release(json)
//!        │                           compare with v
//!        │          mpsc channel  ◄── send(UpdateStatus)
//! try_status() ── None, None, Some(status)
//! ```
//!
//! The background thread owns nothing but the source and a channel sender. It
//! never sees the workspace; whatever the owning thread does with the result
//! (show a prompt, open the download URL) happens after it polls.
//!
//! Transport is injected through [`ReleaseSource`]. The payload is the JSON a
//! release feed returns for "latest release":
//!
//! ```json
//! {"tag_name": "v.1.4.0", "published_at": "2024-03-01T10:00:00Z",
//!  "assets": [{"browser_download_url": "https://…/setup.exe"}]}
//! ```

use crate::error::{BlitzError, Result};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::cmp::Ordering;
use std::fmt;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

/// Fetches the raw "latest release" document.
pub trait ReleaseSource: Send + 'static {
    fn latest_release(&self) -> Result<String>;
}

/// A dotted numeric version. Missing trailing components count as zero, so
/// `1.2` equals `1.2.0`.
#[derive(Debug, Clone)]
pub struct Version {
    parts: Vec<u64>,
}

impl Version {
    pub fn parse(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        let bare = trimmed
            .strip_prefix("v.")
            .or_else(|| trimmed.strip_prefix('v'))
            .unwrap_or(trimmed);

        let parts = bare
            .split('.')
            .map(|part| part.parse::<u64>())
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|_| BlitzError::Api(format!("Invalid version: {}", text)))?;
        Ok(Self { parts })
    }

    fn component(&self, index: usize) -> u64 {
        self.parts.get(index).copied().unwrap_or(0)
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        let width = self.parts.len().max(other.parts.len());
        (0..width)
            .map(|i| self.component(i).cmp(&other.component(i)))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self
            .parts
            .iter()
            .map(u64::to_string)
            .collect::<Vec<_>>()
            .join(".");
        f.write_str(&text)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Release {
    pub version: Version,
    pub download_url: String,
    pub published_at: Option<DateTime<Utc>>,
}

#[derive(Deserialize)]
struct RawRelease {
    tag_name: String,
    #[serde(default)]
    assets: Vec<RawAsset>,
    #[serde(default)]
    published_at: Option<DateTime<Utc>>,
}

#[derive(Deserialize)]
struct RawAsset {
    browser_download_url: String,
}

/// Reads the version tag and first download link out of a release document.
pub fn parse_release(json: &str) -> Result<Release> {
    let raw: RawRelease = serde_json::from_str(json).map_err(BlitzError::Serialization)?;
    let download_url = raw
        .assets
        .into_iter()
        .next()
        .map(|asset| asset.browser_download_url)
        .ok_or_else(|| BlitzError::Api("Release has no downloadable asset".to_string()))?;

    Ok(Release {
        version: Version::parse(&raw.tag_name)?,
        download_url,
        published_at: raw.published_at,
    })
}

#[derive(Debug, Clone, PartialEq)]
pub enum UpdateStatus {
    UpToDate,
    Available(Release),
    /// The lookup failed. Callers normally stay quiet about it.
    Failed(String),
}

/// Runs the lookup on the calling thread.
pub fn check<S: ReleaseSource>(source: &S, current: &Version) -> UpdateStatus {
    let release = match source.latest_release().and_then(|json| parse_release(&json)) {
        Ok(release) => release,
        Err(err) => {
            log::info!("update check failed: {}", err);
            return UpdateStatus::Failed(err.to_string());
        }
    };

    if release.version > *current {
        log::info!("update available: {} (running {})", release.version, current);
        UpdateStatus::Available(release)
    } else {
        UpdateStatus::UpToDate
    }
}

/// A lookup running in the background.
pub struct UpdateCheck {
    receiver: Receiver<UpdateStatus>,
    status: Option<UpdateStatus>,
}

impl UpdateCheck {
    pub fn spawn<S: ReleaseSource>(source: S, current: Version) -> Self {
        let (sender, receiver) = mpsc::channel();
        thread::spawn(move || {
            let status = check(&source, &current);
            // The receiver may be gone if the app shut down first.
            let _ = sender.send(status);
        });
        Self {
            receiver,
            status: None,
        }
    }

    /// The result, once the lookup has finished. Never blocks.
    pub fn try_status(&mut self) -> Option<&UpdateStatus> {
        if self.status.is_none() {
            match self.receiver.try_recv() {
                Ok(status) => self.status = Some(status),
                Err(TryRecvError::Empty) => {}
                Err(TryRecvError::Disconnected) => {
                    self.status = Some(UpdateStatus::Failed(
                        "update check ended without a result".to_string(),
                    ));
                }
            }
        }
        self.status.as_ref()
    }

    /// Blocks until the lookup finishes.
    pub fn wait(mut self) -> UpdateStatus {
        if let Some(status) = self.status.take() {
            return status;
        }
        self.receiver.recv().unwrap_or_else(|_| {
            UpdateStatus::Failed("update check ended without a result".to_string())
        })
    }
}
