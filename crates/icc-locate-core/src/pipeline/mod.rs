//! Resolution pipeline: an ordered list of stages, each taking the current
//! [`Location`] and either finishing with a [`Resolution`] or handing a
//! possibly-updated location to the next stage.
//!
//! Stages run strictly in order and short-circuit on the first terminal
//! result. Every network call is an await point, so dropping the returned
//! future abandons the rest of the chain.

mod probe;
mod scrape;

pub use scrape::{find_bundle_reference, SCRIPT_DIR};

use crate::fetch::Fetcher;
use crate::location::{normalize, Location};
use crate::resolution::{NotFoundReason, Resolution};

/// Outcome of a single stage.
#[derive(Debug)]
pub enum Step {
    Done(Resolution),
    Continue(Location),
}

/// Manifest location conventions, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// HEAD `folder/project.json`.
    DirectManifest,
    /// HEAD `<input>.html`, then `project.json` next to it.
    PageCandidate,
    /// Scrape the entry page and its fingerprinted bundle.
    BundleScrape,
}

pub const STAGES: [Stage; 3] = [Stage::DirectManifest, Stage::PageCandidate, Stage::BundleScrape];

impl Stage {
    pub async fn run<F: Fetcher>(self, fetcher: &F, location: Location) -> Step {
        match self {
            Stage::DirectManifest => probe::direct_manifest(fetcher, location).await,
            Stage::PageCandidate => probe::page_candidate(fetcher, location).await,
            Stage::BundleScrape => scrape::bundle(fetcher, location).await,
        }
    }
}

/// Resolves a raw location string to exactly one [`Resolution`].
///
/// Never fails: transport errors and malformed content only move the chain
/// on to the next stage.
pub async fn resolve<F: Fetcher>(fetcher: &F, raw: &str) -> Resolution {
    let Some(mut location) = normalize(raw) else {
        tracing::info!("empty path");
        return Resolution::empty_path();
    };

    for stage in STAGES {
        tracing::debug!(?stage, folder = %location.folder, html = %location.html_path, "running stage");
        match stage.run(fetcher, location).await {
            Step::Done(resolution) => {
                tracing::info!(?stage, found = resolution.is_found(), html = resolution.html_path(), "resolved");
                return resolution;
            }
            Step::Continue(next) => location = next,
        }
    }

    tracing::info!(folder = %location.folder, "no manifest convention matched");
    Resolution::not_found(NotFoundReason::Unknown, &location)
}

/// Existence check where any error is a plain negative.
pub(crate) async fn exists<F: Fetcher>(fetcher: &F, url: &str) -> bool {
    match fetcher.probe(url).await {
        Ok(()) => true,
        Err(e) => {
            tracing::debug!(url, error = %e, "probe negative");
            false
        }
    }
}
