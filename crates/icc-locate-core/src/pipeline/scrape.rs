//! Entry page and bundle scraping.

use regex::Regex;
use std::sync::OnceLock;

use super::Step;
use crate::extract::{extract_manifest, ManifestRef};
use crate::fetch::Fetcher;
use crate::location::{Location, MANIFEST_FILENAME};
use crate::resolution::{NotFoundReason, Resolution};

/// Folder (under the site folder) that built bundles are served from.
pub const SCRIPT_DIR: &str = "js/";

fn bundle_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"app\.[A-Za-z0-9]{8}\.js").expect("valid regex"))
}

/// First fingerprinted bundle filename (`app.<8 alnum>.js`) referenced in `html`.
pub fn find_bundle_reference(html: &str) -> Option<&str> {
    bundle_re().find(html).map(|m| m.as_str())
}

pub(super) async fn bundle<F: Fetcher>(fetcher: &F, location: Location) -> Step {
    let html = match fetcher.fetch_text(&location.html_path).await {
        Ok(text) => text,
        Err(e) => {
            tracing::debug!(html = %location.html_path, error = %e, "entry page not fetched");
            return Step::Continue(location);
        }
    };
    let Some(bundle) = find_bundle_reference(&html) else {
        tracing::debug!(html = %location.html_path, "no fingerprinted bundle referenced");
        return Step::Continue(location);
    };

    let script_path = format!("{}{}{}", location.folder, SCRIPT_DIR, bundle);
    let script = match fetcher.fetch_text(&script_path).await {
        Ok(text) => text,
        Err(e) => {
            tracing::debug!(script = %script_path, error = %e, "bundle not fetched");
            return Step::Continue(location);
        }
    };

    match extract_manifest(&script) {
        Some(ManifestRef::Inline(manifest)) => {
            tracing::debug!(script = %script_path, keys = manifest.len(), "embedded manifest");
            Step::Done(Resolution::inline(&location, manifest))
        }
        Some(ManifestRef::Filename(name)) => {
            tracing::debug!(script = %script_path, %name, "bundle names a manifest file");
            let manifest_path = format!("{}{}", location.folder, name);
            Step::Done(Resolution::link(&location, manifest_path))
        }
        None if script.contains(MANIFEST_FILENAME) => {
            tracing::debug!(script = %script_path, "bundle mentions {} but none found", MANIFEST_FILENAME);
            Step::Done(Resolution::not_found(NotFoundReason::ManifestMissing, &location))
        }
        None => Step::Continue(location),
    }
}
