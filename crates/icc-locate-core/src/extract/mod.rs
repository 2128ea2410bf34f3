//! Manifest extraction from a built JavaScript bundle.
//!
//! Pure text scanning, no I/O. Every failure path returns `None` so callers
//! can treat "no manifest signal" uniformly.

mod braces;

use regex::Regex;
use serde_json::{Map, Value};
use std::sync::OnceLock;

/// Key that only ever appears as the first key of an embedded manifest object.
pub const EMBEDDED_MARKER: &str = "\"isEditModeOnAll\":";

/// What a bundle says about the manifest.
#[derive(Debug, Clone, PartialEq)]
pub enum ManifestRef {
    /// Manifest object embedded in the bundle.
    Inline(Map<String, Value>),
    /// Filename of a manifest the bundle loads at runtime.
    Filename(String),
}

fn json_filename_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[A-Za-z0-9_\-]+\.json").expect("valid regex"))
}

/// Looks for an embedded manifest object or, failing that, a `*.json` filename.
///
/// When [`EMBEDDED_MARKER`] is present the result is decided by the embedded
/// object alone: unbalanced braces or invalid JSON give `None`, and no
/// filename fallback is attempted.
pub fn extract_manifest(script: &str) -> Option<ManifestRef> {
    if let Some(start) = script.find(EMBEDDED_MARKER) {
        return embedded_object(script, start).map(ManifestRef::Inline);
    }
    json_filename_re()
        .find(script)
        .map(|m| ManifestRef::Filename(m.as_str().to_string()))
}

fn embedded_object(script: &str, start: usize) -> Option<Map<String, Value>> {
    let Some(body) = braces::close_object(script, start) else {
        tracing::debug!("embedded manifest marker found but braces never balance");
        return None;
    };
    // The opening brace sits right before the marker.
    let text = format!("{{{body}");
    match serde_json::from_str::<Value>(&text) {
        Ok(Value::Object(map)) => Some(map),
        Ok(_) => None,
        Err(e) => {
            tracing::warn!(error = %e, "failed to parse embedded manifest");
            None
        }
    }
}
