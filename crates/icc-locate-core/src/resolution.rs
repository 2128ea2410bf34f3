//! Resolution outcomes and their JSON response bodies.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::location::{Location, ENTRY_PAGE};

/// `message` attached to inline manifest responses.
pub const INLINE_MESSAGE: &str = "Extracted project from app.js";

/// Why resolution ended without a manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotFoundReason {
    /// Input was empty after trimming.
    EmptyPath,
    /// The bundle references `project.json` but nothing could be located.
    ManifestMissing,
    /// No convention matched anywhere in the chain.
    Unknown,
}

impl NotFoundReason {
    pub fn as_str(self) -> &'static str {
        match self {
            NotFoundReason::EmptyPath => "Path is empty",
            NotFoundReason::ManifestMissing => "manifest appears required but does not exist",
            NotFoundReason::Unknown => "Unknown",
        }
    }
}

/// Exactly one of these is produced per request.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// Manifest object returned inline.
    Inline {
        html_path: String,
        manifest: Map<String, Value>,
        folder_path: String,
    },
    /// Caller must fetch `manifest_path` separately.
    Link {
        html_path: String,
        manifest_path: String,
        folder_path: String,
    },
    NotFound {
        reason: NotFoundReason,
        html_path: String,
        folder_path: String,
    },
}

impl Resolution {
    pub fn inline(location: &Location, manifest: Map<String, Value>) -> Self {
        Resolution::Inline {
            html_path: location.html_path.clone(),
            manifest,
            folder_path: location.folder.clone(),
        }
    }

    pub fn link(location: &Location, manifest_path: String) -> Self {
        Resolution::Link {
            html_path: location.html_path.clone(),
            manifest_path,
            folder_path: location.folder.clone(),
        }
    }

    pub fn not_found(reason: NotFoundReason, location: &Location) -> Self {
        Resolution::NotFound {
            reason,
            html_path: location.html_path.clone(),
            folder_path: location.folder.clone(),
        }
    }

    /// Result for input that is empty after trimming.
    pub fn empty_path() -> Self {
        Resolution::NotFound {
            reason: NotFoundReason::EmptyPath,
            html_path: ENTRY_PAGE.to_string(),
            folder_path: String::new(),
        }
    }

    /// True for the two success variants (HTTP 200); false maps to 404.
    pub fn is_found(&self) -> bool {
        !matches!(self, Resolution::NotFound { .. })
    }

    pub fn html_path(&self) -> &str {
        match self {
            Resolution::Inline { html_path, .. }
            | Resolution::Link { html_path, .. }
            | Resolution::NotFound { html_path, .. } => html_path,
        }
    }

    /// Wire shape of this outcome.
    pub fn body(&self) -> ResolutionBody<'_> {
        match self {
            Resolution::Inline {
                html_path,
                manifest,
                folder_path,
            } => ResolutionBody::Found {
                kind: "icc",
                html_path,
                project: Project::Inline(manifest),
                folder_path,
                message: Some(INLINE_MESSAGE),
            },
            Resolution::Link {
                html_path,
                manifest_path,
                folder_path,
            } => ResolutionBody::Found {
                kind: "icc_link",
                html_path,
                project: Project::Link(manifest_path),
                folder_path,
                message: None,
            },
            Resolution::NotFound {
                reason,
                html_path,
                folder_path,
            } => ResolutionBody::NotFound {
                reason: reason.as_str(),
                html_path,
                folder_path,
            },
        }
    }
}

/// JSON body sent to the caller.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ResolutionBody<'a> {
    Found {
        #[serde(rename = "type")]
        kind: &'static str,
        html_path: &'a str,
        project: Project<'a>,
        folder_path: &'a str,
        #[serde(skip_serializing_if = "Option::is_none")]
        message: Option<&'static str>,
    },
    NotFound {
        reason: &'static str,
        html_path: &'a str,
        folder_path: &'a str,
    },
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Project<'a> {
    Inline(&'a Map<String, Value>),
    Link(&'a str),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::normalize;
    use serde_json::json;

    fn body_json(r: &Resolution) -> Value {
        serde_json::to_value(r.body()).unwrap()
    }

    #[test]
    fn link_body() {
        let loc = normalize("example.com/app").unwrap();
        let r = Resolution::link(&loc, loc.manifest_path());
        assert!(r.is_found());
        assert_eq!(
            body_json(&r),
            json!({
                "type": "icc_link",
                "html_path": "https://example.com/app/index.html",
                "project": "https://example.com/app/project.json",
                "folder_path": "https://example.com/app/"
            })
        );
    }

    #[test]
    fn inline_body_carries_object_and_message() {
        let loc = normalize("example.com").unwrap();
        let manifest = json!({"isEditModeOnAll": false, "pages": []});
        let r = Resolution::inline(&loc, manifest.as_object().unwrap().clone());
        assert_eq!(
            body_json(&r),
            json!({
                "type": "icc",
                "html_path": "https://example.com/index.html",
                "project": {"isEditModeOnAll": false, "pages": []},
                "folder_path": "https://example.com/",
                "message": "Extracted project from app.js"
            })
        );
    }

    #[test]
    fn inline_body_keeps_manifest_key_order() {
        let loc = normalize("example.com").unwrap();
        let manifest: Map<String, Value> =
            serde_json::from_str(r#"{"isEditModeOnAll":true,"zeta":1,"alpha":2}"#).unwrap();
        let text = serde_json::to_string(&Resolution::inline(&loc, manifest).body()).unwrap();
        assert!(
            text.contains(r#""project":{"isEditModeOnAll":true,"zeta":1,"alpha":2}"#),
            "{text}"
        );
    }

    #[test]
    fn empty_path_body() {
        let r = Resolution::empty_path();
        assert!(!r.is_found());
        assert_eq!(
            body_json(&r),
            json!({"reason": "Path is empty", "html_path": "index.html", "folder_path": ""})
        );
    }

    #[test]
    fn not_found_reasons_are_distinct() {
        let loc = normalize("example.com").unwrap();
        let missing = Resolution::not_found(NotFoundReason::ManifestMissing, &loc);
        let unknown = Resolution::not_found(NotFoundReason::Unknown, &loc);
        assert_ne!(body_json(&missing)["reason"], body_json(&unknown)["reason"]);
        assert_eq!(body_json(&unknown)["reason"], "Unknown");
        assert_eq!(missing.html_path(), "https://example.com/index.html");
    }
}
