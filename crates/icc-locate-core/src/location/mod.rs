//! Location modeling: turns a raw, possibly partial location string into the
//! folder prefix, entry page and manifest paths the pipeline probes.

mod normalize;

pub use normalize::{has_scheme, normalize, parent_folder, trim_separators};

/// Conventional manifest filename.
pub const MANIFEST_FILENAME: &str = "project.json";
/// Conventional entry page filename.
pub const ENTRY_PAGE: &str = "index.html";
/// Extension appended when the input names a page rather than a folder.
pub const ENTRY_PAGE_EXT: &str = ".html";
/// Scheme prefixed to inputs that carry none.
pub const DEFAULT_SCHEME: &str = "https://";

/// Request-scoped location state threaded through the pipeline stages.
///
/// `folder` is empty or ends in exactly one `/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    /// Trimmed, scheme-prefixed input without trailing separator.
    pub target: String,
    /// Folder prefix every relative convention is resolved under.
    pub folder: String,
    /// Entry page that gets scraped if no manifest is probed directly.
    pub html_path: String,
}

impl Location {
    /// Builds the state for a trimmed, scheme-prefixed target.
    pub(crate) fn for_target(target: String) -> Self {
        let folder = format!("{target}/");
        let html_path = format!("{folder}{ENTRY_PAGE}");
        Self {
            target,
            folder,
            html_path,
        }
    }

    /// `folder + project.json`.
    pub fn manifest_path(&self) -> String {
        format!("{}{}", self.folder, MANIFEST_FILENAME)
    }

    /// Candidate entry page formed from the target itself (`<target>.html`),
    /// or `None` when the target already names an HTML page.
    pub fn page_candidate(&self) -> Option<String> {
        if self.target.ends_with(ENTRY_PAGE_EXT) {
            None
        } else {
            Some(format!("{}{}", self.target, ENTRY_PAGE_EXT))
        }
    }

    /// Re-roots the location on an entry page that was found to exist:
    /// the folder becomes the target's parent and the page becomes `html_path`.
    pub fn retarget(self, html_path: String) -> Self {
        let folder = parent_folder(&self.target);
        Self {
            target: self.target,
            folder,
            html_path,
        }
    }
}
