//! Existence-check stages: direct manifest, then `<input>.html` candidate.

use super::{exists, Step};
use crate::fetch::Fetcher;
use crate::location::Location;
use crate::resolution::Resolution;

pub(super) async fn direct_manifest<F: Fetcher>(fetcher: &F, location: Location) -> Step {
    let manifest = location.manifest_path();
    if exists(fetcher, &manifest).await {
        tracing::debug!(%manifest, "manifest found in folder");
        return Step::Done(Resolution::link(&location, manifest));
    }
    Step::Continue(location)
}

/// Treats the input as a page name. If `<input>.html` exists, the location is
/// re-rooted on that page's folder whether or not a manifest is found there.
pub(super) async fn page_candidate<F: Fetcher>(fetcher: &F, location: Location) -> Step {
    let Some(candidate) = location.page_candidate() else {
        return Step::Continue(location);
    };
    if !exists(fetcher, &candidate).await {
        return Step::Continue(location);
    }

    tracing::debug!(%candidate, "page candidate exists");
    let location = location.retarget(candidate);
    let manifest = location.manifest_path();
    if exists(fetcher, &manifest).await {
        tracing::debug!(%manifest, "manifest found next to page");
        return Step::Done(Resolution::link(&location, manifest));
    }
    Step::Continue(location)
}
