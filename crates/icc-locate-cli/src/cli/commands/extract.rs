//! `icc-locate extract <file>` – show what a local bundle says about its manifest.

use anyhow::{Context, Result};
use icc_locate_core::extract::{extract_manifest, ManifestRef};
use icc_locate_core::location::MANIFEST_FILENAME;
use std::path::Path;
use std::process::ExitCode;

pub fn run_extract(file: &Path) -> Result<ExitCode> {
    let bytes = std::fs::read(file).with_context(|| format!("read bundle: {}", file.display()))?;
    let script = String::from_utf8_lossy(&bytes);

    match extract_manifest(&script) {
        Some(ManifestRef::Inline(manifest)) => {
            println!("{}", serde_json::to_string_pretty(&manifest)?);
            Ok(ExitCode::SUCCESS)
        }
        Some(ManifestRef::Filename(name)) => {
            println!("{name}");
            Ok(ExitCode::SUCCESS)
        }
        None => {
            if script.contains(MANIFEST_FILENAME) {
                eprintln!("bundle mentions {MANIFEST_FILENAME} but embeds no readable manifest");
            } else {
                eprintln!("no manifest signal in {}", file.display());
            }
            Ok(super::not_found())
        }
    }
}
