//! `icc-locate resolve <path>` – resolve once and print the response body.

use anyhow::Result;
use icc_locate_core::config::LocateConfig;
use icc_locate_core::fetch::CurlFetcher;
use icc_locate_core::pipeline;
use std::process::ExitCode;

pub async fn run_resolve(cfg: &LocateConfig, path: &str) -> Result<ExitCode> {
    let fetcher = CurlFetcher::new(cfg.http.clone());
    let resolution = pipeline::resolve(&fetcher, path).await;
    println!("{}", serde_json::to_string_pretty(&resolution.body())?);

    Ok(if resolution.is_found() {
        ExitCode::SUCCESS
    } else {
        super::not_found()
    })
}
