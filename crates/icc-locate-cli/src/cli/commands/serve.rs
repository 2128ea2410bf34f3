//! `icc-locate serve` – run the HTTP resolver.

use anyhow::Result;
use icc_locate_core::config::LocateConfig;
use icc_locate_core::server::{self, AppState};
use std::sync::Arc;

pub async fn run_serve(cfg: &LocateConfig, listen: Option<&str>) -> Result<()> {
    let addr = listen.unwrap_or(&cfg.listen_addr);
    let state = Arc::new(AppState::from_config(cfg));
    server::serve(addr, state).await
}
