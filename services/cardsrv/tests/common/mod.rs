//! Common test utilities

use std::sync::Arc;

use anyhow::Result;
use cardsrv::api::create_router;
use cardsrv::{AppState, Config};
use voucher_core::BrandRegistry;

/// Create a test router over a fresh application state
pub fn create_test_router() -> Result<axum::Router> {
    let state = Arc::new(AppState {
        config: Config::default(),
        registry: BrandRegistry::builtin()?,
    });
    Ok(create_router(state))
}
