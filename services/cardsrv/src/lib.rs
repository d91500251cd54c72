//! Gift-card voucher service (cardsrv)
//!
//! Thin HTTP façade over [`voucher_core`]:
//! - `GET /` service banner with the current US Eastern time
//! - `GET /cards` supported brand names
//! - `POST /generate` random vouchers for a brand
//! - `POST /validate` voucher/pin check against a brand's format
//!
//! The brand registry is built once at startup and shared read-only through
//! [`AppState`]; handlers hold no other state.

pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod shutdown;

pub use config::Config;
pub use error::CardsrvError;

use voucher_core::BrandRegistry;

/// Application state, read-only after startup.
pub struct AppState {
    pub config: Config,
    pub registry: BrandRegistry,
}
