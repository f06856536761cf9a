//! Facade for the storefront client core. The presentation layer builds an
//! [`state::AppState`] once and calls the injected services; everything
//! else in the workspace is reachable through the re-exports below.

pub mod di;
pub mod state;

pub use cart;
pub use catalog;
pub use order;
pub use repair;
pub use shared;

use anyhow::Result;

/// One-call bootstrap for binaries embedding the core: loads `.env`,
/// initializes logging and wires the service container from the
/// environment.
pub fn bootstrap(component: &str) -> Result<state::AppState> {
    dotenv::dotenv().ok();
    shared::utils::init_logger(component);
    state::AppState::new()
}
