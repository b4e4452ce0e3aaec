//! Kevera Pages - Dashboard Navigation for WASM
//!
//! Client-side navigation for the Kevera manufacturing-tracking dashboard:
//! a hash router that swaps HTML fragments into a page container and a
//! collapsible navigation drawer with focus management.
//!
//! ## Architecture
//!
//! - [`router`]: Route table, hash resolution and the route-change sequence
//! - [`drawer`]: Drawer open/close state machine, focus trap, key handling
//! - [`view`]: Seams between the sequencing logic and the page
//!   ([`PageView`], [`FragmentFetcher`], [`HashLocation`])
//! - [`storage`]: Best-effort preference persistence
//! - [`config`]: TOML configuration with dashboard defaults
//! - [`dom`]: `web-sys` implementations of the seams (WASM only)
//! - [`testing`]: In-memory fakes of the seams for native tests
//!
//! The sequencing code never touches `web-sys` directly, so everything except
//! [`dom`] runs and is tested on the native target.
//!
//! ## Example
//!
//! ```ignore
//! use kevera_pages::config::AppConfig;
//!
//! #[wasm_bindgen(start)]
//! pub fn main() -> Result<(), JsValue> {
//!     kevera_pages::dom::launch(AppConfig::default());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod drawer;
pub mod error;
pub mod logging;
pub mod router;
pub mod storage;
pub mod testing;
pub mod view;

// Browser bindings for the traits in `view`, `storage` and `drawer`
#[cfg(target_arch = "wasm32")]
pub mod dom;

pub use config::{AppConfig, DrawerConfig, RouterConfig};
pub use drawer::{DrawerController, DrawerKey, DrawerSurface, FocusResponse, KeyResponse};
pub use error::{ConfigError, DomError, FetchError, RouterError, StorageError};
pub use router::{
	ContentExtraction, HashRouter, NavigationOutcome, PageHooks, Route, RoutePhase, RouteTable,
};
pub use storage::{MemoryStore, PreferenceStore};
pub use view::{FragmentFetcher, HashLocation, PageView};

// Logging macros are automatically exported via #[macro_export]
// Users can access them as: kevera_pages::info_log!, kevera_pages::error_log!, etc.
