//! Hash-based client-side routing.
//!
//! Route state lives entirely in the URL hash (`#/<key>`), so the browser's
//! back and forward buttons work without any history bookkeeping.
//!
//! ## Route change
//!
//! ```text
//! hashchange ─► resolve key ─► Loading ─► fetch ─┬─► error panel        (Failed)
//!                                                 └─► content, title,
//!                                                     nav, page title,
//!                                                     hook, commit       (Rendered)
//! ```
//!
//! ## Example
//!
//! ```ignore
//! use kevera_pages::router::{HashRouter, PageHooks, RouteTable};
//!
//! let router = HashRouter::new(RouteTable::kevera(), &config, view, fetcher, location)
//!     .with_hooks(PageHooks::kevera());
//! router.navigate("sewing")?;
//! ```

mod core;
mod extract;
mod hooks;
mod route;

pub use self::core::{HashRouter, NavigationOutcome, RoutePhase};
pub use extract::{ContentExtraction, extract_main_content};
pub use hooks::{PageHook, PageHooks};
pub use route::{HASH_PREFIX, Route, RouteTable, UNKNOWN_TITLE, kevera_routes};

/// Returns `href` when it points at an in-app route (`#/...`).
///
/// Used by nav-link click delegation; anything else is left to the browser.
pub fn internal_hash_link(href: Option<&str>) -> Option<&str> {
	href.filter(|h| h.starts_with(HASH_PREFIX))
}
