//! # Kevera
//!
//! Browser entry point of the Kevera manufacturing-tracking dashboard.
//!
//! The navigation itself lives in [`pages`] (`kevera-pages`); this crate only
//! builds the `cdylib` the dashboard page loads and starts it.
//!
//! ## Feature Flags
//!
//! - `console_error_panic_hook` - Readable panic messages in the browser console
//! - `debug-hooks` - Enables `debug_log!` output in debug builds

pub use kevera_pages as pages;

pub use kevera_pages::{AppConfig, DrawerConfig, RouterConfig};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// WASM entry point
///
/// Reads the inline configuration, if any, and mounts the router and drawer.
#[allow(clippy::main_recursion)]
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
	let document = web_sys::window()
		.and_then(|window| window.document())
		.ok_or_else(|| JsValue::from_str("No document object"))?;

	kevera_pages::dom::launch(kevera_pages::dom::config_from_document(&document));
	Ok(())
}
