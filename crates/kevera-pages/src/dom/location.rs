//! [`HashLocation`] over `window.location`.

use crate::error_log;
use crate::view::HashLocation;
use web_sys::Window;

/// The browser's location hash.
#[derive(Debug, Clone)]
pub struct WindowLocation {
	window: Window,
}

impl WindowLocation {
	/// Wraps `window.location`.
	pub fn new(window: Window) -> Self {
		Self { window }
	}

	/// Full page reload, used by the error panel's button.
	pub fn reload(&self) {
		if let Err(e) = self.window.location().reload() {
			error_log!("Router: reload failed: {:?}", e);
		}
	}
}

impl HashLocation for WindowLocation {
	fn hash(&self) -> String {
		self.window.location().hash().unwrap_or_default()
	}

	fn set_hash(&self, hash: &str) {
		if let Err(e) = self.window.location().set_hash(hash) {
			error_log!("Router: could not set hash {}: {:?}", hash, e);
		}
	}
}
