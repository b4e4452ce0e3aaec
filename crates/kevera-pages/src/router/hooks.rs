//! Per-route initialization hooks.

use crate::info_log;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

/// Page initializer, run after a route's content is in the container.
pub type PageHook = Rc<dyn Fn()>;

/// Dispatch table from route key to page initializer.
///
/// Keys without a hook are ignored.
#[derive(Clone, Default)]
pub struct PageHooks {
	hooks: HashMap<String, PageHook>,
}

impl fmt::Debug for PageHooks {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut keys: Vec<_> = self.hooks.keys().collect();
		keys.sort();
		f.debug_struct("PageHooks").field("keys", &keys).finish()
	}
}

impl PageHooks {
	/// Creates an empty table.
	pub fn new() -> Self {
		Self::default()
	}

	/// The dashboard's page stubs (cutting, workers, admin).
	pub fn kevera() -> Self {
		Self::new()
			.on("cutting", || info_log!("Initializing cutting page..."))
			.on("workers", || info_log!("Initializing workers page..."))
			.on("admin", || info_log!("Initializing admin page..."))
	}

	/// Registers (or replaces) the hook for `key`.
	pub fn on<F>(mut self, key: impl Into<String>, hook: F) -> Self
	where
		F: Fn() + 'static,
	{
		self.hooks.insert(key.into(), Rc::new(hook));
		self
	}

	/// Runs the hook for `key`; returns whether one was registered.
	pub fn run(&self, key: &str) -> bool {
		match self.hooks.get(key) {
			Some(hook) => {
				hook();
				true
			}
			None => false,
		}
	}

	/// Checks if `key` has a hook.
	pub fn contains(&self, key: &str) -> bool {
		self.hooks.contains_key(key)
	}
}
