//! Preference persistence.
//!
//! Storage is best-effort: the drawer works the same whether or not a write
//! lands. Every access returns a [`StorageError`] instead of throwing, and the
//! caller decides to carry on.
//!
//! ## Example
//!
//! ```ignore
//! use kevera_pages::storage::{MemoryStore, PreferenceStore};
//!
//! let store = MemoryStore::new();
//! store.save("sidebarOpen", "true")?;
//! assert_eq!(store.load("sidebarOpen")?, Some("true".to_string()));
//! ```

use crate::error::StorageError;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

/// Synchronous key-value store for UI preferences.
pub trait PreferenceStore {
	/// Reads `key`; `Ok(None)` when never written.
	fn load(&self, key: &str) -> Result<Option<String>, StorageError>;

	/// Writes `key`.
	fn save(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory [`PreferenceStore`].
///
/// Clones share the same data. [`MemoryStore::unavailable`] builds a store
/// whose every access fails, for exercising degraded paths.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
	data: Rc<RefCell<HashMap<String, String>>>,
	failing: Rc<Cell<bool>>,
}

impl MemoryStore {
	/// Creates an empty store.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a store that rejects every access.
	pub fn unavailable() -> Self {
		let store = Self::default();
		store.failing.set(true);
		store
	}

	/// Turns failure on or off for this store and its clones.
	pub fn set_available(&self, available: bool) {
		self.failing.set(!available);
	}

	/// Reads a value bypassing failure simulation.
	pub fn peek(&self, key: &str) -> Option<String> {
		self.data.borrow().get(key).cloned()
	}
}

impl PreferenceStore for MemoryStore {
	fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
		if self.failing.get() {
			return Err(StorageError::Unavailable);
		}
		Ok(self.peek(key))
	}

	fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
		if self.failing.get() {
			return Err(StorageError::Unavailable);
		}
		self.data
			.borrow_mut()
			.insert(key.to_string(), value.to_string());
		Ok(())
	}
}

/// `window.localStorage` as a [`PreferenceStore`].
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Default)]
pub struct BrowserStorage;

#[cfg(target_arch = "wasm32")]
impl BrowserStorage {
	fn storage() -> Result<web_sys::Storage, StorageError> {
		let window = web_sys::window().ok_or(StorageError::Unavailable)?;
		// Throws in sandboxed frames and when storage is disabled
		window
			.local_storage()
			.map_err(|e| StorageError::Access(format!("{e:?}")))?
			.ok_or(StorageError::Unavailable)
	}
}

#[cfg(target_arch = "wasm32")]
impl PreferenceStore for BrowserStorage {
	fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
		Self::storage()?
			.get_item(key)
			.map_err(|e| StorageError::Access(format!("{e:?}")))
	}

	fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
		Self::storage()?
			.set_item(key, value)
			.map_err(|e| StorageError::Access(format!("{e:?}")))
	}
}
