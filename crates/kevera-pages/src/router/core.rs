//! Core Router Implementation.
//!
//! This module provides the [`HashRouter`] struct and the route-change
//! sequence.

use super::extract::ContentExtraction;
use super::hooks::PageHooks;
use super::route::RouteTable;
use crate::config::RouterConfig;
use crate::error::{FetchError, RouterError};
use crate::view::{FragmentFetcher, HashLocation, LOAD_FAILED_MESSAGE, PageView};
use crate::{debug_log, error_log};
use std::cell::{Cell, RefCell};

/// Where the router is in its current navigation.
///
/// `Rendered` and `Failed` are resting states; any hash change re-enters
/// `Loading`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoutePhase {
	/// No navigation has run yet.
	Idle,
	/// A fragment request is in flight.
	Loading {
		/// Key being loaded.
		key: String,
	},
	/// The last navigation rendered its route.
	Rendered,
	/// The last navigation ended on the error panel.
	Failed,
}

/// Result of one [`HashRouter::handle_route_change`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationOutcome {
	/// Content, title, nav and hook were applied.
	Rendered(String),
	/// The fragment failed to load; the error panel is showing.
	Failed {
		/// Key that failed.
		key: String,
		/// Why the fetch failed.
		error: FetchError,
	},
	/// A newer navigation started while this one was loading.
	Superseded(String),
	/// Resolved key has no route; nothing changed.
	Missing(String),
}

/// Hash router that swaps fetched fragments into a page container.
///
/// All methods take `&self` so one instance can be shared between the
/// `hashchange` listener and in-flight loads.
pub struct HashRouter<V, F, L> {
	table: RouteTable,
	title_prefix: String,
	extraction: ContentExtraction,
	hooks: PageHooks,
	view: V,
	fetcher: F,
	location: L,
	current: RefCell<Option<String>>,
	phase: RefCell<RoutePhase>,
	/// Monotonic navigation attempt counter.
	attempt: Cell<u64>,
}

impl<V, F, L> std::fmt::Debug for HashRouter<V, F, L> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("HashRouter")
			.field("routes_count", &self.table.len())
			.field("current", &self.current.borrow())
			.field("phase", &self.phase.borrow())
			.field("attempt", &self.attempt.get())
			.finish()
	}
}

impl<V, F, L> HashRouter<V, F, L>
where
	V: PageView,
	F: FragmentFetcher,
	L: HashLocation,
{
	/// Creates a router over `table`.
	pub fn new(table: RouteTable, config: &RouterConfig, view: V, fetcher: F, location: L) -> Self {
		Self {
			table,
			title_prefix: config.title_prefix.clone(),
			extraction: config.extraction,
			hooks: PageHooks::new(),
			view,
			fetcher,
			location,
			current: RefCell::new(None),
			phase: RefCell::new(RoutePhase::Idle),
			attempt: Cell::new(0),
		}
	}

	/// Sets the page hooks.
	pub fn with_hooks(mut self, hooks: PageHooks) -> Self {
		self.hooks = hooks;
		self
	}

	/// The route table.
	pub fn table(&self) -> &RouteTable {
		&self.table
	}

	/// The view the router renders into.
	pub fn view(&self) -> &V {
		&self.view
	}

	/// The location the router reads and writes.
	pub fn location(&self) -> &L {
		&self.location
	}

	/// Key of the last successfully rendered route.
	pub fn current_route(&self) -> Option<String> {
		self.current.borrow().clone()
	}

	/// Current phase.
	pub fn phase(&self) -> RoutePhase {
		self.phase.borrow().clone()
	}

	/// Display title of `key`, or `"Unknown"`.
	pub fn route_title(&self, key: &str) -> &str {
		self.table.title_of(key)
	}

	/// Key the current location hash resolves to.
	pub fn resolve_current(&self) -> String {
		self.table.resolve(&self.location.hash()).to_string()
	}

	/// Writes the route's hash path to the location.
	///
	/// The resulting `hashchange` performs the actual route change. An
	/// unregistered key is logged and leaves the hash untouched.
	pub fn navigate(&self, key: &str) -> Result<(), RouterError> {
		let Some(route) = self.table.get(key) else {
			error_log!("Route not found: {}", key);
			return Err(RouterError::UnknownRoute(key.to_string()));
		};
		self.location.set_hash(&route.hash_path);
		Ok(())
	}

	/// Runs one route change for the current hash.
	///
	/// Loading placeholder, fetch, then either the error panel or content,
	/// title, nav highlight, page title, page hook and finally the committed
	/// current route. A result arriving after a newer call has started is
	/// dropped without touching the view.
	pub async fn handle_route_change(&self) -> NavigationOutcome {
		let key = self.resolve_current();
		let Some(route) = self.table.get(&key).cloned() else {
			error_log!("Route not found: {}", key);
			return NavigationOutcome::Missing(key);
		};

		let attempt = self.attempt.get() + 1;
		self.attempt.set(attempt);
		*self.phase.borrow_mut() = RoutePhase::Loading { key: key.clone() };
		debug_log!("Router: loading {} (attempt {})", key, attempt);

		self.view.show_loading();
		let fetched = self.fetcher.fetch_fragment(&route.fragment_source).await;

		if self.attempt.get() != attempt {
			debug_log!("Router: dropping superseded load of {}", key);
			return NavigationOutcome::Superseded(key);
		}

		let html = match fetched {
			Ok(html) => html,
			Err(error) => {
				error_log!("Error loading route {}: {}", key, error);
				self.view.show_error(LOAD_FAILED_MESSAGE);
				*self.phase.borrow_mut() = RoutePhase::Failed;
				return NavigationOutcome::Failed { key, error };
			}
		};

		self.view.set_content(&self.extraction.apply(&html));
		self.view
			.set_document_title(&format!("{} - {}", self.title_prefix, route.title));
		self.view.set_active_nav(&route.nav_id);
		self.view.set_page_title(&route.title);
		self.hooks.run(&key);

		*self.current.borrow_mut() = Some(key.clone());
		*self.phase.borrow_mut() = RoutePhase::Rendered;
		NavigationOutcome::Rendered(key)
	}
}
