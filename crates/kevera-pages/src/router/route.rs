//! Route definitions and the static route table.

use crate::error::RouterError;
use serde::Deserialize;
use std::collections::HashMap;

/// Prefix every route's hash path starts with.
pub const HASH_PREFIX: &str = "#/";

/// Title returned for keys that have no route.
pub const UNKNOWN_TITLE: &str = "Unknown";

/// A single route definition.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Route {
	/// Unique key, also the hash segment (`#/<key>`).
	pub key: String,
	/// Full hash path written to the location on navigation.
	#[serde(default)]
	pub hash_path: String,
	/// URL of the HTML fragment to fetch.
	pub fragment_source: String,
	/// Display title.
	pub title: String,
	/// Value of the nav item's marker attribute.
	pub nav_id: String,
}

impl Route {
	/// Creates a route whose hash path is `#/<key>`.
	pub fn new(
		key: impl Into<String>,
		fragment_source: impl Into<String>,
		title: impl Into<String>,
		nav_id: impl Into<String>,
	) -> Self {
		let key = key.into();
		Self {
			hash_path: format!("{HASH_PREFIX}{key}"),
			key,
			fragment_source: fragment_source.into(),
			title: title.into(),
			nav_id: nav_id.into(),
		}
	}
}

/// Immutable lookup table of routes, built once at startup.
#[derive(Debug, Clone)]
pub struct RouteTable {
	routes: Vec<Route>,
	index: HashMap<String, usize>,
	default_key: String,
}

impl RouteTable {
	/// Builds a table, rejecting duplicate keys and an unregistered default.
	///
	/// Routes deserialized without a hash path get `#/<key>`.
	pub fn new(routes: Vec<Route>, default_key: impl Into<String>) -> Result<Self, RouterError> {
		let default_key = default_key.into();
		let mut index = HashMap::with_capacity(routes.len());
		let mut table = Vec::with_capacity(routes.len());

		for mut route in routes {
			if index.contains_key(&route.key) {
				return Err(RouterError::DuplicateRoute(route.key));
			}
			if route.hash_path.is_empty() {
				route.hash_path = format!("{HASH_PREFIX}{}", route.key);
			}
			index.insert(route.key.clone(), table.len());
			table.push(route);
		}

		if !index.contains_key(&default_key) {
			return Err(RouterError::MissingDefault(default_key));
		}

		Ok(Self {
			routes: table,
			index,
			default_key,
		})
	}

	/// The dashboard's route table with `dashboard` as default.
	pub fn kevera() -> Self {
		Self::new(kevera_routes(), "dashboard").expect("built-in route table is valid")
	}

	/// Maps a location hash to a registered key.
	///
	/// Strips the `#/` marker; an empty or unknown remainder falls back to the
	/// default key.
	pub fn resolve(&self, hash: &str) -> &str {
		let candidate = hash.strip_prefix(HASH_PREFIX).unwrap_or(hash);

		match self.index.get(candidate) {
			Some(&i) => &self.routes[i].key,
			None => &self.default_key,
		}
	}

	/// Looks up a route by key.
	pub fn get(&self, key: &str) -> Option<&Route> {
		self.index.get(key).map(|&i| &self.routes[i])
	}

	/// Checks if a key is registered.
	pub fn contains(&self, key: &str) -> bool {
		self.index.contains_key(key)
	}

	/// Display title of a key, or `"Unknown"`.
	pub fn title_of(&self, key: &str) -> &str {
		self.get(key).map_or(UNKNOWN_TITLE, |r| r.title.as_str())
	}

	/// The fallback key.
	pub fn default_key(&self) -> &str {
		&self.default_key
	}

	/// Routes in registration order.
	pub fn iter(&self) -> impl Iterator<Item = &Route> {
		self.routes.iter()
	}

	/// Returns the number of registered routes.
	pub fn len(&self) -> usize {
		self.routes.len()
	}

	/// Checks if the table is empty.
	pub fn is_empty(&self) -> bool {
		self.routes.is_empty()
	}
}

const KEVERA_ROUTES: &[(&str, &str, &str)] = &[
	("dashboard", "src/pages/dashboard.html", "Dashboard"),
	("intake", "src/pages/intake-step-1.html", "Intake (Step 1)"),
	("cutting", "src/pages/cutting-step-2.html", "Cutting & Bundling (Step 2)"),
	("sewing", "src/pages/sewing-step-3.html", "Sewing (Step 3)"),
	("ironing", "src/pages/ironing-step-4.html", "Ironing (Step 4)"),
	("packaging", "src/pages/labeling-step-5.html", "Labeling & Packaging (Step 5)"),
	// lots and settings reuse the dashboard fragment until their pages exist
	("lots", "src/pages/dashboard.html", "Lots & Tracking"),
	("workers", "src/pages/workers.html", "Workers"),
	("admin", "src/pages/admin.html", "Admin"),
	("audit", "src/pages/audit-log.html", "Audit Log"),
	("settings", "src/pages/dashboard.html", "Settings"),
];

/// The dashboard's routes; nav ids follow the `nav-<key>` convention.
pub fn kevera_routes() -> Vec<Route> {
	KEVERA_ROUTES
		.iter()
		.map(|(key, source, title)| Route::new(*key, *source, *title, format!("nav-{key}")))
		.collect()
}
