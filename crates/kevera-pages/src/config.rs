//! Application configuration.
//!
//! Every field has a default matching the dashboard markup, so an empty
//! document is a valid configuration:
//!
//! ```toml
//! [router]
//! title_prefix = "Kevera"
//! extraction = "main-content"
//!
//! [drawer]
//! storage_key = "sidebarOpen"
//!
//! [[routes]]
//! key = "dashboard"
//! fragment_source = "src/pages/dashboard.html"
//! title = "Dashboard"
//! nav_id = "nav-dashboard"
//! ```
//!
//! A `[[routes]]` list replaces the built-in table as a whole.

use crate::error::ConfigError;
use crate::router::{ContentExtraction, Route, RouteTable, kevera_routes};
use serde::Deserialize;

/// Router settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
	/// Id of the element route content is injected into.
	pub container_id: String,
	/// Key used for empty and unknown hashes.
	pub default_route: String,
	/// Document title prefix (`"<prefix> - <route title>"`).
	pub title_prefix: String,
	/// Attribute marking nav items; its value is the route's nav id.
	pub nav_item_attribute: String,
	/// Id of the secondary page-title element.
	pub page_title_id: Option<String>,
	/// Classes present on the active nav item.
	pub active_classes: Vec<String>,
	/// Classes present on every other nav item.
	pub inactive_classes: Vec<String>,
	/// Fragment post-processing.
	pub extraction: ContentExtraction,
}

impl Default for RouterConfig {
	fn default() -> Self {
		Self {
			container_id: "page-root".to_string(),
			default_route: "dashboard".to_string(),
			title_prefix: "Kevera".to_string(),
			nav_item_attribute: "data-nav-item".to_string(),
			page_title_id: Some("page-title".to_string()),
			active_classes: to_strings(&["bg-primary/10", "dark:bg-primary/20", "text-primary"]),
			inactive_classes: to_strings(&["text-gray-500", "dark:text-gray-400"]),
			extraction: ContentExtraction::default(),
		}
	}
}

/// Drawer settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DrawerConfig {
	/// Id of the button toggling the drawer.
	pub toggle_id: String,
	/// Id of the drawer panel.
	pub drawer_id: String,
	/// Id of the backdrop behind the drawer.
	pub backdrop_id: String,
	/// Id of an optional close button inside the drawer.
	pub close_button_id: Option<String>,
	/// Storage key of the open/closed preference.
	pub storage_key: String,
	/// Class added to the drawer while open.
	pub open_class: String,
	/// Class added to the backdrop while open.
	pub show_class: String,
}

impl Default for DrawerConfig {
	fn default() -> Self {
		Self {
			toggle_id: "menuToggle".to_string(),
			drawer_id: "appSidebar".to_string(),
			backdrop_id: "sidebarBackdrop".to_string(),
			close_button_id: Some("sidebarClose".to_string()),
			storage_key: "sidebarOpen".to_string(),
			open_class: "open".to_string(),
			show_class: "show".to_string(),
		}
	}
}

/// Complete configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
	/// Router settings.
	pub router: RouterConfig,
	/// Drawer settings.
	pub drawer: DrawerConfig,
	/// Route definitions.
	pub routes: Vec<Route>,
}

impl Default for AppConfig {
	fn default() -> Self {
		Self {
			router: RouterConfig::default(),
			drawer: DrawerConfig::default(),
			routes: kevera_routes(),
		}
	}
}

impl AppConfig {
	/// Parses a TOML document; missing sections and fields keep defaults.
	pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
		let config: Self = toml::from_str(source)?;
		config.route_table()?;
		Ok(config)
	}

	/// Builds the route table with the configured default key.
	pub fn route_table(&self) -> Result<RouteTable, ConfigError> {
		Ok(RouteTable::new(
			self.routes.clone(),
			self.router.default_route.clone(),
		)?)
	}
}

fn to_strings(items: &[&str]) -> Vec<String> {
	items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::RouterError;
	use rstest::rstest;

	#[rstest]
	fn test_empty_document_is_default() {
		let config = AppConfig::from_toml_str("").unwrap();
		assert_eq!(config, AppConfig::default());
		assert_eq!(config.route_table().unwrap().len(), 11);
	}

	#[rstest]
	fn test_partial_override() {
		let config = AppConfig::from_toml_str(
			r#"
			[router]
			title_prefix = "Kevera Staging"
			extraction = "verbatim"
			page_title_id = "heading"

			[drawer]
			storage_key = "drawer"
			"#,
		)
		.unwrap();

		assert_eq!(config.router.title_prefix, "Kevera Staging");
		assert_eq!(config.router.extraction, ContentExtraction::Verbatim);
		assert_eq!(config.router.page_title_id.as_deref(), Some("heading"));
		assert_eq!(config.router.container_id, "page-root");
		assert_eq!(config.drawer.storage_key, "drawer");
		assert_eq!(config.drawer.drawer_id, "appSidebar");
	}

	#[rstest]
	fn test_routes_replace_builtin_table() {
		let config = AppConfig::from_toml_str(
			r##"
			[router]
			default_route = "floor"

			[[routes]]
			key = "floor"
			fragment_source = "pages/floor.html"
			title = "Floor"
			nav_id = "nav-floor"
			"##,
		)
		.unwrap();

		let table = config.route_table().unwrap();
		assert_eq!(table.len(), 1);
		assert_eq!(table.get("floor").unwrap().hash_path, "#/floor");
		assert_eq!(table.resolve("#/sewing"), "floor");
	}

	#[rstest]
	fn test_default_route_must_exist() {
		let err = AppConfig::from_toml_str(
			r#"
			[router]
			default_route = "home"
			"#,
		)
		.unwrap_err();
		assert!(matches!(
			err,
			ConfigError::Routes(RouterError::MissingDefault(ref key)) if key == "home"
		));
	}

	#[rstest]
	fn test_malformed_toml() {
		let err = AppConfig::from_toml_str("[router\ntitle_prefix = 1").unwrap_err();
		assert!(matches!(err, ConfigError::Parse(_)));
	}

	#[rstest]
	fn test_unknown_extraction_mode_rejected() {
		let err = AppConfig::from_toml_str("[router]\nextraction = \"partial\"").unwrap_err();
		assert!(matches!(err, ConfigError::Parse(_)));
	}
}
