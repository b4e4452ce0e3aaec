//! Browser tests for the `web-sys` bindings.
//!
//! Run with `wasm-pack test --headless --firefox crates/kevera-pages`.

#![cfg(target_arch = "wasm32")]

use kevera_pages::dom::{DomPageView, config_from_document, mount_drawer};
use kevera_pages::{DrawerConfig, DrawerSurface, PageView, RouterConfig};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

const FIXTURE: &str = r##"
	<button id="menuToggle" aria-expanded="false">Menu</button>
	<div id="sidebarBackdrop" hidden></div>
	<aside id="appSidebar" hidden>
		<a href="#/dashboard" data-nav-item="nav-dashboard">Dashboard</a>
		<a href="#/sewing" data-nav-item="nav-sewing">Sewing</a>
		<button id="sidebarClose">Close</button>
	</aside>
	<h1 id="page-title"></h1>
	<div id="page-root"></div>
"##;

fn document() -> Document {
	web_sys::window().unwrap().document().unwrap()
}

/// Installs the dashboard skeleton; dropped fixtures remove themselves.
struct Fixture(Element);

impl Fixture {
	fn new(html: &str) -> Self {
		let document = document();
		let root = document.create_element("div").unwrap();
		root.set_inner_html(html);
		document.body().unwrap().append_child(&root).unwrap();
		Self(root)
	}
}

impl Drop for Fixture {
	fn drop(&mut self) {
		self.0.remove();
	}
}

fn by_id(id: &str) -> Element {
	document().get_element_by_id(id).unwrap()
}

#[wasm_bindgen_test]
fn test_page_view_highlights_one_nav_item() {
	let _fixture = Fixture::new(FIXTURE);
	let view = DomPageView::bind(document(), &RouterConfig::default()).unwrap();

	view.set_active_nav("nav-dashboard");
	view.set_active_nav("nav-sewing");

	let sewing = document().query_selector("[data-nav-item=nav-sewing]").unwrap().unwrap();
	let dashboard = document().query_selector("[data-nav-item=nav-dashboard]").unwrap().unwrap();
	assert!(sewing.class_list().contains("text-primary"));
	assert!(!dashboard.class_list().contains("text-primary"));
	assert!(dashboard.class_list().contains("text-gray-500"));
}

#[wasm_bindgen_test]
fn test_page_view_titles_and_content() {
	let _fixture = Fixture::new(FIXTURE);
	let view = DomPageView::bind(document(), &RouterConfig::default()).unwrap();

	view.set_content("<p>Sewing</p>");
	view.set_document_title("Kevera - Sewing (Step 3)");
	view.set_page_title("Sewing (Step 3)");

	assert_eq!(by_id("page-root").inner_html(), "<p>Sewing</p>");
	assert_eq!(document().title(), "Kevera - Sewing (Step 3)");
	assert_eq!(by_id("page-title").text_content().as_deref(), Some("Sewing (Step 3)"));
}

#[wasm_bindgen_test]
fn test_page_view_requires_container() {
	let config = RouterConfig {
		container_id: "no-such-container".to_string(),
		..RouterConfig::default()
	};

	assert!(DomPageView::bind(document(), &config).is_err());
}

#[wasm_bindgen_test]
fn test_drawer_toggle_and_close() {
	let _fixture = Fixture::new(FIXTURE);
	let window = web_sys::window().unwrap();
	let controller = mount_drawer(window, &DrawerConfig::default()).unwrap();

	controller.toggle();
	assert!(controller.is_open());
	assert!(controller.surface().is_expanded());
	assert!(!by_id("appSidebar").unchecked_into::<HtmlElement>().hidden());

	controller.close();
	assert!(!controller.is_open());
	assert_eq!(
		by_id("menuToggle").get_attribute("aria-expanded").as_deref(),
		Some("false")
	);
}

#[wasm_bindgen_test]
fn test_drawer_missing_elements_is_error() {
	let config = DrawerConfig {
		drawer_id: "no-such-drawer".to_string(),
		..DrawerConfig::default()
	};

	assert!(mount_drawer(web_sys::window().unwrap(), &config).is_err());
}

#[wasm_bindgen_test]
fn test_config_defaults_without_script() {
	let config = config_from_document(&document());

	assert_eq!(config.router.container_id, "page-root");
	assert_eq!(config.routes.len(), 11);
}

#[wasm_bindgen_test]
fn test_config_from_inline_script() {
	let _fixture = Fixture::new(
		r#"<script type="application/toml" id="kevera-config">
[router]
title_prefix = "Plant 2"
</script>"#,
	);

	let config = config_from_document(&document());

	assert_eq!(config.router.title_prefix, "Plant 2");
	assert_eq!(config.router.default_route, "dashboard");
}
