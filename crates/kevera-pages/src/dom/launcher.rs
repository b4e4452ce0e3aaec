//! Page start-up: configuration, router and drawer wiring.

use super::drawer::mount_drawer;
use super::fetch::GlooFetcher;
use super::location::WindowLocation;
use super::page::DomPageView;
use crate::config::{AppConfig, RouterConfig};
use crate::error::DomError;
use crate::router::{HashRouter, PageHooks, RouteTable, internal_hash_link};
use crate::view::HashLocation;
use crate::{debug_log, error_log, info_log, warn_log};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, Event, Window};

/// Id of the optional inline TOML configuration script.
pub const CONFIG_SCRIPT_ID: &str = "kevera-config";

const RELOAD_SELECTOR: &str = "[data-reload]";

/// The router as mounted on the page.
pub type DomRouter = HashRouter<DomPageView, GlooFetcher, WindowLocation>;

/// Reads `<script type="application/toml" id="kevera-config">`.
///
/// Absent configuration yields the defaults; invalid configuration is logged
/// and also yields the defaults.
pub fn config_from_document(document: &Document) -> AppConfig {
	let Some(source) = document
		.get_element_by_id(CONFIG_SCRIPT_ID)
		.and_then(|script| script.text_content())
	else {
		debug_log!("Config: no #{} script, using defaults", CONFIG_SCRIPT_ID);
		return AppConfig::default();
	};

	match AppConfig::from_toml_str(&source) {
		Ok(config) => config,
		Err(e) => {
			error_log!("Config: {}; using defaults", e);
			AppConfig::default()
		}
	}
}

/// Binds the router to the page and starts listening for hash changes.
///
/// Runs the initial route change before returning. Fails when the container
/// is absent.
pub fn mount_router(
	window: Window,
	config: &RouterConfig,
	table: RouteTable,
	hooks: PageHooks,
) -> Result<Rc<DomRouter>, DomError> {
	let document = window
		.document()
		.ok_or_else(|| DomError::Js("no document".to_string()))?;
	let view = DomPageView::bind(document.clone(), config)?;
	let location = WindowLocation::new(window.clone());
	let router = Rc::new(
		HashRouter::new(table, config, view, GlooFetcher, location).with_hooks(hooks),
	);

	let on_hash_change = Closure::<dyn FnMut(Event)>::new({
		let router = Rc::clone(&router);
		move |_event: Event| run_route_change(&router)
	});
	window
		.add_event_listener_with_callback("hashchange", on_hash_change.as_ref().unchecked_ref())
		.map_err(|e| DomError::Js(format!("{e:?}")))?;
	// Listeners live as long as the page
	on_hash_change.forget();

	let nav_selector = format!("[{}]", config.nav_item_attribute);
	let on_click = Closure::<dyn FnMut(Event)>::new({
		let router = Rc::clone(&router);
		move |event: Event| {
			let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
				return;
			};
			if let Some(item) = closest(&target, &nav_selector) {
				event.prevent_default();
				let href = item.get_attribute("href");
				if let Some(hash) = internal_hash_link(href.as_deref()) {
					router.location().set_hash(hash);
				}
			} else if closest(&target, RELOAD_SELECTOR).is_some() {
				router.location().reload();
			}
		}
	});
	document
		.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
		.map_err(|e| DomError::Js(format!("{e:?}")))?;
	on_click.forget();

	run_route_change(&router);
	Ok(router)
}

/// Starts the dashboard: router first, then drawer.
///
/// A missing container disables the router and missing drawer elements
/// disable the drawer; each failure is logged and the other feature carries
/// on.
pub fn launch(config: AppConfig) {
	#[cfg(feature = "console_error_panic_hook")]
	console_error_panic_hook::set_once();

	let Some(window) = web_sys::window() else {
		error_log!("Launch: no window object");
		return;
	};

	let table = match config.route_table() {
		Ok(table) => table,
		Err(e) => {
			warn_log!("Launch: {}; using the built-in routes", e);
			RouteTable::kevera()
		}
	};

	match mount_router(window.clone(), &config.router, table, PageHooks::kevera()) {
		Ok(_) => info_log!("Router initialized"),
		Err(e) => error_log!("Router disabled: {}", e),
	}

	match mount_drawer(window, &config.drawer) {
		Ok(controller) => {
			info_log!("Drawer initialized");
			// Event handlers only hold weak references; the drawer lives as
			// long as the page
			std::mem::forget(controller);
		}
		Err(e) => warn_log!("Drawer disabled: {}", e),
	}
}

fn run_route_change(router: &Rc<DomRouter>) {
	let router = Rc::clone(router);
	spawn_local(async move {
		// Failures are logged by the router itself
		let _ = router.handle_route_change().await;
	});
}

fn closest(element: &Element, selector: &str) -> Option<Element> {
	element.closest(selector).ok().flatten()
}
