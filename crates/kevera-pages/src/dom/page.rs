//! [`PageView`] over the live document.

use crate::config::RouterConfig;
use crate::error::DomError;
use crate::view::{PageView, error_markup, loading_markup};
use crate::warn_log;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

/// Renders route changes into the page container.
#[derive(Debug, Clone)]
pub struct DomPageView {
	document: Document,
	container: Element,
	nav_attribute: String,
	page_title_id: Option<String>,
	active_classes: Vec<String>,
	inactive_classes: Vec<String>,
}

impl DomPageView {
	/// Binds to the configured container.
	///
	/// Fails when the container element is absent.
	pub fn bind(document: Document, config: &RouterConfig) -> Result<Self, DomError> {
		let container = document
			.get_element_by_id(&config.container_id)
			.ok_or_else(|| DomError::MissingElement(config.container_id.clone()))?;

		Ok(Self {
			document,
			container,
			nav_attribute: config.nav_item_attribute.clone(),
			page_title_id: config.page_title_id.clone(),
			active_classes: config.active_classes.clone(),
			inactive_classes: config.inactive_classes.clone(),
		})
	}

	fn nav_items(&self) -> Vec<Element> {
		let Ok(list) = self
			.document
			.query_selector_all(&format!("[{}]", self.nav_attribute))
		else {
			return Vec::new();
		};
		(0..list.length())
			.filter_map(|i| list.item(i))
			.filter_map(|node| node.dyn_into::<Element>().ok())
			.collect()
	}

	fn style_nav_item(&self, item: &Element, active: bool) {
		let classes = item.class_list();
		let (add, remove) = if active {
			(&self.active_classes, &self.inactive_classes)
		} else {
			(&self.inactive_classes, &self.active_classes)
		};
		for class in remove {
			if let Err(e) = classes.remove_1(class) {
				warn_log!("Router: could not remove class {}: {:?}", class, e);
			}
		}
		for class in add {
			if let Err(e) = classes.add_1(class) {
				warn_log!("Router: could not add class {}: {:?}", class, e);
			}
		}
	}
}

impl PageView for DomPageView {
	fn show_loading(&self) {
		self.container.set_inner_html(&loading_markup());
	}

	fn show_error(&self, message: &str) {
		// SAFETY(XSS): error_markup() escapes the message
		self.container.set_inner_html(&error_markup(message));
	}

	fn set_content(&self, html: &str) {
		// Fragments are first-party files served alongside the app
		self.container.set_inner_html(html);
	}

	fn set_document_title(&self, title: &str) {
		self.document.set_title(title);
	}

	fn set_active_nav(&self, nav_id: &str) {
		let items = self.nav_items();
		for item in &items {
			self.style_nav_item(item, false);
		}

		let active = items
			.iter()
			.find(|item| item.get_attribute(&self.nav_attribute).as_deref() == Some(nav_id));
		match active {
			Some(item) => self.style_nav_item(item, true),
			None => warn_log!("Router: no nav item for {}", nav_id),
		}
	}

	fn set_page_title(&self, title: &str) {
		let Some(id) = &self.page_title_id else {
			return;
		};
		if let Some(element) = self.document.get_element_by_id(id) {
			element.set_text_content(Some(title));
		}
	}
}
