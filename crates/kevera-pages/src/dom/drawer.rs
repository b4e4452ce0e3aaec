//! [`DrawerSurface`] over the sidebar elements, and its event wiring.

use crate::config::DrawerConfig;
use crate::drawer::{
	DrawerController, DrawerKey, DrawerSurface, FOCUSABLE_SELECTOR, FocusResponse, KeyResponse,
	REDUCED_MOTION_QUERY, transition_is_instant,
};
use crate::error::DomError;
use crate::storage::BrowserStorage;
use crate::{debug_log, warn_log};
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
	AddEventListenerOptions, Document, Element, Event, FocusEvent, HtmlElement, KeyboardEvent, Node,
	Window,
};

/// The drawer as mounted on the page.
pub type DomDrawerController = DrawerController<DomDrawer, BrowserStorage>;

struct DocumentListeners {
	keydown: Closure<dyn FnMut(KeyboardEvent)>,
	focus: Closure<dyn FnMut(FocusEvent)>,
}

struct Elements {
	window: Window,
	document: Document,
	toggle: Element,
	drawer: HtmlElement,
	backdrop: HtmlElement,
	open_class: String,
	show_class: String,
	listeners: RefCell<Option<DocumentListeners>>,
	attached: Cell<bool>,
}

/// Toggle button, drawer and backdrop elements.
#[derive(Clone)]
pub struct DomDrawer {
	inner: Rc<Elements>,
}

impl std::fmt::Debug for DomDrawer {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("DomDrawer")
			.field("drawer", &self.inner.drawer.id())
			.field("attached", &self.inner.attached.get())
			.finish()
	}
}

impl DomDrawer {
	/// Looks up the configured elements.
	pub fn bind(window: Window, config: &DrawerConfig) -> Result<Self, DomError> {
		let document = window
			.document()
			.ok_or_else(|| DomError::Js("no document".to_string()))?;
		let toggle = find(&document, &config.toggle_id)?;
		let drawer = find_html(&document, &config.drawer_id)?;
		let backdrop = find_html(&document, &config.backdrop_id)?;

		Ok(Self {
			inner: Rc::new(Elements {
				window,
				document,
				toggle,
				drawer,
				backdrop,
				open_class: config.open_class.clone(),
				show_class: config.show_class.clone(),
				listeners: RefCell::new(None),
				attached: Cell::new(false),
			}),
		})
	}

	fn install_listeners(&self, listeners: DocumentListeners) {
		*self.inner.listeners.borrow_mut() = Some(listeners);
	}

	fn prefers_reduced_motion(&self) -> bool {
		matches!(
			self.inner.window.match_media(REDUCED_MOTION_QUERY),
			Ok(Some(query)) if query.matches()
		)
	}

	fn transition_duration(&self) -> String {
		self.inner
			.window
			.get_computed_style(&self.inner.drawer)
			.ok()
			.flatten()
			.and_then(|style| style.get_property_value("transition-duration").ok())
			.unwrap_or_default()
	}
}

impl DrawerSurface for DomDrawer {
	type Node = Element;

	fn drawer_node(&self) -> Element {
		self.inner.drawer.clone().into()
	}

	fn set_hidden(&self, hidden: bool) {
		self.inner.drawer.set_hidden(hidden);
		self.inner.backdrop.set_hidden(hidden);
	}

	fn set_open_styling(&self, open: bool) {
		let drawer = self.inner.drawer.class_list();
		let backdrop = self.inner.backdrop.class_list();
		let result = if open {
			drawer
				.add_1(&self.inner.open_class)
				.and_then(|_| backdrop.add_1(&self.inner.show_class))
		} else {
			drawer
				.remove_1(&self.inner.open_class)
				.and_then(|_| backdrop.remove_1(&self.inner.show_class))
		};
		if let Err(e) = result {
			warn_log!("Drawer: class update failed: {:?}", e);
		}
	}

	fn set_expanded(&self, expanded: bool) {
		let value = if expanded { "true" } else { "false" };
		if let Err(e) = self.inner.toggle.set_attribute("aria-expanded", value) {
			warn_log!("Drawer: aria-expanded update failed: {:?}", e);
		}
	}

	fn is_expanded(&self) -> bool {
		self.inner.toggle.get_attribute("aria-expanded").as_deref() == Some("true")
	}

	fn active_node(&self) -> Option<Element> {
		self.inner.document.active_element()
	}

	fn focusable_nodes(&self) -> Vec<Element> {
		let Ok(list) = self.inner.drawer.query_selector_all(FOCUSABLE_SELECTOR) else {
			return Vec::new();
		};
		(0..list.length())
			.filter_map(|i| list.item(i))
			.filter_map(|node| node.dyn_into::<Element>().ok())
			.collect()
	}

	fn contains(&self, node: &Element) -> bool {
		let node: &Node = node;
		self.inner.drawer.contains(Some(node))
	}

	fn focus(&self, node: &Element) {
		if let Some(element) = node.dyn_ref::<HtmlElement>()
			&& let Err(e) = element.focus()
		{
			debug_log!("Drawer: focus failed: {:?}", e);
		}
	}

	fn next_frame(&self, task: Box<dyn FnOnce()>) {
		let callback = Closure::once_into_js(move || task());
		if self
			.inner
			.window
			.request_animation_frame(callback.unchecked_ref())
			.is_err()
		{
			warn_log!("Drawer: requestAnimationFrame unavailable");
		}
	}

	fn animates(&self) -> bool {
		!self.prefers_reduced_motion() && !transition_is_instant(&self.transition_duration())
	}

	fn after_transition(&self, task: Box<dyn FnOnce()>) {
		let callback = Closure::once_into_js(move |_event: Event| task());
		let options = AddEventListenerOptions::new();
		options.set_once(true);
		if self
			.inner
			.drawer
			.add_event_listener_with_callback_and_add_event_listener_options(
				"transitionend",
				callback.unchecked_ref(),
				&options,
			)
			.is_err()
		{
			warn_log!("Drawer: could not wait for transitionend");
		}
	}

	fn set_document_listeners(&self, attached: bool) {
		if self.inner.attached.replace(attached) == attached {
			return;
		}
		let listeners = self.inner.listeners.borrow();
		let Some(listeners) = listeners.as_ref() else {
			return;
		};

		let document = &self.inner.document;
		let keydown = listeners.keydown.as_ref().unchecked_ref();
		let focus = listeners.focus.as_ref().unchecked_ref();
		let result = if attached {
			document
				.add_event_listener_with_callback_and_bool("keydown", keydown, true)
				.and_then(|_| document.add_event_listener_with_callback_and_bool("focus", focus, true))
		} else {
			document
				.remove_event_listener_with_callback_and_bool("keydown", keydown, true)
				.and_then(|_| {
					document.remove_event_listener_with_callback_and_bool("focus", focus, true)
				})
		};
		if let Err(e) = result {
			warn_log!("Drawer: listener update failed: {:?}", e);
		}
	}
}

/// Binds the drawer elements and wires every trigger.
///
/// Fails when any required element is absent; the caller logs and carries on
/// without a drawer.
pub fn mount_drawer(window: Window, config: &DrawerConfig) -> Result<Rc<DomDrawerController>, DomError> {
	let surface = DomDrawer::bind(window, config)?;
	let controller = Rc::new(DrawerController::new(
		surface.clone(),
		BrowserStorage,
		config.storage_key.clone(),
	));

	let weak = Rc::downgrade(&controller);
	surface.install_listeners(DocumentListeners {
		keydown: Closure::new({
			let weak = weak.clone();
			move |event: KeyboardEvent| {
				let Some(controller) = weak.upgrade() else {
					return;
				};
				let key = DrawerKey::from_key(&event.key(), event.shift_key());
				if controller.handle_key(key) == KeyResponse::Consumed {
					event.prevent_default();
				}
			}
		}),
		focus: Closure::new({
			let weak = weak.clone();
			move |event: FocusEvent| {
				let Some(controller) = weak.upgrade() else {
					return;
				};
				let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
					return;
				};
				if controller.handle_focus_in(&target) == FocusResponse::Redirected {
					event.stop_propagation();
				}
			}
		}),
	});

	let inner = &surface.inner;
	on_click(&inner.toggle, &weak, |c, _| c.toggle())?;
	on_click(&inner.backdrop, &weak, |c, _| c.close())?;
	on_click(&inner.drawer, &weak, |c, event| {
		let on_link = event
			.target()
			.and_then(|t| t.dyn_into::<Element>().ok())
			.and_then(|el| el.closest("a[href]").ok().flatten())
			.is_some();
		c.handle_drawer_click(on_link);
	})?;
	if let Some(id) = &config.close_button_id {
		match inner.document.get_element_by_id(id) {
			Some(button) => on_click(&button, &weak, |c, _| c.close())?,
			None => debug_log!("Drawer: no #{} close button", id),
		}
	}

	controller.init();
	Ok(controller)
}

fn on_click<F>(target: &Element, controller: &Weak<DomDrawerController>, handler: F) -> Result<(), DomError>
where
	F: Fn(&DomDrawerController, &Event) + 'static,
{
	let controller = controller.clone();
	let closure = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
		if let Some(controller) = controller.upgrade() {
			handler(&controller, &event);
		}
	});
	target
		.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
		.map_err(|e| DomError::Js(format!("{e:?}")))?;
	// Listeners live as long as the page
	closure.forget();
	Ok(())
}

fn find(document: &Document, id: &str) -> Result<Element, DomError> {
	document
		.get_element_by_id(id)
		.ok_or_else(|| DomError::MissingElement(id.to_string()))
}

fn find_html(document: &Document, id: &str) -> Result<HtmlElement, DomError> {
	find(document, id)?
		.dyn_into::<HtmlElement>()
		.map_err(|_| DomError::Js(format!("#{id} is not an HTML element")))
}
