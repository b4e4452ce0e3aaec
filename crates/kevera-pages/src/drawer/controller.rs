//! Drawer open/close state machine.

use super::focus::{DrawerKey, FocusResponse, KeyResponse, wrap_target};
use super::surface::DrawerSurface;
use crate::storage::PreferenceStore;
use crate::{debug_log, warn_log};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Stored preference value for an open drawer.
pub const OPEN_VALUE: &str = "true";

/// Stored preference value for a closed drawer.
pub const CLOSED_VALUE: &str = "false";

/// Controls a navigation drawer through a [`DrawerSurface`].
///
/// The open flag is shared with deferred tasks (next-frame styling,
/// transition-end hiding), which check it before touching the page so a
/// quick close/open sequence cannot leave the classes out of step.
pub struct DrawerController<S: DrawerSurface, P> {
	surface: S,
	store: P,
	storage_key: String,
	open: Rc<Cell<bool>>,
	/// Set once the next-frame task has actually applied the open styling.
	styled: Rc<Cell<bool>>,
	last_focus: RefCell<Option<S::Node>>,
	listening: Cell<bool>,
}

impl<S: DrawerSurface, P> std::fmt::Debug for DrawerController<S, P> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("DrawerController")
			.field("storage_key", &self.storage_key)
			.field("open", &self.open.get())
			.field("listening", &self.listening.get())
			.finish()
	}
}

impl<S: DrawerSurface, P: PreferenceStore> DrawerController<S, P> {
	/// Creates a closed controller.
	pub fn new(surface: S, store: P, storage_key: impl Into<String>) -> Self {
		Self {
			surface,
			store,
			storage_key: storage_key.into(),
			open: Rc::new(Cell::new(false)),
			styled: Rc::new(Cell::new(false)),
			last_focus: RefCell::new(None),
			listening: Cell::new(false),
		}
	}

	/// Puts the page into the closed state.
	///
	/// The drawer starts closed on every load whatever preference is stored;
	/// the stored value is only read for diagnostics.
	pub fn init(&self) {
		match self.store.load(&self.storage_key) {
			Ok(saved) => debug_log!("Drawer: stored preference {:?}", saved),
			Err(err) => debug_log!("Drawer: preference unreadable: {}", err),
		}
		self.surface.set_expanded(false);
	}

	/// The surface this controller drives.
	pub fn surface(&self) -> &S {
		&self.surface
	}

	/// Whether the drawer is open.
	pub fn is_open(&self) -> bool {
		self.open.get()
	}

	/// Opens the drawer and traps focus inside it.
	pub fn open(&self) {
		if self.open.replace(true) {
			return;
		}

		*self.last_focus.borrow_mut() = self.surface.active_node();
		self.surface.set_hidden(false);

		// Styling goes on a frame later so the unhide is painted and the
		// transition actually runs.
		let surface = self.surface.clone();
		let open = Rc::clone(&self.open);
		let styled = Rc::clone(&self.styled);
		self.surface.next_frame(Box::new(move || {
			if open.get() {
				surface.set_open_styling(true);
				styled.set(true);
			}
		}));

		self.surface.set_expanded(true);
		self.focus_first();
		self.persist(OPEN_VALUE);
		self.listen(true);
	}

	/// Closes the drawer and restores focus. No-op when already closed.
	pub fn close(&self) {
		if !self.open.replace(false) {
			return;
		}

		// Without the open styling there is no transition to wait for
		let was_styled = self.styled.replace(false);
		self.surface.set_open_styling(false);
		self.surface.set_expanded(false);

		let surface = self.surface.clone();
		let open = Rc::clone(&self.open);
		let hide = move || {
			if !open.get() {
				surface.set_hidden(true);
			}
		};
		if was_styled && self.surface.animates() {
			self.surface.after_transition(Box::new(hide));
		} else {
			hide();
		}

		self.persist(CLOSED_VALUE);
		self.listen(false);

		if let Some(node) = self.last_focus.borrow_mut().take() {
			self.surface.focus(&node);
		}
	}

	/// Opens or closes based on the toggle button's expanded state.
	pub fn toggle(&self) {
		if self.surface.is_expanded() {
			self.close();
		} else {
			self.open();
		}
	}

	/// Document key handler: Escape closes, Tab wraps inside the drawer.
	pub fn handle_key(&self, key: DrawerKey) -> KeyResponse {
		if !self.is_open() {
			return KeyResponse::Ignored;
		}

		match key {
			DrawerKey::Escape => {
				self.close();
				KeyResponse::Consumed
			}
			DrawerKey::Tab { backward } => {
				let nodes = self.surface.focusable_nodes();
				let active = self.surface.active_node();
				match wrap_target(&nodes, active.as_ref(), backward) {
					Some(target) => {
						self.surface.focus(target);
						KeyResponse::Consumed
					}
					None => KeyResponse::Ignored,
				}
			}
			DrawerKey::Other => KeyResponse::Ignored,
		}
	}

	/// Document focus handler: pulls focus back in when it escapes.
	pub fn handle_focus_in(&self, target: &S::Node) -> FocusResponse {
		if !self.is_open() || self.surface.contains(target) {
			return FocusResponse::Allowed;
		}
		self.focus_first();
		FocusResponse::Redirected
	}

	/// Click inside the drawer; following a link closes it.
	pub fn handle_drawer_click(&self, on_link: bool) {
		if on_link {
			self.close();
		}
	}

	fn focus_first(&self) {
		let target = self
			.surface
			.focusable_nodes()
			.into_iter()
			.next()
			.unwrap_or_else(|| self.surface.drawer_node());
		self.surface.focus(&target);
	}

	fn persist(&self, value: &str) {
		if let Err(err) = self.store.save(&self.storage_key, value) {
			warn_log!("Drawer: preference not saved: {}", err);
		}
	}

	fn listen(&self, attached: bool) {
		if self.listening.replace(attached) != attached {
			self.surface.set_document_listeners(attached);
		}
	}
}
