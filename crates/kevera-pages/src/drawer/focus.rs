//! Keyboard handling and focus cycling inside the open drawer.

/// CSS selector for elements that can take keyboard focus.
pub const FOCUSABLE_SELECTOR: &str = concat!(
	"a[href],",
	"button:not([disabled]),",
	"input:not([disabled]),",
	"select:not([disabled]),",
	"textarea:not([disabled]),",
	"[tabindex]:not([tabindex=\"-1\"])"
);

/// Keys the drawer reacts to while open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawerKey {
	/// Closes the drawer.
	Escape,
	/// Moves focus; `backward` is Shift+Tab.
	Tab {
		/// Shift was held.
		backward: bool,
	},
	/// Anything else.
	Other,
}

impl DrawerKey {
	/// Classifies a `KeyboardEvent.key` value.
	pub fn from_key(key: &str, shift: bool) -> Self {
		match key {
			"Escape" | "Esc" => Self::Escape,
			"Tab" => Self::Tab { backward: shift },
			_ => Self::Other,
		}
	}
}

/// Whether a key event was consumed by the drawer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyResponse {
	/// Caller should prevent the default action.
	Consumed,
	/// Default browser behavior applies.
	Ignored,
}

/// Whether a focus event was redirected back into the drawer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusResponse {
	/// Focus was moved into the drawer; caller should stop propagation.
	Redirected,
	/// Focus stays where it landed.
	Allowed,
}

/// Node to focus when Tab would leave the focusable set, if any.
///
/// Forward from the last node wraps to the first, backward from the first
/// wraps to the last. Anywhere else the browser's own order is kept.
pub fn wrap_target<'a, N: PartialEq>(
	nodes: &'a [N],
	active: Option<&N>,
	backward: bool,
) -> Option<&'a N> {
	let first = nodes.first()?;
	let last = nodes.last()?;
	let active = active?;

	if backward && active == first {
		Some(last)
	} else if !backward && active == last {
		Some(first)
	} else {
		None
	}
}
