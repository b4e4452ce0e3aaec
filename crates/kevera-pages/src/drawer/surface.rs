//! The page-side half of the drawer.

/// DOM operations the [`DrawerController`](super::DrawerController) needs.
///
/// Implementations are cheap handles (`Clone` shares the same elements) so
/// deferred tasks can carry their own copy.
pub trait DrawerSurface: Clone + 'static {
	/// Focusable node handle.
	type Node: Clone + PartialEq + 'static;

	/// The drawer panel itself.
	fn drawer_node(&self) -> Self::Node;

	/// Sets the `hidden` state of drawer and backdrop.
	fn set_hidden(&self, hidden: bool);

	/// Adds or removes the open class on the drawer and show class on the
	/// backdrop.
	fn set_open_styling(&self, open: bool);

	/// Writes `aria-expanded` on the toggle button.
	fn set_expanded(&self, expanded: bool);

	/// Reads `aria-expanded` on the toggle button.
	fn is_expanded(&self) -> bool;

	/// Currently focused node, if any.
	fn active_node(&self) -> Option<Self::Node>;

	/// Focusable descendants of the drawer in document order.
	fn focusable_nodes(&self) -> Vec<Self::Node>;

	/// Whether `node` is the drawer or inside it.
	fn contains(&self, node: &Self::Node) -> bool;

	/// Moves focus to `node`.
	fn focus(&self, node: &Self::Node);

	/// Runs `task` on the next animation frame.
	fn next_frame(&self, task: Box<dyn FnOnce()>);

	/// Whether closing animates: false under reduced motion or a zero
	/// transition duration.
	fn animates(&self) -> bool;

	/// Runs `task` once the drawer's closing transition ends.
	fn after_transition(&self, task: Box<dyn FnOnce()>);

	/// Attaches or detaches the document-level key and focus-trap handlers.
	fn set_document_listeners(&self, attached: bool);
}
