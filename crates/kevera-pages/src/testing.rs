//! In-memory implementations of the page seams.
//!
//! These back the native test suites and are usable from downstream tests.
//! All of them are `Clone` handles over shared state, so a test can keep a
//! copy after moving one into a router or controller.
//!
//! ## Example
//!
//! ```ignore
//! use kevera_pages::testing::{MemoryLocation, RecordingView, StaticFetcher};
//!
//! let view = RecordingView::new(["nav-dashboard", "nav-sewing"]);
//! let fetcher = StaticFetcher::new().with_page("src/pages/sewing-step-3.html", "<main>…</main>");
//! let router = HashRouter::new(RouteTable::kevera(), &config, view.clone(), fetcher, MemoryLocation::new("#/sewing"));
//! router.handle_route_change().await;
//! assert_eq!(view.active_nav_items(), vec!["nav-sewing"]);
//! ```

use crate::drawer::DrawerSurface;
use crate::error::FetchError;
use crate::view::{FragmentFetcher, HashLocation, PageView, error_markup, loading_markup};
use async_trait::async_trait;
use futures::channel::oneshot;
use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::rc::Rc;

/// One call received by a [`RecordingView`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewCall {
	/// `show_loading`
	Loading,
	/// `show_error`
	Error(String),
	/// `set_content`
	Content(String),
	/// `set_document_title`
	DocumentTitle(String),
	/// `set_active_nav`
	ActiveNav(String),
	/// `set_page_title`
	PageTitle(String),
}

#[derive(Debug, Default)]
struct ViewState {
	calls: Vec<ViewCall>,
	container: String,
	document_title: String,
	page_title: String,
	nav: BTreeMap<String, bool>,
}

/// [`PageView`] that records calls and models the container, titles and
/// nav items.
#[derive(Debug, Clone, Default)]
pub struct RecordingView {
	state: Rc<RefCell<ViewState>>,
}

impl RecordingView {
	/// Creates a view with the given nav item ids, all inactive.
	pub fn new<I, T>(nav_ids: I) -> Self
	where
		I: IntoIterator<Item = T>,
		T: Into<String>,
	{
		let view = Self::default();
		view.state.borrow_mut().nav = nav_ids.into_iter().map(|id| (id.into(), false)).collect();
		view
	}

	/// Every call in order.
	pub fn calls(&self) -> Vec<ViewCall> {
		self.state.borrow().calls.clone()
	}

	/// Current container markup.
	pub fn container(&self) -> String {
		self.state.borrow().container.clone()
	}

	/// Current document title.
	pub fn document_title(&self) -> String {
		self.state.borrow().document_title.clone()
	}

	/// Current secondary page title.
	pub fn page_title(&self) -> String {
		self.state.borrow().page_title.clone()
	}

	/// Nav ids currently styled active.
	pub fn active_nav_items(&self) -> Vec<String> {
		self.state
			.borrow()
			.nav
			.iter()
			.filter(|(_, active)| **active)
			.map(|(id, _)| id.clone())
			.collect()
	}

	fn record(&self, call: ViewCall) {
		self.state.borrow_mut().calls.push(call);
	}
}

impl PageView for RecordingView {
	fn show_loading(&self) {
		self.record(ViewCall::Loading);
		self.state.borrow_mut().container = loading_markup();
	}

	fn show_error(&self, message: &str) {
		self.record(ViewCall::Error(message.to_string()));
		self.state.borrow_mut().container = error_markup(message);
	}

	fn set_content(&self, html: &str) {
		self.record(ViewCall::Content(html.to_string()));
		self.state.borrow_mut().container = html.to_string();
	}

	fn set_document_title(&self, title: &str) {
		self.record(ViewCall::DocumentTitle(title.to_string()));
		self.state.borrow_mut().document_title = title.to_string();
	}

	fn set_active_nav(&self, nav_id: &str) {
		self.record(ViewCall::ActiveNav(nav_id.to_string()));
		for (id, active) in self.state.borrow_mut().nav.iter_mut() {
			*active = id == nav_id;
		}
	}

	fn set_page_title(&self, title: &str) {
		self.record(ViewCall::PageTitle(title.to_string()));
		self.state.borrow_mut().page_title = title.to_string();
	}
}

/// [`FragmentFetcher`] answering from a fixed map; unknown URLs get a 404.
#[derive(Debug, Clone, Default)]
pub struct StaticFetcher {
	responses: Rc<HashMap<String, Result<String, FetchError>>>,
	requests: Rc<RefCell<Vec<String>>>,
}

impl StaticFetcher {
	/// Creates a fetcher with no pages.
	pub fn new() -> Self {
		Self::default()
	}

	/// Serves `html` for `url`.
	pub fn with_page(self, url: impl Into<String>, html: impl Into<String>) -> Self {
		self.with_response(url, Ok(html.into()))
	}

	/// Fails `url` with `error`.
	pub fn with_error(self, url: impl Into<String>, error: FetchError) -> Self {
		self.with_response(url, Err(error))
	}

	/// URLs requested so far.
	pub fn requests(&self) -> Vec<String> {
		self.requests.borrow().clone()
	}

	fn with_response(self, url: impl Into<String>, response: Result<String, FetchError>) -> Self {
		let mut responses = Rc::unwrap_or_clone(self.responses);
		responses.insert(url.into(), response);
		Self {
			responses: Rc::new(responses),
			requests: self.requests,
		}
	}
}

#[async_trait(?Send)]
impl FragmentFetcher for StaticFetcher {
	async fn fetch_fragment(&self, url: &str) -> Result<String, FetchError> {
		self.requests.borrow_mut().push(url.to_string());
		self.responses
			.get(url)
			.cloned()
			.unwrap_or_else(|| {
				Err(FetchError::Status {
					url: url.to_string(),
					status: 404,
				})
			})
	}
}

type Pending = oneshot::Sender<Result<String, FetchError>>;

/// [`FragmentFetcher`] whose requests stay pending until released.
///
/// Lets a test decide the order in which overlapping loads complete.
#[derive(Debug, Clone, Default)]
pub struct GatedFetcher {
	pending: Rc<RefCell<HashMap<String, VecDeque<Pending>>>>,
}

impl GatedFetcher {
	/// Creates a fetcher with nothing pending.
	pub fn new() -> Self {
		Self::default()
	}

	/// Number of requests for `url` still waiting.
	pub fn pending(&self, url: &str) -> usize {
		self.pending.borrow().get(url).map_or(0, VecDeque::len)
	}

	/// Completes the oldest pending request for `url`.
	///
	/// Returns `false` when nothing was waiting.
	pub fn release(&self, url: &str, response: Result<String, FetchError>) -> bool {
		let sender = self
			.pending
			.borrow_mut()
			.get_mut(url)
			.and_then(VecDeque::pop_front);
		match sender {
			Some(sender) => sender.send(response).is_ok(),
			None => false,
		}
	}
}

#[async_trait(?Send)]
impl FragmentFetcher for GatedFetcher {
	async fn fetch_fragment(&self, url: &str) -> Result<String, FetchError> {
		let (tx, rx) = oneshot::channel();
		self.pending
			.borrow_mut()
			.entry(url.to_string())
			.or_default()
			.push_back(tx);

		rx.await.unwrap_or_else(|_| {
			Err(FetchError::Network {
				url: url.to_string(),
				message: "request dropped".to_string(),
			})
		})
	}
}

/// [`HashLocation`] over a string, recording writes.
#[derive(Debug, Clone, Default)]
pub struct MemoryLocation {
	hash: Rc<RefCell<String>>,
	writes: Rc<RefCell<Vec<String>>>,
}

impl MemoryLocation {
	/// Creates a location with an initial hash.
	pub fn new(hash: impl Into<String>) -> Self {
		Self {
			hash: Rc::new(RefCell::new(hash.into())),
			writes: Rc::default(),
		}
	}

	/// Hashes written through [`HashLocation::set_hash`].
	pub fn writes(&self) -> Vec<String> {
		self.writes.borrow().clone()
	}
}

impl HashLocation for MemoryLocation {
	fn hash(&self) -> String {
		self.hash.borrow().clone()
	}

	fn set_hash(&self, hash: &str) {
		*self.hash.borrow_mut() = hash.to_string();
		self.writes.borrow_mut().push(hash.to_string());
	}
}

type Task = Box<dyn FnOnce()>;

struct DrawerState {
	focusables: Vec<String>,
	hidden: bool,
	styled: bool,
	expanded: bool,
	focused: Option<String>,
	animates: bool,
	frames: Vec<Task>,
	transitions: Vec<Task>,
	listener_changes: Vec<bool>,
}

/// [`DrawerSurface`] over string node ids.
///
/// Animation frames and transition ends are queued until the test runs them
/// with [`run_frames`](Self::run_frames) and
/// [`end_transition`](Self::end_transition).
#[derive(Clone)]
pub struct FakeDrawer {
	state: Rc<RefCell<DrawerState>>,
}

impl std::fmt::Debug for FakeDrawer {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let state = self.state.borrow();
		f.debug_struct("FakeDrawer")
			.field("hidden", &state.hidden)
			.field("styled", &state.styled)
			.field("expanded", &state.expanded)
			.field("focused", &state.focused)
			.finish()
	}
}

impl FakeDrawer {
	/// Node id of the drawer panel.
	pub const PANEL: &'static str = "drawer";

	/// Creates a hidden, non-animating drawer with the given focusable ids.
	pub fn new<I, T>(focusables: I) -> Self
	where
		I: IntoIterator<Item = T>,
		T: Into<String>,
	{
		Self {
			state: Rc::new(RefCell::new(DrawerState {
				focusables: focusables.into_iter().map(Into::into).collect(),
				hidden: true,
				styled: false,
				expanded: false,
				focused: None,
				animates: false,
				frames: Vec::new(),
				transitions: Vec::new(),
				listener_changes: Vec::new(),
			})),
		}
	}

	/// Makes closing wait for [`end_transition`](Self::end_transition).
	pub fn set_animates(&self, animates: bool) {
		self.state.borrow_mut().animates = animates;
	}

	/// Runs queued animation-frame tasks.
	pub fn run_frames(&self) {
		let tasks = std::mem::take(&mut self.state.borrow_mut().frames);
		tasks.into_iter().for_each(|task| task());
	}

	/// Fires the end of the closing transition.
	pub fn end_transition(&self) {
		let tasks = std::mem::take(&mut self.state.borrow_mut().transitions);
		tasks.into_iter().for_each(|task| task());
	}

	/// Focuses a node outside the drawer.
	pub fn focus_outside(&self, node: impl Into<String>) {
		self.state.borrow_mut().focused = Some(node.into());
	}

	/// Currently focused node.
	pub fn focused(&self) -> Option<String> {
		self.state.borrow().focused.clone()
	}

	/// Whether drawer and backdrop are hidden.
	pub fn is_hidden(&self) -> bool {
		self.state.borrow().hidden
	}

	/// Whether the open/show classes are applied.
	pub fn has_open_styling(&self) -> bool {
		self.state.borrow().styled
	}

	/// Every attach (`true`) and detach (`false`) of document listeners.
	pub fn listener_changes(&self) -> Vec<bool> {
		self.state.borrow().listener_changes.clone()
	}
}

impl DrawerSurface for FakeDrawer {
	type Node = String;

	fn drawer_node(&self) -> String {
		Self::PANEL.to_string()
	}

	fn set_hidden(&self, hidden: bool) {
		self.state.borrow_mut().hidden = hidden;
	}

	fn set_open_styling(&self, open: bool) {
		self.state.borrow_mut().styled = open;
	}

	fn set_expanded(&self, expanded: bool) {
		self.state.borrow_mut().expanded = expanded;
	}

	fn is_expanded(&self) -> bool {
		self.state.borrow().expanded
	}

	fn active_node(&self) -> Option<String> {
		self.focused()
	}

	fn focusable_nodes(&self) -> Vec<String> {
		self.state.borrow().focusables.clone()
	}

	fn contains(&self, node: &String) -> bool {
		node == Self::PANEL || self.state.borrow().focusables.contains(node)
	}

	fn focus(&self, node: &String) {
		self.state.borrow_mut().focused = Some(node.clone());
	}

	fn next_frame(&self, task: Box<dyn FnOnce()>) {
		self.state.borrow_mut().frames.push(task);
	}

	fn animates(&self) -> bool {
		self.state.borrow().animates
	}

	fn after_transition(&self, task: Box<dyn FnOnce()>) {
		self.state.borrow_mut().transitions.push(task);
	}

	fn set_document_listeners(&self, attached: bool) {
		self.state.borrow_mut().listener_changes.push(attached);
	}
}
