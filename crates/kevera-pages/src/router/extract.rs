//! Fragment post-processing.
//!
//! Page fragments are full standalone documents (they open on their own during
//! design work), so they carry the dashboard chrome. Before injection the
//! router keeps only the content region.

use scraper::{Html, Selector};
use serde::Deserialize;
use std::sync::LazyLock;

static MAIN: LazyLock<Selector> =
	LazyLock::new(|| Selector::parse("main").expect("valid selector"));
static BODY: LazyLock<Selector> =
	LazyLock::new(|| Selector::parse("body").expect("valid selector"));
static CHROME: LazyLock<Selector> = LazyLock::new(|| {
	Selector::parse("header, aside, script, style").expect("valid selector")
});

/// How fetched markup is turned into container content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentExtraction {
	/// Inject the fragment as fetched.
	Verbatim,
	/// Keep only the `<main>` landmark, or the body minus layout chrome.
	#[default]
	MainContent,
}

impl ContentExtraction {
	/// Applies this mode to fetched markup.
	pub fn apply(self, html: &str) -> String {
		match self {
			Self::Verbatim => html.to_string(),
			Self::MainContent => extract_main_content(html),
		}
	}
}

/// Returns the inner HTML of the first `<main>`, else the `<body>` with
/// `header`, `aside`, `script` and `style` elements removed.
pub fn extract_main_content(html: &str) -> String {
	let mut document = Html::parse_document(html);

	if let Some(main) = document.select(&MAIN).next() {
		return main.inner_html();
	}

	// tree node ids, not the HTML `id` attribute
	let chrome: Vec<_> = document.select(&CHROME).map(|el| (*el).id()).collect();
	for id in chrome {
		if let Some(mut node) = document.tree.get_mut(id) {
			node.detach();
		}
	}

	document
		.select(&BODY)
		.next()
		.map(|body| body.inner_html())
		.unwrap_or_else(|| html.to_string())
}
