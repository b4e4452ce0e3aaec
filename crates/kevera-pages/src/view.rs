//! Seams between the router and the page.
//!
//! [`HashRouter`](crate::router::HashRouter) only talks to the page through
//! these traits. The browser implementations live in `dom`; in-memory fakes
//! live in [`testing`](crate::testing).

use crate::error::FetchError;
use async_trait::async_trait;

/// Message shown in the error panel when a fragment fails to load.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load page. Please try again.";

/// View updates issued by the router during a route change.
pub trait PageView {
	/// Replaces the container content with the loading placeholder.
	fn show_loading(&self);

	/// Replaces the container content with the error panel.
	fn show_error(&self, message: &str);

	/// Injects route markup into the container.
	fn set_content(&self, html: &str);

	/// Sets `document.title`.
	fn set_document_title(&self, title: &str);

	/// Clears active styling from every nav item and applies it to `nav_id`.
	fn set_active_nav(&self, nav_id: &str);

	/// Updates the secondary page-title element, if the page has one.
	fn set_page_title(&self, title: &str);
}

/// Loads HTML fragments over the network.
#[async_trait(?Send)]
pub trait FragmentFetcher {
	/// GETs `url` and returns its text body on a success status.
	async fn fetch_fragment(&self, url: &str) -> Result<String, FetchError>;
}

/// Read/write access to the hash portion of the page URL.
pub trait HashLocation {
	/// Current hash including the leading `#`, or empty.
	fn hash(&self) -> String;

	/// Writes the hash; the browser then fires `hashchange`.
	fn set_hash(&self, hash: &str);
}

/// Markup of the loading placeholder.
pub fn loading_markup() -> String {
	r#"<div class="flex items-center justify-center min-h-[400px]">
	<div class="animate-spin rounded-full h-12 w-12 border-b-2 border-primary"></div>
	<span class="ml-3 text-gray-600 dark:text-gray-400">Loading...</span>
</div>"#
		.to_string()
}

/// Markup of the error panel with its reload button.
///
/// `message` is HTML-escaped.
pub fn error_markup(message: &str) -> String {
	format!(
		r#"<div class="flex items-center justify-center min-h-[400px]">
	<div class="text-center">
		<div class="text-red-500 text-4xl mb-4">⚠️</div>
		<p class="text-gray-600 dark:text-gray-400">{}</p>
		<button type="button" data-reload class="mt-4 px-4 py-2 bg-primary text-white rounded-lg hover:bg-primary/90">
			Reload Page
		</button>
	</div>
</div>"#,
		html_escape::encode_text(message)
	)
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_loading_markup() {
		assert!(loading_markup().contains("Loading..."));
	}

	#[rstest]
	fn test_error_markup_has_reload_affordance() {
		let html = error_markup(LOAD_FAILED_MESSAGE);
		assert!(html.contains(LOAD_FAILED_MESSAGE));
		assert!(html.contains("data-reload"));
		assert!(html.contains("Reload Page"));
	}

	#[rstest]
	fn test_error_markup_escapes_message() {
		let html = error_markup("<img src=x onerror=alert(1)>");
		assert!(html.contains("&lt;img src=x onerror=alert(1)&gt;"));
		assert!(!html.contains("<img"));
	}
}
