//! Fragment loading with `gloo-net`.

use crate::error::FetchError;
use crate::view::FragmentFetcher;
use async_trait::async_trait;
use gloo_net::http::Request;

/// Loads fragments with a plain `GET`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooFetcher;

#[async_trait(?Send)]
impl FragmentFetcher for GlooFetcher {
	async fn fetch_fragment(&self, url: &str) -> Result<String, FetchError> {
		let response = Request::get(url)
			.send()
			.await
			.map_err(|e| FetchError::Network {
				url: url.to_string(),
				message: e.to_string(),
			})?;

		if !response.ok() {
			return Err(FetchError::Status {
				url: url.to_string(),
				status: response.status(),
			});
		}

		response.text().await.map_err(|e| FetchError::Body {
			url: url.to_string(),
			message: e.to_string(),
		})
	}
}
