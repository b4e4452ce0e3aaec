//! Error types for kevera-pages
//!
//! None of these reach a global handler: each is caught where it happens and
//! turned into a log line, a fallback panel or a silent no-op.

use thiserror::Error;

/// Error type for route table and navigation operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouterError {
	/// Key is not in the route table
	#[error("Route not found: {0}")]
	UnknownRoute(String),

	/// Two routes share a key
	#[error("Duplicate route key: {0}")]
	DuplicateRoute(String),

	/// The configured default key has no route
	#[error("Default route is not registered: {0}")]
	MissingDefault(String),
}

/// Error type for fragment loading
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
	/// Server answered with a non-success status
	#[error("Failed to load {url}: {status}")]
	Status {
		/// Requested fragment
		url: String,
		/// HTTP status code
		status: u16,
	},

	/// Request never produced a response
	#[error("Network error loading {url}: {message}")]
	Network {
		/// Requested fragment
		url: String,
		/// Transport error description
		message: String,
	},

	/// Response body could not be read as text
	#[error("Unreadable body for {url}: {message}")]
	Body {
		/// Requested fragment
		url: String,
		/// Decoding error description
		message: String,
	},
}

/// Error type for preference storage
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
	/// Storage is disabled or absent (privacy mode, sandboxed frame)
	#[error("Storage unavailable")]
	Unavailable,

	/// Storage exists but the access threw (quota, security policy)
	#[error("Storage access failed: {0}")]
	Access(String),
}

/// Error type for configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
	/// TOML could not be parsed into the configuration schema
	#[error("Invalid configuration: {0}")]
	Parse(#[from] toml::de::Error),

	/// Routes parsed but do not form a valid table
	#[error("Invalid route table: {0}")]
	Routes(#[from] RouterError),
}

/// Error type for binding to the page
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
	/// A required element id is absent from the document
	#[error("Required element not found: #{0}")]
	MissingElement(String),

	/// Browser API call failed
	#[error("Browser API error: {0}")]
	Js(String),
}
