//! Logging for the router and drawer
//!
//! The macros below forward to the browser console on WASM and to `tracing`
//! everywhere else, so native tests can capture them with a subscriber.
//!
//! ## Macro Overview
//!
//! | Macro | Active when | WASM | Non-WASM |
//! |-------|-------------|------|----------|
//! | `debug_log!` | `debug_assertions` + `debug-hooks` | `console.debug` | `tracing::debug!` |
//! | `info_log!` | `debug_assertions` | `console.info` | `tracing::info!` |
//! | `warn_log!` | always | `console.warn` | `tracing::warn!` |
//! | `error_log!` | always | `console.error` | `tracing::error!` |
//!
//! Warnings and errors stay on in release builds: a failed fragment load or a
//! missing container is the only trace a deployed dashboard leaves behind.
//!
//! ## Example
//!
//! ```ignore
//! use kevera_pages::{error_log, info_log};
//!
//! info_log!("Initializing cutting page...");
//! error_log!("Route not found: {}", key);
//! ```

/// Severity attached to a log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
	/// Internal state transitions.
	Debug,
	/// Lifecycle notices.
	Info,
	/// Recoverable oddities (storage unavailable, optional element missing).
	Warn,
	/// Feature-disabling or user-visible failures.
	Error,
}

impl Level {
	/// Tag prepended to every console line.
	pub fn tag(self) -> &'static str {
		match self {
			Self::Debug => "[kevera:debug]",
			Self::Info => "[kevera:info]",
			Self::Warn => "[kevera:warn]",
			Self::Error => "[kevera:error]",
		}
	}
}

/// Writes one formatted line at `level`.
///
/// Called by the exported macros; not meant to be used directly.
#[doc(hidden)]
pub fn emit(level: Level, args: std::fmt::Arguments<'_>) {
	#[cfg(target_arch = "wasm32")]
	{
		let line = wasm_bindgen::JsValue::from_str(&format!("{} {}", level.tag(), args));
		match level {
			Level::Debug => web_sys::console::debug_1(&line),
			Level::Info => web_sys::console::info_1(&line),
			Level::Warn => web_sys::console::warn_1(&line),
			Level::Error => web_sys::console::error_1(&line),
		}
	}

	#[cfg(not(target_arch = "wasm32"))]
	match level {
		Level::Debug => tracing::debug!(target: "kevera", "{}", args),
		Level::Info => tracing::info!(target: "kevera", "{}", args),
		Level::Warn => tracing::warn!(target: "kevera", "{}", args),
		Level::Error => tracing::error!(target: "kevera", "{}", args),
	}
}

/// Logs a debug message (requires `debug-hooks` feature + `debug_assertions`)
///
/// Compiles to a no-op when either condition is missing.
#[macro_export]
#[cfg(all(debug_assertions, feature = "debug-hooks"))]
macro_rules! debug_log {
	($($arg:tt)*) => {
		$crate::logging::emit($crate::logging::Level::Debug, format_args!($($arg)*))
	};
}

/// No-op debug_log when conditions are not met
///
/// The arguments are still type-checked, so bindings used only for logging
/// do not trip `unused_variables`.
#[macro_export]
#[cfg(not(all(debug_assertions, feature = "debug-hooks")))]
macro_rules! debug_log {
	($($arg:tt)*) => {{
		if false {
			let _ = format_args!($($arg)*);
		}
	}};
}

/// Logs an info message (requires `debug_assertions`)
#[macro_export]
#[cfg(debug_assertions)]
macro_rules! info_log {
	($($arg:tt)*) => {
		$crate::logging::emit($crate::logging::Level::Info, format_args!($($arg)*))
	};
}

/// No-op info_log in release builds
#[macro_export]
#[cfg(not(debug_assertions))]
macro_rules! info_log {
	($($arg:tt)*) => {{
		if false {
			let _ = format_args!($($arg)*);
		}
	}};
}

/// Logs a warning message
///
/// # Example
///
/// ```ignore
/// warn_log!("Drawer: preference not saved: {}", err);
/// ```
#[macro_export]
macro_rules! warn_log {
	($($arg:tt)*) => {
		$crate::logging::emit($crate::logging::Level::Warn, format_args!($($arg)*))
	};
}

/// Logs an error message
///
/// # Example
///
/// ```ignore
/// error_log!("Router: #{} container not found", id);
/// ```
#[macro_export]
macro_rules! error_log {
	($($arg:tt)*) => {
		$crate::logging::emit($crate::logging::Level::Error, format_args!($($arg)*))
	};
}

#[cfg(test)]
mod tests {
	use super::Level;
	use rstest::rstest;
	// Import macros from crate root
	use crate::{debug_log, error_log, info_log, warn_log};

	#[rstest]
	fn test_logging_macros_compile() {
		debug_log!("Debug message: {}", 42);
		info_log!("Info message: {}", "test");
		warn_log!("Warning message: {:?}", vec![1, 2, 3]);
		error_log!("Error message: {}", "error");
	}

	#[rstest]
	fn test_logging_macros_no_args() {
		debug_log!("Simple debug");
		info_log!("Simple info");
		warn_log!("Simple warning");
		error_log!("Simple error");
	}

	#[rstest]
	#[deny(unused_variables)]
	fn test_log_only_bindings_count_as_used() {
		let saved: Result<Option<String>, String> = Ok(None);
		match saved {
			Ok(value) => debug_log!("stored: {:?}", value),
			Err(err) => info_log!("unreadable: {}", err),
		}
	}

	#[rstest]
	#[case(Level::Debug, "[kevera:debug]")]
	#[case(Level::Info, "[kevera:info]")]
	#[case(Level::Warn, "[kevera:warn]")]
	#[case(Level::Error, "[kevera:error]")]
	fn test_level_tags(#[case] level: Level, #[case] expected: &str) {
		assert_eq!(level.tag(), expected);
	}
}
