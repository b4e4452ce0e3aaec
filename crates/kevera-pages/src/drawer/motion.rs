//! Transition timing helpers.

/// Media query matching users who asked for reduced motion.
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Whether a computed `transition-duration` list is zero everywhere.
///
/// Accepts the comma-separated form browsers report (`"0s, 0.2s"`). An empty
/// or unparseable list counts as instant: no `transitionend` would arrive.
pub fn transition_is_instant(durations: &str) -> bool {
	durations
		.split(',')
		.map(str::trim)
		.filter(|d| !d.is_empty())
		.all(|d| parse_seconds(d).is_none_or(|secs| secs <= 0.0))
}

fn parse_seconds(value: &str) -> Option<f64> {
	if let Some(ms) = value.strip_suffix("ms") {
		ms.trim().parse::<f64>().ok().map(|v| v / 1000.0)
	} else {
		value.strip_suffix('s')?.trim().parse::<f64>().ok()
	}
}
