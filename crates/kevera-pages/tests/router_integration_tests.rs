//! Router Integration Tests
//!
//! Drives [`HashRouter`] over the dashboard route table with the in-memory
//! seams from `kevera_pages::testing`.
//!
//! Test Categories:
//! - Category 1: Successful route changes
//! - Category 2: Fallbacks and failures
//! - Category 3: Overlapping navigations
//! - Category 4: Resolution properties

#![cfg(not(target_arch = "wasm32"))]

use kevera_pages::testing::{GatedFetcher, MemoryLocation, RecordingView, StaticFetcher};
use kevera_pages::view::LOAD_FAILED_MESSAGE;
use kevera_pages::{
	FetchError, HashLocation, HashRouter, NavigationOutcome, PageHooks, RoutePhase, RouteTable,
	RouterConfig, RouterError,
};
use rstest::{fixture, rstest};
use std::cell::Cell;
use std::rc::Rc;

const SEWING: &str = "src/pages/sewing-step-3.html";
const DASHBOARD: &str = "src/pages/dashboard.html";
const WORKERS: &str = "src/pages/workers.html";

fn nav_view() -> RecordingView {
	let table = RouteTable::kevera();
	let nav_ids: Vec<String> = table.iter().map(|route| route.nav_id.clone()).collect();
	RecordingView::new(nav_ids)
}

#[fixture]
fn fetcher() -> StaticFetcher {
	StaticFetcher::new()
		.with_page(SEWING, "<html><body><main><h1>Sewing</h1></main></body></html>")
		.with_page(DASHBOARD, "<html><body><main><h1>Dashboard</h1></main></body></html>")
		.with_page(
			"src/pages/cutting-step-2.html",
			"<html><body><main><h1>Cutting</h1></main></body></html>",
		)
}

fn router_at<F>(hash: &str, fetcher: F) -> (HashRouter<RecordingView, F, MemoryLocation>, RecordingView, MemoryLocation)
where
	F: kevera_pages::FragmentFetcher,
{
	let view = nav_view();
	let location = MemoryLocation::new(hash);
	let router = HashRouter::new(
		RouteTable::kevera(),
		&RouterConfig::default(),
		view.clone(),
		fetcher,
		location.clone(),
	);
	(router, view, location)
}

// ============================================================================
// Category 1: Successful route changes
// ============================================================================

/// Tests the sewing page end to end
#[rstest]
#[tokio::test]
async fn test_sewing_route_renders_page(fetcher: StaticFetcher) {
	let (router, view, _) = router_at("#/sewing", fetcher);

	let outcome = router.handle_route_change().await;

	assert_eq!(outcome, NavigationOutcome::Rendered("sewing".to_string()));
	assert_eq!(view.document_title(), "Kevera - Sewing (Step 3)");
	assert_eq!(view.active_nav_items(), vec!["nav-sewing".to_string()]);
	assert_eq!(view.page_title(), "Sewing (Step 3)");
	assert_eq!(view.container(), "<h1>Sewing</h1>");
	assert_eq!(router.current_route(), Some("sewing".to_string()));
	assert_eq!(router.phase(), RoutePhase::Rendered);
}

/// Tests that exactly one nav item stays active across route changes
#[rstest]
#[tokio::test]
async fn test_single_active_nav_after_consecutive_changes(fetcher: StaticFetcher) {
	let (router, view, location) = router_at("#/sewing", fetcher);
	router.handle_route_change().await;

	location.set_hash("#/dashboard");
	router.handle_route_change().await;

	assert_eq!(view.active_nav_items(), vec!["nav-dashboard".to_string()]);
	assert_eq!(view.document_title(), "Kevera - Dashboard");
}

/// Tests that the page hook runs after the content is in place
#[rstest]
#[tokio::test]
async fn test_page_hook_runs_for_its_route(fetcher: StaticFetcher) {
	let runs = Rc::new(Cell::new(0));
	let hooks = PageHooks::new().on("cutting", {
		let runs = Rc::clone(&runs);
		move || runs.set(runs.get() + 1)
	});
	let (router, _, location) = router_at("#/sewing", fetcher);
	let router = router.with_hooks(hooks);

	router.handle_route_change().await;
	assert_eq!(runs.get(), 0);

	location.set_hash("#/cutting");
	router.handle_route_change().await;
	assert_eq!(runs.get(), 1);
}

/// Tests that navigate writes the hash path and leaves loading to hashchange
#[rstest]
fn test_navigate_sets_hash(fetcher: StaticFetcher) {
	let (router, view, location) = router_at("", fetcher);

	router.navigate("sewing").unwrap();

	assert_eq!(location.hash(), "#/sewing");
	assert!(view.calls().is_empty());
}

// ============================================================================
// Category 2: Fallbacks and failures
// ============================================================================

/// Tests that an unknown key falls back to the dashboard
#[rstest]
#[case("#/unknown-key")]
#[case("")]
#[case("#")]
#[case("#/")]
#[case("#sewing")]
#[tokio::test]
async fn test_unregistered_hash_renders_dashboard(fetcher: StaticFetcher, #[case] hash: &str) {
	let (router, view, _) = router_at(hash, fetcher);

	let outcome = router.handle_route_change().await;

	assert_eq!(outcome, NavigationOutcome::Rendered("dashboard".to_string()));
	assert_eq!(view.active_nav_items(), vec!["nav-dashboard".to_string()]);
}

/// Tests that navigate to an unknown key leaves the hash alone
#[rstest]
fn test_navigate_unknown_key_keeps_hash(fetcher: StaticFetcher) {
	let (router, _, location) = router_at("#/sewing", fetcher);

	let result = router.navigate("nope");

	assert_eq!(result, Err(RouterError::UnknownRoute("nope".to_string())));
	assert_eq!(location.hash(), "#/sewing");
	assert!(location.writes().is_empty());
}

/// Tests that a failed load shows the error panel and keeps the last page state
#[rstest]
#[tokio::test]
async fn test_failed_load_keeps_current_route(fetcher: StaticFetcher) {
	let fetcher = fetcher.with_error(
		WORKERS,
		FetchError::Status {
			url: WORKERS.to_string(),
			status: 500,
		},
	);
	let (router, view, location) = router_at("#/sewing", fetcher);
	router.handle_route_change().await;

	location.set_hash("#/workers");
	let outcome = router.handle_route_change().await;

	assert!(matches!(outcome, NavigationOutcome::Failed { ref key, .. } if key == "workers"));
	assert_eq!(router.current_route(), Some("sewing".to_string()));
	assert_eq!(router.phase(), RoutePhase::Failed);
	assert!(view.container().contains(LOAD_FAILED_MESSAGE));
	assert!(view.container().contains("data-reload"));
	assert_eq!(view.document_title(), "Kevera - Sewing (Step 3)");
	assert_eq!(view.active_nav_items(), vec!["nav-sewing".to_string()]);
}

/// Tests that a missing fragment (404) is treated as a failure
#[rstest]
#[tokio::test]
async fn test_missing_fragment_is_failure() {
	let (router, view, _) = router_at("#/audit", StaticFetcher::new());

	let outcome = router.handle_route_change().await;

	assert!(matches!(
		outcome,
		NavigationOutcome::Failed {
			error: FetchError::Status { status: 404, .. },
			..
		}
	));
	assert_eq!(router.current_route(), None);
	assert!(view.container().contains(LOAD_FAILED_MESSAGE));
}

// ============================================================================
// Category 3: Overlapping navigations
// ============================================================================

/// Tests that a slow earlier load cannot overwrite a newer page
#[rstest]
#[tokio::test]
async fn test_superseded_load_is_discarded_when_it_finishes_last() {
	let gate = GatedFetcher::new();
	let (router, view, location) = router_at("#/sewing", gate.clone());

	let mut first = Box::pin(router.handle_route_change());
	assert!(futures::poll!(first.as_mut()).is_pending());

	location.set_hash("#/workers");
	let mut second = Box::pin(router.handle_route_change());
	assert!(futures::poll!(second.as_mut()).is_pending());

	assert!(gate.release(WORKERS, Ok("<main>Workers</main>".to_string())));
	assert_eq!(second.await, NavigationOutcome::Rendered("workers".to_string()));

	assert!(gate.release(SEWING, Ok("<main>Sewing</main>".to_string())));
	assert_eq!(first.await, NavigationOutcome::Superseded("sewing".to_string()));

	assert_eq!(view.container(), "Workers");
	assert_eq!(view.document_title(), "Kevera - Workers");
	assert_eq!(router.current_route(), Some("workers".to_string()));
}

/// Tests that an earlier load finishing first is still dropped
#[rstest]
#[tokio::test]
async fn test_superseded_load_is_discarded_when_it_finishes_first() {
	let gate = GatedFetcher::new();
	let (router, view, location) = router_at("#/sewing", gate.clone());

	let mut first = Box::pin(router.handle_route_change());
	assert!(futures::poll!(first.as_mut()).is_pending());

	location.set_hash("#/workers");
	let mut second = Box::pin(router.handle_route_change());
	assert!(futures::poll!(second.as_mut()).is_pending());

	assert!(gate.release(SEWING, Ok("<main>Sewing</main>".to_string())));
	assert_eq!(first.await, NavigationOutcome::Superseded("sewing".to_string()));
	assert_eq!(router.current_route(), None);
	assert!(!view.container().contains("Sewing"));

	assert!(gate.release(WORKERS, Ok("<main>Workers</main>".to_string())));
	assert_eq!(second.await, NavigationOutcome::Rendered("workers".to_string()));
	assert_eq!(view.active_nav_items(), vec!["nav-workers".to_string()]);
}

// ============================================================================
// Category 4: Resolution properties
// ============================================================================

/// Tests that every registered key resolves to itself
#[rstest]
fn test_registered_keys_resolve_to_themselves() {
	let table = RouteTable::kevera();
	for route in table.iter() {
		assert_eq!(table.resolve(&format!("#/{}", route.key)), route.key);
		assert_eq!(table.resolve(&route.hash_path), route.key);
	}
}

mod property_tests {
	use kevera_pages::RouteTable;
	use proptest::prelude::*;

	proptest! {
		/// Property: an unregistered key always resolves to the default
		#[test]
		fn prop_unregistered_key_resolves_to_default(key in r"[a-zA-Z0-9_\-]{0,24}") {
			let table = RouteTable::kevera();
			prop_assume!(!table.contains(&key));

			prop_assert_eq!(table.resolve(&format!("#/{key}")), "dashboard");
		}

		/// Property: resolution always lands on a registered route
		#[test]
		fn prop_resolution_is_total(hash in ".{0,40}") {
			let table = RouteTable::kevera();

			prop_assert!(table.contains(table.resolve(&hash)));
		}
	}
}
