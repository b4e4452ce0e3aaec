//! Browser bindings (WASM only).
//!
//! Each submodule implements one seam from [`crate::view`], [`crate::storage`]
//! or [`crate::drawer`] on top of `web-sys`; [`launch`] wires them to the page.

mod drawer;
mod fetch;
mod launcher;
mod location;
mod page;

pub use drawer::{DomDrawer, DomDrawerController, mount_drawer};
pub use fetch::GlooFetcher;
pub use launcher::{CONFIG_SCRIPT_ID, DomRouter, config_from_document, launch, mount_router};
pub use location::WindowLocation;
pub use page::DomPageView;
