//! Collapsible navigation drawer.
//!
//! [`DrawerController`] owns the open/closed state, focus restoration and
//! preference persistence; a [`DrawerSurface`] performs the page updates.
//!
//! ## Triggers
//!
//! | Trigger | Action |
//! |---------|--------|
//! | Toggle button click | [`DrawerController::toggle`] |
//! | Backdrop click, close button click | [`DrawerController::close`] |
//! | Escape | [`DrawerController::handle_key`] |
//! | Link click inside the drawer | [`DrawerController::handle_drawer_click`] |
//! | Focus leaving the open drawer | [`DrawerController::handle_focus_in`] |

mod controller;
mod focus;
mod motion;
mod surface;

pub use controller::{CLOSED_VALUE, DrawerController, OPEN_VALUE};
pub use focus::{DrawerKey, FOCUSABLE_SELECTOR, FocusResponse, KeyResponse, wrap_target};
pub use motion::{REDUCED_MOTION_QUERY, transition_is_instant};
pub use surface::DrawerSurface;
