// SPDX-License-Identifier: MPL-2.0
//! Passive view panes driven by the gallery session.
//!
//! Every pane renders from the session's [`ViewSnapshot`] and forwards user
//! gestures back to the update loop as [`crate::app::Message`] values; no
//! navigation, sort, or delete logic lives here.
//!
//! [`ViewSnapshot`]: crate::gallery::ViewSnapshot

pub mod empty_state;
pub mod gallery_pane;
pub mod grid_pane;
pub mod list_pane;
pub mod sidebar;
pub mod toolbar;
