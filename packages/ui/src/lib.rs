//! This crate contains all shared UI for the workspace.
//!
//! Views take their navigation as event handlers so each platform package
//! owns its router. Session, gateway and config reach components through
//! the context set up by [`SessionProvider`].

use dioxus::prelude::*;

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod platform;

pub mod views;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

mod auth;
pub use auth::{use_app_config, use_gateway, use_session, use_session_state, LogoutButton, SessionProvider};

pub mod crud;
pub use crud::{use_crud, use_crud_with, use_lookup, use_lookup_when, Crud};

mod status_indicator;
pub use status_indicator::StatusIndicator;
