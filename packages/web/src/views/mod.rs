mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod app_layout;
pub use app_layout::{AppLayout, NotFound, Root};

mod pages;
pub use pages::{AdminPanel, Appointments, Catalog, Dashboard, Invoices, Pets, UsersClients};

use api::{guard, GuardOutcome};
use dioxus::prelude::*;
use tracing::debug;

use crate::Route;

/// Apply the route guard for `route`. Returns `true` when the view may
/// render; otherwise a redirect has been issued.
pub(crate) fn allow(route: &Route) -> bool {
    let state = ui::use_session_state();
    let nav = use_navigator();
    match guard(&state, route.access()) {
        GuardOutcome::Render => true,
        GuardOutcome::RedirectToLogin => {
            debug!("{} needs a session, redirecting to login", route);
            nav.replace(Route::Login {});
            false
        }
        GuardOutcome::RedirectToDefault => {
            debug!("{} not available, redirecting to dashboard", route);
            nav.replace(Route::Dashboard {});
            false
        }
    }
}
