use dioxus::prelude::*;
use tracing::warn;
use ui::views::AppShell;

use super::allow;
use crate::Route;

/// Guarded frame for every signed-in route.
#[component]
pub fn AppLayout() -> Element {
    let route = use_route::<Route>();
    let nav = use_navigator();
    if !allow(&route) {
        return rsx! {};
    }

    rsx! {
        AppShell {
            active: route.to_string(),
            on_navigate: move |path: String| match path.parse::<Route>() {
                Ok(target) => {
                    nav.push(target);
                }
                Err(e) => warn!("No route for {}: {}", path, e),
            },
            on_logout: move |_| {
                nav.replace(Route::Login {});
            },
            Outlet::<Route> {}
        }
    }
}

/// Redirect `/` to `/dashboard`
#[component]
pub fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Dashboard {});
    rsx! {}
}

/// Unknown paths go to the dashboard, or to login without a session.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let nav = use_navigator();
    let route = Route::NotFound { segments };
    if allow(&route) {
        nav.replace(Route::Dashboard {});
    }
    rsx! {}
}
