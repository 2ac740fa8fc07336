//! Login page.

use dioxus::prelude::*;
use ui::views::LoginView;

use super::allow;
use crate::Route;

#[component]
pub fn Login() -> Element {
    let nav = use_navigator();
    if !allow(&Route::Login {}) {
        return rsx! {};
    }

    rsx! {
        LoginView {
            on_success: move |_| {
                nav.replace(Route::Dashboard {});
            },
            on_register: move |_| {
                nav.push(Route::Register {});
            },
        }
    }
}
