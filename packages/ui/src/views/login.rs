//! Login form.

use api::{ApiError, SessionAction};
use dioxus::prelude::*;
use tracing::warn;

use crate::auth::{use_gateway, use_session};
use crate::components::{Button, TextField};

/// Sign-in form. On success the session is authenticated and `on_success`
/// fires; the caller navigates.
#[component]
pub fn LoginView(on_success: EventHandler<()>, on_register: EventHandler<()>) -> Element {
    let mut session = use_session();
    let gateway = use_gateway();
    let mut identifier = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut busy = use_signal(|| false);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let gateway = gateway.clone();
        async move {
            if identifier().trim().is_empty() || password().is_empty() {
                error.set(Some("Enter your username and password".to_string()));
                return;
            }
            error.set(None);
            busy.set(true);
            match api::auth::login(&gateway, &identifier(), &password()).await {
                Ok((user, token)) => {
                    let stored = session.write().dispatch(SessionAction::Login { user, token });
                    match stored {
                        Ok(()) => {
                            password.set(String::new());
                            on_success.call(());
                        }
                        Err(e) => {
                            warn!("Signed in but could not keep the session: {}", e);
                            error.set(Some(
                                "Signed in, but this browser would not save the session. Check that site storage is enabled.".to_string(),
                            ));
                        }
                    }
                }
                Err(ApiError::Unauthorized) => {
                    error.set(Some("Invalid username or password".to_string()));
                }
                Err(e) => {
                    warn!("Login failed: {}", e);
                    error.set(Some(e.user_message("Could not sign in")));
                }
            }
            busy.set(false);
        }
    };

    rsx! {
        div {
            class: "auth-page",
            form {
                class: "auth-card",
                onsubmit: onsubmit,
                h1 { class: "auth-title", "PetSPA" }
                p { class: "auth-subtitle", "Sign in to manage your grooming salon" }

                if let Some(message) = error() {
                    p { class: "auth-error", role: "alert", "{message}" }
                }

                TextField {
                    label: "Username or email",
                    value: identifier(),
                    required: true,
                    oninput: move |v| identifier.set(v),
                }
                TextField {
                    label: "Password",
                    kind: "password",
                    value: password(),
                    required: true,
                    oninput: move |v| password.set(v),
                }
                Button {
                    submit: true,
                    disabled: busy(),
                    if busy() { "Signing in..." } else { "Sign in" }
                }
                p {
                    class: "auth-switch",
                    "No account yet? "
                    a {
                        href: "#",
                        onclick: move |evt: MouseEvent| {
                            evt.prevent_default();
                            on_register.call(());
                        },
                        "Register"
                    }
                }
            }
        }
    }
}
