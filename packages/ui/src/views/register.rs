//! Self-registration form. New accounts are always clients.

use api::auth::RegisterRequest;
use dioxus::prelude::*;
use tracing::warn;

use crate::auth::use_gateway;
use crate::components::{Button, TextField};

#[component]
pub fn RegisterView(on_registered: EventHandler<()>, on_login: EventHandler<()>) -> Element {
    let gateway = use_gateway();
    let mut form = use_signal(RegisterRequest::default);
    let mut error = use_signal(|| Option::<String>::None);
    let mut done = use_signal(|| false);
    let mut busy = use_signal(|| false);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let gateway = gateway.clone();
        async move {
            let request = form();
            if let Err(message) = request.validate() {
                error.set(Some(message));
                return;
            }
            error.set(None);
            busy.set(true);
            match api::auth::register_client(&gateway, &request).await {
                Ok(_) => {
                    done.set(true);
                    form.set(RegisterRequest::default());
                }
                Err(e) => {
                    warn!("Registration failed: {}", e);
                    error.set(Some(e.user_message("Could not create the account")));
                }
            }
            busy.set(false);
        }
    };

    if done() {
        return rsx! {
            div {
                class: "auth-page",
                div {
                    class: "auth-card",
                    h1 { class: "auth-title", "Account created" }
                    p { class: "auth-subtitle", "You can now sign in with your new account." }
                    Button { onclick: move |_| on_registered.call(()), "Go to sign in" }
                }
            }
        };
    }

    let current = form();
    rsx! {
        div {
            class: "auth-page",
            form {
                class: "auth-card",
                onsubmit: onsubmit,
                h1 { class: "auth-title", "Create an account" }

                if let Some(message) = error() {
                    p { class: "auth-error", role: "alert", "{message}" }
                }

                TextField {
                    label: "Username",
                    value: current.username.clone(),
                    required: true,
                    oninput: move |v| form.write().username = v,
                }
                TextField {
                    label: "Email",
                    kind: "email",
                    value: current.email.clone(),
                    required: true,
                    oninput: move |v| form.write().email = v,
                }
                TextField {
                    label: "Full name",
                    value: current.name.clone(),
                    oninput: move |v| form.write().name = v,
                }
                TextField {
                    label: "Phone",
                    kind: "tel",
                    value: current.phone.clone(),
                    oninput: move |v| form.write().phone = v,
                }
                TextField {
                    label: "Address",
                    value: current.address.clone(),
                    oninput: move |v| form.write().address = v,
                }
                TextField {
                    label: "Password",
                    kind: "password",
                    value: current.password.clone(),
                    required: true,
                    oninput: move |v| form.write().password = v,
                }
                TextField {
                    label: "Confirm password",
                    kind: "password",
                    value: current.confirm_password.clone(),
                    required: true,
                    oninput: move |v| form.write().confirm_password = v,
                }
                Button {
                    submit: true,
                    disabled: busy(),
                    if busy() { "Creating account..." } else { "Register" }
                }
                p {
                    class: "auth-switch",
                    "Already registered? "
                    a {
                        href: "#",
                        onclick: move |evt: MouseEvent| {
                            evt.prevent_default();
                            on_login.call(());
                        },
                        "Sign in"
                    }
                }
            }
        }
    }
}
