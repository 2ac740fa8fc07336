use dioxus::prelude::*;

use super::{Button, ButtonVariant};

/// A full-screen overlay that centers its children in a modal card.
/// Clicking outside the card triggers `on_close`.
#[component]
pub fn ModalOverlay(on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal-card",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                {children}
            }
        }
    }
}

/// Create/edit dialog with Cancel and Save actions.
#[component]
pub fn FormDialog(
    title: String,
    on_close: EventHandler<()>,
    on_save: EventHandler<()>,
    #[props(default = "Save".to_string())] save_label: String,
    #[props(default)] busy: bool,
    children: Element,
) -> Element {
    rsx! {
        ModalOverlay {
            on_close: on_close,
            form {
                class: "modal-form",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    on_save.call(());
                },
                h2 { class: "modal-title", "{title}" }
                div { class: "modal-body", {children} }
                div {
                    class: "modal-actions",
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    Button { submit: true, disabled: busy, "{save_label}" }
                }
            }
        }
    }
}

#[component]
pub fn ConfirmDialog(
    message: String,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
    #[props(default = "Delete".to_string())] confirm_label: String,
) -> Element {
    rsx! {
        ModalOverlay {
            on_close: on_cancel,
            div {
                class: "modal-form",
                p { class: "modal-body", "{message}" }
                div {
                    class: "modal-actions",
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    Button {
                        variant: ButtonVariant::Danger,
                        onclick: move |_| on_confirm.call(()),
                        "{confirm_label}"
                    }
                }
            }
        }
    }
}
