use dioxus::prelude::*;

/// Page title with optional actions on the right.
#[component]
pub fn PageHeader(title: String, children: Element) -> Element {
    rsx! {
        div {
            class: "page-header",
            h1 { class: "page-title", "{title}" }
            div { class: "page-actions", {children} }
        }
    }
}

#[component]
pub fn StatCard(label: String, value: String) -> Element {
    rsx! {
        div {
            class: "stat-card",
            span { class: "stat-card__value", "{value}" }
            span { class: "stat-card__label", "{label}" }
        }
    }
}

#[component]
pub fn EmptyState(message: String) -> Element {
    rsx! {
        p { class: "empty-state", "{message}" }
    }
}

/// Tab strip over `labels`; `selected` is an index.
#[component]
pub fn Tabs(labels: Vec<String>, selected: usize, onselect: EventHandler<usize>) -> Element {
    rsx! {
        div {
            class: "tabs",
            for (index, label) in labels.into_iter().enumerate() {
                button {
                    key: "{index}",
                    class: if index == selected { "tab tab--active" } else { "tab" },
                    onclick: move |_| onselect.call(index),
                    "{label}"
                }
            }
        }
    }
}
