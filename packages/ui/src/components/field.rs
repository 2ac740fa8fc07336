//! Labelled form inputs. Values travel as strings; views parse them.

use dioxus::prelude::*;

#[component]
pub fn TextField(
    label: String,
    value: String,
    oninput: EventHandler<String>,
    #[props(default = "text".to_string())] kind: String,
    #[props(default)] placeholder: String,
    #[props(default)] required: bool,
    #[props(default)] disabled: bool,
) -> Element {
    rsx! {
        label {
            class: "field",
            span { class: "field__label", "{label}" }
            input {
                class: "field__input",
                r#type: "{kind}",
                value: "{value}",
                placeholder: "{placeholder}",
                required: required,
                disabled: disabled,
                oninput: move |evt| oninput.call(evt.value()),
            }
        }
    }
}

#[component]
pub fn TextAreaField(label: String, value: String, oninput: EventHandler<String>) -> Element {
    rsx! {
        label {
            class: "field",
            span { class: "field__label", "{label}" }
            textarea {
                class: "field__input",
                rows: 3,
                value: "{value}",
                oninput: move |evt| oninput.call(evt.value()),
            }
        }
    }
}

/// Select over `(value, label)` pairs. A non-empty `placeholder` adds an
/// empty first option.
#[component]
pub fn SelectField(
    label: String,
    value: String,
    options: Vec<(String, String)>,
    onchange: EventHandler<String>,
    #[props(default)] placeholder: String,
    #[props(default)] disabled: bool,
) -> Element {
    rsx! {
        label {
            class: "field",
            span { class: "field__label", "{label}" }
            select {
                class: "field__input",
                disabled: disabled,
                onchange: move |evt| onchange.call(evt.value()),
                if !placeholder.is_empty() {
                    option { value: "", selected: value.is_empty(), "{placeholder}" }
                }
                for (option_value, option_label) in options {
                    option {
                        key: "{option_value}",
                        value: "{option_value}",
                        selected: option_value == value,
                        "{option_label}"
                    }
                }
            }
        }
    }
}
