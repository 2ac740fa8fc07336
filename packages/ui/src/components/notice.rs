use api::{Notice, NoticeLevel};
use dioxus::prelude::*;

use crate::icons::{FaCircleCheck, FaCircleExclamation, FaXmark};
use crate::Icon;

/// Snackbar for the transient success/error message of a view.
#[component]
pub fn NoticeBar(#[props(!optional)] notice: Option<Notice>, on_dismiss: EventHandler<()>) -> Element {
    let Some(notice) = notice else {
        return rsx! {};
    };
    let class = match notice.level {
        NoticeLevel::Success => "notice notice--success",
        NoticeLevel::Error => "notice notice--error",
    };
    rsx! {
        div {
            class: class,
            role: "status",
            match notice.level {
                NoticeLevel::Success => rsx! { Icon { icon: FaCircleCheck, width: 16, height: 16 } },
                NoticeLevel::Error => rsx! { Icon { icon: FaCircleExclamation, width: 16, height: 16 } },
            }
            span { class: "notice__message", "{notice.message}" }
            button {
                class: "notice__close",
                title: "Dismiss",
                onclick: move |_| on_dismiss.call(()),
                Icon { icon: FaXmark, width: 12, height: 12 }
            }
        }
    }
}
