//! API connectivity indicator for the header.

use api::HealthStatus;
use dioxus::prelude::*;

use crate::auth::{use_app_config, use_gateway};
use crate::icons::{FaCloud, FaTriangleExclamation};
use crate::platform;
use crate::Icon;

/// Pings `/health` on mount and then every `health.interval_secs`.
///
/// - **Online**: cloud icon, "API connected"
/// - **Offline**: warning icon, "API disconnected"
///
/// The tooltip carries the time of the last check. Clicking re-checks.
#[component]
pub fn StatusIndicator() -> Element {
    let gateway = use_gateway();
    let config = use_app_config();
    let mut status = use_signal(HealthStatus::default);
    let mut checked_at = use_signal(|| Option::<String>::None);

    let check = use_callback({
        let gateway = gateway.clone();
        let health = config.health.clone();
        move |_: ()| {
            let gateway = gateway.clone();
            let health = health.clone();
            spawn(async move {
                let result = api::health::check(&gateway, &health).await;
                status.set(result);
                checked_at.set(Some(platform::clock_time()));
            });
        }
    });

    use_future(move || {
        let health = config.health.clone();
        async move {
            loop {
                check.call(());
                match health.interval() {
                    Some(interval) => platform::sleep(interval).await,
                    None => break,
                }
            }
        }
    });

    let current = status();
    let title = match checked_at() {
        Some(at) => format!("{} (checked {at})", current.label()),
        None => "Checking API...".to_string(),
    };
    let class = if current.is_online() {
        "status-indicator status-indicator--online"
    } else {
        "status-indicator status-indicator--offline"
    };

    rsx! {
        button {
            class: class,
            title: "{title}",
            onclick: move |_| check.call(()),
            if current.is_online() {
                Icon { icon: FaCloud, width: 14, height: 14 }
            } else {
                Icon { icon: FaTriangleExclamation, width: 14, height: 14 }
            }
            span { class: "status-indicator__label", "{current.label()}" }
        }
    }
}
