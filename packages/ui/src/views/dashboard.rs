use api::dashboard::Overview;
use dioxus::prelude::*;
use tracing::warn;

use super::format;
use crate::auth::{use_gateway, use_session_state};
use crate::components::{EmptyState, NoticeBar, PageHeader, StatCard};

/// Landing view: counters and today's appointments.
#[component]
pub fn DashboardView() -> Element {
    let gateway = use_gateway();
    let state = use_session_state();
    let mut error = use_signal(|| Option::<api::Notice>::None);

    let overview = use_resource(move || {
        let gateway = gateway.clone();
        async move {
            match api::dashboard::overview(&gateway).await {
                Ok(overview) => overview,
                Err(e) => {
                    warn!("Could not load dashboard: {}", e);
                    error.set(Some(api::Notice::error(
                        e.user_message("Could not load the dashboard"),
                    )));
                    Overview::default()
                }
            }
        }
    });

    let greeting = state
        .user()
        .map(|u| format!("Welcome, {}", u.display_name()))
        .unwrap_or_else(|| "Dashboard".to_string());
    let data = overview.read().clone().unwrap_or_default();
    let today = format::date(Some(crate::platform::today()));

    rsx! {
        PageHeader { title: greeting }
        NoticeBar { notice: error(), on_dismiss: move |_| error.set(None) }

        div {
            class: "stat-grid",
            StatCard { label: "Pets", value: data.stats.total_pets.to_string() }
            StatCard { label: "Upcoming appointments", value: data.stats.upcoming_appointments.to_string() }
            StatCard { label: "Appointments today", value: data.stats.appointments_today.to_string() }
            StatCard { label: "Invoices", value: data.stats.total_invoices.to_string() }
        }

        section {
            class: "panel",
            h2 { class: "panel__title", "Today's appointments ({today})" }
            if data.today.is_empty() {
                EmptyState { message: "No appointments today" }
            } else {
                table {
                    class: "table",
                    thead {
                        tr {
                            th { "Time" }
                            th { "Pet" }
                            th { "Service" }
                            th { "Status" }
                        }
                    }
                    tbody {
                        for appointment in data.today {
                            tr {
                                key: "{appointment.id}",
                                td { "{appointment.short_time()}" }
                                td { "{appointment.pet.name}" }
                                td { "{appointment.service.name}" }
                                td { "{appointment.status.label()}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
