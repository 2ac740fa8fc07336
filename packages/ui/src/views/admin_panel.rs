use api::models::{AdminStatistics, AdminSummary, NamedCount, Period};
use api::Notice;
use dioxus::prelude::*;
use tracing::warn;

use super::format;
use crate::auth::use_gateway;
use crate::components::{EmptyState, NoticeBar, PageHeader, SelectField, StatCard};

/// Statistics for a chosen period plus totals over the full lists.
#[component]
pub fn AdminPanelView() -> Element {
    let gateway = use_gateway();
    let mut period = use_signal(Period::default);
    let mut notice = use_signal(|| Option::<Notice>::None);

    let statistics = use_resource({
        let gateway = gateway.clone();
        move || {
            let gateway = gateway.clone();
            let period = period();
            async move {
                match api::dashboard::admin_statistics(&gateway, period).await {
                    Ok(stats) => stats,
                    Err(e) => {
                        warn!("Could not load statistics for {}: {}", period, e);
                        notice.set(Some(Notice::error(e.user_message("Could not load statistics"))));
                        AdminStatistics::default()
                    }
                }
            }
        }
    });

    let summary = use_resource(move || {
        let gateway = gateway.clone();
        async move {
            match api::dashboard::admin_summary(&gateway).await {
                Ok(summary) => summary,
                Err(e) => {
                    warn!("Could not load admin summary: {}", e);
                    notice.set(Some(Notice::error(e.user_message("Could not load the summary"))));
                    AdminSummary::default()
                }
            }
        }
    });

    let stats = statistics.read().clone().unwrap_or_default();
    let totals = summary.read().clone().unwrap_or_default();
    let periods: Vec<(String, String)> = Period::ALL
        .iter()
        .map(|p| (p.as_str().to_string(), p.label().to_string()))
        .collect();

    rsx! {
        PageHeader {
            title: "Admin panel",
            SelectField {
                label: "Period",
                value: period().as_str().to_string(),
                options: periods,
                onchange: move |v: String| {
                    if let Some(p) = Period::from_wire(&v) {
                        period.set(p);
                    }
                },
            }
        }
        NoticeBar { notice: notice(), on_dismiss: move |_| notice.set(None) }

        section {
            class: "panel",
            h2 { class: "panel__title", "Totals" }
            div {
                class: "stat-grid",
                StatCard { label: "Clients", value: totals.total_clients.to_string() }
                StatCard { label: "Pets", value: totals.total_pets.to_string() }
                StatCard { label: "Appointments", value: totals.total_appointments.to_string() }
                StatCard { label: "Revenue", value: format::money(totals.revenue) }
            }
        }

        section {
            class: "panel",
            h2 { class: "panel__title", "This {period().label().to_lowercase()}" }
            div {
                class: "stat-grid",
                StatCard { label: "Clients", value: stats.total_clients.to_string() }
                StatCard { label: "Pets", value: stats.total_pets.to_string() }
                StatCard { label: "Appointments", value: stats.total_appointments.to_string() }
                StatCard { label: "Invoices", value: stats.total_invoices.to_string() }
                StatCard { label: "Revenue", value: format::money(stats.revenue) }
            }
            if !stats.appointments_by_month.is_empty() {
                h3 { "Appointments by month" }
                table {
                    class: "table table--compact",
                    tbody {
                        for row in stats.appointments_by_month.iter() {
                            tr {
                                key: "{row.month}",
                                td { "{row.month}" }
                                td { "{row.count}" }
                            }
                        }
                    }
                }
            }
            RankingTable { title: "Most popular services", rows: stats.popular_services.clone() }
            RankingTable { title: "Frequent clients", rows: stats.frequent_clients.clone() }
        }
    }
}

#[component]
fn RankingTable(title: String, rows: Vec<NamedCount>) -> Element {
    rsx! {
        h3 { "{title}" }
        if rows.is_empty() {
            EmptyState { message: "No data for this period" }
        } else {
            table {
                class: "table table--compact",
                tbody {
                    for (index, row) in rows.iter().enumerate() {
                        tr {
                            key: "{index}",
                            td { "{row.name}" }
                            td { "{row.count}" }
                        }
                    }
                }
            }
        }
    }
}
