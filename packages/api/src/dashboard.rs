//! Dashboard and admin statistics.

use crate::appointments;
use crate::error::ApiError;
use crate::gateway::Gateway;
use crate::models::{AdminStatistics, AdminSummary, Appointment, DashboardStats, Period};
use crate::{clients, invoices, pets};

/// Landing dashboard data.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Overview {
    pub stats: DashboardStats,
    pub today: Vec<Appointment>,
}

/// Counters and today's appointments, fetched concurrently.
pub async fn overview(gateway: &Gateway) -> Result<Overview, ApiError> {
    let (stats, today) = futures::try_join!(
        gateway.get::<DashboardStats>("/dashboard/stats"),
        appointments::today(gateway)
    )?;
    Ok(Overview { stats, today })
}

pub async fn admin_statistics(gateway: &Gateway, period: Period) -> Result<AdminStatistics, ApiError> {
    gateway
        .get_query(
            "/estadisticas",
            vec![("periodo".to_string(), period.as_str().to_string())],
        )
        .await
}

/// Totals computed from the full client, pet, appointment and invoice lists.
pub async fn admin_summary(gateway: &Gateway) -> Result<AdminSummary, ApiError> {
    let (clients, pets, appointments, invoices) = futures::try_join!(
        clients::list(gateway),
        pets::list(gateway),
        appointments::list(gateway),
        invoices::list(gateway)
    )?;
    Ok(AdminSummary::from_lists(&clients, &pets, &appointments, &invoices))
}
