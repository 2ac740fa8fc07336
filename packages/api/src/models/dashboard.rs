use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Appointment, Client, Invoice, Pet};

/// Counters shown on the landing dashboard.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    #[serde(rename = "totalMascotas", default)]
    pub total_pets: u64,
    #[serde(rename = "proximasCitas", default)]
    pub upcoming_appointments: u64,
    #[serde(rename = "citasHoy", default)]
    pub appointments_today: u64,
    #[serde(rename = "totalFacturas", default)]
    pub total_invoices: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MonthCount {
    #[serde(rename = "mes")]
    pub month: String,
    #[serde(rename = "cantidad")]
    pub count: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NamedCount {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "cantidad")]
    pub count: u64,
}

/// Business statistics for the admin panel over a [`Period`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AdminStatistics {
    #[serde(rename = "totalClientes", default)]
    pub total_clients: u64,
    #[serde(rename = "totalMascotas", default)]
    pub total_pets: u64,
    #[serde(rename = "totalCitas", default)]
    pub total_appointments: u64,
    #[serde(rename = "totalFacturas", default)]
    pub total_invoices: u64,
    #[serde(rename = "ingresosTotales", default)]
    pub revenue: f64,
    #[serde(rename = "citasPorMes", default)]
    pub appointments_by_month: Vec<MonthCount>,
    #[serde(rename = "serviciosMasPopulares", default)]
    pub popular_services: Vec<NamedCount>,
    #[serde(rename = "clientesFrecuentes", default)]
    pub frequent_clients: Vec<NamedCount>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Period {
    Day,
    Week,
    #[default]
    Month,
    Year,
}

impl Period {
    pub const ALL: [Period; 4] = [Period::Day, Period::Week, Period::Month, Period::Year];

    /// Value of the `periodo` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Day => "dia",
            Period::Week => "semana",
            Period::Month => "mes",
            Period::Year => "año",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Period::Day => "Day",
            Period::Week => "Week",
            Period::Month => "Month",
            Period::Year => "Year",
        }
    }

    pub fn from_wire(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == s)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Totals computed client-side from the full entity lists.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AdminSummary {
    pub total_clients: usize,
    pub total_pets: usize,
    pub total_appointments: usize,
    pub revenue: f64,
}

impl AdminSummary {
    pub fn from_lists(
        clients: &[Client],
        pets: &[Pet],
        appointments: &[Appointment],
        invoices: &[Invoice],
    ) -> Self {
        Self {
            total_clients: clients.len(),
            total_pets: pets.len(),
            total_appointments: appointments.len(),
            revenue: invoices.iter().map(|i| i.total.unwrap_or(0.0)).sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statistics_tolerate_missing_lists() {
        let json = r#"{"totalClientes":4,"ingresosTotales":120.5,
                       "citasPorMes":[{"mes":"Enero","cantidad":3}]}"#;
        let stats: AdminStatistics = serde_json::from_str(json).unwrap();
        assert_eq!(stats.total_clients, 4);
        assert_eq!(stats.appointments_by_month[0].count, 3);
        assert!(stats.popular_services.is_empty());
    }

    #[test]
    fn period_wire_values() {
        assert_eq!(Period::Year.as_str(), "año");
        assert_eq!(Period::from_wire("semana"), Some(Period::Week));
        assert_eq!(Period::default(), Period::Month);
    }

    #[test]
    fn revenue_ignores_invoices_without_total() {
        let invoices: Vec<Invoice> = serde_json::from_str(
            r#"[{"id":1,"total":50.0},{"id":2},{"id":3,"total":25.0}]"#,
        )
        .unwrap();
        let summary = AdminSummary::from_lists(&[], &[], &[], &invoices);
        assert_eq!(summary.revenue, 75.0);
        assert_eq!(summary.total_clients, 0);
    }
}
