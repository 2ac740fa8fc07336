use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{EntityRef, NamedRef};
use crate::resource::Resource;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AppointmentStatus {
    #[default]
    Pendiente,
    Confirmada,
    Cancelada,
    Completada,
}

impl AppointmentStatus {
    pub const ALL: [AppointmentStatus; 4] = [
        AppointmentStatus::Pendiente,
        AppointmentStatus::Confirmada,
        AppointmentStatus::Cancelada,
        AppointmentStatus::Completada,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Pendiente => "PENDIENTE",
            AppointmentStatus::Confirmada => "CONFIRMADA",
            AppointmentStatus::Cancelada => "CANCELADA",
            AppointmentStatus::Completada => "COMPLETADA",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AppointmentStatus::Pendiente => "Pending",
            AppointmentStatus::Confirmada => "Confirmed",
            AppointmentStatus::Cancelada => "Cancelled",
            AppointmentStatus::Completada => "Completed",
        }
    }

    pub fn from_wire(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|st| st.as_str().eq_ignore_ascii_case(s))
    }

    /// Cancel and complete only apply to appointments still open.
    pub fn is_open(&self) -> bool {
        matches!(self, AppointmentStatus::Pendiente | AppointmentStatus::Confirmada)
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    #[serde(deserialize_with = "store::models::id::deserialize")]
    pub id: String,
    #[serde(rename = "mascota", default)]
    pub pet: NamedRef,
    #[serde(rename = "servicio", default)]
    pub service: NamedRef,
    #[serde(rename = "fecha", default, deserialize_with = "super::lenient_date")]
    pub date: Option<NaiveDate>,
    #[serde(rename = "hora", default)]
    pub time: String,
    #[serde(rename = "estado", default)]
    pub status: AppointmentStatus,
    #[serde(rename = "notas", default)]
    pub notes: Option<String>,
}

impl Appointment {
    /// `HH:MM`, dropping seconds when the server sends them.
    pub fn short_time(&self) -> &str {
        self.time.get(..5).unwrap_or(&self.time)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AppointmentForm {
    #[serde(rename = "mascota")]
    pub pet: EntityRef,
    #[serde(rename = "servicio")]
    pub service: EntityRef,
    #[serde(rename = "fecha", skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(rename = "hora")]
    pub time: String,
    #[serde(rename = "notas")]
    pub notes: String,
    #[serde(rename = "estado")]
    pub status: AppointmentStatus,
}

impl Default for AppointmentForm {
    fn default() -> Self {
        Self {
            pet: EntityRef::default(),
            service: EntityRef::default(),
            date: None,
            time: String::new(),
            notes: String::new(),
            status: AppointmentStatus::Pendiente,
        }
    }
}

impl Resource for Appointment {
    type Form = AppointmentForm;

    const PATH: &'static str = "/citas";
    const LABEL: &'static str = "Appointment";
    const PLURAL: &'static str = "appointments";

    fn id(&self) -> &str {
        &self.id
    }

    fn to_form(&self) -> AppointmentForm {
        AppointmentForm {
            pet: EntityRef::new(self.pet.id.clone()),
            service: EntityRef::new(self.service.id.clone()),
            date: self.date,
            time: self.time.clone(),
            notes: self.notes.clone().unwrap_or_default(),
            status: self.status,
        }
    }

    fn validate(form: &AppointmentForm) -> Result<(), String> {
        if !form.pet.is_set() {
            return Err("Choose a pet".to_string());
        }
        if !form.service.is_set() {
            return Err("Choose a service".to_string());
        }
        if form.date.is_none() {
            return Err("Date is required".to_string());
        }
        if form.time.trim().is_empty() {
            return Err("Time is required".to_string());
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// Server-side filter for `GET /citas`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppointmentFilter {
    pub status: Option<AppointmentStatus>,
    pub pet_id: Option<String>,
    pub service_id: Option<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub order_by: Option<String>,
    pub direction: Option<SortDirection>,
}

impl AppointmentFilter {
    pub fn is_empty(&self) -> bool {
        self.to_query().is_empty()
    }

    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        let mut push = |key: &str, value: Option<String>| {
            if let Some(value) = value.filter(|v| !v.trim().is_empty()) {
                query.push((key.to_string(), value));
            }
        };
        push("estado", self.status.map(|s| s.as_str().to_string()));
        push("mascotaId", self.pet_id.clone());
        push("servicioId", self.service_id.clone());
        push("fechaDesde", self.from.map(|d| d.format("%Y-%m-%d").to_string()));
        push("fechaHasta", self.to.map(|d| d.format("%Y-%m-%d").to_string()));
        push("ordenarPor", self.order_by.clone());
        push("direccion", self.direction.map(|d| d.as_str().to_string()));
        query
    }
}

/// Body of `POST /citas/validar`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AvailabilityQuery {
    #[serde(rename = "fecha")]
    pub date: NaiveDate,
    #[serde(rename = "horaInicio")]
    pub start: String,
    /// Minutes, taken from the chosen service.
    #[serde(rename = "duracion")]
    pub duration: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_uses_upper_case_wire_names() {
        assert_eq!(
            serde_json::to_string(&AppointmentStatus::Completada).unwrap(),
            "\"COMPLETADA\""
        );
        let status: AppointmentStatus = serde_json::from_str("\"CANCELADA\"").unwrap();
        assert_eq!(status, AppointmentStatus::Cancelada);
        assert!(!status.is_open());
        assert_eq!(AppointmentStatus::from_wire("confirmada"), Some(AppointmentStatus::Confirmada));
    }

    #[test]
    fn form_nests_references() {
        let form = AppointmentForm {
            pet: EntityRef::new("4"),
            service: EntityRef::new("2"),
            date: NaiveDate::from_ymd_opt(2024, 6, 1),
            time: "10:30".into(),
            ..Default::default()
        };
        let wire = serde_json::to_value(&form).unwrap();
        assert_eq!(wire["mascota"]["id"], "4");
        assert_eq!(wire["servicio"]["id"], "2");
        assert_eq!(wire["fecha"], "2024-06-01");
        assert_eq!(wire["estado"], "PENDIENTE");
        assert!(Appointment::validate(&form).is_ok());
    }

    #[test]
    fn missing_date_fails_validation() {
        let form = AppointmentForm {
            pet: EntityRef::new("4"),
            service: EntityRef::new("2"),
            time: "10:30".into(),
            ..Default::default()
        };
        assert_eq!(Appointment::validate(&form), Err("Date is required".to_string()));
    }

    #[test]
    fn filter_skips_unset_fields() {
        let filter = AppointmentFilter {
            status: Some(AppointmentStatus::Pendiente),
            from: NaiveDate::from_ymd_opt(2024, 1, 1),
            direction: Some(SortDirection::Desc),
            pet_id: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(
            filter.to_query(),
            vec![
                ("estado".to_string(), "PENDIENTE".to_string()),
                ("fechaDesde".to_string(), "2024-01-01".to_string()),
                ("direccion".to_string(), "desc".to_string()),
            ]
        );
        assert!(AppointmentFilter::default().is_empty());
    }

    #[test]
    fn today_entries_without_status_default_to_pending() {
        let json = r#"{"id":1,"fecha":"2024-06-01","hora":"09:00:00",
                       "mascota":{"id":1,"nombre":"Rex"},"servicio":{"id":2,"nombre":"Baño"}}"#;
        let appointment: Appointment = serde_json::from_str(json).unwrap();
        assert_eq!(appointment.status, AppointmentStatus::Pendiente);
        assert_eq!(appointment.short_time(), "09:00");
    }
}
