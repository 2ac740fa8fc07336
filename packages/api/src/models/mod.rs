//! # Entity models
//!
//! Records mirrored from the PetSPA REST API. Rust names are English; the
//! wire format (Spanish camelCase) is kept through serde renames. Each
//! managed entity also implements [`crate::resource::Resource`] here, next
//! to its form type.
//!
//! | Module | Types |
//! |--------|-------|
//! | [`client`] | [`Client`], [`ClientForm`] |
//! | [`pet`] | [`Pet`], [`PetForm`] |
//! | [`catalog`] | [`Service`], [`Product`] and their forms |
//! | [`appointment`] | [`Appointment`], [`AppointmentStatus`], [`AppointmentFilter`] |
//! | [`invoice`] | [`Invoice`], [`InvoiceItem`], [`ItemKind`], [`InvoiceForm`] |
//! | [`dashboard`] | [`DashboardStats`], [`AdminStatistics`], [`Period`], [`AdminSummary`] |
//! | [`user`] | `Resource` for [`store::User`], [`UserForm`] |

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

pub mod appointment;
pub mod catalog;
pub mod client;
pub mod dashboard;
pub mod invoice;
pub mod pet;
pub mod user;

pub use appointment::{
    Appointment, AppointmentFilter, AppointmentForm, AppointmentStatus, AvailabilityQuery, SortDirection,
};
pub use catalog::{Product, ProductForm, Service, ServiceForm};
pub use client::{Client, ClientForm};
pub use dashboard::{AdminStatistics, AdminSummary, DashboardStats, MonthCount, NamedCount, Period};
pub use invoice::{BillAppointment, Invoice, InvoiceForm, InvoiceItem, ItemKind, ProductQuantity};
pub use pet::{Pet, PetForm, PET_KINDS};
pub use user::UserForm;

pub(crate) use store::models::id;

/// Reference to another entity by id, as sent in request bodies.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EntityRef {
    #[serde(deserialize_with = "id::deserialize")]
    pub id: String,
}

impl EntityRef {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    pub fn is_set(&self) -> bool {
        !self.id.trim().is_empty()
    }
}

/// Reference embedded in responses, carrying a display name.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NamedRef {
    #[serde(deserialize_with = "id::deserialize", default)]
    pub id: String,
    #[serde(rename = "nombre", default)]
    pub name: String,
}

/// Reads `null` as the type's default, for numbers the API may leave unset.
pub(crate) fn default_if_null<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accepts `YYYY-MM-DD` or a full timestamp, keeping the date part.
pub(crate) fn lenient_date<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<NaiveDate>, D::Error> {
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => {
            let day = s.get(..10).unwrap_or(s);
            NaiveDate::parse_from_str(day, "%Y-%m-%d")
                .map(Some)
                .map_err(serde::de::Error::custom)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Dated {
        #[serde(default, deserialize_with = "lenient_date")]
        fecha: Option<NaiveDate>,
    }

    #[test]
    fn dates_accept_timestamps() {
        let d: Dated = serde_json::from_str(r#"{"fecha":"2024-03-09T10:15:00"}"#).unwrap();
        assert_eq!(d.fecha, NaiveDate::from_ymd_opt(2024, 3, 9));
        let d: Dated = serde_json::from_str(r#"{"fecha":null}"#).unwrap();
        assert_eq!(d.fecha, None);
        let d: Dated = serde_json::from_str("{}").unwrap();
        assert_eq!(d.fecha, None);
    }

    #[test]
    fn pet_kinds_are_exported() {
        assert_eq!(PET_KINDS.first(), Some(&"Perro"));
    }
}
