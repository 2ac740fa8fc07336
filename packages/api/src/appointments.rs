//! Appointment endpoints under `/citas`.

use chrono::NaiveDate;

use crate::error::ApiError;
use crate::gateway::Gateway;
use crate::models::{Appointment, AppointmentFilter, AppointmentForm, AvailabilityQuery};
use crate::resource;

pub async fn list(gateway: &Gateway) -> Result<Vec<Appointment>, ApiError> {
    resource::list::<Appointment>(gateway).await
}

/// `GET /citas` narrowed by the server.
pub async fn list_filtered(gateway: &Gateway, filter: &AppointmentFilter) -> Result<Vec<Appointment>, ApiError> {
    gateway.get_list_query("/citas", filter.to_query()).await
}

pub async fn get(gateway: &Gateway, id: &str) -> Result<Appointment, ApiError> {
    resource::get::<Appointment>(gateway, id).await
}

pub async fn today(gateway: &Gateway) -> Result<Vec<Appointment>, ApiError> {
    gateway.get_list("/citas/hoy").await
}

pub async fn on_date(gateway: &Gateway, date: NaiveDate) -> Result<Vec<Appointment>, ApiError> {
    gateway
        .get_list(&format!("/citas/fecha/{}", date.format("%Y-%m-%d")))
        .await
}

pub async fn by_pet(gateway: &Gateway, pet_id: &str) -> Result<Vec<Appointment>, ApiError> {
    gateway.get_list(&format!("/citas/mascota/{pet_id}")).await
}

pub async fn by_client(gateway: &Gateway, client_id: &str) -> Result<Vec<Appointment>, ApiError> {
    gateway.get_list(&format!("/citas/cliente/{client_id}")).await
}

pub async fn create(gateway: &Gateway, form: &AppointmentForm) -> Result<(), ApiError> {
    resource::create::<Appointment>(gateway, form).await
}

pub async fn update(gateway: &Gateway, id: &str, form: &AppointmentForm) -> Result<(), ApiError> {
    resource::update::<Appointment>(gateway, id, form).await
}

pub async fn delete(gateway: &Gateway, id: &str) -> Result<(), ApiError> {
    resource::delete::<Appointment>(gateway, id).await
}

pub async fn cancel(gateway: &Gateway, id: &str) -> Result<(), ApiError> {
    gateway.put_empty(&format!("/citas/{id}/cancelar")).await
}

pub async fn complete(gateway: &Gateway, id: &str) -> Result<(), ApiError> {
    gateway.put_empty(&format!("/citas/{id}/completar")).await
}

/// Whether the slot is free, as judged by the server.
pub async fn check_availability(gateway: &Gateway, query: &AvailabilityQuery) -> Result<bool, ApiError> {
    gateway.post("/citas/validar", query).await
}

#[cfg(test)]
mod tests {
    use reqwest::Method;
    use serde_json::json;

    use super::*;
    use crate::models::{AppointmentStatus, SortDirection};
    use crate::testing::RecordingTransport;

    #[tokio::test]
    async fn filter_becomes_query_parameters() {
        let transport = RecordingTransport::new();
        transport.respond(200, "[]");
        let gw = transport.gateway();
        let filter = AppointmentFilter {
            status: Some(AppointmentStatus::Confirmada),
            order_by: Some("fecha".into()),
            direction: Some(SortDirection::Asc),
            ..Default::default()
        };

        let found = list_filtered(&gw, &filter).await.unwrap();

        assert!(found.is_empty());
        let sent = transport.last_request().unwrap();
        assert!(sent.url.ends_with("/citas"));
        assert_eq!(
            sent.query,
            vec![
                ("estado".to_string(), "CONFIRMADA".to_string()),
                ("ordenarPor".to_string(), "fecha".to_string()),
                ("direccion".to_string(), "asc".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn cancel_and_complete_are_puts_without_body() {
        let transport = RecordingTransport::new();
        let gw = transport.gateway();

        cancel(&gw, "4").await.unwrap();
        complete(&gw, "5").await.unwrap();

        let requests = transport.requests();
        assert_eq!(requests[0].method, Method::PUT);
        assert!(requests[0].url.ends_with("/citas/4/cancelar"));
        assert!(requests[0].body.is_none());
        assert!(requests[1].url.ends_with("/citas/5/completar"));
    }

    #[tokio::test]
    async fn availability_reads_wrapped_boolean() {
        let transport = RecordingTransport::new();
        transport.respond_json(200, json!({"success": true, "data": false}));
        let gw = transport.gateway();
        let query = AvailabilityQuery {
            date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            start: "10:00".into(),
            duration: 45,
        };

        assert!(!check_availability(&gw, &query).await.unwrap());

        let body: serde_json::Value =
            serde_json::from_str(transport.last_request().unwrap().body.as_deref().unwrap()).unwrap();
        assert_eq!(body, json!({"fecha": "2024-06-01", "horaInicio": "10:00", "duracion": 45}));
    }

    #[tokio::test]
    async fn date_listing_uses_iso_dates() {
        let transport = RecordingTransport::new();
        transport.respond(200, "null");
        let gw = transport.gateway();

        let found = on_date(&gw, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()).await.unwrap();

        assert!(found.is_empty());
        assert!(transport.last_request().unwrap().url.ends_with("/citas/fecha/2024-02-29"));
    }
}
