//! Invoice endpoints under `/facturas`.

use serde::Serialize;

use crate::error::ApiError;
use crate::gateway::Gateway;
use crate::models::{BillAppointment, Invoice, InvoiceForm, InvoiceItem, ProductQuantity};
use crate::resource;

pub async fn list(gateway: &Gateway) -> Result<Vec<Invoice>, ApiError> {
    resource::list::<Invoice>(gateway).await
}

pub async fn get(gateway: &Gateway, id: &str) -> Result<Invoice, ApiError> {
    resource::get::<Invoice>(gateway, id).await
}

pub async fn create(gateway: &Gateway, form: &InvoiceForm) -> Result<(), ApiError> {
    resource::create::<Invoice>(gateway, form).await
}

pub async fn update(gateway: &Gateway, id: &str, form: &InvoiceForm) -> Result<(), ApiError> {
    resource::update::<Invoice>(gateway, id, form).await
}

pub async fn delete(gateway: &Gateway, id: &str) -> Result<(), ApiError> {
    resource::delete::<Invoice>(gateway, id).await
}

pub async fn by_client(gateway: &Gateway, client_id: &str) -> Result<Vec<Invoice>, ApiError> {
    gateway
        .get_list(&format!("/facturas/cliente/{client_id}"))
        .await
}

#[derive(Serialize)]
struct Lines<'a> {
    detalles: &'a [InvoiceItem],
}

/// Server-side total for a set of lines.
pub async fn calculate_total(gateway: &Gateway, items: &[InvoiceItem]) -> Result<f64, ApiError> {
    gateway
        .post("/facturas/calcular", &Lines { detalles: items })
        .await
}

/// Invoice an appointment, adding any retail products sold with it.
pub async fn bill_appointment(
    gateway: &Gateway,
    appointment_id: &str,
    extras: &BillAppointment,
) -> Result<Invoice, ApiError> {
    gateway
        .post(&format!("/facturas/cita/{appointment_id}"), extras)
        .await
}

#[derive(Serialize)]
struct AddProducts<'a> {
    productos: &'a [ProductQuantity],
}

pub async fn add_products(
    gateway: &Gateway,
    invoice_id: &str,
    products: &[ProductQuantity],
) -> Result<Invoice, ApiError> {
    gateway
        .post(
            &format!("/facturas/{invoice_id}/productos"),
            &AddProducts {
                productos: products,
            },
        )
        .await
}

pub async fn pay(gateway: &Gateway, invoice_id: &str) -> Result<(), ApiError> {
    gateway
        .post_empty(&format!("/facturas/{invoice_id}/pagar"))
        .await
}

/// The invoice rendered as PDF.
pub async fn download_pdf(gateway: &Gateway, invoice_id: &str) -> Result<Vec<u8>, ApiError> {
    gateway
        .get_bytes(&format!("/facturas/{invoice_id}/pdf"))
        .await
}

pub fn pdf_file_name(invoice_id: &str) -> String {
    format!("factura-{invoice_id}.pdf")
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::models::ItemKind;
    use crate::testing::RecordingTransport;

    #[tokio::test]
    async fn created_invoice_carries_computed_subtotals() {
        let transport = RecordingTransport::new();
        transport.respond(201, "");
        let gw = transport.gateway();
        let form = InvoiceForm {
            client_id: "2".into(),
            date: None,
            items: vec![InvoiceItem::new(ItemKind::Producto, "8", 3, 2.5)],
        };

        create(&gw, &form).await.unwrap();

        let body: serde_json::Value =
            serde_json::from_str(transport.last_request().unwrap().body.as_deref().unwrap()).unwrap();
        assert_eq!(body["clienteId"], "2");
        assert_eq!(body["detalles"][0]["tipo"], "PRODUCTO");
        assert_eq!(body["detalles"][0]["subtotal"], 7.5);
        assert!(body["detalles"][0].get("id").is_none());
    }

    #[tokio::test]
    async fn pdf_download_returns_raw_bytes() {
        let transport = RecordingTransport::new();
        transport.respond(200, "%PDF-1.4");
        let gw = transport.gateway();

        let bytes = download_pdf(&gw, "9").await.unwrap();

        assert_eq!(bytes, b"%PDF-1.4");
        assert!(transport.last_request().unwrap().url.ends_with("/facturas/9/pdf"));
        assert_eq!(pdf_file_name("9"), "factura-9.pdf");
    }

    #[tokio::test]
    async fn billing_and_payment_paths() {
        let transport = RecordingTransport::new();
        transport.respond_json(200, json!({"data": {"id": 30, "total": 42.0}}));
        transport.respond(200, "");
        transport.respond_json(200, json!(42.0));
        let gw = transport.gateway();

        let invoice = bill_appointment(
            &gw,
            "11",
            &BillAppointment {
                product_ids: vec!["3".into()],
                quantities: vec![2],
            },
        )
        .await
        .unwrap();
        assert_eq!(invoice.id, "30");

        pay(&gw, &invoice.id).await.unwrap();
        let total = calculate_total(&gw, &[InvoiceItem::new(ItemKind::Servicio, "1", 1, 42.0)])
            .await
            .unwrap();
        assert_eq!(total, 42.0);

        let requests = transport.requests();
        let billed: serde_json::Value = serde_json::from_str(requests[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(billed, json!({"productosIds": ["3"], "cantidades": [2]}));
        assert!(requests[1].url.ends_with("/facturas/30/pagar"));
        assert!(requests[2].url.ends_with("/facturas/calcular"));
    }
}
