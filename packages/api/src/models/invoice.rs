//! Invoices and their line items.
//!
//! A line's `subtotal` is always `quantity * unit_price`; [`InvoiceItem`]
//! recomputes it whenever either factor changes, and [`InvoiceForm::total`]
//! is the sum of the lines.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{default_if_null, NamedRef};
use crate::resource::Resource;

/// Status the API reports for a settled invoice.
pub const PAID_STATUS: &str = "PAGADA";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ItemKind {
    #[default]
    Servicio,
    Producto,
}

impl ItemKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Servicio => "SERVICIO",
            ItemKind::Producto => "PRODUCTO",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ItemKind::Servicio => "Service",
            ItemKind::Producto => "Product",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InvoiceItem {
    #[serde(
        default,
        deserialize_with = "store::models::id::deserialize_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    #[serde(rename = "tipo")]
    pub kind: ItemKind,
    #[serde(rename = "itemId", default, deserialize_with = "store::models::id::deserialize")]
    pub item_id: String,
    #[serde(rename = "cantidad")]
    pub quantity: u32,
    #[serde(rename = "precioUnitario", default, deserialize_with = "default_if_null")]
    pub unit_price: f64,
    #[serde(default, deserialize_with = "default_if_null")]
    pub subtotal: f64,
}

impl InvoiceItem {
    pub fn new(kind: ItemKind, item_id: impl Into<String>, quantity: u32, unit_price: f64) -> Self {
        Self {
            id: None,
            kind,
            item_id: item_id.into(),
            quantity,
            unit_price,
            subtotal: quantity as f64 * unit_price,
        }
    }

    pub fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
        self.recompute();
    }

    pub fn set_unit_price(&mut self, unit_price: f64) {
        self.unit_price = unit_price;
        self.recompute();
    }

    /// Switching kind invalidates the chosen item.
    pub fn set_kind(&mut self, kind: ItemKind) {
        if self.kind != kind {
            self.kind = kind;
            self.item_id.clear();
            self.unit_price = 0.0;
            self.recompute();
        }
    }

    /// Pick a catalog entry, taking its current price.
    pub fn select(&mut self, item_id: impl Into<String>, unit_price: f64) {
        self.item_id = item_id.into();
        self.set_unit_price(unit_price);
    }

    fn recompute(&mut self) {
        self.subtotal = self.quantity as f64 * self.unit_price;
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    #[serde(deserialize_with = "store::models::id::deserialize")]
    pub id: String,
    #[serde(
        rename = "clienteId",
        default,
        deserialize_with = "store::models::id::deserialize_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub client_id: Option<String>,
    #[serde(rename = "cliente", default, skip_serializing_if = "Option::is_none")]
    pub client: Option<NamedRef>,
    #[serde(rename = "fecha", default, deserialize_with = "super::lenient_date")]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub total: Option<f64>,
    #[serde(rename = "estado", default)]
    pub status: Option<String>,
    #[serde(rename = "detalles", default)]
    pub items: Vec<InvoiceItem>,
}

impl Invoice {
    /// The client id from either `clienteId` or an embedded `cliente`.
    pub fn client_id(&self) -> Option<&str> {
        self.client_id
            .as_deref()
            .or(self.client.as_ref().map(|c| c.id.as_str()))
            .filter(|id| !id.is_empty())
    }

    /// Server total when present, otherwise the sum of the lines.
    pub fn total(&self) -> f64 {
        self.total
            .unwrap_or_else(|| self.items.iter().map(|i| i.subtotal).sum())
    }

    pub fn is_paid(&self) -> bool {
        self.status
            .as_deref()
            .is_some_and(|s| s.eq_ignore_ascii_case(PAID_STATUS))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InvoiceForm {
    #[serde(rename = "clienteId")]
    pub client_id: String,
    #[serde(rename = "fecha", skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(rename = "detalles")]
    pub items: Vec<InvoiceItem>,
}

impl InvoiceForm {
    pub fn total(&self) -> f64 {
        self.items.iter().map(|i| i.subtotal).sum()
    }

    pub fn add_item(&mut self) {
        self.items.push(InvoiceItem::new(ItemKind::Servicio, "", 1, 0.0));
    }

    pub fn remove_item(&mut self, index: usize) {
        if index < self.items.len() {
            self.items.remove(index);
        }
    }
}

impl Resource for Invoice {
    type Form = InvoiceForm;

    const PATH: &'static str = "/facturas";
    const LABEL: &'static str = "Invoice";
    const PLURAL: &'static str = "invoices";

    fn id(&self) -> &str {
        &self.id
    }

    fn to_form(&self) -> InvoiceForm {
        InvoiceForm {
            client_id: self.client_id().unwrap_or_default().to_string(),
            date: self.date,
            items: self.items.clone(),
        }
    }

    fn validate(form: &InvoiceForm) -> Result<(), String> {
        if form.client_id.trim().is_empty() {
            return Err("Choose a client".to_string());
        }
        if form.items.is_empty() {
            return Err("Add at least one line".to_string());
        }
        if form.items.iter().any(|i| i.item_id.trim().is_empty()) {
            return Err("Every line needs a service or product".to_string());
        }
        if form.items.iter().any(|i| i.quantity == 0) {
            return Err("Quantities must be at least 1".to_string());
        }
        Ok(())
    }
}

/// Body of `POST /facturas/cita/{id}`: extra products billed with the
/// appointment.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct BillAppointment {
    #[serde(rename = "productosIds")]
    pub product_ids: Vec<String>,
    #[serde(rename = "cantidades")]
    pub quantities: Vec<u32>,
}

/// One product line of `POST /facturas/{id}/productos`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProductQuantity {
    pub id: String,
    #[serde(rename = "cantidad")]
    pub quantity: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subtotal_follows_quantity_and_price() {
        let mut item = InvoiceItem::new(ItemKind::Producto, "7", 3, 4.5);
        assert_eq!(item.subtotal, 13.5);
        item.set_quantity(2);
        assert_eq!(item.subtotal, 9.0);
        item.set_unit_price(10.0);
        assert_eq!(item.subtotal, 20.0);
    }

    #[test]
    fn form_total_is_sum_of_lines() {
        let form = InvoiceForm {
            client_id: "1".into(),
            date: None,
            items: vec![
                InvoiceItem::new(ItemKind::Servicio, "1", 1, 25.0),
                InvoiceItem::new(ItemKind::Producto, "3", 2, 7.5),
            ],
        };
        assert_eq!(form.total(), 40.0);
        assert!(Invoice::validate(&form).is_ok());
    }

    #[test]
    fn changing_kind_clears_selection() {
        let mut item = InvoiceItem::new(ItemKind::Servicio, "1", 2, 25.0);
        item.set_kind(ItemKind::Producto);
        assert!(item.item_id.is_empty());
        assert_eq!(item.subtotal, 0.0);
    }

    #[test]
    fn invoice_accepts_embedded_client() {
        let json = r#"{"id":5,"cliente":{"id":2,"nombre":"Lucía"},"fecha":"2024-05-02",
                       "estado":"PAGADA","detalles":[{"tipo":"SERVICIO","itemId":1,"cantidad":1,
                       "precioUnitario":30.0,"subtotal":30.0}]}"#;
        let invoice: Invoice = serde_json::from_str(json).unwrap();
        assert_eq!(invoice.client_id(), Some("2"));
        assert!(invoice.is_paid());
        assert_eq!(invoice.total(), 30.0);
    }

    #[test]
    fn empty_invoice_fails_validation() {
        let form = InvoiceForm {
            client_id: "1".into(),
            ..Default::default()
        };
        assert!(Invoice::validate(&form).is_err());
    }
}
