//! Services (grooming treatments) and products (retail stock).

use serde::{Deserialize, Serialize};

use super::default_if_null;
use crate::resource::{require, Resource};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Service {
    #[serde(deserialize_with = "store::models::id::deserialize")]
    pub id: String,
    #[serde(rename = "nombre")]
    pub name: String,
    /// Minutes.
    #[serde(rename = "duracion", default, deserialize_with = "default_if_null")]
    pub duration: u32,
    #[serde(rename = "precio", default, deserialize_with = "default_if_null")]
    pub price: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceForm {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "duracion")]
    pub duration: u32,
    #[serde(rename = "precio")]
    pub price: f64,
}

impl Resource for Service {
    type Form = ServiceForm;

    const PATH: &'static str = "/servicios";
    const LABEL: &'static str = "Service";
    const PLURAL: &'static str = "services";

    fn id(&self) -> &str {
        &self.id
    }

    fn to_form(&self) -> ServiceForm {
        ServiceForm {
            name: self.name.clone(),
            duration: self.duration,
            price: self.price,
        }
    }

    fn validate(form: &ServiceForm) -> Result<(), String> {
        require(&form.name, "Name")?;
        if form.duration == 0 {
            return Err("Duration must be greater than zero".to_string());
        }
        non_negative(form.price)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(deserialize_with = "store::models::id::deserialize")]
    pub id: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "tipo", default)]
    pub kind: String,
    #[serde(rename = "precio", default, deserialize_with = "default_if_null")]
    pub price: f64,
    #[serde(default, deserialize_with = "default_if_null")]
    pub stock: u32,
}

impl Product {
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductForm {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "tipo")]
    pub kind: String,
    #[serde(rename = "precio")]
    pub price: f64,
    pub stock: u32,
}

impl Resource for Product {
    type Form = ProductForm;

    const PATH: &'static str = "/productos";
    const LABEL: &'static str = "Product";
    const PLURAL: &'static str = "products";

    fn id(&self) -> &str {
        &self.id
    }

    fn to_form(&self) -> ProductForm {
        ProductForm {
            name: self.name.clone(),
            kind: self.kind.clone(),
            price: self.price,
            stock: self.stock,
        }
    }

    fn validate(form: &ProductForm) -> Result<(), String> {
        require(&form.name, "Name")?;
        non_negative(form.price)
    }
}

fn non_negative(price: f64) -> Result<(), String> {
    if price.is_finite() && price >= 0.0 {
        Ok(())
    } else {
        Err("Price must be zero or more".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_wire_names() {
        let json = r#"{"id":1,"nombre":"Baño completo","duracion":60,"precio":25.5}"#;
        let service: Service = serde_json::from_str(json).unwrap();
        assert_eq!(service.duration, 60);
        let form = serde_json::to_value(service.to_form()).unwrap();
        assert_eq!(form["precio"], 25.5);
        assert_eq!(form["duracion"], 60);
    }

    #[test]
    fn unset_numbers_read_as_zero() {
        let json = r#"{"id":4,"nombre":"Champú","precio":null,"stock":null}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.price, 0.0);
        assert_eq!(product.stock, 0);
        assert!(!product.in_stock());
    }

    #[test]
    fn zero_duration_is_rejected() {
        let form = ServiceForm {
            name: "Corte".into(),
            duration: 0,
            price: 10.0,
        };
        assert!(Service::validate(&form).is_err());
    }

    #[test]
    fn negative_price_is_rejected() {
        let form = ProductForm {
            name: "Champú".into(),
            price: -1.0,
            ..Default::default()
        };
        assert!(Product::validate(&form).is_err());
    }
}
