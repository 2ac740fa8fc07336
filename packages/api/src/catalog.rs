//! Services (`/servicios`) and products (`/productos`).

use crate::error::ApiError;
use crate::gateway::Gateway;
use crate::models::{Product, Service};
use crate::resource;

pub async fn list_services(gateway: &Gateway) -> Result<Vec<Service>, ApiError> {
    resource::list::<Service>(gateway).await
}

pub async fn list_products(gateway: &Gateway) -> Result<Vec<Product>, ApiError> {
    resource::list::<Product>(gateway).await
}

/// Both catalogs, fetched concurrently.
pub async fn load(gateway: &Gateway) -> Result<(Vec<Service>, Vec<Product>), ApiError> {
    futures::try_join!(list_services(gateway), list_products(gateway))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::crud::{self, CrudState};
    use crate::models::ServiceForm;
    use crate::testing::FakeBackend;

    #[tokio::test]
    async fn catalogs_load_together() {
        let backend = FakeBackend::new();
        backend.seed("servicios", vec![json!({"nombre": "Baño", "duracion": 30, "precio": 15.0})]);
        backend.seed("productos", vec![json!({"nombre": "Champú", "tipo": "Higiene", "precio": 8.0, "stock": 12})]);
        let gw = backend.gateway();

        let (services, products) = load(&gw).await.unwrap();

        assert_eq!(services[0].name, "Baño");
        assert!(products[0].in_stock());
    }

    #[tokio::test]
    async fn service_crud_cycle() {
        let backend = FakeBackend::new();
        let gw = backend.gateway();
        let mut view = CrudState::<Service>::new();

        view.open_create_with(ServiceForm {
            name: "Corte de uñas".into(),
            duration: 15,
            price: 9.5,
        });
        assert!(crud::submit(&mut view, &gw).await);
        assert_eq!(view.items.len(), 1);
        assert_eq!(view.items[0].price, 9.5);
        assert_eq!(backend.items("servicios")[0]["duracion"], 15);
    }
}
