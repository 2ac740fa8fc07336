//! Client endpoints under `/clientes`.

use crate::error::ApiError;
use crate::gateway::Gateway;
use crate::models::{Client, ClientForm};
use crate::resource;

pub async fn list(gateway: &Gateway) -> Result<Vec<Client>, ApiError> {
    resource::list::<Client>(gateway).await
}

pub async fn get(gateway: &Gateway, id: &str) -> Result<Client, ApiError> {
    resource::get::<Client>(gateway, id).await
}

pub async fn create(gateway: &Gateway, form: &ClientForm) -> Result<(), ApiError> {
    resource::create::<Client>(gateway, form).await
}

pub async fn update(gateway: &Gateway, id: &str, form: &ClientForm) -> Result<(), ApiError> {
    resource::update::<Client>(gateway, id, form).await
}

pub async fn delete(gateway: &Gateway, id: &str) -> Result<(), ApiError> {
    resource::delete::<Client>(gateway, id).await
}

/// The client record of the signed-in user.
pub async fn my_profile(gateway: &Gateway) -> Result<Client, ApiError> {
    gateway.get("/clientes/perfil").await
}

pub async fn update_my_profile(gateway: &Gateway, form: &ClientForm) -> Result<(), ApiError> {
    gateway.put_unit("/clientes/perfil", form).await
}
