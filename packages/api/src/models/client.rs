use serde::{Deserialize, Serialize};

use super::EntityRef;
use crate::resource::{require, Resource};

/// A customer record, optionally linked one-to-one to a login user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Client {
    #[serde(deserialize_with = "store::models::id::deserialize")]
    pub id: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "telefono", default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(rename = "direccion", default)]
    pub address: String,
    #[serde(rename = "usuario", default, skip_serializing_if = "Option::is_none")]
    pub user: Option<EntityRef>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientForm {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "telefono")]
    pub phone: String,
    pub email: String,
    #[serde(rename = "direccion")]
    pub address: String,
    #[serde(rename = "usuario", default, skip_serializing_if = "Option::is_none")]
    pub user: Option<EntityRef>,
}

impl Resource for Client {
    type Form = ClientForm;

    const PATH: &'static str = "/clientes";
    const LABEL: &'static str = "Client";
    const PLURAL: &'static str = "clients";

    fn id(&self) -> &str {
        &self.id
    }

    fn to_form(&self) -> ClientForm {
        ClientForm {
            name: self.name.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
            address: self.address.clone(),
            user: self.user.clone(),
        }
    }

    fn validate(form: &ClientForm) -> Result<(), String> {
        require(&form.name, "Name")?;
        if !form.email.trim().is_empty() && !form.email.contains('@') {
            return Err("Email is not valid".to_string());
        }
        Ok(())
    }
}
