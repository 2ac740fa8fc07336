//! Generic REST resource plumbing.
//!
//! Each managed entity implements [`Resource`] once; the free functions here
//! and [`crate::crud::CrudState`] then give it list/create/update/delete
//! against `PATH` and `PATH/{id}`.

use std::fmt::Debug;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::gateway::Gateway;

pub trait Resource: Clone + Debug + PartialEq + DeserializeOwned + 'static {
    /// Editable fields, as sent on create and update.
    type Form: Clone + Debug + Default + PartialEq + Serialize + 'static;

    /// Collection path relative to the API base, e.g. `/mascotas`.
    const PATH: &'static str;
    /// Singular name for messages, e.g. `Pet`.
    const LABEL: &'static str;
    /// Plural, lower case, e.g. `pets`.
    const PLURAL: &'static str;

    fn id(&self) -> &str;

    fn to_form(&self) -> Self::Form;

    /// Client-side checks before anything is sent.
    fn validate(_form: &Self::Form) -> Result<(), String> {
        Ok(())
    }

    /// Checks for a new record. Defaults to [`validate`](Self::validate).
    fn validate_create(form: &Self::Form) -> Result<(), String> {
        Self::validate(form)
    }

    fn create_path() -> String {
        Self::PATH.to_string()
    }

    fn item_path(id: &str) -> String {
        format!("{}/{}", Self::PATH, id)
    }
}

pub async fn list<R: Resource>(gateway: &Gateway) -> Result<Vec<R>, ApiError> {
    gateway.get_list(R::PATH).await
}

/// [`list`] with query parameters; an empty query is a plain list.
pub async fn list_where<R: Resource>(
    gateway: &Gateway,
    query: &[(String, String)],
) -> Result<Vec<R>, ApiError> {
    gateway.get_list_query(R::PATH, query.to_vec()).await
}

pub async fn get<R: Resource>(gateway: &Gateway, id: &str) -> Result<R, ApiError> {
    gateway.get(&R::item_path(id)).await
}

pub async fn create<R: Resource>(gateway: &Gateway, form: &R::Form) -> Result<(), ApiError> {
    gateway.post_unit(&R::create_path(), form).await
}

pub async fn update<R: Resource>(gateway: &Gateway, id: &str, form: &R::Form) -> Result<(), ApiError> {
    gateway.put_unit(&R::item_path(id), form).await
}

pub async fn delete<R: Resource>(gateway: &Gateway, id: &str) -> Result<(), ApiError> {
    gateway.delete(&R::item_path(id)).await
}

/// Required text field check shared by the `validate` impls.
pub fn require(value: &str, field: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{field} is required"))
    } else {
        Ok(())
    }
}
