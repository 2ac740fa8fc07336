//! Pet endpoints under `/mascotas`.

use crate::error::ApiError;
use crate::gateway::Gateway;
use crate::models::{Pet, PetForm};
use crate::resource;

pub async fn list(gateway: &Gateway) -> Result<Vec<Pet>, ApiError> {
    resource::list::<Pet>(gateway).await
}

pub async fn get(gateway: &Gateway, id: &str) -> Result<Pet, ApiError> {
    resource::get::<Pet>(gateway, id).await
}

pub async fn create(gateway: &Gateway, form: &PetForm) -> Result<(), ApiError> {
    resource::create::<Pet>(gateway, form).await
}

pub async fn update(gateway: &Gateway, id: &str, form: &PetForm) -> Result<(), ApiError> {
    resource::update::<Pet>(gateway, id, form).await
}

pub async fn delete(gateway: &Gateway, id: &str) -> Result<(), ApiError> {
    resource::delete::<Pet>(gateway, id).await
}

pub async fn by_client(gateway: &Gateway, client_id: &str) -> Result<Vec<Pet>, ApiError> {
    gateway
        .get_list(&format!("/mascotas/cliente/{client_id}"))
        .await
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::crud::{self, CrudState, Dialog, NoticeLevel};
    use crate::testing::{admin, FakeBackend};

    fn rex() -> PetForm {
        PetForm {
            name: "Rex".into(),
            kind: "Perro".into(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn created_pet_shows_up_after_refetch() {
        let backend = FakeBackend::new();
        backend.seed("mascotas", vec![json!({"nombre": "Luna", "tipo": "Gato"})]);
        let gw = backend.gateway();
        let mut view = CrudState::<Pet>::new();
        crud::refresh(&mut view, &gw).await;
        assert_eq!(view.items.len(), 1);

        view.open_create();
        *view.form_mut().unwrap() = rex();
        assert!(crud::submit(&mut view, &gw).await);

        let names: Vec<_> = view.items.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Luna", "Rex"]);
        assert_eq!(view.dialog, Dialog::Closed);
        assert_eq!(view.notice.as_ref().unwrap().level, NoticeLevel::Success);
    }

    #[tokio::test]
    async fn edit_round_trips_through_the_dialog() {
        let backend = FakeBackend::new();
        backend.seed("mascotas", vec![json!({"nombre": "Luna", "tipo": "Gato", "edad": 2})]);
        let gw = backend.gateway();
        let mut view = CrudState::<Pet>::new();
        crud::refresh(&mut view, &gw).await;

        let luna = view.items[0].clone();
        view.open_edit(&luna);
        view.form_mut().unwrap().age = 3;
        assert!(crud::submit(&mut view, &gw).await);

        assert_eq!(view.items[0].age, 3);
        assert_eq!(view.items[0].id, luna.id);
    }

    #[tokio::test]
    async fn failed_refetch_keeps_previous_items() {
        let backend = FakeBackend::new();
        backend.seed("mascotas", vec![json!({"nombre": "Luna", "tipo": "Gato"})]);
        let gw = backend.gateway();
        let mut view = CrudState::<Pet>::new();
        crud::refresh(&mut view, &gw).await;

        backend.fail_next(503);
        crud::refresh(&mut view, &gw).await;

        assert_eq!(view.items.len(), 1);
        let notice = view.notice.as_ref().unwrap();
        assert_eq!(notice.level, NoticeLevel::Error);
        assert_eq!(notice.message, "Could not load pets");
        assert!(!view.loading);
    }

    #[tokio::test]
    async fn failed_save_keeps_dialog_open() {
        let backend = FakeBackend::new();
        let gw = backend.gateway();
        let mut view = CrudState::<Pet>::new();

        view.open_create();
        *view.form_mut().unwrap() = rex();
        backend.fail_next(500);
        assert!(!crud::submit(&mut view, &gw).await);

        assert_eq!(view.dialog, Dialog::Create(rex()));
        assert!(backend.items("mascotas").is_empty());
    }

    #[tokio::test]
    async fn invalid_form_is_not_sent() {
        let backend = FakeBackend::new();
        let gw = backend.gateway();
        let mut view = CrudState::<Pet>::new();

        view.open_create();
        assert!(!crud::submit(&mut view, &gw).await);

        assert!(view.dialog.is_open());
        assert_eq!(view.notice.as_ref().unwrap().message, "Name is required");
        assert!(backend.items("mascotas").is_empty());
    }

    #[tokio::test]
    async fn delete_then_refetch() {
        let backend = FakeBackend::new();
        backend.seed(
            "mascotas",
            vec![json!({"nombre": "Luna", "tipo": "Gato"}), json!({"nombre": "Rex", "tipo": "Perro"})],
        );
        let gw = backend.gateway();
        let mut view = CrudState::<Pet>::new();
        crud::refresh(&mut view, &gw).await;

        let id = view.items[0].id.clone();
        assert!(crud::remove(&mut view, &gw, &id).await);

        assert_eq!(view.items.len(), 1);
        assert_eq!(view.items[0].name, "Rex");
    }

    #[tokio::test]
    async fn unauthorized_fetch_clears_session_storage() {
        let backend = FakeBackend::new();
        let gw = backend.gateway();
        gw.tokens().set("stale", &admin()).unwrap();
        let mut view = CrudState::<Pet>::new();

        backend.fail_next(401);
        crud::refresh(&mut view, &gw).await;

        assert!(gw.tokens().get().is_none());
        assert_eq!(view.notice.unwrap().level, NoticeLevel::Error);
    }
}
