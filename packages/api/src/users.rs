//! Account administration. Listing and edits go to `/usuarios`; new
//! accounts are created through `/auth/register`.

use store::User;

use crate::error::ApiError;
use crate::gateway::Gateway;
use crate::models::UserForm;
use crate::resource;

pub async fn list(gateway: &Gateway) -> Result<Vec<User>, ApiError> {
    resource::list::<User>(gateway).await
}

pub async fn get(gateway: &Gateway, id: &str) -> Result<User, ApiError> {
    resource::get::<User>(gateway, id).await
}

pub async fn create(gateway: &Gateway, form: &UserForm) -> Result<(), ApiError> {
    resource::create::<User>(gateway, form).await
}

pub async fn update(gateway: &Gateway, id: &str, form: &UserForm) -> Result<(), ApiError> {
    resource::update::<User>(gateway, id, form).await
}

pub async fn delete(gateway: &Gateway, id: &str) -> Result<(), ApiError> {
    resource::delete::<User>(gateway, id).await
}

#[cfg(test)]
mod tests {
    use reqwest::Method;
    use store::Role;

    use super::*;
    use crate::testing::RecordingTransport;

    #[tokio::test]
    async fn new_accounts_go_through_registration() {
        let transport = RecordingTransport::new();
        let gw = transport.gateway();
        let form = UserForm {
            username: "marta".into(),
            email: "marta@petspa.es".into(),
            password: "secreto".into(),
            role: Role::Admin,
            name: String::new(),
        };

        create(&gw, &form).await.unwrap();
        update(&gw, "3", &form).await.unwrap();

        let requests = transport.requests();
        assert_eq!(requests[0].method, Method::POST);
        assert!(requests[0].url.ends_with("/auth/register"));
        assert_eq!(requests[1].method, Method::PUT);
        assert!(requests[1].url.ends_with("/usuarios/3"));
    }
}
