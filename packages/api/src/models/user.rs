//! User accounts as managed by administrators.
//!
//! The account record itself is [`store::User`]; this module makes it a
//! [`Resource`]. Accounts are listed and edited under `/usuarios` but
//! created through registration.

use serde::{Deserialize, Serialize};
use store::{Role, User};

use crate::resource::{require, Resource};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserForm {
    pub username: String,
    pub email: String,
    /// Left empty on edit to keep the current password.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub password: String,
    #[serde(rename = "rol")]
    pub role: Role,
    #[serde(rename = "nombre", default, skip_serializing_if = "String::is_empty")]
    pub name: String,
}

impl Resource for User {
    type Form = UserForm;

    const PATH: &'static str = "/usuarios";
    const LABEL: &'static str = "User";
    const PLURAL: &'static str = "users";

    fn id(&self) -> &str {
        &self.id
    }

    fn to_form(&self) -> UserForm {
        UserForm {
            username: self.username.clone(),
            email: self.email.clone(),
            password: String::new(),
            role: self.role,
            name: self.name.clone().unwrap_or_default(),
        }
    }

    fn validate(form: &UserForm) -> Result<(), String> {
        require(&form.username, "Username")?;
        require(&form.email, "Email")?;
        if !form.email.contains('@') {
            return Err("Email is not valid".to_string());
        }
        Ok(())
    }

    fn validate_create(form: &UserForm) -> Result<(), String> {
        Self::validate(form)?;
        require(&form.password, "Password")
    }

    fn create_path() -> String {
        "/auth/register".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edit_form_drops_password() {
        let user = User {
            id: "3".into(),
            username: "marta".into(),
            email: "marta@petspa.es".into(),
            role: Role::Admin,
            name: None,
        };
        let wire = serde_json::to_value(user.to_form()).unwrap();
        assert!(wire.get("password").is_none());
        assert_eq!(wire["rol"], "ADMIN");
    }

    #[test]
    fn password_only_required_for_new_accounts() {
        let mut form = UserForm {
            username: "marta".into(),
            email: "marta@petspa.es".into(),
            ..Default::default()
        };
        assert!(User::validate(&form).is_ok());
        assert_eq!(User::validate_create(&form), Err("Password is required".to_string()));
        form.password = "s3creta".into();
        assert!(User::validate_create(&form).is_ok());
    }

    #[test]
    fn accounts_are_created_by_registration() {
        assert_eq!(User::create_path(), "/auth/register");
        assert_eq!(User::item_path("3"), "/usuarios/3");
    }
}
