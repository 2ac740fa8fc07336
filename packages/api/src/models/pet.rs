use serde::{Deserialize, Serialize};

use super::{default_if_null, EntityRef, NamedRef};
use crate::resource::{require, Resource};

/// Species offered in the pet form.
pub const PET_KINDS: [&str; 3] = ["Perro", "Gato", "Otro"];

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pet {
    #[serde(deserialize_with = "store::models::id::deserialize")]
    pub id: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "tipo", default)]
    pub kind: String,
    #[serde(rename = "raza", default)]
    pub breed: String,
    #[serde(rename = "edad", default, deserialize_with = "default_if_null")]
    pub age: u32,
    #[serde(rename = "cliente", default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<NamedRef>,
    #[serde(rename = "foto", default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

impl Pet {
    pub fn owner_name(&self) -> &str {
        self.owner.as_ref().map(|o| o.name.as_str()).unwrap_or("")
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PetForm {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "tipo")]
    pub kind: String,
    #[serde(rename = "raza")]
    pub breed: String,
    #[serde(rename = "edad")]
    pub age: u32,
    #[serde(rename = "cliente", default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<EntityRef>,
}

impl Resource for Pet {
    type Form = PetForm;

    const PATH: &'static str = "/mascotas";
    const LABEL: &'static str = "Pet";
    const PLURAL: &'static str = "pets";

    fn id(&self) -> &str {
        &self.id
    }

    fn to_form(&self) -> PetForm {
        PetForm {
            name: self.name.clone(),
            kind: self.kind.clone(),
            breed: self.breed.clone(),
            age: self.age,
            owner: self
                .owner
                .as_ref()
                .filter(|o| !o.id.is_empty())
                .map(|o| EntityRef::new(o.id.clone())),
        }
    }

    fn validate(form: &PetForm) -> Result<(), String> {
        require(&form.name, "Name")?;
        require(&form.kind, "Type")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pet_reads_owner_reference() {
        let json = r#"{"id":3,"nombre":"Rex","tipo":"Perro","raza":"Mestizo","edad":4,
                       "cliente":{"id":9,"nombre":"Lucía"}}"#;
        let pet: Pet = serde_json::from_str(json).unwrap();
        assert_eq!(pet.id, "3");
        assert_eq!(pet.owner_name(), "Lucía");
        assert_eq!(pet.to_form().owner, Some(EntityRef::new("9")));
    }

    #[test]
    fn null_age_reads_as_zero() {
        let json = r#"[{"id":1,"nombre":"Luna","tipo":"Gato","edad":null},{"id":2,"nombre":"Rex"}]"#;
        let pets: Vec<Pet> = serde_json::from_str(json).unwrap();
        assert_eq!(pets.len(), 2);
        assert_eq!(pets[0].age, 0);
        assert_eq!(pets[1].age, 0);
    }

    #[test]
    fn form_omits_missing_owner() {
        let form = PetForm {
            name: "Rex".into(),
            kind: "Perro".into(),
            ..Default::default()
        };
        let wire = serde_json::to_value(&form).unwrap();
        assert_eq!(wire["nombre"], "Rex");
        assert!(wire.get("cliente").is_none());
    }

    #[test]
    fn name_and_type_are_required() {
        assert!(Pet::validate(&PetForm::default()).is_err());
        let form = PetForm {
            name: "Rex".into(),
            kind: "Perro".into(),
            ..Default::default()
        };
        assert!(Pet::validate(&form).is_ok());
    }
}
