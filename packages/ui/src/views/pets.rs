use api::models::{Client, Pet, PET_KINDS};
use api::Dialog;
use dioxus::prelude::*;

use super::format;
use crate::auth::use_session_state;
use crate::components::{
    Button, ButtonVariant, ConfirmDialog, EmptyState, FormDialog, NoticeBar, PageHeader, SelectField,
    TextField,
};
use crate::crud::{use_crud, use_lookup_when, Crud};
use crate::icons::{FaPen, FaPlus, FaTrashCan};
use crate::Icon;

/// Pet list with create/edit/delete. Administrators also pick the owner.
#[component]
pub fn PetsView() -> Element {
    let is_admin = use_session_state().is_admin();
    let crud = use_crud::<Pet>();
    let clients = use_lookup_when::<Client>(is_admin);
    let mut pending_delete = use_signal(|| Option::<Pet>::None);

    let state = crud.state();
    let state = state.read();

    rsx! {
        PageHeader {
            title: "Pets",
            Button {
                onclick: move |_| crud.open_create(),
                Icon { icon: FaPlus, width: 12, height: 12 }
                " New pet"
            }
        }
        NoticeBar { notice: state.notice.clone(), on_dismiss: move |_| crud.dismiss() }

        if state.items.is_empty() && !state.loading {
            EmptyState { message: "No pets registered yet" }
        } else {
            table {
                class: "table",
                thead {
                    tr {
                        th { "Name" }
                        th { "Type" }
                        th { "Breed" }
                        th { "Age" }
                        if is_admin {
                            th { "Owner" }
                        }
                        th {}
                    }
                }
                tbody {
                    for pet in state.items.iter().cloned() {
                        tr {
                            key: "{pet.id}",
                            td { "{pet.name}" }
                            td { "{pet.kind}" }
                            td { "{pet.breed}" }
                            td { "{pet.age}" }
                            if is_admin {
                                td { "{pet.owner_name()}" }
                            }
                            td {
                                class: "table__actions",
                                Button {
                                    variant: ButtonVariant::Ghost,
                                    title: "Edit",
                                    onclick: {
                                        let pet = pet.clone();
                                        move |_| crud.open_edit(&pet)
                                    },
                                    Icon { icon: FaPen, width: 12, height: 12 }
                                }
                                Button {
                                    variant: ButtonVariant::Ghost,
                                    title: "Delete",
                                    onclick: {
                                        let pet = pet.clone();
                                        move |_| pending_delete.set(Some(pet.clone()))
                                    },
                                    Icon { icon: FaTrashCan, width: 12, height: 12 }
                                }
                            }
                        }
                    }
                }
            }
        }

        if state.dialog.is_open() {
            PetDialog { crud, clients: if is_admin { clients() } else { Vec::new() } }
        }

        if let Some(pet) = pending_delete() {
            ConfirmDialog {
                message: format!("Delete {}? This cannot be undone.", pet.name),
                on_cancel: move |_| pending_delete.set(None),
                on_confirm: move |_| {
                    crud.remove(pet.id.clone());
                    pending_delete.set(None);
                },
            }
        }
    }
}

#[component]
fn PetDialog(crud: Crud<Pet>, clients: Vec<Client>) -> Element {
    let state = crud.state();
    let state = state.read();
    let Some(form) = state.dialog.form().cloned() else {
        return rsx! {};
    };
    let title = match &state.dialog {
        Dialog::Edit { .. } => "Edit pet",
        _ => "New pet",
    };
    let kinds: Vec<(String, String)> = PET_KINDS
        .iter()
        .map(|k| (k.to_string(), k.to_string()))
        .collect();
    let owners: Vec<(String, String)> = clients
        .iter()
        .map(|c| (c.id.clone(), c.name.clone()))
        .collect();
    let owner_id = form.owner.as_ref().map(|o| o.id.clone()).unwrap_or_default();

    rsx! {
        FormDialog {
            title: title.to_string(),
            on_close: move |_| crud.close(),
            on_save: move |_| crud.submit(),
            busy: state.loading,
            TextField {
                label: "Name",
                value: form.name.clone(),
                required: true,
                oninput: move |v: String| crud.edit_form(|f| f.name = v),
            }
            SelectField {
                label: "Type",
                value: form.kind.clone(),
                options: kinds,
                placeholder: "Choose a type",
                onchange: move |v: String| crud.edit_form(|f| f.kind = v),
            }
            TextField {
                label: "Breed",
                value: form.breed.clone(),
                oninput: move |v: String| crud.edit_form(|f| f.breed = v),
            }
            TextField {
                label: "Age",
                kind: "number",
                value: form.age.to_string(),
                oninput: move |v: String| crud.edit_form(|f| f.age = format::parse_u32(&v)),
            }
            if !owners.is_empty() {
                SelectField {
                    label: "Owner",
                    value: owner_id,
                    options: owners,
                    placeholder: "Choose a client",
                    onchange: move |v: String| {
                        crud.edit_form(|f| {
                            f.owner = (!v.is_empty()).then(|| api::models::EntityRef::new(v));
                        })
                    },
                }
            }
        }
    }
}
