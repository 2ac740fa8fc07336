use api::models::Client;
use api::{Dialog, Role, User};
use dioxus::prelude::*;

use crate::components::{
    Button, ButtonVariant, ConfirmDialog, EmptyState, FormDialog, NoticeBar, PageHeader, SelectField,
    Tabs, TextField,
};
use crate::crud::{use_crud, Crud};
use crate::icons::{FaPen, FaPlus, FaTrashCan};
use crate::Icon;

/// Administration of user accounts and client records.
#[component]
pub fn UsersClientsView() -> Element {
    let users = use_crud::<User>();
    let clients = use_crud::<Client>();
    let mut tab = use_signal(|| 0usize);

    rsx! {
        PageHeader {
            title: "Users & Clients",
            Button {
                onclick: move |_| {
                    if tab() == 0 {
                        users.open_create();
                    } else {
                        clients.open_create();
                    }
                },
                Icon { icon: FaPlus, width: 12, height: 12 }
                if tab() == 0 { " New user" } else { " New client" }
            }
        }
        Tabs {
            labels: vec!["Users".to_string(), "Clients".to_string()],
            selected: tab(),
            onselect: move |index| tab.set(index),
        }
        if tab() == 0 {
            UsersTab { crud: users }
        } else {
            ClientsTab { crud: clients }
        }
    }
}

#[component]
fn UsersTab(crud: Crud<User>) -> Element {
    let mut pending_delete = use_signal(|| Option::<User>::None);
    let state = crud.state();
    let state = state.read();
    let roles: Vec<(String, String)> = [Role::Admin, Role::Cliente]
        .iter()
        .map(|r| (r.as_str().to_string(), r.as_str().to_string()))
        .collect();

    rsx! {
        NoticeBar { notice: state.notice.clone(), on_dismiss: move |_| crud.dismiss() }
        if state.items.is_empty() && !state.loading {
            EmptyState { message: "No users" }
        } else {
            table {
                class: "table",
                thead {
                    tr {
                        th { "Username" }
                        th { "Name" }
                        th { "Email" }
                        th { "Role" }
                        th {}
                    }
                }
                tbody {
                    for user in state.items.iter().cloned() {
                        tr {
                            key: "{user.id}",
                            td { "{user.username}" }
                            td { "{user.name.clone().unwrap_or_default()}" }
                            td { "{user.email}" }
                            td { "{user.role}" }
                            td {
                                class: "table__actions",
                                Button {
                                    variant: ButtonVariant::Ghost,
                                    title: "Edit",
                                    onclick: {
                                        let user = user.clone();
                                        move |_| crud.open_edit(&user)
                                    },
                                    Icon { icon: FaPen, width: 12, height: 12 }
                                }
                                Button {
                                    variant: ButtonVariant::Ghost,
                                    title: "Delete",
                                    onclick: {
                                        let user = user.clone();
                                        move |_| pending_delete.set(Some(user.clone()))
                                    },
                                    Icon { icon: FaTrashCan, width: 12, height: 12 }
                                }
                            }
                        }
                    }
                }
            }
        }

        if let Some(form) = state.dialog.form().cloned() {
            FormDialog {
                title: if matches!(state.dialog, Dialog::Edit { .. }) { "Edit user".to_string() } else { "New user".to_string() },
                on_close: move |_| crud.close(),
                on_save: move |_| crud.submit(),
                TextField {
                    label: "Username",
                    value: form.username.clone(),
                    required: true,
                    oninput: move |v: String| crud.edit_form(|f| f.username = v),
                }
                TextField {
                    label: "Name",
                    value: form.name.clone(),
                    oninput: move |v: String| crud.edit_form(|f| f.name = v),
                }
                TextField {
                    label: "Email",
                    kind: "email",
                    value: form.email.clone(),
                    required: true,
                    oninput: move |v: String| crud.edit_form(|f| f.email = v),
                }
                TextField {
                    label: "Password",
                    kind: "password",
                    value: form.password.clone(),
                    required: !matches!(state.dialog, Dialog::Edit { .. }),
                    placeholder: if matches!(state.dialog, Dialog::Edit { .. }) { "Leave empty to keep it".to_string() } else { String::new() },
                    oninput: move |v: String| crud.edit_form(|f| f.password = v),
                }
                SelectField {
                    label: "Role",
                    value: form.role.as_str().to_string(),
                    options: roles,
                    onchange: move |v: String| {
                        if let Ok(role) = v.parse::<Role>() {
                            crud.edit_form(|f| f.role = role);
                        }
                    },
                }
            }
        }

        if let Some(user) = pending_delete() {
            ConfirmDialog {
                message: format!("Delete the user {}?", user.username),
                on_cancel: move |_| pending_delete.set(None),
                on_confirm: move |_| {
                    crud.remove(user.id.clone());
                    pending_delete.set(None);
                },
            }
        }
    }
}

#[component]
fn ClientsTab(crud: Crud<Client>) -> Element {
    let mut pending_delete = use_signal(|| Option::<Client>::None);
    let state = crud.state();
    let state = state.read();

    rsx! {
        NoticeBar { notice: state.notice.clone(), on_dismiss: move |_| crud.dismiss() }
        if state.items.is_empty() && !state.loading {
            EmptyState { message: "No clients" }
        } else {
            table {
                class: "table",
                thead {
                    tr {
                        th { "Name" }
                        th { "Phone" }
                        th { "Email" }
                        th { "Address" }
                        th {}
                    }
                }
                tbody {
                    for client in state.items.iter().cloned() {
                        tr {
                            key: "{client.id}",
                            td { "{client.name}" }
                            td { "{client.phone}" }
                            td { "{client.email}" }
                            td { "{client.address}" }
                            td {
                                class: "table__actions",
                                Button {
                                    variant: ButtonVariant::Ghost,
                                    title: "Edit",
                                    onclick: {
                                        let client = client.clone();
                                        move |_| crud.open_edit(&client)
                                    },
                                    Icon { icon: FaPen, width: 12, height: 12 }
                                }
                                Button {
                                    variant: ButtonVariant::Ghost,
                                    title: "Delete",
                                    onclick: {
                                        let client = client.clone();
                                        move |_| pending_delete.set(Some(client.clone()))
                                    },
                                    Icon { icon: FaTrashCan, width: 12, height: 12 }
                                }
                            }
                        }
                    }
                }
            }
        }

        if let Some(form) = state.dialog.form().cloned() {
            FormDialog {
                title: if matches!(state.dialog, Dialog::Edit { .. }) { "Edit client".to_string() } else { "New client".to_string() },
                on_close: move |_| crud.close(),
                on_save: move |_| crud.submit(),
                TextField {
                    label: "Name",
                    value: form.name.clone(),
                    required: true,
                    oninput: move |v: String| crud.edit_form(|f| f.name = v),
                }
                TextField {
                    label: "Phone",
                    kind: "tel",
                    value: form.phone.clone(),
                    oninput: move |v: String| crud.edit_form(|f| f.phone = v),
                }
                TextField {
                    label: "Email",
                    kind: "email",
                    value: form.email.clone(),
                    oninput: move |v: String| crud.edit_form(|f| f.email = v),
                }
                TextField {
                    label: "Address",
                    value: form.address.clone(),
                    oninput: move |v: String| crud.edit_form(|f| f.address = v),
                }
            }
        }

        if let Some(client) = pending_delete() {
            ConfirmDialog {
                message: format!("Delete the client {}?", client.name),
                on_cancel: move |_| pending_delete.set(None),
                on_confirm: move |_| {
                    crud.remove(client.id.clone());
                    pending_delete.set(None);
                },
            }
        }
    }
}
