use api::models::{Product, Service};
use api::{Capability, Dialog, Grants};
use dioxus::prelude::*;

use super::format;
use crate::auth::use_session_state;
use crate::components::{
    Button, ButtonVariant, ConfirmDialog, EmptyState, FormDialog, NoticeBar, PageHeader, Tabs,
    TextField,
};
use crate::crud::{use_crud, Crud};
use crate::icons::{FaPen, FaPlus, FaTrashCan};
use crate::Icon;

/// Services and products. Everyone browses; editing needs
/// [`Capability::ManageCatalog`].
#[component]
pub fn CatalogView() -> Element {
    let can_edit = use_session_state().grants(Capability::ManageCatalog);
    let services = use_crud::<Service>();
    let products = use_crud::<Product>();
    let mut tab = use_signal(|| 0usize);

    rsx! {
        PageHeader {
            title: "Services & Products",
            if can_edit {
                Button {
                    onclick: move |_| {
                        if tab() == 0 {
                            services.open_create();
                        } else {
                            products.open_create();
                        }
                    },
                    Icon { icon: FaPlus, width: 12, height: 12 }
                    if tab() == 0 { " New service" } else { " New product" }
                }
            }
        }
        Tabs {
            labels: vec!["Services".to_string(), "Products".to_string()],
            selected: tab(),
            onselect: move |index| tab.set(index),
        }
        if tab() == 0 {
            ServicesTab { crud: services, can_edit }
        } else {
            ProductsTab { crud: products, can_edit }
        }
    }
}

#[component]
fn ServicesTab(crud: Crud<Service>, can_edit: bool) -> Element {
    let mut pending_delete = use_signal(|| Option::<Service>::None);
    let state = crud.state();
    let state = state.read();

    rsx! {
        NoticeBar { notice: state.notice.clone(), on_dismiss: move |_| crud.dismiss() }
        if state.items.is_empty() && !state.loading {
            EmptyState { message: "No services yet" }
        } else {
            table {
                class: "table",
                thead {
                    tr {
                        th { "Name" }
                        th { "Duration" }
                        th { "Price" }
                        if can_edit {
                            th {}
                        }
                    }
                }
                tbody {
                    for service in state.items.iter().cloned() {
                        tr {
                            key: "{service.id}",
                            td { "{service.name}" }
                            td { "{service.duration} min" }
                            td { "{format::money(service.price)}" }
                            if can_edit {
                                td {
                                    class: "table__actions",
                                    Button {
                                        variant: ButtonVariant::Ghost,
                                        title: "Edit",
                                        onclick: {
                                            let service = service.clone();
                                            move |_| crud.open_edit(&service)
                                        },
                                        Icon { icon: FaPen, width: 12, height: 12 }
                                    }
                                    Button {
                                        variant: ButtonVariant::Ghost,
                                        title: "Delete",
                                        onclick: {
                                            let service = service.clone();
                                            move |_| pending_delete.set(Some(service.clone()))
                                        },
                                        Icon { icon: FaTrashCan, width: 12, height: 12 }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }

        if let Some(form) = state.dialog.form().cloned() {
            FormDialog {
                title: if matches!(state.dialog, Dialog::Edit { .. }) { "Edit service".to_string() } else { "New service".to_string() },
                on_close: move |_| crud.close(),
                on_save: move |_| crud.submit(),
                TextField {
                    label: "Name",
                    value: form.name.clone(),
                    required: true,
                    oninput: move |v: String| crud.edit_form(|f| f.name = v),
                }
                TextField {
                    label: "Duration (minutes)",
                    kind: "number",
                    value: form.duration.to_string(),
                    oninput: move |v: String| crud.edit_form(|f| f.duration = format::parse_u32(&v)),
                }
                TextField {
                    label: "Price",
                    kind: "number",
                    value: form.price.to_string(),
                    oninput: move |v: String| crud.edit_form(|f| f.price = format::parse_price(&v)),
                }
            }
        }

        if let Some(service) = pending_delete() {
            ConfirmDialog {
                message: format!("Delete the service {}?", service.name),
                on_cancel: move |_| pending_delete.set(None),
                on_confirm: move |_| {
                    crud.remove(service.id.clone());
                    pending_delete.set(None);
                },
            }
        }
    }
}

#[component]
fn ProductsTab(crud: Crud<Product>, can_edit: bool) -> Element {
    let mut pending_delete = use_signal(|| Option::<Product>::None);
    let state = crud.state();
    let state = state.read();

    rsx! {
        NoticeBar { notice: state.notice.clone(), on_dismiss: move |_| crud.dismiss() }
        if state.items.is_empty() && !state.loading {
            EmptyState { message: "No products yet" }
        } else {
            table {
                class: "table",
                thead {
                    tr {
                        th { "Name" }
                        th { "Type" }
                        th { "Price" }
                        th { "Stock" }
                        if can_edit {
                            th {}
                        }
                    }
                }
                tbody {
                    for product in state.items.iter().cloned() {
                        tr {
                            key: "{product.id}",
                            class: if product.in_stock() { "" } else { "table__row--muted" },
                            td { "{product.name}" }
                            td { "{product.kind}" }
                            td { "{format::money(product.price)}" }
                            td { "{product.stock}" }
                            if can_edit {
                                td {
                                    class: "table__actions",
                                    Button {
                                        variant: ButtonVariant::Ghost,
                                        title: "Edit",
                                        onclick: {
                                            let product = product.clone();
                                            move |_| crud.open_edit(&product)
                                        },
                                        Icon { icon: FaPen, width: 12, height: 12 }
                                    }
                                    Button {
                                        variant: ButtonVariant::Ghost,
                                        title: "Delete",
                                        onclick: {
                                            let product = product.clone();
                                            move |_| pending_delete.set(Some(product.clone()))
                                        },
                                        Icon { icon: FaTrashCan, width: 12, height: 12 }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }

        if let Some(form) = state.dialog.form().cloned() {
            FormDialog {
                title: if matches!(state.dialog, Dialog::Edit { .. }) { "Edit product".to_string() } else { "New product".to_string() },
                on_close: move |_| crud.close(),
                on_save: move |_| crud.submit(),
                TextField {
                    label: "Name",
                    value: form.name.clone(),
                    required: true,
                    oninput: move |v: String| crud.edit_form(|f| f.name = v),
                }
                TextField {
                    label: "Type",
                    value: form.kind.clone(),
                    oninput: move |v: String| crud.edit_form(|f| f.kind = v),
                }
                TextField {
                    label: "Price",
                    kind: "number",
                    value: form.price.to_string(),
                    oninput: move |v: String| crud.edit_form(|f| f.price = format::parse_price(&v)),
                }
                TextField {
                    label: "Stock",
                    kind: "number",
                    value: form.stock.to_string(),
                    oninput: move |v: String| crud.edit_form(|f| f.stock = format::parse_u32(&v)),
                }
            }
        }

        if let Some(product) = pending_delete() {
            ConfirmDialog {
                message: format!("Delete the product {}?", product.name),
                on_cancel: move |_| pending_delete.set(None),
                on_confirm: move |_| {
                    crud.remove(product.id.clone());
                    pending_delete.set(None);
                },
            }
        }
    }
}
