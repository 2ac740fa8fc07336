//! Invoices: list, line-item editor, payment and PDF download.

use api::models::{Client, Invoice, InvoiceItem, ItemKind, Product, Service};
use api::{Dialog, Notice};
use dioxus::prelude::*;

use super::format;
use crate::auth::use_session_state;
use crate::components::{
    Button, ButtonVariant, ConfirmDialog, EmptyState, FormDialog, NoticeBar, PageHeader, SelectField,
    TextField,
};
use crate::crud::{use_crud, use_lookup, use_lookup_when, Crud};
use crate::icons::{FaFilePdf, FaMoneyBill, FaPen, FaPlus, FaTrashCan};
use crate::{platform, Icon};

#[component]
pub fn InvoicesView() -> Element {
    let is_admin = use_session_state().is_admin();
    let crud = use_crud::<Invoice>();
    let clients = use_lookup_when::<Client>(is_admin);
    let services = use_lookup::<Service>();
    let products = use_lookup::<Product>();
    let mut pending_delete = use_signal(|| Option::<Invoice>::None);

    let state = crud.state();
    let state = state.read();
    let client_name = move |invoice: &Invoice| -> String {
        if let Some(client) = invoice.client.as_ref().filter(|c| !c.name.is_empty()) {
            return client.name.clone();
        }
        invoice
            .client_id()
            .and_then(|id| clients.read().iter().find(|c| c.id == id).map(|c| c.name.clone()))
            .unwrap_or_else(|| "-".to_string())
    };

    let download = move |id: String| {
        let gateway = crud.gateway();
        spawn(async move {
            let result = api::invoices::download_pdf(&gateway, &id).await;
            match result {
                Ok(bytes) => {
                    let name = api::invoices::pdf_file_name(&id);
                    if let Err(e) = platform::save_download(&bytes, &name, "application/pdf") {
                        tracing::warn!("Could not save {}: {}", name, e);
                        crud.notify(Notice::error("Could not save the PDF"));
                    }
                }
                Err(e) => crud.notify(Notice::error(e.user_message("Could not download the PDF"))),
            }
        });
    };

    rsx! {
        PageHeader {
            title: "Invoices",
            if is_admin {
                Button {
                    onclick: move |_| {
                        let mut form = api::models::InvoiceForm {
                            date: Some(platform::today()),
                            ..Default::default()
                        };
                        form.add_item();
                        crud.open_create_with(form);
                    },
                    Icon { icon: FaPlus, width: 12, height: 12 }
                    " New invoice"
                }
            }
        }
        NoticeBar { notice: state.notice.clone(), on_dismiss: move |_| crud.dismiss() }

        if state.items.is_empty() && !state.loading {
            EmptyState { message: "No invoices yet" }
        } else {
            table {
                class: "table",
                thead {
                    tr {
                        th { "Number" }
                        th { "Client" }
                        th { "Date" }
                        th { "Total" }
                        th { "Status" }
                        th {}
                    }
                }
                tbody {
                    for invoice in state.items.iter().cloned() {
                        tr {
                            key: "{invoice.id}",
                            td { "#{invoice.id}" }
                            td { "{client_name(&invoice)}" }
                            td { "{format::date(invoice.date)}" }
                            td { "{format::money(invoice.total())}" }
                            td {
                                if invoice.is_paid() {
                                    span { class: "badge badge--completada", "Paid" }
                                } else {
                                    span { class: "badge badge--pendiente", "Pending" }
                                }
                            }
                            td {
                                class: "table__actions",
                                if !invoice.is_paid() {
                                    Button {
                                        variant: ButtonVariant::Ghost,
                                        title: "Mark as paid",
                                        onclick: {
                                            let id = invoice.id.clone();
                                            move |_| {
                                                let id = id.clone();
                                                crud.action(
                                                    move |gw| async move { api::invoices::pay(&gw, &id).await },
                                                    "Invoice paid",
                                                    "Could not register the payment",
                                                )
                                            }
                                        },
                                        Icon { icon: FaMoneyBill, width: 12, height: 12 }
                                    }
                                }
                                Button {
                                    variant: ButtonVariant::Ghost,
                                    title: "Download PDF",
                                    onclick: {
                                        let id = invoice.id.clone();
                                        move |_| download(id.clone())
                                    },
                                    Icon { icon: FaFilePdf, width: 12, height: 12 }
                                }
                                if is_admin {
                                    Button {
                                        variant: ButtonVariant::Ghost,
                                        title: "Edit",
                                        onclick: {
                                            let invoice = invoice.clone();
                                            move |_| crud.open_edit(&invoice)
                                        },
                                        Icon { icon: FaPen, width: 12, height: 12 }
                                    }
                                    Button {
                                        variant: ButtonVariant::Ghost,
                                        title: "Delete",
                                        onclick: {
                                            let invoice = invoice.clone();
                                            move |_| pending_delete.set(Some(invoice.clone()))
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

        if state.dialog.is_open() {
            InvoiceDialog {
                crud,
                clients: clients(),
                services: services(),
                products: products(),
            }
        }

        if let Some(invoice) = pending_delete() {
            ConfirmDialog {
                message: format!("Delete invoice #{}?", invoice.id),
                on_cancel: move |_| pending_delete.set(None),
                on_confirm: move |_| {
                    crud.remove(invoice.id.clone());
                    pending_delete.set(None);
                },
            }
        }
    }
}

#[component]
fn InvoiceDialog(
    crud: Crud<Invoice>,
    clients: Vec<Client>,
    services: Vec<Service>,
    products: Vec<Product>,
) -> Element {
    let mut server_total = use_signal(|| Option::<f64>::None);
    let state = crud.state();
    let state = state.read();
    let Some(form) = state.dialog.form().cloned() else {
        return rsx! {};
    };
    let editing = matches!(state.dialog, Dialog::Edit { .. });
    let client_options: Vec<(String, String)> = clients
        .iter()
        .map(|c| (c.id.clone(), c.name.clone()))
        .collect();
    let kinds: Vec<(String, String)> = [ItemKind::Servicio, ItemKind::Producto]
        .iter()
        .map(|k| (k.as_str().to_string(), k.label().to_string()))
        .collect();
    let service_options: Vec<(String, String)> = services
        .iter()
        .map(|s| (s.id.clone(), format!("{} ({})", s.name, format::money(s.price))))
        .collect();
    let product_options: Vec<(String, String)> = products
        .iter()
        .map(|p| (p.id.clone(), format!("{} ({})", p.name, format::money(p.price))))
        .collect();
    let price_of = move |kind: ItemKind, id: &str| -> f64 {
        match kind {
            ItemKind::Servicio => services.iter().find(|s| s.id == id).map(|s| s.price),
            ItemKind::Producto => products.iter().find(|p| p.id == id).map(|p| p.price),
        }
        .unwrap_or(0.0)
    };
    let total = form.total();

    let recalculate = {
        let items: Vec<InvoiceItem> = form.items.clone();
        move |_: MouseEvent| {
            let items = items.clone();
            let gateway = crud.gateway();
            spawn(async move {
                match api::invoices::calculate_total(&gateway, &items).await {
                    Ok(total) => server_total.set(Some(total)),
                    Err(e) => crud.notify(Notice::error(e.user_message("Could not calculate the total"))),
                }
            });
        }
    };

    rsx! {
        FormDialog {
            title: if editing { "Edit invoice".to_string() } else { "New invoice".to_string() },
            on_close: move |_| crud.close(),
            on_save: move |_| crud.submit(),
            SelectField {
                label: "Client",
                value: form.client_id.clone(),
                options: client_options,
                placeholder: "Choose a client",
                onchange: move |v: String| crud.edit_form(|f| f.client_id = v),
            }
            TextField {
                label: "Date",
                kind: "date",
                value: format::date_input(form.date),
                oninput: move |v: String| crud.edit_form(|f| f.date = format::parse_date(&v)),
            }

            table {
                class: "table table--compact",
                thead {
                    tr {
                        th { "Type" }
                        th { "Item" }
                        th { "Qty" }
                        th { "Unit price" }
                        th { "Subtotal" }
                        th {}
                    }
                }
                tbody {
                    for (index, item) in form.items.iter().cloned().enumerate() {
                        tr {
                            key: "{index}",
                            td {
                                SelectField {
                                    label: "",
                                    value: item.kind.as_str().to_string(),
                                    options: kinds.clone(),
                                    onchange: move |v: String| {
                                        server_total.set(None);
                                        let kind = if v == ItemKind::Producto.as_str() {
                                            ItemKind::Producto
                                        } else {
                                            ItemKind::Servicio
                                        };
                                        crud.edit_form(|f| {
                                            if let Some(item) = f.items.get_mut(index) {
                                                item.set_kind(kind);
                                            }
                                        });
                                    },
                                }
                            }
                            td {
                                SelectField {
                                    label: "",
                                    value: item.item_id.clone(),
                                    options: match item.kind {
                                        ItemKind::Servicio => service_options.clone(),
                                        ItemKind::Producto => product_options.clone(),
                                    },
                                    placeholder: "Choose...",
                                    onchange: {
                                        let price_of = price_of.clone();
                                        let kind = item.kind;
                                        move |v: String| {
                                            server_total.set(None);
                                            let price = price_of(kind, &v);
                                            crud.edit_form(|f| {
                                                if let Some(item) = f.items.get_mut(index) {
                                                    item.select(v, price);
                                                }
                                            });
                                        }
                                    },
                                }
                            }
                            td {
                                TextField {
                                    label: "",
                                    kind: "number",
                                    value: item.quantity.to_string(),
                                    oninput: move |v: String| {
                                        server_total.set(None);
                                        let quantity = format::parse_u32(&v);
                                        crud.edit_form(|f| {
                                            if let Some(item) = f.items.get_mut(index) {
                                                item.set_quantity(quantity);
                                            }
                                        });
                                    },
                                }
                            }
                            td {
                                TextField {
                                    label: "",
                                    kind: "number",
                                    value: item.unit_price.to_string(),
                                    oninput: move |v: String| {
                                        server_total.set(None);
                                        let price = format::parse_price(&v);
                                        crud.edit_form(|f| {
                                            if let Some(item) = f.items.get_mut(index) {
                                                item.set_unit_price(price);
                                            }
                                        });
                                    },
                                }
                            }
                            td { "{format::money(item.subtotal)}" }
                            td {
                                Button {
                                    variant: ButtonVariant::Ghost,
                                    title: "Remove line",
                                    onclick: move |_| {
                                        server_total.set(None);
                                        crud.edit_form(|f| f.remove_item(index));
                                    },
                                    Icon { icon: FaTrashCan, width: 12, height: 12 }
                                }
                            }
                        }
                    }
                }
            }

            div {
                class: "invoice-footer",
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| {
                        server_total.set(None);
                        crud.edit_form(|f| f.add_item());
                    },
                    Icon { icon: FaPlus, width: 12, height: 12 }
                    " Add line"
                }
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: recalculate,
                    "Check total"
                }
                span { class: "invoice-footer__total", "Total: {format::money(total)}" }
                if let Some(checked) = server_total() {
                    span { class: "invoice-footer__checked", "Server total: {format::money(checked)}" }
                }
            }
        }
    }
}
