use api::models::{
    Appointment, AppointmentFilter, AppointmentStatus, AvailabilityQuery, EntityRef, Pet, Service,
    SortDirection,
};
use api::{Dialog, Notice};
use dioxus::prelude::*;

use super::format;
use crate::components::{
    Button, ButtonVariant, ConfirmDialog, EmptyState, FormDialog, NoticeBar, PageHeader, SelectField,
    TextAreaField, TextField,
};
use crate::crud::{use_crud, use_lookup, Crud};
use crate::icons::{FaBan, FaCheck, FaPen, FaPlus, FaTrashCan};
use crate::Icon;

/// Appointment list with filters, status actions and the booking dialog.
#[component]
pub fn AppointmentsView() -> Element {
    let crud = use_crud::<Appointment>();
    let pets = use_lookup::<Pet>();
    let services = use_lookup::<Service>();
    let mut pending_delete = use_signal(|| Option::<Appointment>::None);

    let state = crud.state();
    let state = state.read();

    rsx! {
        PageHeader {
            title: "Appointments",
            Button {
                onclick: move |_| crud.open_create(),
                Icon { icon: FaPlus, width: 12, height: 12 }
                " New appointment"
            }
        }
        NoticeBar { notice: state.notice.clone(), on_dismiss: move |_| crud.dismiss() }
        FilterBar { crud, pets: pets(), services: services() }

        if state.items.is_empty() && !state.loading {
            EmptyState { message: "No appointments found" }
        } else {
            table {
                class: "table",
                thead {
                    tr {
                        th { "Date" }
                        th { "Time" }
                        th { "Pet" }
                        th { "Service" }
                        th { "Status" }
                        th {}
                    }
                }
                tbody {
                    for appointment in state.items.iter().cloned() {
                        tr {
                            key: "{appointment.id}",
                            td { "{format::date(appointment.date)}" }
                            td { "{appointment.short_time()}" }
                            td { "{appointment.pet.name}" }
                            td { "{appointment.service.name}" }
                            td {
                                span {
                                    class: "badge badge--{appointment.status.as_str().to_lowercase()}",
                                    "{appointment.status.label()}"
                                }
                            }
                            td {
                                class: "table__actions",
                                if appointment.status.is_open() {
                                    Button {
                                        variant: ButtonVariant::Ghost,
                                        title: "Mark as completed",
                                        onclick: {
                                            let id = appointment.id.clone();
                                            move |_| {
                                                let id = id.clone();
                                                crud.action(
                                                    move |gw| async move { api::appointments::complete(&gw, &id).await },
                                                    "Appointment completed",
                                                    "Could not complete the appointment",
                                                )
                                            }
                                        },
                                        Icon { icon: FaCheck, width: 12, height: 12 }
                                    }
                                    Button {
                                        variant: ButtonVariant::Ghost,
                                        title: "Cancel appointment",
                                        onclick: {
                                            let id = appointment.id.clone();
                                            move |_| {
                                                let id = id.clone();
                                                crud.action(
                                                    move |gw| async move { api::appointments::cancel(&gw, &id).await },
                                                    "Appointment cancelled",
                                                    "Could not cancel the appointment",
                                                )
                                            }
                                        },
                                        Icon { icon: FaBan, width: 12, height: 12 }
                                    }
                                }
                                Button {
                                    variant: ButtonVariant::Ghost,
                                    title: "Edit",
                                    onclick: {
                                        let appointment = appointment.clone();
                                        move |_| crud.open_edit(&appointment)
                                    },
                                    Icon { icon: FaPen, width: 12, height: 12 }
                                }
                                Button {
                                    variant: ButtonVariant::Ghost,
                                    title: "Delete",
                                    onclick: {
                                        let appointment = appointment.clone();
                                        move |_| pending_delete.set(Some(appointment.clone()))
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
            AppointmentDialog { crud, pets: pets(), services: services() }
        }

        if let Some(appointment) = pending_delete() {
            ConfirmDialog {
                message: format!(
                    "Delete the appointment for {} on {}?",
                    appointment.pet.name,
                    format::date(appointment.date)
                ),
                on_cancel: move |_| pending_delete.set(None),
                on_confirm: move |_| {
                    crud.remove(appointment.id.clone());
                    pending_delete.set(None);
                },
            }
        }
    }
}

fn pet_options(pets: &[Pet]) -> Vec<(String, String)> {
    pets.iter().map(|p| (p.id.clone(), p.name.clone())).collect()
}

fn service_options(services: &[Service]) -> Vec<(String, String)> {
    services
        .iter()
        .map(|s| (s.id.clone(), format!("{} ({} min)", s.name, s.duration)))
        .collect()
}

#[component]
fn FilterBar(crud: Crud<Appointment>, pets: Vec<Pet>, services: Vec<Service>) -> Element {
    let mut filter = use_signal(AppointmentFilter::default);
    let current = filter();
    let statuses: Vec<(String, String)> = AppointmentStatus::ALL
        .iter()
        .map(|s| (s.as_str().to_string(), s.label().to_string()))
        .collect();
    let directions = vec![
        ("asc".to_string(), "Oldest first".to_string()),
        ("desc".to_string(), "Newest first".to_string()),
    ];

    rsx! {
        form {
            class: "filter-bar",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                crud.set_query(filter.read().to_query());
            },
            SelectField {
                label: "Status",
                value: current.status.map(|s| s.as_str().to_string()).unwrap_or_default(),
                options: statuses,
                placeholder: "All",
                onchange: move |v: String| filter.write().status = AppointmentStatus::from_wire(&v),
            }
            SelectField {
                label: "Pet",
                value: current.pet_id.clone().unwrap_or_default(),
                options: pet_options(&pets),
                placeholder: "All",
                onchange: move |v: String| filter.write().pet_id = (!v.is_empty()).then_some(v),
            }
            SelectField {
                label: "Service",
                value: current.service_id.clone().unwrap_or_default(),
                options: service_options(&services),
                placeholder: "All",
                onchange: move |v: String| filter.write().service_id = (!v.is_empty()).then_some(v),
            }
            TextField {
                label: "From",
                kind: "date",
                value: format::date_input(current.from),
                oninput: move |v: String| filter.write().from = format::parse_date(&v),
            }
            TextField {
                label: "To",
                kind: "date",
                value: format::date_input(current.to),
                oninput: move |v: String| filter.write().to = format::parse_date(&v),
            }
            SelectField {
                label: "Order",
                value: current.direction.map(|d| d.as_str().to_string()).unwrap_or_default(),
                options: directions,
                placeholder: "Default",
                onchange: move |v: String| {
                    let mut filter = filter.write();
                    filter.direction = match v.as_str() {
                        "asc" => Some(SortDirection::Asc),
                        "desc" => Some(SortDirection::Desc),
                        _ => None,
                    };
                    filter.order_by = filter.direction.map(|_| "fecha".to_string());
                },
            }
            div {
                class: "filter-bar__actions",
                Button { submit: true, "Apply" }
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| {
                        filter.set(AppointmentFilter::default());
                        crud.set_query(Vec::new());
                    },
                    "Clear"
                }
            }
        }
    }
}

#[component]
fn AppointmentDialog(crud: Crud<Appointment>, pets: Vec<Pet>, services: Vec<Service>) -> Element {
    let mut availability = use_signal(|| Option::<bool>::None);
    let state = crud.state();
    let state = state.read();
    let Some(form) = state.dialog.form().cloned() else {
        return rsx! {};
    };
    let editing = matches!(state.dialog, Dialog::Edit { .. });
    let statuses: Vec<(String, String)> = AppointmentStatus::ALL
        .iter()
        .map(|s| (s.as_str().to_string(), s.label().to_string()))
        .collect();
    let duration = services
        .iter()
        .find(|s| s.id == form.service.id)
        .map(|s| s.duration);

    let check = {
        let form = form.clone();
        move |_: MouseEvent| {
            let (Some(date), Some(duration)) = (form.date, duration) else {
                crud.notify(Notice::error("Choose a service and a date first"));
                return;
            };
            if form.time.trim().is_empty() {
                crud.notify(Notice::error("Time is required"));
                return;
            }
            let query = AvailabilityQuery {
                date,
                start: form.time.clone(),
                duration,
            };
            let gateway = crud.gateway();
            spawn(async move {
                match api::appointments::check_availability(&gateway, &query).await {
                    Ok(free) => availability.set(Some(free)),
                    Err(e) => {
                        availability.set(None);
                        crud.notify(Notice::error(e.user_message("Could not check availability")));
                    }
                }
            });
        }
    };

    rsx! {
        FormDialog {
            title: if editing { "Edit appointment".to_string() } else { "New appointment".to_string() },
            on_close: move |_| crud.close(),
            on_save: move |_| crud.submit(),
            SelectField {
                label: "Pet",
                value: form.pet.id.clone(),
                options: pet_options(&pets),
                placeholder: "Choose a pet",
                onchange: move |v: String| crud.edit_form(|f| f.pet = EntityRef::new(v)),
            }
            SelectField {
                label: "Service",
                value: form.service.id.clone(),
                options: service_options(&services),
                placeholder: "Choose a service",
                onchange: move |v: String| {
                    availability.set(None);
                    crud.edit_form(|f| f.service = EntityRef::new(v));
                },
            }
            TextField {
                label: "Date",
                kind: "date",
                value: format::date_input(form.date),
                required: true,
                oninput: move |v: String| {
                    availability.set(None);
                    crud.edit_form(|f| f.date = format::parse_date(&v));
                },
            }
            TextField {
                label: "Time",
                kind: "time",
                value: form.time.clone(),
                required: true,
                oninput: move |v: String| {
                    availability.set(None);
                    crud.edit_form(|f| f.time = v);
                },
            }
            if editing {
                SelectField {
                    label: "Status",
                    value: form.status.as_str().to_string(),
                    options: statuses,
                    onchange: move |v: String| {
                        if let Some(status) = AppointmentStatus::from_wire(&v) {
                            crud.edit_form(|f| f.status = status);
                        }
                    },
                }
            }
            TextAreaField {
                label: "Notes",
                value: form.notes.clone(),
                oninput: move |v: String| crud.edit_form(|f| f.notes = v),
            }
            div {
                class: "availability",
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: check,
                    "Check availability"
                }
                match availability() {
                    Some(true) => rsx! { span { class: "availability__ok", "Slot available" } },
                    Some(false) => rsx! { span { class: "availability__busy", "Slot already taken" } },
                    None => rsx! {},
                }
            }
        }
    }
}
