//! Route targets inside the app layout. The layout has already applied the
//! guard.

use dioxus::prelude::*;
use ui::views::{
    AdminPanelView, AppointmentsView, CatalogView, DashboardView, InvoicesView, PetsView, UsersClientsView,
};

#[component]
pub fn Dashboard() -> Element {
    rsx! { DashboardView {} }
}

#[component]
pub fn Pets() -> Element {
    rsx! { PetsView {} }
}

#[component]
pub fn Appointments() -> Element {
    rsx! { AppointmentsView {} }
}

#[component]
pub fn Catalog() -> Element {
    rsx! { CatalogView {} }
}

#[component]
pub fn Invoices() -> Element {
    rsx! { InvoicesView {} }
}

#[component]
pub fn UsersClients() -> Element {
    rsx! { UsersClientsView {} }
}

#[component]
pub fn AdminPanel() -> Element {
    rsx! { AdminPanelView {} }
}
