//! Feature views shared by every platform package. Routing lives in the
//! platform package; views report navigation through event handlers.

mod login;
pub use login::LoginView;

mod register;
pub use register::RegisterView;

mod app_shell;
pub use app_shell::{nav_sections, AppShell, NavItem, NavSection};

mod dashboard;
pub use dashboard::DashboardView;

mod pets;
pub use pets::PetsView;

mod appointments;
pub use appointments::AppointmentsView;

mod catalog;
pub use catalog::CatalogView;

mod invoices;
pub use invoices::InvoicesView;

mod users_clients;
pub use users_clients::UsersClientsView;

mod admin_panel;
pub use admin_panel::AdminPanelView;

mod format;
