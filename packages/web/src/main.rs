use api::{Capability, RouteAccess};
use dioxus::prelude::*;

use ui::SessionProvider;
use views::{
    AdminPanel, AppLayout, Appointments, Catalog, Dashboard, Invoices, Login, NotFound, Pets, Register,
    Root, UsersClients,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[layout(AppLayout)]
        #[route("/")]
        Root {},
        #[route("/dashboard")]
        Dashboard {},
        #[route("/mascotas")]
        Pets {},
        #[route("/citas")]
        Appointments {},
        #[route("/servicios-productos")]
        Catalog {},
        #[route("/facturas")]
        Invoices {},
        #[route("/usuarios-clientes")]
        UsersClients {},
        #[route("/panel-admin")]
        AdminPanel {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl Route {
    /// Who may see this route.
    fn access(&self) -> RouteAccess {
        match self {
            Route::Login {} | Route::Register {} => RouteAccess::GuestOnly,
            Route::Root {} | Route::NotFound { .. } => RouteAccess::Authenticated,
            Route::Dashboard {} => RouteAccess::Requires(Capability::ViewDashboard),
            Route::Pets {} => RouteAccess::Requires(Capability::ManagePets),
            Route::Appointments {} => RouteAccess::Requires(Capability::ManageAppointments),
            Route::Catalog {} => RouteAccess::Requires(Capability::BrowseCatalog),
            Route::Invoices {} => RouteAccess::Requires(Capability::ManageInvoices),
            Route::UsersClients {} => RouteAccess::Requires(Capability::ManageUsers),
            Route::AdminPanel {} => RouteAccess::Requires(Capability::ViewAdminPanel),
        }
    }
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: ui::MAIN_CSS }

        SessionProvider {
            Router::<Route> {}
        }
    }
}

#[cfg(test)]
mod tests {
    use api::{guard, GuardOutcome, Role, SessionState, User};

    use super::*;

    fn signed_in(role: Role) -> SessionState {
        SessionState::Authenticated {
            user: User {
                id: "1".into(),
                username: "ana".into(),
                email: "ana@petspa.es".into(),
                role,
                name: None,
            },
            token: "t".into(),
        }
    }

    #[test]
    fn paths_map_to_routes() {
        assert_eq!("/mascotas".parse::<Route>().ok(), Some(Route::Pets {}));
        assert_eq!("/panel-admin".parse::<Route>().ok(), Some(Route::AdminPanel {}));
        assert_eq!(Route::UsersClients {}.to_string(), "/usuarios-clientes");
    }

    #[test]
    fn admin_panel_is_guarded_by_role() {
        let access = Route::AdminPanel {}.access();
        assert_eq!(guard(&signed_in(Role::Admin), access), GuardOutcome::Render);
        assert_eq!(
            guard(&signed_in(Role::Cliente), access),
            GuardOutcome::RedirectToDefault
        );
        assert_eq!(
            guard(&SessionState::Anonymous, access),
            GuardOutcome::RedirectToLogin
        );
    }

    #[test]
    fn client_routes_render_for_clients() {
        let client = signed_in(Role::Cliente);
        for route in [
            Route::Dashboard {},
            Route::Pets {},
            Route::Appointments {},
            Route::Catalog {},
            Route::Invoices {},
        ] {
            assert_eq!(guard(&client, route.access()), GuardOutcome::Render, "{route}");
        }
        assert_eq!(
            guard(&client, Route::UsersClients {}.access()),
            GuardOutcome::RedirectToDefault
        );
    }

    #[test]
    fn login_sends_signed_in_users_away() {
        assert_eq!(
            guard(&signed_in(Role::Cliente), Route::Login {}.access()),
            GuardOutcome::RedirectToDefault
        );
        assert_eq!(
            guard(&SessionState::Anonymous, Route::Register {}.access()),
            GuardOutcome::Render
        );
    }
}
