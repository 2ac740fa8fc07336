//! # Route access
//!
//! Every view declares a [`RouteAccess`]; [`guard`] turns it plus the current
//! [`SessionState`] into a [`GuardOutcome`]. Role checks go through
//! [`Grants`], so views ask for a [`Capability`] instead of comparing role
//! strings.

use store::Role;

use crate::session::SessionState;

/// Path of the view authenticated users land on.
pub const DEFAULT_VIEW: &str = "/dashboard";
pub const LOGIN_VIEW: &str = "/login";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Capability {
    ViewDashboard,
    ManagePets,
    ManageAppointments,
    BrowseCatalog,
    ManageCatalog,
    ManageInvoices,
    ManageUsers,
    ViewAdminPanel,
}

pub trait Grants {
    fn grants(&self, capability: Capability) -> bool;
}

impl Grants for Role {
    fn grants(&self, capability: Capability) -> bool {
        match self {
            Role::Admin => true,
            Role::Cliente => !matches!(
                capability,
                Capability::ManageCatalog | Capability::ManageUsers | Capability::ViewAdminPanel
            ),
        }
    }
}

impl Grants for SessionState {
    fn grants(&self, capability: Capability) -> bool {
        self.role().is_some_and(|r| r.grants(capability))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteAccess {
    /// Login and registration; authenticated users are sent away.
    GuestOnly,
    Authenticated,
    Requires(Capability),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    Render,
    RedirectToLogin,
    RedirectToDefault,
}

pub fn guard(state: &SessionState, access: RouteAccess) -> GuardOutcome {
    match (access, state.is_authenticated()) {
        (RouteAccess::GuestOnly, true) => GuardOutcome::RedirectToDefault,
        (RouteAccess::GuestOnly, false) => GuardOutcome::Render,
        (_, false) => GuardOutcome::RedirectToLogin,
        (RouteAccess::Authenticated, true) => GuardOutcome::Render,
        (RouteAccess::Requires(capability), true) => {
            if state.grants(capability) {
                GuardOutcome::Render
            } else {
                GuardOutcome::RedirectToDefault
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{admin, client_user};

    fn signed_in(user: store::User) -> SessionState {
        SessionState::Authenticated {
            user,
            token: "t".into(),
        }
    }

    #[test]
    fn anonymous_users_only_see_guest_views() {
        let state = SessionState::Anonymous;
        assert_eq!(guard(&state, RouteAccess::GuestOnly), GuardOutcome::Render);
        assert_eq!(
            guard(&state, RouteAccess::Authenticated),
            GuardOutcome::RedirectToLogin
        );
        assert_eq!(
            guard(&state, RouteAccess::Requires(Capability::ViewAdminPanel)),
            GuardOutcome::RedirectToLogin
        );
    }

    #[test]
    fn signed_in_users_skip_login() {
        assert_eq!(
            guard(&signed_in(client_user()), RouteAccess::GuestOnly),
            GuardOutcome::RedirectToDefault
        );
    }

    #[test]
    fn admin_views_need_admin_role() {
        let admin_panel = RouteAccess::Requires(Capability::ViewAdminPanel);
        assert_eq!(guard(&signed_in(admin()), admin_panel), GuardOutcome::Render);
        assert_eq!(
            guard(&signed_in(client_user()), admin_panel),
            GuardOutcome::RedirectToDefault
        );
    }

    #[test]
    fn clients_keep_their_own_features() {
        let state = signed_in(client_user());
        for capability in [
            Capability::ViewDashboard,
            Capability::ManagePets,
            Capability::ManageAppointments,
            Capability::BrowseCatalog,
            Capability::ManageInvoices,
        ] {
            assert!(state.grants(capability), "{capability:?}");
        }
        assert!(!state.grants(Capability::ManageCatalog));
        assert!(!state.grants(Capability::ManageUsers));
        assert!(!SessionState::Anonymous.grants(Capability::ViewDashboard));
    }
}
