//! Authenticated layout: sidebar navigation, header and content area.

use api::{Capability, Grants, SessionState};
use dioxus::prelude::*;

use crate::auth::{use_session_state, LogoutButton};
use crate::icons::{FaPaw, FaUser};
use crate::{Icon, StatusIndicator};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub path: &'static str,
    pub label: &'static str,
    pub capability: Capability,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavSection {
    pub title: Option<&'static str>,
    pub items: Vec<NavItem>,
}

const MAIN_ITEMS: [NavItem; 5] = [
    NavItem {
        path: "/dashboard",
        label: "Dashboard",
        capability: Capability::ViewDashboard,
    },
    NavItem {
        path: "/mascotas",
        label: "Pets",
        capability: Capability::ManagePets,
    },
    NavItem {
        path: "/citas",
        label: "Appointments",
        capability: Capability::ManageAppointments,
    },
    NavItem {
        path: "/servicios-productos",
        label: "Services & Products",
        capability: Capability::BrowseCatalog,
    },
    NavItem {
        path: "/facturas",
        label: "Invoices",
        capability: Capability::ManageInvoices,
    },
];

const ADMIN_ITEMS: [NavItem; 2] = [
    NavItem {
        path: "/usuarios-clientes",
        label: "Users & Clients",
        capability: Capability::ManageUsers,
    },
    NavItem {
        path: "/panel-admin",
        label: "Admin panel",
        capability: Capability::ViewAdminPanel,
    },
];

/// Sidebar sections visible to `state`. Empty sections are dropped.
pub fn nav_sections(state: &SessionState) -> Vec<NavSection> {
    let visible = |items: &[NavItem]| -> Vec<NavItem> {
        items
            .iter()
            .copied()
            .filter(|item| state.grants(item.capability))
            .collect()
    };
    [
        NavSection {
            title: None,
            items: visible(&MAIN_ITEMS),
        },
        NavSection {
            title: Some("Administration"),
            items: visible(&ADMIN_ITEMS),
        },
    ]
    .into_iter()
    .filter(|section| !section.items.is_empty())
    .collect()
}

/// Frame around every authenticated view. `active` is the current path.
#[component]
pub fn AppShell(
    active: String,
    on_navigate: EventHandler<String>,
    on_logout: EventHandler<()>,
    children: Element,
) -> Element {
    let state = use_session_state();
    let sections = nav_sections(&state);
    let user_name = state
        .user()
        .map(|u| u.display_name().to_string())
        .unwrap_or_default();
    let role = state.role().map(|r| r.to_string()).unwrap_or_default();

    rsx! {
        div {
            class: "app-shell",
            aside {
                class: "sidebar",
                div {
                    class: "sidebar__brand",
                    Icon { icon: FaPaw, width: 20, height: 20 }
                    span { "PetSPA" }
                }
                nav {
                    for (index, section) in sections.into_iter().enumerate() {
                        div {
                            key: "{index}",
                            class: "sidebar__section",
                            if let Some(title) = section.title {
                                p { class: "sidebar__section-title", "{title}" }
                            }
                            for item in section.items {
                                a {
                                    key: "{item.path}",
                                    href: "{item.path}",
                                    class: if active.starts_with(item.path) { "sidebar__link sidebar__link--active" } else { "sidebar__link" },
                                    onclick: move |evt: MouseEvent| {
                                        evt.prevent_default();
                                        on_navigate.call(item.path.to_string());
                                    },
                                    "{item.label}"
                                }
                            }
                        }
                    }
                }
            }
            div {
                class: "app-main",
                header {
                    class: "app-header",
                    StatusIndicator {}
                    div {
                        class: "app-header__user",
                        Icon { icon: FaUser, width: 14, height: 14 }
                        span { "{user_name}" }
                        span { class: "app-header__role", "{role}" }
                        LogoutButton {
                            class: "btn btn--ghost",
                            on_logout: move |_| on_logout.call(()),
                        }
                    }
                }
                main { class: "app-content", {children} }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use store::{Role, User};

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

    fn paths(sections: &[NavSection]) -> Vec<&'static str> {
        sections
            .iter()
            .flat_map(|s| s.items.iter().map(|i| i.path))
            .collect()
    }

    #[test]
    fn admins_see_the_administration_section() {
        let sections = nav_sections(&signed_in(Role::Admin));
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[1].title, Some("Administration"));
        assert!(paths(&sections).contains(&"/panel-admin"));
    }

    #[test]
    fn clients_only_see_their_features() {
        let sections = nav_sections(&signed_in(Role::Cliente));
        assert_eq!(sections.len(), 1);
        assert_eq!(
            paths(&sections),
            vec!["/dashboard", "/mascotas", "/citas", "/servicios-productos", "/facturas"]
        );
    }

    #[test]
    fn anonymous_sessions_get_no_navigation() {
        assert!(nav_sections(&SessionState::Anonymous).is_empty());
    }
}
