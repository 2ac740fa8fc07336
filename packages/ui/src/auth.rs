//! Session context and hooks for the UI.

use api::{Gateway, Session, SessionState};
use dioxus::prelude::*;
use store::AppConfig;

use crate::platform;

/// The session signal. Mutate it only through [`Session::dispatch`].
pub fn use_session() -> Signal<Session> {
    use_context::<Signal<Session>>()
}

/// The shared request gateway.
pub fn use_gateway() -> Gateway {
    use_context::<Gateway>()
}

pub fn use_app_config() -> AppConfig {
    use_context::<AppConfig>()
}

/// Snapshot of the current session state.
pub fn use_session_state() -> SessionState {
    use_session().read().state().clone()
}

/// Provider component that owns the session, the gateway and the config.
/// Wrap the app with this component.
///
/// The session is hydrated synchronously from the token store, so the first
/// render already knows whether the user is signed in. The gateway's 401
/// hook logs the session out and sends the browser to the login page.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let config = use_hook(platform::load_config);
    let tokens = use_hook(platform::make_token_store);

    let session = use_signal({
        let tokens = tokens.clone();
        move || Session::hydrate(tokens)
    });

    let gateway = use_hook(|| {
        Gateway::new(&config.api, tokens.clone()).on_unauthorized(move || {
            let mut session = session;
            if session.peek().state().is_authenticated() {
                session.write().logout();
            }
            platform::redirect_to_login();
        })
    });

    use_context_provider(|| session);
    use_context_provider(|| gateway);
    use_context_provider(|| config);

    rsx! {
        {children}
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Log out".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
    on_logout: EventHandler<()>,
) -> Element {
    let mut session = use_session();
    let gateway = use_gateway();
    let mut busy = use_signal(|| false);

    let onclick = move |_| {
        let gateway = gateway.clone();
        async move {
            busy.set(true);
            api::auth::logout(&gateway).await;
            session.write().logout();
            busy.set(false);
            on_logout.call(());
        }
    };

    rsx! {
        button {
            class: "{class}",
            disabled: busy(),
            onclick: onclick,
            "{label}"
        }
    }
}
