//! # Session state
//!
//! The session is a two-state machine driven by [`SessionAction`]s through
//! the pure [`reduce`] function. [`Session`] wraps it with write-through
//! persistence: every dispatched login or logout is mirrored into the
//! [`TokenStore`] so a reload lands in the same state. A login whose
//! credentials cannot be stored is refused and the state stays as it was.
//!
//! [`Session::hydrate`] rebuilds the state from storage at startup. A stored
//! token without a user record, or a JWT whose `exp` has passed, starts the
//! app anonymous and wipes the store.

use chrono::Utc;
use store::{Credentials, Role, StoreError, TokenStore, User};
use tracing::{error, info, warn};

use crate::jwt;

#[derive(Clone, Debug, Default, PartialEq)]
pub enum SessionState {
    #[default]
    Anonymous,
    Authenticated { user: User, token: String },
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated { .. })
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            SessionState::Authenticated { user, .. } => Some(user),
            SessionState::Anonymous => None,
        }
    }

    pub fn token(&self) -> Option<&str> {
        match self {
            SessionState::Authenticated { token, .. } => Some(token),
            SessionState::Anonymous => None,
        }
    }

    pub fn role(&self) -> Option<Role> {
        self.user().map(|u| u.role)
    }

    pub fn is_admin(&self) -> bool {
        self.role().is_some_and(|r| r.is_admin())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SessionAction {
    Login { user: User, token: String },
    Logout,
}

/// Next state for `action`. Pure; persistence is [`Session::dispatch`]'s job.
pub fn reduce(state: SessionState, action: SessionAction) -> SessionState {
    match (state, action) {
        (_, SessionAction::Login { user, token }) => SessionState::Authenticated { user, token },
        (_, SessionAction::Logout) => SessionState::Anonymous,
    }
}

/// Session state plus the store it is mirrored into.
#[derive(Clone)]
pub struct Session {
    state: SessionState,
    tokens: TokenStore,
}

impl Session {
    /// Anonymous session over `tokens`, without reading them.
    pub fn new(tokens: TokenStore) -> Self {
        Self {
            state: SessionState::Anonymous,
            tokens,
        }
    }

    pub fn hydrate(tokens: TokenStore) -> Self {
        Self::hydrate_at(tokens, Utc::now().timestamp())
    }

    /// [`hydrate`](Self::hydrate) with an explicit clock, in epoch seconds.
    pub fn hydrate_at(tokens: TokenStore, now: i64) -> Self {
        let state = match tokens.get() {
            None => SessionState::Anonymous,
            Some(Credentials { user: None, .. }) => {
                warn!("Stored token has no user record, discarding it");
                tokens.clear();
                SessionState::Anonymous
            }
            Some(Credentials {
                token,
                user: Some(user),
            }) => {
                let expired = jwt::decode_claims(&token).is_some_and(|c| c.is_expired_at(now));
                if expired {
                    info!("Stored token for {} has expired", user.username);
                    tokens.clear();
                    SessionState::Anonymous
                } else {
                    info!("Restored session for {}", user.username);
                    SessionState::Authenticated { user, token }
                }
            }
        };
        Self { state, tokens }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn tokens(&self) -> &TokenStore {
        &self.tokens
    }

    /// Persist `action`, then apply it. The gateway reads the bearer from
    /// the store, so a login that cannot be persisted is not applied.
    pub fn dispatch(&mut self, action: SessionAction) -> Result<(), StoreError> {
        match &action {
            SessionAction::Login { user, token } => {
                if let Err(e) = self.tokens.set(token, user) {
                    error!("Could not persist credentials: {}", e);
                    return Err(e);
                }
                info!("Logged in as {} ({})", user.username, user.role);
            }
            SessionAction::Logout => {
                self.tokens.clear();
                info!("Logged out");
            }
        }
        self.state = reduce(std::mem::take(&mut self.state), action);
        Ok(())
    }

    /// [`dispatch`](Self::dispatch) of [`SessionAction::Logout`], which
    /// cannot fail.
    pub fn logout(&mut self) {
        self.tokens.clear();
        info!("Logged out");
        self.state = reduce(std::mem::take(&mut self.state), SessionAction::Logout);
    }
}

impl PartialEq for Session {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session").field("state", &self.state).finish()
    }
}
