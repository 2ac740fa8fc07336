//! Dioxus binding for [`CrudState`].
//!
//! [`use_crud`] gives a view a [`Crud`] handle: a signal holding the list,
//! dialog and notice, plus methods that spawn the fetch/save/delete tasks.
//! The tasks are the [`api::crud`] steps run with the handle as their
//! [`CrudHost`], so the list is fetched once on mount and again after every
//! successful mutation. Notices clear themselves after a few seconds.

use std::future::Future;
use std::time::Duration;

use api::{crud, resource, ApiError, CrudHost, CrudState, Gateway, Notice, Resource};
use dioxus::prelude::*;
use tracing::warn;

use crate::auth::use_gateway;
use crate::platform;

const NOTICE_TTL: Duration = Duration::from_secs(4);

/// Handle to one view's CRUD state. `Copy`, so event handlers can capture
/// it freely.
pub struct Crud<R: Resource> {
    state: Signal<CrudState<R>>,
    gateway: Signal<Gateway>,
}

impl<R: Resource> Clone for Crud<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Resource> Copy for Crud<R> {}

impl<R: Resource> PartialEq for Crud<R> {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state
    }
}

/// CRUD state for `R`, listing the whole collection.
pub fn use_crud<R: Resource>() -> Crud<R> {
    use_crud_with::<R>(Vec::new())
}

/// CRUD state for `R`, listing with the given query parameters.
pub fn use_crud_with<R: Resource>(query: Vec<(String, String)>) -> Crud<R> {
    let gateway = use_gateway();
    let state = use_signal(|| CrudState::<R> {
        query,
        ..CrudState::new()
    });
    let gateway = use_signal(|| gateway);
    let crud = Crud { state, gateway };
    use_hook(|| crud.refresh());
    crud
}

/// Read-only list of `R` for select options. Failures are logged and leave
/// the list empty.
pub fn use_lookup<R: Resource>() -> Signal<Vec<R>> {
    use_lookup_when::<R>(true)
}

/// [`use_lookup`] that only fetches when `enabled` on mount, for lists the
/// current role may not read.
pub fn use_lookup_when<R: Resource>(enabled: bool) -> Signal<Vec<R>> {
    let gateway = use_gateway();
    let mut items = use_signal(Vec::new);
    use_hook(move || {
        if !enabled {
            return;
        }
        spawn(async move {
            match resource::list::<R>(&gateway).await {
                Ok(list) => items.set(list),
                Err(e) => warn!("Could not load {} for selection: {}", R::PLURAL, e),
            }
        });
    });
    items
}

impl<R: Resource> Crud<R> {
    pub fn state(&self) -> Signal<CrudState<R>> {
        self.state
    }

    pub fn gateway(&self) -> Gateway {
        self.gateway.peek().clone()
    }

    pub fn refresh(&self) {
        let mut this = *self;
        spawn(async move {
            let gateway = this.gateway();
            crud::refresh(&mut this, &gateway).await;
            this.expire_notice();
        });
    }

    /// Replace the list query and refetch.
    pub fn set_query(&self, query: Vec<(String, String)>) {
        let mut state = self.state;
        state.write().query = query;
        self.refresh();
    }

    pub fn open_create(&self) {
        let mut state = self.state;
        state.write().open_create();
    }

    pub fn open_create_with(&self, form: R::Form) {
        let mut state = self.state;
        state.write().open_create_with(form);
    }

    pub fn open_edit(&self, item: &R) {
        let mut state = self.state;
        state.write().open_edit(item);
    }

    pub fn close(&self) {
        let mut state = self.state;
        state.write().close_dialog();
    }

    /// Edit the open dialog's form in place. No-op when closed.
    pub fn edit_form(&self, edit: impl FnOnce(&mut R::Form)) {
        let mut this = *self;
        this.update(|state| {
            if let Some(form) = state.form_mut() {
                edit(form);
            }
        });
    }

    pub fn dismiss(&self) {
        let mut state = self.state;
        state.write().dismiss_notice();
    }

    /// Show a notice that did not come from a CRUD call.
    pub fn notify(&self, notice: Notice) {
        let mut state = self.state;
        state.write().notice = Some(notice);
        self.expire_notice();
    }

    /// Validate and send the open dialog, then refetch on success.
    pub fn submit(&self) {
        let mut this = *self;
        spawn(async move {
            let gateway = this.gateway();
            crud::submit(&mut this, &gateway).await;
            this.expire_notice();
        });
    }

    pub fn remove(&self, id: String) {
        let mut this = *self;
        spawn(async move {
            let gateway = this.gateway();
            crud::remove(&mut this, &gateway, &id).await;
            this.expire_notice();
        });
    }

    /// Run a non-CRUD call such as cancelling an appointment, then refetch
    /// on success.
    pub fn action<F, Fut>(&self, call: F, success: &'static str, failure: &'static str)
    where
        F: FnOnce(Gateway) -> Fut + 'static,
        Fut: Future<Output = Result<(), ApiError>> + 'static,
    {
        let mut this = *self;
        spawn(async move {
            let gateway = this.gateway();
            let pending = call(gateway.clone());
            crud::action(&mut this, &gateway, pending, success, failure).await;
            this.expire_notice();
        });
    }

    fn expire_notice(self) {
        let current = self.state.peek().notice.clone();
        let Some(notice) = current else {
            return;
        };
        let mut state = self.state;
        spawn(async move {
            platform::sleep(NOTICE_TTL).await;
            let unchanged = state.peek().notice.as_ref() == Some(&notice);
            if unchanged {
                state.write().dismiss_notice();
            }
        });
    }
}

impl<R: Resource> CrudHost<R> for Crud<R> {
    fn update<T>(&mut self, step: impl FnOnce(&mut CrudState<R>) -> T) -> T {
        let mut guard = self.state.write();
        step(&mut guard)
    }
}
