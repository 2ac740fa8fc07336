//! # CRUD view state
//!
//! Every management view follows the same cycle: fetch the list, open a
//! create or edit dialog, submit, close, refetch, and show a short notice.
//! [`CrudState`] holds that cycle for one [`Resource`] so views only render
//! it. The async steps ([`refresh`], [`submit`], [`remove`], [`action`])
//! run against any [`CrudHost`], so a UI signal and a plain `CrudState` go
//! through the same sequence.
//!
//! Failure rules:
//!
//! - a failed fetch keeps the last good list and raises an error notice;
//! - a failed save keeps the dialog open with the user's input;
//! - a failed delete leaves the list untouched.

use std::future::Future;

use tracing::warn;

use crate::error::ApiError;
use crate::gateway::Gateway;
use crate::resource::{self, Resource};

#[derive(Clone, Debug, Default, PartialEq)]
pub enum Dialog<F> {
    #[default]
    Closed,
    Create(F),
    Edit { id: String, form: F },
}

impl<F> Dialog<F> {
    pub fn is_open(&self) -> bool {
        !matches!(self, Dialog::Closed)
    }

    pub fn form(&self) -> Option<&F> {
        match self {
            Dialog::Closed => None,
            Dialog::Create(form) | Dialog::Edit { form, .. } => Some(form),
        }
    }

    pub fn form_mut(&mut self) -> Option<&mut F> {
        match self {
            Dialog::Closed => None,
            Dialog::Create(form) | Dialog::Edit { form, .. } => Some(form),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// Transient feedback message.
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SaveRequest<F> {
    Create(F),
    Update { id: String, form: F },
}

pub async fn save<R: Resource>(gateway: &Gateway, request: &SaveRequest<R::Form>) -> Result<(), ApiError> {
    match request {
        SaveRequest::Create(form) => resource::create::<R>(gateway, form).await,
        SaveRequest::Update { id, form } => resource::update::<R>(gateway, id, form).await,
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CrudState<R: Resource> {
    pub items: Vec<R>,
    /// Query parameters sent with every list fetch.
    pub query: Vec<(String, String)>,
    pub dialog: Dialog<R::Form>,
    pub notice: Option<Notice>,
    pub loading: bool,
}

impl<R: Resource> Default for CrudState<R> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            query: Vec::new(),
            dialog: Dialog::Closed,
            notice: None,
            loading: false,
        }
    }
}

impl<R: Resource> CrudState<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn find(&self, id: &str) -> Option<&R> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn open_create(&mut self) {
        self.dialog = Dialog::Create(R::Form::default());
    }

    pub fn open_create_with(&mut self, form: R::Form) {
        self.dialog = Dialog::Create(form);
    }

    pub fn open_edit(&mut self, item: &R) {
        self.dialog = Dialog::Edit {
            id: item.id().to_string(),
            form: item.to_form(),
        };
    }

    pub fn close_dialog(&mut self) {
        self.dialog = Dialog::Closed;
    }

    pub fn form_mut(&mut self) -> Option<&mut R::Form> {
        self.dialog.form_mut()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    pub fn begin_refresh(&mut self) {
        self.loading = true;
    }

    pub fn apply_list(&mut self, result: Result<Vec<R>, ApiError>) {
        self.loading = false;
        match result {
            Ok(items) => self.items = items,
            Err(e) => {
                warn!("Could not load {}: {}", R::PLURAL, e);
                self.notice = Some(Notice::error(
                    e.user_message(&format!("Could not load {}", R::PLURAL)),
                ));
            }
        }
    }

    /// Validate the open dialog and turn it into a request. `None` when no
    /// dialog is open or validation failed (the notice says why).
    pub fn begin_save(&mut self) -> Option<SaveRequest<R::Form>> {
        let request = match &self.dialog {
            Dialog::Closed => return None,
            Dialog::Create(form) => SaveRequest::Create(form.clone()),
            Dialog::Edit { id, form } => SaveRequest::Update {
                id: id.clone(),
                form: form.clone(),
            },
        };
        let checked = match &request {
            SaveRequest::Create(form) => R::validate_create(form),
            SaveRequest::Update { form, .. } => R::validate(form),
        };
        if let Err(message) = checked {
            self.notice = Some(Notice::error(message));
            return None;
        }
        Some(request)
    }

    /// Record the outcome of a save. Returns `true` on success, after which
    /// the caller refetches.
    pub fn finish_save(&mut self, request: &SaveRequest<R::Form>, result: Result<(), ApiError>) -> bool {
        let verb = match request {
            SaveRequest::Create(_) => "created",
            SaveRequest::Update { .. } => "updated",
        };
        match result {
            Ok(()) => {
                self.dialog = Dialog::Closed;
                self.notice = Some(Notice::success(format!("{} {}", R::LABEL, verb)));
                true
            }
            Err(e) => {
                warn!("Could not save {}: {}", R::LABEL, e);
                self.notice = Some(Notice::error(e.user_message(&format!(
                    "Could not save {}",
                    R::LABEL.to_lowercase()
                ))));
                false
            }
        }
    }

    pub fn finish_delete(&mut self, result: Result<(), ApiError>) -> bool {
        match result {
            Ok(()) => {
                self.notice = Some(Notice::success(format!("{} deleted", R::LABEL)));
                true
            }
            Err(e) => {
                warn!("Could not delete {}: {}", R::LABEL, e);
                self.notice = Some(Notice::error(e.user_message(&format!(
                    "Could not delete {}",
                    R::LABEL.to_lowercase()
                ))));
                false
            }
        }
    }

    /// Record the outcome of a non-CRUD action such as cancelling an
    /// appointment.
    pub fn finish_action(&mut self, result: Result<(), ApiError>, success: &str, failure: &str) -> bool {
        match result {
            Ok(()) => {
                self.notice = Some(Notice::success(success));
                true
            }
            Err(e) => {
                self.notice = Some(Notice::error(e.user_message(failure)));
                false
            }
        }
    }
}

/// Somewhere a [`CrudState`] lives. `update` borrows it for one synchronous
/// step, so no borrow is held across an await.
pub trait CrudHost<R: Resource> {
    fn update<T>(&mut self, step: impl FnOnce(&mut CrudState<R>) -> T) -> T;
}

impl<R: Resource> CrudHost<R> for CrudState<R> {
    fn update<T>(&mut self, step: impl FnOnce(&mut CrudState<R>) -> T) -> T {
        step(self)
    }
}

/// Fetch the list with the host's query.
pub async fn refresh<R: Resource>(host: &mut impl CrudHost<R>, gateway: &Gateway) {
    let query = host.update(|state| {
        state.begin_refresh();
        state.query.clone()
    });
    let result = resource::list_where::<R>(gateway, &query).await;
    host.update(|state| state.apply_list(result));
}

/// Validate and send the open dialog, refetching on success.
pub async fn submit<R: Resource>(host: &mut impl CrudHost<R>, gateway: &Gateway) -> bool {
    let Some(request) = host.update(CrudState::begin_save) else {
        return false;
    };
    let result = save::<R>(gateway, &request).await;
    let saved = host.update(|state| state.finish_save(&request, result));
    if saved {
        refresh(host, gateway).await;
    }
    saved
}

pub async fn remove<R: Resource>(host: &mut impl CrudHost<R>, gateway: &Gateway, id: &str) -> bool {
    let result = resource::delete::<R>(gateway, id).await;
    let deleted = host.update(|state| state.finish_delete(result));
    if deleted {
        refresh(host, gateway).await;
    }
    deleted
}

/// Await a non-CRUD call such as cancelling an appointment, record the
/// outcome and refetch on success.
pub async fn action<R: Resource>(
    host: &mut impl CrudHost<R>,
    gateway: &Gateway,
    call: impl Future<Output = Result<(), ApiError>>,
    success: &str,
    failure: &str,
) -> bool {
    let result = call.await;
    let done = host.update(|state| state.finish_action(result, success, failure));
    if done {
        refresh(host, gateway).await;
    }
    done
}
