//! Test transports.

use std::cell::RefCell;
use std::collections::{BTreeMap, VecDeque};
use std::rc::Rc;

use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;
use store::{MemoryStore, Role, TokenStore, User};

use crate::error::ApiError;
use crate::gateway::{ApiRequest, ApiResponse, Gateway, Transport};

pub const BASE_URL: &str = "http://api.test/api";

pub fn admin() -> User {
    User {
        id: "1".into(),
        username: "admin".into(),
        email: "admin@petspa.es".into(),
        role: Role::Admin,
        name: Some("Administrador".into()),
    }
}

pub fn client_user() -> User {
    User {
        id: "2".into(),
        username: "lucia".into(),
        email: "lucia@petspa.es".into(),
        role: Role::Cliente,
        name: None,
    }
}

/// Replays scripted responses in order and records every request.
#[derive(Clone, Default)]
pub struct RecordingTransport {
    script: Rc<RefCell<VecDeque<Result<ApiResponse, ApiError>>>>,
    requests: Rc<RefCell<Vec<ApiRequest>>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, status: u16, body: &str) {
        self.script.borrow_mut().push_back(Ok(ApiResponse {
            status,
            body: body.as_bytes().to_vec(),
        }));
    }

    pub fn respond_json(&self, status: u16, body: Value) {
        self.respond(status, &body.to_string());
    }

    pub fn fail(&self, error: ApiError) {
        self.script.borrow_mut().push_back(Err(error));
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }

    pub fn last_request(&self) -> Option<ApiRequest> {
        self.requests.borrow().last().cloned()
    }

    pub fn gateway(&self) -> Gateway {
        Gateway::with_transport(BASE_URL, TokenStore::new(MemoryStore::new()), self.clone())
    }
}

#[async_trait(?Send)]
impl Transport for RecordingTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        self.requests.borrow_mut().push(request);
        self.script.borrow_mut().pop_front().unwrap_or(Ok(ApiResponse {
            status: 200,
            body: Vec::new(),
        }))
    }
}

/// In-memory REST collections: `GET /x`, `POST /x`, `PUT /x/{id}`,
/// `DELETE /x/{id}`. Ids are assigned sequentially and emitted as numbers.
#[derive(Clone, Default)]
pub struct FakeBackend {
    collections: Rc<RefCell<BTreeMap<String, Vec<Value>>>>,
    next_id: Rc<RefCell<u64>>,
    failures: Rc<RefCell<VecDeque<u16>>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(&self, collection: &str, items: Vec<Value>) {
        let mut next = self.next_id.borrow_mut();
        let items = items
            .into_iter()
            .map(|mut item| {
                *next += 1;
                item["id"] = Value::from(*next);
                item
            })
            .collect();
        self.collections
            .borrow_mut()
            .insert(collection.to_string(), items);
    }

    pub fn items(&self, collection: &str) -> Vec<Value> {
        self.collections
            .borrow()
            .get(collection)
            .cloned()
            .unwrap_or_default()
    }

    /// The next request is answered with `status` and no body.
    pub fn fail_next(&self, status: u16) {
        self.failures.borrow_mut().push_back(status);
    }

    pub fn gateway(&self) -> Gateway {
        Gateway::with_transport(BASE_URL, TokenStore::new(MemoryStore::new()), self.clone())
    }

    fn handle(&self, request: &ApiRequest) -> ApiResponse {
        let path = request
            .url
            .strip_prefix(BASE_URL)
            .unwrap_or(&request.url)
            .trim_matches('/');
        let (collection, id) = match path.split_once('/') {
            Some((c, id)) => (c.to_string(), Some(id.to_string())),
            None => (path.to_string(), None),
        };
        let mut collections = self.collections.borrow_mut();
        let items = collections.entry(collection).or_default();

        match (request.method.clone(), id) {
            (Method::GET, None) => json(200, Value::Array(items.clone())),
            (Method::GET, Some(id)) => match position(items, &id) {
                Some(i) => json(200, items[i].clone()),
                None => empty(404),
            },
            (Method::POST, None) => {
                let mut item: Value = request
                    .body
                    .as_deref()
                    .and_then(|b| serde_json::from_str(b).ok())
                    .unwrap_or(Value::Null);
                let mut next = self.next_id.borrow_mut();
                *next += 1;
                item["id"] = Value::from(*next);
                items.push(item.clone());
                json(201, item)
            }
            (Method::PUT, Some(id)) => match position(items, &id) {
                Some(i) => {
                    let mut item: Value = request
                        .body
                        .as_deref()
                        .and_then(|b| serde_json::from_str(b).ok())
                        .unwrap_or(Value::Null);
                    item["id"] = items[i]["id"].clone();
                    items[i] = item.clone();
                    json(200, item)
                }
                None => empty(404),
            },
            (Method::DELETE, Some(id)) => match position(items, &id) {
                Some(i) => {
                    items.remove(i);
                    empty(204)
                }
                None => empty(404),
            },
            _ => empty(405),
        }
    }
}

fn position(items: &[Value], id: &str) -> Option<usize> {
    items.iter().position(|v| v["id"].to_string() == id)
}

fn json(status: u16, body: Value) -> ApiResponse {
    ApiResponse {
        status,
        body: body.to_string().into_bytes(),
    }
}

fn empty(status: u16) -> ApiResponse {
    ApiResponse {
        status,
        body: Vec::new(),
    }
}

#[async_trait(?Send)]
impl Transport for FakeBackend {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        if let Some(status) = self.failures.borrow_mut().pop_front() {
            return Ok(empty(status));
        }
        Ok(self.handle(&request))
    }
}
