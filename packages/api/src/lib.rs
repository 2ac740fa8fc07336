//! # API crate — REST client and session logic for PetSPA
//!
//! Everything the UI needs to talk to the PetSPA REST API and to decide who
//! may see what. Nothing here touches Dioxus; the `ui` crate wires these
//! types into signals and context.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`gateway`] | [`Gateway`]: base URL, bearer injection, 401 handling, envelope decoding; the [`Transport`] seam |
//! | [`session`] | [`SessionState`], [`SessionAction`], the pure [`reduce`](session::reduce) and the write-through [`Session`] |
//! | [`access`] | [`Capability`], [`RouteAccess`] and the [`guard`](access::guard) deciding render vs. redirect |
//! | [`jwt`] | Unverified JWT claim reads (role fallback, expiry at hydration) |
//! | [`resource`] | The [`Resource`] trait and generic list/get/create/update/delete |
//! | [`crud`] | [`CrudState`]: list + dialog + notice state shared by every management view |
//! | [`models`] | Entities and forms, with the API's wire names |
//! | [`error`] | [`ApiError`] |
//!
//! Feature endpoints: [`auth`], [`pets`], [`appointments`], [`catalog`],
//! [`invoices`], [`clients`], [`users`], [`dashboard`], [`health`].

pub mod access;
pub mod appointments;
pub mod auth;
pub mod catalog;
pub mod clients;
pub mod crud;
pub mod dashboard;
pub mod error;
pub mod gateway;
pub mod health;
pub mod invoices;
pub mod jwt;
pub mod models;
pub mod pets;
pub mod resource;
pub mod session;
pub mod users;

#[cfg(test)]
mod testing;

pub use access::{guard, Capability, Grants, GuardOutcome, RouteAccess};
pub use crud::{CrudHost, CrudState, Dialog, Notice, NoticeLevel};
pub use error::ApiError;
pub use gateway::{ApiRequest, ApiResponse, Gateway, ReqwestTransport, Transport};
pub use health::HealthStatus;
pub use resource::Resource;
pub use session::{Session, SessionAction, SessionState};

pub use store::{AppConfig, Role, TokenStore, User};
