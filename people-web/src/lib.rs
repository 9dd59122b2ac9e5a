//! people-web
//!
//! A small CRUD web front-end for a person directory, based on Axum.
//!
//! The crate wires a [`PersonController`] over a [`PersonStore`] into a plain
//! Axum router: HTML pages for browsers, plus a JSON mirror of the same
//! operations for scripted callers.
//!
//! # Features
//!
//! - `auto-reload`: Automatically reload the server when the source code changes. Useful for
//!   development. **Not enabled by default.**

mod controller;
mod form;
mod model;
mod negotiation;
mod route;
mod server;
mod store;
mod views;

pub use controller::PersonController;
pub use form::{FieldError, FormErrors, PersonForm};
pub use model::{AGE_MAX, AGE_MIN, Person};
pub use negotiation::ContentFormat;
pub use route::PersonRoute;
pub use server::{ServeError, Server, ServerBuilder, ServerOptions, ServerOptionsFromEnvError};
pub use store::{MemoryStore, PersonStore, StoreError};
pub use views::{IndexPage, PersonDetailPage, PersonFormPage, PersonListPage, RenderIntoResponse};

#[cfg(feature = "auto-reload")]
pub use server::{NewWithAutoReloadError, auto_reload::GetTcpListenerError};
