//! # API crate — typed access to the notes backend
//!
//! Everything the frontend knows about the remote REST API lives here: the wire
//! models, the error taxonomy, where the base URL comes from, and the
//! [`Backend`] trait with its implementations.
//!
//! ## Modules
//!
//! | Module | Target | Purpose |
//! |--------|--------|---------|
//! | [`backend`] | all | The [`Backend`] trait, one async method per endpoint |
//! | [`config`] | all | [`ApiConfig`], resolved from `notes.toml` / `NOTES_*` env on native and build-time env on WASM |
//! | [`error`] | all | [`ApiError`], decoded once at the transport boundary |
//! | [`http`] | all | [`HttpBackend`], the `reqwest` implementation with ambient cookie credentials |
//! | [`memory`] | all | [`MemoryBackend`], an in-process fake of the API for tests and server-less runs |
//! | [`models`] | all | [`User`], [`Note`], [`NoteDraft`], [`AuthPayload`] |
//!
//! ## Endpoints
//!
//! All paths are relative to [`ApiConfig::backend_url`]:
//!
//! - `POST /auth/login/`, `POST /auth/logout/`, `POST /auth/register/`
//! - `GET /notes/[?search=Q]`, `POST /notes/`, `PUT /notes/{id}/`, `DELETE /notes/{id}/`

pub mod backend;
pub mod config;
pub mod error;
pub mod http;
pub mod memory;
pub mod models;

pub use backend::Backend;
pub use config::ApiConfig;
pub use error::ApiError;
pub use http::HttpBackend;
pub use memory::{MemoryBackend, Request};
pub use models::{AuthPayload, Note, NoteDraft, NoteId, User};
