use std::future::Future;

use crate::error::ApiError;
use crate::models::{AuthPayload, Note, NoteDraft, NoteId};

/// Async interface to the notes backend, one method per endpoint.
///
/// Implementations carry credentials ambiently (cookies); no method takes a token.
pub trait Backend {
    fn login(
        &self,
        username: &str,
        password: &str,
    ) -> impl Future<Output = Result<AuthPayload, ApiError>>;

    fn logout(&self) -> impl Future<Output = Result<(), ApiError>>;

    fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> impl Future<Output = Result<AuthPayload, ApiError>>;

    /// List notes. A `Some` non-empty query is sent as the `search` parameter.
    fn fetch_notes(
        &self,
        query: Option<&str>,
    ) -> impl Future<Output = Result<Vec<Note>, ApiError>>;

    fn create_note(&self, note: &NoteDraft) -> impl Future<Output = Result<Note, ApiError>>;

    /// Full replacement of note `id`.
    fn update_note(
        &self,
        id: NoteId,
        note: &NoteDraft,
    ) -> impl Future<Output = Result<Note, ApiError>>;

    fn delete_note(&self, id: NoteId) -> impl Future<Output = Result<(), ApiError>>;
}
