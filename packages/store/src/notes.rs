//! Notes store: the list shown on the notes page plus its search filter.

use std::rc::Rc;

use api::{ApiError, Backend, Note, NoteDraft, NoteId};

use crate::watch::Watched;

pub const FETCH_FAILED: &str = "Failed to load notes";

/// Snapshot of the notes store.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NotesState {
    /// Notes in the order of the last successful fetch.
    pub notes: Vec<Note>,
    pub loading: bool,
    pub error: Option<String>,
    /// Server-side search filter, empty for none.
    pub search: String,
}

pub struct NotesStore<B> {
    backend: Rc<B>,
    state: Watched<NotesState>,
}

impl<B> Clone for NotesStore<B> {
    fn clone(&self) -> Self {
        Self {
            backend: Rc::clone(&self.backend),
            state: self.state.clone(),
        }
    }
}

impl<B: Backend> NotesStore<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend: Rc::new(backend),
            state: Watched::new(),
        }
    }

    pub fn state(&self) -> NotesState {
        self.state.get()
    }

    pub fn subscribe(&self, listener: impl Fn(&NotesState) + 'static) {
        self.state.subscribe(listener);
    }

    /// Set the filter used by [`refresh`](Self::refresh) and the re-fetch after writes.
    pub fn set_search(&self, query: impl Into<String>) {
        let query = query.into();
        self.state.update(|s| s.search = query);
    }

    /// Forget everything, e.g. after logout.
    pub fn clear(&self) {
        self.state.update(|s| *s = NotesState::default());
    }

    /// Replace the list with the server's notes matching `query`.
    ///
    /// On failure the list is emptied and `error` set.
    pub async fn fetch_notes(&self, query: &str) {
        self.state.update(|s| {
            s.loading = true;
            s.error = None;
        });

        let result = self
            .backend
            .fetch_notes(Some(query).filter(|q| !q.is_empty()))
            .await;

        self.state.update(|s| {
            match result {
                Ok(notes) => {
                    tracing::debug!("Loaded {} notes", notes.len());
                    s.notes = notes;
                }
                Err(e) => {
                    tracing::warn!("Failed to load notes: {}", e);
                    s.error = Some(FETCH_FAILED.to_string());
                    s.notes.clear();
                }
            }
            s.loading = false;
        });
    }

    /// Fetch with the held search filter.
    pub async fn refresh(&self) {
        let search = self.state.read(|s| s.search.clone());
        self.fetch_notes(&search).await;
    }

    /// Create a note, then re-fetch.
    ///
    /// A failure leaves the state untouched; it is logged and returned.
    pub async fn create_note(&self, title: &str, content: &str) -> Result<(), ApiError> {
        let draft = NoteDraft::new(title, content);
        let result = self.backend.create_note(&draft).await.map(|_| ());
        self.after_write("create", result).await
    }

    /// Replace `note`'s title and content on the server, then re-fetch.
    pub async fn update_note(&self, note: &Note) -> Result<(), ApiError> {
        let result = self
            .backend
            .update_note(note.id, &note.draft())
            .await
            .map(|_| ());
        self.after_write("update", result).await
    }

    /// Delete note `id`, then re-fetch.
    pub async fn delete_note(&self, id: NoteId) -> Result<(), ApiError> {
        let result = self.backend.delete_note(id).await;
        self.after_write("delete", result).await
    }

    async fn after_write(
        &self,
        action: &str,
        result: Result<(), ApiError>,
    ) -> Result<(), ApiError> {
        match result {
            Ok(()) => {
                self.refresh().await;
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Failed to {} note: {}", action, e);
                Err(e)
            }
        }
    }
}
