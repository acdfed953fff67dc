//! In-memory [`Backend`] with the same behaviour as the notes API.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::backend::Backend;
use crate::error::ApiError;
use crate::models::{AuthPayload, Note, NoteDraft, NoteId, User};

/// A call received by a [`MemoryBackend`], in arrival order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Request {
    Login { username: String },
    Logout,
    Register { username: String, email: String },
    FetchNotes { search: Option<String> },
    CreateNote(NoteDraft),
    UpdateNote(NoteId, NoteDraft),
    DeleteNote(NoteId),
}

#[derive(Debug)]
struct Account {
    email: Option<String>,
    password: String,
}

#[derive(Debug, Default)]
struct Inner {
    accounts: HashMap<String, Account>,
    session: Option<String>,
    /// (owner, note) in creation order.
    notes: Vec<(String, Note)>,
    next_id: NoteId,
    failure: Option<ApiError>,
    requests: Vec<Request>,
}

/// In-memory stand-in for the notes API, for tests and running without a server.
///
/// Behaves like the real backend: a login opens a session, notes are scoped to the
/// session user, errors carry the same `detail` messages.
#[derive(Clone, Debug, Default)]
pub struct MemoryBackend {
    inner: Arc<Mutex<Inner>>,
}

fn http(status: u16, detail: &str) -> ApiError {
    ApiError::Http {
        status,
        detail: Some(detail.to_string()),
    }
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to register an account up front.
    pub fn with_account(self, username: &str, email: Option<&str>, password: &str) -> Self {
        self.lock().accounts.insert(
            username.to_string(),
            Account {
                email: email.map(str::to_string),
                password: password.to_string(),
            },
        );
        self
    }

    /// Make the next call fail with `err`, whatever it is.
    pub fn fail_next(&self, err: ApiError) {
        self.lock().failure = Some(err);
    }

    /// Every call received so far.
    pub fn requests(&self) -> Vec<Request> {
        self.lock().requests.clone()
    }

    /// Username of the open session, if any.
    pub fn session_user(&self) -> Option<String> {
        self.lock().session.clone()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Record the request and consume any injected failure.
    fn begin(&self, request: Request) -> Result<MutexGuard<'_, Inner>, ApiError> {
        let mut inner = self.lock();
        inner.requests.push(request);
        let failure = inner.failure.take();
        match failure {
            Some(err) => Err(err),
            None => Ok(inner),
        }
    }
}

impl Inner {
    fn user(&self, username: &str) -> User {
        User {
            username: username.to_string(),
            email: self.accounts.get(username).and_then(|a| a.email.clone()),
        }
    }

    fn owner(&self) -> Result<String, ApiError> {
        self.session
            .clone()
            .ok_or_else(|| http(403, "Authentication credentials were not provided."))
    }

    fn owned_note(&mut self, id: NoteId) -> Result<&mut Note, ApiError> {
        let owner = self.owner()?;
        self.notes
            .iter_mut()
            .find(|(o, n)| *o == owner && n.id == id)
            .map(|(_, n)| n)
            .ok_or_else(|| http(404, "Not found."))
    }
}

impl Backend for MemoryBackend {
    async fn login(&self, username: &str, password: &str) -> Result<AuthPayload, ApiError> {
        let mut inner = self.begin(Request::Login {
            username: username.to_string(),
        })?;
        let valid = inner
            .accounts
            .get(username)
            .is_some_and(|account| account.password == password);
        if !valid {
            return Err(http(400, "Invalid username or password."));
        }
        inner.session = Some(username.to_string());
        Ok(AuthPayload::Wrapped {
            user: inner.user(username),
        })
    }

    async fn logout(&self) -> Result<(), ApiError> {
        let mut inner = self.begin(Request::Logout)?;
        inner.session = None;
        Ok(())
    }

    async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthPayload, ApiError> {
        let mut inner = self.begin(Request::Register {
            username: username.to_string(),
            email: email.to_string(),
        })?;
        if username.is_empty() || password.is_empty() || inner.accounts.contains_key(username) {
            // Field errors only, no `detail`
            return Err(ApiError::Http {
                status: 400,
                detail: None,
            });
        }
        inner.accounts.insert(
            username.to_string(),
            Account {
                email: Some(email.to_string()).filter(|e| !e.is_empty()),
                password: password.to_string(),
            },
        );
        inner.session = Some(username.to_string());
        Ok(AuthPayload::Wrapped {
            user: inner.user(username),
        })
    }

    async fn fetch_notes(&self, query: Option<&str>) -> Result<Vec<Note>, ApiError> {
        let search = query.filter(|q| !q.is_empty()).map(str::to_lowercase);
        let inner = self.begin(Request::FetchNotes {
            search: query.filter(|q| !q.is_empty()).map(str::to_string),
        })?;
        let owner = inner.owner()?;
        Ok(inner
            .notes
            .iter()
            .filter(|(o, _)| *o == owner)
            .map(|(_, n)| n)
            .filter(|n| match &search {
                Some(q) => {
                    n.title.to_lowercase().contains(q) || n.content.to_lowercase().contains(q)
                }
                None => true,
            })
            .cloned()
            .collect())
    }

    async fn create_note(&self, note: &NoteDraft) -> Result<Note, ApiError> {
        let mut inner = self.begin(Request::CreateNote(note.clone()))?;
        let owner = inner.owner()?;
        inner.next_id += 1;
        let created = Note {
            id: inner.next_id,
            title: note.title.clone(),
            content: note.content.clone(),
            created: None,
            updated: None,
        };
        inner.notes.push((owner, created.clone()));
        Ok(created)
    }

    async fn update_note(&self, id: NoteId, note: &NoteDraft) -> Result<Note, ApiError> {
        let mut inner = self.begin(Request::UpdateNote(id, note.clone()))?;
        let stored = inner.owned_note(id)?;
        stored.title = note.title.clone();
        stored.content = note.content.clone();
        Ok(stored.clone())
    }

    async fn delete_note(&self, id: NoteId) -> Result<(), ApiError> {
        let mut inner = self.begin(Request::DeleteNote(id))?;
        inner.owned_note(id)?;
        inner.notes.retain(|(_, n)| n.id != id);
        Ok(())
    }
}
