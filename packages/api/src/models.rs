//! # Wire models shared by the backend and the stores
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`User`] | The authenticated principal. `username` is required, `email` optional. |
//! | [`Note`] | A note as the server returns it. `created`/`updated` are opaque strings and never parsed. |
//! | [`NoteDraft`] | The `{title, content}` body sent on create and update. |
//! | [`AuthPayload`] | Success body of login/register: either `{"user": {...}}` or the user object itself. |

use serde::{Deserialize, Serialize};

/// Server-assigned note identifier.
pub type NoteId = i64;

/// The authenticated user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl User {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            email: None,
        }
    }

    /// Builder method to set the email.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}

/// A note owned by the current user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
}

impl Note {
    /// The writable part of the note, as sent on update.
    pub fn draft(&self) -> NoteDraft {
        NoteDraft {
            title: self.title.clone(),
            content: self.content.clone(),
        }
    }
}

/// Request body for creating or fully replacing a note.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
}

impl NoteDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

/// Success body of the login and register endpoints.
///
/// The nested form wins when both would match, so `{"user": {...}, "username": ...}`
/// resolves to the nested user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AuthPayload {
    Wrapped { user: User },
    Bare(User),
}

impl AuthPayload {
    pub fn into_user(self) -> User {
        match self {
            AuthPayload::Wrapped { user } | AuthPayload::Bare(user) => user,
        }
    }
}

#[derive(Serialize)]
pub(crate) struct LoginBody<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Serialize)]
pub(crate) struct RegisterBody<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}
