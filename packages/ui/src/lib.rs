//! This crate contains all shared UI for the workspace.
//!
//! Stores from the `store` crate are created once by [`AuthProvider`] and
//! [`NotesProvider`], put into context, and mirrored into signals so components
//! re-render on every state change.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod views;

mod auth;
pub use auth::{use_auth, use_session, AuthProvider, LogoutButton, Session};

mod notes;
pub use notes::{use_notes, use_notes_store, Notes, NotesProvider};

mod navbar;
pub use navbar::Navbar;

mod markdown;
pub use markdown::render_markdown;

mod note_card;
pub use note_card::NoteCard;

mod new_note_form;
pub use new_note_form::NewNoteForm;

/// Session and notes stores for everything below.
#[component]
pub fn StoreProvider(children: Element) -> Element {
    rsx! {
        AuthProvider {
            NotesProvider {
                {children}
            }
        }
    }
}
