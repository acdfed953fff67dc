//! The notes page: search, create, edit and delete.

use api::{Note, NoteId};
use dioxus::prelude::*;

use crate::icons::FaMagnifyingGlass;
use crate::notes::{use_notes, use_notes_store};
use crate::{Icon, NewNoteForm, NoteCard};

#[component]
pub fn NotesView() -> Element {
    let store = use_notes_store();
    let notes = use_notes();

    // Load with the held filter on mount
    let loader = store.clone();
    let _loader = use_resource(move || {
        let store = loader.clone();
        async move { store.refresh().await }
    });

    let search_store = store.clone();
    let handle_search = move |evt: FormEvent| {
        evt.prevent_default();
        let store = search_store.clone();
        async move { store.refresh().await }
    };

    let filter_store = store.clone();
    let handle_filter = move |evt: FormEvent| filter_store.set_search(evt.value());

    // Write failures are logged by the store and not shown
    let create_store = store.clone();
    let handle_create = move |(title, content): (String, String)| {
        let store = create_store.clone();
        spawn(async move {
            let _ = store.create_note(&title, &content).await;
        });
    };

    let save_store = store.clone();
    let handle_save = use_callback(move |note: Note| {
        let store = save_store.clone();
        spawn(async move {
            let _ = store.update_note(&note).await;
        });
    });

    let delete_store = store.clone();
    let handle_delete = use_callback(move |id: NoteId| {
        let store = delete_store.clone();
        spawn(async move {
            let _ = store.delete_note(id).await;
        });
    });

    let state = notes();
    let empty = !state.loading && state.error.is_none() && state.notes.is_empty();

    rsx! {
        div {
            class: "notes-page",

            form {
                class: "notes-search",
                onsubmit: handle_search,
                input {
                    r#type: "search",
                    placeholder: "Search notes",
                    value: "{state.search}",
                    oninput: handle_filter,
                }
                button {
                    r#type: "submit",
                    title: "Search",
                    Icon { icon: FaMagnifyingGlass, width: 14, height: 14 }
                }
            }

            NewNoteForm { on_create: handle_create }

            if state.loading {
                p { class: "notes-status", "Loading..." }
            }
            if let Some(err) = &state.error {
                div { class: "form-error", "{err}" }
            }
            if empty {
                p { class: "notes-status", "No notes yet." }
            }

            ul {
                class: "notes-list",
                for note in state.notes.iter() {
                    NoteCard {
                        key: "{note.id}",
                        note: note.clone(),
                        on_save: handle_save,
                        on_delete: handle_delete,
                    }
                }
            }
        }
    }
}
