//! Notes context and hooks for the UI.

use api::HttpBackend;
use dioxus::prelude::*;
use store::{NotesState, NotesStore};

/// The notes store as used by the app.
pub type Notes = NotesStore<HttpBackend>;

/// Get the current notes state.
pub fn use_notes() -> Signal<NotesState> {
    use_context::<Signal<NotesState>>()
}

/// Get the notes store to fetch, search and edit notes.
pub fn use_notes_store() -> Notes {
    use_context::<Notes>()
}

/// Provider component that owns the notes store.
#[component]
pub fn NotesProvider(children: Element) -> Element {
    let backend = use_context::<HttpBackend>();
    let notes_state = use_signal(NotesState::default);

    let notes = use_hook(move || {
        let notes = NotesStore::new(backend);
        notes.subscribe(move |next| {
            let mut notes_state = notes_state;
            notes_state.set(next.clone());
        });
        notes
    });

    use_context_provider(|| notes_state);
    use_context_provider(move || notes);

    rsx! {
        {children}
    }
}
