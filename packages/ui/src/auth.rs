//! Session context and hooks for the UI.

use api::HttpBackend;
use dioxus::prelude::*;
use store::{SessionState, SessionStore};

use crate::notes::use_notes_store;

/// The session store as used by the app.
pub type Session = SessionStore<HttpBackend>;

/// Get the current session state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// Get the session store to run login, register or logout.
pub fn use_session() -> Session {
    use_context::<Session>()
}

/// Provider component that owns the session store.
/// Expects an [`HttpBackend`] in context (provided at launch).
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let backend = use_context::<HttpBackend>();
    let auth_state = use_signal(SessionState::default);

    let session = use_hook(move || {
        let session = SessionStore::new(backend);
        session.subscribe(move |next| {
            let mut auth_state = auth_state;
            auth_state.set(next.clone());
        });
        session
    });

    use_context_provider(|| auth_state);
    use_context_provider(move || session);

    rsx! {
        {children}
    }
}

/// Button to log out the current user.
///
/// The notes list is dropped once the server confirms the logout.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let session = use_session();
    let notes = use_notes_store();

    let onclick = move |_| {
        let session = session.clone();
        let notes = notes.clone();
        async move {
            match session.logout().await {
                Ok(()) => notes.clear(),
                Err(e) => tracing::debug!("Keeping notes after failed logout: {}", e),
            }
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
