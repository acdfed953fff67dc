//! # Client-side state for the notes app
//!
//! The stores own the state the UI renders from and are the only callers of an
//! [`api::Backend`]. They know nothing about Dioxus: a UI layer subscribes to state
//! changes and mirrors them into its own reactive primitives.
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`session`] | [`SessionStore`], the Anonymous ↔ Authenticated state machine |
//! | [`notes`] | [`NotesStore`], the note list, search filter and CRUD with re-fetch |
//! | [`guard`] | [`guard()`](guard::guard), the route authorization decision |
//!
//! Stores are cheap to clone; clones share state. They are single-threaded
//! (`Rc`-based): operations run on the UI task and overlapping calls interleave at
//! their `.await` points, the last response to resolve wins.

pub mod guard;
pub mod notes;
pub mod session;

mod watch;

pub use guard::{guard, Navigation, RouteMeta, AUTH_PATH, NOTES_PATH};
pub use notes::{NotesState, NotesStore, FETCH_FAILED};
pub use session::{
    SessionPhase, SessionState, SessionStore, LOGIN_FAILED, LOGOUT_FAILED, REGISTER_FAILED,
};
