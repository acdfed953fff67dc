mod auth;
pub use auth::AuthView;

mod notes;
pub use notes::NotesView;

mod about;
pub use about::AboutView;
