use dioxus::prelude::*;
use ui::views::{AboutView, AuthView, NotesView};

mod not_found;
pub use not_found::NotFound;

#[component]
pub fn Auth() -> Element {
    rsx! { AuthView {} }
}

#[component]
pub fn Notes() -> Element {
    rsx! { NotesView {} }
}

#[component]
pub fn About() -> Element {
    rsx! { AboutView {} }
}
