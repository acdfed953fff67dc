use dioxus::prelude::*;

#[component]
pub fn AboutView() -> Element {
    rsx! {
        div {
            class: "about-page",
            h1 { "About" }
            p {
                "A small client for keeping text notes on a remote server. "
                "Sign in, write notes in Markdown, search them and keep them tidy."
            }
            p {
                "Notes live on the server; nothing is stored in the browser "
                "besides the session cookie."
            }
        }
    }
}
