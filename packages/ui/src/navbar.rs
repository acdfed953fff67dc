use dioxus::prelude::*;

use crate::auth::{use_auth, LogoutButton};

/// Top bar. `children` are the navigation links; the signed-in user and a logout
/// button are shown on the right.
#[component]
pub fn Navbar(children: Element) -> Element {
    let auth = use_auth();
    let state = auth();

    rsx! {
        nav {
            class: "navbar",
            div {
                class: "navbar-links",
                {children}
            }
            if let Some(user) = state.user() {
                div {
                    class: "navbar-user",
                    if let Some(err) = &state.error {
                        span { class: "navbar-error", "{err}" }
                    }
                    span { class: "navbar-username", "{user.username}" }
                    LogoutButton { class: "navbar-logout" }
                }
            }
        }
    }
}
