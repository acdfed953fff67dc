//! Login / registration page.

use dioxus::prelude::*;

use crate::auth::{use_auth, use_session};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AuthMode {
    Login,
    Register,
}

/// Sign-in and sign-up forms sharing one page.
///
/// Nothing navigates from here: once the session is authenticated the route guard
/// moves the user to the notes page.
#[component]
pub fn AuthView() -> Element {
    let session = use_session();
    let auth = use_auth();
    let mut mode = use_signal(|| AuthMode::Login);
    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let session = session.clone();
        async move {
            let (u, e, p) = (username(), email(), password());
            match mode() {
                AuthMode::Login => session.login(&u, &p).await,
                AuthMode::Register => session.register(&u, &e, &p).await,
            }
            password.set(String::new());
        }
    };

    let state = auth();
    let (login_tab, register_tab) = match mode() {
        AuthMode::Login => ("tab tab--active", "tab"),
        AuthMode::Register => ("tab", "tab tab--active"),
    };
    let submit_label = match (state.loading, mode()) {
        (true, _) => "Please wait...",
        (false, AuthMode::Login) => "Sign in",
        (false, AuthMode::Register) => "Create account",
    };

    rsx! {
        div {
            class: "auth-page",

            h1 { "Notes" }

            div {
                class: "auth-tabs",
                button {
                    class: login_tab,
                    onclick: move |_| mode.set(AuthMode::Login),
                    "Sign in"
                }
                button {
                    class: register_tab,
                    onclick: move |_| mode.set(AuthMode::Register),
                    "Register"
                }
            }

            form {
                class: "auth-form",
                onsubmit: handle_submit,

                if let Some(err) = &state.error {
                    div { class: "form-error", "{err}" }
                }

                input {
                    r#type: "text",
                    placeholder: "Username",
                    autocomplete: "username",
                    value: username(),
                    oninput: move |evt: FormEvent| username.set(evt.value()),
                }

                if mode() == AuthMode::Register {
                    input {
                        r#type: "email",
                        placeholder: "Email",
                        value: email(),
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }
                }

                input {
                    r#type: "password",
                    placeholder: "Password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                button {
                    class: "primary",
                    r#type: "submit",
                    disabled: state.loading,
                    "{submit_label}"
                }
            }
        }
    }
}
