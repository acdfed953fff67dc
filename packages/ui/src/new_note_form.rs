use dioxus::prelude::*;

/// Inline form for creating a new note. Emits `(title, content)`.
#[component]
pub fn NewNoteForm(on_create: EventHandler<(String, String)>) -> Element {
    let mut title = use_signal(String::new);
    let mut content = use_signal(String::new);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let t = title().trim().to_string();
        if t.is_empty() {
            return;
        }
        on_create.call((t, content()));
        title.set(String::new());
        content.set(String::new());
    };

    rsx! {
        form {
            class: "new-note-form",
            onsubmit: handle_submit,
            h2 { "New note" }
            input {
                r#type: "text",
                placeholder: "Title",
                value: title(),
                oninput: move |evt: FormEvent| title.set(evt.value()),
            }
            textarea {
                rows: "4",
                placeholder: "Write something... (Markdown supported)",
                value: content(),
                oninput: move |evt: FormEvent| content.set(evt.value()),
            }
            div {
                class: "form-actions",
                button { class: "primary", r#type: "submit", "Add note" }
            }
        }
    }
}
