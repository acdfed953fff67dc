use api::{Note, NoteId};
use dioxus::prelude::*;

use crate::icons::{FaPen, FaTrashCan};
use crate::markdown::render_markdown;
use crate::Icon;

/// One note in the list, rendered as Markdown, with inline editing.
#[component]
pub fn NoteCard(
    note: Note,
    on_save: EventHandler<Note>,
    on_delete: EventHandler<NoteId>,
) -> Element {
    let mut editing = use_signal(|| false);
    let mut title = use_signal(String::new);
    let mut content = use_signal(String::new);

    // Start from the latest server copy every time editing opens
    let handle_edit = {
        let note = note.clone();
        move |_| {
            title.set(note.title.clone());
            content.set(note.content.clone());
            editing.set(true);
        }
    };

    let handle_save = {
        let note = note.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let mut edited = note.clone();
            edited.title = title().trim().to_string();
            edited.content = content();
            on_save.call(edited);
            editing.set(false);
        }
    };

    let id = note.id;
    let html = render_markdown(&note.content);

    rsx! {
        li {
            class: "note-card",
            if editing() {
                form {
                    class: "note-edit",
                    onsubmit: handle_save,
                    input {
                        r#type: "text",
                        value: title(),
                        oninput: move |evt: FormEvent| title.set(evt.value()),
                    }
                    textarea {
                        rows: "6",
                        value: content(),
                        oninput: move |evt: FormEvent| content.set(evt.value()),
                    }
                    div {
                        class: "form-actions",
                        button { class: "primary", r#type: "submit", "Save" }
                        button {
                            class: "secondary",
                            r#type: "button",
                            onclick: move |_| editing.set(false),
                            "Cancel"
                        }
                    }
                }
            } else {
                div {
                    class: "note-header",
                    h3 { class: "note-title", "{note.title}" }
                    div {
                        class: "note-actions",
                        button {
                            title: "Edit",
                            onclick: handle_edit,
                            Icon { icon: FaPen, width: 14, height: 14 }
                        }
                        button {
                            title: "Delete",
                            onclick: move |_| on_delete.call(id),
                            Icon { icon: FaTrashCan, width: 14, height: 14 }
                        }
                    }
                }
                div {
                    class: "note-content",
                    dangerous_inner_html: "{html}",
                }
                if let Some(updated) = &note.updated {
                    p { class: "note-meta", "Updated {updated}" }
                }
            }
        }
    }
}
