//! Upload dialog - creates a new video job.

use dioxus::prelude::*;

/// Hidden overlay collecting an input file path for a new job.
///
/// Ships with the document but stays `display: none` until the Library
/// script opens it; the same script wires cancel and submit.
#[component]
pub fn UploadModal() -> Element {
    rsx! {
        div {
            id: "upload-modal",
            class: "modal-overlay",
            style: "display: none;",
            div { class: "modal",
                h2 { "Upload video" }
                p { class: "muted", "Path of the uploaded source file" }
                input {
                    id: "upload-path",
                    r#type: "text",
                    placeholder: "/uploads/clip.mp4",
                }
                p {
                    id: "upload-error",
                    class: "error",
                    style: "display: none;",
                }
                div { class: "modal-actions",
                    button { id: "upload-cancel", class: "btn btn-ghost", "Cancel" }
                    button { id: "upload-submit", class: "btn btn-primary", "Create job" }
                }
            }
        }
    }
}
