//! Home page - service status overview.

use dioxus::prelude::*;

use crate::ui::components::Shell;

/// Client-side JavaScript for the Home page.
const HOME_SCRIPT: &str = r#"
async function loadStatus() {
    const card = document.querySelector('#status');
    try {
        const info = await fetch('/health').then(r => r.json());
        card.innerHTML =
            '<p>Service: ' + esc(info.service) + ' v' + esc(info.version) + '</p>' +
            '<p class="muted">Environment: ' + esc(info.env) + ', up ' + Math.round(info.uptime_secs) + 's</p>';
    } catch (e) {
        card.innerHTML = '<p class="error">Service unreachable: ' + esc(e.message) + '</p>';
    }
}

loadStatus();
"#;

/// Home page component.
#[component]
pub fn Home() -> Element {
    rsx! {
        Shell {
            title: "Home".to_string(),
            current_path: "/".to_string(),
            scripts: Some(HOME_SCRIPT.to_string()),

            h1 { "One Click Video" }
            p { class: "muted", "Upload a video and let the pipeline do the rest." }

            div { class: "card", id: "status",
                p { class: "muted", "Checking service status..." }
            }

            a { class: "btn btn-primary", href: "/library", "Open Library" }
        }
    }
}
