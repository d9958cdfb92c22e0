//! Shell component wrapping all pages.
//!
//! Renders the full document head and body: inline stylesheet, the
//! sidebar (collapsed flag owned here, the sidebar itself is stateless),
//! the hidden upload dialog, and the client scripts. Page-specific
//! scripts ride along via the `scripts` prop.

use dioxus::prelude::*;

use super::sidebar::Sidebar;
use super::upload_modal::UploadModal;

/// Shared JavaScript utilities (XSS-safe escaping, etc.)
const SHARED_JS: &str = r#"
function esc(s) { return String(s || '').replace(/[&<>"']/g, c => ({'&':'&amp;','<':'&lt;','>':'&gt;','"':'&quot;',"'":'&#39;'})[c]); }
"#;

/// Sidebar toggle wiring. The document ships expanded; flipping the
/// `collapsed` class switches to the narrow icons-only mode via the
/// stylesheet rules below.
const SHELL_FUNCTIONS: &str = r#"
document.querySelector('.sidebar-toggle').addEventListener('click', () => {
    document.querySelector('.sidebar').classList.toggle('collapsed');
});
"#;

/// Inline stylesheet: dark palette and the two fixed sidebar widths.
pub const STYLE: &str = r#"
* { box-sizing: border-box; }
body { margin: 0; font-family: system-ui, sans-serif; background: #111; color: #eee; }
a { color: inherit; text-decoration: none; }
.shell { display: flex; min-height: 100vh; }
.sidebar { display: flex; flex-direction: column; width: 16rem; flex-shrink: 0; background: #1C1C1C; border-right: 1px solid #333333; }
.sidebar.collapsed { width: 5rem; }
.sidebar.collapsed .brand { display: none; }
.sidebar.collapsed .nav-label { display: none; }
.sidebar.collapsed .identity { display: none; }
.sidebar-header { display: flex; align-items: center; justify-content: space-between; height: 4rem; padding: 0 1rem; }
.sidebar.collapsed .sidebar-header { justify-content: center; }
.brand { display: flex; align-items: center; gap: 0.75rem; }
.brand-mark { display: flex; align-items: center; justify-content: center; width: 2rem; height: 2rem; border-radius: 0.25rem; background: #C8102E; color: #fff; font-weight: 900; font-style: italic; font-size: 0.7rem; }
.brand-wordmark { font-weight: 700; font-size: 0.85rem; letter-spacing: 0.02em; text-transform: uppercase; color: #fff; white-space: nowrap; }
.sidebar-toggle { padding: 0.5rem; background: none; border: none; border-radius: 9999px; color: #aaa; cursor: pointer; }
.sidebar-toggle:hover { background: rgba(255,255,255,0.1); }
.sidebar-nav { flex: 1; margin-top: 1rem; padding: 0 0.75rem; }
.nav-entry { position: relative; display: flex; align-items: center; gap: 1rem; padding: 0.75rem; border-radius: 0.5rem; color: #aaa; }
.nav-entry:hover { color: #fff; background: rgba(255,255,255,0.05); }
.nav-entry.active { color: #fff; }
.nav-entry.active .nav-icon { color: #C8102E; }
.nav-accent { position: absolute; left: -0.75rem; width: 0.25rem; height: 2rem; border-radius: 0 9999px 9999px 0; background: #C8102E; box-shadow: 0 0 10px #C8102E; }
.nav-label { font-size: 0.875rem; font-weight: 500; }
.nav-entry.active .nav-label { font-weight: 700; }
.sidebar.collapsed .nav-entry { justify-content: center; }
.icon { width: 1.25rem; height: 1.25rem; }
.sidebar-footer { display: flex; align-items: center; gap: 1rem; margin-bottom: 1rem; padding: 0.75rem; border-top: 1px solid #333333; color: #aaa; }
.sidebar.collapsed .sidebar-footer { justify-content: center; }
.avatar { width: 1.5rem; height: 1.5rem; flex-shrink: 0; border-radius: 9999px; border: 1px solid rgba(255,255,255,0.2); background: linear-gradient(45deg, #000, #C8102E); }
.identity { font-size: 0.875rem; font-weight: 500; white-space: nowrap; }
.content { flex: 1; padding: 1.5rem 2rem; display: flex; flex-direction: column; }
.content footer { margin-top: auto; padding-top: 1.5rem; color: #777; font-size: 0.8rem; }
.card { background: #1C1C1C; border: 1px solid #333333; border-radius: 0.5rem; padding: 1rem; margin-bottom: 1rem; }
.card-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(20rem, 1fr)); gap: 1rem; }
.btn { padding: 0.5rem 1rem; border: none; border-radius: 0.5rem; cursor: pointer; font-size: 0.875rem; }
.btn-primary { background: #C8102E; color: #fff; }
.btn-ghost { background: none; color: #aaa; border: 1px solid #333333; }
.badge { padding: 0.15rem 0.5rem; border-radius: 9999px; font-size: 0.75rem; }
.badge-uploaded { background: #333; color: #ccc; }
.badge-queued { background: #4a3b00; color: #ffd866; }
.badge-processing { background: #003b4a; color: #66d9ff; }
.badge-completed { background: #0a3d1f; color: #7ee2a8; }
.badge-failed { background: #4a0a14; color: #ff8097; }
.error { color: #ff8097; }
.muted { color: #888; }
.modal-overlay { position: fixed; inset: 0; display: flex; align-items: center; justify-content: center; background: rgba(0,0,0,0.7); }
.modal { width: 24rem; background: #1C1C1C; border: 1px solid #333333; border-radius: 0.5rem; padding: 1.5rem; }
.modal input { width: 100%; margin: 0.75rem 0; padding: 0.5rem; background: #111; border: 1px solid #333333; border-radius: 0.25rem; color: #eee; }
.modal-actions { display: flex; justify-content: flex-end; gap: 0.5rem; }
"#;

#[derive(Props, Clone, PartialEq)]
pub struct ShellProps {
    /// Page title (shown in browser tab)
    pub title: String,
    /// The path of the page being rendered, forwarded to the sidebar
    pub current_path: String,
    /// Page content
    pub children: Element,
    /// Optional additional scripts to include
    #[props(default)]
    pub scripts: Option<String>,
}

/// Shell layout component wrapping all pages.
#[component]
pub fn Shell(props: ShellProps) -> Element {
    let mut collapsed = use_signal(|| false);

    let version = env!("CARGO_PKG_VERSION");

    rsx! {
        head {
            meta { charset: "utf-8" }
            meta { name: "viewport", content: "width=device-width, initial-scale=1" }
            title { "{props.title} - One Click Video" }
            style { {STYLE} }
            script { dangerous_inner_html: SHARED_JS }
        }
        body {
            div { class: "shell",
                Sidebar {
                    collapsed: collapsed(),
                    current_path: props.current_path.clone(),
                    set_collapsed: move |next| collapsed.set(next),
                }
                main { class: "content",
                    {props.children}
                    footer {
                        small { class: "muted", "One Click Video v{version}" }
                    }
                }
            }

            UploadModal {}

            script { dangerous_inner_html: SHELL_FUNCTIONS }
            if let Some(scripts) = props.scripts {
                script { dangerous_inner_html: "{scripts}" }
            }
        }
    }
}
