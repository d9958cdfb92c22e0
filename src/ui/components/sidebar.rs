//! Collapsible navigation sidebar for the web UI.
//!
//! The collapsed flag is owned by the shell; this component only emits
//! the toggle intent via `set_collapsed` and renders as a pure function
//! of its props plus the static entry list.

use dioxus::prelude::*;

/// Icon glyph for a navigation entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavIcon {
    Library,
}

/// A static descriptor of one sidebar link.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavEntry {
    pub label: &'static str,
    pub destination: &'static str,
    pub icon: NavIcon,
}

impl NavEntry {
    /// Exact path match. Destinations are unique, so at most one entry
    /// is active for any given path.
    pub fn is_active(&self, current_path: &str) -> bool {
        current_path == self.destination
    }
}

/// The fixed entry list. Not a runtime registry.
pub const NAV_ENTRIES: &[NavEntry] = &[NavEntry {
    label: "Library",
    destination: "/library",
    icon: NavIcon::Library,
}];

#[derive(Props, Clone, PartialEq)]
pub struct SidebarProps {
    /// Icons-only (collapsed) vs full-width (expanded) rendering mode
    pub collapsed: bool,
    /// The path currently being viewed, for active-link marking
    pub current_path: String,
    /// Called with the negated collapsed value when the toggle is activated
    pub set_collapsed: EventHandler<bool>,
}

/// Collapsible navigation rail: brand header, entry list, identity footer.
#[component]
pub fn Sidebar(props: SidebarProps) -> Element {
    let aside_class = if props.collapsed {
        "sidebar collapsed"
    } else {
        "sidebar"
    };

    rsx! {
        aside { class: "{aside_class}",
            div { class: "sidebar-header",
                if !props.collapsed {
                    a { class: "brand", href: "/",
                        span { class: "brand-mark", "CM" }
                        span { class: "brand-wordmark", "Crown Mercado" }
                    }
                }
                button {
                    class: "sidebar-toggle",
                    "aria-label": "Toggle sidebar",
                    onclick: move |_| props.set_collapsed.call(!props.collapsed),
                    MenuIcon {}
                }
            }

            nav { class: "sidebar-nav",
                for entry in NAV_ENTRIES {
                    if entry.is_active(&props.current_path) {
                        a {
                            class: "nav-entry active",
                            href: "{entry.destination}",
                            "aria-current": "page",
                            span { class: "nav-accent" }
                            span { class: "nav-icon", EntryIcon { icon: entry.icon } }
                            if !props.collapsed {
                                span { class: "nav-label", "{entry.label}" }
                            }
                        }
                    } else {
                        a {
                            class: "nav-entry",
                            href: "{entry.destination}",
                            span { class: "nav-icon", EntryIcon { icon: entry.icon } }
                            if !props.collapsed {
                                span { class: "nav-label", "{entry.label}" }
                            }
                        }
                    }
                }
            }

            div { class: "sidebar-footer",
                span { class: "avatar" }
                if !props.collapsed {
                    span { class: "identity", "Văn Đức Tân" }
                }
            }
        }
    }
}

/// Hamburger glyph for the collapse toggle.
#[component]
fn MenuIcon() -> Element {
    rsx! {
        svg {
            class: "icon",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            path { d: "M4 6h16M4 12h16M4 18h16" }
        }
    }
}

/// Icon glyph for a navigation entry.
#[component]
fn EntryIcon(icon: NavIcon) -> Element {
    match icon {
        NavIcon::Library => rsx! {
            svg {
                class: "icon",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                path { d: "M16 6l4 14M12 6v14M8 8v12M4 4v16" }
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_requires_exact_path_match() {
        let library = &NAV_ENTRIES[0];
        assert!(library.is_active("/library"));
        assert!(!library.is_active("/"));
        assert!(!library.is_active("/library/"));
        assert!(!library.is_active("/library/123"));
    }

    #[test]
    fn entry_list_is_library_only() {
        assert_eq!(NAV_ENTRIES.len(), 1);
        assert_eq!(NAV_ENTRIES[0].label, "Library");
        assert_eq!(NAV_ENTRIES[0].destination, "/library");
    }

    #[test]
    fn destinations_are_unique() {
        // Guarantees at most one entry can be active at a time.
        for (i, a) in NAV_ENTRIES.iter().enumerate() {
            for b in &NAV_ENTRIES[i + 1..] {
                assert_ne!(a.destination, b.destination);
            }
        }
    }
}
