//! Web UI handlers - server-side rendering of the Dioxus pages.
//!
//! Each page renders a complete head/body document through the Shell
//! component: inline stylesheet plus the client scripts that fetch data
//! and drive the sidebar toggle and upload dialog. Handlers only add
//! the doctype and the html element.

pub mod components;
pub mod pages;

use axum::response::{Html, IntoResponse};
use dioxus::prelude::*;

use pages::{Home, Library};

fn page(body: String) -> Html<String> {
    Html(format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n{}</html>",
        body
    ))
}

/// GET / - Home page with service status
pub async fn home_page() -> impl IntoResponse {
    page(dioxus::ssr::render_element(rsx! { Home {} }))
}

/// GET /library - Video job library
pub async fn library_page() -> impl IntoResponse {
    page(dioxus::ssr::render_element(rsx! { Library {} }))
}
