//! Page components for the server-rendered web UI.
//!
//! Each page renders its document through the Shell component and
//! carries the client script that fills it with live data.

pub mod home;
pub mod library;

pub use home::Home;
pub use library::Library;
