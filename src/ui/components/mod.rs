//! Shared components for the server-rendered pages.

pub mod shell;
pub mod sidebar;
pub mod upload_modal;

pub use shell::Shell;
pub use sidebar::Sidebar;
pub use upload_modal::UploadModal;
