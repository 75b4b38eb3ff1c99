pub mod export;
pub mod init;
pub mod projects;
pub mod templates;

pub use export::{export, ExportArgs};
pub use init::{init, InitArgs};
pub use projects::{projects, ProjectsCommand};
pub use templates::{templates, TemplatesArgs};
