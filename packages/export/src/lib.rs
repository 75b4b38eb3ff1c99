//! Site export: turn a [`PageDocument`](pagecraft_model::PageDocument) into a
//! deployable bundle of static files, on disk or inside a zip archive.

mod bundle;
mod scripts;

pub use bundle::{generate, write_to_dir, write_zip, ExportError, SiteBundle, ARCHIVE_NAME};
pub use pagecraft_compiler_html::CompileOptions;
pub use scripts::ANIMATIONS_JS;
