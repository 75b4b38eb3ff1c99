use crate::scripts::ANIMATIONS_JS;
use pagecraft_compiler_css::compile_to_css;
use pagecraft_compiler_html::{compile_to_html, CompileOptions};
use pagecraft_model::PageDocument;
use std::fs;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

/// Default file name for [`write_zip`] callers that don't pick their own.
pub const ARCHIVE_NAME: &str = "my-site.zip";

const README_TXT: &str = "Place your images and assets here.\n";

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),
}

/// The three generated artifacts of an export. File names are part of the
/// contract: the HTML references `styles.css` and `animations.js` by name.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteBundle {
    pub html: String,
    pub css: String,
    pub js: String,
}

/// Generate the full bundle for a document. Deterministic: equal inputs
/// produce equal bundles.
pub fn generate(document: &PageDocument, options: &CompileOptions) -> SiteBundle {
    SiteBundle {
        html: compile_to_html(document, options),
        css: compile_to_css(document),
        js: ANIMATIONS_JS.to_string(),
    }
}

/// Write the bundle as loose files under `dir`, creating it (and an empty
/// `public/` assets directory) as needed.
pub fn write_to_dir(bundle: &SiteBundle, dir: &Path) -> Result<(), ExportError> {
    fs::create_dir_all(dir)?;
    fs::write(dir.join("index.html"), &bundle.html)?;
    fs::write(dir.join("styles.css"), &bundle.css)?;
    fs::write(dir.join("animations.js"), &bundle.js)?;

    let public = dir.join("public");
    fs::create_dir_all(&public)?;
    fs::write(public.join("README.txt"), README_TXT)?;

    tracing::info!(dir = %dir.display(), "site written");
    Ok(())
}

/// Write the bundle as a deflate-compressed zip archive at `path`.
pub fn write_zip(bundle: &SiteBundle, path: &Path) -> Result<(), ExportError> {
    let file = fs::File::create(path)?;
    let mut writer = zip::ZipWriter::new(file);
    let options = zip::write::SimpleFileOptions::default()
        .compression_method(zip::CompressionMethod::Deflated);

    writer.start_file("index.html", options)?;
    writer.write_all(bundle.html.as_bytes())?;
    writer.start_file("styles.css", options)?;
    writer.write_all(bundle.css.as_bytes())?;
    writer.start_file("animations.js", options)?;
    writer.write_all(bundle.js.as_bytes())?;
    writer.add_directory("public", options)?;
    writer.start_file("public/README.txt", options)?;
    writer.write_all(README_TXT.as_bytes())?;
    writer.finish()?;

    tracing::info!(path = %path.display(), "archive written");
    Ok(())
}
