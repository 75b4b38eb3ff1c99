//! HTML serializer: `PageDocument` → standalone `index.html`.
//!
//! Generation is deterministic (identical documents yield byte-identical
//! output) and total: every optional field falls back to a default, so
//! compilation never fails for a structurally valid document.

mod compiler;

#[cfg(test)]
mod tests;

pub use compiler::{compile_to_html, escape_html, CompileOptions};
