//! Built-in template catalog: ready-made page documents organized by
//! category and complexity tier. Within a category the robust tier extends
//! the medium one, so upgrading a template only ever adds sections.

mod catalog;

use pagecraft_model::PageDocument;
use serde::{Deserialize, Serialize};

pub use catalog::catalog;

/// What kind of site a template targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateCategory {
    Presell,
    Landing,
    Homepage,
    Blog,
}

/// How much structure a template ships with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateComplexity {
    Minimal,
    Medium,
    Robust,
}

/// One catalog entry. `config` is a complete, valid document ready to be
/// loaded into an editing session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: String,
    pub name: String,
    pub category: TemplateCategory,
    pub complexity: TemplateComplexity,
    /// Emoji used as a lightweight visual marker in pickers.
    pub thumbnail: String,
    pub config: PageDocument,
}

/// Catalog entries in a category, in catalog order.
pub fn by_category(category: TemplateCategory) -> Vec<Template> {
    catalog()
        .into_iter()
        .filter(|t| t.category == category)
        .collect()
}

/// Look up a single template by its id.
pub fn by_id(id: &str) -> Option<Template> {
    catalog().into_iter().find(|t| t.id == id)
}
