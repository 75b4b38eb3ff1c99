//! The page document: sections plus navbar and footer configuration.

use crate::section::Section;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Navbar position mode in the generated CSS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavbarPosition {
    Fixed,
    Sticky,
    Absolute,
}

impl NavbarPosition {
    pub fn as_str(&self) -> &'static str {
        match self {
            NavbarPosition::Fixed => "fixed",
            NavbarPosition::Sticky => "sticky",
            NavbarPosition::Absolute => "absolute",
        }
    }
}

/// Singleton navbar settings. Always present on a document; "disabled" is a
/// flag, not absence. Optional fields fall back to documented defaults
/// through the accessor methods.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NavbarConfig {
    pub enabled: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub transparent: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub blur: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub floating: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<NavbarPosition>,
}

impl Default for NavbarConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            background_color: None,
            transparent: None,
            blur: None,
            floating: None,
            border_radius: None,
            logo: None,
            position: None,
        }
    }
}

impl NavbarConfig {
    /// Shallow-merge `patch` into `self`, field by field. Fields absent from
    /// the patch keep their current value, including `enabled`.
    pub fn merge(&mut self, patch: NavbarPatch) {
        if let Some(enabled) = patch.enabled {
            self.enabled = enabled;
        }
        macro_rules! take {
            ($field:ident) => {
                if patch.$field.is_some() {
                    self.$field = patch.$field;
                }
            };
        }
        take!(background_color);
        take!(transparent);
        take!(blur);
        take!(floating);
        take!(border_radius);
        take!(logo);
        take!(position);
    }

    pub fn background_color(&self) -> &str {
        self.background_color.as_deref().unwrap_or("#1f2937")
    }

    pub fn transparent(&self) -> bool {
        self.transparent.unwrap_or(false)
    }

    pub fn blur(&self) -> bool {
        self.blur.unwrap_or(false)
    }

    pub fn floating(&self) -> bool {
        self.floating.unwrap_or(false)
    }

    pub fn border_radius(&self) -> &str {
        self.border_radius.as_deref().unwrap_or("0px")
    }

    pub fn position(&self) -> NavbarPosition {
        self.position.unwrap_or(NavbarPosition::Fixed)
    }

    pub fn logo(&self) -> Option<&str> {
        self.logo.as_deref().filter(|s| !s.is_empty())
    }
}

/// Partial navbar update. Every field, including `enabled`, is optional so
/// updates only touch what they name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NavbarPatch {
    pub enabled: Option<bool>,
    pub background_color: Option<String>,
    pub transparent: Option<bool>,
    pub blur: Option<bool>,
    pub floating: Option<bool>,
    pub border_radius: Option<String>,
    pub logo: Option<String>,
    pub position: Option<NavbarPosition>,
}

/// Singleton footer settings: visibility and targets for the terms and
/// privacy-policy links.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FooterConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_terms: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_policy: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub terms_link: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_link: Option<String>,
}

impl FooterConfig {
    /// Shallow-merge `patch` into `self`, field by field.
    pub fn merge(&mut self, patch: FooterConfig) {
        macro_rules! take {
            ($field:ident) => {
                if patch.$field.is_some() {
                    self.$field = patch.$field;
                }
            };
        }
        take!(show_terms);
        take!(show_policy);
        take!(terms_link);
        take!(policy_link);
    }

    pub fn show_terms(&self) -> bool {
        self.show_terms.unwrap_or(false)
    }

    pub fn show_policy(&self) -> bool {
        self.show_policy.unwrap_or(false)
    }

    pub fn terms_link(&self) -> &str {
        self.terms_link.as_deref().unwrap_or("#")
    }

    pub fn policy_link(&self) -> &str {
        self.policy_link.as_deref().unwrap_or("#")
    }
}

/// Structural validation failures. Duplicate element `order` values are
/// deliberately *not* an error; rendering tolerates them with a stable sort.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("duplicate section id: {0}")]
    DuplicateSectionId(String),

    #[error("duplicate element id: {0}")]
    DuplicateElementId(String),
}

/// The full page state and the unit of undo/redo snapshotting, template
/// loading, and save/load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageDocument {
    pub navbar: NavbarConfig,
    pub footer: FooterConfig,
    pub sections: Vec<Section>,
}

impl PageDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn find_section(&self, section_id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == section_id)
    }

    pub fn find_section_mut(&mut self, section_id: &str) -> Option<&mut Section> {
        self.sections.iter_mut().find(|s| s.id == section_id)
    }

    pub fn section_index(&self, section_id: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.id == section_id)
    }

    /// Check structural consistency: section ids unique across the document,
    /// element ids unique across *all* sections (not just within their own).
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut section_ids = HashSet::new();
        let mut element_ids = HashSet::new();

        for section in &self.sections {
            if !section_ids.insert(section.id.as_str()) {
                return Err(ValidationError::DuplicateSectionId(section.id.clone()));
            }
            for element in &section.elements {
                if !element_ids.insert(element.id.as_str()) {
                    return Err(ValidationError::DuplicateElementId(element.id.clone()));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{Alignment, Element, ElementKind, ElementStyle};
    use crate::section::{SectionKind, SectionStyle};

    fn section(id: &str, element_ids: &[&str]) -> Section {
        Section {
            id: id.to_string(),
            name: "Test".to_string(),
            kind: SectionKind::Custom,
            style: SectionStyle::default(),
            elements: element_ids
                .iter()
                .enumerate()
                .map(|(i, el_id)| Element {
                    id: el_id.to_string(),
                    kind: ElementKind::Text,
                    content: String::new(),
                    order: i as u32,
                    position: Alignment::Center,
                    style: ElementStyle::default(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_empty_document_is_valid() {
        assert!(PageDocument::new().validate().is_ok());
    }

    #[test]
    fn test_duplicate_section_id_rejected() {
        let doc = PageDocument {
            sections: vec![section("s1", &[]), section("s1", &[])],
            ..Default::default()
        };
        assert_eq!(
            doc.validate(),
            Err(ValidationError::DuplicateSectionId("s1".to_string()))
        );
    }

    #[test]
    fn test_cross_section_element_collision_rejected() {
        let doc = PageDocument {
            sections: vec![section("s1", &["el-1"]), section("s2", &["el-1"])],
            ..Default::default()
        };
        assert_eq!(
            doc.validate(),
            Err(ValidationError::DuplicateElementId("el-1".to_string()))
        );
    }

    #[test]
    fn test_navbar_accessors_fall_back_to_defaults() {
        let navbar = NavbarConfig::default();
        assert!(!navbar.enabled);
        assert_eq!(navbar.background_color(), "#1f2937");
        assert_eq!(navbar.border_radius(), "0px");
        assert_eq!(navbar.position(), NavbarPosition::Fixed);
        assert!(!navbar.transparent());
    }

    #[test]
    fn test_navbar_merge_keeps_unnamed_fields() {
        let mut navbar = NavbarConfig {
            enabled: true,
            background_color: Some("#000000".to_string()),
            ..Default::default()
        };

        navbar.merge(NavbarPatch {
            blur: Some(true),
            ..Default::default()
        });

        assert!(navbar.enabled);
        assert_eq!(navbar.background_color(), "#000000");
        assert!(navbar.blur());
    }

    #[test]
    fn test_document_json_round_trip() {
        let doc = PageDocument {
            navbar: NavbarConfig {
                enabled: true,
                transparent: Some(true),
                ..Default::default()
            },
            footer: FooterConfig {
                show_terms: Some(true),
                terms_link: Some("/terms".to_string()),
                ..Default::default()
            },
            sections: vec![section("s1", &["el-1", "el-2"])],
        };

        let json = serde_json::to_string(&doc).unwrap();
        let decoded: PageDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(doc, decoded);
    }
}
