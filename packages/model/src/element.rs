//! Elements: the leaf content units inside a section.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of element kinds. Seeding and rendering dispatch on this
/// exhaustively, so adding a kind is a compile-time-checked exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ElementKind {
    Heading,
    Text,
    Button,
    Image,
    Video,
    TermsLink,
    PolicyLink,
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ElementKind::Heading => "heading",
            ElementKind::Text => "text",
            ElementKind::Button => "button",
            ElementKind::Image => "image",
            ElementKind::Video => "video",
            ElementKind::TermsLink => "terms-link",
            ElementKind::PolicyLink => "policy-link",
        };
        f.write_str(s)
    }
}

/// Horizontal alignment, used for element position and section text-align.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    Center,
    Right,
}

impl Alignment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
        }
    }
}

impl Default for Alignment {
    fn default() -> Self {
        Alignment::Center
    }
}

/// Scroll-triggered entrance animation variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnimationKind {
    Fade,
    SlideUp,
    SlideDown,
    Scale,
    None,
}

impl AnimationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnimationKind::Fade => "fade",
            AnimationKind::SlideUp => "slide-up",
            AnimationKind::SlideDown => "slide-down",
            AnimationKind::Scale => "scale",
            AnimationKind::None => "none",
        }
    }
}

/// Presentation attributes of an element. Every field is optional; absence
/// means "inherit/default" and is never an error. Code generation falls back
/// to documented defaults for each field it reads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ElementStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<String>,

    /// Link target for button/terms/policy elements.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    /// Media source for image/video elements.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,

    /// Background-flagged media produce zero HTML nodes; they are expressed
    /// purely through generated CSS.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_background: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation_enabled: Option<bool>,

    #[serde(rename = "animationType", skip_serializing_if = "Option::is_none")]
    pub animation_kind: Option<AnimationKind>,
}

impl ElementStyle {
    /// Shallow-merge `patch` into `self`: fields present in the patch replace
    /// the existing value, absent fields are left untouched.
    pub fn merge(&mut self, patch: ElementStyle) {
        macro_rules! take {
            ($field:ident) => {
                if patch.$field.is_some() {
                    self.$field = patch.$field;
                }
            };
        }
        take!(font_size);
        take!(font_weight);
        take!(color);
        take!(background_color);
        take!(padding);
        take!(margin);
        take!(border_radius);
        take!(link);
        take!(src);
        take!(alt);
        take!(width);
        take!(height);
        take!(is_background);
        take!(animation_enabled);
        take!(animation_kind);
    }

    pub fn animation_enabled(&self) -> bool {
        self.animation_enabled.unwrap_or(false)
    }

    pub fn is_background(&self) -> bool {
        self.is_background.unwrap_or(false)
    }

    /// Link target, defaulting to a placeholder anchor.
    pub fn link(&self) -> &str {
        self.link.as_deref().unwrap_or("#")
    }

    /// Media source, if set to a non-empty value.
    pub fn src(&self) -> Option<&str> {
        self.src.as_deref().filter(|s| !s.is_empty())
    }
}

/// A single content unit inside a section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    /// Opaque identifier, stable for the element's lifetime.
    pub id: String,

    #[serde(rename = "type")]
    pub kind: ElementKind,

    /// Display text (ignored for image/video).
    pub content: String,

    /// Rank among siblings. Duplicates are tolerated; rendering uses a
    /// stable sort so ties keep insertion order.
    pub order: u32,

    pub position: Alignment,

    #[serde(rename = "settings", default)]
    pub style: ElementStyle,
}
