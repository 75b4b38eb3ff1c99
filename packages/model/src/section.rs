//! Sections: ordered, styled bands of the page that own their elements.

use crate::element::{Alignment, Element};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Semantic section tag. The known variants drive default-element seeding;
/// anything else round-trips through [`SectionKind::Other`] and produces a
/// bare section with no seed elements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SectionKind {
    Hero,
    Features,
    About,
    Services,
    Gallery,
    Testimonials,
    Pricing,
    Team,
    Contact,
    Cta,
    Faq,
    Footer,
    Custom,
    Other(String),
}

impl SectionKind {
    pub fn as_str(&self) -> &str {
        match self {
            SectionKind::Hero => "hero",
            SectionKind::Features => "features",
            SectionKind::About => "about",
            SectionKind::Services => "services",
            SectionKind::Gallery => "gallery",
            SectionKind::Testimonials => "testimonials",
            SectionKind::Pricing => "pricing",
            SectionKind::Team => "team",
            SectionKind::Contact => "contact",
            SectionKind::Cta => "cta",
            SectionKind::Faq => "faq",
            SectionKind::Footer => "footer",
            SectionKind::Custom => "custom",
            SectionKind::Other(s) => s,
        }
    }

    /// Human-readable label: the kind string with its first letter upper-cased.
    pub fn display_name(&self) -> String {
        let s = self.as_str();
        let mut chars = s.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            None => String::new(),
        }
    }
}

impl FromStr for SectionKind {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "hero" => SectionKind::Hero,
            "features" => SectionKind::Features,
            "about" => SectionKind::About,
            "services" => SectionKind::Services,
            "gallery" => SectionKind::Gallery,
            "testimonials" => SectionKind::Testimonials,
            "pricing" => SectionKind::Pricing,
            "team" => SectionKind::Team,
            "contact" => SectionKind::Contact,
            "cta" => SectionKind::Cta,
            "faq" => SectionKind::Faq,
            "footer" => SectionKind::Footer,
            "custom" => SectionKind::Custom,
            other => SectionKind::Other(other.to_string()),
        })
    }
}

impl From<String> for SectionKind {
    fn from(s: String) -> Self {
        s.parse().unwrap_or(SectionKind::Custom)
    }
}

impl From<SectionKind> for String {
    fn from(kind: SectionKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Presentation attributes of a section. All optional; generation falls back
/// to documented defaults (padding 80px, text-align center).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SectionStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_gradient: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,

    /// Looping muted background video source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_video: Option<String>,

    /// Overlay painted over the background, behind the content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_overlay: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align: Option<Alignment>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,

    /// Animate the whole section as it scrolls into view.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation_enabled: Option<bool>,
}

impl SectionStyle {
    /// Shallow-merge `patch` into `self`, field by field.
    pub fn merge(&mut self, patch: SectionStyle) {
        macro_rules! take {
            ($field:ident) => {
                if patch.$field.is_some() {
                    self.$field = patch.$field;
                }
            };
        }
        take!(background_color);
        take!(background_gradient);
        take!(background_image);
        take!(background_video);
        take!(background_overlay);
        take!(padding);
        take!(text_align);
        take!(text_color);
        take!(animation_enabled);
    }

    pub fn padding(&self) -> &str {
        self.padding.as_deref().unwrap_or("80px")
    }

    pub fn text_align(&self) -> Alignment {
        self.text_align.unwrap_or(Alignment::Center)
    }

    pub fn animation_enabled(&self) -> bool {
        self.animation_enabled.unwrap_or(false)
    }

    pub fn background_video(&self) -> Option<&str> {
        self.background_video.as_deref().filter(|s| !s.is_empty())
    }
}

/// One visual band of the page. Owns its elements exclusively; duplication
/// always mints fresh ids for the section and everything inside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub id: String,

    /// User-facing label, shown in the navbar and the section list.
    pub name: String,

    #[serde(rename = "type")]
    pub kind: SectionKind,

    #[serde(rename = "settings", default)]
    pub style: SectionStyle,

    #[serde(default)]
    pub elements: Vec<Element>,
}

impl Section {
    pub fn find_element(&self, element_id: &str) -> Option<&Element> {
        self.elements.iter().find(|el| el.id == element_id)
    }

    pub fn find_element_mut(&mut self, element_id: &str) -> Option<&mut Element> {
        self.elements.iter_mut().find(|el| el.id == element_id)
    }

    /// Elements in render order: ascending `order`, stable so duplicate
    /// ranks keep their insertion sequence.
    pub fn sorted_elements(&self) -> Vec<&Element> {
        let mut elements: Vec<&Element> = self.elements.iter().collect();
        elements.sort_by_key(|el| el.order);
        elements
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{ElementKind, ElementStyle};

    fn element(id: &str, order: u32) -> Element {
        Element {
            id: id.to_string(),
            kind: ElementKind::Text,
            content: String::new(),
            order,
            position: Alignment::Center,
            style: ElementStyle::default(),
        }
    }

    #[test]
    fn test_kind_round_trips_unknown_strings() {
        let kind: SectionKind = "promo-banner".to_string().into();
        assert_eq!(kind, SectionKind::Other("promo-banner".to_string()));
        assert_eq!(String::from(kind), "promo-banner");
    }

    #[test]
    fn test_display_name_capitalizes() {
        assert_eq!(SectionKind::Hero.display_name(), "Hero");
        assert_eq!(
            SectionKind::Other("promo".to_string()).display_name(),
            "Promo"
        );
    }

    #[test]
    fn test_sorted_elements_is_stable_on_duplicate_orders() {
        let section = Section {
            id: "s1".to_string(),
            name: "Test".to_string(),
            kind: SectionKind::Custom,
            style: SectionStyle::default(),
            elements: vec![element("a", 1), element("b", 0), element("c", 1)],
        };

        let ids: Vec<&str> = section
            .sorted_elements()
            .iter()
            .map(|el| el.id.as_str())
            .collect();

        // "a" and "c" share order 1; insertion sequence breaks the tie.
        assert_eq!(ids, vec!["b", "a", "c"]);
    }
}
