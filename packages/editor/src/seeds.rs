//! Default content for freshly created sections and elements.
//!
//! Every section kind seeds a fixed set of starter elements so a new section
//! is never an empty band the user has to assemble from scratch. Unknown
//! kinds produce a bare section.

use pagecraft_model::{
    Alignment, AnimationKind, Element, ElementKind, ElementStyle, FooterConfig, IdGenerator,
    Section, SectionKind, SectionStyle,
};

/// Build a new element of `kind` with its per-kind content and style defaults.
pub fn new_element(kind: ElementKind, order: u32, ids: &mut IdGenerator) -> Element {
    let content = match kind {
        ElementKind::Heading => "New Heading",
        ElementKind::Text => "New text here",
        ElementKind::Button => "Click Here",
        ElementKind::TermsLink => "Terms of Use",
        ElementKind::PolicyLink => "Privacy Policy",
        ElementKind::Image | ElementKind::Video => "",
    };

    let mut style = ElementStyle {
        font_size: Some(
            match kind {
                ElementKind::Heading => "32px",
                _ => "16px",
            }
            .to_string(),
        ),
        font_weight: Some(
            match kind {
                ElementKind::Heading => "bold",
                _ => "normal",
            }
            .to_string(),
        ),
        color: Some("inherit".to_string()),
        animation_enabled: Some(false),
        animation_kind: Some(AnimationKind::Fade),
        ..Default::default()
    };

    match kind {
        ElementKind::Button => {
            style.background_color = Some("#6366f1".to_string());
            style.color = Some("#ffffff".to_string());
            style.padding = Some("12px 24px".to_string());
            style.border_radius = Some("8px".to_string());
            style.link = Some("#".to_string());
        }
        ElementKind::TermsLink | ElementKind::PolicyLink => {
            style.link = Some("#".to_string());
        }
        ElementKind::Image => {
            style.width = Some("100%".to_string());
            style.height = Some("auto".to_string());
            style.is_background = Some(false);
        }
        ElementKind::Video => {
            style.width = Some("100%".to_string());
            style.is_background = Some(false);
        }
        ElementKind::Heading | ElementKind::Text => {}
    }

    Element {
        id: ids.element_id(),
        kind,
        content: content.to_string(),
        order,
        position: Alignment::Center,
        style,
    }
}

fn element_with(
    kind: ElementKind,
    order: u32,
    content: &str,
    ids: &mut IdGenerator,
    tweak: impl FnOnce(&mut ElementStyle),
) -> Element {
    let mut element = new_element(kind, order, ids);
    element.content = content.to_string();
    tweak(&mut element.style);
    element
}

/// Build a complete section of `kind`: fresh id, capitalized name, default
/// style, and the kind's seed elements. The footer section mirrors the
/// current [`FooterConfig`] with terms/policy link elements.
pub fn seeded_section(
    kind: SectionKind,
    footer: &FooterConfig,
    ids: &mut IdGenerator,
) -> Section {
    let mut style = SectionStyle {
        background_color: Some("transparent".to_string()),
        padding: Some("80px".to_string()),
        text_align: Some(Alignment::Center),
        animation_enabled: Some(false),
        ..Default::default()
    };

    let elements = match &kind {
        SectionKind::Hero => {
            style.padding = Some("120px".to_string());
            style.background_gradient =
                Some("linear-gradient(135deg, #667eea 0%, #764ba2 100%)".to_string());
            vec![
                element_with(ElementKind::Heading, 0, "Welcome to your site", ids, |s| {
                    s.font_size = Some("48px".to_string())
                }),
                element_with(
                    ElementKind::Text,
                    1,
                    "An amazing description for your project",
                    ids,
                    |s| s.font_size = Some("18px".to_string()),
                ),
                element_with(ElementKind::Button, 2, "Get Started", ids, |_| {}),
            ]
        }
        SectionKind::Features => vec![
            element_with(ElementKind::Heading, 0, "Our Features", ids, |s| {
                s.font_size = Some("36px".to_string())
            }),
            element_with(ElementKind::Text, 1, "Discover everything we offer", ids, |_| {}),
        ],
        SectionKind::Contact => vec![
            element_with(ElementKind::Heading, 0, "Get in Touch", ids, |s| {
                s.font_size = Some("36px".to_string())
            }),
            element_with(ElementKind::Text, 1, "We are here to help", ids, |_| {}),
        ],
        SectionKind::Gallery => vec![element_with(ElementKind::Heading, 0, "Our Gallery", ids, |s| {
            s.font_size = Some("36px".to_string())
        })],
        SectionKind::Testimonials => vec![element_with(
            ElementKind::Heading,
            0,
            "What our clients say",
            ids,
            |s| s.font_size = Some("36px".to_string()),
        )],
        SectionKind::Pricing => vec![
            element_with(ElementKind::Heading, 0, "Our Plans", ids, |s| {
                s.font_size = Some("36px".to_string())
            }),
            element_with(ElementKind::Text, 1, "Choose the best plan for you", ids, |_| {}),
        ],
        SectionKind::Cta => {
            style.background_gradient =
                Some("linear-gradient(135deg, #f093fb 0%, #f5576c 100%)".to_string());
            vec![
                element_with(ElementKind::Heading, 0, "Ready to get started?", ids, |s| {
                    s.font_size = Some("36px".to_string())
                }),
                element_with(ElementKind::Button, 1, "Contact Us", ids, |s| {
                    s.padding = Some("16px 48px".to_string())
                }),
            ]
        }
        SectionKind::Footer => {
            style.background_color = Some("#1f2937".to_string());
            style.padding = Some("40px".to_string());
            let mut elements = vec![element_with(
                ElementKind::Text,
                0,
                "© 2024 Your Company. All rights reserved.",
                ids,
                |s| s.font_size = Some("14px".to_string()),
            )];
            if footer.show_terms() {
                elements.push(element_with(ElementKind::TermsLink, 1, "Terms of Use", ids, |s| {
                    s.link = Some(footer.terms_link().to_string())
                }));
            }
            if footer.show_policy() {
                elements.push(element_with(
                    ElementKind::PolicyLink,
                    2,
                    "Privacy Policy",
                    ids,
                    |s| s.link = Some(footer.policy_link().to_string()),
                ));
            }
            elements
        }
        // No starter content for the remaining kinds.
        SectionKind::About
        | SectionKind::Services
        | SectionKind::Team
        | SectionKind::Faq
        | SectionKind::Custom
        | SectionKind::Other(_) => vec![],
    };

    Section {
        id: ids.section_id(),
        name: kind.display_name(),
        kind,
        style,
        elements,
    }
}
