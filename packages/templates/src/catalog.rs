//! The preset data itself. Section and element ids here are static; loading
//! a template replaces the whole document, so they never collide with
//! generated ids.

use crate::{Template, TemplateCategory, TemplateComplexity};
use pagecraft_model::{
    Alignment, AnimationKind, Element, ElementKind, ElementStyle, FooterConfig, NavbarConfig,
    NavbarPosition, PageDocument, Section, SectionKind, SectionStyle,
};

fn default_navbar() -> NavbarConfig {
    NavbarConfig {
        enabled: true,
        background_color: Some("#1f2937".to_string()),
        transparent: Some(false),
        blur: Some(false),
        floating: Some(false),
        border_radius: Some("0px".to_string()),
        position: Some(NavbarPosition::Fixed),
        logo: None,
    }
}

fn default_footer() -> FooterConfig {
    FooterConfig {
        show_terms: Some(true),
        show_policy: Some(true),
        terms_link: Some("#".to_string()),
        policy_link: Some("#".to_string()),
    }
}

fn document(navbar: NavbarConfig, sections: Vec<Section>) -> PageDocument {
    PageDocument {
        navbar,
        footer: default_footer(),
        sections,
    }
}

fn section(
    id: &str,
    name: &str,
    kind: SectionKind,
    style: SectionStyle,
    elements: Vec<Element>,
) -> Section {
    Section {
        id: id.to_string(),
        name: name.to_string(),
        kind,
        style,
        elements,
    }
}

fn solid(color: &str, padding: &str, align: Alignment) -> SectionStyle {
    SectionStyle {
        background_color: Some(color.to_string()),
        padding: Some(padding.to_string()),
        text_align: Some(align),
        ..Default::default()
    }
}

fn gradient(value: &str, padding: &str, align: Alignment) -> SectionStyle {
    SectionStyle {
        background_gradient: Some(value.to_string()),
        padding: Some(padding.to_string()),
        text_align: Some(align),
        ..Default::default()
    }
}

fn el(
    id: &str,
    kind: ElementKind,
    content: &str,
    order: u32,
    position: Alignment,
    style: ElementStyle,
) -> Element {
    Element {
        id: id.to_string(),
        kind,
        content: content.to_string(),
        order,
        position,
        style,
    }
}

fn heading_style(size: &str, weight: &str, color: &str) -> ElementStyle {
    ElementStyle {
        font_size: Some(size.to_string()),
        font_weight: Some(weight.to_string()),
        color: Some(color.to_string()),
        ..Default::default()
    }
}

fn text_style(size: &str, color: &str) -> ElementStyle {
    ElementStyle {
        font_size: Some(size.to_string()),
        color: Some(color.to_string()),
        ..Default::default()
    }
}

fn button_style(bg: &str, color: &str, padding: &str, radius: &str) -> ElementStyle {
    ElementStyle {
        background_color: Some(bg.to_string()),
        color: Some(color.to_string()),
        padding: Some(padding.to_string()),
        border_radius: Some(radius.to_string()),
        link: Some("#".to_string()),
        ..Default::default()
    }
}

fn animated(base: ElementStyle, kind: AnimationKind) -> ElementStyle {
    ElementStyle {
        animation_enabled: Some(true),
        animation_kind: Some(kind),
        ..base
    }
}

fn presell_minimal() -> Vec<Section> {
    vec![
        section(
            "hero-1",
            "Hero",
            SectionKind::Hero,
            SectionStyle {
                text_color: Some("#ffffff".to_string()),
                ..solid("#111827", "100px", Alignment::Center)
            },
            vec![
                el(
                    "el-1",
                    ElementKind::Heading,
                    "Discover the Secret to [Main Benefit]",
                    0,
                    Alignment::Center,
                    animated(heading_style("42px", "bold", "#ffffff"), AnimationKind::Fade),
                ),
                el(
                    "el-2",
                    ElementKind::Text,
                    "A powerful line that sparks curiosity and desire",
                    1,
                    Alignment::Center,
                    animated(text_style("18px", "#9ca3af"), AnimationKind::SlideUp),
                ),
                el(
                    "el-3",
                    ElementKind::Button,
                    "I WANT TO KNOW MORE",
                    2,
                    Alignment::Center,
                    animated(
                        button_style("#10b981", "#ffffff", "16px 48px", "8px"),
                        AnimationKind::Scale,
                    ),
                ),
            ],
        ),
        section(
            "content-1",
            "Content",
            SectionKind::Features,
            SectionStyle {
                text_color: Some("#111827".to_string()),
                ..solid("#ffffff", "80px", Alignment::Center)
            },
            vec![
                el(
                    "el-4",
                    ElementKind::Heading,
                    "Why do you need this?",
                    0,
                    Alignment::Center,
                    heading_style("32px", "bold", "#111827"),
                ),
                el(
                    "el-5",
                    ElementKind::Text,
                    "Explain the benefits and how they will transform your customer's life",
                    1,
                    Alignment::Center,
                    text_style("16px", "#4b5563"),
                ),
            ],
        ),
        section(
            "cta-1",
            "Final CTA",
            SectionKind::Cta,
            gradient(
                "linear-gradient(135deg, #10b981 0%, #059669 100%)",
                "80px",
                Alignment::Center,
            ),
            vec![
                el(
                    "el-6",
                    ElementKind::Heading,
                    "Don't Miss This Opportunity!",
                    0,
                    Alignment::Center,
                    heading_style("36px", "bold", "#ffffff"),
                ),
                el(
                    "el-7",
                    ElementKind::Button,
                    "GET ACCESS NOW",
                    1,
                    Alignment::Center,
                    button_style("#ffffff", "#10b981", "18px 56px", "8px"),
                ),
            ],
        ),
    ]
}

fn presell_medium() -> Vec<Section> {
    vec![
        section(
            "hero-1",
            "Hero",
            SectionKind::Hero,
            gradient(
                "linear-gradient(135deg, #1e3a8a 0%, #3730a3 100%)",
                "120px",
                Alignment::Center,
            ),
            vec![
                el(
                    "el-1",
                    ElementKind::Text,
                    "🔥 EXCLUSIVE OFFER",
                    0,
                    Alignment::Center,
                    text_style("14px", "#fbbf24"),
                ),
                el(
                    "el-2",
                    ElementKind::Heading,
                    "The Secret 7-Figure Strategy",
                    1,
                    Alignment::Center,
                    heading_style("48px", "bold", "#ffffff"),
                ),
                el(
                    "el-3",
                    ElementKind::Text,
                    "Learn how ordinary people are making over $100,000 a month working from home",
                    2,
                    Alignment::Center,
                    text_style("20px", "#e0e7ff"),
                ),
                el(
                    "el-4",
                    ElementKind::Button,
                    "REVEAL THE METHOD",
                    3,
                    Alignment::Center,
                    button_style("#fbbf24", "#1e3a8a", "18px 56px", "12px"),
                ),
            ],
        ),
        section(
            "proof-1",
            "Social Proof",
            SectionKind::Testimonials,
            solid("#f3f4f6", "80px", Alignment::Center),
            vec![
                el(
                    "el-5",
                    ElementKind::Heading,
                    "+5,000 People Have Already Transformed Their Lives",
                    0,
                    Alignment::Center,
                    heading_style("32px", "bold", "#111827"),
                ),
                el(
                    "el-6",
                    ElementKind::Text,
                    "\"This method completely changed my finances. Within 3 months I was making 5 figures!\"",
                    1,
                    Alignment::Center,
                    text_style("18px", "#4b5563"),
                ),
            ],
        ),
        section(
            "benefits-1",
            "Benefits",
            SectionKind::Features,
            solid("#ffffff", "80px", Alignment::Center),
            vec![
                el(
                    "el-7",
                    ElementKind::Heading,
                    "What You Will Receive:",
                    0,
                    Alignment::Center,
                    heading_style("32px", "bold", "#111827"),
                ),
                el(
                    "el-8",
                    ElementKind::Text,
                    "✅ Module 1 - Complete Strategy\n✅ Module 2 - Secret Tools\n✅ Module 3 - Full Automation\n✅ Exclusive Bonuses",
                    1,
                    Alignment::Center,
                    text_style("18px", "#4b5563"),
                ),
            ],
        ),
        section(
            "urgency-1",
            "Urgency",
            SectionKind::Cta,
            solid("#dc2626", "60px", Alignment::Center),
            vec![
                el(
                    "el-9",
                    ElementKind::Heading,
                    "⏰ LIMITED SPOTS!",
                    0,
                    Alignment::Center,
                    heading_style("36px", "bold", "#ffffff"),
                ),
                el(
                    "el-10",
                    ElementKind::Text,
                    "Only 47 spots left. Claim yours now!",
                    1,
                    Alignment::Center,
                    text_style("18px", "#fef2f2"),
                ),
                el(
                    "el-11",
                    ElementKind::Button,
                    "SECURE MY SPOT",
                    2,
                    Alignment::Center,
                    button_style("#ffffff", "#dc2626", "18px 56px", "8px"),
                ),
            ],
        ),
    ]
}

fn presell_robust() -> Vec<Section> {
    let mut sections = presell_medium();
    sections.push(section(
        "video-1",
        "Sales Video",
        SectionKind::Hero,
        solid("#000000", "60px", Alignment::Center),
        vec![
            el(
                "el-12",
                ElementKind::Heading,
                "Watch the Full Video",
                0,
                Alignment::Center,
                heading_style("28px", "bold", "#ffffff"),
            ),
            el(
                "el-13",
                ElementKind::Video,
                "",
                1,
                Alignment::Center,
                ElementStyle {
                    src: Some(String::new()),
                    width: Some("100%".to_string()),
                    ..Default::default()
                },
            ),
        ],
    ));
    sections.push(section(
        "guarantee-1",
        "Guarantee",
        SectionKind::Features,
        solid("#f0fdf4", "60px", Alignment::Center),
        vec![
            el(
                "el-14",
                ElementKind::Heading,
                "🛡️ 7-Day Guarantee",
                0,
                Alignment::Center,
                heading_style("32px", "bold", "#166534"),
            ),
            el(
                "el-15",
                ElementKind::Text,
                "If you're not 100% satisfied, we refund your money, no questions asked.",
                1,
                Alignment::Center,
                text_style("18px", "#15803d"),
            ),
        ],
    ));
    sections
}

fn landing_minimal() -> Vec<Section> {
    vec![
        section(
            "hero-1",
            "Hero",
            SectionKind::Hero,
            solid("#ffffff", "100px", Alignment::Center),
            vec![
                el(
                    "el-1",
                    ElementKind::Heading,
                    "A Simple Solution for [Problem]",
                    0,
                    Alignment::Center,
                    heading_style("48px", "bold", "#111827"),
                ),
                el(
                    "el-2",
                    ElementKind::Text,
                    "A clear, direct description of what you offer",
                    1,
                    Alignment::Center,
                    text_style("18px", "#6b7280"),
                ),
                el(
                    "el-3",
                    ElementKind::Button,
                    "Start for Free",
                    2,
                    Alignment::Center,
                    button_style("#2563eb", "#ffffff", "14px 40px", "6px"),
                ),
            ],
        ),
        section(
            "features-1",
            "Features",
            SectionKind::Features,
            solid("#f9fafb", "80px", Alignment::Center),
            vec![
                el(
                    "el-4",
                    ElementKind::Heading,
                    "Why choose us?",
                    0,
                    Alignment::Center,
                    heading_style("32px", "bold", "#111827"),
                ),
                el(
                    "el-5",
                    ElementKind::Text,
                    "The three main reasons your solution stands out",
                    1,
                    Alignment::Center,
                    text_style("16px", "#6b7280"),
                ),
            ],
        ),
    ]
}

fn landing_medium() -> Vec<Section> {
    let mut sections = landing_minimal();
    sections.push(section(
        "social-proof",
        "Social Proof",
        SectionKind::Testimonials,
        solid("#ffffff", "80px", Alignment::Center),
        vec![el(
            "el-6",
            ElementKind::Heading,
            "Companies that trust us",
            0,
            Alignment::Center,
            heading_style("24px", "600", "#374151"),
        )],
    ));
    sections.push(section(
        "cta-1",
        "CTA",
        SectionKind::Cta,
        gradient(
            "linear-gradient(135deg, #2563eb 0%, #1d4ed8 100%)",
            "80px",
            Alignment::Center,
        ),
        vec![
            el(
                "el-7",
                ElementKind::Heading,
                "Ready to get started?",
                0,
                Alignment::Center,
                heading_style("36px", "bold", "#ffffff"),
            ),
            el(
                "el-8",
                ElementKind::Button,
                "Create Free Account",
                1,
                Alignment::Center,
                button_style("#ffffff", "#2563eb", "16px 48px", "8px"),
            ),
        ],
    ));
    sections
}

fn landing_robust() -> Vec<Section> {
    let mut sections = landing_medium();
    sections.push(section(
        "pricing-1",
        "Pricing",
        SectionKind::Pricing,
        solid("#f9fafb", "80px", Alignment::Center),
        vec![
            el(
                "el-9",
                ElementKind::Heading,
                "Plans & Pricing",
                0,
                Alignment::Center,
                heading_style("36px", "bold", "#111827"),
            ),
            el(
                "el-10",
                ElementKind::Text,
                "Pick the plan that fits you best",
                1,
                Alignment::Center,
                text_style("18px", "#6b7280"),
            ),
        ],
    ));
    sections.push(section(
        "faq-1",
        "FAQ",
        SectionKind::Faq,
        solid("#ffffff", "80px", Alignment::Center),
        vec![el(
            "el-11",
            ElementKind::Heading,
            "Frequently Asked Questions",
            0,
            Alignment::Center,
            heading_style("32px", "bold", "#111827"),
        )],
    ));
    sections
}

fn homepage_minimal() -> Vec<Section> {
    vec![section(
        "hero-1",
        "Hero",
        SectionKind::Hero,
        solid("#18181b", "120px", Alignment::Left),
        vec![
            el(
                "el-1",
                ElementKind::Heading,
                "Your Company",
                0,
                Alignment::Left,
                heading_style("56px", "bold", "#ffffff"),
            ),
            el(
                "el-2",
                ElementKind::Text,
                "Turning ideas into reality since 2020",
                1,
                Alignment::Left,
                text_style("20px", "#a1a1aa"),
            ),
            el(
                "el-3",
                ElementKind::Button,
                "Learn More →",
                2,
                Alignment::Left,
                button_style("transparent", "#ffffff", "0", "0"),
            ),
        ],
    )]
}

fn homepage_medium() -> Vec<Section> {
    let mut sections = homepage_minimal();
    sections.push(section(
        "services-1",
        "Services",
        SectionKind::Services,
        solid("#ffffff", "80px", Alignment::Center),
        vec![el(
            "el-4",
            ElementKind::Heading,
            "Our Services",
            0,
            Alignment::Center,
            heading_style("36px", "bold", "#18181b"),
        )],
    ));
    sections.push(section(
        "about-1",
        "About",
        SectionKind::About,
        solid("#f4f4f5", "80px", Alignment::Center),
        vec![
            el(
                "el-5",
                ElementKind::Heading,
                "About Us",
                0,
                Alignment::Center,
                heading_style("36px", "bold", "#18181b"),
            ),
            el(
                "el-6",
                ElementKind::Text,
                "Our story and mission",
                1,
                Alignment::Center,
                text_style("18px", "#52525b"),
            ),
        ],
    ));
    sections
}

fn homepage_robust() -> Vec<Section> {
    let mut sections = homepage_medium();
    sections.push(section(
        "team-1",
        "Team",
        SectionKind::Team,
        solid("#ffffff", "80px", Alignment::Center),
        vec![el(
            "el-7",
            ElementKind::Heading,
            "Our Team",
            0,
            Alignment::Center,
            heading_style("36px", "bold", "#18181b"),
        )],
    ));
    sections.push(section(
        "contact-1",
        "Contact",
        SectionKind::Contact,
        solid("#18181b", "80px", Alignment::Center),
        vec![
            el(
                "el-8",
                ElementKind::Heading,
                "Get in Touch",
                0,
                Alignment::Center,
                heading_style("36px", "bold", "#ffffff"),
            ),
            el(
                "el-9",
                ElementKind::Text,
                "contact@yourcompany.com",
                1,
                Alignment::Center,
                text_style("18px", "#a1a1aa"),
            ),
        ],
    ));
    sections
}

fn blog_minimal() -> Vec<Section> {
    vec![section(
        "header-1",
        "Header",
        SectionKind::Hero,
        solid("#ffffff", "60px", Alignment::Center),
        vec![
            el(
                "el-1",
                ElementKind::Heading,
                "Blog",
                0,
                Alignment::Center,
                heading_style("48px", "bold", "#111827"),
            ),
            el(
                "el-2",
                ElementKind::Text,
                "Articles, news and insights",
                1,
                Alignment::Center,
                text_style("18px", "#6b7280"),
            ),
        ],
    )]
}

fn blog_medium() -> Vec<Section> {
    vec![
        section(
            "header-1",
            "Header",
            SectionKind::Hero,
            gradient(
                "linear-gradient(135deg, #f0abfc 0%, #c084fc 100%)",
                "80px",
                Alignment::Center,
            ),
            vec![
                el(
                    "el-1",
                    ElementKind::Heading,
                    "Our Blog",
                    0,
                    Alignment::Center,
                    heading_style("48px", "bold", "#ffffff"),
                ),
                el(
                    "el-2",
                    ElementKind::Text,
                    "Exclusive content to help you grow",
                    1,
                    Alignment::Center,
                    text_style("20px", "#fdf4ff"),
                ),
            ],
        ),
        section(
            "featured-1",
            "Featured",
            SectionKind::Features,
            solid("#ffffff", "60px", Alignment::Left),
            vec![
                el(
                    "el-3",
                    ElementKind::Heading,
                    "Featured Article",
                    0,
                    Alignment::Left,
                    heading_style("14px", "600", "#a855f7"),
                ),
                el(
                    "el-4",
                    ElementKind::Heading,
                    "Title of the Main Article",
                    1,
                    Alignment::Left,
                    heading_style("32px", "bold", "#111827"),
                ),
            ],
        ),
    ]
}

fn blog_robust() -> Vec<Section> {
    let mut sections = blog_medium();
    sections.push(section(
        "categories-1",
        "Categories",
        SectionKind::Features,
        solid("#f9fafb", "40px", Alignment::Center),
        vec![el(
            "el-5",
            ElementKind::Heading,
            "Categories",
            0,
            Alignment::Center,
            heading_style("24px", "bold", "#111827"),
        )],
    ));
    sections.push(section(
        "newsletter-1",
        "Newsletter",
        SectionKind::Cta,
        solid("#7c3aed", "60px", Alignment::Center),
        vec![
            el(
                "el-6",
                ElementKind::Heading,
                "Get Updates",
                0,
                Alignment::Center,
                heading_style("32px", "bold", "#ffffff"),
            ),
            el(
                "el-7",
                ElementKind::Text,
                "Subscribe to our newsletter for exclusive content",
                1,
                Alignment::Center,
                text_style("16px", "#ede9fe"),
            ),
            el(
                "el-8",
                ElementKind::Button,
                "Subscribe",
                2,
                Alignment::Center,
                button_style("#ffffff", "#7c3aed", "14px 40px", "8px"),
            ),
        ],
    ));
    sections
}

fn template(
    id: &str,
    name: &str,
    category: TemplateCategory,
    complexity: TemplateComplexity,
    thumbnail: &str,
    config: PageDocument,
) -> Template {
    Template {
        id: id.to_string(),
        name: name.to_string(),
        category,
        complexity,
        thumbnail: thumbnail.to_string(),
        config,
    }
}

/// All built-in templates, in display order: four categories times three
/// complexity tiers.
pub fn catalog() -> Vec<Template> {
    vec![
        template(
            "presell-minimal",
            "Minimal Pre-sell",
            TemplateCategory::Presell,
            TemplateComplexity::Minimal,
            "🎯",
            document(
                NavbarConfig {
                    enabled: false,
                    ..default_navbar()
                },
                presell_minimal(),
            ),
        ),
        template(
            "presell-medium",
            "Complete Pre-sell",
            TemplateCategory::Presell,
            TemplateComplexity::Medium,
            "🚀",
            document(default_navbar(), presell_medium()),
        ),
        template(
            "presell-robust",
            "Professional Pre-sell",
            TemplateCategory::Presell,
            TemplateComplexity::Robust,
            "💎",
            document(default_navbar(), presell_robust()),
        ),
        template(
            "landing-minimal",
            "Simple Landing",
            TemplateCategory::Landing,
            TemplateComplexity::Minimal,
            "📄",
            document(
                NavbarConfig {
                    transparent: Some(true),
                    ..default_navbar()
                },
                landing_minimal(),
            ),
        ),
        template(
            "landing-medium",
            "Standard Landing",
            TemplateCategory::Landing,
            TemplateComplexity::Medium,
            "📊",
            document(default_navbar(), landing_medium()),
        ),
        template(
            "landing-robust",
            "Complete Landing",
            TemplateCategory::Landing,
            TemplateComplexity::Robust,
            "🏆",
            document(default_navbar(), landing_robust()),
        ),
        template(
            "homepage-minimal",
            "Clean Homepage",
            TemplateCategory::Homepage,
            TemplateComplexity::Minimal,
            "🏠",
            document(
                NavbarConfig {
                    transparent: Some(true),
                    ..default_navbar()
                },
                homepage_minimal(),
            ),
        ),
        template(
            "homepage-medium",
            "Corporate Homepage",
            TemplateCategory::Homepage,
            TemplateComplexity::Medium,
            "🏢",
            document(default_navbar(), homepage_medium()),
        ),
        template(
            "homepage-robust",
            "Complete Homepage",
            TemplateCategory::Homepage,
            TemplateComplexity::Robust,
            "🌟",
            document(default_navbar(), homepage_robust()),
        ),
        template(
            "blog-minimal",
            "Simple Blog",
            TemplateCategory::Blog,
            TemplateComplexity::Minimal,
            "✏️",
            document(default_navbar(), blog_minimal()),
        ),
        template(
            "blog-medium",
            "Modern Blog",
            TemplateCategory::Blog,
            TemplateComplexity::Medium,
            "📝",
            document(default_navbar(), blog_medium()),
        ),
        template(
            "blog-robust",
            "Professional Blog",
            TemplateCategory::Blog,
            TemplateComplexity::Robust,
            "📚",
            document(default_navbar(), blog_robust()),
        ),
    ]
}
