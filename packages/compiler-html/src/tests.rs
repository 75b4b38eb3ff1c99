use crate::{compile_to_html, CompileOptions};
use pagecraft_editor::EditSession;
use pagecraft_model::{
    Alignment, AnimationKind, ElementKind, ElementStyle, NavbarPatch, PageDocument, SectionKind,
    SectionStyle,
};

fn compile(doc: &PageDocument) -> String {
    compile_to_html(doc, &CompileOptions::default())
}

#[test]
fn test_empty_document_emits_shell_only() {
    let html = compile(&PageDocument::new());

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<link rel=\"stylesheet\" href=\"styles.css\">"));
    assert!(html.contains("<script src=\"animations.js\"></script>"));
    // Navbar is disabled by default and no sections exist.
    assert!(!html.contains("<nav"));
    assert!(!html.contains("<section"));
}

#[test]
fn test_navbar_links_every_section_in_order() {
    let mut session = EditSession::new("html");
    let hero = session.add_section(SectionKind::Hero);
    let cta = session.add_section(SectionKind::Cta);
    session.update_navbar(NavbarPatch {
        enabled: Some(true),
        ..Default::default()
    });

    let html = compile(session.current());

    assert!(html.contains("<nav class=\"navbar\">"));
    let hero_link = html.find(&format!("href=\"#{}\"", hero)).unwrap();
    let cta_link = html.find(&format!("href=\"#{}\"", cta)).unwrap();
    assert!(hero_link < cta_link);
    assert!(html.contains(">Hero</a>"));
    assert!(html.contains(">Cta</a>"));
}

#[test]
fn test_hero_section_renders_heading_text_button() {
    let mut session = EditSession::new("html");
    session.add_section(SectionKind::Hero);

    let html = compile(session.current());

    assert!(html.contains("<h2 class=\"element-heading pos-center\">Welcome to your site</h2>"));
    assert!(html.contains("<p class=\"element-text pos-center\">"));
    assert!(html.contains("<a href=\"#\" class=\"element-button pos-center\">Get Started</a>"));
    assert!(html.contains("class=\"section section-hero\""));
}

#[test]
fn test_elements_render_in_ascending_order_with_stable_ties() {
    use pagecraft_model::{Element, Section};

    // Duplicate orders are tolerated: both elements rank 0, so insertion
    // sequence breaks the tie.
    let element = |id: &str, kind: ElementKind| Element {
        id: id.to_string(),
        kind,
        content: "x".to_string(),
        order: 0,
        position: Alignment::Center,
        style: ElementStyle::default(),
    };

    let doc = PageDocument {
        sections: vec![Section {
            id: "s1".to_string(),
            name: "S1".to_string(),
            kind: SectionKind::Custom,
            style: SectionStyle::default(),
            elements: vec![
                element("el-a", ElementKind::Heading),
                element("el-b", ElementKind::Text),
            ],
        }],
        ..Default::default()
    };

    let html = compile(&doc);
    let heading = html.find("element-heading").unwrap();
    let text = html.find("element-text").unwrap();
    assert!(heading < text, "insertion order breaks the tie");
}

#[test]
fn test_image_without_src_emits_no_img_tag() {
    let mut session = EditSession::new("html");
    let id = session.add_section(SectionKind::Custom);
    session.select_section(Some(id));
    session.add_element(ElementKind::Image).unwrap();

    let html = compile(session.current());
    assert!(!html.contains("<img"));
}

#[test]
fn test_background_flagged_media_emit_zero_nodes() {
    let mut session = EditSession::new("html");
    let id = session.add_section(SectionKind::Custom);
    session.select_section(Some(id.clone()));
    let img = session.add_element(ElementKind::Image).unwrap();

    session.update_element(
        &id,
        &img,
        None,
        ElementStyle {
            src: Some("bg.png".to_string()),
            is_background: Some(true),
            ..Default::default()
        },
    );

    let html = compile(session.current());
    assert!(!html.contains("bg.png"));
    assert!(!html.contains("<img"));
}

#[test]
fn test_section_background_video_and_overlay() {
    let mut session = EditSession::new("html");
    let id = session.add_section(SectionKind::Custom);
    session.update_section(
        &id,
        None,
        SectionStyle {
            background_video: Some("loop.mp4".to_string()),
            background_overlay: Some("rgba(0,0,0,0.5)".to_string()),
            ..Default::default()
        },
    );

    let html = compile(session.current());
    assert!(html.contains("class=\"section-bg-video\" autoplay muted loop playsinline"));
    assert!(html.contains("<source src=\"loop.mp4\" type=\"video/mp4\">"));
    assert!(html.contains("<div class=\"section-overlay\"></div>"));
}

#[test]
fn test_animation_classes_follow_element_settings() {
    let mut session = EditSession::new("html");
    let id = session.add_section(SectionKind::Custom);
    session.select_section(Some(id.clone()));
    let el = session.add_element(ElementKind::Heading).unwrap();

    session.update_element(
        &id,
        &el,
        None,
        ElementStyle {
            animation_enabled: Some(true),
            animation_kind: Some(AnimationKind::SlideUp),
            ..Default::default()
        },
    );
    session.set_element_position(&id, &el, Alignment::Right);

    let html = compile(session.current());
    assert!(html.contains("element-heading animate-slide-up pos-right"));
}

#[test]
fn test_text_content_is_escaped() {
    let mut session = EditSession::new("html");
    let id = session.add_section(SectionKind::Custom);
    session.select_section(Some(id.clone()));
    let el = session.add_element(ElementKind::Text).unwrap();
    session.update_element(
        &id,
        &el,
        Some("<script>alert('x')</script>".to_string()),
        ElementStyle::default(),
    );

    let html = compile(session.current());
    assert!(!html.contains("<script>alert"));
    assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
}

#[test]
fn test_output_is_deterministic() {
    let mut session = EditSession::new("html");
    session.add_section(SectionKind::Hero);
    session.add_section(SectionKind::Footer);
    session.update_navbar(NavbarPatch {
        enabled: Some(true),
        logo: Some("/logo.png".to_string()),
        ..Default::default()
    });

    let first = compile(session.current());
    let second = compile(session.current());
    assert_eq!(first, second);
}
