//! Comprehensive mutation tests

use pagecraft_editor::{Direction, EditSession, Mutation};
use pagecraft_model::{
    Alignment, ElementKind, ElementStyle, FooterConfig, IdGenerator, NavbarPatch, PageDocument,
    SectionKind, SectionStyle,
};

fn session_with_hero() -> (EditSession, String) {
    let mut session = EditSession::new("test");
    let id = session.add_section(SectionKind::Hero);
    (session, id)
}

#[test]
fn test_add_hero_section_seeds_heading_text_button() {
    let (session, id) = session_with_hero();
    let section = session.current().find_section(&id).unwrap();

    let kinds: Vec<ElementKind> = section.elements.iter().map(|el| el.kind).collect();
    assert_eq!(
        kinds,
        vec![ElementKind::Heading, ElementKind::Text, ElementKind::Button]
    );

    let orders: Vec<u32> = section.elements.iter().map(|el| el.order).collect();
    assert_eq!(orders, vec![0, 1, 2]);

    assert!(section.style.background_gradient.is_some());
}

#[test]
fn test_add_element_appends_with_next_order() {
    let (mut session, id) = session_with_hero();
    let element_id = session.add_element(ElementKind::Image).unwrap();

    let section = session.current().find_section(&id).unwrap();
    assert_eq!(section.elements.len(), 4);

    let added = section.find_element(&element_id).unwrap();
    assert_eq!(added.order, 3);
    assert_eq!(added.style.src(), None);
}

#[test]
fn test_update_element_merges_style_keys() {
    let (mut session, id) = session_with_hero();
    let heading_id = session.current().find_section(&id).unwrap().elements[0]
        .id
        .clone();

    session.update_element(
        &id,
        &heading_id,
        Some("Hello".to_string()),
        ElementStyle {
            color: Some("#ff0000".to_string()),
            ..Default::default()
        },
    );

    let heading = session
        .current()
        .find_section(&id)
        .unwrap()
        .find_element(&heading_id)
        .unwrap();

    assert_eq!(heading.content, "Hello");
    assert_eq!(heading.style.color.as_deref(), Some("#ff0000"));
    // Untouched style keys survive the merge.
    assert_eq!(heading.style.font_size.as_deref(), Some("48px"));
}

#[test]
fn test_update_nonexistent_element_leaves_document_unchanged() {
    let (mut session, id) = session_with_hero();
    let before = session.current().clone();

    session.update_element(
        &id,
        "el-gone",
        Some("ignored".to_string()),
        ElementStyle::default(),
    );

    assert_eq!(session.current(), &before);
}

#[test]
fn test_delete_section_cascades_to_elements() {
    let (mut session, id) = session_with_hero();
    session.delete_section(&id);

    assert!(session.current().sections.is_empty());
}

#[test]
fn test_delete_element_clears_element_selection() {
    let (mut session, id) = session_with_hero();
    let element_id = session.add_element(ElementKind::Text).unwrap();
    assert_eq!(session.selected_element(), Some(element_id.as_str()));

    session.delete_element(&id, &element_id);
    assert_eq!(session.selected_element(), None);
    assert!(session
        .current()
        .find_section(&id)
        .unwrap()
        .find_element(&element_id)
        .is_none());
}

#[test]
fn test_duplicate_section_mints_all_new_ids() {
    let mut session = EditSession::new("test");
    let id = session.add_section(SectionKind::Cta); // heading + button
    session.duplicate_section(&id);

    let doc = session.current();
    assert_eq!(doc.sections.len(), 2);

    let original = &doc.sections[0];
    let copy = &doc.sections[1];

    assert_ne!(copy.id, original.id);
    assert_eq!(copy.elements.len(), original.elements.len());
    assert!(copy.name.ends_with("(copy)"));

    // No id from the copy appears anywhere in the original document.
    for (a, b) in original.elements.iter().zip(&copy.elements) {
        assert_ne!(a.id, b.id);
        assert_eq!(a.kind, b.kind);
        assert_eq!(a.content, b.content);
        assert_eq!(a.style, b.style);
    }

    // The whole document still validates: every id unique.
    assert!(doc.validate().is_ok());
}

#[test]
fn test_duplicate_inserts_immediately_after_original() {
    let mut session = EditSession::new("test");
    let first = session.add_section(SectionKind::Hero);
    let second = session.add_section(SectionKind::Cta);
    session.duplicate_section(&first);

    let ids: Vec<&str> = session
        .current()
        .sections
        .iter()
        .map(|s| s.id.as_str())
        .collect();

    assert_eq!(ids[0], first);
    assert_eq!(ids[2], second);
    assert_eq!(ids.len(), 3);
}

#[test]
fn test_move_section_swaps_neighbors_and_stops_at_bounds() {
    let mut session = EditSession::new("test");
    let a = session.add_section(SectionKind::Hero);
    let b = session.add_section(SectionKind::Cta);

    session.move_section(&b, Direction::Up);
    let ids: Vec<&str> = session
        .current()
        .sections
        .iter()
        .map(|s| s.id.as_str())
        .collect();
    assert_eq!(ids, vec![b.as_str(), a.as_str()]);

    // Already first: moving up again is a no-op.
    let before = session.current().clone();
    session.move_section(&b, Direction::Up);
    assert_eq!(session.current(), &before);
}

#[test]
fn test_move_element_renumbers_orders_to_position_index() {
    let (mut session, id) = session_with_hero();

    // Move the button (index 2) up past the text element.
    let button_id = session.current().find_section(&id).unwrap().elements[2]
        .id
        .clone();
    session.move_element(&id, &button_id, Direction::Up);

    let section = session.current().find_section(&id).unwrap();
    let kinds: Vec<ElementKind> = section.elements.iter().map(|el| el.kind).collect();
    assert_eq!(
        kinds,
        vec![ElementKind::Heading, ElementKind::Button, ElementKind::Text]
    );

    // Orders exactly match position indices after the move.
    let orders: Vec<u32> = section.elements.iter().map(|el| el.order).collect();
    assert_eq!(orders, vec![0, 1, 2]);
}

#[test]
fn test_move_element_at_boundary_is_noop() {
    let (mut session, id) = session_with_hero();
    let first = session.current().find_section(&id).unwrap().elements[0]
        .id
        .clone();

    let before = session.current().clone();
    session.move_element(&id, &first, Direction::Up);
    assert_eq!(session.current(), &before);
}

#[test]
fn test_set_element_position_only_touches_position() {
    let (mut session, id) = session_with_hero();
    let heading = session.current().find_section(&id).unwrap().elements[0].clone();

    session.set_element_position(&id, &heading.id, Alignment::Left);

    let updated = session
        .current()
        .find_section(&id)
        .unwrap()
        .find_element(&heading.id)
        .unwrap();
    assert_eq!(updated.position, Alignment::Left);
    assert_eq!(updated.content, heading.content);
    assert_eq!(updated.style, heading.style);
}

#[test]
fn test_update_navbar_and_footer_merge() {
    let mut session = EditSession::new("test");

    session.update_navbar(NavbarPatch {
        enabled: Some(true),
        transparent: Some(true),
        ..Default::default()
    });
    session.update_footer(FooterConfig {
        show_terms: Some(true),
        terms_link: Some("/terms".to_string()),
        ..Default::default()
    });

    let doc = session.current();
    assert!(doc.navbar.enabled);
    assert!(doc.navbar.transparent());
    // Unnamed navbar fields keep their defaults.
    assert_eq!(doc.navbar.background_color(), "#1f2937");
    assert!(doc.footer.show_terms());
    assert_eq!(doc.footer.terms_link(), "/terms");
}

#[test]
fn test_footer_section_mirrors_updated_footer_config() {
    let mut session = EditSession::new("test");
    session.update_footer(FooterConfig {
        show_terms: Some(true),
        show_policy: Some(true),
        ..Default::default()
    });

    let id = session.add_section(SectionKind::Footer);
    let section = session.current().find_section(&id).unwrap();

    let kinds: Vec<ElementKind> = section.elements.iter().map(|el| el.kind).collect();
    assert_eq!(
        kinds,
        vec![
            ElementKind::Text,
            ElementKind::TermsLink,
            ElementKind::PolicyLink
        ]
    );
}

#[test]
fn test_mutations_applied_directly_match_session_results() {
    // The session is a thin composition layer: folding the same mutations
    // over the initial document with an identically seeded generator must
    // produce the same final document.
    let mut session = EditSession::new("fold");
    let section_id = session.add_section(SectionKind::Hero);
    session.select_section(Some(section_id.clone()));
    session.add_element(ElementKind::Text).unwrap();
    session.update_navbar(NavbarPatch {
        enabled: Some(true),
        ..Default::default()
    });

    let mutations = vec![
        Mutation::AddSection {
            kind: SectionKind::Hero,
        },
        Mutation::AddElement {
            section_id,
            kind: ElementKind::Text,
        },
        Mutation::UpdateNavbar {
            patch: NavbarPatch {
                enabled: Some(true),
                ..Default::default()
            },
        },
    ];

    let mut ids = IdGenerator::new("fold");
    let folded = mutations
        .iter()
        .fold(PageDocument::new(), |doc, m| m.apply(&doc, &mut ids));

    assert_eq!(session.current(), &folded);
}

#[test]
fn test_update_section_merges_name_and_style() {
    let (mut session, id) = session_with_hero();

    session.update_section(
        &id,
        Some("Above the fold".to_string()),
        SectionStyle {
            text_color: Some("#ffffff".to_string()),
            ..Default::default()
        },
    );

    let section = session.current().find_section(&id).unwrap();
    assert_eq!(section.name, "Above the fold");
    assert_eq!(section.style.text_color.as_deref(), Some("#ffffff"));
    // Seeded gradient survives the merge.
    assert!(section.style.background_gradient.is_some());
}
