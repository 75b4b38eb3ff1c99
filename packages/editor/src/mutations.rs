//! # Document Mutations
//!
//! High-level semantic operations on page documents.
//!
//! ## Design Principles
//!
//! 1. **Pure**: `apply` takes the current document and returns a *new* one;
//!    the input snapshot is never aliased by the result, which keeps history
//!    snapshots independent.
//! 2. **Total**: operations targeting a section or element that no longer
//!    exists return the document unchanged. Deleting twice, moving past a
//!    boundary, or updating a stale id is a no-op, never a failure.
//! 3. **Intent-preserving**: one variant per user-level operation; the
//!    session layer composes them, it does not reach into the document.

use crate::seeds::{new_element, seeded_section};
use pagecraft_model::{
    Alignment, Element, ElementKind, ElementStyle, FooterConfig, IdGenerator, NavbarPatch,
    PageDocument, SectionKind, SectionStyle,
};
use serde::{Deserialize, Serialize};

/// Direction for neighbor-swap moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

/// Semantic mutations over a [`PageDocument`]. Serialized with an `op`
/// discriminant so variants can carry their own `kind` fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum Mutation {
    /// Append a new section seeded with kind-specific default elements.
    AddSection { kind: SectionKind },

    /// Append a new element to a section, with `order` = current count.
    AddElement {
        section_id: String,
        kind: ElementKind,
    },

    /// Shallow-merge name and style into a section.
    UpdateSection {
        section_id: String,
        name: Option<String>,
        style: SectionStyle,
    },

    /// Shallow-merge content, position, and style into an element.
    UpdateElement {
        section_id: String,
        element_id: String,
        content: Option<String>,
        position: Option<Alignment>,
        style: ElementStyle,
    },

    /// Remove a section and everything it contains.
    DeleteSection { section_id: String },

    /// Remove one element from one section.
    DeleteElement {
        section_id: String,
        element_id: String,
    },

    /// Deep-clone a section with freshly minted ids, inserted right after
    /// the original.
    DuplicateSection { section_id: String },

    /// Swap a section with its neighbor; no-op at either boundary.
    MoveSection {
        section_id: String,
        direction: Direction,
    },

    /// Swap an element with its neighbor within the same section, then
    /// renumber every element's `order` to its position index.
    MoveElement {
        section_id: String,
        element_id: String,
        direction: Direction,
    },

    /// Position-only element update.
    SetElementPosition {
        section_id: String,
        element_id: String,
        position: Alignment,
    },

    /// Shallow-merge into the navbar config.
    UpdateNavbar { patch: NavbarPatch },

    /// Shallow-merge into the footer config.
    UpdateFooter { patch: FooterConfig },

    /// Replace the whole document (template or project load).
    ReplaceDocument { document: PageDocument },
}

impl Mutation {
    /// Apply this mutation to `doc`, returning the next document. `ids`
    /// supplies fresh identifiers for operations that mint new sections or
    /// elements.
    pub fn apply(&self, doc: &PageDocument, ids: &mut IdGenerator) -> PageDocument {
        let mut next = doc.clone();

        match self {
            Mutation::AddSection { kind } => {
                let section = seeded_section(kind.clone(), &next.footer, ids);
                next.sections.push(section);
            }

            Mutation::AddElement { section_id, kind } => {
                if let Some(section) = next.find_section_mut(section_id) {
                    let order = section.elements.len() as u32;
                    section.elements.push(new_element(*kind, order, ids));
                }
            }

            Mutation::UpdateSection {
                section_id,
                name,
                style,
            } => {
                if let Some(section) = next.find_section_mut(section_id) {
                    if let Some(name) = name {
                        section.name = name.clone();
                    }
                    section.style.merge(style.clone());
                }
            }

            Mutation::UpdateElement {
                section_id,
                element_id,
                content,
                position,
                style,
            } => {
                if let Some(element) = find_element_mut(&mut next, section_id, element_id) {
                    if let Some(content) = content {
                        element.content = content.clone();
                    }
                    if let Some(position) = position {
                        element.position = *position;
                    }
                    element.style.merge(style.clone());
                }
            }

            Mutation::DeleteSection { section_id } => {
                next.sections.retain(|s| s.id != *section_id);
            }

            Mutation::DeleteElement {
                section_id,
                element_id,
            } => {
                if let Some(section) = next.find_section_mut(section_id) {
                    section.elements.retain(|el| el.id != *element_id);
                }
            }

            Mutation::DuplicateSection { section_id } => {
                if let Some(index) = next.section_index(section_id) {
                    let mut clone = next.sections[index].clone();
                    clone.id = ids.section_id();
                    clone.name = format!("{} (copy)", clone.name);
                    for element in &mut clone.elements {
                        element.id = ids.element_id();
                    }
                    next.sections.insert(index + 1, clone);
                }
            }

            Mutation::MoveSection {
                section_id,
                direction,
            } => {
                if let Some(index) = next.section_index(section_id) {
                    match direction {
                        Direction::Up if index > 0 => next.sections.swap(index - 1, index),
                        Direction::Down if index + 1 < next.sections.len() => {
                            next.sections.swap(index, index + 1)
                        }
                        _ => {}
                    }
                }
            }

            Mutation::MoveElement {
                section_id,
                element_id,
                direction,
            } => {
                if let Some(section) = next.find_section_mut(section_id) {
                    if let Some(index) = section.elements.iter().position(|el| el.id == *element_id)
                    {
                        let swapped = match direction {
                            Direction::Up if index > 0 => {
                                section.elements.swap(index - 1, index);
                                true
                            }
                            Direction::Down if index + 1 < section.elements.len() => {
                                section.elements.swap(index, index + 1);
                                true
                            }
                            _ => false,
                        };
                        if swapped {
                            // Keep `order` dense and monotonic after any move.
                            for (i, element) in section.elements.iter_mut().enumerate() {
                                element.order = i as u32;
                            }
                        }
                    }
                }
            }

            Mutation::SetElementPosition {
                section_id,
                element_id,
                position,
            } => {
                if let Some(element) = find_element_mut(&mut next, section_id, element_id) {
                    element.position = *position;
                }
            }

            Mutation::UpdateNavbar { patch } => {
                next.navbar.merge(patch.clone());
            }

            Mutation::UpdateFooter { patch } => {
                next.footer.merge(patch.clone());
            }

            Mutation::ReplaceDocument { document } => {
                next = document.clone();
            }
        }

        next
    }
}

fn find_element_mut<'a>(
    doc: &'a mut PageDocument,
    section_id: &str,
    element_id: &str,
) -> Option<&'a mut Element> {
    doc.find_section_mut(section_id)
        .and_then(|s| s.find_element_mut(element_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mutation_serialization() {
        let mutation = Mutation::MoveElement {
            section_id: "s1".to_string(),
            element_id: "el-1".to_string(),
            direction: Direction::Up,
        };

        let json = serde_json::to_string(&mutation).unwrap();
        let deserialized: Mutation = serde_json::from_str(&json).unwrap();

        assert_eq!(mutation, deserialized);
    }

    #[test]
    fn test_tagged_form_keeps_kind_fields() {
        // The discriminant is `op`, leaving `kind` free for variant payloads.
        let mutation = Mutation::AddSection {
            kind: SectionKind::Hero,
        };

        let json = serde_json::to_value(&mutation).unwrap();
        assert_eq!(json["op"], "addSection");
        assert_eq!(json["kind"], "hero");

        let decoded: Mutation = serde_json::from_value(json).unwrap();
        assert_eq!(decoded, mutation);
    }

    #[test]
    fn test_apply_does_not_mutate_input() {
        let mut ids = IdGenerator::new("test");
        let doc = PageDocument::new();

        let next = Mutation::AddSection {
            kind: SectionKind::Hero,
        }
        .apply(&doc, &mut ids);

        assert!(doc.sections.is_empty());
        assert_eq!(next.sections.len(), 1);
    }

    #[test]
    fn test_stale_target_is_noop() {
        let mut ids = IdGenerator::new("test");
        let doc = PageDocument::new();

        let next = Mutation::DeleteSection {
            section_id: "missing".to_string(),
        }
        .apply(&doc, &mut ids);

        assert_eq!(doc, next);
    }
}
