//! # Edit Session
//!
//! One user's editing state: the undo/redo history, the ID generator, and
//! the current section/element selection. Each operation builds a
//! [`Mutation`], applies it to the active document, and pushes the result
//! onto history; selection is adjusted to match.

use crate::{Direction, EditorError, History, Mutation};
use pagecraft_model::{
    Alignment, ElementKind, ElementStyle, FooterConfig, IdGenerator, NavbarPatch, PageDocument,
    SectionKind, SectionStyle,
};

/// Single-user editing session over a page document.
#[derive(Debug)]
pub struct EditSession {
    history: History,
    ids: IdGenerator,
    selected_section: Option<String>,
    selected_element: Option<String>,
}

impl EditSession {
    /// Start a session on an empty document. `name` seeds the ID generator,
    /// so two sessions with the same name mint identical id sequences.
    pub fn new(name: &str) -> Self {
        Self::with_document(name, PageDocument::new())
    }

    /// Start a session on an existing document (loaded project or template).
    pub fn with_document(name: &str, document: PageDocument) -> Self {
        Self {
            history: History::new(document),
            ids: IdGenerator::new(name),
            selected_section: None,
            selected_element: None,
        }
    }

    /// The active document.
    pub fn current(&self) -> &PageDocument {
        self.history.current()
    }

    /// Apply a mutation and record the resulting snapshot.
    pub fn apply(&mut self, mutation: Mutation) {
        let next = mutation.apply(self.history.current(), &mut self.ids);
        self.history.push(next);
    }

    /// Add a section and select it. Returns the new section's id.
    pub fn add_section(&mut self, kind: SectionKind) -> String {
        self.apply(Mutation::AddSection { kind });

        // AddSection always appends, so the new section is the last one.
        let id = self
            .current()
            .sections
            .last()
            .map(|s| s.id.clone())
            .unwrap_or_default();
        self.selected_section = Some(id.clone());
        self.selected_element = None;
        id
    }

    /// Add an element to the selected section and select it. Reports
    /// [`EditorError::NoSectionSelected`] when nothing is selected.
    pub fn add_element(&mut self, kind: ElementKind) -> Result<String, EditorError> {
        let section_id = self
            .selected_section
            .clone()
            .ok_or(EditorError::NoSectionSelected)?;

        self.apply(Mutation::AddElement {
            section_id: section_id.clone(),
            kind,
        });

        let id = self
            .current()
            .find_section(&section_id)
            .and_then(|s| s.elements.last())
            .map(|el| el.id.clone())
            .unwrap_or_default();
        self.selected_element = Some(id.clone());
        Ok(id)
    }

    pub fn update_section(&mut self, section_id: &str, name: Option<String>, style: SectionStyle) {
        self.apply(Mutation::UpdateSection {
            section_id: section_id.to_string(),
            name,
            style,
        });
    }

    pub fn update_element(
        &mut self,
        section_id: &str,
        element_id: &str,
        content: Option<String>,
        style: ElementStyle,
    ) {
        self.apply(Mutation::UpdateElement {
            section_id: section_id.to_string(),
            element_id: element_id.to_string(),
            content,
            position: None,
            style,
        });
    }

    pub fn set_element_position(&mut self, section_id: &str, element_id: &str, position: Alignment) {
        self.apply(Mutation::SetElementPosition {
            section_id: section_id.to_string(),
            element_id: element_id.to_string(),
            position,
        });
    }

    /// Delete a section; clears the selection if it pointed at it.
    pub fn delete_section(&mut self, section_id: &str) {
        self.apply(Mutation::DeleteSection {
            section_id: section_id.to_string(),
        });

        if self.selected_section.as_deref() == Some(section_id) {
            self.selected_section = None;
            self.selected_element = None;
        }
    }

    /// Delete an element; clears the element selection if it was selected.
    pub fn delete_element(&mut self, section_id: &str, element_id: &str) {
        self.apply(Mutation::DeleteElement {
            section_id: section_id.to_string(),
            element_id: element_id.to_string(),
        });

        if self.selected_element.as_deref() == Some(element_id) {
            self.selected_element = None;
        }
    }

    pub fn duplicate_section(&mut self, section_id: &str) {
        self.apply(Mutation::DuplicateSection {
            section_id: section_id.to_string(),
        });
    }

    pub fn move_section(&mut self, section_id: &str, direction: Direction) {
        self.apply(Mutation::MoveSection {
            section_id: section_id.to_string(),
            direction,
        });
    }

    pub fn move_element(&mut self, section_id: &str, element_id: &str, direction: Direction) {
        self.apply(Mutation::MoveElement {
            section_id: section_id.to_string(),
            element_id: element_id.to_string(),
            direction,
        });
    }

    pub fn update_navbar(&mut self, patch: NavbarPatch) {
        self.apply(Mutation::UpdateNavbar { patch });
    }

    pub fn update_footer(&mut self, patch: FooterConfig) {
        self.apply(Mutation::UpdateFooter { patch });
    }

    /// Replace the active document wholesale (template selection or project
    /// load) and push the replacement onto history.
    pub fn load_document(&mut self, document: PageDocument) {
        self.apply(Mutation::ReplaceDocument { document });
        self.selected_section = None;
        self.selected_element = None;
    }

    pub fn undo(&mut self) -> bool {
        self.history.undo()
    }

    pub fn redo(&mut self) -> bool {
        self.history.redo()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn select_section(&mut self, section_id: Option<String>) {
        self.selected_section = section_id;
        self.selected_element = None;
    }

    pub fn select_element(&mut self, element_id: Option<String>) {
        self.selected_element = element_id;
    }

    pub fn selected_section(&self) -> Option<&str> {
        self.selected_section.as_deref()
    }

    pub fn selected_element(&self) -> Option<&str> {
        self.selected_element.as_deref()
    }

    pub fn history(&self) -> &History {
        &self.history
    }
}
