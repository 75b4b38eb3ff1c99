//! # Pagecraft Editor
//!
//! Document editing engine for Pagecraft.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ model: PageDocument (sections + elements)   │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: mutations + history + session       │
//! │  - Apply pure mutations (doc → new doc)     │
//! │  - Bounded linear undo/redo snapshots       │
//! │  - Track selection per editing session      │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ compilers: PageDocument → HTML / CSS        │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core principles
//!
//! 1. **Snapshots are immutable**: every mutation produces a *new*
//!    [`pagecraft_model::PageDocument`]; documents already in history are
//!    never touched, so undo can never observe a corrupted past state.
//! 2. **Invalid targets are no-ops**: mutating a section or element that no
//!    longer exists returns the document unchanged, never an error.
//! 3. **Linear history**: pushing after an undo discards the redo branch.
//!
//! ## Usage
//!
//! ```rust
//! use pagecraft_editor::EditSession;
//! use pagecraft_model::SectionKind;
//!
//! let mut session = EditSession::new("my-site");
//! session.add_section(SectionKind::Hero);
//! assert_eq!(session.current().sections.len(), 1);
//!
//! session.undo();
//! assert!(session.current().sections.is_empty());
//! ```

mod errors;
mod history;
mod mutations;
mod seeds;
mod session;

pub use errors::EditorError;
pub use history::{History, MAX_HISTORY};
pub use mutations::{Direction, Mutation};
pub use seeds::new_element;
pub use session::EditSession;

// Re-export the model for convenience
pub use pagecraft_model as model;
