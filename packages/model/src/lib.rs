//! # Pagecraft Model
//!
//! Core document model for the Pagecraft page builder.
//!
//! A [`PageDocument`] is the aggregate root: an ordered list of [`Section`]s
//! plus singleton [`NavbarConfig`] and [`FooterConfig`]. Sections own their
//! [`Element`]s exclusively. This crate provides construction and validation
//! only; all mutation flows through `pagecraft-editor`.

mod document;
mod element;
mod id_generator;
mod section;

pub use document::{
    FooterConfig, NavbarConfig, NavbarPatch, NavbarPosition, PageDocument, ValidationError,
};
pub use element::{Alignment, AnimationKind, Element, ElementKind, ElementStyle};
pub use id_generator::IdGenerator;
pub use section::{Section, SectionKind, SectionStyle};
