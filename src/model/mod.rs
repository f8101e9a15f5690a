//! # Document Model
//!
//! The raw shapes a property is read from and written to. These types cross
//! every boundary: decoder ↔ codec ↔ registry ↔ encoder.
//!
//! Design rule: no vocabulary knowledge here. This module is pure data.

pub mod document;
pub mod iri;

pub use document::{AliasMap, ContextMap, Document, RawValue, shape_name};
pub use iri::Iri;
