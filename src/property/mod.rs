//! # Property Values
//!
//! A [`PropertyValue`] is one value of one named property on a document node.
//! It holds at most one of:
//!
//! | Kind | Payload |
//! |------|---------|
//! | `NestedObject` | a typed vocabulary object built by the registry |
//! | `Scalar` | a primitive decoded by the property's codec |
//! | `Reference` | an absolute IRI |
//! | `Opaque` | the raw value, verbatim, when nothing else matched |
//!
//! plus the alias its key was resolved under. What a given property may hold
//! is fixed by its [`PropertyDef`].
//!
//! ```text
//! Document ──deserialize──▶ PropertyValue ──serialize──▶ RawValue
//!                                │
//!                                ├── merge_context ──▶ ContextMap
//!                                └── less_than / normalize
//! ```

mod decode;
mod encode;
mod order;

pub use decode::decode;
pub use order::normalize;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::alias::resolve_key;
use crate::codec::{Scalar, ScalarCodec};
use crate::model::{AliasMap, Iri, RawValue};
use crate::registry::VocabObject;

// ============================================================================
// Property definitions
// ============================================================================

/// The value kind a property is defined to hold besides IRIs.
#[derive(Debug, Clone, Copy)]
pub enum Range {
    /// A primitive, decoded with this codec.
    Scalar(&'static dyn ScalarCodec),
    /// A nested object of this vocabulary type.
    Object(&'static str),
}

/// Static description of one vocabulary property.
#[derive(Debug)]
pub struct PropertyDef {
    pub name: &'static str,
    /// Namespace URI the property's alias is looked up under.
    pub namespace: &'static str,
    pub range: Range,
    /// Single-valued. Non-functional properties hold a sequence of values,
    /// each one a `PropertyValue`, kept in [`normalize`] order.
    pub functional: bool,
}

impl PropertyDef {
    pub const fn functional(name: &'static str, namespace: &'static str, range: Range) -> Self {
        Self { name, namespace, range, functional: true }
    }

    pub const fn non_functional(name: &'static str, namespace: &'static str, range: Range) -> Self {
        Self { name, namespace, range, functional: false }
    }

    /// Document key for this property under `alias_map`.
    pub fn key(&self, alias_map: &AliasMap) -> String {
        resolve_key(self.namespace, alias_map, self.name)
    }
}

// ============================================================================
// Kind
// ============================================================================

/// Which payload a `PropertyValue` currently holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Kind {
    None,
    NestedObject,
    Scalar,
    Reference,
    Opaque,
}

// ============================================================================
// PropertyValue
// ============================================================================

#[derive(Debug, Clone)]
enum Member {
    None,
    NestedObject(Box<dyn VocabObject>),
    Scalar(Scalar),
    Reference(Iri),
    Opaque(RawValue),
}

/// One value of a vocabulary property.
#[derive(Clone)]
pub struct PropertyValue {
    def: &'static PropertyDef,
    alias: String,
    member: Member,
}

impl PropertyValue {
    /// An empty value with no alias.
    pub fn new(def: &'static PropertyDef) -> Self {
        Self::with_alias(def, "")
    }

    pub fn with_alias(def: &'static PropertyDef, alias: impl Into<String>) -> Self {
        Self { def, alias: alias.into(), member: Member::None }
    }

    pub fn def(&self) -> &'static PropertyDef { self.def }
    pub fn name(&self) -> &'static str { self.def.name }
    pub fn alias(&self) -> &str { &self.alias }

    /// Replace the alias this value is written under.
    pub fn reset_alias(&mut self, alias: impl Into<String>) {
        self.alias = alias.into();
    }

    // ========================================================================
    // Mutators
    // ========================================================================

    /// Drop whatever is held. The alias is kept.
    pub fn clear(&mut self) {
        self.member = Member::None;
    }

    pub fn set_nested_object(&mut self, object: Box<dyn VocabObject>) {
        self.clear();
        self.member = Member::NestedObject(object);
    }

    pub fn set_scalar(&mut self, scalar: Scalar) {
        self.clear();
        self.member = Member::Scalar(scalar);
    }

    pub fn set_reference(&mut self, iri: Iri) {
        self.clear();
        self.member = Member::Reference(iri);
    }

    /// Carry an unrecognized raw value, to be written back unchanged.
    pub fn set_opaque(&mut self, raw: RawValue) {
        self.clear();
        self.member = Member::Opaque(raw);
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn kind(&self) -> Kind {
        match self.member {
            Member::None => Kind::None,
            Member::NestedObject(_) => Kind::NestedObject,
            Member::Scalar(_) => Kind::Scalar,
            Member::Reference(_) => Kind::Reference,
            Member::Opaque(_) => Kind::Opaque,
        }
    }

    pub fn is_nested_object(&self) -> bool { self.kind() == Kind::NestedObject }
    pub fn is_scalar(&self) -> bool { self.kind() == Kind::Scalar }
    pub fn is_reference(&self) -> bool { self.kind() == Kind::Reference }
    pub fn is_opaque(&self) -> bool { self.kind() == Kind::Opaque }

    /// True for every kind except `None`, opaque payloads included.
    pub fn has_any(&self) -> bool { self.kind() != Kind::None }

    /// Holds the property's designated kind (a scalar or nested object).
    pub fn has_value(&self) -> bool { self.is_scalar() || self.is_nested_object() }

    /// `0` for a designated value, `-2` for an IRI, `-1` otherwise.
    ///
    /// Stable across implementations; only meaningful for comparing values
    /// of the same property.
    pub fn kind_index(&self) -> i32 {
        match self.kind() {
            Kind::NestedObject | Kind::Scalar => 0,
            Kind::Reference => -2,
            Kind::None | Kind::Opaque => -1,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn nested_object(&self) -> Option<&dyn VocabObject> {
        match &self.member {
            Member::NestedObject(obj) => Some(obj.as_ref()),
            _ => None,
        }
    }

    pub fn scalar(&self) -> Option<&Scalar> {
        match &self.member {
            Member::Scalar(s) => Some(s),
            _ => None,
        }
    }

    pub fn reference(&self) -> Option<&Iri> {
        match &self.member {
            Member::Reference(iri) => Some(iri),
            _ => None,
        }
    }

    pub fn opaque(&self) -> Option<&RawValue> {
        match &self.member {
            Member::Opaque(raw) => Some(raw),
            _ => None,
        }
    }
}

impl fmt::Debug for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyValue")
            .field("name", &self.def.name)
            .field("alias", &self.alias)
            .field("member", &self.member)
            .finish()
    }
}
