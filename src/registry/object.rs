//! Schema-less vocabulary objects.

use std::cmp::Ordering;

use smallvec::SmallVec;

use crate::alias::resolve_alias;
use crate::model::{AliasMap, ContextMap, Document, RawValue, shape_name};
use crate::{Error, Result};
use super::VocabObject;

/// An object of a known type whose members are kept verbatim.
///
/// Recognizes a map by its `"type"` member only (a string, or an array
/// containing the name), with or without the document's alias prefix.
/// Everything else round-trips untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct GenericObject {
    type_name: String,
    namespace: String,
    alias: String,
    /// Type tokens as declared, alias prefix stripped.
    types: SmallVec<[String; 1]>,
    members: Document,
}

impl GenericObject {
    pub fn new(type_name: impl Into<String>, namespace: impl Into<String>) -> Self {
        let type_name = type_name.into();
        let mut members = Document::new();
        members.insert("type".into(), RawValue::String(type_name.clone()));
        Self {
            types: SmallVec::from_elem(type_name.clone(), 1),
            type_name,
            namespace: namespace.into(),
            alias: String::new(),
            members,
        }
    }

    /// Accept `map` if it declares `type_name`; reject it otherwise.
    pub fn deserialize(
        type_name: &str,
        namespace: &str,
        map: &Document,
        alias_map: &AliasMap,
    ) -> Result<Self> {
        let alias = resolve_alias(namespace, alias_map);
        let prefix = if alias.is_empty() { String::new() } else { format!("{alias}:") };
        let strip = |s: &str| s.strip_prefix(prefix.as_str()).unwrap_or(s).to_owned();

        let types: SmallVec<[String; 1]> = match map.get("type") {
            None => {
                return Err(Error::TypeMismatch {
                    expected: type_name.to_owned(),
                    got: "no \"type\" member".into(),
                });
            }
            Some(RawValue::String(s)) => SmallVec::from_elem(strip(s), 1),
            Some(RawValue::Array(items)) => items
                .iter()
                .filter_map(RawValue::as_str)
                .map(|s| strip(s))
                .collect(),
            Some(other) => {
                return Err(Error::UnexpectedShape {
                    expected: "string or array",
                    got: shape_name(other),
                });
            }
        };
        if !types.iter().any(|t| t == type_name) {
            return Err(Error::TypeMismatch {
                expected: type_name.to_owned(),
                got: types.join(", "),
            });
        }
        Ok(Self {
            type_name: type_name.to_owned(),
            namespace: namespace.to_owned(),
            alias: alias.to_owned(),
            types,
            members: map.clone(),
        })
    }

    pub fn id(&self) -> Option<&str> {
        self.members.get("id").and_then(RawValue::as_str)
    }

    pub fn types(&self) -> &[String] {
        &self.types
    }

    pub fn alias(&self) -> &str {
        &self.alias
    }

    pub fn get(&self, key: &str) -> Option<&RawValue> {
        self.members.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<RawValue>) {
        self.members.insert(key.into(), value.into());
    }

    pub fn members(&self) -> &Document {
        &self.members
    }
}

/// `id`, when the serialized form carries one.
fn serialized_id(raw: &RawValue) -> Option<&str> {
    raw.get("id").and_then(RawValue::as_str)
}

impl VocabObject for GenericObject {
    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn serialize(&self) -> Result<RawValue> {
        Ok(RawValue::Object(self.members.clone()))
    }

    fn json_ld_context(&self) -> ContextMap {
        let mut ctx = ContextMap::new();
        ctx.insert(self.namespace.clone(), self.alias.clone());
        ctx
    }

    /// Orders by `id` (absent first), then type name, then canonical JSON text.
    fn less_than(&self, other: &dyn VocabObject) -> bool {
        let Ok(theirs) = other.serialize() else {
            return false;
        };
        let ordering = self
            .id()
            .cmp(&serialized_id(&theirs))
            .then_with(|| self.type_name.as_str().cmp(other.type_name()))
            .then_with(|| {
                let mine = RawValue::Object(self.members.clone()).to_string();
                mine.cmp(&theirs.to_string())
            });
        ordering == Ordering::Less
    }

    fn clone_box(&self) -> Box<dyn VocabObject> {
        Box::new(self.clone())
    }
}
