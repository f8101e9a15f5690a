//! Encoding and `@context` requirements.

use crate::alias::compact_key;
use crate::model::{ContextMap, Document, RawValue};
use crate::Result;
use super::{Member, PropertyValue};

impl PropertyValue {
    /// The raw form of this value, the inverse of decoding.
    ///
    /// `Ok(None)` for an empty value: the property is simply not written.
    /// Errors come only from a nested object's serializer or a scalar whose
    /// codec refuses it.
    pub fn serialize(&self) -> Result<Option<RawValue>> {
        let raw = match &self.member {
            Member::None => return Ok(None),
            Member::NestedObject(obj) => obj.serialize()?,
            Member::Scalar(scalar) => scalar.encode()?,
            Member::Reference(iri) => RawValue::String(iri.as_str().to_owned()),
            Member::Opaque(raw) => raw.clone(),
        };
        Ok(Some(raw))
    }

    /// Write this value into `doc` under its (alias-qualified) key.
    pub fn serialize_into(&self, doc: &mut Document) -> Result<()> {
        if let Some(raw) = self.serialize()? {
            doc.insert(compact_key(&self.alias, self.def.name), raw);
        }
        Ok(())
    }

    /// Add this value's context requirements to `into`.
    ///
    /// Existing entries are never overwritten: entries fixed when the
    /// vocabulary was generated take precedence over aliases discovered
    /// in nested values.
    pub fn merge_context(&self, into: &mut ContextMap) {
        into.entry(self.def.namespace.to_owned())
            .or_insert_with(|| self.alias.clone());
        if let Member::NestedObject(obj) = &self.member {
            for (namespace, alias) in obj.json_ld_context() {
                into.entry(namespace).or_insert(alias);
            }
        }
    }

    /// Context requirements of this value alone.
    pub fn json_ld_context(&self) -> ContextMap {
        let mut ctx = ContextMap::new();
        self.merge_context(&mut ctx);
        ctx
    }
}
