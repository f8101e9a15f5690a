//! Decoding raw document values into `PropertyValue`s.
//!
//! Precedence, first match wins:
//!
//! 1. string with an absolute IRI → `Reference`
//! 2. map accepted by the registry as the property's object type → `NestedObject`
//! 3. value accepted by the property's codec → `Scalar`
//! 4. anything else → `Opaque`, verbatim
//!
//! A branch that fails hands over to the next one. Decoding itself cannot
//! fail: the worst outcome for malformed input is an opaque value.

use crate::alias::resolve_alias;
use crate::codec::Scalar;
use crate::model::{AliasMap, Document, Iri, RawValue};
use crate::registry::ObjectRegistry;
use super::{Member, PropertyDef, PropertyValue, Range};

/// Decode `raw`, the value found under `def`'s key.
pub fn decode(
    def: &'static PropertyDef,
    raw: &RawValue,
    alias_map: &AliasMap,
    registry: &dyn ObjectRegistry,
) -> PropertyValue {
    let alias = resolve_alias(def.namespace, alias_map);
    let member = decode_member(def, raw, alias_map, registry);
    PropertyValue { def, alias: alias.to_owned(), member }
}

fn decode_member(
    def: &'static PropertyDef,
    raw: &RawValue,
    alias_map: &AliasMap,
    registry: &dyn ObjectRegistry,
) -> Member {
    if let RawValue::String(s) = raw {
        // Not an IRI is not an error; it may still be a scalar.
        match Iri::parse(s) {
            Ok(iri) => return Member::Reference(iri),
            Err(e) => tracing::trace!(property = def.name, error = %e, "not a reference"),
        }
    }

    match def.range {
        Range::Object(type_name) => {
            if let RawValue::Object(map) = raw {
                match registry.try_deserialize(type_name, map, alias_map) {
                    Ok(obj) => return Member::NestedObject(obj),
                    Err(e) => tracing::trace!(
                        property = def.name,
                        type_name,
                        error = %e,
                        "registry did not accept nested object"
                    ),
                }
            }
        }
        Range::Scalar(codec) => match Scalar::decode(codec, raw) {
            Ok(scalar) => return Member::Scalar(scalar),
            Err(e) => tracing::trace!(
                property = def.name,
                codec = codec.name(),
                error = %e,
                "codec did not accept value"
            ),
        },
    }

    tracing::debug!(property = def.name, "keeping unrecognized value as opaque");
    Member::Opaque(raw.clone())
}

impl PropertyValue {
    /// Read `def` from `doc`.
    ///
    /// `None` means the key is absent. A present key always yields a value,
    /// opaque if nothing recognized it.
    pub fn deserialize(
        def: &'static PropertyDef,
        doc: &Document,
        alias_map: &AliasMap,
        registry: &dyn ObjectRegistry,
    ) -> Option<Self> {
        let key = def.key(alias_map);
        doc.get(&key).map(|raw| decode(def, raw, alias_map, registry))
    }
}
