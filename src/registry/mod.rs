//! # Object Registry
//!
//! The contract between the property decoder and whatever knows how to build
//! typed vocabulary objects. The decoder hands a nested map plus the alias map
//! to [`ObjectRegistry::try_deserialize`]; an `Err` means "not this type" and
//! is never surfaced past the decoder.
//!
//! ## Implementations
//!
//! | Registry | Description |
//! |----------|-------------|
//! | `TypeRegistry` | Name → deserializer table, extendable at runtime |
//! | (caller-defined) | Generated vocabularies, remote schema caches, test stubs |

pub mod object;

use std::fmt;
use std::sync::Arc;

use hashbrown::HashMap;
use parking_lot::RwLock;

use crate::model::{AliasMap, ContextMap, Document, RawValue};
use crate::vocab;
use crate::{Error, Result};

pub use object::GenericObject;

// ============================================================================
// VocabObject
// ============================================================================

/// A typed vocabulary object nested inside a property value.
pub trait VocabObject: fmt::Debug + Send + Sync {
    /// Vocabulary type name, e.g. `"OrderedCollection"`.
    fn type_name(&self) -> &str;

    fn serialize(&self) -> Result<RawValue>;

    /// Namespace → alias entries this object needs in `@context`.
    fn json_ld_context(&self) -> ContextMap;

    /// Stable ordering against another object of the same property.
    fn less_than(&self, other: &dyn VocabObject) -> bool;

    fn clone_box(&self) -> Box<dyn VocabObject>;
}

impl Clone for Box<dyn VocabObject> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

// ============================================================================
// ObjectRegistry
// ============================================================================

/// Builds typed objects from nested maps.
///
/// Implementations must return `Err` rather than panic when the map is
/// well-formed but not an instance of `type_name`.
pub trait ObjectRegistry: Send + Sync {
    fn try_deserialize(
        &self,
        type_name: &str,
        map: &Document,
        alias_map: &AliasMap,
    ) -> Result<Box<dyn VocabObject>>;
}

/// Deserializer for a single registered type.
pub type Deserializer =
    Arc<dyn Fn(&Document, &AliasMap) -> Result<Box<dyn VocabObject>> + Send + Sync>;

// ============================================================================
// TypeRegistry
// ============================================================================

/// Type name → deserializer table.
///
/// Registration takes `&self`, so a registry can be shared behind an `Arc`
/// and still be extended with extension types after construction.
#[derive(Default)]
pub struct TypeRegistry {
    deserializers: RwLock<HashMap<String, Deserializer>>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry that accepts the core ActivityStreams types as [`GenericObject`]s.
    pub fn with_activity_streams() -> Self {
        let registry = Self::new();
        for ty in vocab::ACTIVITY_STREAMS_TYPES {
            registry.register_generic(ty, vocab::ACTIVITY_STREAMS);
        }
        registry
    }

    /// Register (or replace) the deserializer for `type_name`.
    pub fn register<F>(&self, type_name: impl Into<String>, deserializer: F)
    where
        F: Fn(&Document, &AliasMap) -> Result<Box<dyn VocabObject>> + Send + Sync + 'static,
    {
        let type_name = type_name.into();
        let replaced = self
            .deserializers
            .write()
            .insert(type_name.clone(), Arc::new(deserializer))
            .is_some();
        if replaced {
            tracing::debug!(%type_name, "replaced registered deserializer");
        }
    }

    /// Register `type_name` in `namespace` as a schema-less [`GenericObject`].
    pub fn register_generic(&self, type_name: &'static str, namespace: &'static str) {
        self.register(type_name, move |map, aliases| {
            GenericObject::deserialize(type_name, namespace, map, aliases)
                .map(|obj| Box::new(obj) as Box<dyn VocabObject>)
        });
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.deserializers.read().contains_key(type_name)
    }

    pub fn len(&self) -> usize {
        self.deserializers.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ObjectRegistry for TypeRegistry {
    fn try_deserialize(
        &self,
        type_name: &str,
        map: &Document,
        alias_map: &AliasMap,
    ) -> Result<Box<dyn VocabObject>> {
        // Clone the handle out so the lock is not held across user code.
        let deserializer = self
            .deserializers
            .read()
            .get(type_name)
            .cloned()
            .ok_or_else(|| Error::UnknownType(type_name.to_owned()))?;
        deserializer(map, alias_map)
    }
}

impl fmt::Debug for TypeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.deserializers.read();
        let mut names: Vec<&String> = guard.keys().collect();
        names.sort();
        f.debug_struct("TypeRegistry").field("types", &names).finish()
    }
}
