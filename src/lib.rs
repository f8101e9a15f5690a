//! # streams-props — Property Values for ActivityStreams Vocabularies
//!
//! The generic value model behind every property of an ActivityStreams-style
//! linked-data vocabulary. A property such as `inbox` or `accuracy` holds
//! exactly one of: a nested typed object, a scalar of a fixed primitive kind,
//! an IRI reference, or an opaque payload kept for forward compatibility.
//!
//! ## Design Principles
//!
//! 1. **Closed variant**: `PropertyValue` is a sum type, so at most one kind
//!    is ever populated
//! 2. **Injected collaborators**: `ScalarCodec` and `ObjectRegistry` are traits
//!    handed to the decoder, never global tables
//! 3. **Decode never fails**: anything unrecognized degrades to `Opaque`
//! 4. **Stable ordering**: `less_than` reproduces the cross-implementation
//!    normalization ladder exactly
//!
//! ## Quick Start
//!
//! ```rust
//! use streams_props::{AliasMap, Document, PropertyValue, TypeRegistry, vocab};
//! use serde_json::json;
//!
//! # fn example() -> streams_props::Result<()> {
//! let registry = TypeRegistry::with_activity_streams();
//! let doc: Document = serde_json::from_value(json!({
//!     "inbox": "https://example.com/inbox",
//!     "accuracy": 94.5,
//! }))?;
//!
//! let inbox = PropertyValue::deserialize(&vocab::INBOX, &doc, &AliasMap::new(), &registry)
//!     .expect("inbox present");
//! assert!(inbox.is_reference());
//!
//! let accuracy = PropertyValue::deserialize(&vocab::ACCURACY, &doc, &AliasMap::new(), &registry)
//!     .expect("accuracy present");
//! assert_eq!(accuracy.serialize()?, Some(json!(94.5)));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Built-in Scalar Codecs
//!
//! | Codec | Wire form |
//! |-------|-----------|
//! | `FloatCodec` | JSON number |
//! | `NonNegativeIntegerCodec` | JSON integer ≥ 0 |
//! | `BooleanCodec` | JSON bool |
//! | `StringCodec` / `Bcp47Codec` | JSON string |
//! | `LangStringCodec` | map of language tag → string |
//! | `DateTimeCodec` | RFC 3339 string |
//! | `DurationCodec` | xsd:duration string |

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod alias;
pub mod codec;
pub mod registry;
pub mod property;
pub mod vocab;

// ============================================================================
// Re-exports: Model
// ============================================================================

pub use model::{AliasMap, ContextMap, Document, Iri, RawValue};

// ============================================================================
// Re-exports: Collaborators
// ============================================================================

pub use codec::{
    Scalar, ScalarCodec, ScalarValue, XsdDuration,
    Bcp47Codec, BooleanCodec, DateTimeCodec, DurationCodec, FloatCodec,
    LangStringCodec, NonNegativeIntegerCodec, StringCodec,
};
pub use registry::{GenericObject, ObjectRegistry, TypeRegistry, VocabObject};

// ============================================================================
// Re-exports: Properties
// ============================================================================

pub use property::{Kind, PropertyDef, PropertyValue, Range, decode, normalize};

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid IRI {input:?}: {reason}")]
    InvalidIri { input: String, reason: String },

    #[error("Unexpected shape: expected {expected}, got {got}")]
    UnexpectedShape { expected: &'static str, got: &'static str },

    #[error("Invalid {kind} literal: {message}")]
    InvalidLiteral { kind: &'static str, message: String },

    #[error("Unknown type: {0}")]
    UnknownType(String),

    #[error("Type mismatch: expected {expected}, got {got}")]
    TypeMismatch { expected: String, got: String },

    #[error("Codec {codec} cannot encode a {got} scalar")]
    ScalarKindMismatch { codec: &'static str, got: &'static str },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
