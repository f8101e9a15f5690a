//! End-to-end decode → encode tests over whole documents.
//!
//! Each test reads properties out of a JSON document, inspects the decoded
//! kind, and writes them back, checking the output matches the input up to
//! each codec's canonical form.

use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use streams_props::{
    decode, vocab, AliasMap, Document, Kind, PropertyDef, PropertyValue, RawValue, ScalarValue,
    TypeRegistry,
};

// ============================================================================
// Helpers
// ============================================================================

fn doc(v: Value) -> Document {
    serde_json::from_value(v).unwrap()
}

fn as_aliases() -> AliasMap {
    let mut aliases = AliasMap::new();
    aliases.insert(vocab::ACTIVITY_STREAMS_VOCABULARY.into(), "as".into());
    aliases
}

/// Decode every listed property present in `input` and write them all back.
fn round_trip(defs: &[&'static PropertyDef], input: &Document, aliases: &AliasMap) -> Document {
    let registry = TypeRegistry::with_activity_streams();
    let mut out = Document::new();
    for &def in defs {
        if let Some(value) = PropertyValue::deserialize(def, input, aliases, &registry) {
            value.serialize_into(&mut out).unwrap();
        }
    }
    out
}

// ============================================================================
// 1. The four decode outcomes
// ============================================================================

#[test]
fn test_inbox_iri_decodes_to_reference() {
    let registry = TypeRegistry::with_activity_streams();
    let v = decode(&vocab::INBOX, &json!("https://example.com/inbox"), &AliasMap::new(), &registry);
    assert_eq!(v.kind(), Kind::Reference);
    assert_eq!(v.serialize().unwrap(), Some(json!("https://example.com/inbox")));
}

#[test]
fn test_inbox_collection_decodes_to_nested_object() {
    let raw = json!({"type": "OrderedCollection", "totalItems": 0});
    let registry = TypeRegistry::with_activity_streams();
    let v = decode(&vocab::INBOX, &raw, &AliasMap::new(), &registry);
    assert_eq!(v.kind(), Kind::NestedObject);
    assert_eq!(v.serialize().unwrap(), Some(raw));
}

#[test]
fn test_inbox_collection_without_registry_entry_is_opaque() {
    let raw = json!({"type": "OrderedCollection", "totalItems": 0});
    let v = decode(&vocab::INBOX, &raw, &AliasMap::new(), &TypeRegistry::new());
    assert_eq!(v.kind(), Kind::Opaque);
    assert_eq!(v.serialize().unwrap(), Some(raw));
}

#[test]
fn test_accuracy_float_decodes_to_scalar() {
    let v = decode(&vocab::ACCURACY, &json!(3.14), &AliasMap::new(), &TypeRegistry::new());
    assert_eq!(v.kind(), Kind::Scalar);
    assert_eq!(v.scalar().unwrap().value(), &ScalarValue::Float(3.14));
    assert_eq!(v.serialize().unwrap(), Some(json!(3.14)));
}

#[test]
fn test_accuracy_numeric_string_is_scalar_not_reference() {
    let v = decode(&vocab::ACCURACY, &json!("42"), &AliasMap::new(), &TypeRegistry::new());
    assert_eq!(v.kind(), Kind::Scalar);
    assert_eq!(v.scalar().unwrap().value(), &ScalarValue::Float(42.0));
}

#[test]
fn test_empty_map_is_opaque_and_reencodes_verbatim() {
    let registry = TypeRegistry::with_activity_streams();
    let v = decode(&vocab::INBOX, &json!({}), &AliasMap::new(), &registry);
    assert_eq!(v.kind(), Kind::Opaque);
    assert_eq!(v.opaque(), Some(&json!({})));
    assert_eq!(v.serialize().unwrap(), Some(json!({})));
}

#[test]
fn test_unparseable_scalar_is_opaque() {
    let v = decode(&vocab::PUBLISHED, &json!("last tuesday"), &AliasMap::new(), &TypeRegistry::new());
    assert_eq!(v.kind(), Kind::Opaque);
    assert_eq!(v.serialize().unwrap(), Some(json!("last tuesday")));
}

#[test]
fn test_out_of_range_duration_is_opaque() {
    let raw = json!("P99999999999999999999999Y");
    let v = decode(&vocab::DURATION, &raw, &AliasMap::new(), &TypeRegistry::new());
    assert_eq!(v.kind(), Kind::Opaque);
    assert_eq!(v.serialize().unwrap(), Some(raw));
}

#[test]
fn test_reference_reencodes_as_written() {
    let registry = TypeRegistry::with_activity_streams();
    for s in ["https://example.com", "https://EXAMPLE.com/a", "http://example.com:80/x"] {
        let v = decode(&vocab::INBOX, &json!(s), &AliasMap::new(), &registry);
        assert_eq!(v.kind(), Kind::Reference);
        assert_eq!(v.serialize().unwrap(), Some(json!(s)));
    }
}

// ============================================================================
// 2. Absence vs presence
// ============================================================================

#[test]
fn test_missing_key_is_absence() {
    let input = doc(json!({"type": "Person"}));
    let registry = TypeRegistry::with_activity_streams();
    assert!(PropertyValue::deserialize(&vocab::INBOX, &input, &AliasMap::new(), &registry).is_none());
}

#[test]
fn test_null_is_present_and_opaque() {
    let input = doc(json!({"inbox": null}));
    let registry = TypeRegistry::with_activity_streams();
    let v = PropertyValue::deserialize(&vocab::INBOX, &input, &AliasMap::new(), &registry).unwrap();
    assert!(v.is_opaque());
    assert_eq!(v.serialize().unwrap(), Some(RawValue::Null));
}

// ============================================================================
// 3. Whole documents
// ============================================================================

#[test]
fn test_actor_document_round_trip() {
    let input = doc(json!({
        "inbox": "https://example.com/alice/inbox",
        "outbox": {"type": "OrderedCollection", "id": "https://example.com/alice/outbox"},
        "followers": {"something": "unrecognized"},
        "preferredUsername": "alice",
        "published": "2019-03-01T10:00:00Z",
        "sensitive": false,
    }));
    let defs = [
        &vocab::INBOX,
        &vocab::OUTBOX,
        &vocab::FOLLOWERS,
        &vocab::PREFERRED_USERNAME,
        &vocab::PUBLISHED,
        &vocab::SENSITIVE,
    ];
    let out = round_trip(&defs, &input, &AliasMap::new());
    assert_eq!(Value::Object(out), Value::Object(input));
}

#[test]
fn test_place_document_round_trip() {
    let input = doc(json!({
        "accuracy": 94.5,
        "altitude": 15,
        "latitude": 36.75,
        "longitude": -119.7667,
        "radius": 25,
    }));
    let defs = [&vocab::ACCURACY, &vocab::ALTITUDE, &vocab::LATITUDE, &vocab::LONGITUDE, &vocab::RADIUS];
    let out = round_trip(&defs, &input, &AliasMap::new());
    assert_eq!(Value::Object(out), Value::Object(input));
}

#[test]
fn test_canonical_forms() {
    let input = doc(json!({
        "published": "2019-03-01T12:00:00+02:00",
        "duration": "PT90M",
        "accuracy": "12.5",
    }));
    let out = round_trip(&[&vocab::PUBLISHED, &vocab::DURATION, &vocab::ACCURACY], &input, &AliasMap::new());
    assert_eq!(
        Value::Object(out),
        json!({
            "published": "2019-03-01T10:00:00Z",
            "duration": "PT1H30M",
            "accuracy": 12.5,
        })
    );
}

#[test]
fn test_aliased_document_round_trip() {
    let input = doc(json!({
        "as:inbox": "https://example.com/inbox",
        "as:totalItems": 3,
        "as:hreflang": "en-GB",
    }));
    let out = round_trip(&[&vocab::INBOX, &vocab::TOTAL_ITEMS, &vocab::HREFLANG], &input, &as_aliases());
    assert_eq!(Value::Object(out), Value::Object(input));
}

#[test]
fn test_bare_key_ignored_when_aliased() {
    let input = doc(json!({"inbox": "https://example.com/inbox"}));
    let registry = TypeRegistry::with_activity_streams();
    assert!(PropertyValue::deserialize(&vocab::INBOX, &input, &as_aliases(), &registry).is_none());
}

// ============================================================================
// 4. Context requirements across a document
// ============================================================================

#[test]
fn test_document_context_aggregation() {
    let input = doc(json!({
        "as:inbox": {"type": "OrderedCollection"},
        "as:accuracy": 1.0,
    }));
    let registry = TypeRegistry::with_activity_streams();
    let aliases = as_aliases();

    let mut ctx = streams_props::ContextMap::new();
    for def in [&vocab::INBOX, &vocab::ACCURACY] {
        let v = PropertyValue::deserialize(def, &input, &aliases, &registry).unwrap();
        v.merge_context(&mut ctx);
    }
    assert_eq!(ctx.len(), 2);
    assert_eq!(ctx[vocab::ACTIVITY_STREAMS_VOCABULARY], "as");
    // No alias was declared for the type namespace.
    assert_eq!(ctx[vocab::ACTIVITY_STREAMS], "");
}
