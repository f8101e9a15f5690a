//! # ActivityStreams Vocabulary
//!
//! Namespaces and property definitions for the core ActivityStreams terms.
//! Each definition fixes a property's name, the namespace its alias is looked
//! up under, and the one value kind (besides IRIs) it accepts.
//!
//! Property keys are aliased under the vocabulary document URI while type
//! names use the `ns` URI; both appear in `@context` requirements.

use crate::codec::{
    Bcp47Codec, BooleanCodec, DateTimeCodec, DurationCodec, FloatCodec,
    NonNegativeIntegerCodec, StringCodec,
};
use crate::property::{PropertyDef, Range};

/// Namespace of ActivityStreams types.
pub const ACTIVITY_STREAMS: &str = "https://www.w3.org/ns/activitystreams";

/// Namespace ActivityStreams property keys are aliased under.
pub const ACTIVITY_STREAMS_VOCABULARY: &str = "https://www.w3.org/TR/activitystreams-vocabulary";

/// Core and extended types the default registry recognizes.
pub const ACTIVITY_STREAMS_TYPES: &[&str] = &[
    // Core
    "Object", "Link", "Activity", "IntransitiveActivity",
    "Collection", "OrderedCollection", "CollectionPage", "OrderedCollectionPage",
    // Actors
    "Application", "Group", "Organization", "Person", "Service",
    // Objects
    "Article", "Audio", "Document", "Event", "Image", "Note", "Page",
    "Place", "Profile", "Relationship", "Tombstone", "Video",
    // Links
    "Mention",
];

// ============================================================================
// Object-valued
// ============================================================================

pub static INBOX: PropertyDef =
    PropertyDef::functional("inbox", ACTIVITY_STREAMS_VOCABULARY, Range::Object("OrderedCollection"));

pub static OUTBOX: PropertyDef =
    PropertyDef::functional("outbox", ACTIVITY_STREAMS_VOCABULARY, Range::Object("OrderedCollection"));

pub static FOLLOWERS: PropertyDef =
    PropertyDef::functional("followers", ACTIVITY_STREAMS_VOCABULARY, Range::Object("Collection"));

pub static FOLLOWING: PropertyDef =
    PropertyDef::functional("following", ACTIVITY_STREAMS_VOCABULARY, Range::Object("Collection"));

pub static LIKED: PropertyDef =
    PropertyDef::functional("liked", ACTIVITY_STREAMS_VOCABULARY, Range::Object("Collection"));

// ============================================================================
// Numeric
// ============================================================================

pub static ACCURACY: PropertyDef =
    PropertyDef::functional("accuracy", ACTIVITY_STREAMS_VOCABULARY, Range::Scalar(&FloatCodec));

pub static ALTITUDE: PropertyDef =
    PropertyDef::functional("altitude", ACTIVITY_STREAMS_VOCABULARY, Range::Scalar(&FloatCodec));

pub static LATITUDE: PropertyDef =
    PropertyDef::functional("latitude", ACTIVITY_STREAMS_VOCABULARY, Range::Scalar(&FloatCodec));

pub static LONGITUDE: PropertyDef =
    PropertyDef::functional("longitude", ACTIVITY_STREAMS_VOCABULARY, Range::Scalar(&FloatCodec));

pub static RADIUS: PropertyDef =
    PropertyDef::functional("radius", ACTIVITY_STREAMS_VOCABULARY, Range::Scalar(&FloatCodec));

pub static TOTAL_ITEMS: PropertyDef = PropertyDef::functional(
    "totalItems",
    ACTIVITY_STREAMS_VOCABULARY,
    Range::Scalar(&NonNegativeIntegerCodec),
);

pub static START_INDEX: PropertyDef = PropertyDef::functional(
    "startIndex",
    ACTIVITY_STREAMS_VOCABULARY,
    Range::Scalar(&NonNegativeIntegerCodec),
);

pub static WIDTH: PropertyDef = PropertyDef::functional(
    "width",
    ACTIVITY_STREAMS_VOCABULARY,
    Range::Scalar(&NonNegativeIntegerCodec),
);

pub static HEIGHT: PropertyDef = PropertyDef::functional(
    "height",
    ACTIVITY_STREAMS_VOCABULARY,
    Range::Scalar(&NonNegativeIntegerCodec),
);

// ============================================================================
// Temporal
// ============================================================================

pub static DURATION: PropertyDef =
    PropertyDef::functional("duration", ACTIVITY_STREAMS_VOCABULARY, Range::Scalar(&DurationCodec));

pub static PUBLISHED: PropertyDef =
    PropertyDef::functional("published", ACTIVITY_STREAMS_VOCABULARY, Range::Scalar(&DateTimeCodec));

pub static UPDATED: PropertyDef =
    PropertyDef::functional("updated", ACTIVITY_STREAMS_VOCABULARY, Range::Scalar(&DateTimeCodec));

pub static START_TIME: PropertyDef =
    PropertyDef::functional("startTime", ACTIVITY_STREAMS_VOCABULARY, Range::Scalar(&DateTimeCodec));

pub static END_TIME: PropertyDef =
    PropertyDef::functional("endTime", ACTIVITY_STREAMS_VOCABULARY, Range::Scalar(&DateTimeCodec));

pub static DELETED: PropertyDef =
    PropertyDef::functional("deleted", ACTIVITY_STREAMS_VOCABULARY, Range::Scalar(&DateTimeCodec));

// ============================================================================
// Textual
// ============================================================================

pub static NAME: PropertyDef =
    PropertyDef::non_functional("name", ACTIVITY_STREAMS_VOCABULARY, Range::Scalar(&StringCodec));

pub static MEDIA_TYPE: PropertyDef =
    PropertyDef::functional("mediaType", ACTIVITY_STREAMS_VOCABULARY, Range::Scalar(&StringCodec));

pub static PREFERRED_USERNAME: PropertyDef = PropertyDef::functional(
    "preferredUsername",
    ACTIVITY_STREAMS_VOCABULARY,
    Range::Scalar(&StringCodec),
);

pub static HREFLANG: PropertyDef =
    PropertyDef::functional("hreflang", ACTIVITY_STREAMS_VOCABULARY, Range::Scalar(&Bcp47Codec));

/// ActivityPub's `sensitive` extension.
pub static SENSITIVE: PropertyDef =
    PropertyDef::functional("sensitive", ACTIVITY_STREAMS_VOCABULARY, Range::Scalar(&BooleanCodec));
