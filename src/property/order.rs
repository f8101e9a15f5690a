//! Stable ordering of property values.
//!
//! Non-functional properties are normalized by sorting their values with
//! [`PropertyValue::less_than`]. Independent implementations must produce the
//! same sequence, so the ladder below is fixed:
//!
//! 1. IRI vs IRI: bytewise on the text as written
//! 2. IRI vs anything else: the IRI is less
//! 3. neither holds a value (empty or opaque): equal
//! 4. value vs no value: the value is greater
//! 5. value vs value: the codec's or the object's own ordering

use std::cmp::Ordering;

use super::{Member, PropertyValue};

impl PropertyValue {
    /// Strict weak ordering over values of the same property.
    pub fn less_than(&self, other: &PropertyValue) -> bool {
        // IRIs first.
        match (&self.member, &other.member) {
            (Member::Reference(a), Member::Reference(b)) => return a.as_str() < b.as_str(),
            (Member::Reference(_), _) => return true,
            (_, Member::Reference(_)) => return false,
            _ => {}
        }

        // Then the designated value, or its absence.
        match (self.has_value(), other.has_value()) {
            (false, false) => false,
            (true, false) => false,
            (false, true) => true,
            (true, true) => match (&self.member, &other.member) {
                (Member::Scalar(a), Member::Scalar(b)) => a.less(b),
                (Member::NestedObject(a), Member::NestedObject(b)) => a.less_than(b.as_ref()),
                // Only reachable when comparing values of different properties.
                (Member::Scalar(_), _) => true,
                _ => false,
            },
        }
    }

    /// Total ordering derived from [`less_than`](Self::less_than).
    pub fn compare(&self, other: &PropertyValue) -> Ordering {
        if self.less_than(other) {
            Ordering::Less
        } else if other.less_than(self) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

/// Sort the values of a non-functional property into canonical order.
///
/// Stable: values that compare equal (e.g. two opaque payloads) keep their
/// relative input order.
pub fn normalize(values: &mut [PropertyValue]) {
    values.sort_by(PropertyValue::compare);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::Scalar;
    use crate::model::Iri;
    use crate::registry::GenericObject;
    use crate::vocab;
    use serde_json::json;

    fn iri(s: &str) -> PropertyValue {
        let mut v = PropertyValue::new(&vocab::ACCURACY);
        v.set_reference(Iri::parse(s).unwrap());
        v
    }

    fn float(f: f64) -> PropertyValue {
        let mut v = PropertyValue::new(&vocab::ACCURACY);
        v.set_scalar(Scalar::float(f));
        v
    }

    fn opaque() -> PropertyValue {
        let mut v = PropertyValue::new(&vocab::ACCURACY);
        v.set_opaque(json!({"unknown": true}));
        v
    }

    fn empty() -> PropertyValue {
        PropertyValue::new(&vocab::ACCURACY)
    }

    #[test]
    fn test_iri_vs_iri() {
        assert!(iri("a://x").less_than(&iri("b://x")));
        assert!(!iri("b://x").less_than(&iri("a://x")));
        assert!(!iri("a://x").less_than(&iri("a://x")));
    }

    #[test]
    fn test_iri_order_uses_text_as_written() {
        assert!(iri("https://B.example/").less_than(&iri("https://a.example/")));
        assert!(!iri("https://a.example/").less_than(&iri("https://B.example/")));
    }

    #[test]
    fn test_iri_less_than_everything_else() {
        for other in [float(0.0), float(-1e9), opaque(), empty()] {
            assert!(iri("a://x").less_than(&other));
            assert!(!other.less_than(&iri("a://x")));
        }
    }

    #[test]
    fn test_unset_pairs_are_equal() {
        assert!(!empty().less_than(&empty()));
        assert!(!empty().less_than(&opaque()));
        assert!(!opaque().less_than(&empty()));
        assert!(!opaque().less_than(&opaque()));
    }

    #[test]
    fn test_value_greater_than_unset() {
        assert!(empty().less_than(&float(0.0)));
        assert!(opaque().less_than(&float(0.0)));
        assert!(!float(0.0).less_than(&empty()));
        assert!(!float(0.0).less_than(&opaque()));
    }

    #[test]
    fn test_values_delegate_to_codec() {
        assert!(float(1.0).less_than(&float(2.0)));
        assert!(!float(2.0).less_than(&float(1.0)));
        assert_eq!(float(2.0).compare(&float(2.0)), Ordering::Equal);
    }

    #[test]
    fn test_nested_objects_delegate() {
        let obj = |id: &str| {
            let mut o = GenericObject::new("OrderedCollection", vocab::ACTIVITY_STREAMS);
            o.insert("id", id);
            let mut v = PropertyValue::new(&vocab::INBOX);
            v.set_nested_object(Box::new(o));
            v
        };
        assert!(obj("https://a.example/").less_than(&obj("https://b.example/")));
        assert!(!obj("https://b.example/").less_than(&obj("https://a.example/")));
    }

    #[test]
    fn test_normalize_order() {
        let mut values = vec![float(2.0), opaque(), iri("b://y"), float(1.0), iri("a://x")];
        normalize(&mut values);
        let kinds: Vec<i32> = values.iter().map(PropertyValue::kind_index).collect();
        assert_eq!(kinds, vec![-2, -2, -1, 0, 0]);
        assert_eq!(values[0].reference().unwrap().as_str(), "a://x");
        assert_eq!(values[3].scalar().unwrap(), &Scalar::float(1.0));
    }

    #[test]
    fn test_normalize_with_nan_floats() {
        let mut values: Vec<_> = [f64::NAN, 3.0, f64::NAN, -1.0, 0.5, f64::NAN]
            .into_iter()
            .map(float)
            .collect();
        normalize(&mut values);
        for pair in values.windows(2) {
            assert!(!pair[1].less_than(&pair[0]));
        }
        assert_eq!(values[0].scalar().unwrap(), &Scalar::float(-1.0));
    }
}
