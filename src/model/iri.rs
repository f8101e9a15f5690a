//! IRI references — absolute URIs with a non-empty scheme.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::{Error, Result};

/// An absolute IRI.
///
/// A string only becomes an `Iri` if it parses as a URI *and* carries a
/// non-empty scheme. Bare tokens such as `"42"` or `"inbox"` are rejected
/// even where a lenient parser would accept them as relative references.
///
/// The text is kept as written: encoding and ordering use it verbatim, and
/// the parsed form only serves validation and component access.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Iri {
    raw: String,
    url: Url,
}

impl Iri {
    pub fn parse(input: &str) -> Result<Self> {
        let url = Url::parse(input).map_err(|e| Error::InvalidIri {
            input: input.to_owned(),
            reason: e.to_string(),
        })?;
        if url.scheme().is_empty() {
            return Err(Error::InvalidIri {
                input: input.to_owned(),
                reason: "empty scheme".into(),
            });
        }
        Ok(Self { raw: input.to_owned(), url })
    }

    /// The IRI exactly as written, used for encoding and ordering.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn scheme(&self) -> &str {
        self.url.scheme()
    }

    /// WHATWG-normalized form (lowercased host, default port dropped).
    pub fn as_url(&self) -> &Url {
        &self.url
    }
}

impl PartialOrd for Iri {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Iri {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl FromStr for Iri {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> { Self::parse(s) }
}

impl TryFrom<String> for Iri {
    type Error = Error;
    fn try_from(raw: String) -> Result<Self> {
        let url = Self::parse(&raw)?.url;
        Ok(Self { raw, url })
    }
}

impl From<Iri> for String {
    fn from(iri: Iri) -> Self { iri.raw }
}

impl fmt::Display for Iri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
