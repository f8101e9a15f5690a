//! Alias resolution for compact property names.
//!
//! A document may import a vocabulary under a short alias (`"as"`), in which
//! case its keys appear as `as:inbox` instead of `inbox`. The alias found at
//! decode time is kept on the value and reused when writing it back out.

use super::model::AliasMap;

/// The alias in effect for `namespace`, or `""` when the document uses bare names.
pub fn resolve_alias<'a>(namespace: &str, alias_map: &'a AliasMap) -> &'a str {
    alias_map.get(namespace).map(String::as_str).unwrap_or("")
}

/// The document key under which property `name` of `namespace` is found.
pub fn resolve_key(namespace: &str, alias_map: &AliasMap, name: &str) -> String {
    compact_key(resolve_alias(namespace, alias_map), name)
}

/// `"<alias>:<name>"`, or `name` unchanged for an empty alias.
pub fn compact_key(alias: &str, name: &str) -> String {
    if alias.is_empty() {
        name.to_owned()
    } else {
        format!("{alias}:{name}")
    }
}
