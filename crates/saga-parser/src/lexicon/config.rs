//! Serializable lexicon configuration.
//!
//! This is the swappable data surface for the parser: a locale or house-rule
//! vocabulary is just a different [`LexiconConfig`]. Keys are kept as strings
//! so that validation can report unknown verb or direction names precisely.

use serde::{Deserialize, Serialize};

/// The on-disk shape of a lexicon.
///
/// Object key order is significant: verbs earlier in `verbs` win ties between
/// equally long multi-word phrases.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LexiconConfig {
    /// Layer this configuration on top of the builtin English tables.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub extend_builtin: bool,
    /// Canonical verb name to ordered surface phrases.
    #[serde(default, with = "ordered")]
    pub verbs: Vec<(String, Vec<String>)>,
    /// Surfaces whose verb depends on arguments or combat mode.
    #[serde(default, with = "ordered")]
    pub contextual: Vec<(String, ContextualConfig)>,
    /// Canonical direction name to ordered single-word synonyms.
    #[serde(default, with = "ordered")]
    pub directions: Vec<(String, Vec<String>)>,
    /// Per-verb argument grammar.
    #[serde(default, with = "ordered")]
    pub grammar: Vec<(String, GrammarConfig)>,
    /// Articles stripped from the front of targets.
    #[serde(default)]
    pub articles: Vec<String>,
    /// Polite or hedging prefixes removed before parsing.
    #[serde(default)]
    pub fillers: Vec<String>,
    /// Pronouns that refer to the current conversation partner.
    #[serde(default)]
    pub pronouns: Vec<String>,
}

/// A surface whose canonical verb is chosen per call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContextualConfig {
    /// Verb when nothing follows the surface.
    pub bare: String,
    /// Verb when an argument follows the surface.
    pub with_argument: String,
    /// Verb when nothing follows and combat is active.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_combat: Option<String>,
}

/// Argument words for one verb.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GrammarConfig {
    /// Prepositions dropped from the start of the argument ("talk *to* X").
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skip: Vec<String>,
    /// Words splitting target from secondary target ("give X *to* Y").
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub separators: Vec<String>,
    /// Words splitting target from a free-text topic ("ask X *about* Y").
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub topics: Vec<String>,
}

impl LexiconConfig {
    /// Parse a configuration from JSON text.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Layer `self` on top of `base`.
    ///
    /// Synonym lists are appended to the matching key, contextual and grammar
    /// entries replace the base entry with the same key, and word lists are
    /// extended without duplicates. The `extend_builtin` flag is cleared.
    pub fn layered_on(self, mut base: LexiconConfig) -> LexiconConfig {
        for (key, surfaces) in self.verbs {
            append_entry(&mut base.verbs, &key, surfaces, verb_key);
        }
        for (key, surfaces) in self.directions {
            append_entry(&mut base.directions, &key, surfaces, plain_key);
        }
        for (key, rule) in self.contextual {
            replace_entry(&mut base.contextual, key, rule, plain_key);
        }
        for (key, grammar) in self.grammar {
            replace_entry(&mut base.grammar, key, grammar, verb_key);
        }
        extend_unique(&mut base.articles, self.articles);
        extend_unique(&mut base.fillers, self.fillers);
        extend_unique(&mut base.pronouns, self.pronouns);
        base.extend_builtin = false;
        base
    }
}

/// Verb keys compare by canonical name so `order` and `party_order` meet.
fn verb_key(key: &str) -> String {
    key.parse::<crate::CanonicalVerb>()
        .map(|verb| verb.name().to_string())
        .unwrap_or_else(|_| plain_key(key))
}

fn plain_key(key: &str) -> String {
    key.trim().to_lowercase()
}

fn append_entry(
    entries: &mut Vec<(String, Vec<String>)>,
    key: &str,
    surfaces: Vec<String>,
    normalize: fn(&str) -> String,
) {
    let wanted = normalize(key);
    match entries.iter_mut().find(|(k, _)| normalize(k) == wanted) {
        Some((_, existing)) => extend_unique(existing, surfaces),
        None => entries.push((key.to_string(), surfaces)),
    }
}

fn replace_entry<V>(
    entries: &mut Vec<(String, V)>,
    key: String,
    value: V,
    normalize: fn(&str) -> String,
) {
    let wanted = normalize(&key);
    match entries.iter_mut().find(|(k, _)| normalize(k) == wanted) {
        Some(slot) => slot.1 = value,
        None => entries.push((key, value)),
    }
}

fn extend_unique(target: &mut Vec<String>, extra: Vec<String>) {
    for word in extra {
        if !target.contains(&word) {
            target.push(word);
        }
    }
}

/// Serde adapter storing a JSON object as an ordered list of entries.
mod ordered {
    use std::fmt;
    use std::marker::PhantomData;

    use serde::de::{MapAccess, Visitor};
    use serde::ser::SerializeMap;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S, V>(entries: &[(String, V)], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        V: Serialize,
    {
        let mut map = serializer.serialize_map(Some(entries.len()))?;
        for (key, value) in entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }

    pub fn deserialize<'de, D, V>(deserializer: D) -> Result<Vec<(String, V)>, D::Error>
    where
        D: Deserializer<'de>,
        V: Deserialize<'de>,
    {
        struct EntriesVisitor<V>(PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for EntriesVisitor<V> {
            type Value = Vec<(String, V)>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, value)) = access.next_entry::<String, V>()? {
                    entries.push((key, value));
                }
                Ok(entries)
            }
        }

        deserializer.deserialize_map(EntriesVisitor(PhantomData))
    }
}
