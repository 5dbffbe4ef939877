//! Immutable lookup tables used by the parser.
//!
//! A [`Lexicon`] is built once (from the builtin tables, a JSON file, or a
//! [`LexiconBuilder`]) and never changes afterwards. Every table the parser
//! consults lives here, so alternate vocabularies can coexist in the same
//! process without any synchronization.

mod builtin;
mod config;

use std::cmp::Reverse;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::path::Path;

use log::{info, warn};

pub use config::{ContextualConfig, GrammarConfig, LexiconConfig};

use crate::direction::Direction;
use crate::error::{LexiconError, LexiconResult};
use crate::verb::CanonicalVerb;

/// A surface whose verb is picked from argument presence and combat mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextualRule {
    /// The surface phrase, normalized.
    pub surface: String,
    /// Verb when no argument follows.
    pub bare: CanonicalVerb,
    /// Verb when an argument follows.
    pub with_argument: CanonicalVerb,
    /// Verb when no argument follows and combat is active.
    pub in_combat: Option<CanonicalVerb>,
}

impl ContextualRule {
    /// Choose the verb for this surface.
    pub fn resolve(&self, has_argument: bool, in_combat: bool) -> CanonicalVerb {
        if has_argument {
            return self.with_argument;
        }
        match self.in_combat {
            Some(verb) if in_combat => verb,
            _ => self.bare,
        }
    }
}

/// Argument words for one verb.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grammar {
    /// Prepositions dropped from the front of the argument.
    pub skip: Vec<String>,
    /// Words splitting target from secondary target.
    pub separators: Vec<String>,
    /// Words splitting target from a topic.
    pub topics: Vec<String>,
}

/// What a surface phrase stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Meaning {
    Verb(CanonicalVerb),
    /// Index into `Lexicon::contextual`.
    Contextual(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Phrase {
    tokens: Vec<String>,
    meaning: Meaning,
}

/// Frozen vocabulary tables.
#[derive(Debug, Clone)]
pub struct Lexicon {
    verbs: Vec<(CanonicalVerb, Vec<String>)>,
    contextual: Vec<ContextualRule>,
    single: HashMap<String, Meaning>,
    /// Multi-word phrases, longest first, table order within a length.
    phrases: Vec<Phrase>,
    directions: Vec<(Direction, Vec<String>)>,
    direction_index: HashMap<String, Direction>,
    grammar: HashMap<CanonicalVerb, Grammar>,
    articles: Vec<String>,
    fillers: Vec<Vec<String>>,
    pronouns: Vec<String>,
}

impl Lexicon {
    /// The default English vocabulary.
    pub fn builtin() -> Self {
        match LexiconBuilder::from_config(builtin::config()).build() {
            Ok(lexicon) => lexicon,
            // The builtin tables are covered by tests; a failure here is a bug.
            Err(e) => panic!("builtin lexicon is invalid: {e}"),
        }
    }

    /// Build a lexicon from a configuration, layering it over the builtin
    /// tables when `extend_builtin` is set.
    pub fn from_config(config: LexiconConfig) -> LexiconResult<Self> {
        let config = if config.extend_builtin {
            config.layered_on(builtin::config())
        } else {
            config
        };
        LexiconBuilder::from_config(config).build()
    }

    /// Parse and validate a JSON lexicon.
    pub fn from_json(text: &str) -> LexiconResult<Self> {
        Self::from_config(LexiconConfig::from_json(text)?)
    }

    /// Load a JSON lexicon file.
    pub fn from_path(path: &Path) -> LexiconResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| LexiconError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let lexicon = Self::from_json(&text)?;
        info!(
            "loaded lexicon from {}: {} verbs, {} surfaces, {} directions",
            path.display(),
            lexicon.verb_count(),
            lexicon.surface_count(),
            lexicon.directions.len()
        );
        Ok(lexicon)
    }

    /// Export the tables back into configuration form.
    pub fn to_config(&self) -> LexiconConfig {
        LexiconConfig {
            extend_builtin: false,
            verbs: self
                .verbs
                .iter()
                .map(|(verb, surfaces)| (verb.name().to_string(), surfaces.clone()))
                .collect(),
            contextual: self
                .contextual
                .iter()
                .map(|rule| {
                    (
                        rule.surface.clone(),
                        ContextualConfig {
                            bare: rule.bare.name().to_string(),
                            with_argument: rule.with_argument.name().to_string(),
                            in_combat: rule.in_combat.map(|v| v.name().to_string()),
                        },
                    )
                })
                .collect(),
            directions: self
                .directions
                .iter()
                .map(|(dir, surfaces)| (dir.name().to_string(), surfaces.clone()))
                .collect(),
            grammar: CanonicalVerb::ALL
                .iter()
                .filter_map(|verb| {
                    self.grammar.get(verb).map(|g| {
                        (
                            verb.name().to_string(),
                            GrammarConfig {
                                skip: g.skip.clone(),
                                separators: g.separators.clone(),
                                topics: g.topics.clone(),
                            },
                        )
                    })
                })
                .collect(),
            articles: self.articles.clone(),
            fillers: self.fillers.iter().map(|f| f.join(" ")).collect(),
            pronouns: self.pronouns.clone(),
        }
    }

    /// Verbs with their surface phrases, in table order.
    pub fn verbs(&self) -> impl Iterator<Item = (CanonicalVerb, &[String])> {
        self.verbs.iter().map(|(verb, s)| (*verb, s.as_slice()))
    }

    /// Surface phrases listed for one verb.
    pub fn surfaces_for(&self, verb: CanonicalVerb) -> &[String] {
        self.verbs
            .iter()
            .find(|(v, _)| *v == verb)
            .map(|(_, s)| s.as_slice())
            .unwrap_or(&[])
    }

    /// Contextual rules, in table order.
    pub fn contextual_rules(&self) -> &[ContextualRule] {
        &self.contextual
    }

    /// Look up a plain synonym (single or multi-word, any case).
    pub fn verb_for(&self, phrase: &str) -> Option<CanonicalVerb> {
        let tokens = tokenize(phrase);
        let meaning = match tokens.as_slice() {
            [] => None,
            [word] => self.single.get(word).copied(),
            _ => self
                .phrases
                .iter()
                .find(|p| p.tokens == tokens)
                .map(|p| p.meaning),
        };
        match meaning {
            Some(Meaning::Verb(verb)) => Some(verb),
            _ => None,
        }
    }

    /// Map a single token to a direction (any case).
    pub fn direction_for(&self, token: &str) -> Option<Direction> {
        self.direction_index.get(&token.to_lowercase()).copied()
    }

    /// Direction synonyms, in table order.
    pub fn directions(&self) -> impl Iterator<Item = (Direction, &[String])> {
        self.directions.iter().map(|(d, s)| (*d, s.as_slice()))
    }

    /// Argument grammar for a verb, if any is configured.
    pub fn grammar(&self, verb: CanonicalVerb) -> Option<&Grammar> {
        self.grammar.get(&verb)
    }

    /// Returns true if `token` is an article.
    pub fn is_article(&self, token: &str) -> bool {
        self.articles.iter().any(|a| a == token)
    }

    /// Returns true if `token` refers to the conversation partner.
    pub fn is_pronoun(&self, token: &str) -> bool {
        self.pronouns.iter().any(|p| p == token)
    }

    /// Number of verbs with at least one surface.
    pub fn verb_count(&self) -> usize {
        self.verbs.len()
    }

    /// Number of verb and contextual surfaces.
    pub fn surface_count(&self) -> usize {
        self.single.len() + self.phrases.len()
    }

    /// Single-word surfaces in table order, for suggestions.
    pub(crate) fn single_word_surfaces(&self) -> impl Iterator<Item = &str> {
        self.verbs
            .iter()
            .flat_map(|(_, surfaces)| surfaces.iter())
            .chain(self.contextual.iter().map(|rule| &rule.surface))
            .filter(|s| !s.contains(' '))
            .map(String::as_str)
    }

    pub(crate) fn contextual_rule(&self, index: usize) -> &ContextualRule {
        &self.contextual[index]
    }

    /// Longest-first phrase match against the leading tokens, then a single
    /// token lookup. Returns the meaning and the number of tokens consumed.
    pub(crate) fn match_verb(&self, tokens: &[String]) -> Option<(Meaning, usize)> {
        let phrase = self
            .phrases
            .iter()
            .find(|p| tokens.starts_with(&p.tokens))
            .map(|p| (p.meaning, p.tokens.len()));
        if phrase.is_some() {
            return phrase;
        }
        tokens
            .first()
            .and_then(|first| self.single.get(first))
            .map(|meaning| (*meaning, 1))
    }

    pub(crate) fn fillers(&self) -> &[Vec<String>] {
        &self.fillers
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Lowercase and split on any whitespace.
pub(crate) fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_lowercase).collect()
}

/// Programmatic lexicon construction.
///
/// ```
/// use saga_parser::{CanonicalVerb, LexiconBuilder};
///
/// let lexicon = LexiconBuilder::builtin()
///     .understand_as("pilfer", CanonicalVerb::Get)
///     .build()
///     .unwrap();
/// assert_eq!(lexicon.verb_for("pilfer"), Some(CanonicalVerb::Get));
/// ```
#[derive(Debug, Clone, Default)]
pub struct LexiconBuilder {
    config: LexiconConfig,
}

impl LexiconBuilder {
    /// Start from empty tables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from the builtin English tables.
    pub fn builtin() -> Self {
        Self::from_config(builtin::config())
    }

    /// Start from an existing configuration. `extend_builtin` is ignored.
    pub fn from_config(config: LexiconConfig) -> Self {
        Self { config }
    }

    /// Teach a new surface phrase for a verb.
    pub fn understand_as(mut self, phrase: impl Into<String>, verb: CanonicalVerb) -> Self {
        let phrase = phrase.into();
        let name = verb.name();
        match self.config.verbs.iter_mut().find(|(k, _)| {
            k.parse::<CanonicalVerb>()
                .is_ok_and(|existing| existing == verb)
        }) {
            Some((_, surfaces)) => surfaces.push(phrase),
            None => self.config.verbs.push((name.to_string(), vec![phrase])),
        }
        self
    }

    /// Teach a new word for a direction.
    pub fn direction(mut self, word: impl Into<String>, direction: Direction) -> Self {
        let word = word.into();
        match self
            .config
            .directions
            .iter_mut()
            .find(|(k, _)| k.parse::<Direction>().is_ok_and(|d| d == direction))
        {
            Some((_, words)) => words.push(word),
            None => self
                .config
                .directions
                .push((direction.name().to_string(), vec![word])),
        }
        self
    }

    /// Add a contextual surface.
    pub fn contextual(
        mut self,
        surface: impl Into<String>,
        bare: CanonicalVerb,
        with_argument: CanonicalVerb,
        in_combat: Option<CanonicalVerb>,
    ) -> Self {
        self.config.contextual.push((
            surface.into(),
            ContextualConfig {
                bare: bare.name().to_string(),
                with_argument: with_argument.name().to_string(),
                in_combat: in_combat.map(|v| v.name().to_string()),
            },
        ));
        self
    }

    /// Set the argument grammar for a verb, replacing any previous one.
    pub fn grammar(mut self, verb: CanonicalVerb, grammar: GrammarConfig) -> Self {
        self.config
            .grammar
            .retain(|(k, _)| !matches!(k.parse::<CanonicalVerb>(), Ok(existing) if existing == verb));
        self.config.grammar.push((verb.name().to_string(), grammar));
        self
    }

    /// Add an article.
    pub fn article(mut self, word: impl Into<String>) -> Self {
        self.config.articles.push(word.into());
        self
    }

    /// Add a filler prefix.
    pub fn filler(mut self, phrase: impl Into<String>) -> Self {
        self.config.fillers.push(phrase.into());
        self
    }

    /// Add a partner pronoun.
    pub fn pronoun(mut self, word: impl Into<String>) -> Self {
        self.config.pronouns.push(word.into());
        self
    }

    /// Validate and freeze the tables.
    pub fn build(self) -> LexiconResult<Lexicon> {
        let config = self.config;
        let mut owners: HashMap<String, String> = HashMap::new();

        let mut verbs: Vec<(CanonicalVerb, Vec<String>)> = Vec::new();
        let mut entries: Vec<(Vec<String>, Meaning)> = Vec::new();
        for (key, surfaces) in &config.verbs {
            let verb = parse_verb(key)?;
            let slot = match verbs.iter().position(|(v, _)| *v == verb) {
                Some(i) => i,
                None => {
                    verbs.push((verb, Vec::new()));
                    verbs.len() - 1
                }
            };
            for surface in surfaces {
                let tokens = tokenize(surface);
                if tokens.is_empty() {
                    return Err(LexiconError::EmptySurface(verb.name().to_string()));
                }
                let normalized = tokens.join(" ");
                if !claim(&mut owners, &normalized, verb.name())? {
                    continue;
                }
                verbs[slot].1.push(normalized);
                entries.push((tokens, Meaning::Verb(verb)));
            }
        }

        let mut contextual = Vec::new();
        for (surface, rule) in &config.contextual {
            let tokens = tokenize(surface);
            if tokens.is_empty() {
                return Err(LexiconError::EmptySurface("contextual".to_string()));
            }
            let normalized = tokens.join(" ");
            let label = format!("contextual rule \"{normalized}\"");
            if !claim(&mut owners, &normalized, &label)? {
                continue;
            }
            entries.push((tokens, Meaning::Contextual(contextual.len())));
            contextual.push(ContextualRule {
                surface: normalized,
                bare: parse_verb(&rule.bare)?,
                with_argument: parse_verb(&rule.with_argument)?,
                in_combat: rule.in_combat.as_deref().map(parse_verb).transpose()?,
            });
        }

        let mut single = HashMap::new();
        let mut phrases = Vec::new();
        for (tokens, meaning) in entries {
            if tokens.len() == 1 {
                single.insert(tokens[0].clone(), meaning);
            } else {
                phrases.push(Phrase { tokens, meaning });
            }
        }
        // Stable: equal-length phrases keep table order.
        phrases.sort_by_key(|p| Reverse(p.tokens.len()));

        let mut directions: Vec<(Direction, Vec<String>)> = Vec::new();
        let mut direction_index = HashMap::new();
        for (key, words) in &config.directions {
            let direction: Direction = key
                .parse()
                .map_err(|_| LexiconError::UnknownDirection(key.clone()))?;
            let table = format!("direction {direction}");
            let slot = match directions.iter().position(|(d, _)| *d == direction) {
                Some(i) => i,
                None => {
                    directions.push((direction, Vec::new()));
                    directions.len() - 1
                }
            };
            for word in words {
                let word = single_token(word, &table)?;
                match direction_index.entry(word.clone()) {
                    Entry::Occupied(existing) => {
                        if *existing.get() != direction {
                            return Err(LexiconError::DuplicateSurface {
                                surface: word,
                                first: format!("direction {}", existing.get()),
                                second: table,
                            });
                        }
                        warn!("duplicate direction word \"{word}\" for {direction} ignored");
                    }
                    Entry::Vacant(slot_entry) => {
                        slot_entry.insert(direction);
                        directions[slot].1.push(word);
                    }
                }
            }
        }

        let mut grammar = HashMap::new();
        for (key, words) in &config.grammar {
            let verb = parse_verb(key)?;
            let table = format!("grammar for {verb}");
            grammar.insert(
                verb,
                Grammar {
                    skip: single_tokens(&words.skip, &table)?,
                    separators: single_tokens(&words.separators, &table)?,
                    topics: single_tokens(&words.topics, &table)?,
                },
            );
        }

        let articles = single_tokens(&config.articles, "articles")?;
        let pronouns = single_tokens(&config.pronouns, "pronouns")?;
        let mut fillers = Vec::new();
        for filler in &config.fillers {
            let tokens = tokenize(filler);
            if tokens.is_empty() {
                return Err(LexiconError::EmptySurface("fillers".to_string()));
            }
            fillers.push(tokens);
        }
        // Longer fillers first so "i want to" is not shadowed by a shorter one.
        fillers.sort_by_key(|f| Reverse(f.len()));

        verbs.retain(|(_, surfaces)| !surfaces.is_empty());

        Ok(Lexicon {
            verbs,
            contextual,
            single,
            phrases,
            directions,
            direction_index,
            grammar,
            articles,
            fillers,
            pronouns,
        })
    }
}

fn parse_verb(key: &str) -> LexiconResult<CanonicalVerb> {
    if key.trim().eq_ignore_ascii_case("unknown") {
        return Err(LexiconError::SentinelVerb);
    }
    key.parse()
        .map_err(|_| LexiconError::UnknownVerb(key.to_string()))
}

/// Record `surface` as owned by `owner`. Returns false for a harmless repeat
/// under the same owner, and an error for a conflicting one.
fn claim(owners: &mut HashMap<String, String>, surface: &str, owner: &str) -> LexiconResult<bool> {
    match owners.get(surface) {
        Some(existing) if existing == owner => {
            warn!("duplicate surface \"{surface}\" for {owner} ignored");
            Ok(false)
        }
        Some(existing) => Err(LexiconError::DuplicateSurface {
            surface: surface.to_string(),
            first: existing.clone(),
            second: owner.to_string(),
        }),
        None => {
            owners.insert(surface.to_string(), owner.to_string());
            Ok(true)
        }
    }
}

fn single_token(word: &str, table: &str) -> LexiconResult<String> {
    match tokenize(word).as_slice() {
        [] => Err(LexiconError::EmptySurface(table.to_string())),
        [token] => Ok(token.clone()),
        _ => Err(LexiconError::MultiWordToken {
            surface: word.to_string(),
            table: table.to_string(),
        }),
    }
}

fn single_tokens(words: &[String], table: &str) -> LexiconResult<Vec<String>> {
    let mut out: Vec<String> = Vec::with_capacity(words.len());
    for word in words {
        let token = single_token(word, table)?;
        if !out.contains(&token) {
            out.push(token);
        }
    }
    Ok(out)
}
