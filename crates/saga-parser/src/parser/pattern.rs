//! Fixed question forms that do not start with a verb.
//!
//! Patterns are matched against the leading tokens, most specific first. The
//! first match wins and skips verb resolution entirely.

use crate::lexicon::Lexicon;
use crate::verb::CanonicalVerb;

use super::builder::CommandBuilder;
use super::normalize::strip_articles;

/// What happens to the tokens after a pattern's prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tail {
    /// Anything after the prefix is ignored ("where am i now").
    Ignored,
    /// The rest is the target and must not be empty once articles are
    /// dropped ("who is the guard").
    Target,
}

#[derive(Debug)]
struct Pattern {
    /// One set of accepted words per position.
    prefix: &'static [&'static [&'static str]],
    tail: Tail,
    action: CanonicalVerb,
}

const PATTERNS: &[Pattern] = &[
    Pattern {
        prefix: &[
            &["what"],
            &["am", "do"],
            &["i"],
            &["carrying", "holding", "have", "hold"],
        ],
        tail: Tail::Ignored,
        action: CanonicalVerb::Inventory,
    },
    Pattern {
        prefix: &[&["where"], &["am"], &["i"]],
        tail: Tail::Ignored,
        action: CanonicalVerb::Look,
    },
    Pattern {
        prefix: &[&["where"], &["is", "are"]],
        tail: Tail::Target,
        action: CanonicalVerb::Look,
    },
    Pattern {
        prefix: &[&["who"], &["is", "are"]],
        tail: Tail::Target,
        action: CanonicalVerb::Look,
    },
    Pattern {
        prefix: &[&["what"], &["is", "are"]],
        tail: Tail::Target,
        action: CanonicalVerb::Look,
    },
];

impl Pattern {
    fn matches<'t>(&self, tokens: &'t [String], lexicon: &Lexicon) -> Option<&'t [String]> {
        if tokens.len() < self.prefix.len() {
            return None;
        }
        let (head, rest) = tokens.split_at(self.prefix.len());
        let prefix_ok = head
            .iter()
            .zip(self.prefix)
            .all(|(token, accepted)| accepted.contains(&token.as_str()));
        if !prefix_ok {
            return None;
        }
        match self.tail {
            Tail::Ignored => Some(&[]),
            Tail::Target if strip_articles(rest, lexicon).is_empty() => None,
            Tail::Target => Some(rest),
        }
    }
}

/// Try every pattern in priority order.
pub(crate) fn match_pattern<'a>(
    tokens: &[String],
    raw: &'a str,
    lexicon: &Lexicon,
) -> Option<CommandBuilder<'a>> {
    PATTERNS.iter().find_map(|pattern| {
        pattern.matches(tokens, lexicon).map(|rest| {
            let mut builder = CommandBuilder::new(raw, pattern.action);
            builder.set_target(rest, lexicon);
            builder
        })
    })
}
