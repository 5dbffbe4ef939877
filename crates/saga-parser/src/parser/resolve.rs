//! Verb resolution: longest phrase first, then the leading token.

use crate::context::ParseContext;
use crate::lexicon::{Lexicon, Meaning};
use crate::verb::CanonicalVerb;

use super::normalize::strip_articles;

/// A resolved verb and the argument tokens that follow it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct VerbPhrase<'t> {
    pub(crate) verb: CanonicalVerb,
    pub(crate) tail: &'t [String],
}

/// Resolve the verb at the start of `tokens`.
///
/// Contextual surfaces ("leave", "run") are settled here, from whether an
/// argument follows and whether combat is active. Articles alone do not
/// count as an argument. Returns `None` when the
/// leading tokens are not in the lexicon.
pub(crate) fn resolve_verb<'t>(
    tokens: &'t [String],
    lexicon: &Lexicon,
    context: &ParseContext,
) -> Option<VerbPhrase<'t>> {
    let (meaning, used) = lexicon.match_verb(tokens)?;
    let tail = &tokens[used..];
    let verb = match meaning {
        Meaning::Verb(verb) => verb,
        Meaning::Contextual(index) => lexicon
            .contextual_rule(index)
            .resolve(!strip_articles(tail, lexicon).is_empty(), context.in_combat),
    };
    Some(VerbPhrase { verb, tail })
}
