//! Argument-shape and context rules for non-movement verbs.
//!
//! Each rule is a separate function so it can be tested on its own:
//!
//! - party orders need "X to Y" and become target X, modifier Y;
//! - verbs with separator words split at the first separator into target and
//!   secondary target; later separators stay inside the secondary target;
//! - verbs with topic words split at the first topic word into target and
//!   modifier;
//! - "give <npc> <item>" is reordered when the leading words name a visible
//!   character;
//! - partner pronouns and a bare "talk" resolve to the conversation partner.

use crate::command::Diagnostic;
use crate::context::ParseContext;
use crate::lexicon::{Grammar, Lexicon};
use crate::verb::CanonicalVerb;

use super::builder::CommandBuilder;
use super::normalize::{strip_articles, strip_leading};

/// Where a split word sends the text after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Split {
    Secondary,
    Topic,
}

/// Apply the argument rules for `builder`'s verb to `tail`.
///
/// Returns `Err` with the reason when the verb's required shape is missing;
/// the caller turns that into an unknown command.
pub(crate) fn apply(
    builder: &mut CommandBuilder<'_>,
    tail: &[String],
    lexicon: &Lexicon,
    context: &ParseContext,
) -> Result<(), Diagnostic> {
    let grammar = lexicon.grammar(builder.action());

    if builder.action() == CanonicalVerb::PartyOrder {
        party_order(builder, tail, grammar, lexicon)?;
        resolve_partner(builder, lexicon, context);
        return Ok(());
    }

    let argument = match grammar {
        Some(g) => strip_leading(tail, &g.skip),
        None => tail,
    };
    split_arguments(builder, argument, grammar, lexicon);

    if builder.action() == CanonicalVerb::Give {
        give_to_visible_npc(builder, argument, lexicon, context);
    }
    resolve_partner(builder, lexicon, context);
    Ok(())
}

/// "tell X to Y": target X, modifier Y, split at the first separator after
/// the first word. Anything else is malformed.
fn party_order(
    builder: &mut CommandBuilder<'_>,
    tail: &[String],
    grammar: Option<&Grammar>,
    lexicon: &Lexicon,
) -> Result<(), Diagnostic> {
    let separators = grammar.map(|g| g.separators.as_slice()).unwrap_or(&[]);
    let split = tail
        .iter()
        .enumerate()
        .skip(1)
        .find(|(_, token)| separators.contains(*token))
        .map(|(i, _)| i)
        .filter(|&i| i + 1 < tail.len());
    let Some(at) = split else {
        return Err(Diagnostic::MissingArgumentShape);
    };

    builder.set_target(&tail[..at], lexicon);
    if builder.target().is_none() {
        return Err(Diagnostic::MissingArgumentShape);
    }
    builder.set_modifier(&tail[at + 1..]);
    Ok(())
}

/// Split at the first separator or topic word, whichever comes first.
fn split_arguments(
    builder: &mut CommandBuilder<'_>,
    argument: &[String],
    grammar: Option<&Grammar>,
    lexicon: &Lexicon,
) {
    let split = grammar.and_then(|g| {
        argument.iter().enumerate().find_map(|(i, token)| {
            if g.separators.contains(token) {
                Some((i, Split::Secondary))
            } else if g.topics.contains(token) {
                Some((i, Split::Topic))
            } else {
                None
            }
        })
    });

    match split {
        Some((at, Split::Secondary)) => {
            builder.set_target(&argument[..at], lexicon);
            builder.set_secondary(&argument[at + 1..], lexicon);
        }
        Some((at, Split::Topic)) => {
            builder.set_target(&argument[..at], lexicon);
            builder.set_modifier(&argument[at + 1..]);
        }
        None => builder.set_target(argument, lexicon),
    }
}

/// "give merchant gold" means "give gold to merchant" when the merchant is
/// in view.
fn give_to_visible_npc(
    builder: &mut CommandBuilder<'_>,
    argument: &[String],
    lexicon: &Lexicon,
    context: &ParseContext,
) {
    if builder.secondary_target().is_some() {
        return;
    }
    let words = strip_articles(argument, lexicon);
    let Some((npc, len)) = context.leading_npc(words) else {
        return;
    };
    let item = &words[len..];
    if strip_articles(item, lexicon).is_empty() {
        return;
    }
    builder.set_target(item, lexicon);
    builder.set_secondary_text(npc);
}

/// Replace partner pronouns with the partner's name, and point a bare
/// "talk" at the partner.
fn resolve_partner(builder: &mut CommandBuilder<'_>, lexicon: &Lexicon, context: &ParseContext) {
    let Some(partner) = context.conversation_partner.as_deref() else {
        return;
    };

    if builder.target().is_some_and(|t| lexicon.is_pronoun(t)) {
        builder.set_target_text(partner);
    }
    if builder.secondary_target().is_some_and(|t| lexicon.is_pronoun(t)) {
        builder.set_secondary_text(partner);
    }
    if builder.action() == CanonicalVerb::Talk && builder.target().is_none() {
        builder.set_target_text(partner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ParsedCommand;

    fn words(text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_string).collect()
    }

    fn run(
        verb: CanonicalVerb,
        tail: &str,
        context: &ParseContext,
    ) -> Result<ParsedCommand, Diagnostic> {
        let lexicon = Lexicon::builtin();
        let mut builder = CommandBuilder::new("", verb);
        apply(&mut builder, &words(tail), &lexicon, context)?;
        Ok(builder.finish())
    }

    #[test]
    fn party_order_splits_on_to() {
        let cmd = run(CanonicalVerb::PartyOrder, "bob to attack the goblin", &ParseContext::new())
            .unwrap();
        assert_eq!(cmd.target(), Some("bob"));
        assert_eq!(cmd.modifier(), Some("attack the goblin"));
    }

    #[test]
    fn party_order_without_to_is_malformed() {
        let ctx = ParseContext::new();
        for tail in ["bob attack", "", "to attack", "bob to", "the to attack"] {
            assert_eq!(
                run(CanonicalVerb::PartyOrder, tail, &ctx),
                Err(Diagnostic::MissingArgumentShape),
                "{tail:?}"
            );
        }
    }

    #[test]
    fn party_order_skips_a_leading_to() {
        let cmd = run(CanonicalVerb::PartyOrder, "to bob to attack", &ParseContext::new()).unwrap();
        assert_eq!(cmd.target(), Some("to bob"));
        assert_eq!(cmd.modifier(), Some("attack"));
    }

    #[test]
    fn party_order_pronoun_resolves_to_partner() {
        let ctx = ParseContext::new().with_partner("Mira");
        let cmd = run(CanonicalVerb::PartyOrder, "him to wait", &ctx).unwrap();
        assert_eq!(cmd.target(), Some("Mira"));
        assert_eq!(cmd.modifier(), Some("wait"));
    }

    #[test]
    fn first_separator_only() {
        let cmd = run(CanonicalVerb::Give, "gold to merchant to keep", &ParseContext::new()).unwrap();
        assert_eq!(cmd.target(), Some("gold"));
        assert_eq!(cmd.secondary_target(), Some("merchant to keep"));
    }

    #[test]
    fn use_with_and_on() {
        let ctx = ParseContext::new();
        let cmd = run(CanonicalVerb::Use, "the key on the door", &ctx).unwrap();
        assert_eq!(cmd.target(), Some("key"));
        assert_eq!(cmd.secondary_target(), Some("door"));

        let cmd = run(CanonicalVerb::Use, "rope with hook with care", &ctx).unwrap();
        assert_eq!(cmd.target(), Some("rope"));
        assert_eq!(cmd.secondary_target(), Some("hook with care"));
    }

    #[test]
    fn put_in_container() {
        let cmd = run(CanonicalVerb::Put, "sword in backpack", &ParseContext::new()).unwrap();
        assert_eq!(cmd.target(), Some("sword"));
        assert_eq!(cmd.secondary_target(), Some("backpack"));
    }

    #[test]
    fn talk_skips_preposition_and_takes_topic() {
        let cmd = run(CanonicalVerb::Talk, "to the wizard about the ring", &ParseContext::new())
            .unwrap();
        assert_eq!(cmd.target(), Some("wizard"));
        assert_eq!(cmd.modifier(), Some("the ring"));
        assert_eq!(cmd.secondary_target(), None);
    }

    #[test]
    fn verbs_without_grammar_take_the_whole_tail() {
        let cmd = run(CanonicalVerb::Eat, "bread with butter", &ParseContext::new()).unwrap();
        assert_eq!(cmd.target(), Some("bread with butter"));
    }

    #[test]
    fn give_reorders_visible_npc() {
        let ctx = ParseContext::new().with_npc("Old Tom");
        let cmd = run(CanonicalVerb::Give, "old tom the pipe", &ctx).unwrap();
        assert_eq!(cmd.target(), Some("pipe"));
        assert_eq!(cmd.secondary_target(), Some("Old Tom"));
    }

    #[test]
    fn give_keeps_item_when_npc_not_visible() {
        let cmd = run(CanonicalVerb::Give, "old tom the pipe", &ParseContext::new()).unwrap();
        assert_eq!(cmd.target(), Some("old tom the pipe"));
        assert_eq!(cmd.secondary_target(), None);
    }

    #[test]
    fn give_to_npc_alone_is_not_reordered() {
        let ctx = ParseContext::new().with_npc("Tom");
        let cmd = run(CanonicalVerb::Give, "tom", &ctx).unwrap();
        assert_eq!(cmd.target(), Some("tom"));
        assert_eq!(cmd.secondary_target(), None);
    }

    #[test]
    fn pronouns_resolve_to_partner() {
        let ctx = ParseContext::new().with_partner("Mira");
        let cmd = run(CanonicalVerb::Give, "gold to her", &ctx).unwrap();
        assert_eq!(cmd.secondary_target(), Some("Mira"));

        let cmd = run(CanonicalVerb::Attack, "him", &ctx).unwrap();
        assert_eq!(cmd.target(), Some("Mira"));
    }

    #[test]
    fn pronouns_stay_without_partner() {
        let cmd = run(CanonicalVerb::Attack, "him", &ParseContext::new()).unwrap();
        assert_eq!(cmd.target(), Some("him"));
    }

    #[test]
    fn bare_talk_targets_partner() {
        let ctx = ParseContext::new().with_partner("Mira");
        assert_eq!(run(CanonicalVerb::Talk, "", &ctx).unwrap().target(), Some("Mira"));
        assert_eq!(
            run(CanonicalVerb::Talk, "", &ParseContext::new()).unwrap().target(),
            None
        );
    }
}
