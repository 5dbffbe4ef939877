//! Final assembly of a [`ParsedCommand`].

use crate::command::{Diagnostic, ParsedCommand};
use crate::direction::Direction;
use crate::lexicon::Lexicon;
use crate::verb::CanonicalVerb;

use super::normalize::strip_articles;

/// Collects fields from the earlier stages and enforces the output invariants.
#[derive(Debug)]
pub(crate) struct CommandBuilder<'a> {
    raw: &'a str,
    action: CanonicalVerb,
    direction: Option<Direction>,
    target: Option<String>,
    modifier: Option<String>,
    secondary_target: Option<String>,
    diagnostic: Option<Diagnostic>,
}

impl<'a> CommandBuilder<'a> {
    pub(crate) fn new(raw: &'a str, action: CanonicalVerb) -> Self {
        Self {
            raw,
            action,
            direction: None,
            target: None,
            modifier: None,
            secondary_target: None,
            diagnostic: None,
        }
    }

    pub(crate) fn action(&self) -> CanonicalVerb {
        self.action
    }

    pub(crate) fn set_direction(&mut self, direction: Direction) {
        self.direction = Some(direction);
    }

    /// Set the target from tokens, dropping leading articles.
    pub(crate) fn set_target(&mut self, tokens: &[String], lexicon: &Lexicon) {
        self.target = phrase(strip_articles(tokens, lexicon));
    }

    pub(crate) fn set_target_text(&mut self, text: &str) {
        self.target = Some(text.to_string());
    }

    /// Set the secondary target from tokens, dropping leading articles.
    pub(crate) fn set_secondary(&mut self, tokens: &[String], lexicon: &Lexicon) {
        self.secondary_target = phrase(strip_articles(tokens, lexicon));
    }

    pub(crate) fn set_secondary_text(&mut self, text: &str) {
        self.secondary_target = Some(text.to_string());
    }

    /// Set the modifier verbatim.
    pub(crate) fn set_modifier(&mut self, tokens: &[String]) {
        self.modifier = phrase(tokens);
    }

    pub(crate) fn set_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostic = Some(diagnostic);
    }

    pub(crate) fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    pub(crate) fn secondary_target(&self) -> Option<&str> {
        self.secondary_target.as_deref()
    }

    pub(crate) fn finish(self) -> ParsedCommand {
        if self.action.is_unknown() {
            return ParsedCommand::unknown(
                self.raw,
                self.diagnostic.unwrap_or(Diagnostic::UnrecognizedVerb),
            );
        }

        let mut target = self.target;
        let mut direction = self.direction;
        if !self.action.is_movement() {
            // Only movement carries a direction; anything else gets it as text.
            if let Some(dir) = direction.take() {
                target.get_or_insert_with(|| dir.name().to_string());
            }
        }

        ParsedCommand {
            action: self.action,
            direction,
            target,
            modifier: self.modifier,
            secondary_target: self.secondary_target,
            raw: self.raw.to_string(),
            diagnostic: self.diagnostic,
        }
    }
}

fn phrase(tokens: &[String]) -> Option<String> {
    if tokens.is_empty() {
        None
    } else {
        Some(tokens.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_string).collect()
    }

    #[test]
    fn unknown_drops_every_field() {
        let lexicon = Lexicon::builtin();
        let mut builder = CommandBuilder::new("Tell Bob attack", CanonicalVerb::Unknown);
        builder.set_target(&words("bob"), &lexicon);
        builder.set_modifier(&words("attack"));
        builder.set_diagnostic(Diagnostic::MissingArgumentShape);

        let cmd = builder.finish();
        assert_eq!(
            cmd,
            ParsedCommand::unknown("Tell Bob attack", Diagnostic::MissingArgumentShape)
        );
    }

    #[test]
    fn articles_stripped_from_targets_not_modifiers() {
        let lexicon = Lexicon::builtin();
        let mut builder = CommandBuilder::new("x", CanonicalVerb::Give);
        builder.set_target(&words("the gold"), &lexicon);
        builder.set_secondary(&words("a merchant"), &lexicon);
        builder.set_modifier(&words("the whole lot"));

        let cmd = builder.finish();
        assert_eq!(cmd.target(), Some("gold"));
        assert_eq!(cmd.secondary_target(), Some("merchant"));
        assert_eq!(cmd.modifier(), Some("the whole lot"));
    }

    #[test]
    fn article_only_target_is_absent() {
        let lexicon = Lexicon::builtin();
        let mut builder = CommandBuilder::new("get the", CanonicalVerb::Get);
        builder.set_target(&words("the"), &lexicon);
        assert_eq!(builder.finish().target, None);
    }

    #[test]
    fn direction_on_non_movement_becomes_target() {
        let mut builder = CommandBuilder::new("look north", CanonicalVerb::Look);
        builder.set_direction(Direction::North);
        let cmd = builder.finish();
        assert_eq!(cmd.direction, None);
        assert_eq!(cmd.target(), Some("north"));
    }
}
