//! Direction resolution for movement verbs.

use crate::command::Diagnostic;
use crate::direction::Direction;
use crate::lexicon::Lexicon;

use super::builder::CommandBuilder;
use super::normalize::{strip_articles, strip_leading};

/// A line that is nothing but a direction word ("n", "north-east", "in").
pub(crate) fn bare_direction(tokens: &[String], lexicon: &Lexicon) -> Option<Direction> {
    match tokens {
        [only] => lexicon.direction_for(only),
        _ => None,
    }
}

/// Fill direction, target, and modifier for a movement verb.
///
/// Leading movement prepositions and articles are skipped. If the next token is a
/// direction it is used, and anything after it becomes the modifier.
/// Otherwise the whole argument degrades to a target.
pub(crate) fn resolve_movement(builder: &mut CommandBuilder<'_>, tail: &[String], lexicon: &Lexicon) {
    let skip = lexicon
        .grammar(builder.action())
        .map(|g| g.skip.as_slice())
        .unwrap_or(&[]);
    let argument = strip_articles(strip_leading(tail, skip), lexicon);
    let Some((first, rest)) = argument.split_first() else {
        return;
    };

    match lexicon.direction_for(first) {
        Some(direction) => {
            builder.set_direction(direction);
            builder.set_modifier(rest);
        }
        None => {
            builder.set_target(argument, lexicon);
            builder.set_diagnostic(Diagnostic::DirectionFallback);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verb::CanonicalVerb;

    fn words(text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_string).collect()
    }

    fn movement(verb: CanonicalVerb, tail: &str) -> crate::ParsedCommand {
        let lexicon = Lexicon::builtin();
        let mut builder = CommandBuilder::new("", verb);
        resolve_movement(&mut builder, &words(tail), &lexicon);
        builder.finish()
    }

    #[test]
    fn bare_direction_needs_exactly_one_token() {
        let lexicon = Lexicon::builtin();
        assert_eq!(bare_direction(&words("ne"), &lexicon), Some(Direction::Northeast));
        assert_eq!(bare_direction(&words("north door"), &lexicon), None);
        assert_eq!(bare_direction(&words("door"), &lexicon), None);
    }

    #[test]
    fn direction_and_modifier() {
        let cmd = movement(CanonicalVerb::Move, "north quickly");
        assert_eq!(cmd.direction, Some(Direction::North));
        assert_eq!(cmd.modifier(), Some("quickly"));
        assert_eq!(cmd.target, None);
        assert_eq!(cmd.diagnostic, None);
    }

    #[test]
    fn go_inside_and_outside() {
        assert_eq!(movement(CanonicalVerb::Move, "in").direction, Some(Direction::In));
        assert_eq!(movement(CanonicalVerb::Move, "inside").direction, Some(Direction::In));
        assert_eq!(movement(CanonicalVerb::Move, "outside").direction, Some(Direction::Out));
    }

    #[test]
    fn prepositions_are_skipped() {
        assert_eq!(movement(CanonicalVerb::Move, "to the north").direction, Some(Direction::North));
        assert_eq!(movement(CanonicalVerb::Move, "towards north").direction, Some(Direction::North));
    }

    #[test]
    fn unknown_direction_degrades_to_target() {
        let cmd = movement(CanonicalVerb::Move, "to the door");
        assert_eq!(cmd.direction, None);
        assert_eq!(cmd.target(), Some("door"));
        assert_eq!(cmd.diagnostic, Some(Diagnostic::DirectionFallback));
    }

    #[test]
    fn empty_argument_sets_nothing() {
        let cmd = movement(CanonicalVerb::Exit, "");
        assert_eq!(cmd.action, CanonicalVerb::Exit);
        assert_eq!(cmd.direction, None);
        assert_eq!(cmd.target, None);
        assert_eq!(cmd.diagnostic, None);
    }
}
