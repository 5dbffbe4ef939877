//! The parse pipeline.
//!
//! normalize -> patterns -> verb -> direction (movement only) ->
//! disambiguation -> builder. Every stage reads the lexicon and the context;
//! none of them keeps state between calls.

mod builder;
mod disambiguate;
mod movement;
mod normalize;
mod pattern;
mod resolve;

use std::sync::{Arc, LazyLock};

use crate::command::{Diagnostic, ParsedCommand};
use crate::context::ParseContext;
use crate::lexicon::Lexicon;
use crate::verb::CanonicalVerb;

use builder::CommandBuilder;

pub(crate) use normalize::tokenize_line;

/// Turns player text into [`ParsedCommand`]s using one [`Lexicon`].
///
/// A parser is cheap to clone and safe to share between threads.
#[derive(Debug, Clone)]
pub struct Parser {
    lexicon: Arc<Lexicon>,
}

impl Parser {
    /// Create a parser that owns `lexicon`.
    pub fn new(lexicon: Lexicon) -> Self {
        Self::with_shared(Arc::new(lexicon))
    }

    /// Create a parser over a lexicon shared with other parsers.
    pub fn with_shared(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    /// A parser over the builtin English vocabulary.
    pub fn builtin() -> Self {
        Self::new(Lexicon::builtin())
    }

    /// The tables this parser reads.
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Parse one line of player input.
    ///
    /// This never fails: anything that cannot be understood comes back as
    /// [`CanonicalVerb::Unknown`] with the input preserved in `raw`.
    pub fn parse(&self, input: &str, context: &ParseContext) -> ParsedCommand {
        let lexicon = self.lexicon.as_ref();
        let tokens = normalize::tokenize_line(input, lexicon);
        if tokens.is_empty() {
            // Blank lines and lines made only of fillers.
            let diagnostic = if input.trim().is_empty() {
                Diagnostic::EmptyInput
            } else {
                Diagnostic::UnrecognizedVerb
            };
            return ParsedCommand::unknown(input, diagnostic);
        }

        if let Some(builder) = pattern::match_pattern(&tokens, input, lexicon) {
            return builder.finish();
        }

        let Some(phrase) = resolve::resolve_verb(&tokens, lexicon, context) else {
            if let Some(direction) = movement::bare_direction(&tokens, lexicon) {
                let mut builder = CommandBuilder::new(input, CanonicalVerb::Move);
                builder.set_direction(direction);
                return builder.finish();
            }
            return ParsedCommand::unknown(input, Diagnostic::UnrecognizedVerb);
        };

        let mut builder = CommandBuilder::new(input, phrase.verb);
        if phrase.verb.is_movement() {
            movement::resolve_movement(&mut builder, phrase.tail, lexicon);
        } else if let Err(diagnostic) =
            disambiguate::apply(&mut builder, phrase.tail, lexicon, context)
        {
            return ParsedCommand::unknown(input, diagnostic);
        }
        builder.finish()
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::builtin()
    }
}

static BUILTIN: LazyLock<Parser> = LazyLock::new(Parser::builtin);

/// Parse with the builtin vocabulary and an empty context.
pub fn parse_command(input: &str) -> ParsedCommand {
    BUILTIN.parse(input, &ParseContext::default())
}
