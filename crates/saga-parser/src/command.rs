//! The parser's output value.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::direction::Direction;
use crate::verb::CanonicalVerb;

/// Why a command came out the way it did, for diagnostics and telemetry.
///
/// Diagnostics never change control flow; they only annotate the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Diagnostic {
    /// The line was empty or whitespace.
    EmptyInput,
    /// The leading word is not in the lexicon.
    UnrecognizedVerb,
    /// The verb was recognized but its required argument shape was missing
    /// (e.g. "tell bob attack" without "to").
    MissingArgumentShape,
    /// A movement verb's argument was not a direction, so it became a target.
    DirectionFallback,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Diagnostic::EmptyInput => "empty input",
            Diagnostic::UnrecognizedVerb => "unrecognized verb",
            Diagnostic::MissingArgumentShape => "verb recognized but its arguments are malformed",
            Diagnostic::DirectionFallback => "not a direction, kept as target",
        };
        f.write_str(text)
    }
}

/// A structured command.
///
/// `raw` always holds the caller's input exactly as given. When `action` is
/// [`CanonicalVerb::Unknown`] every other optional field is empty, and `raw`
/// is what the engine should echo back. `direction` is only ever set for
/// movement verbs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParsedCommand {
    /// The resolved action.
    pub action: CanonicalVerb,
    /// Direction for movement verbs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,
    /// The thing acted on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    /// Free text qualifying the action (an order, a topic).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modifier: Option<String>,
    /// The other party in "X to Y" / "X with Y" forms.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_target: Option<String>,
    /// The input line, untouched.
    pub raw: String,
    /// How the result was reached, when noteworthy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diagnostic: Option<Diagnostic>,
}

impl ParsedCommand {
    /// An unrecognized command carrying the original text.
    pub fn unknown(raw: impl Into<String>, diagnostic: Diagnostic) -> Self {
        Self {
            action: CanonicalVerb::Unknown,
            direction: None,
            target: None,
            modifier: None,
            secondary_target: None,
            raw: raw.into(),
            diagnostic: Some(diagnostic),
        }
    }

    /// Returns true if the parser could not make sense of the input.
    pub fn is_unknown(&self) -> bool {
        self.action.is_unknown()
    }

    /// The target, if any, as a string slice.
    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    /// The modifier, if any, as a string slice.
    pub fn modifier(&self) -> Option<&str> {
        self.modifier.as_deref()
    }

    /// The secondary target, if any, as a string slice.
    pub fn secondary_target(&self) -> Option<&str> {
        self.secondary_target.as_deref()
    }
}

impl fmt::Display for ParsedCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unknown() {
            return write!(f, "unknown \"{}\"", self.raw);
        }
        write!(f, "{}", self.action)?;
        if let Some(direction) = self.direction {
            write!(f, " {direction}")?;
        }
        if let Some(target) = &self.target {
            write!(f, " [{target}]")?;
        }
        if let Some(secondary) = &self.secondary_target {
            write!(f, " -> [{secondary}]")?;
        }
        if let Some(modifier) = &self.modifier {
            write!(f, " ({modifier})")?;
        }
        Ok(())
    }
}
