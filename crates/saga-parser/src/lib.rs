//! Natural-language command parser for SagaCraft.
//!
//! Turns free-form player input ("pick up the rusty sword", "tell bob to
//! guard the door", "n") into a [`ParsedCommand`] carrying one canonical
//! verb plus its arguments. Parsing never fails: input that cannot be
//! understood comes back as [`CanonicalVerb::Unknown`] with the original
//! text preserved.
//!
//! The vocabulary lives in an immutable [`Lexicon`]. The builtin English
//! tables can be extended or replaced from JSON or with a
//! [`LexiconBuilder`].

/// Parsed command values and diagnostics.
pub mod command;
/// Read-only game state that influences parsing.
pub mod context;
/// Compass and vertical directions.
pub mod direction;
/// Error types for loading and validating vocabularies.
pub mod error;
/// Vocabulary tables and their configuration format.
pub mod lexicon;
/// The parse pipeline and the [`Parser`] entry point.
pub mod parser;
/// Spelling suggestions for unrecognized input.
pub mod suggest;
/// The closed set of canonical verbs.
pub mod verb;

pub use command::{Diagnostic, ParsedCommand};
pub use context::ParseContext;
pub use direction::Direction;
pub use error::{LexiconError, LexiconResult};
pub use lexicon::{Lexicon, LexiconBuilder, LexiconConfig};
pub use parser::{Parser, parse_command};
pub use verb::CanonicalVerb;
