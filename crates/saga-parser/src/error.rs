//! Error types for lexicon construction.
//!
//! Parsing itself cannot fail; only building or loading a [`Lexicon`](crate::Lexicon)
//! reports errors.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for lexicon operations.
pub type LexiconResult<T> = Result<T, LexiconError>;

/// Errors that can occur while loading or validating a lexicon.
#[derive(Debug, Error)]
pub enum LexiconError {
    /// The lexicon file could not be read.
    #[error("cannot read {}: {source}", path.display())]
    Io {
        /// Path that failed.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The lexicon file is not valid JSON for a lexicon.
    #[error("invalid lexicon JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A table key does not name a canonical verb.
    #[error("unknown verb: \"{0}\"")]
    UnknownVerb(String),

    /// A table key does not name a canonical direction.
    #[error("unknown direction: \"{0}\"")]
    UnknownDirection(String),

    /// `unknown` cannot own surface forms.
    #[error("the \"unknown\" verb cannot have synonyms")]
    SentinelVerb,

    /// A surface phrase was empty after normalization.
    #[error("empty surface phrase for \"{0}\"")]
    EmptySurface(String),

    /// Directions, articles, pronouns, and grammar words must be single tokens.
    #[error("\"{surface}\" in {table} must be a single word")]
    MultiWordToken {
        /// The offending entry.
        surface: String,
        /// The table it was listed in.
        table: String,
    },

    /// The same surface form was mapped to two different meanings.
    #[error("\"{surface}\" is mapped to both {first} and {second}")]
    DuplicateSurface {
        /// The conflicting surface form.
        surface: String,
        /// Meaning it was first mapped to.
        first: String,
        /// Meaning it was mapped to again.
        second: String,
    },
}
