//! "Did you mean" suggestions for unrecognized verbs.

use strsim::jaro_winkler;

use crate::context::ParseContext;
use crate::parser::{Parser, tokenize_line};

/// Minimum similarity score for a suggestion (0.0-1.0).
const SUGGEST_THRESHOLD: f64 = 0.8;

/// Maximum number of suggestions returned.
const SUGGEST_LIMIT: usize = 3;

impl Parser {
    /// Suggest known single-word verbs close to the leading word of `input`.
    ///
    /// Returns nothing when the input already parses, is empty, or has no
    /// close match. Results are sorted by similarity, best first; ties keep
    /// lexicon order.
    pub fn suggest(&self, input: &str) -> Vec<String> {
        let parsed = self.parse(input, &ParseContext::default());
        if !parsed.is_unknown() {
            return Vec::new();
        }
        let tokens = tokenize_line(input, self.lexicon());
        let Some(word) = tokens.first() else {
            return Vec::new();
        };

        let mut scored: Vec<(&str, f64)> = self
            .lexicon()
            .single_word_surfaces()
            .filter_map(|surface| {
                let score = jaro_winkler(word, surface);
                (score >= SUGGEST_THRESHOLD).then_some((surface, score))
            })
            .collect();

        // Stable sort keeps lexicon order for equal scores.
        scored.sort_by(|a, b| b.1.total_cmp(&a.1));
        scored
            .into_iter()
            .take(SUGGEST_LIMIT)
            .map(|(surface, _)| surface.to_string())
            .collect()
    }
}
