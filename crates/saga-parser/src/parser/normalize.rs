//! Lexical normalization: case folding, whitespace, punctuation, fillers.

use crate::lexicon::Lexicon;

/// Trailing sentence punctuation dropped from the whole line.
const SENTENCE_END: [char; 3] = ['?', '!', '.'];

/// Punctuation dropped from the end of individual tokens.
const TOKEN_END: [char; 2] = [',', ';'];

/// Fold, trim, and split a line into tokens, dropping any leading filler
/// phrases. Returns an empty list for blank or filler-only input.
pub(crate) fn tokenize_line(input: &str, lexicon: &Lexicon) -> Vec<String> {
    let lower = input.trim().to_lowercase();
    let stripped = lower.trim_end_matches(SENTENCE_END).trim_end();
    // A lone "?" is still meaningful.
    let line = if stripped.is_empty() { lower.as_str() } else { stripped };

    let mut tokens: Vec<String> = line
        .split_whitespace()
        .map(|token| token.trim_end_matches(TOKEN_END).to_string())
        .filter(|token| !token.is_empty())
        .collect();

    strip_fillers(&mut tokens, lexicon);
    tokens
}

/// Remove filler prefixes ("please", "can i").
fn strip_fillers(tokens: &mut Vec<String>, lexicon: &Lexicon) {
    loop {
        let Some(filler) = lexicon
            .fillers()
            .iter()
            .find(|filler| tokens.starts_with(filler))
        else {
            return;
        };
        tokens.drain(..filler.len());
    }
}

/// Skip leading articles.
pub(crate) fn strip_articles<'t>(tokens: &'t [String], lexicon: &Lexicon) -> &'t [String] {
    let start = tokens
        .iter()
        .position(|token| !lexicon.is_article(token))
        .unwrap_or(tokens.len());
    &tokens[start..]
}

/// Skip leading words from `skip`.
pub(crate) fn strip_leading<'t>(tokens: &'t [String], skip: &[String]) -> &'t [String] {
    let start = tokens
        .iter()
        .position(|token| !skip.contains(token))
        .unwrap_or(tokens.len());
    &tokens[start..]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(input: &str) -> Vec<String> {
        tokenize_line(input, &Lexicon::builtin())
    }

    #[test]
    fn folds_case_and_collapses_whitespace() {
        assert_eq!(tokens("  Pick   UP\tthe\u{3000}Sword "), ["pick", "up", "the", "sword"]);
    }

    #[test]
    fn blank_input_has_no_tokens() {
        assert!(tokens("").is_empty());
        assert!(tokens(" \t\n ").is_empty());
    }

    #[test]
    fn trailing_punctuation_is_dropped() {
        assert_eq!(tokens("where am I?"), ["where", "am", "i"]);
        assert_eq!(tokens("go north!!"), ["go", "north"]);
        assert_eq!(tokens("give gold, to merchant"), ["give", "gold", "to", "merchant"]);
    }

    #[test]
    fn lone_question_mark_survives() {
        assert_eq!(tokens("?"), ["?"]);
    }

    #[test]
    fn fillers_are_stripped_repeatedly() {
        assert_eq!(tokens("Please, can I open the door?"), ["open", "the", "door"]);
        assert_eq!(tokens("i want to go north"), ["go", "north"]);
    }

    #[test]
    fn filler_alone_leaves_nothing() {
        assert!(tokens("please").is_empty());
        assert!(tokens("I want to").is_empty());
        assert!(tokens("please can i").is_empty());
    }

    #[test]
    fn articles_only_at_the_front() {
        let lexicon = Lexicon::builtin();
        let words = tokenize_line("the a box of the king", &lexicon);
        assert_eq!(strip_articles(&words, &lexicon), ["box", "of", "the", "king"]);
    }
}
