pub mod check;
pub mod export;
pub mod parse;
pub mod repl;
pub mod vocab;

use std::path::Path;

use colored::Colorize;
use saga_parser::{Lexicon, ParsedCommand, Parser};

/// Load the lexicon named on the command line, or the builtin one.
fn load_lexicon(path: Option<&Path>) -> Result<Lexicon, String> {
    match path {
        Some(path) => Lexicon::from_path(path).map_err(|e| e.to_string()),
        None => Ok(Lexicon::builtin()),
    }
}

fn load_parser(path: Option<&Path>) -> Result<Parser, String> {
    load_lexicon(path).map(Parser::new)
}

/// Print one parsed command, with a hint line for anything not understood.
fn print_command(parser: &Parser, command: &ParsedCommand, json: bool) -> Result<(), String> {
    if json {
        let line = serde_json::to_string(command)
            .map_err(|e| format!("JSON serialization error: {e}"))?;
        println!("{line}");
        return Ok(());
    }

    if command.is_unknown() {
        println!("  {}", command.to_string().yellow());
    } else {
        println!("  {}", command.to_string().bold());
    }
    if let Some(diagnostic) = command.diagnostic {
        println!("  {}", format!("note: {diagnostic}").dimmed());
    }
    if command.is_unknown() {
        let suggestions = parser.suggest(&command.raw);
        if !suggestions.is_empty() {
            println!("  did you mean: {}?", suggestions.join(", "));
        }
    }
    Ok(())
}
