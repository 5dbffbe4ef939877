use std::path::Path;

use log::debug;
use saga_parser::ParseContext;

/// Build the parse context from command-line flags.
pub fn context(
    partner: Option<String>,
    npcs: Vec<String>,
    items: Vec<String>,
    in_combat: bool,
) -> ParseContext {
    let mut context = ParseContext::new().with_combat(in_combat);
    if let Some(partner) = partner {
        context = context.with_partner(partner);
    }
    for npc in npcs {
        context = context.with_npc(npc);
    }
    for item in items {
        context = context.with_item(item);
    }
    context
}

pub fn run(
    lexicon: Option<&Path>,
    text: &str,
    context: &ParseContext,
    json: bool,
) -> Result<(), String> {
    let parser = super::load_parser(lexicon)?;
    let command = parser.parse(text, context);
    debug!("parsed {text:?} as {command}");
    super::print_command(&parser, &command, json)
}
