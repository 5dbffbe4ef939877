use std::path::Path;

use comfy_table::{ContentArrangement, Table};
use saga_parser::CanonicalVerb;

pub fn run(lexicon: Option<&Path>, verb: Option<&str>) -> Result<(), String> {
    let lexicon = super::load_lexicon(lexicon)?;

    let filter = verb
        .map(|name| name.parse::<CanonicalVerb>().map_err(|e| e.to_string()))
        .transpose()?;

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Verb", "Synonyms"]);

    let mut rows = 0;
    for (canonical, surfaces) in lexicon.verbs() {
        if filter.is_some_and(|f| f != canonical) {
            continue;
        }
        table.add_row(vec![canonical.to_string(), surfaces.join(", ")]);
        rows += 1;
    }

    if rows == 0 {
        println!("  No synonyms configured.");
        return Ok(());
    }
    println!("{table}");

    if filter.is_none() && !lexicon.contextual_rules().is_empty() {
        let mut contextual = Table::new();
        contextual.set_content_arrangement(ContentArrangement::Dynamic);
        contextual.set_header(vec!["Word", "Bare", "With argument", "In combat"]);
        for rule in lexicon.contextual_rules() {
            contextual.add_row(vec![
                rule.surface.clone(),
                rule.bare.to_string(),
                rule.with_argument.to_string(),
                rule.in_combat.map_or_else(|| "-".to_string(), |v| v.to_string()),
            ]);
        }
        println!();
        println!("{contextual}");
    }

    println!();
    println!(
        "  {} verbs, {} surfaces",
        lexicon.verb_count(),
        lexicon.surface_count()
    );

    Ok(())
}
