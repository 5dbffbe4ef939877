use std::path::Path;

use saga_parser::Lexicon;

pub fn run(file: &Path) -> Result<(), String> {
    let lexicon = Lexicon::from_path(file).map_err(|e| e.to_string())?;

    println!("  All checks passed for '{}'.", file.display());
    println!(
        "  {} verbs, {} surfaces, {} contextual words",
        lexicon.verb_count(),
        lexicon.surface_count(),
        lexicon.contextual_rules().len()
    );

    Ok(())
}
