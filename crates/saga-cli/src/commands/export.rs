use std::path::Path;

pub fn run(lexicon: Option<&Path>, output: Option<&Path>) -> Result<(), String> {
    let lexicon = super::load_lexicon(lexicon)?;
    let mut content = lexicon
        .to_config()
        .to_json_pretty()
        .map_err(|e| format!("JSON serialization error: {e}"))?;
    content.push('\n');

    if let Some(path) = output {
        std::fs::write(path, &content)
            .map_err(|e| format!("cannot write to {}: {e}", path.display()))?;
        println!("  Exported to {}", path.display());
    } else {
        print!("{content}");
    }

    Ok(())
}
