//! Line-by-line parsing of standard input.

use std::io::{self, BufRead, IsTerminal, Write};
use std::path::Path;

use log::debug;
use saga_parser::ParseContext;

pub fn run(lexicon: Option<&Path>, json: bool) -> Result<(), String> {
    let parser = super::load_parser(lexicon)?;
    let context = ParseContext::default();
    let interactive = io::stdin().is_terminal();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        if interactive {
            print!("> ");
            io::stdout()
                .flush()
                .map_err(|e| format!("cannot write prompt: {e}"))?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line.map_err(|e| format!("cannot read input: {e}"))?;
        if line.trim().eq_ignore_ascii_case("quit") {
            break;
        }

        let command = parser.parse(&line, &context);
        debug!("parsed {line:?} as {command}");
        super::print_command(&parser, &command, json)?;
    }

    Ok(())
}
