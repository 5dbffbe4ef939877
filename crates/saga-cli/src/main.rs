//! CLI frontend for the SagaCraft command parser.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "saga",
    about = "SagaCraft: turn player text into structured commands",
    version,
    propagate_version = true
)]
struct Cli {
    /// Lexicon file to use instead of the builtin English vocabulary
    #[arg(long, global = true)]
    lexicon: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse one line of player input
    Parse {
        /// The input text (joined with spaces)
        #[arg(required = true)]
        text: Vec<String>,

        /// Current conversation partner
        #[arg(long)]
        partner: Option<String>,

        /// A character in view (repeatable)
        #[arg(long = "npc")]
        npcs: Vec<String>,

        /// An item in view (repeatable)
        #[arg(long = "item")]
        items: Vec<String>,

        /// Parse as if combat were active
        #[arg(long)]
        combat: bool,

        /// Print the command as JSON
        #[arg(long)]
        json: bool,
    },

    /// Parse standard input line by line until EOF or "quit"
    Repl {
        /// Print each command as JSON
        #[arg(long)]
        json: bool,
    },

    /// List verbs and their synonyms
    Vocab {
        /// Show only this verb (canonical name)
        verb: Option<String>,
    },

    /// Validate a lexicon file
    Check {
        /// The lexicon file to validate
        file: PathBuf,
    },

    /// Write the active lexicon as JSON
    Export {
        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let lexicon = cli.lexicon.as_deref();

    let result = match cli.command {
        Commands::Parse {
            text,
            partner,
            npcs,
            items,
            combat,
            json,
        } => {
            let context = commands::parse::context(partner, npcs, items, combat);
            commands::parse::run(lexicon, &text.join(" "), &context, json)
        }
        Commands::Repl { json } => commands::repl::run(lexicon, json),
        Commands::Vocab { verb } => commands::vocab::run(lexicon, verb.as_deref()),
        Commands::Check { file } => commands::check::run(&file),
        Commands::Export { output } => commands::export::run(lexicon, output.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
