mod cli;
mod report;

use clap::Parser;
use npchunk::Grammar;
use rustyline::error::ReadlineError;
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_grammar(cli: &cli::Cli) -> Result<Grammar, String> {
    let grammar = match &cli.grammar {
        None => match &cli.start {
            None => npchunk::english::grammar(),
            Some(start) => Grammar::from_text(
                &format!("{}{}", npchunk::english::NONTERMINALS, npchunk::english::TERMINALS),
                start),
        },
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .map_err(|e| format!("Can't read grammar {}: {}", path.display(), e))?;
            match &cli.start {
                None => text.parse(),
                Some(start) => Grammar::from_text(&text, start),
            }
        }
    };
    grammar.map_err(|e| e.to_string())
}

fn main() -> Result<(), String> {
    let cli = cli::Cli::parse();
    init_logging(cli.verbose);
    let grammar = load_grammar(&cli)?;
    tracing::debug!("Grammar with {} rules, start {}", grammar.rules().len(), grammar.start());

    if let Some(path) = &cli.file {
        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("Can't read {}: {}", path.display(), e))?;
        print!("{}", report::report(&grammar, &text, &cli.label));
        return Ok(());
    }

    let mut rl = rustyline::DefaultEditor::new().map_err(|e| e.to_string())?;
    loop {
        match rl.readline("Sentence: ") {
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => return Ok(()),
            Err(e) => return Err(format!("Readline err: {:?}", e)),
            Ok(line) => {
                let _ = rl.add_history_entry(&line);
                print!("{}", report::report(&grammar, &line, &cli.label));
            }
        }
        if !cli.repl {
            return Ok(());
        }
    }
}
