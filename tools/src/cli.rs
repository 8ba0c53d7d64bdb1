use std::path::PathBuf;

use clap::{ArgAction, Parser};

#[derive(Parser, Debug)]
#[command(version, about = "Parse a sentence and list its noun phrase chunks")]
pub struct Cli {
    /// File containing the sentence (prompt for one when missing)
    pub file: Option<PathBuf>,

    /// Grammar file to use instead of the built-in English grammar
    #[arg(short, long, value_name = "FILE")]
    pub grammar: Option<PathBuf>,

    /// Start symbol (default: S, or the first rule head of --grammar)
    #[arg(short, long, value_name = "SYMBOL")]
    pub start: Option<String>,

    /// Label of the phrases to chunk
    #[arg(short, long, value_name = "LABEL", default_value = npchunk::NOUN_PHRASE)]
    pub label: String,

    /// Keep prompting for sentences until EOF
    #[arg(short, long)]
    pub repl: bool,

    /// Log more (-v debug, -vv trace), RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
