use thiserror::Error;

/// Errors produced while building a grammar or parsing a sentence with it.
/// A sentence the grammar doesn't generate is not an error (no trees).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The grammar configuration is inconsistent, eg: a rule references a
    /// non-terminal that no rule defines.
    #[error("Malformed grammar: {0}")]
    MalformedGrammar(String),

    /// Input words that no terminal rule of the grammar produces.
    #[error("Grammar does not cover some of the input words: {}", quoted(.0))]
    UnparsableToken(Vec<String>),
}

fn quoted(words: &[String]) -> String {
    words.iter()
        .map(|w| format!("{:?}", w))
        .collect::<Vec<_>>()
        .join(", ")
}
