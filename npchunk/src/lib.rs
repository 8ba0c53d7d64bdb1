#![deny(warnings)]

mod error;
pub use crate::error::Error;

mod grammar;
mod grammar_text;
pub use crate::grammar::{Grammar, GrammarBuilder, Rule, Symbol};

mod items;
mod parser;
pub use crate::parser::{EarleyParser, ParseTrees};

mod trees;
pub use crate::trees::EarleyForest;

mod tree;
pub use crate::tree::Tree;

mod chunks;
pub use crate::chunks::{chunks, np_chunks, NOUN_PHRASE};

pub mod english;

/// Every parse tree of `tokens` rooted at the grammar's start symbol.
/// Unknown words are an error, a sentence with no derivation has no trees.
pub fn parse<S: AsRef<str>>(grammar: &Grammar, tokens: &[S]) -> Result<Vec<Tree>, Error> {
    let roots = EarleyParser::new(grammar).parse(tokens)?;
    Ok(EarleyForest::default().trees(&roots))
}

#[cfg(test)]
mod parser_test;
