#![deny(warnings)]

use crate::error::Error;
use crate::grammar::{Grammar, GrammarBuilder};
use lexers::{CfgToken, CfgTokenizer};
use std::str::FromStr;

// One alternative of a production: symbol names in order
type Body = Vec<String>;

/// Reads productions written one per line, eg:
///
/// ```text
/// # comments run until the end of the line
/// NP -> N | Det N | NP PP
/// N  -> "holmes" | "pipe"
/// ```
///
/// Bare identifiers are non-terminals, quoted strings are terminal words.
/// Alternatives of a head may be split across several lines.
struct TextLoader {
    builder: GrammarBuilder,
    first_head: Option<String>,
}

impl TextLoader {
    fn new(builder: GrammarBuilder) -> Self {
        TextLoader{builder, first_head: None}
    }

    fn error(line: usize, msg: impl std::fmt::Display) -> Error {
        Error::MalformedGrammar(format!("line {}: {}", line, msg))
    }

    // Split a production's tokens into head and alternative bodies
    fn production(line: usize, tokens: Vec<CfgToken>) -> Result<(String, Vec<Body>), Error> {
        let mut tokens = tokens.into_iter();
        let head = match tokens.next() {
            Some(CfgToken::Ident(head)) => head,
            Some(other) => return Err(Self::error(line, format!("expected rule head, found {:?}", other))),
            None => return Err(Self::error(line, "empty production")),
        };
        match tokens.next() {
            Some(CfgToken::Arrow) => (),
            Some(other) => return Err(Self::error(line, format!("expected '->', found {:?}", other))),
            None => return Err(Self::error(line, format!("expected '->' after {}", head))),
        }
        let mut bodies = vec![Body::new()];
        for token in tokens {
            match token {
                CfgToken::Bar => bodies.push(Body::new()),
                CfgToken::Ident(name) | CfgToken::Literal(name) if name.is_empty() => {
                    return Err(Self::error(line, format!("empty symbol in {} rule", head)));
                }
                CfgToken::Ident(name) | CfgToken::Literal(name) => {
                    if let Some(body) = bodies.last_mut() { body.push(name) }
                }
                other => return Err(Self::error(line, format!("unexpected {:?}", other))),
            }
        }
        if bodies.iter().any(|body| body.is_empty()) {
            return Err(Self::error(line, format!("empty alternative for {}", head)));
        }
        Ok((head, bodies))
    }

    fn add_production(&mut self, line: usize, tokens: Vec<CfgToken>) -> Result<(), Error> {
        // symbols are declared as they show up, nonterm definitions are
        // checked once the whole text is loaded
        for token in &tokens {
            match token {
                CfgToken::Ident(name) => self.builder.quiet_nonterm(name.as_str()),
                CfgToken::Literal(word) => self.builder.quiet_terminal(word.as_str()),
                _ => (),
            }
        }
        let (head, bodies) = Self::production(line, tokens)?;
        for body in bodies {
            tracing::debug!("Adding rule {} -> {}", head, body.join(" "));
            self.builder.quiet_rule(&head, body.as_slice());
        }
        self.first_head.get_or_insert(head);
        Ok(())
    }

    fn load(mut self, text: &str) -> Result<Self, Error> {
        let mut tokenizer = CfgTokenizer::from_str(text);
        let mut tokens = Vec::new();
        let mut line = tokenizer.line();
        loop {
            let token = tokenizer.next();
            match token {
                Some(CfgToken::Newline) | None => {
                    if !tokens.is_empty() {
                        self.add_production(line, std::mem::take(&mut tokens))?;
                    }
                    if token.is_none() {
                        break;
                    }
                    line = tokenizer.line();
                }
                Some(token) => tokens.push(token),
            }
        }
        Ok(self)
    }
}

impl Grammar {
    /// Build a grammar from production text, see `TextLoader` for the format.
    pub fn from_text(text: &str, start: &str) -> Result<Grammar, Error> {
        TextLoader::new(GrammarBuilder::default())
            .load(text)?
            .builder
            .into_grammar(start)
    }
}

/// Parses grammar text using the head of the first production as start.
impl FromStr for Grammar {
    type Err = Error;
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let loader = TextLoader::new(GrammarBuilder::default()).load(text)?;
        let start = loader.first_head
            .ok_or_else(|| Error::MalformedGrammar("No productions".to_string()))?;
        loader.builder.into_grammar(start)
    }
}

///////////////////////////////////////////////////////////////////////////////
