#![deny(warnings)]

use crate::scanner::Scanner;

#[derive(Clone, Debug, PartialEq)]
pub enum CfgToken {
    Arrow,
    Bar,
    Newline,
    // bare identifier, eg: NP
    Ident(String),
    // quoted text with quotes removed, eg: "holmes"
    Literal(String),
    // anything the grammar text can't contain, eg: an unterminated quote
    Unknown(String),
}

/// Tokenizer for BNF-like grammar text: `NP -> Det N | "holmes"`.
/// Newlines are significant because each line holds a single production.
/// Comments start with '#' and run until the end of the line.
pub struct CfgTokenizer<I: Iterator<Item=char>> {
    src: Scanner<I>,
    line: usize,
}

impl<I: Iterator<Item=char>> CfgTokenizer<I> {
    pub fn new(src: I) -> Self {
        CfgTokenizer{src: Scanner::new(src), line: 1}
    }

    /// Line the tokenizer is currently on (1-based).
    pub fn line(&self) -> usize { self.line }

    fn skip_blanks(&mut self) {
        let s = &mut self.src;
        s.skip_all(|c| c.is_whitespace() && *c != '\n');
        if s.accept_char('#') {
            s.until(|c| *c == '\n');
        }
        s.ignore();
    }
}

impl<'a> CfgTokenizer<std::str::Chars<'a>> {
    pub fn from_str(src: &'a str) -> Self {
        CfgTokenizer::new(src.chars())
    }
}

impl<I: Iterator<Item=char>> Iterator for CfgTokenizer<I> {
    type Item = CfgToken;
    fn next(&mut self) -> Option<Self::Item> {
        self.skip_blanks();
        if self.src.accept_char('\n') {
            self.src.ignore();
            self.line += 1;
            return Some(CfgToken::Newline);
        }
        let s = &mut self.src;
        if s.accept_char('|') {
            s.ignore();
            return Some(CfgToken::Bar);
        }
        let backtrack = s.pos();
        if s.accept_char('-') {
            if s.accept_char('>') {
                s.ignore();
                return Some(CfgToken::Arrow);
            }
            s.set_pos(backtrack);
        }
        for q in ['"', '\''] {
            if let Some(quoted) = s.scan_quoted_string(q) {
                let inner = &quoted[1..quoted.len() - 1];
                return Some(CfgToken::Literal(inner.replace(&format!("\\{}", q), &q.to_string())));
            }
        }
        if let Some(id) = s.scan_identifier() {
            return Some(CfgToken::Ident(id));
        }
        // consume the rest of the line as garbage
        s.until(|c| *c == '\n');
        let garbage = s.extract_string();
        if garbage.is_empty() {
            None
        } else {
            Some(CfgToken::Unknown(garbage))
        }
    }
}

///////////////////////////////////////////////////////////////////////////////
