#![deny(warnings)]

use crate::scanner::Scanner;

// Clitics split off their host word, eg: "holmes's" -> "holmes" "'s"
const CLITICS: &[&str] = &["s", "re", "ll", "ve", "d", "m"];

/// Splits free text into lowercase word and punctuation tokens.
/// Contractions are split as in "didn't" -> "did" "n't".
pub struct WordTokenizer<I: Iterator<Item=char>> {
    src: Scanner<I>,
    pending: Vec<String>,
}

impl<I: Iterator<Item=char>> WordTokenizer<I> {
    pub fn new(src: I) -> Self {
        WordTokenizer{src: Scanner::new(src), pending: Vec::new()}
    }

    // [:alnum:]+ with inner hyphens, eg: "well-known"
    fn scan_word(&mut self) -> Option<String> {
        let s = &mut self.src;
        if !s.skip_all(|c| c.is_alphanumeric()) {
            return None;
        }
        loop {
            let backtrack = s.pos();
            if s.accept_char('-') && s.skip_all(|c| c.is_alphanumeric()) {
                continue;
            }
            s.set_pos(backtrack);
            break;
        }
        Some(s.extract_string())
    }

    // an apostrophe followed by a known clitic, not followed by more letters
    fn scan_clitic(&mut self) -> Option<String> {
        let s = &mut self.src;
        let backtrack = s.pos();
        if s.accept_any_char("'\u{2019}").is_some() && s.skip_all(|c| c.is_alphabetic()) {
            let clitic: String = s.view().iter().skip(1).collect();
            if CLITICS.contains(&clitic.to_lowercase().as_str()) {
                s.ignore();
                return Some(format!("'{}", clitic));
            }
        }
        s.set_pos(backtrack);
        None
    }

    // runs of the same punctuation char are one token, eg: "..." or "--"
    fn scan_punct(&mut self) -> Option<String> {
        let s = &mut self.src;
        let first = s.next()?;
        s.skip_all(|c| *c == first);
        Some(s.extract_string())
    }

    fn split_negation(word: String) -> (String, Option<String>) {
        let lower = word.to_lowercase();
        if lower.len() > 1 && lower.ends_with('n') {
            let mut host = word;
            host.pop();
            return (host, Some("n't".to_string()));
        }
        (word, None)
    }
}

impl<I: Iterator<Item=char>> Iterator for WordTokenizer<I> {
    type Item = String;
    fn next(&mut self) -> Option<Self::Item> {
        if let Some(tok) = self.pending.pop() {
            return Some(tok);
        }
        self.src.ignore_ws();
        if let Some(word) = self.scan_word() {
            // check for "n't" before generic clitics
            let backtrack = self.src.pos();
            if self.src.accept_any_char("'\u{2019}").is_some() && self.src.accept_any_char("tT").is_some()
                && self.src.peek().is_none_or(|c| !c.is_alphanumeric()) {
                let (host, neg) = Self::split_negation(word.clone());
                if let Some(neg) = neg {
                    self.src.ignore();
                    self.pending.push(neg);
                    return Some(host.to_lowercase());
                }
            }
            self.src.set_pos(backtrack);
            if let Some(clitic) = self.scan_clitic() {
                self.pending.push(clitic.to_lowercase());
            }
            return Some(word.to_lowercase());
        }
        self.scan_punct()
    }
}

/// Tokenize `text` keeping only the tokens that contain a letter.
pub fn words(text: &str) -> Vec<String> {
    WordTokenizer::new(text.chars())
        .filter(|tok| tok.chars().any(|c| c.is_alphabetic()))
        .collect()
}

///////////////////////////////////////////////////////////////////////////////
