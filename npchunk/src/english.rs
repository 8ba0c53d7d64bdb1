//! A small English grammar: enough to parse sentences like
//! "Holmes sat in the little red armchair".

use crate::error::Error;
use crate::grammar::Grammar;

pub const START: &str = "S";

pub const TERMINALS: &str = r#"
Adj -> "country" | "dreadful" | "enigmatical" | "little" | "moist" | "red"
Adv -> "down" | "here" | "never"
Conj -> "and" | "until"
Det -> "a" | "an" | "his" | "my" | "the"
N -> "armchair" | "companion" | "day" | "door" | "hand" | "he" | "himself"
N -> "holmes" | "home" | "i" | "mess" | "paint" | "palm" | "pipe" | "she"
N -> "smile" | "thursday" | "walk" | "we" | "word"
P -> "at" | "before" | "in" | "of" | "on" | "to"
V -> "arrived" | "came" | "chuckled" | "had" | "lit" | "said" | "sat"
V -> "smiled" | "tell" | "were"
"#;

pub const NONTERMINALS: &str = r#"
S -> NP VP
NP -> N | Det N | Det AdjP N | NP PP
VP -> V | V NP | V NP PP | V PP | VP Adv | Adv VP
AdjP -> Adj | Adj AdjP
PP -> P NP
"#;

/// The built-in grammar, rooted at `S`.
pub fn grammar() -> Result<Grammar, Error> {
    let text = format!("{}{}", NONTERMINALS, TERMINALS);
    Grammar::from_text(&text, START)
}
