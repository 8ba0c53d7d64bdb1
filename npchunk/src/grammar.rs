#![deny(warnings)]

use crate::error::Error;
use std::collections::{HashMap, HashSet};
use std::fmt;

#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Symbol {
    NonTerm(String),
    // A terminal matches exactly one input word
    Term(String),
}

#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Rule {
    pub head: String,
    pub spec: Vec<Symbol>,
}

/// An immutable set of productions plus a start symbol. Productions are
/// indexed by their head so predictions don't scan the whole rule list.
#[derive(Clone, Debug)]
pub struct Grammar {
    start: String,
    rules: Vec<Rule>,
    heads: HashMap<String, Vec<usize>>,
    words: HashSet<String>,
}

#[derive(Default)]
pub struct GrammarBuilder {
    symbols: HashMap<String, Symbol>,
    rules: Vec<Rule>,
    error: Option<String>,
}


impl Symbol {
    pub fn name(&self) -> &str {
        match self {
            Symbol::NonTerm(name) => name,
            Symbol::Term(word) => word,
        }
    }

    pub fn matches(&self, input: &str) -> bool {
        match self {
            Symbol::Term(word) => word == input,
            _ => false
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Symbol::Term(_))
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Symbol::Term(word) => write!(f, "Term({})", word),
            Symbol::NonTerm(name) => write!(f, "NonTerm({})", name),
        }
    }
}

impl Rule {
    pub fn new(head: &str, spec: &[Symbol]) -> Self {
        Rule {
            head: head.to_string(),
            spec: spec.to_vec(),
        }
    }
}

// Terminals are quoted so the output can be read back as grammar text
impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ->", self.head)?;
        for sym in &self.spec {
            match sym {
                Symbol::NonTerm(name) => write!(f, " {}", name)?,
                Symbol::Term(word) => write!(f, " {:?}", word)?,
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl Grammar {
    pub fn start(&self) -> &str { &self.start }

    /// All productions in definition order.
    pub fn rules(&self) -> &[Rule] { &self.rules }

    /// Productions for `head` in definition order, none if it's undefined.
    pub fn rules_for<'a>(&'a self, head: &str) -> impl Iterator<Item=&'a Rule> + use<'a> {
        self.heads.get(head)
            .into_iter()
            .flatten()
            .map(move |&idx| &self.rules[idx])
    }

    /// True if some terminal rule produces `word`.
    pub fn covers(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Words in `tokens` the grammar can't produce, in input order, deduped.
    pub fn uncovered<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<String> {
        let mut seen = HashSet::new();
        tokens.iter()
            .map(|tok| tok.as_ref())
            .filter(|tok| !self.covers(tok) && seen.insert(*tok))
            .map(|tok| tok.to_string())
            .collect()
    }
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for rule in &self.rules {
            writeln!(f, "{}", rule)?;
        }
        Ok(())
    }
}

// Unit rules (A -> B) forming a loop let a non-terminal derive itself,
// which gives infinitely many trees for any sentence that uses it.
// Returns the first loop found in rule order, eg: "S -> A -> S".
fn unit_cycle(rules: &[Rule]) -> Option<String> {
    let mut edges: HashMap<&str, Vec<&str>> = HashMap::new();
    for rule in rules {
        if let [Symbol::NonTerm(name)] = rule.spec.as_slice() {
            edges.entry(rule.head.as_str()).or_default().push(name.as_str());
        }
    }

    fn visit<'a>(node: &'a str, edges: &HashMap<&'a str, Vec<&'a str>>,
                 path: &mut Vec<&'a str>, done: &mut HashSet<&'a str>) -> Option<String> {
        if let Some(pos) = path.iter().position(|n| *n == node) {
            let mut cycle = path[pos..].to_vec();
            cycle.push(node);
            return Some(cycle.join(" -> "));
        }
        if done.contains(node) {
            return None;
        }
        path.push(node);
        for next in edges.get(node).into_iter().flatten() {
            if let Some(cycle) = visit(*next, edges, path, done) {
                return Some(cycle);
            }
        }
        path.pop();
        done.insert(node);
        None
    }

    let mut done = HashSet::new();
    rules.iter().find_map(|rule| visit(&rule.head, &edges, &mut Vec::new(), &mut done))
}

/// Builds a Grammar while validating existence of Symbols and checking rules.
/// The first problem found is kept and reported by `into_grammar`.
impl GrammarBuilder {
    fn fail(&mut self, msg: String) {
        if self.error.is_none() {
            self.error = Some(msg);
        }
    }

    fn add_symbol(&mut self, symbol: Symbol, quiet: bool) {
        match self.symbols.get(symbol.name()) {
            None => {
                self.symbols.insert(symbol.name().to_string(), symbol);
            }
            // a word can't be both a terminal and a non-terminal
            Some(existing) if quiet && *existing == symbol => (),
            Some(_) => self.fail(format!("Duplicate Symbol: {}", symbol.name())),
        }
    }

    pub fn nonterm(mut self, name: impl Into<String>) -> Self {
        self.add_symbol(Symbol::NonTerm(name.into()), false);
        self
    }

    pub fn terminal(mut self, word: impl Into<String>) -> Self {
        self.add_symbol(Symbol::Term(word.into()), false);
        self
    }

    // Quiet versions ignore re-declaring a symbol of the same kind.
    // They don't use chaining so they can be invoked in loops.

    pub fn quiet_nonterm(&mut self, name: impl Into<String>) {
        self.add_symbol(Symbol::NonTerm(name.into()), true);
    }

    pub fn quiet_terminal(&mut self, word: impl Into<String>) {
        self.add_symbol(Symbol::Term(word.into()), true);
    }

    /// Register a new rule, all its symbols must be declared already
    fn add_rule<S, S2>(&mut self, head: S, spec: &[S2], quiet: bool)
        where S: AsRef<str>, S2: AsRef<str>
    {
        let head = head.as_ref();
        match self.symbols.get(head) {
            Some(Symbol::NonTerm(_)) => (),
            Some(Symbol::Term(_)) => {
                return self.fail(format!("Terminal used as rule head: {}", head));
            }
            None => return self.fail(format!("Missing Symbol: {}", head)),
        }
        if spec.is_empty() {
            return self.fail(format!("Empty Rule: {} ->", head));
        }
        if let Some(s) = spec.iter().find(|s| !self.symbols.contains_key(s.as_ref())) {
            return self.fail(format!("Missing Symbol: {}", s.as_ref()));
        }
        let rule = Rule {
            head: head.to_string(),
            spec: spec.iter().map(|s| self.symbols[s.as_ref()].clone()).collect(),
        };
        if !self.rules.contains(&rule) {
            tracing::trace!("Adding rule {}", rule);
            self.rules.push(rule);
        } else if !quiet {
            self.fail(format!("Duplicate Rule: {}", rule));
        }
    }

    pub fn rule<S, S2>(mut self, head: S, spec: &[S2]) -> Self
        where S: AsRef<str>, S2: AsRef<str>
    {
        self.add_rule(head, spec, false);
        self
    }

    pub fn quiet_rule<S, S2>(&mut self, head: S, spec: &[S2])
        where S: AsRef<str>, S2: AsRef<str>
    {
        self.add_rule(head, spec, true)
    }

    pub fn into_grammar(mut self, start: impl Into<String>) -> Result<Grammar, Error> {
        let start = start.into();
        let mut heads: HashMap<String, Vec<usize>> = HashMap::new();
        for (idx, rule) in self.rules.iter().enumerate() {
            heads.entry(rule.head.clone()).or_default().push(idx);
        }
        // every non-terminal reachable from a rule must be expandable
        let undefined = std::iter::once(&start)
            .chain(self.rules.iter()
                .flat_map(|r| r.spec.iter())
                .filter(|s| !s.is_terminal())
                .map(|s| match s { Symbol::NonTerm(n) | Symbol::Term(n) => n }))
            .find(|name| !heads.contains_key(*name))
            .cloned();
        match self.symbols.get(&start) {
            None => self.fail(format!("Missing Symbol: {}", start)),
            Some(Symbol::Term(_)) => self.fail(format!("Terminal used as start: {}", start)),
            Some(Symbol::NonTerm(_)) => (),
        }
        if let Some(name) = undefined {
            self.fail(format!("Undefined NonTerm: {}", name));
        }
        if let Some(cycle) = unit_cycle(&self.rules) {
            self.fail(format!("Unit cycle: {}", cycle));
        }
        if let Some(e) = self.error {
            return Err(Error::MalformedGrammar(e));
        }
        let words = self.rules.iter()
            .flat_map(|r| r.spec.iter())
            .filter(|s| s.is_terminal())
            .map(|s| s.name().to_string())
            .collect();
        Ok(Grammar{start, rules: self.rules, heads, words})
    }
}


///////////////////////////////////////////////////////////////////////////////
