#![deny(warnings)]

use crate::error::Error;
use crate::grammar::{Grammar, Symbol};
use crate::items::Item;
use indexmap::IndexSet;
use std::rc::Rc;
use tracing::{debug, trace};

// Items ending at one input position, in the order they were discovered
type StateSet<'g> = IndexSet<Rc<Item<'g>>>;

/// Earley recognizer over a shared, read-only `Grammar`.
pub struct EarleyParser<'g> {
    pub grammar: &'g Grammar,
}

/// Complete items for the start symbol spanning the whole input.
/// Each one roots a forest of derivations, see `EarleyForest`.
#[derive(Debug)]
pub struct ParseTrees<'g>(pub Vec<Rc<Item<'g>>>);

///////////////////////////////////////////////////////////////////////////////

impl<'g> EarleyParser<'g> {
    pub fn new(grammar: &'g Grammar) -> EarleyParser<'g> {
        EarleyParser{grammar}
    }

    /// Build new `Prediction` items for rules whose head is `next_nonterm`.
    fn predictions<'r>(
        &'r self,
        next_nonterm: &str,
        start_pos: usize,
    ) -> Box<dyn Iterator<Item=Item<'g>> + 'r>
    {
        Box::new(self.grammar.rules_for(next_nonterm)
            .map(move |rule| Item::predict_new(rule, start_pos)))
    }

    /// Build new `Completion` items based on `trigger` item having completed.
    /// When an item is completed it advances all items in the same starting
    /// StateSet whose next symbol matches its rule name.
    fn completions<'r>(
        starting_stateset: &'r StateSet<'g>,
        trigger: &'r Rc<Item<'g>>,
        complete_pos: usize,
    ) -> Box<dyn Iterator<Item=Item<'g>> + 'r>
    {
        assert!(trigger.complete(), "Incomplete `trigger` used for completions");
        Box::new(starting_stateset.iter().filter(move |item| {
            match item.next_symbol() {
                Some(Symbol::NonTerm(name)) => name == &trigger.rule.head,
                _ => false
            }
        }).map(move |item| Item::complete_new(item, trigger, complete_pos)))
    }

    /// Build new `Scan` items for items in the current stateset whose next
    /// symbol is a Terminal that matches the input lexeme ahead in the stream.
    fn scans<'r>(
        current_stateset: &'r StateSet<'g>,
        lexeme: &'r str,
        end: usize,
    ) -> impl Iterator<Item=Rc<Item<'g>>> + 'r
    {
        current_stateset.iter().filter(move |item|
            item.next_symbol().is_some_and(|s| s.matches(lexeme))
        ).map(move |item| Rc::new(Item::scan_new(item, end, lexeme)))
    }

    // Predict/Complete until no new Items are added to the StateSet
    fn close(&self, statesets: &mut [StateSet<'g>], idx: usize) {
        loop {
            let new_items: Vec<Item<'g>> = statesets[idx].iter().flat_map(|trigger| {
                let expansions: Box<dyn Iterator<Item=Item<'g>> + '_> =
                    match trigger.next_symbol() {
                        Some(Symbol::NonTerm(name)) => self.predictions(name, idx),
                        None => Self::completions(&statesets[trigger.start], trigger, idx),
                        // Scan items populate next stateset only when done with current state
                        Some(Symbol::Term(_)) => Box::new(std::iter::empty()),
                    };
                expansions
            }).collect();
            let stateset = &mut statesets[idx];
            let prev_len = stateset.len();
            // Add new items to the current stateset merging existing ones
            for new_item in new_items {
                if let Some(existent) = stateset.get(&new_item) {
                    existent.merge_sources(new_item);
                } else {
                    stateset.insert(Rc::new(new_item));
                }
            }
            if prev_len == stateset.len() {
                break;
            }
        }
    }

    /// Run the chart over `tokens`. Words the grammar doesn't know are
    /// reported up front, a sentence with no derivation yields no roots.
    pub fn parse<S: AsRef<str>>(&self, tokens: &[S]) -> Result<ParseTrees<'g>, Error> {
        let uncovered = self.grammar.uncovered(tokens);
        if !uncovered.is_empty() {
            debug!("Uncovered words: {:?}", uncovered);
            return Err(Error::UnparsableToken(uncovered));
        }

        // Populate S0, add items for each rule matching the start symbol
        let s0: StateSet<'g> = self.grammar.rules_for(self.grammar.start())
            .map(|rule| Rc::new(Item::predict_new(rule, 0)))
            .collect();
        let mut statesets = vec![s0];

        // New statesets are generated from input stream (Scans)
        for (idx, lexeme) in tokens.iter().enumerate() {
            self.close(&mut statesets, idx);
            // Build Si+1 with items in the current state that accept the next token
            let next: StateSet<'g> = Self::scans(&statesets[idx], lexeme.as_ref(), idx + 1).collect();
            if next.is_empty() {
                debug!("No item scans {:?} at position {}", lexeme.as_ref(), idx);
                return Ok(ParseTrees(Vec::new()));
            }
            statesets.push(next);
        }
        self.close(&mut statesets, tokens.len());

        if tracing::enabled!(tracing::Level::TRACE) {
            for (idx, stateset) in statesets.iter().enumerate() {
                trace!("=== StateSet {} ===", idx);
                for item in stateset {
                    let src = item.sources().iter()
                        .map(|bp| format!("{:?}", bp))
                        .collect::<Vec<_>>().join(", ");
                    trace!("{:?} -- SRC: {}", item, src);
                }
            }
        }

        // Roots are a. complete, b. start at idx 0, and c. named as the
        // start symbol. They span the whole input as they're in the last set
        let roots: Vec<_> = statesets.last()
            .map(|last| last.iter()
                .filter(|item| item.start == 0 && item.complete() &&
                               item.rule.head == self.grammar.start())
                .cloned()
                .collect())
            .unwrap_or_default();
        debug!("Chart sizes: {:?}, roots: {}",
               statesets.iter().map(|s| s.len()).collect::<Vec<_>>(), roots.len());
        Ok(ParseTrees(roots))
    }
}
