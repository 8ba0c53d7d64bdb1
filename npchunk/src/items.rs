#![deny(warnings)]

use crate::grammar::{Rule, Symbol};
use indexmap::IndexSet;
use std::{cell, fmt, hash};
use std::rc::Rc;


#[derive(PartialEq, Eq, Hash, Debug, Clone)]
pub enum Trigger<'g> {
    Complete(Rc<Item<'g>>),
    Scan(String),
}

// (source-item, Scan/Complete), kept in the order they were discovered
pub type Backpointers<'g> = IndexSet<(Rc<Item<'g>>, Trigger<'g>)>;

/// An Item is a partially matched `Rule`. `dot` shows the match progress.
pub struct Item<'g> {
    pub rule: &'g Rule,  // LR0item (dotted rule)
    pub dot: usize,      // dot position within the rule
    pub start: usize,    // input position where item starts
    pub end: usize,      // input position where item ends

    // Need a RefCell to update existing Items. A replacement with the union
    // of backpointers would invalidate other Items already pointing to this one.
    backpointers: cell::RefCell<Backpointers<'g>>,
}


// Items are deduped only by rule, dot, start, end (ie: not bp)
// The intention is that 2 Items are the same and can be merged ignoring bp.
impl hash::Hash for Item<'_> {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.rule.hash(state);
        self.dot.hash(state);
        self.start.hash(state);
        self.end.hash(state);
    }
}

impl PartialEq for Item<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.rule == other.rule &&
        self.dot == other.dot &&
        self.start == other.start &&
        self.end == other.end
    }
}

impl Eq for Item<'_> {}

impl fmt::Debug for Item<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let pre = self.rule.spec.iter().take(self.dot)
            .map(|s| s.name()).collect::<Vec<_>>().join(" ");
        let post = self.rule.spec.iter().skip(self.dot)
            .map(|s| s.name()).collect::<Vec<_>>().join(" ");
        write!(f, "({} - {}) {} -> {} \u{00b7} {} #bp: {}",
               self.start, self.end, self.rule.head, pre, post,
               self.backpointers.borrow().len())
    }
}

impl<'g> Item<'g> {
    /// Item is complete if Rule has being fully matched
    pub fn complete(&self) -> bool {
        self.dot >= self.rule.spec.len()
    }

    /// Exposes the next symbol in the progress of the Rule
    pub fn next_symbol(&self) -> Option<&'g Symbol> {
        self.rule.spec.get(self.dot)
    }

    /// Scans or Completions that led to the creation of this Item.
    pub fn sources(&self) -> cell::Ref<'_, Backpointers<'g>> {
        self.backpointers.borrow()
    }

    /// Merge other Item into this one moving over its backpointers
    pub fn merge_sources(&self, other: Item<'g>) {
        assert_eq!(*self, other, "Items to merge should be Eq");
        let other_bp = other.backpointers.into_inner();
        self.backpointers.borrow_mut().extend(other_bp);
    }

    fn advance(source: &Rc<Item<'g>>, end: usize, trigger: Trigger<'g>) -> Item<'g> {
        let mut bp = IndexSet::new();
        bp.insert((source.clone(), trigger));
        Item{
            rule: source.rule,
            dot: source.dot + 1,
            start: source.start,
            end,
            backpointers: cell::RefCell::new(bp),
        }
    }

    /// Build a new `Prediction` based Item.
    pub fn predict_new(rule: &'g Rule, start: usize) -> Item<'g> {
        Item{
            rule,
            dot: 0,
            start,
            end: start,
            backpointers: cell::RefCell::new(IndexSet::new()),
        }
    }

    /// Build `Scan` based Items.
    /// An item where the rule is advanced by matching a terminal.
    pub fn scan_new(source: &Rc<Item<'g>>, end: usize, input: &str) -> Item<'g> {
        Self::advance(source, end, Trigger::Scan(input.to_string()))
    }

    /// Build `Completion` based Items.
    /// `Rule` is advanced because its next symbol matches the completed `trigger`.
    pub fn complete_new(source: &Rc<Item<'g>>, trigger: &Rc<Item<'g>>, end: usize) -> Item<'g> {
        Self::advance(source, end, Trigger::Complete(trigger.clone()))
    }
}

///////////////////////////////////////////////////////////////////////////////
