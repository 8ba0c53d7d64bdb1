#![deny(warnings)]

use crate::items::{Item, Trigger};
use crate::parser::ParseTrees;
use crate::tree::Tree;
use std::collections::HashMap;
use std::rc::Rc;

// Alternative child sequences matched by an item's dotted prefix
type Partials = Rc<Vec<Vec<Tree>>>;

/// Unwinds the Earley chart into concrete parse trees.
///
/// Each item's back-pointers are walked to the start of its rule:
/// - no sources means we're at the begining of the production,
/// - a `Scan` source lifts the scanned word into a leaf,
/// - a `Complete` source pairs the prefix before the dot with every
///   derivation of the completed child.
///
/// Partial derivations are memoized per item so shared sub-spans of an
/// ambiguous parse are unwound once. Output trees are deep copies.
#[derive(Default)]
pub struct EarleyForest<'g> {
    partials: HashMap<Rc<Item<'g>>, Partials>,
}

impl<'g> EarleyForest<'g> {
    fn walker(&mut self, root: &Rc<Item<'g>>) -> Partials {
        if let Some(known) = self.partials.get(root) {
            return known.clone();
        }
        let mut alternatives = Vec::new();
        let sources = root.sources();
        if sources.is_empty() {
            alternatives.push(Vec::new());
        }
        for (source, trigger) in sources.iter() {
            let prefixes = self.walker(source);
            match trigger {
                Trigger::Scan(word) => {
                    for prefix in prefixes.iter() {
                        let mut args = prefix.clone();
                        args.push(Tree::Leaf(word.clone()));
                        alternatives.push(args);
                    }
                }
                Trigger::Complete(child) => {
                    let children = self.subtrees(child);
                    for prefix in prefixes.iter() {
                        for subtree in &children {
                            let mut args = prefix.clone();
                            args.push(subtree.clone());
                            alternatives.push(args);
                        }
                    }
                }
            }
        }
        drop(sources);
        let alternatives = Rc::new(alternatives);
        self.partials.insert(root.clone(), alternatives.clone());
        alternatives
    }

    // All derivations of a complete item as trees labeled by its rule head
    fn subtrees(&mut self, item: &Rc<Item<'g>>) -> Vec<Tree> {
        debug_assert!(item.complete(), "Only complete items yield trees");
        self.walker(item).iter()
            .map(|args| Tree::Node(item.rule.head.clone(), args.clone()))
            .collect()
    }

    /// Every derivation of every root, roots in chart order and within a
    /// root alternatives in the order their back-pointers were discovered.
    pub fn trees(&mut self, ptrees: &ParseTrees<'g>) -> Vec<Tree> {
        // items of different charts may compare equal
        self.partials.clear();
        let trees: Vec<_> = ptrees.0.iter()
            .flat_map(|root| self.subtrees(root))
            .collect();
        tracing::debug!("Unwound {} trees from {} roots", trees.len(), ptrees.0.len());
        trees
    }
}
