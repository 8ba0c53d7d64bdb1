#![deny(warnings)]

use crate::tree::Tree;

pub const NOUN_PHRASE: &str = "NP";

// A subtree and the child indices leading to it from the root
struct Candidate<'t> {
    path: Vec<usize>,
    tree: &'t Tree,
}

// Post-order walk collecting `label` subtrees that don't contain another
// `label` subtree. Returns if `tree` itself contains the label anywhere.
fn innermost<'t>(tree: &'t Tree, label: &str, path: &mut Vec<usize>,
                 found: &mut Vec<Candidate<'t>>) -> bool {
    let mut nested = false;
    for (idx, child) in tree.children().iter().enumerate() {
        path.push(idx);
        nested |= innermost(child, label, path, found);
        path.pop();
    }
    let labeled = tree.label() == Some(label);
    if labeled && !nested {
        found.push(Candidate{path: path.clone(), tree});
    }
    labeled || nested
}

/// Chunks of `tree` labeled `label`, left to right.
///
/// A chunk is a `label` subtree with no `label` descendant. Candidates
/// that still sit under another candidate are dropped, so whatever the
/// nesting depth no reported chunk contains or is contained by another.
pub fn chunks<'t>(tree: &'t Tree, label: &str) -> Vec<&'t Tree> {
    let mut candidates = Vec::new();
    innermost(tree, label, &mut Vec::new(), &mut candidates);
    // innermost() never yields nested candidates. Sorting and filtering by
    // path is the second pass of the chunk definition, kept to state it.
    candidates.sort_by(|a, b| a.path.cmp(&b.path));
    candidates.iter()
        .filter(|c| !candidates.iter().any(|other|
            other.path.len() < c.path.len() && c.path.starts_with(&other.path)))
        .map(|c| c.tree)
        .collect()
}

/// Noun-phrase chunks of a sentence tree.
pub fn np_chunks(tree: &Tree) -> Vec<&Tree> {
    chunks(tree, NOUN_PHRASE)
}

///////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{chunks, np_chunks};
    use crate::tree::Tree;
    use pretty_assertions::assert_eq;

    fn node(label: &str, children: Vec<Tree>) -> Tree {
        Tree::Node(label.to_string(), children)
    }

    fn word(label: &str, w: &str) -> Tree {
        node(label, vec![Tree::Leaf(w.to_string())])
    }

    fn spans(found: Vec<&Tree>) -> Vec<String> {
        found.iter().map(|t| t.leaves().join(" ")).collect()
    }

    #[test]
    fn flat_noun_phrases() {
        // holmes sat in the armchair
        let t = node("S", vec![
            node("NP", vec![word("N", "holmes")]),
            node("VP", vec![
                word("V", "sat"),
                node("PP", vec![
                    word("P", "in"),
                    node("NP", vec![word("Det", "the"), word("N", "armchair")]),
                ]),
            ]),
        ]);
        let found = np_chunks(&t);
        assert_eq!(spans(found.clone()), vec!["holmes", "the armchair"]);
        // chunks point into the tree, nothing is copied
        assert!(std::ptr::eq(found[0], &t.children()[0]));
    }

    #[test]
    fn attachment_keeps_inner_phrases() {
        // [a pipe [in [the home]]] : NP -> NP PP
        let t = node("S", vec![
            node("NP", vec![word("N", "holmes")]),
            node("VP", vec![
                word("V", "lit"),
                node("NP", vec![
                    node("NP", vec![word("Det", "a"), word("N", "pipe")]),
                    node("PP", vec![
                        word("P", "in"),
                        node("NP", vec![word("Det", "the"), word("N", "home")]),
                    ]),
                ]),
            ]),
        ]);
        assert_eq!(spans(np_chunks(&t)), vec!["holmes", "a pipe", "the home"]);
    }

    #[test]
    fn phrase_nested_through_other_labels() {
        // NP -> X -> NP : only the innermost one is a chunk
        let t = node("S", vec![
            node("NP", vec![
                word("Det", "the"),
                node("X", vec![node("Y", vec![node("NP", vec![word("N", "day")])])]),
            ]),
            word("V", "came"),
        ]);
        let found = np_chunks(&t);
        assert_eq!(spans(found.clone()), vec!["day"]);
        assert!(found.iter().all(|c| c.subtrees().iter().skip(1)
            .all(|d| d.label() != Some("NP"))));
    }

    #[test]
    fn no_chunks() {
        assert!(np_chunks(&node("S", vec![word("V", "sat")])).is_empty());
        assert!(np_chunks(&Tree::Leaf("NP".to_string())).is_empty());
        // the root itself may be the only chunk
        let np = node("NP", vec![word("N", "holmes")]);
        assert_eq!(spans(np_chunks(&np)), vec!["holmes"]);
    }

    #[test]
    fn other_labels() {
        let t = node("S", vec![
            node("PP", vec![word("P", "in"), node("PP", vec![word("P", "on")])]),
            node("PP", vec![word("P", "at")]),
        ]);
        assert_eq!(spans(chunks(&t, "PP")), vec!["on", "at"]);
    }
}
