#![deny(warnings)]

use std::fmt;

/// A derivation tree. Inner nodes carry the non-terminal that was expanded,
/// leaves carry the matched input word.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Tree {
    // "holmes"
    Leaf(String),
    // ("NP", [Node("N", [Leaf("holmes")])])
    Node(String, Vec<Tree>),
}

impl Tree {
    /// Non-terminal label, leaves have none.
    pub fn label(&self) -> Option<&str> {
        match self {
            Tree::Node(label, _) => Some(label),
            Tree::Leaf(_) => None,
        }
    }

    pub fn children(&self) -> &[Tree] {
        match self {
            Tree::Node(_, children) => children,
            Tree::Leaf(_) => &[],
        }
    }

    /// Words at the leaves, left to right.
    pub fn leaves(&self) -> Vec<&str> {
        let mut words = Vec::new();
        let mut pending = vec![self];
        while let Some(tree) = pending.pop() {
            match tree {
                Tree::Leaf(word) => words.push(word.as_str()),
                Tree::Node(_, children) => pending.extend(children.iter().rev()),
            }
        }
        words
    }

    /// Inner nodes in pre-order, the tree itself first.
    pub fn subtrees(&self) -> Vec<&Tree> {
        let mut nodes = Vec::new();
        let mut pending = vec![self];
        while let Some(tree) = pending.pop() {
            if let Tree::Node(_, children) = tree {
                nodes.push(tree);
                pending.extend(children.iter().rev());
            }
        }
        nodes
    }

    /// Multi-line outline of the tree, eg:
    /// ```text
    /// NP
    /// |-- Det
    /// |   `-- the
    /// `-- N
    ///     `-- armchair
    /// ```
    pub fn pretty(&self) -> String {
        let mut out = String::new();
        self.pretty_helper("", &mut out);
        out
    }

    fn name(&self) -> &str {
        match self {
            Tree::Node(label, _) => label,
            Tree::Leaf(word) => word,
        }
    }

    fn pretty_helper(&self, level: &str, out: &mut String) {
        if level.is_empty() {
            out.push_str(self.name());
            out.push('\n');
        }
        if let Some((last, rest)) = self.children().split_last() {
            for child in rest {
                out.push_str(&format!("{}|-- {}\n", level, child.name()));
                child.pretty_helper(&format!("{}|   ", level), out);
            }
            out.push_str(&format!("{}`-- {}\n", level, last.name()));
            last.pretty_helper(&format!("{}    ", level), out);
        }
    }
}

/// Bracketed rendering, eg: `(NP (Det the) (N armchair))`
impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Tree::Leaf(word) => write!(f, "{}", word),
            Tree::Node(label, children) => {
                write!(f, "({}", label)?;
                for child in children {
                    write!(f, " {}", child)?;
                }
                write!(f, ")")
            }
        }
    }
}

///////////////////////////////////////////////////////////////////////////////
