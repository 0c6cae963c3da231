//! Constituency tree data structures
//!
//! Trees are plain value structures: a terminal is a word, a nonterminal
//! owns an ordered sequence of children.  All traversal is top-down, so
//! nodes carry no parent links, and a `Clone` is a deep copy.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::label::{label_category, primary_category};

/// Categories of preterminals that dominate a null element rather
/// than a surface word.
pub const EMPTY_CATEGORIES: [&str; 2] = ["-NONE-", "-DFL-"];

/// Categories of preterminals counted as punctuation, empty elements
/// included.
pub const PUNCTUATION_CATEGORIES: [&str; 10] = [
    "''", ":", "#", ",", ".", "``", "-LRB-", "-RRB-", "-NONE-", "-DFL-",
];

static PARTIAL_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z]+-$").unwrap());

/// A node in a constituency tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tree {
    /// A leaf: a surface word or a null element.
    Terminal(String),
    /// An inner node with a label and an ordered sequence of children.
    Nonterminal { label: String, children: Vec<Tree> },
}

impl Tree {
    /// A terminal node for `word`.
    pub fn terminal(word: impl Into<String>) -> Self {
        Tree::Terminal(word.into())
    }

    /// A nonterminal node with `label` over `children`.
    pub fn nonterminal(label: impl Into<String>, children: Vec<Tree>) -> Self {
        Tree::Nonterminal {
            label: label.into(),
            children,
        }
    }

    /// A preterminal node: `label` dominating the single terminal `word`.
    pub fn preterminal(label: impl Into<String>, word: impl Into<String>) -> Self {
        Tree::nonterminal(label, vec![Tree::terminal(word)])
    }

    /// The label on the root of this subtree.  A terminal's label is
    /// its word.
    pub fn label(&self) -> &str {
        match self {
            Tree::Terminal(word) => word,
            Tree::Nonterminal { label, .. } => label,
        }
    }

    /// The children of this subtree; empty for terminals.
    pub fn children(&self) -> &[Tree] {
        match self {
            Tree::Terminal(_) => &[],
            Tree::Nonterminal { children, .. } => children,
        }
    }

    /// The category part of the root label.  A terminal's category is
    /// its word.
    pub fn category(&self) -> &str {
        match self {
            Tree::Terminal(word) => word,
            Tree::Nonterminal { label, .. } => label_category(label),
        }
    }

    /// The primary category of the root label.
    pub fn primary_category(&self) -> &str {
        match self {
            Tree::Terminal(word) => word,
            Tree::Nonterminal { label, .. } => primary_category(label),
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Tree::Terminal(_))
    }

    pub fn is_nonterminal(&self) -> bool {
        matches!(self, Tree::Nonterminal { .. })
    }

    /// True for a nonterminal with exactly one child, that child a
    /// terminal: a part-of-speech tag over a word.
    pub fn is_preterminal(&self) -> bool {
        match self {
            Tree::Nonterminal { children, .. } => {
                children.len() == 1 && children[0].is_terminal()
            }
            Tree::Terminal(_) => false,
        }
    }

    /// True for a nonterminal that is not a preterminal.  Covers the
    /// zero-child case.
    pub fn is_phrasal(&self) -> bool {
        self.is_nonterminal() && !self.is_preterminal()
    }

    /// True for a preterminal whose category is a punctuation or empty
    /// category.
    pub fn is_punctuation(&self) -> bool {
        self.is_preterminal() && PUNCTUATION_CATEGORIES.contains(&self.category())
    }

    /// True for a preterminal dominating a null element.
    pub fn is_empty(&self) -> bool {
        self.is_preterminal() && EMPTY_CATEGORIES.contains(&self.category())
    }

    /// True for a preterminal dominating a partial word: a word broken
    /// off with a trailing dash, the `MUMBLEx` token, or anything tagged
    /// `XX`.
    pub fn is_partial_word(&self) -> bool {
        if !self.is_preterminal() {
            return false;
        }
        let word = self.children()[0].label();
        PARTIAL_WORD.is_match(word) || word == "MUMBLEx" || self.category() == "XX"
    }

    /// The words at the leaves, left to right.
    pub fn terminals(&self) -> Terminals<'_> {
        Terminals { stack: vec![self] }
    }

    /// Every subtree, preorder.
    pub fn nodes(&self) -> Nodes<'_> {
        Nodes { stack: vec![self] }
    }

    /// The preterminal subtrees, left to right.
    pub fn preterminals(&self) -> Preterminals<'_> {
        Preterminals { stack: vec![self] }
    }

    /// A new tree with every nonterminal label mapped by `f`.  Terminal
    /// words are untouched.
    pub fn map_labels<F>(&self, f: &F) -> Tree
    where
        F: Fn(&str) -> String,
    {
        match self {
            Tree::Terminal(word) => Tree::Terminal(word.clone()),
            Tree::Nonterminal { label, children } => Tree::Nonterminal {
                label: f(label),
                children: children.iter().map(|c| c.map_labels(f)).collect(),
            },
        }
    }
}

/// Iterator over leaf words, left to right.
pub struct Terminals<'a> {
    stack: Vec<&'a Tree>,
}

impl<'a> Iterator for Terminals<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            match node {
                Tree::Terminal(word) => return Some(word),
                Tree::Nonterminal { children, .. } => {
                    self.stack.extend(children.iter().rev());
                }
            }
        }
        None
    }
}

/// Preorder iterator over every subtree.
pub struct Nodes<'a> {
    stack: Vec<&'a Tree>,
}

impl<'a> Iterator for Nodes<'a> {
    type Item = &'a Tree;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children().iter().rev());
        Some(node)
    }
}

/// Iterator over preterminal subtrees, left to right.
pub struct Preterminals<'a> {
    stack: Vec<&'a Tree>,
}

impl<'a> Iterator for Preterminals<'a> {
    type Item = &'a Tree;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            if node.is_preterminal() {
                return Some(node);
            }
            self.stack.extend(node.children().iter().rev());
        }
        None
    }
}

impl fmt::Display for Tree {
    /// Renders bracket notation: `(LABEL child child ...)`, terminals as
    /// bare words.  Round-trips through [`crate::ptb::parse_trees`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tree::Terminal(word) => f.write_str(word),
            Tree::Nonterminal { label, children } => {
                write!(f, "({label}")?;
                for child in children {
                    write!(f, " {child}")?;
                }
                f.write_str(")")
            }
        }
    }
}
