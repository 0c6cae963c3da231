//! Tree rewriting
//!
//! Pure transformations producing derived trees: pruning of empty,
//! partial-word and punctuation preterminals, unary collapse, left/right
//! binarization with synthetic composite labels, and label remapping.
//! The input tree is never modified.

use crate::label::{label_category, label_noindices};
use crate::tree::Tree;

/// Direction of binarization for nodes with more than two children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binarize {
    /// Last child kept alone, the rest cascaded leftward.
    Left,
    /// First child kept alone, the rest cascaded rightward.
    Right,
}

/// Label remapping applied to every surviving nonterminal.
#[derive(Debug, Clone, Copy, Default)]
pub enum Relabel {
    /// Keep labels as they are.
    #[default]
    Identity,
    /// Strip function tags and indices down to the category.
    Category,
    /// Strip a trailing coreference or equality index.
    NoIndices,
    /// Arbitrary mapping.
    Custom(fn(&str) -> String),
}

impl Relabel {
    fn apply(&self, label: &str) -> String {
        match self {
            Relabel::Identity => label.to_string(),
            Relabel::Category => label_category(label).to_string(),
            Relabel::NoIndices => label_noindices(label).to_string(),
            Relabel::Custom(f) => f(label),
        }
    }
}

/// Configuration for [`Pruner::prune`].  All flags default to off and the
/// relabeling to identity, which makes the default pruner a deep copy.
#[derive(Debug, Clone, Copy, Default)]
pub struct Pruner {
    pub remove_empty: bool,
    pub remove_partial: bool,
    pub remove_punctuation: bool,
    pub collapse_unary: bool,
    pub binarize: Option<Binarize>,
    pub relabel: Relabel,
}

impl Pruner {
    /// Returns a transformed copy of `tree`, or `None` if the whole tree
    /// prunes away.
    ///
    /// Children are pruned first; the node itself is then classified
    /// against the pruned children.  A phrasal node left without children
    /// is dropped only under `remove_empty`.
    pub fn prune(&self, tree: &Tree) -> Option<Tree> {
        if tree.is_phrasal() {
            let children: Vec<Tree> = tree
                .children()
                .iter()
                .filter_map(|child| self.prune(child))
                .collect();
            if children.is_empty() && self.remove_empty {
                return None;
            }
            let label = self.relabel.apply(tree.label());
            if self.collapse_unary && children.len() == 1 {
                return Some(Tree::nonterminal(label, children[0].children().to_vec()));
            }
            if let Some(direction) = self.binarize {
                if children.len() > 2 {
                    let children = match direction {
                        Binarize::Right => {
                            vec![children[0].clone(), right_cascade(&children[1..])]
                        }
                        Binarize::Left => {
                            let split = children.len() - 1;
                            vec![left_cascade(&children[..split]), children[split].clone()]
                        }
                    };
                    return Some(Tree::nonterminal(label, children));
                }
            }
            Some(Tree::nonterminal(label, children))
        } else if tree.is_preterminal() {
            if self.remove_empty && tree.is_empty() {
                return None;
            }
            if self.remove_partial && tree.is_partial_word() {
                return None;
            }
            if self.remove_punctuation && tree.is_punctuation() {
                return None;
            }
            Some(Tree::nonterminal(
                self.relabel.apply(tree.label()),
                tree.children().to_vec(),
            ))
        } else {
            Some(tree.clone())
        }
    }
}

/// The `.`-joined labels of the nodes a synthetic binarization node groups.
fn synthetic_label(nodes: &[Tree]) -> String {
    nodes
        .iter()
        .map(Tree::label)
        .collect::<Vec<_>>()
        .join(".")
}

fn left_cascade(nodes: &[Tree]) -> Tree {
    let label = synthetic_label(nodes);
    if nodes.len() <= 2 {
        Tree::nonterminal(label, nodes.to_vec())
    } else {
        let split = nodes.len() - 1;
        Tree::nonterminal(
            label,
            vec![left_cascade(&nodes[..split]), nodes[split].clone()],
        )
    }
}

fn right_cascade(nodes: &[Tree]) -> Tree {
    let label = synthetic_label(nodes);
    if nodes.len() <= 2 {
        Tree::nonterminal(label, nodes.to_vec())
    } else {
        Tree::nonterminal(
            label,
            vec![nodes[0].clone(), right_cascade(&nodes[1..])],
        )
    }
}
