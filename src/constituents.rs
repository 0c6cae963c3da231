//! Labeled constituent spans
//!
//! Extracts (label, left, right) span tuples from a tree in a single
//! left-to-right pass over terminal positions.  Spans are half-open and
//! collected as a set, so identical constituents collapse.

use rustc_hash::FxHashSet;

use crate::tree::Tree;

/// A labeled span over terminal positions, `left..right`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Constituent {
    pub label: String,
    pub left: usize,
    pub right: usize,
}

/// Which nodes contribute constituents and how punctuation counts
/// toward positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpanConfig {
    /// Include a constituent for the root node itself.  When off,
    /// extraction runs over each top-level child, with positions
    /// chaining left to right.
    pub include_root: bool,
    /// Include constituents for preterminal nodes.
    pub include_preterminals: bool,
    /// Skip punctuation preterminals entirely: they contribute no
    /// constituent and no terminal position.
    pub ignore_punctuation: bool,
}

impl Default for SpanConfig {
    fn default() -> Self {
        Self {
            include_root: false,
            include_preterminals: false,
            ignore_punctuation: true,
        }
    }
}

/// Collects the constituents of `tree` under `config`.
///
/// A bare terminal never yields a constituent; a phrasal node always
/// does, including zero-width spans for nonterminals left without
/// terminals.
pub fn constituents(tree: &Tree, config: SpanConfig) -> FxHashSet<Constituent> {
    let mut spans = FxHashSet::default();
    if config.include_root {
        visit(tree, 0, config, &mut spans);
    } else {
        let mut right = 0;
        for child in tree.children() {
            right = visit(child, right, config, &mut spans);
        }
    }
    spans
}

/// Walks `node` starting at terminal position `left`; returns the
/// position after it.
fn visit(node: &Tree, left: usize, config: SpanConfig, spans: &mut FxHashSet<Constituent>) -> usize {
    if config.ignore_punctuation && node.is_punctuation() {
        return left;
    }
    match node {
        Tree::Terminal(_) => left + 1,
        Tree::Nonterminal { label, children } => {
            let mut right = left;
            for child in children {
                right = visit(child, right, config, spans);
            }
            if config.include_preterminals || node.is_phrasal() {
                spans.insert(Constituent {
                    label: label.clone(),
                    left,
                    right,
                });
            }
            right
        }
    }
}
