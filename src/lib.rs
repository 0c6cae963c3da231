//! Treescore: Penn Treebank reading and constituent scoring
//!
//! A toolkit for parsing PTB bracket notation into constituency trees,
//! rewriting them (pruning, unary collapse, binarization), and scoring
//! parses against gold trees EVALB-style, down to word-level label
//! coverage.

// Core modules (leaf-first)
pub mod label; // Node label micro-grammar: category, function tags, indices
pub mod tree; // Tree data structure and node predicates
pub mod ptb; // Bracket notation reader
pub mod transform; // Pruning, unary collapse, binarization
pub mod constituents; // Labeled span extraction
pub mod eval; // Per-label precision/recall/F-score accumulation

// Re-exports for convenience
pub use constituents::{Constituent, SpanConfig, constituents};
pub use eval::{
    CorpusReport, CountTable, Counts, EvalConfig, EvalError, ParseEval, Scores, TableOptions,
    evaluate_corpus,
};
pub use label::{
    FunctionTags, ParsedLabel, label_category, label_noindices, parse_label, primary_category,
};
pub use ptb::{MalformedTreeError, parse_trees};
pub use transform::{Binarize, Pruner, Relabel};
pub use tree::Tree;
