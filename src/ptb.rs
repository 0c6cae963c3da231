//! Penn Treebank bracket notation reader
//!
//! Parses PTB-format text into [`Tree`] values using a pest grammar.
//! Input is any number of whitespace-separated bracketed trees, optionally
//! preceded by a banner of `*x* ... *x*` lines, which is skipped.

use once_cell::sync::Lazy;
use pest::Parser;
use pest::iterators::Pair;
use pest_derive::Parser;
use regex::Regex;
use thiserror::Error;

use crate::tree::Tree;

#[derive(Parser)]
#[grammar = "ptb.pest"]
struct PtbParser;

/// Error for bracket text that cannot be parsed: a position where neither
/// a token nor `(`/`)` was legal.  Carries the pest error with its
/// line/column rendering.
#[derive(Debug, Error)]
#[error("malformed tree: {0}")]
pub struct MalformedTreeError(#[from] pest::error::Error<Rule>);

static BANNER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:\*x\*.*\*x\*[ \t]*\r?\n)*").unwrap());

/// Parses all trees in `text`, in order.
///
/// Leading banner lines of the form `*x* ... *x*` are skipped.  Returns
/// an empty vector for blank input.
pub fn parse_trees(text: &str) -> Result<Vec<Tree>, MalformedTreeError> {
    let body = match BANNER.find(text) {
        Some(m) => &text[m.end()..],
        None => text,
    };

    let mut pairs = PtbParser::parse(Rule::treebank, body)?;
    let treebank = pairs.next().unwrap();

    let mut trees = Vec::new();
    for pair in treebank.into_inner() {
        match pair.as_rule() {
            Rule::nonterminal | Rule::terminal => trees.push(build_tree(pair)),
            Rule::EOI => {}
            _ => {}
        }
    }
    Ok(trees)
}

fn build_tree(pair: Pair<Rule>) -> Tree {
    match pair.as_rule() {
        Rule::terminal => Tree::terminal(pair.as_str()),
        Rule::nonterminal => {
            let mut inner = pair.into_inner();
            let label = inner.next().unwrap().as_str();
            let children = inner.map(build_tree).collect();
            Tree::nonterminal(label, children)
        }
        rule => unreachable!("unexpected rule in tree position: {rule:?}"),
    }
}
