//! Constituent-level parse evaluation
//!
//! EVALB-style scoring: per-label counts of parse, gold and exactly
//! matching constituents accumulated over many tree pairs, aggregated
//! into precision/recall/F-score, optionally down to word-level label
//! coverage.  Scores always come from one aggregated count triple, never
//! from averaging per-label ratios.

use std::collections::BTreeSet;
use std::fmt;

use rustc_hash::{FxHashMap, FxHashSet};
use thiserror::Error;

use crate::constituents::{SpanConfig, constituents};
use crate::tree::Tree;

/// Keeps all-zero counts scoring 0.0 instead of dividing by zero.
const EPSILON: f64 = 1e-100;

/// Error raised by evaluation updates and score queries.
#[derive(Debug, Error)]
pub enum EvalError {
    #[error(
        "parse and gold trees have different terminal yields:\n parse = {parse}\n gold = {gold}"
    )]
    YieldMismatch { parse: String, gold: String },

    #[error("parse and gold tree sequences have different lengths: {parse} != {gold}")]
    LengthMismatch { parse: usize, gold: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),
}

/// Fixed evaluation configuration, set at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvalConfig {
    /// Also track word-level label coverage counts.
    pub word_coverage: bool,
    pub include_root: bool,
    pub include_preterminals: bool,
    pub ignore_punctuation: bool,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            word_coverage: false,
            include_root: true,
            include_preterminals: false,
            ignore_punctuation: true,
        }
    }
}

/// Per-label parse/gold/correct count maps.
#[derive(Debug, Clone, Default)]
pub struct CountTable {
    parse: FxHashMap<String, u64>,
    gold: FxHashMap<String, u64>,
    correct: FxHashMap<String, u64>,
}

impl CountTable {
    pub fn parse_count(&self, label: &str) -> u64 {
        self.parse.get(label).copied().unwrap_or(0)
    }

    pub fn gold_count(&self, label: &str) -> u64 {
        self.gold.get(label).copied().unwrap_or(0)
    }

    pub fn correct_count(&self, label: &str) -> u64 {
        self.correct.get(label).copied().unwrap_or(0)
    }

    /// Every label observed in any of the three maps, sorted.
    pub fn labels(&self) -> BTreeSet<&str> {
        self.parse
            .keys()
            .chain(self.gold.keys())
            .chain(self.correct.keys())
            .map(String::as_str)
            .collect()
    }

    /// Sums counts over `labels`, or over all observed labels if `None`.
    pub fn aggregate(&self, labels: Option<&[&str]>) -> Counts {
        match labels {
            Some(labels) => Counts {
                parse: labels.iter().map(|l| self.parse_count(l)).sum(),
                gold: labels.iter().map(|l| self.gold_count(l)).sum(),
                correct: labels.iter().map(|l| self.correct_count(l)).sum(),
            },
            None => Counts {
                parse: self.parse.values().sum(),
                gold: self.gold.values().sum(),
                correct: self.correct.values().sum(),
            },
        }
    }

    /// Adds `other`'s counts into this table, label by label.
    pub fn merge(&mut self, other: &CountTable) {
        for (label, n) in &other.parse {
            *self.parse.entry(label.clone()).or_default() += n;
        }
        for (label, n) in &other.gold {
            *self.gold.entry(label.clone()).or_default() += n;
        }
        for (label, n) in &other.correct {
            *self.correct.entry(label.clone()).or_default() += n;
        }
    }

    fn clear(&mut self) {
        self.parse.clear();
        self.gold.clear();
        self.correct.clear();
    }
}

/// An aggregated parse/gold/correct count triple.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counts {
    pub parse: u64,
    pub gold: u64,
    pub correct: u64,
}

impl Counts {
    /// Precision, recall and F-score for this triple.  All-zero counts
    /// score 0.0 rather than erroring.
    pub fn scores(&self) -> Scores {
        let parse = self.parse as f64;
        let gold = self.gold as f64;
        let correct = self.correct as f64;
        Scores {
            precision: correct / (parse + EPSILON),
            recall: correct / (gold + EPSILON),
            fscore: 2.0 * correct / (parse + gold + 2.0 * EPSILON),
        }
    }
}

/// Precision/recall/F-score ratios in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scores {
    pub precision: f64,
    pub recall: f64,
    pub fscore: f64,
}

/// Accumulates evaluation statistics over (parse, gold) tree pairs.
#[derive(Debug, Clone)]
pub struct ParseEval {
    config: EvalConfig,
    counts: CountTable,
    wcounts: Option<CountTable>,
}

impl ParseEval {
    pub fn new(config: EvalConfig) -> Self {
        Self {
            config,
            counts: CountTable::default(),
            wcounts: config.word_coverage.then(CountTable::default),
        }
    }

    pub fn config(&self) -> EvalConfig {
        self.config
    }

    /// Zeros all counters.
    pub fn reset(&mut self) {
        self.counts.clear();
        if let Some(wcounts) = &mut self.wcounts {
            wcounts.clear();
        }
    }

    fn span_config(&self) -> SpanConfig {
        SpanConfig {
            include_root: self.config.include_root,
            include_preterminals: self.config.include_preterminals,
            ignore_punctuation: self.config.ignore_punctuation,
        }
    }

    /// Updates counters from the overlap between `parse` and `gold`.
    ///
    /// The trees must have identical terminal yields; on mismatch the
    /// error carries both trees and no counter has been touched.
    pub fn update_pair(&mut self, parse: &Tree, gold: &Tree) -> Result<(), EvalError> {
        if !parse.terminals().eq(gold.terminals()) {
            return Err(EvalError::YieldMismatch {
                parse: parse.to_string(),
                gold: gold.to_string(),
            });
        }

        let parse_spans = constituents(parse, self.span_config());
        let gold_spans = constituents(gold, self.span_config());

        for c in &parse_spans {
            *self.counts.parse.entry(c.label.clone()).or_default() += 1;
        }
        for c in &gold_spans {
            *self.counts.gold.entry(c.label.clone()).or_default() += 1;
        }
        for c in parse_spans.intersection(&gold_spans) {
            *self.counts.correct.entry(c.label.clone()).or_default() += 1;
        }

        if let Some(wcounts) = &mut self.wcounts {
            let parse_positions: FxHashSet<(&str, usize)> = parse_spans
                .iter()
                .flat_map(|c| (c.left..c.right).map(move |pos| (c.label.as_str(), pos)))
                .collect();
            let gold_positions: FxHashSet<(&str, usize)> = gold_spans
                .iter()
                .flat_map(|c| (c.left..c.right).map(move |pos| (c.label.as_str(), pos)))
                .collect();

            for (label, _) in &parse_positions {
                *wcounts.parse.entry((*label).to_string()).or_default() += 1;
            }
            for (label, _) in &gold_positions {
                *wcounts.gold.entry((*label).to_string()).or_default() += 1;
            }
            for (label, _) in parse_positions.intersection(&gold_positions) {
                *wcounts.correct.entry((*label).to_string()).or_default() += 1;
            }
        }

        Ok(())
    }

    /// Updates counters pairwise over two equal-length sequences.
    ///
    /// The length check runs before any update, so a mismatch leaves the
    /// accumulator untouched.
    pub fn batch_update(&mut self, parse: &[Tree], gold: &[Tree]) -> Result<(), EvalError> {
        if parse.len() != gold.len() {
            return Err(EvalError::LengthMismatch {
                parse: parse.len(),
                gold: gold.len(),
            });
        }
        for (p, g) in parse.iter().zip(gold) {
            self.update_pair(p, g)?;
        }
        Ok(())
    }

    /// Adds another accumulator's counts into this one.  Both must share
    /// a configuration; merging is associative and commutative, so
    /// independent shards combine in any order.
    pub fn merge(&mut self, other: &ParseEval) -> Result<(), EvalError> {
        if self.config != other.config {
            return Err(EvalError::InvalidConfiguration(
                "cannot merge evaluators with different configurations",
            ));
        }
        self.counts.merge(&other.counts);
        if let (Some(wcounts), Some(other_wcounts)) = (&mut self.wcounts, &other.wcounts) {
            wcounts.merge(other_wcounts);
        }
        Ok(())
    }

    /// The constituent-level count table.
    pub fn counts(&self) -> &CountTable {
        &self.counts
    }

    /// The word-level count table; errors unless word coverage was
    /// enabled at construction.
    pub fn wcounts(&self) -> Result<&CountTable, EvalError> {
        self.wcounts.as_ref().ok_or(EvalError::InvalidConfiguration(
            "word counts requested from an evaluator built without word coverage",
        ))
    }

    /// Scores for `labels`, or for all labels if `None`.
    pub fn scores(&self, labels: Option<&[&str]>) -> Scores {
        self.counts.aggregate(labels).scores()
    }

    /// Word-level scores for `labels`, or for all labels if `None`.
    pub fn wscores(&self, labels: Option<&[&str]>) -> Result<Scores, EvalError> {
        Ok(self.wcounts()?.aggregate(labels).scores())
    }

    pub fn fscore(&self, labels: Option<&[&str]>) -> f64 {
        self.scores(labels).fscore
    }

    pub fn wfscore(&self, labels: Option<&[&str]>) -> Result<f64, EvalError> {
        Ok(self.wscores(labels)?.fscore)
    }

    /// One-line summary: `"<label-set> P: <p>, R: <r>, F: <f>"` with
    /// 4 significant digits, `words ` inserted for word-level scores.
    pub fn summary(&self, labels: Option<&[&str]>, word_scores: bool) -> Result<String, EvalError> {
        let mut prefix = match labels {
            Some(labels) => format!("{} ", labels.join("|")),
            None => String::new(),
        };
        if word_scores {
            prefix.push_str("words ");
        }
        let s = if word_scores {
            self.wscores(labels)?
        } else {
            self.scores(labels)
        };
        Ok(format!(
            "{prefix}P: {}, R: {}, F: {}",
            format_sig(s.precision),
            format_sig(s.recall),
            format_sig(s.fscore)
        ))
    }

    /// Renders a table of results by label; see [`TableOptions`].
    pub fn table(&self, options: &TableOptions) -> String {
        let mut out = String::new();

        out.push_str("label");
        for column in ["nparse", "ngold", "ncorrect", "precision", "recall", "fscore"] {
            out.push_str(&options.colsep);
            out.push_str(column);
        }
        if self.wcounts.is_some() {
            for column in [
                "word nparse",
                "word ngold",
                "word ncorrect",
                "word precision",
                "word recall",
                "word fscore",
            ] {
                out.push_str(&options.colsep);
                out.push_str(column);
            }
        }
        out.push_str(&options.rowsep);

        let write_row = |out: &mut String, row_label: &str, labels: Option<&[&str]>| {
            out.push_str(row_label);
            push_cells(out, &options.colsep, &self.counts, labels);
            if let Some(wcounts) = &self.wcounts {
                push_cells(out, &options.colsep, wcounts, labels);
            }
            out.push_str(&options.rowsep);
        };

        if options.individual {
            match &options.labels {
                Some(labels) => {
                    for label in labels {
                        write_row(&mut out, label, Some(&[label.as_str()]));
                    }
                }
                None => {
                    for label in self.observed_labels() {
                        write_row(&mut out, &label, Some(&[label.as_str()]));
                    }
                }
            }
        }

        for group in &options.label_groups {
            let refs: Vec<&str> = group.iter().map(String::as_str).collect();
            write_row(&mut out, &refs.join("|"), Some(&refs));
        }

        match &options.labels {
            Some(labels) if options.summary => {
                let refs: Vec<&str> = labels.iter().map(String::as_str).collect();
                write_row(&mut out, &refs.join("|"), Some(&refs));
            }
            None if options.summary => {
                write_row(&mut out, "All labels", None);
            }
            _ => {}
        }

        out
    }

    /// Labels observed anywhere, constituent or word level, sorted.
    fn observed_labels(&self) -> Vec<String> {
        let mut labels = self.counts.labels();
        if let Some(wcounts) = &self.wcounts {
            labels.extend(wcounts.labels());
        }
        labels.into_iter().map(str::to_string).collect()
    }
}

fn push_cells(out: &mut String, colsep: &str, table: &CountTable, labels: Option<&[&str]>) {
    let counts = table.aggregate(labels);
    let scores = counts.scores();
    for cell in [
        counts.parse.to_string(),
        counts.gold.to_string(),
        counts.correct.to_string(),
        format_sig(scores.precision),
        format_sig(scores.recall),
        format_sig(scores.fscore),
    ] {
        out.push_str(colsep);
        out.push_str(&cell);
    }
}

impl fmt::Display for ParseEval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // All-labels constituent summary never errors.
        match self.summary(None, false) {
            Ok(s) => f.write_str(&s),
            Err(_) => Err(fmt::Error),
        }
    }
}

/// Options for [`ParseEval::table`].
#[derive(Debug, Clone)]
pub struct TableOptions {
    pub colsep: String,
    pub rowsep: String,
    /// Restrict individual rows and the summary to these labels; all
    /// observed labels when `None`.
    pub labels: Option<Vec<String>>,
    /// Extra rows, one per label group, each aggregated over the group.
    pub label_groups: Vec<Vec<String>>,
    /// Emit a row per individual label.
    pub individual: bool,
    /// Emit the final summary row.
    pub summary: bool,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            colsep: ",".to_string(),
            rowsep: "\n".to_string(),
            labels: None,
            label_groups: Vec::new(),
            individual: true,
            summary: true,
        }
    }
}

/// Corpus-level report for external model selection: the overall F-score
/// and the F-score over a caller-chosen label subset, with the full
/// accumulator for anything finer-grained.
#[derive(Debug, Clone)]
pub struct CorpusReport {
    pub fscore: f64,
    pub focus_fscore: f64,
    pub eval: ParseEval,
}

/// Evaluates equal-length parse/gold sequences with word coverage on,
/// reporting overall and `focus_labels` F-scores.
pub fn evaluate_corpus(
    parse: &[Tree],
    gold: &[Tree],
    focus_labels: &[&str],
) -> Result<CorpusReport, EvalError> {
    let mut eval = ParseEval::new(EvalConfig {
        word_coverage: true,
        ..EvalConfig::default()
    });
    eval.batch_update(parse, gold)?;
    let fscore = eval.fscore(None);
    let focus_fscore = eval.fscore(Some(focus_labels));
    Ok(CorpusReport {
        fscore,
        focus_fscore,
        eval,
    })
}

/// Formats a ratio to 4 significant digits, trimming trailing zeros but
/// keeping at least one digit after the point.
fn format_sig(x: f64) -> String {
    if x == 0.0 {
        return "0.0".to_string();
    }
    let decimals = (3 - x.abs().log10().floor() as i32).max(1) as usize;
    let formatted = format!("{x:.decimals$}");
    let trimmed = formatted.trim_end_matches('0');
    if trimmed.ends_with('.') {
        format!("{trimmed}0")
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ptb::parse_trees;

    // Switchboard-style fixture: three gold sentences and the same
    // sentences as parsed, with one root mislabeled S1, a moved PRN
    // boundary, and the third sentence parsed exactly right.
    const GOLD: &str = "(S (EDITED (NP (EX there)) (, ,))
                 (NP (EX there))
                 (VP (BES 's) (NP (DT no) (NN way))) (. .))
              (S (CC and) (, ,) (INTJ (UH uh))
                 (PRN (, ,)
                      (S (NP (PRP you)) (VP (VBP know))) (, ,))
                 (NP (DT all)))
              (S (EDITED (EDITED (EDITED (S (NP (EX There)) (VP (BES 's))) (, ,))
                                            (NP (EX there)) (, ,)) (NP (DT th-)) (, ,))
                 (NP (DT this) (NN topic))
                 (VP (VBZ is) (ADJP (ADVP (RB kind) (RB of)) (TYPO (JJ mute))) (. .)
                 (INTJ (UH Uh))))";

    const PARSE: &str = "(S (NP (EX there))
                 (, ,)
                 (NP (EX there))
                 (VP (BES 's) (NP (DT no) (NN way))) (. .))
              (S1 (CC and) (, ,) (INTJ (UH uh)) (, ,)
                 (PRN (S (NP (PRP you)) (VP (VBP know))))
                 (, ,)
                 (NP (DT all)))
              (S (EDITED (EDITED (EDITED (S (NP (EX There)) (VP (BES 's))) (, ,))
                                            (NP (EX there)) (, ,)) (NP (DT th-)) (, ,))
                 (NP (DT this) (NN topic))
                 (VP (VBZ is) (ADJP (ADVP (RB kind) (RB of)) (TYPO (JJ mute))) (. .)
                 (INTJ (UH Uh))))";

    fn fixture() -> (Vec<Tree>, Vec<Tree>) {
        (parse_trees(PARSE).unwrap(), parse_trees(GOLD).unwrap())
    }

    fn words_eval() -> ParseEval {
        let (parse, gold) = fixture();
        let mut eval = ParseEval::new(EvalConfig {
            word_coverage: true,
            ..EvalConfig::default()
        });
        eval.batch_update(&parse, &gold).unwrap();
        eval
    }

    #[test]
    fn test_label_counts() {
        let eval = words_eval();
        let counts = eval.counts();
        assert_eq!(counts.parse_count("EDITED"), 3);
        assert_eq!(counts.parse_count("NP"), 9);
        assert_eq!(counts.parse_count("S1"), 1);
        assert_eq!(counts.gold_count("S1"), 0);
        assert_eq!(counts.correct_count("S"), 4);
        assert_eq!(counts.gold_count("S"), 5);

        let wcounts = eval.wcounts().unwrap();
        assert_eq!(wcounts.gold_count("EDITED"), 5);
        assert_eq!(wcounts.parse_count("EDITED"), 4);
    }

    #[test]
    fn test_self_evaluation_is_perfect() {
        let (_, gold) = fixture();
        let mut eval = ParseEval::new(EvalConfig::default());
        eval.batch_update(&gold, &gold).unwrap();
        for label in eval.counts().labels() {
            let counts = eval.counts().aggregate(Some(&[label]));
            assert_eq!(counts.parse, counts.gold);
            assert_eq!(counts.parse, counts.correct);
            let scores = counts.scores();
            assert!((scores.precision - 1.0).abs() < 1e-9);
            assert!((scores.recall - 1.0).abs() < 1e-9);
            assert!((scores.fscore - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_zero_updates_score_zero() {
        let eval = ParseEval::new(EvalConfig::default());
        let scores = eval.scores(None);
        assert_eq!(scores.precision, 0.0);
        assert_eq!(scores.recall, 0.0);
        assert_eq!(scores.fscore, 0.0);
    }

    #[test]
    fn test_yield_mismatch_leaves_counters_untouched() {
        let parse = parse_trees("(S (NP (DT a) (NN cat)))").unwrap();
        let gold = parse_trees("(S (NP (DT a) (NN dog)))").unwrap();
        let mut eval = ParseEval::new(EvalConfig::default());
        let err = eval.update_pair(&parse[0], &gold[0]).unwrap_err();
        assert!(matches!(err, EvalError::YieldMismatch { .. }));
        assert_eq!(eval.counts().aggregate(None), Counts::default());
    }

    #[test]
    fn test_yield_length_mismatch() {
        let parse = parse_trees("(S (NP (DT a) (NN dog) (NN dog)))").unwrap();
        let gold = parse_trees("(S (NP (DT a) (NN dog)))").unwrap();
        let mut eval = ParseEval::new(EvalConfig::default());
        assert!(eval.update_pair(&parse[0], &gold[0]).is_err());
    }

    #[test]
    fn test_batch_length_mismatch() {
        let (parse, gold) = fixture();
        let mut eval = ParseEval::new(EvalConfig::default());
        let err = eval.batch_update(&parse[..2], &gold).unwrap_err();
        assert!(matches!(
            err,
            EvalError::LengthMismatch { parse: 2, gold: 3 }
        ));
        assert_eq!(eval.counts().aggregate(None), Counts::default());
    }

    #[test]
    fn test_merge_matches_single_accumulator() {
        let (parse, gold) = fixture();
        let config = EvalConfig {
            word_coverage: true,
            ..EvalConfig::default()
        };

        let mut whole = ParseEval::new(config);
        whole.batch_update(&parse, &gold).unwrap();

        let mut first = ParseEval::new(config);
        first.batch_update(&parse[..1], &gold[..1]).unwrap();
        let mut rest = ParseEval::new(config);
        rest.batch_update(&parse[1..], &gold[1..]).unwrap();
        first.merge(&rest).unwrap();

        for labels in [None, Some(["EDITED"].as_slice()), Some(["S", "NP"].as_slice())] {
            assert_eq!(
                whole.counts().aggregate(labels),
                first.counts().aggregate(labels)
            );
            assert_eq!(
                whole.wcounts().unwrap().aggregate(labels),
                first.wcounts().unwrap().aggregate(labels)
            );
        }
    }

    #[test]
    fn test_merge_config_mismatch() {
        let mut a = ParseEval::new(EvalConfig::default());
        let b = ParseEval::new(EvalConfig {
            include_root: false,
            ..EvalConfig::default()
        });
        assert!(a.merge(&b).is_err());
    }

    #[test]
    fn test_wcounts_require_word_coverage() {
        let eval = ParseEval::new(EvalConfig::default());
        assert!(matches!(
            eval.wcounts(),
            Err(EvalError::InvalidConfiguration(_))
        ));
        assert!(eval.wfscore(None).is_err());
        assert!(eval.summary(None, true).is_err());
    }

    #[test]
    fn test_reset() {
        let mut eval = words_eval();
        eval.reset();
        assert_eq!(eval.counts().aggregate(None), Counts::default());
        assert_eq!(eval.wcounts().unwrap().aggregate(None), Counts::default());
    }

    #[test]
    fn test_summary_format() {
        let (_, gold) = fixture();
        let mut eval = ParseEval::new(EvalConfig::default());
        eval.batch_update(&gold, &gold).unwrap();
        assert_eq!(eval.summary(None, false).unwrap(), "P: 1.0, R: 1.0, F: 1.0");
        assert_eq!(
            eval.summary(Some(&["EDITED", "PRN"]), false).unwrap(),
            "EDITED|PRN P: 1.0, R: 1.0, F: 1.0"
        );
        assert_eq!(eval.to_string(), "P: 1.0, R: 1.0, F: 1.0");
    }

    #[test]
    fn test_summary_word_prefix() {
        let eval = words_eval();
        let summary = eval.summary(Some(&["EDITED"]), true).unwrap();
        assert!(summary.starts_with("EDITED words P: "));
    }

    #[test]
    fn test_table_layout() {
        let eval = words_eval();
        let table = eval.table(&TableOptions {
            label_groups: vec![vec![
                "EDITED".to_string(),
                "PRN".to_string(),
                "UH".to_string(),
            ]],
            ..TableOptions::default()
        });
        let mut lines = table.lines();
        let header = lines.next().unwrap();
        assert_eq!(
            header,
            "label,nparse,ngold,ncorrect,precision,recall,fscore,\
             word nparse,word ngold,word ncorrect,word precision,word recall,word fscore"
        );
        let lines: Vec<_> = lines.collect();
        // Individual rows sorted, then the group row, then the summary.
        assert!(lines.iter().any(|l| l.starts_with("EDITED,3,4,3,")));
        assert!(lines[lines.len() - 2].starts_with("EDITED|PRN|UH,"));
        assert!(lines[lines.len() - 1].starts_with("All labels,"));
        // Every row has the word-level columns.
        for line in &lines {
            assert_eq!(line.matches(',').count(), 12, "row: {line}");
        }
    }

    #[test]
    fn test_table_without_word_coverage() {
        let (parse, gold) = fixture();
        let mut eval = ParseEval::new(EvalConfig::default());
        eval.batch_update(&parse, &gold).unwrap();
        let table = eval.table(&TableOptions::default());
        let header = table.lines().next().unwrap();
        assert_eq!(header, "label,nparse,ngold,ncorrect,precision,recall,fscore");
    }

    #[test]
    fn test_evaluate_corpus() {
        let (parse, gold) = fixture();
        let report = evaluate_corpus(&parse, &gold, &["EDITED"]).unwrap();
        assert!(report.fscore > 0.0 && report.fscore < 1.0);
        // EDITED: 3 parsed, 4 gold, 3 correct.
        let expected = 2.0 * 3.0 / (3.0 + 4.0);
        assert!((report.focus_fscore - expected).abs() < 1e-9);
        assert_eq!(report.eval.counts().correct_count("EDITED"), 3);
    }

    #[test]
    fn test_format_sig() {
        assert_eq!(format_sig(0.0), "0.0");
        assert_eq!(format_sig(1.0), "1.0");
        assert_eq!(format_sig(0.5), "0.5");
        assert_eq!(format_sig(0.8571428), "0.8571");
        assert_eq!(format_sig(0.875), "0.875");
        assert_eq!(format_sig(0.0123456), "0.01235");
    }
}
