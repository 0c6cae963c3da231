//! Node label micro-grammar
//!
//! Penn Treebank node labels pack several annotations into one token:
//! a category, dash-separated function tags, a `-N` coreference index,
//! and an `=N` equality index (e.g. `NP-SBJ-1`, `S-TPC=2`).  This module
//! decomposes labels into those parts and strips the ones callers want
//! to ignore.

use bitflags::bitflags;

bitflags! {
    /// Closed vocabulary of PTB function tags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct FunctionTags: u32 {
        const ADV = 1 << 0;
        const NOM = 1 << 1;
        const DTV = 1 << 2;
        const LGS = 1 << 3;
        const PRD = 1 << 4;
        const PUT = 1 << 5;
        const SBJ = 1 << 6;
        const TPC = 1 << 7;
        const VOC = 1 << 8;
        const BNF = 1 << 9;
        const DIR = 1 << 10;
        const EXT = 1 << 11;
        const LOC = 1 << 12;
        const MNR = 1 << 13;
        const PRP = 1 << 14;
        const TMP = 1 << 15;
        const CLR = 1 << 16;
        const CLF = 1 << 17;
        const HLN = 1 << 18;
        const SEZ = 1 << 19;
        const TTL = 1 << 20;
        const UNF = 1 << 21;
        const ETC = 1 << 22;
        const IMP = 1 << 23;
    }
}

/// A node label decomposed into its annotations.
///
/// When the label does not match the grammar, the whole label is the
/// category and everything else is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedLabel<'a> {
    pub category: &'a str,
    pub tags: FunctionTags,
    pub coindex: Option<u32>,
    pub eq_index: Option<u32>,
}

impl<'a> ParsedLabel<'a> {
    fn fallback(label: &'a str) -> Self {
        Self {
            category: label,
            tags: FunctionTags::empty(),
            coindex: None,
            eq_index: None,
        }
    }
}

fn is_category_byte(b: u8) -> bool {
    b.is_ascii_uppercase() || b.is_ascii_digit() || b == b'$' || b == b'|' || b == b'^'
}

fn function_tag(segment: &str) -> Option<FunctionTags> {
    let tag = match segment {
        "ADV" => FunctionTags::ADV,
        "NOM" => FunctionTags::NOM,
        "DTV" => FunctionTags::DTV,
        "LGS" => FunctionTags::LGS,
        "PRD" => FunctionTags::PRD,
        "PUT" => FunctionTags::PUT,
        "SBJ" => FunctionTags::SBJ,
        "TPC" => FunctionTags::TPC,
        "VOC" => FunctionTags::VOC,
        "BNF" => FunctionTags::BNF,
        "DIR" => FunctionTags::DIR,
        "EXT" => FunctionTags::EXT,
        "LOC" => FunctionTags::LOC,
        "MNR" => FunctionTags::MNR,
        "PRP" => FunctionTags::PRP,
        "TMP" => FunctionTags::TMP,
        "CLR" => FunctionTags::CLR,
        "CLF" => FunctionTags::CLF,
        "HLN" => FunctionTags::HLN,
        "SEZ" => FunctionTags::SEZ,
        "TTL" => FunctionTags::TTL,
        "UNF" => FunctionTags::UNF,
        "ETC" => FunctionTags::ETC,
        "IMP" => FunctionTags::IMP,
        _ => return None,
    };
    Some(tag)
}

fn decimal_index(segment: &str) -> Option<u32> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    atoi::atoi(segment.as_bytes())
}

fn try_parse(label: &str) -> Option<ParsedLabel<'_>> {
    let bytes = label.as_bytes();
    let cat_end = bytes
        .iter()
        .position(|&b| !is_category_byte(b))
        .unwrap_or(bytes.len());
    if cat_end == 0 {
        return None;
    }

    let mut tags = FunctionTags::empty();
    let mut coindex = None;
    let mut eq_index = None;

    let mut rest = &label[cat_end..];
    while !rest.is_empty() {
        let sep = rest.as_bytes()[0];
        if sep != b'-' && sep != b'=' {
            return None;
        }
        let tail = &rest[1..];
        let seg_end = tail.find(['-', '=']).unwrap_or(tail.len());
        let segment = &tail[..seg_end];
        if sep == b'-' {
            if let Some(tag) = function_tag(segment) {
                tags |= tag;
            } else if let Some(n) = decimal_index(segment) {
                coindex = Some(n);
            } else {
                return None;
            }
        } else {
            eq_index = Some(decimal_index(segment)?);
        }
        rest = &tail[seg_end..];
    }

    Some(ParsedLabel {
        category: &label[..cat_end],
        tags,
        coindex,
        eq_index,
    })
}

/// Parses a node label into its category, function tags and indices.
///
/// Labels that do not match the grammar (punctuation tags like `-NONE-`,
/// lexicalized labels, stray suffixes) come back whole as the category.
pub fn parse_label(label: &str) -> ParsedLabel<'_> {
    try_parse(label).unwrap_or_else(|| ParsedLabel::fallback(label))
}

/// Returns the category part of a node label.
pub fn label_category(label: &str) -> &str {
    parse_label(label).category
}

/// Removes a trailing `-N` or `=N` index from a label, when the label
/// matches the grammar and the trailing segment really is an index.
pub fn label_noindices(label: &str) -> &str {
    if try_parse(label).is_none() {
        return label;
    }
    if let Some(pos) = label.rfind(['-', '=']) {
        let suffix = &label[pos + 1..];
        if !suffix.is_empty() && suffix.bytes().all(|b| b.is_ascii_digit()) {
            return &label[..pos];
        }
    }
    label
}

/// Returns the primary category of a node label: an optional leading `^`,
/// then a run of `[A-Z0-9$]` terminated by end of label or one of
/// `-`, `|`, `^`, `=`.  The whole label on no match.
pub fn primary_category(label: &str) -> &str {
    let s = label.strip_prefix('^').unwrap_or(label);
    let bytes = s.as_bytes();
    let end = bytes
        .iter()
        .position(|&b| !(b.is_ascii_uppercase() || b.is_ascii_digit() || b == b'$'))
        .unwrap_or(bytes.len());
    if end == 0 {
        return label;
    }
    if end == bytes.len() || matches!(bytes[end], b'-' | b'|' | b'^' | b'=') {
        &s[..end]
    } else {
        label
    }
}
