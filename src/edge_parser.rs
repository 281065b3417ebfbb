use tracing::{debug, trace};
use winnow::prelude::*;
use winnow::token::{take_till, take_while};

use crate::classify::Classifier;
use crate::edge_ast::{EdgeEnd, GraphIndex};

/// A labeled edge found on a single line, borrowed from that line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeMatch<'s> {
    pub from: &'s str,
    pub label: &'s str,
    pub to: &'s str,
}

/// Scans every line of `source` for `from -->|label| to` and builds the
/// edge sequence table and category sets.
pub fn index_graph(source: &str, classifier: &impl Classifier) -> GraphIndex {
    let mut index = GraphIndex::default();

    for line in source.split('\n') {
        let Some(m) = match_edge_line(line) else {
            continue;
        };
        let from = strip_decoration(m.from);
        let to = strip_decoration(m.to);

        if let Some(category) = classifier.classify(&from, EdgeEnd::From) {
            index.categories.insert(category, &from);
        }
        if let Some(category) = classifier.classify(&to, EdgeEnd::To) {
            index.categories.insert(category, &to);
        }

        let seq = index.edges.push(&from, m.label, &to);
        trace!(seq, from = %from, label = m.label, to = %to, "indexed edge");
    }

    debug!(
        edges = index.edges.len(),
        start = index.categories.start.len(),
        decision = index.categories.decision.len(),
        ending = index.categories.ending.len(),
        "indexed graph source"
    );
    index
}

/// Finds the leftmost `from -->|label| to` on a line.
///
/// The from-node is the longest non-whitespace prefix of a token that still
/// leaves a valid arrow behind it, so `A-->|x|B-->|y|C` yields `A-->|x|B`.
pub fn match_edge_line(line: &str) -> Option<EdgeMatch<'_>> {
    for (start, end) in token_spans(line) {
        let token = &line[start..end];
        let split_points = token
            .char_indices()
            .map(|(i, c)| start + i + c.len_utf8())
            .rev();
        for split in split_points {
            let mut rest = &line[split..];
            if let Ok((label, to)) = arrow_tail(&mut rest) {
                return Some(EdgeMatch {
                    from: &line[start..split],
                    label,
                    to,
                });
            }
        }
    }
    None
}

/// Removes a `((...))` terminal-shape decoration, first `((` through last `))`.
pub fn strip_decoration(token: &str) -> String {
    let Some(open) = token.find("((") else {
        return token.to_string();
    };
    match token.rfind("))") {
        Some(close) if close >= open + 3 => {
            let mut stripped = String::with_capacity(token.len());
            stripped.push_str(&token[..open]);
            stripped.push_str(&token[close + 2..]);
            stripped
        }
        _ => token.to_string(),
    }
}

fn token_spans(line: &str) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut start: Option<usize> = None;
    for (i, c) in line.char_indices() {
        match (is_space(c), start) {
            (false, None) => start = Some(i),
            (true, Some(s)) => {
                spans.push((s, i));
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start {
        spans.push((s, line.len()));
    }
    spans
}

/// Whitespace as diagram sources treat it: includes the byte-order mark,
/// excludes U+0085.
pub fn is_space(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

fn whitespace<'s>(input: &mut &'s str) -> winnow::Result<&'s str> {
    take_while(0.., is_space).parse_next(input)
}

fn edge_label<'s>(input: &mut &'s str) -> winnow::Result<&'s str> {
    "-->|".parse_next(input)?;
    let text = take_till(1.., '|').parse_next(input)?;
    "|".parse_next(input)?;
    Ok(text)
}

fn node_token<'s>(input: &mut &'s str) -> winnow::Result<&'s str> {
    take_till(1.., is_space).parse_next(input)
}

fn arrow_tail<'s>(input: &mut &'s str) -> winnow::Result<(&'s str, &'s str)> {
    whitespace.parse_next(input)?;
    let label = edge_label.parse_next(input)?;
    whitespace.parse_next(input)?;
    let to = node_token.parse_next(input)?;
    Ok((label, to))
}
