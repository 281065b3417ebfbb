use tracing::debug;

use crate::edge_ast::{EdgeIndex, edge_key};
use crate::style::{HIGHLIGHT_CLASS, Palette, StyleDirective};

/// Separator between the tokens of a path string.
pub const PATH_SEPARATOR: &str = " -> ";

/// Alternating `node, label, node, label, node, ...` tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightPath {
    tokens: Vec<String>,
}

impl HighlightPath {
    pub fn parse(text: &str) -> Self {
        Self {
            tokens: text.split(PATH_SEPARATOR).map(str::to_string).collect(),
        }
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Overlapping `(from, label, to)` triples starting at every even token.
    /// A trailing label without a target node is dropped.
    pub fn steps(&self) -> impl Iterator<Item = Step<'_>> {
        self.tokens.windows(3).step_by(2).map(|w| Step {
            from: &w[0],
            label: &w[1],
            to: &w[2],
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step<'a> {
    pub from: &'a str,
    pub label: &'a str,
    pub to: &'a str,
}

impl Step<'_> {
    pub fn key(&self) -> String {
        edge_key(self.from, self.label, self.to)
    }
}

/// A path step whose edge is not in the index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedStep {
    pub path: usize,
    pub step: usize,
    pub key: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Highlights {
    pub directives: Vec<StyleDirective>,
    pub unresolved: Vec<UnresolvedStep>,
}

/// Node highlight classes and link overrides for every path, closed by the
/// highlight class definition.
pub fn highlight_directives(
    edges: &EdgeIndex,
    paths: &[HighlightPath],
    palette: &Palette,
) -> Highlights {
    let mut out = Highlights::default();
    let link_props = palette.highlight_edge.props();

    for (path_no, path) in paths.iter().enumerate() {
        for (step_no, step) in path.steps().enumerate() {
            for node in [step.from, step.to] {
                out.directives.push(StyleDirective::Class {
                    node: node.to_string(),
                    class: HIGHLIGHT_CLASS.to_string(),
                });
            }

            let key = step.key();
            match edges.first(&key) {
                Some(index) => out.directives.push(StyleDirective::LinkStyle {
                    index,
                    props: link_props.clone(),
                }),
                None => {
                    debug!(
                        path = path_no,
                        step = step_no,
                        key = %key,
                        "no indexed edge for path step"
                    );
                    out.unresolved.push(UnresolvedStep {
                        path: path_no,
                        step: step_no,
                        key,
                    });
                }
            }
        }
    }

    out.directives.push(StyleDirective::ClassDef {
        class: HIGHLIGHT_CLASS.to_string(),
        props: palette.highlight_node.props(),
    });
    out
}

/// One path per line; blank lines and `#` comments are skipped.
pub fn parse_path_list(text: &str) -> Vec<HighlightPath> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(HighlightPath::parse)
        .collect()
}
