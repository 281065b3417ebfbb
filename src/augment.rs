use tracing::debug;

use crate::classify::{Classifier, PrefixClassifier};
use crate::edge_ast::GraphIndex;
use crate::edge_parser::index_graph;
use crate::highlight::{HighlightPath, UnresolvedStep, highlight_directives};
use crate::style::{Palette, StyleDirective, category_directives};

const INDENT: &str = "    ";

/// Augmented diagram text plus what was learned while building it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Augmented {
    pub text: String,
    pub index: GraphIndex,
    pub unresolved: Vec<UnresolvedStep>,
}

/// Configured transform: classification convention and visual constants.
#[derive(Debug, Clone, Default)]
pub struct Augmenter<C = PrefixClassifier> {
    classifier: C,
    palette: Palette,
}

impl Augmenter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: Classifier> Augmenter<C> {
    pub fn with_classifier<D: Classifier>(self, classifier: D) -> Augmenter<D> {
        Augmenter {
            classifier,
            palette: self.palette,
        }
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn index(&self, source: &str) -> GraphIndex {
        index_graph(source, &self.classifier)
    }

    pub fn augment(&self, source: &str, paths: &[HighlightPath]) -> Augmented {
        let index = self.index(source);
        let categories = category_directives(&index.categories, &self.palette);
        let highlights = highlight_directives(&index.edges, paths, &self.palette);

        let text = assemble(source, categories.iter().chain(&highlights.directives));
        debug!(
            paths = paths.len(),
            directives = categories.len() + highlights.directives.len(),
            unresolved = highlights.unresolved.len(),
            "augmented graph source"
        );

        Augmented {
            text,
            index,
            unresolved: highlights.unresolved,
        }
    }
}

fn assemble<'a>(source: &str, directives: impl Iterator<Item = &'a StyleDirective>) -> String {
    let mut out = String::from(source);
    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
    for directive in directives {
        out.push_str(&format!("{INDENT}{directive}\n"));
    }
    out
}
