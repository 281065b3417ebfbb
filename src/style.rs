use std::fmt;

use crate::edge_ast::{CategorySets, NodeCategory};

/// Class applied to every node on a highlighted path.
pub const HIGHLIGHT_CLASS: &str = "highlightedNode";

/// One line of styling appended to the diagram source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleDirective {
    Class { node: String, class: String },
    ClassDef { class: String, props: String },
    LinkStyle { index: usize, props: String },
}

impl fmt::Display for StyleDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Class { node, class } => write!(f, "class {node} {class};"),
            Self::ClassDef { class, props } => write!(f, "classDef {class} {props};"),
            Self::LinkStyle { index, props } => write!(f, "linkStyle {index} {props};"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fill {
    pub fill: String,
    pub stroke: String,
    pub stroke_width: u32,
}

impl Fill {
    fn new(fill: &str, stroke: &str, stroke_width: u32) -> Self {
        Self {
            fill: fill.to_string(),
            stroke: stroke.to_string(),
            stroke_width,
        }
    }

    pub fn props(&self) -> String {
        format!(
            "fill:{},stroke:{},stroke-width:{}px",
            self.fill, self.stroke, self.stroke_width
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stroke {
    pub color: String,
    pub width: u32,
}

impl Stroke {
    pub fn props(&self) -> String {
        format!("stroke:{},stroke-width:{}px", self.color, self.width)
    }
}

/// Visual constants for every generated directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub start: Fill,
    pub decision: Fill,
    pub ending: Fill,
    pub highlight_node: Stroke,
    pub highlight_edge: Stroke,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            start: Fill::new("#a8e6cf", "#2b7a4b", 2),
            decision: Fill::new("#d0e8f2", "#4682b4", 2),
            ending: Fill::new("#f9a", "#333", 2),
            highlight_node: Stroke {
                color: "#3366FF".to_string(),
                width: 5,
            },
            highlight_edge: Stroke {
                color: "#3366FF".to_string(),
                width: 5,
            },
        }
    }
}

impl Palette {
    pub fn fill(&self, category: NodeCategory) -> &Fill {
        match category {
            NodeCategory::Start => &self.start,
            NodeCategory::Decision => &self.decision,
            NodeCategory::Ending => &self.ending,
        }
    }
}

/// Class assignments for every categorized node (start, decision, ending),
/// followed by the three category class definitions.
pub fn category_directives(sets: &CategorySets, palette: &Palette) -> Vec<StyleDirective> {
    let mut directives = Vec::new();
    for category in NodeCategory::ALL {
        for node in sets.members(category) {
            directives.push(StyleDirective::Class {
                node: node.clone(),
                class: category.class_name().to_string(),
            });
        }
    }
    for category in NodeCategory::ALL {
        directives.push(StyleDirective::ClassDef {
            class: category.class_name().to_string(),
            props: palette.fill(category).props(),
        });
    }
    directives
}
