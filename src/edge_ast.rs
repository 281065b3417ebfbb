use std::collections::HashMap;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeCategory {
    Start,
    Decision,
    Ending,
}

impl NodeCategory {
    pub const ALL: [NodeCategory; 3] = [Self::Start, Self::Decision, Self::Ending];

    /// Class name used in `class` and `classDef` directives.
    pub const fn class_name(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Decision => "decision",
            Self::Ending => "ending",
        }
    }
}

/// Which side of an edge a node appeared on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeEnd {
    From,
    To,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub from: String,
    pub label: String,
    pub to: String,
    pub index: usize,
}

impl Edge {
    pub fn key(&self) -> String {
        edge_key(&self.from, &self.label, &self.to)
    }
}

/// Canonical `from->label->to` key.
pub fn edge_key(from: &str, label: &str, to: &str) -> String {
    format!("{from}->{label}->{to}")
}

/// Deduplicated node ids per category, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CategorySets {
    pub start: Vec<String>,
    pub decision: Vec<String>,
    pub ending: Vec<String>,
}

impl CategorySets {
    /// Adds `id` unless it already belongs to any category; the first
    /// category a node receives is kept.
    pub fn insert(&mut self, category: NodeCategory, id: &str) -> bool {
        if self.category_of(id).is_some() {
            return false;
        }
        self.members_mut(category).push(id.to_string());
        true
    }

    pub fn members(&self, category: NodeCategory) -> &[String] {
        match category {
            NodeCategory::Start => &self.start,
            NodeCategory::Decision => &self.decision,
            NodeCategory::Ending => &self.ending,
        }
    }

    fn members_mut(&mut self, category: NodeCategory) -> &mut Vec<String> {
        match category {
            NodeCategory::Start => &mut self.start,
            NodeCategory::Decision => &mut self.decision,
            NodeCategory::Ending => &mut self.ending,
        }
    }

    pub fn category_of(&self, id: &str) -> Option<NodeCategory> {
        NodeCategory::ALL
            .into_iter()
            .find(|&c| self.members(c).iter().any(|n| n == id))
    }

    pub fn is_empty(&self) -> bool {
        self.start.is_empty() && self.decision.is_empty() && self.ending.is_empty()
    }
}

/// Every matched edge in source order, plus a first-occurrence lookup by key.
///
/// Duplicate keys keep their own sequence numbers (the renderer counts them),
/// but only the first one is reachable through [`EdgeIndex::first`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EdgeIndex {
    edges: Vec<Edge>,
    #[serde(skip)]
    first_by_key: HashMap<String, usize>,
}

impl EdgeIndex {
    /// Appends an edge, numbering it with the next sequence index.
    pub fn push(&mut self, from: &str, label: &str, to: &str) -> usize {
        let index = self.edges.len();
        let edge = Edge {
            from: from.to_string(),
            label: label.to_string(),
            to: to.to_string(),
            index,
        };
        self.first_by_key.entry(edge.key()).or_insert(index);
        self.edges.push(edge);
        index
    }

    pub fn first(&self, key: &str) -> Option<usize> {
        self.first_by_key.get(key).copied()
    }

    pub fn occurrences(&self, key: &str) -> Vec<usize> {
        self.edges
            .iter()
            .filter(|e| e.key() == key)
            .map(|e| e.index)
            .collect()
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GraphIndex {
    pub edges: EdgeIndex,
    pub categories: CategorySets,
}
