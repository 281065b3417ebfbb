use crate::edge_ast::{EdgeEnd, NodeCategory};
use crate::error::Error;

/// Decides which category, if any, a node belongs to.
///
/// Any `Fn(&str, EdgeEnd) -> Option<NodeCategory>` closure is a classifier.
pub trait Classifier {
    fn classify(&self, id: &str, end: EdgeEnd) -> Option<NodeCategory>;
}

impl<F> Classifier for F
where
    F: Fn(&str, EdgeEnd) -> Option<NodeCategory>,
{
    fn classify(&self, id: &str, end: EdgeEnd) -> Option<NodeCategory> {
        self(id, end)
    }
}

/// Naming convention: start and decision prefixes apply to the source of an
/// edge, the ending prefix to its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefixClassifier {
    start: char,
    decision: char,
    ending: char,
}

impl PrefixClassifier {
    /// Prefixes must be pairwise distinct so no node lands in two categories.
    pub fn new(start: char, decision: char, ending: char) -> Result<Self, Error> {
        if start == decision || start == ending || decision == ending {
            return Err(Error::OverlappingPrefixes {
                start,
                decision,
                ending,
            });
        }
        Ok(Self {
            start,
            decision,
            ending,
        })
    }
}

impl Default for PrefixClassifier {
    fn default() -> Self {
        Self {
            start: 'S',
            decision: 'D',
            ending: 'E',
        }
    }
}

impl Classifier for PrefixClassifier {
    fn classify(&self, id: &str, end: EdgeEnd) -> Option<NodeCategory> {
        let first = id.chars().next()?;
        match end {
            EdgeEnd::From if first == self.start => Some(NodeCategory::Start),
            EdgeEnd::From if first == self.decision => Some(NodeCategory::Decision),
            EdgeEnd::To if first == self.ending => Some(NodeCategory::Ending),
            _ => None,
        }
    }
}
