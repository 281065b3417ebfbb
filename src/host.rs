//! Seam between the augmenting transform and whatever actually draws the
//! diagram. The renderer and the UI event source are supplied by the host.

use tracing::{debug, trace};

use crate::augment::{Augmented, Augmenter};
use crate::classify::{Classifier, PrefixClassifier};
use crate::highlight::HighlightPath;

/// External diagram renderer.
pub trait Renderer {
    type Handle;
    type Error: std::error::Error;

    fn render(&mut self, text: &str) -> Result<Self::Handle, Self::Error>;
}

/// Raw interaction reported by the rendered view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagramEvent {
    Node { id: Option<String> },
    Edge {
        label: Option<String>,
        path_id: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    NodeActivated(String),
    EdgeActivated(String),
}

impl DiagramEvent {
    /// Edge activations prefer the visible label and fall back to the
    /// renderer's path id.
    pub fn activation(self) -> Option<Activation> {
        match self {
            Self::Node { id } => non_empty(id).map(Activation::NodeActivated),
            Self::Edge { label, path_id } => non_empty(label)
                .or_else(|| non_empty(path_id))
                .map(Activation::EdgeActivated),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

type Callback<'a> = Box<dyn FnMut(&str) + 'a>;

/// A rendered, augmented diagram with node and edge callbacks.
pub struct DiagramView<'a, R: Renderer, C = PrefixClassifier> {
    renderer: R,
    augmenter: Augmenter<C>,
    current: Option<(Augmented, R::Handle)>,
    on_node: Option<Callback<'a>>,
    on_edge: Option<Callback<'a>>,
}

impl<'a, R: Renderer> DiagramView<'a, R> {
    pub fn new(renderer: R) -> Self {
        Self::with_augmenter(renderer, Augmenter::new())
    }
}

impl<'a, R: Renderer, C: Classifier> DiagramView<'a, R, C> {
    pub fn with_augmenter(renderer: R, augmenter: Augmenter<C>) -> Self {
        Self {
            renderer,
            augmenter,
            current: None,
            on_node: None,
            on_edge: None,
        }
    }

    pub fn on_node(&mut self, callback: impl FnMut(&str) + 'a) {
        self.on_node = Some(Box::new(callback));
    }

    pub fn on_edge(&mut self, callback: impl FnMut(&str) + 'a) {
        self.on_edge = Some(Box::new(callback));
    }

    /// Augments and renders `source`, replacing whatever was shown before.
    /// On failure the previous drawing is discarded as well.
    pub fn show(&mut self, source: &str, paths: &[HighlightPath]) -> Result<&R::Handle, R::Error> {
        self.current = None;
        let augmented = self.augmenter.augment(source, paths);
        let handle = self.renderer.render(&augmented.text)?;
        debug!(bytes = augmented.text.len(), "rendered diagram");
        let (_, handle) = self.current.insert((augmented, handle));
        Ok(handle)
    }

    pub fn augmented(&self) -> Option<&Augmented> {
        self.current.as_ref().map(|(augmented, _)| augmented)
    }

    pub fn handle(&self) -> Option<&R::Handle> {
        self.current.as_ref().map(|(_, handle)| handle)
    }

    /// Forwards an event to the matching callback. Returns the activation,
    /// if the event carried one.
    pub fn dispatch(&mut self, event: DiagramEvent) -> Option<Activation> {
        let activation = event.activation()?;
        trace!(?activation, "dispatching diagram activation");
        match &activation {
            Activation::NodeActivated(id) => {
                if let Some(cb) = self.on_node.as_mut() {
                    cb(id);
                }
            }
            Activation::EdgeActivated(edge) => {
                if let Some(cb) = self.on_edge.as_mut() {
                    cb(edge);
                }
            }
        }
        Some(activation)
    }
}
