pub mod augment;
pub mod classify;
pub mod edge_ast;
pub mod edge_parser;
pub mod error;
pub mod highlight;
pub mod host;
pub mod report;
pub mod style;

use std::io::Read;
use std::path::Path;

pub use augment::{Augmented, Augmenter};
pub use classify::{Classifier, PrefixClassifier};
pub use error::Error;
pub use highlight::HighlightPath;

/// Appends category styling and highlights for `paths` (each `A -> label -> B ...`)
/// to `source`, using the default naming convention and palette.
pub fn augment(source: &str, paths: &[&str]) -> String {
    let paths: Vec<HighlightPath> = paths.iter().copied().map(HighlightPath::parse).collect();
    Augmenter::new().augment(source, &paths).text
}

/// Reads the diagram source from `path`, or stdin when none is given.
pub fn read_source(path: Option<&Path>) -> Result<String, Error> {
    match path {
        Some(path) => std::fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        }),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(Error::Stdin)?;
            Ok(buf)
        }
    }
}

pub fn read_paths(path: &Path) -> Result<Vec<HighlightPath>, Error> {
    let text = std::fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(highlight::parse_path_list(&text))
}

/// Fails when any step of any path did not resolve to an indexed edge.
pub fn ensure_resolved(augmented: &Augmented) -> Result<(), Error> {
    match augmented.unresolved.len() {
        0 => Ok(()),
        count => Err(Error::Unresolved { count }),
    }
}
