use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),
    #[error("{count} path step(s) did not match any labeled edge")]
    Unresolved { count: usize },
    #[error(
        "category prefixes must differ (start `{start}`, decision `{decision}`, ending `{ending}`)"
    )]
    OverlappingPrefixes {
        start: char,
        decision: char,
        ending: char,
    },
}
