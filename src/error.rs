use std::{io, path::PathBuf};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("failed to read genesis file {path:?}: {source}")]
    IoFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse genesis file {path:?}: {source}")]
    ParseFailure {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
