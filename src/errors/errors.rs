use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to read source file {path:?}: {source}")]
    ReadSource { path: PathBuf, source: io::Error },
}
