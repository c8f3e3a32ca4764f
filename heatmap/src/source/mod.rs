//! Places a [Dataset] can come from.

use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use crate::{dataset::Dataset, Error};

pub mod http;

pub use http::{HttpSource, DEFAULT_URL};

/// A type that can produce the temperature dataset.
pub trait DatasetSource {
    /// Load the dataset.
    ///
    /// This is a one-shot load: there are no retries, and any failure is final.
    fn load(&mut self) -> Result<Dataset, Error>;
}

/// Reads the dataset from a local JSON file.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        FileSource {
            path: path.as_ref().to_owned(),
        }
    }
}

impl DatasetSource for FileSource {
    fn load(&mut self) -> Result<Dataset, Error> {
        tracing::info!("reading dataset from {}", self.path.display());
        let file = File::open(&self.path)?;
        Dataset::from_reader(BufReader::new(file))
    }
}

/// Fake source: repeatedly provides the indicated dataset.
pub struct FakeSource {
    pub dataset: Dataset,
}

impl DatasetSource for FakeSource {
    fn load(&mut self) -> Result<Dataset, Error> {
        Ok(self.dataset.clone())
    }
}
