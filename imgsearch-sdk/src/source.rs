// ABOUTME: Reads candidate image files from disk into name + bytes pairs
// ABOUTME: Maps unreadable or missing files to InputNotFound without retrying

use crate::error::SearchError;
use crate::signature::SignatureTable;
use crate::Result;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Name sent in the upload when the path has no final component
const FALLBACK_FILE_NAME: &str = "image.jpg";

/// A file's upload label and raw contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSource {
    path: PathBuf,
    file_name: String,
    bytes: Vec<u8>,
}

impl ImageSource {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| not_found(path, source))?;

        Ok(Self {
            path: path.to_path_buf(),
            file_name: file_name_of(path),
            bytes,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn classify<'t>(&self, table: &'t SignatureTable) -> Option<&'t str> {
        table.classify(&self.bytes)
    }
}

/// Read at most `len` leading bytes of a file, enough to classify it
pub fn read_header(path: impl AsRef<Path>, len: usize) -> Result<Vec<u8>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| not_found(path, source))?;

    let mut header = Vec::with_capacity(len);
    file.take(len as u64)
        .read_to_end(&mut header)
        .map_err(|source| not_found(path, source))?;

    Ok(header)
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| FALLBACK_FILE_NAME.to_string())
}

fn not_found(path: &Path, source: std::io::Error) -> SearchError {
    SearchError::InputNotFound {
        path: path.to_path_buf(),
        source,
    }
}
