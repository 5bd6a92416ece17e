//! File-backed JSON store.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info};

use crate::{DbError, StoreDocument};

/// Indentation used when writing the store file.
const INDENT: &[u8] = b"    ";

/// A JSON document store bound to one file.
///
/// The whole document is read by [`JsonStore::load`] and rewritten by
/// [`JsonStore::save`]; there is no partial update.
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    /// Bind a store to a file path. Nothing is read until [`load`](Self::load).
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check if the backing file exists.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the whole document.
    ///
    /// A missing file yields an empty document. A file that exists but cannot
    /// be read or parsed is an error.
    pub fn load<P, O>(&self) -> Result<StoreDocument<P, O>, DbError>
    where
        P: DeserializeOwned,
        O: DeserializeOwned,
    {
        if !self.exists() {
            debug!(path = %self.path.display(), "store file missing, starting empty");
            return Ok(StoreDocument::empty());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| DbError::io(&self.path, e))?;
        let doc: StoreDocument<P, O> =
            serde_json::from_str(&content).map_err(|source| DbError::Parse {
                path: self.path.clone(),
                source,
            })?;

        info!(
            path = %self.path.display(),
            products = doc.products.len(),
            orders = doc.orders.len(),
            "store loaded"
        );
        Ok(doc)
    }

    /// Write the whole document.
    ///
    /// The content goes to a sibling temp file first and is then renamed over
    /// the target, so readers never see a half-written file.
    pub fn save<P, O>(&self, doc: &StoreDocument<P, O>) -> Result<(), DbError>
    where
        P: Serialize,
        O: Serialize,
    {
        let bytes = encode(doc)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| DbError::io(parent, e))?;
        }

        let tmp = self.tmp_path();
        {
            let mut file = fs::File::create(&tmp).map_err(|e| DbError::io(&tmp, e))?;
            file.write_all(&bytes).map_err(|e| DbError::io(&tmp, e))?;
            file.sync_all().map_err(|e| DbError::io(&tmp, e))?;
        }
        fs::rename(&tmp, &self.path).map_err(|e| DbError::io(&self.path, e))?;

        debug!(
            path = %self.path.display(),
            bytes = bytes.len(),
            "store saved"
        );
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

/// Serialize a document with four-space indentation.
fn encode<P: Serialize, O: Serialize>(doc: &StoreDocument<P, O>) -> Result<Vec<u8>, DbError> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(INDENT);
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    doc.serialize(&mut ser)?;
    Ok(buf)
}
