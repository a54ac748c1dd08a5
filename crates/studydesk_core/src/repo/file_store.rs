//! On-disk storage for uploaded document bytes.
//!
//! # Invariants
//! - Files live directly under `root`, named `{id}_{filename}`.
//! - Reads are best-effort: missing or non-UTF-8 files yield empty text.

use crate::model::document::{stored_file_name, Document};
use log::debug;
use std::fs::{self, File};
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

/// Upload directory handle shared by document and assistant services.
#[derive(Debug, Clone)]
pub struct DocumentFileStore {
    root: PathBuf,
}

impl DocumentFileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, document: &Document) -> PathBuf {
        self.root.join(document.stored_file_name())
    }

    /// Copies `reader` to the file for a new upload and returns the size found
    /// on disk.
    ///
    /// The content is streamed; it is never held in memory as a whole.
    ///
    /// # Side effects
    /// - Creates the upload directory when missing.
    /// - Overwrites any file already stored under the same name.
    /// - A failing reader leaves the partially written file in place.
    pub fn write(&self, id: &str, filename: &str, mut reader: impl Read) -> io::Result<u64> {
        fs::create_dir_all(&self.root)?;
        let path = self.root.join(stored_file_name(id, filename));
        let mut file = BufWriter::new(File::create(&path)?);
        io::copy(&mut reader, &mut file)?;
        file.flush()?;
        drop(file);
        Ok(fs::metadata(&path)?.len())
    }

    /// Reads the stored file as UTF-8 text.
    pub fn read_text(&self, document: &Document) -> String {
        let path = self.path_for(document);
        match fs::read(&path) {
            Ok(bytes) => String::from_utf8(bytes).unwrap_or_else(|_| {
                debug!(
                    "event=document_read module=file_store status=skipped reason=not_utf8 id={}",
                    document.id
                );
                String::new()
            }),
            Err(err) => {
                debug!(
                    "event=document_read module=file_store status=skipped reason=io id={} error={}",
                    document.id, err
                );
                String::new()
            }
        }
    }
}
