//! Document upload and retrieval service.
//!
//! # Responsibility
//! - Persist uploaded bytes and record their metadata.
//! - Serve the placeholder summary and quiz for known documents.
//!
//! # Invariants
//! - The id exists before the file is written.
//! - Metadata is appended only after the file write succeeds; a failure in
//!   between can leave an orphan file but never a record without a file.
//! - Delete removes metadata only; stored bytes stay on disk.

use crate::model::document::{file_type_of, sanitize_filename, Document, QuizQuestion};
use crate::model::new_record_id;
use crate::repo::file_store::DocumentFileStore;
use crate::repo::Repository;
use crate::service::{ServiceError, ServiceResult};
use chrono::Utc;
use log::{error, info};
use std::io::Read;

/// Upload, listing and stub-analysis service for documents.
pub struct DocumentService<R: Repository<Document>> {
    repo: R,
    files: DocumentFileStore,
}

impl<R: Repository<Document>> DocumentService<R> {
    pub fn new(repo: R, files: DocumentFileStore) -> Self {
        Self { repo, files }
    }

    pub fn files(&self) -> &DocumentFileStore {
        &self.files
    }

    /// Stores an in-memory upload and records its metadata.
    pub fn upload_document(&self, raw_filename: &str, bytes: &[u8]) -> ServiceResult<Document> {
        self.upload_document_from(raw_filename, bytes)
    }

    /// Streams an upload from `reader` to disk and records its metadata.
    ///
    /// The filename is checked before anything is read, so a rejected upload
    /// consumes nothing from `reader`.
    ///
    /// # Errors
    /// - `InvalidInput` when the filename has no usable final component.
    /// - `Io` when the upload directory or file cannot be written, or when
    ///   `reader` fails mid-stream.
    pub fn upload_document_from(
        &self,
        raw_filename: &str,
        reader: impl Read,
    ) -> ServiceResult<Document> {
        let filename = sanitize_filename(raw_filename).ok_or_else(|| {
            ServiceError::InvalidInput("upload filename is empty".to_string())
        })?;

        let id = new_record_id();
        let file_size = self.files.write(&id, &filename, reader).map_err(|err| {
            error!(
                "event=document_upload module=service status=error id={} error={}",
                id, err
            );
            err
        })?;

        let document = Document {
            id,
            title: filename.clone(),
            file_type: file_type_of(&filename),
            filename,
            file_size,
            uploaded_at: Utc::now(),
        };
        let stored = self.repo.insert(document)?;
        info!(
            "event=document_upload module=service status=ok id={} file_type={} file_size={}",
            stored.id, stored.file_type, stored.file_size
        );
        Ok(stored)
    }

    pub fn list_documents(&self) -> ServiceResult<Vec<Document>> {
        Ok(self.repo.list()?)
    }

    pub fn get_document(&self, id: &str) -> ServiceResult<Document> {
        Ok(self.repo.get(id)?)
    }

    pub fn delete_document(&self, id: &str) -> ServiceResult<()> {
        let removed = self.repo.delete(id)?;
        info!("event=document_delete module=service status=ok id={id} removed={removed}");
        Ok(())
    }

    /// Placeholder summary; the file contents are not read.
    pub fn summarize_document(&self, id: &str) -> ServiceResult<String> {
        let document = self.repo.get(id)?;
        Ok(format!(
            "Summary of {}: This is a demo summary.",
            document.title
        ))
    }

    /// Placeholder quiz; identical for every document.
    pub fn document_quiz(&self, id: &str) -> ServiceResult<Vec<QuizQuestion>> {
        self.repo.get(id)?;
        Ok(demo_quiz())
    }
}

fn demo_quiz() -> Vec<QuizQuestion> {
    vec![
        QuizQuestion {
            question: "Demo question 1?".to_string(),
            options: ["A", "B", "C", "D"].map(String::from).to_vec(),
            correct_answer: 0,
            explanation: "Demo explanation.".to_string(),
        },
        QuizQuestion {
            question: "Demo question 2?".to_string(),
            options: ["True", "False"].map(String::from).to_vec(),
            correct_answer: 1,
            explanation: "Demo explanation.".to_string(),
        },
    ]
}
