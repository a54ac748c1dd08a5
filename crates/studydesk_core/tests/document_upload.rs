use std::sync::Arc;
use studydesk_core::{
    Document, DocumentFileStore, DocumentService, InMemoryRepository, Repository, ServiceError,
};

fn service(root: &std::path::Path) -> DocumentService<Arc<InMemoryRepository<Document>>> {
    DocumentService::new(
        Arc::new(InMemoryRepository::new()),
        DocumentFileStore::new(root.join("uploaded_documents")),
    )
}

#[test]
fn upload_records_type_size_and_writes_prefixed_file() {
    let dir = tempfile::tempdir().unwrap();
    let service = service(dir.path());
    let bytes = b"Lecture notes, week one.";

    let document = service.upload_document("notes.txt", bytes).unwrap();

    assert_eq!(document.filename, "notes.txt");
    assert_eq!(document.title, "notes.txt");
    assert_eq!(document.file_type, "txt");
    assert_eq!(document.file_size, bytes.len() as u64);

    let on_disk = dir
        .path()
        .join("uploaded_documents")
        .join(format!("{}_notes.txt", document.id));
    assert_eq!(std::fs::read(on_disk).unwrap(), bytes);
    assert_eq!(service.get_document(&document.id).unwrap(), document);
}

#[test]
fn upload_keeps_files_inside_upload_directory() {
    let dir = tempfile::tempdir().unwrap();
    let service = service(dir.path());

    let document = service.upload_document("../../escape.md", b"# hi").unwrap();
    assert_eq!(document.filename, "escape.md");
    assert!(service.files().path_for(&document).starts_with(service.files().root()));
    assert!(!dir.path().join("escape.md").exists());
}

#[test]
fn upload_rejects_unusable_filename() {
    let dir = tempfile::tempdir().unwrap();
    let service = service(dir.path());

    let err = service.upload_document("uploads/", b"x").unwrap_err();
    assert!(matches!(err, ServiceError::InvalidInput(_)));
    assert!(service.list_documents().unwrap().is_empty());
}

#[test]
fn delete_removes_metadata_but_keeps_file() {
    let dir = tempfile::tempdir().unwrap();
    let service = service(dir.path());
    let document = service.upload_document("slides.pdf", b"%PDF").unwrap();
    let path = service.files().path_for(&document);

    service.delete_document(&document.id).unwrap();
    service.delete_document(&document.id).unwrap();

    assert!(service.list_documents().unwrap().is_empty());
    assert!(path.exists());
}

#[test]
fn summary_and_quiz_require_existing_document() {
    let dir = tempfile::tempdir().unwrap();
    let service = service(dir.path());
    let document = service.upload_document("bio.txt", b"cells").unwrap();

    assert_eq!(
        service.summarize_document(&document.id).unwrap(),
        "Summary of bio.txt: This is a demo summary."
    );

    let quiz = service.document_quiz(&document.id).unwrap();
    assert_eq!(quiz.len(), 2);
    assert_eq!(quiz[0].options.len(), 4);
    assert_eq!(quiz[0].correct_answer, 0);
    assert_eq!(quiz[1].options, vec!["True", "False"]);
    assert_eq!(quiz[1].correct_answer, 1);

    assert!(matches!(
        service.summarize_document("missing"),
        Err(ServiceError::NotFound { kind: "Document", .. })
    ));
    assert!(matches!(
        service.document_quiz("missing"),
        Err(ServiceError::NotFound { .. })
    ));
}

#[test]
fn documents_list_in_upload_order() {
    let dir = tempfile::tempdir().unwrap();
    let repo = Arc::new(InMemoryRepository::<Document>::new());
    let service = DocumentService::new(Arc::clone(&repo), DocumentFileStore::new(dir.path()));

    service.upload_document("a.txt", b"a").unwrap();
    service.upload_document("b.csv", b"b,c").unwrap();

    let names: Vec<_> = repo.list().unwrap().into_iter().map(|d| d.filename).collect();
    assert_eq!(names, vec!["a.txt", "b.csv"]);
}

#[test]
fn upload_streams_multi_chunk_reader_to_disk() {
    use std::io::Read;

    let dir = tempfile::tempdir().unwrap();
    let service = service(dir.path());
    let first = vec![b'a'; 70_000];
    let second = vec![b'b'; 70_000];
    let third = b"tail".to_vec();
    let reader = first
        .as_slice()
        .chain(second.as_slice())
        .chain(third.as_slice());

    let document = service.upload_document_from("long.txt", reader).unwrap();

    let expected_len = (first.len() + second.len() + third.len()) as u64;
    assert_eq!(document.file_size, expected_len);
    let on_disk = std::fs::read(service.files().path_for(&document)).unwrap();
    assert_eq!(on_disk.len() as u64, expected_len);
    assert!(on_disk.ends_with(b"tail"));
}

#[test]
fn failed_stream_records_no_document() {
    struct ResetAfterFirstChunk {
        sent: bool,
    }
    impl std::io::Read for ResetAfterFirstChunk {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            if self.sent {
                return Err(std::io::Error::other("connection reset"));
            }
            self.sent = true;
            buf[0] = b'x';
            Ok(1)
        }
    }

    let dir = tempfile::tempdir().unwrap();
    let service = service(dir.path());

    let err = service
        .upload_document_from("partial.txt", ResetAfterFirstChunk { sent: false })
        .unwrap_err();

    assert!(matches!(err, ServiceError::Io(_)));
    assert!(service.list_documents().unwrap().is_empty());
}
