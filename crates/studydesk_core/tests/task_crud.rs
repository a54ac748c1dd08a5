use std::collections::HashSet;
use std::sync::Arc;
use studydesk_core::{InMemoryRepository, Repository, ServiceError, Task, TaskService};

fn service() -> TaskService<InMemoryRepository<Task>> {
    TaskService::new(InMemoryRepository::new())
}

#[test]
fn create_assigns_fresh_ids_and_ignores_client_id() {
    let service = service();
    let mut ids = HashSet::new();

    for index in 0..20 {
        let mut task = Task::new(format!("task {index}"));
        task.id = Some("client-chosen".to_string());
        let stored = service.create_task(task).unwrap();

        let id = stored.id.clone().unwrap();
        assert_ne!(id, "client-chosen");
        assert!(ids.insert(id), "ids must be unique");
    }

    assert_eq!(service.list_tasks(None).unwrap().len(), 20);
}

#[test]
fn create_from_minimal_payload_uses_defaults() {
    let service = service();
    let payload: Task = serde_json::from_str(r#"{"title":"Read ch.3","priority":3}"#).unwrap();

    let stored = service.create_task(payload).unwrap();
    assert!(stored.id.is_some());
    assert_eq!(stored.status, "pending");
    assert_eq!(stored.estimated_minutes, 30);
    assert_eq!(stored.priority, 3);
}

#[test]
fn list_filters_by_exact_status_in_insertion_order() {
    let service = service();
    for (title, status) in [
        ("a", "pending"),
        ("b", "completed"),
        ("c", "pending"),
        ("d", "Completed"),
    ] {
        let mut task = Task::new(title);
        task.status = status.to_string();
        service.create_task(task).unwrap();
    }

    let pending: Vec<_> = service
        .list_tasks(Some("pending"))
        .unwrap()
        .into_iter()
        .map(|t| t.title)
        .collect();
    assert_eq!(pending, vec!["a", "c"]);

    let completed = service.list_tasks(Some("completed")).unwrap();
    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0].title, "b");

    assert_eq!(service.list_tasks(Some("")).unwrap().len(), 4);
}

#[test]
fn update_replaces_record_and_restores_path_id() {
    let service = service();
    let stored = service.create_task(Task::new("draft")).unwrap();
    let id = stored.id.clone().unwrap();

    let mut replacement = Task::new("final");
    replacement.id = Some("drifted".to_string());
    replacement.status = "completed".to_string();
    replacement.estimated_minutes = 90;

    let updated = service.update_task(&id, replacement).unwrap();
    assert_eq!(updated.id.as_deref(), Some(id.as_str()));

    let loaded = service.get_task(&id).unwrap();
    assert_eq!(loaded.title, "final");
    assert_eq!(loaded.status, "completed");
    assert_eq!(loaded.estimated_minutes, 90);
    assert!(matches!(
        service.get_task("drifted"),
        Err(ServiceError::NotFound { kind: "Task", .. })
    ));
}

#[test]
fn get_and_update_missing_return_not_found() {
    let service = service();

    let err = service.get_task("missing").unwrap_err();
    assert!(matches!(err, ServiceError::NotFound { kind: "Task", ref id } if id == "missing"));
    assert_eq!(err.to_string(), "Task not found");

    let err = service.update_task("missing", Task::new("x")).unwrap_err();
    assert!(matches!(err, ServiceError::NotFound { .. }));
}

#[test]
fn delete_is_idempotent_and_missing_ids_succeed() {
    let repo = Arc::new(InMemoryRepository::<Task>::new());
    let service = TaskService::new(Arc::clone(&repo));
    let kept = service.create_task(Task::new("keep")).unwrap();
    let dropped = service.create_task(Task::new("drop")).unwrap();
    let dropped_id = dropped.id.unwrap();

    service.delete_task(&dropped_id).unwrap();
    service.delete_task(&dropped_id).unwrap();
    service.delete_task("never-existed").unwrap();

    let remaining = repo.list().unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, kept.id);
}
